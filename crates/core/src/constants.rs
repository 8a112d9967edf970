/// Fixed initial assessment fee, charged before active work begins
pub const ASSESSMENT_FEE_UNITS: i64 = 300;

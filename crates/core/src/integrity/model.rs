//! Integrity domain models.

use serde::{Deserialize, Serialize};

/// Kinds of cached-total drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IntegrityIssueKind {
    /// A material's `total_price` differs from quantity x unit price
    MaterialTotalMismatch,
    /// `total_paid` differs from the paid milestones plus the assessment fee
    PaidTotalMismatch,
    /// `total_amount` differs from the approved quote's amount
    AmountTotalMismatch,
}

impl IntegrityIssueKind {
    /// Returns the string representation of this issue kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            IntegrityIssueKind::MaterialTotalMismatch => "MATERIAL_TOTAL_MISMATCH",
            IntegrityIssueKind::PaidTotalMismatch => "PAID_TOTAL_MISMATCH",
            IntegrityIssueKind::AmountTotalMismatch => "AMOUNT_TOTAL_MISMATCH",
        }
    }
}

/// One detected inconsistency on a project record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegrityIssue {
    pub kind: IntegrityIssueKind,
    pub project_id: String,
    /// Set when the issue concerns a single material line item
    #[serde(skip_serializing_if = "Option::is_none")]
    pub material_id: Option<String>,
    /// Human-readable description of the drift
    pub message: String,
}

//! Integrity module - cached-aggregate drift detection.
//!
//! Project records carry cached totals (`total_paid`, `total_amount`,
//! material `total_price`) written by the quoting and payments side. The
//! summary layer sums them as-is, so drift propagates silently; these
//! checks surface it as reportable issues without ever failing. Running
//! them is optional and read-only.

mod checks;
mod model;

pub use checks::{check_project, check_records};
pub use model::{IntegrityIssue, IntegrityIssueKind};

//! Status label lookups, one per status domain.
//!
//! The same raw string renders differently depending on what it describes
//! ("pending" is "Pending Review" on a project but "Awaiting Approval" on a
//! quote), so each domain gets its own lookup. All lookups are total.

use super::display_model::{Severity, StatusLabel};
use crate::projects::{
    MILESTONE_STATUS_COMPLETED, MILESTONE_STATUS_IN_PROGRESS, MILESTONE_STATUS_PENDING,
    PAYMENT_STATUS_PAID, PAYMENT_STATUS_PENDING, PROJECT_STATUS_APPROVED,
    PROJECT_STATUS_COMPLETED, PROJECT_STATUS_IN_PROGRESS, PROJECT_STATUS_PENDING,
    PROJECT_STATUS_QUOTED, PROJECT_STATUS_REJECTED, QUOTE_STATUS_APPROVED, QUOTE_STATUS_PENDING,
    QUOTE_STATUS_REJECTED,
};

/// Badge for a project lifecycle status.
pub fn project_status_label(status: &str) -> StatusLabel {
    match status {
        s if s == PROJECT_STATUS_PENDING => StatusLabel::known("Pending Review", Severity::Neutral),
        s if s == PROJECT_STATUS_QUOTED => StatusLabel::known("Quote Ready", Severity::Neutral),
        s if s == PROJECT_STATUS_APPROVED => StatusLabel::known("Approved", Severity::Success),
        s if s == PROJECT_STATUS_IN_PROGRESS => {
            StatusLabel::known("In Progress", Severity::Warning)
        }
        s if s == PROJECT_STATUS_COMPLETED => StatusLabel::known("Completed", Severity::Success),
        s if s == PROJECT_STATUS_REJECTED => StatusLabel::known("Rejected", Severity::Danger),
        other => StatusLabel::Unknown {
            raw: other.to_string(),
        },
    }
}

/// Badge for a quote status.
pub fn quote_status_label(status: &str) -> StatusLabel {
    match status {
        s if s == QUOTE_STATUS_PENDING => StatusLabel::known("Awaiting Approval", Severity::Neutral),
        s if s == QUOTE_STATUS_APPROVED => StatusLabel::known("Approved", Severity::Success),
        s if s == QUOTE_STATUS_REJECTED => StatusLabel::known("Rejected", Severity::Danger),
        other => StatusLabel::Unknown {
            raw: other.to_string(),
        },
    }
}

/// Badge for a milestone execution status.
pub fn milestone_status_label(status: &str) -> StatusLabel {
    match status {
        s if s == MILESTONE_STATUS_PENDING => StatusLabel::known("Pending", Severity::Neutral),
        s if s == MILESTONE_STATUS_IN_PROGRESS => {
            StatusLabel::known("In Progress", Severity::Warning)
        }
        s if s == MILESTONE_STATUS_COMPLETED => StatusLabel::known("Completed", Severity::Success),
        other => StatusLabel::Unknown {
            raw: other.to_string(),
        },
    }
}

/// Badge for a milestone payment status.
pub fn payment_status_label(status: &str) -> StatusLabel {
    match status {
        s if s == PAYMENT_STATUS_PENDING => StatusLabel::known("Pending", Severity::Neutral),
        s if s == PAYMENT_STATUS_PAID => StatusLabel::known("Paid", Severity::Success),
        other => StatusLabel::Unknown {
            raw: other.to_string(),
        },
    }
}

/// Badge for a complaint status.
pub fn complaint_status_label(status: &str) -> StatusLabel {
    match status {
        "pending" => StatusLabel::known("Pending", Severity::Neutral),
        "in-progress" => StatusLabel::known("In Progress", Severity::Warning),
        "resolved" => StatusLabel::known("Resolved", Severity::Success),
        other => StatusLabel::Unknown {
            raw: other.to_string(),
        },
    }
}

/// Badge for a warranty status.
pub fn warranty_status_label(status: &str) -> StatusLabel {
    match status {
        "active" => StatusLabel::known("Active", Severity::Success),
        "expired" => StatusLabel::known("Expired", Severity::Danger),
        other => StatusLabel::Unknown {
            raw: other.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_status_labels() {
        let cases = [
            ("pending", "Pending Review", Severity::Neutral),
            ("quoted", "Quote Ready", Severity::Neutral),
            ("approved", "Approved", Severity::Success),
            ("in-progress", "In Progress", Severity::Warning),
            ("completed", "Completed", Severity::Success),
            ("rejected", "Rejected", Severity::Danger),
        ];
        for (raw, label, severity) in cases {
            let badge = project_status_label(raw);
            assert_eq!(badge.text(), label, "label for {}", raw);
            assert_eq!(badge.severity(), severity, "severity for {}", raw);
        }
    }

    #[test]
    fn test_quote_pending_differs_from_project_pending() {
        assert_eq!(quote_status_label("pending").text(), "Awaiting Approval");
        assert_eq!(project_status_label("pending").text(), "Pending Review");
    }

    #[test]
    fn test_payment_status_labels() {
        assert_eq!(payment_status_label("paid").severity(), Severity::Success);
        assert_eq!(
            payment_status_label("pending").severity(),
            Severity::Neutral
        );
    }

    #[test]
    fn test_complaint_and_warranty_labels() {
        assert_eq!(complaint_status_label("resolved").text(), "Resolved");
        assert_eq!(
            complaint_status_label("in-progress").severity(),
            Severity::Warning
        );
        assert_eq!(warranty_status_label("active").severity(), Severity::Success);
        assert_eq!(warranty_status_label("expired").severity(), Severity::Danger);
    }

    #[test]
    fn test_unknown_status_echoes_raw_value() {
        let badge = project_status_label("archived");
        assert_eq!(
            badge,
            StatusLabel::Unknown {
                raw: "archived".to_string()
            }
        );
        assert_eq!(badge.text(), "archived");
        assert_eq!(badge.severity(), Severity::Neutral);
    }

    #[test]
    fn test_lookup_never_errors_on_odd_input() {
        for raw in ["", "   ", "RESOLVED", "status-with-dashes"] {
            let badge = complaint_status_label(raw);
            assert_eq!(badge.text(), raw);
        }
    }
}

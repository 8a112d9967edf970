//! Cached-total reconciliation checks.

use rust_decimal::Decimal;

use super::model::{IntegrityIssue, IntegrityIssueKind};
use crate::constants::ASSESSMENT_FEE_UNITS;
use crate::projects::{MilestonePaymentStatus, Project, QuoteStatus};

/// Reconciles one record's cached totals against its line items.
///
/// Total over any input: a malformed record produces issues, never an
/// error. The expected `total_paid` counts the assessment fee whenever the
/// flag is set, which is the convention the payment commands maintain.
pub fn check_project(project: &Project) -> Vec<IntegrityIssue> {
    let mut issues = Vec::new();

    if let Some(quote) = &project.quote {
        for material in &quote.materials {
            let expected = material.quantity * material.unit_price;
            if material.total_price != expected {
                issues.push(IntegrityIssue {
                    kind: IntegrityIssueKind::MaterialTotalMismatch,
                    project_id: project.id.clone(),
                    material_id: Some(material.id.clone()),
                    message: format!(
                        "Material '{}' caches total {} but {} x {} = {}",
                        material.name,
                        material.total_price,
                        material.quantity,
                        material.unit_price,
                        expected
                    ),
                });
            }
        }

        if quote.status == QuoteStatus::Approved && project.total_amount != quote.amount {
            issues.push(IntegrityIssue {
                kind: IntegrityIssueKind::AmountTotalMismatch,
                project_id: project.id.clone(),
                material_id: None,
                message: format!(
                    "Record caches total amount {} but the approved quote is {}",
                    project.total_amount, quote.amount
                ),
            });
        }
    }

    let mut expected_paid: Decimal = project
        .milestones
        .iter()
        .filter(|m| m.payment_status == MilestonePaymentStatus::Paid)
        .map(|m| m.payment_due)
        .sum();
    if project.assessment_paid {
        expected_paid += Decimal::from(ASSESSMENT_FEE_UNITS);
    }
    if project.total_paid != expected_paid {
        issues.push(IntegrityIssue {
            kind: IntegrityIssueKind::PaidTotalMismatch,
            project_id: project.id.clone(),
            material_id: None,
            message: format!(
                "Record caches total paid {} but settled payments sum to {}",
                project.total_paid, expected_paid
            ),
        });
    }

    issues
}

/// Reconciles every record in the snapshot.
pub fn check_records(records: &[Project]) -> Vec<IntegrityIssue> {
    records.iter().flat_map(check_project).collect()
}

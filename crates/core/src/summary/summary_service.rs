use chrono::Datelike;
use log::debug;
use num_traits::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::sync::Arc;

use super::summary_model::{
    DashboardSummary, PaymentEvent, PaymentEventKind, PaymentProgress, PendingPayment,
};
use crate::constants::ASSESSMENT_FEE_UNITS;
use crate::projects::{
    MilestonePaymentStatus, MilestoneStatus, Project, ProjectRepositoryTrait, ProjectStatus,
};
use crate::Result;

/// Projects that count as active engagements: status quoted, approved, or
/// in-progress. Input order is preserved.
pub fn active_projects(records: &[Project]) -> Vec<Project> {
    records
        .iter()
        .filter(|p| p.status.is_active())
        .cloned()
        .collect()
}

/// Projects that have been completed, in input order.
pub fn completed_projects(records: &[Project]) -> Vec<Project> {
    records
        .iter()
        .filter(|p| p.status == ProjectStatus::Completed)
        .cloned()
        .collect()
}

/// Sum of the cached `total_paid` fields.
///
/// The cached values are summed as-is; drifted records propagate into the
/// total. The integrity checks exist to surface that drift.
pub fn total_paid_across_all(records: &[Project]) -> Decimal {
    records.iter().map(|p| p.total_paid).sum()
}

/// Sum of the cached `total_amount` fields.
pub fn total_value_across_all(records: &[Project]) -> Decimal {
    records.iter().map(|p| p.total_amount).sum()
}

/// The dashboard's headline values over one snapshot.
pub fn dashboard_summary(records: &[Project]) -> DashboardSummary {
    DashboardSummary {
        active_projects: records.iter().filter(|p| p.status.is_active()).count(),
        total_paid: total_paid_across_all(records),
        total_value: total_value_across_all(records),
        completed_projects: records
            .iter()
            .filter(|p| p.status == ProjectStatus::Completed)
            .count(),
    }
}

/// Settled payments across all records, newest first.
///
/// Each record contributes one synthetic assessment event (dated at record
/// creation) when its assessment fee is paid, plus one event per paid
/// milestone. A paid milestone without a completion date falls back to the
/// record's `updated_at`. The sort is stable, so events sharing a date keep
/// their input order.
pub fn payment_history(records: &[Project]) -> Vec<PaymentEvent> {
    let mut events = Vec::new();

    for project in records {
        if project.assessment_paid {
            events.push(PaymentEvent {
                id: format!("assess-{}", project.id),
                project_id: project.id.clone(),
                project_title: project.title.clone(),
                kind: PaymentEventKind::Assessment,
                label: "Assessment".to_string(),
                amount: Decimal::from(ASSESSMENT_FEE_UNITS),
                date: project.created_at,
            });
        }

        for milestone in &project.milestones {
            if milestone.payment_status == MilestonePaymentStatus::Paid {
                events.push(PaymentEvent {
                    id: format!("milestone-{}", milestone.id),
                    project_id: project.id.clone(),
                    project_title: project.title.clone(),
                    kind: PaymentEventKind::Milestone,
                    label: milestone.name.clone(),
                    amount: milestone.payment_due,
                    date: milestone.completed_at.unwrap_or(project.updated_at),
                });
            }
        }
    }

    events.sort_by(|a, b| b.date.cmp(&a.date));
    events
}

/// Completed milestones whose payment is still outstanding, flattened
/// across all records in input order.
pub fn pending_payments(records: &[Project]) -> Vec<PendingPayment> {
    records
        .iter()
        .flat_map(|project| {
            project
                .milestones
                .iter()
                .filter(|m| {
                    m.status == MilestoneStatus::Completed
                        && m.payment_status == MilestonePaymentStatus::Pending
                })
                .map(|m| PendingPayment {
                    project_id: project.id.clone(),
                    project_title: project.title.clone(),
                    milestone: m.clone(),
                })
        })
        .collect()
}

/// Payment progress of a single record.
///
/// A record whose cached `total_amount` is zero has no quote to measure
/// against and yields the explicit `NoQuoteYet` state rather than a
/// division-by-zero artifact.
pub fn percent_complete(project: &Project) -> PaymentProgress {
    if project.total_amount <= Decimal::ZERO {
        return PaymentProgress::NoQuoteYet;
    }
    let ratio = project.total_paid / project.total_amount * Decimal::ONE_HUNDRED;
    // Half-way values round away from zero, matching conventional display
    // rounding (17.65% -> 18%).
    let rounded = ratio.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    PaymentProgress::Percent(rounded.to_u32().unwrap_or(0))
}

/// Count of records that have received any payment.
pub fn projects_with_payments(records: &[Project]) -> usize {
    records
        .iter()
        .filter(|p| p.total_paid > Decimal::ZERO)
        .count()
}

/// Sum of settled payments falling inside one calendar month.
pub fn total_paid_in_month(records: &[Project], year: i32, month: u32) -> Decimal {
    payment_history(records)
        .iter()
        .filter(|e| e.date.year() == year && e.date.month() == month)
        .map(|e| e.amount)
        .sum()
}

/// Trait for the summary service operations.
pub trait SummaryServiceTrait: Send + Sync {
    fn get_dashboard_summary(&self) -> Result<DashboardSummary>;
    fn get_active_projects(&self) -> Result<Vec<Project>>;
    fn get_completed_projects(&self) -> Result<Vec<Project>>;
    fn get_payment_history(&self) -> Result<Vec<PaymentEvent>>;
    fn get_pending_payments(&self) -> Result<Vec<PendingPayment>>;
    fn get_payment_progress(&self, project_id: &str) -> Result<PaymentProgress>;
}

/// Service computing derived views over the project repository snapshot.
pub struct SummaryService {
    project_repository: Arc<dyn ProjectRepositoryTrait>,
}

impl SummaryService {
    pub fn new(project_repository: Arc<dyn ProjectRepositoryTrait>) -> Self {
        SummaryService { project_repository }
    }
}

impl SummaryServiceTrait for SummaryService {
    fn get_dashboard_summary(&self) -> Result<DashboardSummary> {
        debug!("Computing dashboard summary...");
        let records = self.project_repository.list()?;
        Ok(dashboard_summary(&records))
    }

    fn get_active_projects(&self) -> Result<Vec<Project>> {
        let records = self.project_repository.list()?;
        Ok(active_projects(&records))
    }

    fn get_completed_projects(&self) -> Result<Vec<Project>> {
        let records = self.project_repository.list()?;
        Ok(completed_projects(&records))
    }

    fn get_payment_history(&self) -> Result<Vec<PaymentEvent>> {
        debug!("Computing payment history...");
        let records = self.project_repository.list()?;
        Ok(payment_history(&records))
    }

    fn get_pending_payments(&self) -> Result<Vec<PendingPayment>> {
        let records = self.project_repository.list()?;
        Ok(pending_payments(&records))
    }

    fn get_payment_progress(&self, project_id: &str) -> Result<PaymentProgress> {
        let project = self.project_repository.get_by_id(project_id)?;
        Ok(percent_complete(&project))
    }
}

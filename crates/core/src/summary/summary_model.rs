//! Summary domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::projects::Milestone;

/// The four headline values shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    /// Projects with status quoted, approved, or in-progress
    pub active_projects: usize,
    /// Sum of the cached `total_paid` fields across all records
    pub total_paid: Decimal,
    /// Sum of the cached `total_amount` fields across all records
    pub total_value: Decimal,
    /// Projects with status completed
    pub completed_projects: usize,
}

/// Kind of a payment-history event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentEventKind {
    /// The fixed initial assessment fee
    Assessment,
    /// A milestone payment
    Milestone,
}

/// One settled payment, derived from a project record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentEvent {
    pub id: String,
    pub project_id: String,
    pub project_title: String,
    pub kind: PaymentEventKind,
    /// Display label: "Assessment" or the milestone name
    pub label: String,
    pub amount: Decimal,
    pub date: NaiveDate,
}

/// A completed milestone whose payment is still outstanding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingPayment {
    pub project_id: String,
    pub project_title: String,
    pub milestone: Milestone,
}

/// Payment progress of a single project.
///
/// `NoQuoteYet` is the explicit zero-denominator state: a record with no
/// approved quote has no defined percentage, and callers render it as
/// "no quote yet" instead of a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PaymentProgress {
    NoQuoteYet,
    /// Share of the quoted amount paid so far, rounded to the nearest
    /// whole percent
    Percent(u32),
}

//! Summary module - the derived-data layer behind the dashboard and
//! payments views.
//!
//! Everything here is a pure computation over a snapshot of project
//! records; nothing is cached and nothing is mutated.

mod summary_model;
mod summary_service;

#[cfg(test)]
mod summary_service_tests;

pub use summary_model::{
    DashboardSummary, PaymentEvent, PaymentEventKind, PaymentProgress, PendingPayment,
};
pub use summary_service::{
    active_projects, completed_projects, dashboard_summary, payment_history, pending_payments,
    percent_complete, projects_with_payments, total_paid_across_all, total_paid_in_month,
    total_value_across_all, SummaryService, SummaryServiceTrait,
};

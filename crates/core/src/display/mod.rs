//! Display module - maps raw status values to badge labels.
//!
//! The portal renders statuses it does not own; the selector is a total
//! lookup that never fails, and values outside the known taxonomies come
//! back as an explicit `Unknown` so callers can still echo them.

mod display_model;
mod display_service;

pub use display_model::{Severity, StatusLabel};
pub use display_service::{
    complaint_status_label, milestone_status_label, payment_status_label, project_status_label,
    quote_status_label, warranty_status_label,
};

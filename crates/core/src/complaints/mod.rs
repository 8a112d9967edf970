//! Complaints module - post-completion issue reports and warranties.

mod complaints_errors;
mod complaints_model;
mod complaints_service;
mod complaints_traits;

#[cfg(test)]
mod complaints_service_tests;

pub use complaints_errors::ComplaintError;
pub use complaints_model::{
    Complaint, ComplaintPriority, ComplaintStatus, NewComplaint, Warranty, WarrantyStatus,
};
pub use complaints_service::ComplaintService;
pub use complaints_traits::{
    ComplaintRepositoryTrait, ComplaintServiceTrait, WarrantyRepositoryTrait,
};

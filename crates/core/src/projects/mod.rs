//! Projects module - domain models, services, and traits.
//!
//! A project is a customer "interest": a tiling job tracked from the first
//! inquiry through quoting, milestone execution, and completion.

mod projects_constants;
mod projects_errors;
mod projects_model;
mod projects_service;
mod projects_traits;


// Re-export the public interface
pub use projects_constants::*;
pub use projects_errors::ProjectError;
pub use projects_model::{
    Material, Milestone, MilestonePaymentStatus, MilestoneStatus, NewProject, Project,
    ProjectStatus, Quote, QuoteStatus,
};
pub use projects_service::ProjectService;
pub use projects_traits::{ProjectRepositoryTrait, ProjectServiceTrait};

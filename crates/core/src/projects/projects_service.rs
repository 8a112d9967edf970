use chrono::Utc;
use log::debug;
use rust_decimal::Decimal;
use std::sync::Arc;

use super::projects_model::{NewProject, Project, ProjectStatus};
use super::projects_traits::{ProjectRepositoryTrait, ProjectServiceTrait};
use crate::errors::Result;

/// Service for reading project records and issuing lifecycle commands.
///
/// Commands compute the new immutable record and persist it through the
/// repository as a wholesale replacement.
pub struct ProjectService {
    repository: Arc<dyn ProjectRepositoryTrait>,
}

impl ProjectService {
    /// Creates a new ProjectService instance
    pub fn new(repository: Arc<dyn ProjectRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl ProjectServiceTrait for ProjectService {
    /// Retrieves a project by its ID
    fn get_project(&self, project_id: &str) -> Result<Project> {
        self.repository.get_by_id(project_id)
    }

    /// Lists all projects in registration order
    fn get_all_projects(&self) -> Result<Vec<Project>> {
        self.repository.list()
    }

    /// Registers a new project interest.
    ///
    /// The record starts in `Pending` status with no quote, no milestones,
    /// and zero totals; quoting happens on the operations side.
    async fn register_interest(&self, new_project: NewProject) -> Result<Project> {
        debug!("Registering interest: {}", new_project.title);
        new_project.validate()?;

        let today = Utc::now().date_naive();
        let project = Project {
            id: uuid::Uuid::new_v4().to_string(),
            title: new_project.title,
            description: new_project.description,
            category: new_project.category,
            status: ProjectStatus::Pending,
            created_at: today,
            updated_at: today,
            quote: None,
            milestones: Vec::new(),
            assessment_paid: false,
            total_paid: Decimal::ZERO,
            total_amount: Decimal::ZERO,
            location: Some(new_project.location),
            timeline: new_project.timeline,
            budget: new_project.budget,
        };

        self.repository.create(project).await
    }

    /// Approves a pending quote and persists the updated record
    async fn approve_quote(&self, project_id: &str) -> Result<Project> {
        debug!("Approving quote for project {}", project_id);
        let project = self.repository.get_by_id(project_id)?;
        let updated = project.with_quote_approved(Utc::now().date_naive())?;
        self.repository.update(updated).await
    }

    /// Rejects a pending quote and persists the updated record
    async fn reject_quote(&self, project_id: &str) -> Result<Project> {
        debug!("Rejecting quote for project {}", project_id);
        let project = self.repository.get_by_id(project_id)?;
        let updated = project.with_quote_rejected(Utc::now().date_naive())?;
        self.repository.update(updated).await
    }

    /// Records payment for a completed milestone
    async fn pay_milestone(&self, project_id: &str, milestone_id: &str) -> Result<Project> {
        debug!(
            "Recording milestone payment, project: {}, milestone: {}",
            project_id, milestone_id
        );
        let project = self.repository.get_by_id(project_id)?;
        let updated = project.with_milestone_paid(milestone_id, Utc::now().date_naive())?;
        self.repository.update(updated).await
    }

    /// Records the initial assessment fee as paid
    async fn pay_assessment(&self, project_id: &str) -> Result<Project> {
        debug!("Recording assessment payment for project {}", project_id);
        let project = self.repository.get_by_id(project_id)?;
        let updated = project.with_assessment_paid(Utc::now().date_naive())?;
        self.repository.update(updated).await
    }
}

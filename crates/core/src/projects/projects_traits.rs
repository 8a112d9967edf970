use async_trait::async_trait;

use super::projects_model::{NewProject, Project};
use crate::errors::Result;

/// Trait defining the contract for project repository operations.
///
/// Records are replaced wholesale on update; field-level mutation is the
/// repository implementation's concern, never the caller's.
#[async_trait]
pub trait ProjectRepositoryTrait: Send + Sync {
    fn get_by_id(&self, project_id: &str) -> Result<Project>;
    fn list(&self) -> Result<Vec<Project>>;
    async fn create(&self, project: Project) -> Result<Project>;
    async fn update(&self, project: Project) -> Result<Project>;
}

/// Trait defining the contract for project service operations.
#[async_trait]
pub trait ProjectServiceTrait: Send + Sync {
    fn get_project(&self, project_id: &str) -> Result<Project>;
    fn get_all_projects(&self) -> Result<Vec<Project>>;
    async fn register_interest(&self, new_project: NewProject) -> Result<Project>;
    async fn approve_quote(&self, project_id: &str) -> Result<Project>;
    async fn reject_quote(&self, project_id: &str) -> Result<Project>;
    async fn pay_milestone(&self, project_id: &str, milestone_id: &str) -> Result<Project>;
    async fn pay_assessment(&self, project_id: &str) -> Result<Project>;
}

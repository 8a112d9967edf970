use async_trait::async_trait;
use log::debug;
use std::sync::RwLock;

use tilefolio_core::projects::{Project, ProjectRepositoryTrait};
use tilefolio_core::{Error, Result};

/// Project store backed by process memory.
///
/// Records keep their insertion order, which is the order every listing
/// reflects. Updates replace the record wholesale by id.
pub struct MemoryProjectRepository {
    projects: RwLock<Vec<Project>>,
}

impl MemoryProjectRepository {
    /// Creates an empty repository
    pub fn new() -> Self {
        Self {
            projects: RwLock::new(Vec::new()),
        }
    }

    /// Creates a repository pre-loaded with the given records
    pub fn with_projects(projects: Vec<Project>) -> Self {
        Self {
            projects: RwLock::new(projects),
        }
    }
}

impl Default for MemoryProjectRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProjectRepositoryTrait for MemoryProjectRepository {
    fn get_by_id(&self, project_id: &str) -> Result<Project> {
        self.projects
            .read()
            .unwrap()
            .iter()
            .find(|p| p.id == project_id)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("Project {}", project_id)))
    }

    fn list(&self) -> Result<Vec<Project>> {
        Ok(self.projects.read().unwrap().clone())
    }

    async fn create(&self, project: Project) -> Result<Project> {
        debug!("Storing new project {}", project.id);
        let mut projects = self.projects.write().unwrap();
        if projects.iter().any(|p| p.id == project.id) {
            return Err(Error::Repository(format!(
                "Project {} already exists",
                project.id
            )));
        }
        projects.push(project.clone());
        Ok(project)
    }

    async fn update(&self, project: Project) -> Result<Project> {
        debug!("Replacing project {}", project.id);
        let mut projects = self.projects.write().unwrap();
        let slot = projects
            .iter_mut()
            .find(|p| p.id == project.id)
            .ok_or_else(|| Error::NotFound(format!("Project {}", project.id)))?;
        *slot = project.clone();
        Ok(project)
    }
}

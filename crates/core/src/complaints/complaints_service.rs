use chrono::Utc;
use log::debug;
use std::sync::Arc;

use super::complaints_model::{Complaint, ComplaintStatus, NewComplaint, Warranty};
use super::complaints_traits::{
    ComplaintRepositoryTrait, ComplaintServiceTrait, WarrantyRepositoryTrait,
};
use crate::errors::Result;

/// Service for reading and raising complaints and reading warranties.
pub struct ComplaintService {
    complaint_repository: Arc<dyn ComplaintRepositoryTrait>,
    warranty_repository: Arc<dyn WarrantyRepositoryTrait>,
}

impl ComplaintService {
    /// Creates a new ComplaintService instance
    pub fn new(
        complaint_repository: Arc<dyn ComplaintRepositoryTrait>,
        warranty_repository: Arc<dyn WarrantyRepositoryTrait>,
    ) -> Self {
        Self {
            complaint_repository,
            warranty_repository,
        }
    }
}

#[async_trait::async_trait]
impl ComplaintServiceTrait for ComplaintService {
    /// Lists the customer's complaints in submission order
    fn get_complaints(&self) -> Result<Vec<Complaint>> {
        self.complaint_repository.list()
    }

    /// Lists the customer's warranties
    fn get_warranties(&self) -> Result<Vec<Warranty>> {
        self.warranty_repository.list()
    }

    /// Registers a new complaint in pending status
    async fn submit_complaint(&self, new_complaint: NewComplaint) -> Result<Complaint> {
        debug!("Submitting complaint: {}", new_complaint.title);
        new_complaint.validate()?;

        let complaint = Complaint {
            id: uuid::Uuid::new_v4().to_string(),
            title: new_complaint.title,
            description: new_complaint.description,
            status: ComplaintStatus::Pending,
            created_at: Utc::now().date_naive(),
            project: new_complaint.project,
            priority: new_complaint.priority,
        };

        self.complaint_repository.create(complaint).await
    }
}

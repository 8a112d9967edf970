use async_trait::async_trait;

use super::complaints_model::{Complaint, NewComplaint, Warranty};
use crate::errors::Result;

/// Trait defining the contract for complaint repository operations.
#[async_trait]
pub trait ComplaintRepositoryTrait: Send + Sync {
    fn list(&self) -> Result<Vec<Complaint>>;
    async fn create(&self, complaint: Complaint) -> Result<Complaint>;
}

/// Trait defining the contract for warranty repository operations.
///
/// Warranties are issued by the operations side; the portal only reads
/// them.
pub trait WarrantyRepositoryTrait: Send + Sync {
    fn list(&self) -> Result<Vec<Warranty>>;
}

/// Trait defining the contract for complaint service operations.
#[async_trait]
pub trait ComplaintServiceTrait: Send + Sync {
    fn get_complaints(&self) -> Result<Vec<Complaint>>;
    fn get_warranties(&self) -> Result<Vec<Warranty>>;
    async fn submit_complaint(&self, new_complaint: NewComplaint) -> Result<Complaint>;
}

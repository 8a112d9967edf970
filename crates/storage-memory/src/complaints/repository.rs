use async_trait::async_trait;
use log::debug;
use std::sync::RwLock;

use tilefolio_core::complaints::{
    Complaint, ComplaintRepositoryTrait, Warranty, WarrantyRepositoryTrait,
};
use tilefolio_core::Result;

/// Complaint store backed by process memory.
pub struct MemoryComplaintRepository {
    complaints: RwLock<Vec<Complaint>>,
}

impl MemoryComplaintRepository {
    pub fn new() -> Self {
        Self {
            complaints: RwLock::new(Vec::new()),
        }
    }

    pub fn with_complaints(complaints: Vec<Complaint>) -> Self {
        Self {
            complaints: RwLock::new(complaints),
        }
    }
}

impl Default for MemoryComplaintRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ComplaintRepositoryTrait for MemoryComplaintRepository {
    fn list(&self) -> Result<Vec<Complaint>> {
        Ok(self.complaints.read().unwrap().clone())
    }

    async fn create(&self, complaint: Complaint) -> Result<Complaint> {
        debug!("Storing new complaint {}", complaint.id);
        self.complaints.write().unwrap().push(complaint.clone());
        Ok(complaint)
    }
}

/// Warranty store backed by process memory. Read-only: warranties are
/// issued by the operations side.
pub struct MemoryWarrantyRepository {
    warranties: Vec<Warranty>,
}

impl MemoryWarrantyRepository {
    pub fn with_warranties(warranties: Vec<Warranty>) -> Self {
        Self { warranties }
    }
}

impl WarrantyRepositoryTrait for MemoryWarrantyRepository {
    fn list(&self) -> Result<Vec<Warranty>> {
        Ok(self.warranties.clone())
    }
}

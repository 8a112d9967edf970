//! In-memory storage implementation for complaints and warranties.

mod repository;

pub use repository::{MemoryComplaintRepository, MemoryWarrantyRepository};

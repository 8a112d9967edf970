//! In-memory storage implementation for Tilefolio.
//!
//! This crate implements the repository traits defined in `tilefolio-core`
//! over plain process memory, and ships the seeded demo dataset the portal
//! runs against. There is no persistence: the modeled system has no
//! backend, and records live only for the lifetime of the process.
//!
//! ```text
//! core (domain)
//!       │
//!       ▼
//! storage-memory (this crate)
//!       │
//!       ▼
//!   process memory
//! ```
//!
//! A real storage engine would replace this crate behind the same traits.

// Repository implementations
pub mod complaints;
pub mod projects;
pub mod sessions;
pub mod settings;

// Seeded demo dataset
pub mod seed;

pub use complaints::{MemoryComplaintRepository, MemoryWarrantyRepository};
pub use projects::MemoryProjectRepository;
pub use sessions::MemorySessionStore;
pub use settings::MemorySettingsRepository;

//! In-memory storage implementation for settings.

mod repository;

pub use repository::MemorySettingsRepository;

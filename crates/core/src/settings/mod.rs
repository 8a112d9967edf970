//! Settings module - customer profile and notification preferences.

mod settings_model;
mod settings_service;
mod settings_traits;

pub use settings_model::{NotificationPreferences, Profile};
pub use settings_service::{SettingsService, SettingsServiceTrait};
pub use settings_traits::SettingsRepositoryTrait;

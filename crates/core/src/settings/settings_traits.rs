//! Repository traits for settings.

use async_trait::async_trait;

use crate::errors::Result;
use crate::settings::{NotificationPreferences, Profile};

/// Repository trait for managing the customer's settings.
#[async_trait]
pub trait SettingsRepositoryTrait: Send + Sync {
    fn get_profile(&self) -> Result<Profile>;
    async fn update_profile(&self, profile: &Profile) -> Result<()>;
    fn get_preferences(&self) -> Result<NotificationPreferences>;
    async fn update_preferences(&self, preferences: &NotificationPreferences) -> Result<()>;
}

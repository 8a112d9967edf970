use async_trait::async_trait;
use std::sync::RwLock;

use tilefolio_core::settings::{NotificationPreferences, Profile, SettingsRepositoryTrait};
use tilefolio_core::Result;

/// Settings store backed by process memory.
pub struct MemorySettingsRepository {
    profile: RwLock<Profile>,
    preferences: RwLock<NotificationPreferences>,
}

impl MemorySettingsRepository {
    /// Creates a store with an empty profile and default preferences
    pub fn new() -> Self {
        Self {
            profile: RwLock::new(Profile::default()),
            preferences: RwLock::new(NotificationPreferences::default()),
        }
    }

    /// Creates a store pre-loaded with the given profile
    pub fn with_profile(profile: Profile) -> Self {
        Self {
            profile: RwLock::new(profile),
            preferences: RwLock::new(NotificationPreferences::default()),
        }
    }
}

impl Default for MemorySettingsRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SettingsRepositoryTrait for MemorySettingsRepository {
    fn get_profile(&self) -> Result<Profile> {
        Ok(self.profile.read().unwrap().clone())
    }

    async fn update_profile(&self, profile: &Profile) -> Result<()> {
        *self.profile.write().unwrap() = profile.clone();
        Ok(())
    }

    fn get_preferences(&self) -> Result<NotificationPreferences> {
        Ok(*self.preferences.read().unwrap())
    }

    async fn update_preferences(&self, preferences: &NotificationPreferences) -> Result<()> {
        *self.preferences.write().unwrap() = *preferences;
        Ok(())
    }
}

use super::SettingsRepositoryTrait;
use crate::errors::Result;
use crate::settings::{NotificationPreferences, Profile};
use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

// Define the trait for SettingsService
#[async_trait]
pub trait SettingsServiceTrait: Send + Sync {
    fn get_profile(&self) -> Result<Profile>;

    async fn update_profile(&self, profile: &Profile) -> Result<()>;

    fn get_preferences(&self) -> Result<NotificationPreferences>;

    async fn update_preferences(&self, preferences: &NotificationPreferences) -> Result<()>;
}

pub struct SettingsService {
    settings_repository: Arc<dyn SettingsRepositoryTrait>,
}

// Implement the trait for SettingsService
#[async_trait]
impl SettingsServiceTrait for SettingsService {
    fn get_profile(&self) -> Result<Profile> {
        self.settings_repository.get_profile()
    }

    async fn update_profile(&self, profile: &Profile) -> Result<()> {
        debug!("Updating profile for {}", profile.email);
        profile.validate()?;
        self.settings_repository.update_profile(profile).await
    }

    fn get_preferences(&self) -> Result<NotificationPreferences> {
        self.settings_repository.get_preferences()
    }

    async fn update_preferences(&self, preferences: &NotificationPreferences) -> Result<()> {
        debug!("Updating notification preferences");
        self.settings_repository.update_preferences(preferences).await
    }
}

impl SettingsService {
    pub fn new(settings_repository: Arc<dyn SettingsRepositoryTrait>) -> Self {
        SettingsService {
            settings_repository,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockSettingsRepository {
        profile: Mutex<Profile>,
        preferences: Mutex<NotificationPreferences>,
    }

    #[async_trait]
    impl SettingsRepositoryTrait for MockSettingsRepository {
        fn get_profile(&self) -> Result<Profile> {
            Ok(self.profile.lock().unwrap().clone())
        }

        async fn update_profile(&self, profile: &Profile) -> Result<()> {
            *self.profile.lock().unwrap() = profile.clone();
            Ok(())
        }

        fn get_preferences(&self) -> Result<NotificationPreferences> {
            Ok(*self.preferences.lock().unwrap())
        }

        async fn update_preferences(&self, preferences: &NotificationPreferences) -> Result<()> {
            *self.preferences.lock().unwrap() = *preferences;
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_profile_round_trip() {
        let service = SettingsService::new(Arc::new(MockSettingsRepository::default()));
        let profile = Profile {
            name: "John Construction".to_string(),
            email: "john@construtech.com".to_string(),
            company: "ConstructTech Solutions".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            address: "123 Construction Ave, Builder City".to_string(),
        };

        service.update_profile(&profile).await.unwrap();
        assert_eq!(service.get_profile().unwrap(), profile);
    }

    #[tokio::test]
    async fn test_update_profile_requires_name_and_email() {
        let service = SettingsService::new(Arc::new(MockSettingsRepository::default()));
        let profile = Profile {
            email: "john@construtech.com".to_string(),
            ..Profile::default()
        };

        assert!(service.update_profile(&profile).await.is_err());
    }

    #[tokio::test]
    async fn test_preferences_default_and_update() {
        let service = SettingsService::new(Arc::new(MockSettingsRepository::default()));

        let defaults = service.get_preferences().unwrap();
        assert!(defaults.email_notifications);
        assert!(!defaults.sms_notifications);
        assert!(defaults.payment_reminders);

        let updated = NotificationPreferences {
            marketing_emails: true,
            ..defaults
        };
        service.update_preferences(&updated).await.unwrap();
        assert_eq!(service.get_preferences().unwrap(), updated);
    }
}

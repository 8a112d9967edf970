//! Settings domain models.

use serde::{Deserialize, Serialize};

use crate::{errors::ValidationError, Error, Result};

/// The customer's contact profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub company: String,
    pub phone: String,
    pub address: String,
}

impl Profile {
    /// Validates the profile data.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Name cannot be empty".to_string(),
            )));
        }
        if self.email.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Email cannot be empty".to_string(),
            )));
        }
        Ok(())
    }
}

/// Per-channel notification switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPreferences {
    pub email_notifications: bool,
    pub sms_notifications: bool,
    pub project_updates: bool,
    pub payment_reminders: bool,
    pub marketing_emails: bool,
}

impl Default for NotificationPreferences {
    fn default() -> Self {
        Self {
            email_notifications: true,
            sms_notifications: false,
            project_updates: true,
            payment_reminders: true,
            marketing_emails: false,
        }
    }
}

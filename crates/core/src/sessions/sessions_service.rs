use chrono::Utc;
use log::debug;
use std::sync::Arc;

use super::sessions_model::{Credentials, Session, User};
use super::sessions_traits::{AuthServiceTrait, SessionStoreTrait};
use crate::sessions::AuthError;
use crate::{Error, Result};

/// Service for signing customers in and out.
///
/// Verification is a mock: a single demo credential pair configured at
/// construction. A real identity provider would slot in behind the same
/// trait.
pub struct AuthService {
    store: Arc<dyn SessionStoreTrait>,
    demo_credentials: Credentials,
    demo_user: User,
}

impl AuthService {
    /// Creates a new AuthService instance
    pub fn new(
        store: Arc<dyn SessionStoreTrait>,
        demo_credentials: Credentials,
        demo_user: User,
    ) -> Self {
        Self {
            store,
            demo_credentials,
            demo_user,
        }
    }
}

#[async_trait::async_trait]
impl AuthServiceTrait for AuthService {
    /// Verifies the credentials and persists a fresh session.
    async fn login(&self, credentials: &Credentials) -> Result<Session> {
        debug!("Login attempt for {}", credentials.email);

        if credentials.email != self.demo_credentials.email
            || credentials.password != self.demo_credentials.password
        {
            return Err(Error::Auth(AuthError::InvalidCredentials));
        }

        let session = Session {
            user: self.demo_user.clone(),
            issued_at: Utc::now(),
        };
        self.store.save(&session).await?;
        Ok(session)
    }

    /// Clears any persisted session.
    async fn logout(&self) -> Result<()> {
        debug!("Logging out");
        self.store.clear().await
    }

    /// Returns the persisted session, if one exists.
    fn current_session(&self) -> Result<Option<Session>> {
        self.store.load()
    }
}

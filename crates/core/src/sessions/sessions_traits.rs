use async_trait::async_trait;

use super::sessions_model::{Credentials, Session};
use crate::errors::Result;

/// Trait defining the contract for session persistence.
///
/// These are the explicit load/save lifecycle hooks the composition root
/// drives; nothing else touches stored session state.
#[async_trait]
pub trait SessionStoreTrait: Send + Sync {
    fn load(&self) -> Result<Option<Session>>;
    async fn save(&self, session: &Session) -> Result<()>;
    async fn clear(&self) -> Result<()>;
}

/// Trait defining the contract for authentication operations.
#[async_trait]
pub trait AuthServiceTrait: Send + Sync {
    async fn login(&self, credentials: &Credentials) -> Result<Session>;
    async fn logout(&self) -> Result<()>;
    fn current_session(&self) -> Result<Option<Session>>;
}

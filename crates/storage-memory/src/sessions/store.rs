use async_trait::async_trait;
use std::sync::RwLock;

use tilefolio_core::sessions::{Session, SessionStoreTrait};
use tilefolio_core::Result;

/// Session store backed by process memory.
///
/// Stands in for the browser-local persistence of the original portal; the
/// session disappears with the process.
pub struct MemorySessionStore {
    session: RwLock<Option<Session>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self {
            session: RwLock::new(None),
        }
    }
}

impl Default for MemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionStoreTrait for MemorySessionStore {
    fn load(&self) -> Result<Option<Session>> {
        Ok(self.session.read().unwrap().clone())
    }

    async fn save(&self, session: &Session) -> Result<()> {
        *self.session.write().unwrap() = Some(session.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        *self.session.write().unwrap() = None;
        Ok(())
    }
}

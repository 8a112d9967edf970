//! Sessions module - explicit session lifecycle.
//!
//! The session is an ordinary value owned by the composition root and
//! persisted through `SessionStoreTrait`; there is no global auth state.
//! Credential verification is mocked against a single configured demo
//! account until a real identity service exists.

mod sessions_errors;
mod sessions_model;
mod sessions_service;
mod sessions_traits;


pub use sessions_errors::AuthError;
pub use sessions_model::{Credentials, Session, User};
pub use sessions_service::AuthService;
pub use sessions_traits::{AuthServiceTrait, SessionStoreTrait};

//! Session-based authentication core: credential storage and
//! verification, session lifecycle, and the route guards built on top.

pub mod config;
pub mod guard;
pub mod password;
pub mod session;
pub mod store;
pub mod token;
pub mod verify;

#[cfg(test)]
mod tests;

use uuid::Uuid;

/// Durable reference to a registered user, distinct from their session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identity {
    pub user_id: Uuid,
    pub username: String,
}

/// Per-request classification derived fresh from the session cookie.
#[derive(Debug)]
pub enum AuthOutcome {
    Authenticated(Identity),
    Unauthenticated,
}

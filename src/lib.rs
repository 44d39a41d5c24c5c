//! # Custodia
//!
//! `custodia` is a small demonstration web application built around a
//! session-based authentication gate: public home page, registration,
//! login, logout, and a single protected page.
//!
//! ## Authentication model
//!
//! - Passwords are derived with Argon2id (per-record random salt, PHC
//!   string storage); the plaintext is discarded right after derivation.
//! - Sessions are opaque random tokens carried in an `HttpOnly` cookie;
//!   the database stores only a SHA-256 hash of the token, together with
//!   an expiry timestamp.
//! - Routes are gated by two symmetric middleware guards: signed-in users
//!   are redirected away from the login/registration forms, and anonymous
//!   requests for the protected page are redirected to `/login`.
//!
//! Unknown usernames and wrong passwords are indistinguishable to the
//! client, and a dummy Argon2 verification runs for unknown usernames so
//! response timing does not leak which usernames exist.

pub mod cli;
pub mod custodia;

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_user_agent_format() {
        assert!(APP_USER_AGENT.starts_with(env!("CARGO_PKG_NAME")));
        assert!(APP_USER_AGENT.contains(env!("CARGO_PKG_VERSION")));
    }
}

//! Credential verification.

use anyhow::{Context, Result};
use secrecy::SecretString;
use sqlx::PgPool;

use super::{password, store, Identity};

/// Outcome of a login attempt. Unknown usernames and wrong passwords are
/// deliberately the same variant.
#[derive(Debug)]
pub enum VerifyOutcome {
    Authenticated(Identity),
    InvalidCredentials,
}

/// Check a username/password pair against the credential store.
///
/// Argon2 runs on the blocking pool so a login attempt never stalls
/// unrelated request processing. When the username is unknown, a dummy
/// verification burns the same CPU as the real path.
pub async fn verify_credentials(
    pool: &PgPool,
    username: &str,
    password: SecretString,
) -> Result<VerifyOutcome> {
    let Some(record) = store::find_by_username(pool, username).await? else {
        tokio::task::spawn_blocking(move || password::verify_against_dummy(&password))
            .await
            .context("dummy verification task failed")?;
        return Ok(VerifyOutcome::InvalidCredentials);
    };

    let stored_hash = record.password_hash;
    let matched =
        tokio::task::spawn_blocking(move || password::verify_password(&password, &stored_hash))
            .await
            .context("verification task failed")??;

    if matched {
        Ok(VerifyOutcome::Authenticated(Identity {
            user_id: record.user_id,
            username: record.username,
        }))
    } else {
        Ok(VerifyOutcome::InvalidCredentials)
    }
}

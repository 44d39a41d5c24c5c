//! Session lifecycle and the cookie that carries the token.

use anyhow::Result;
use axum::http::{
    header::{InvalidHeaderValue, COOKIE},
    HeaderMap, HeaderValue,
};
use sqlx::PgPool;
use uuid::Uuid;

use super::{config::AuthConfig, store, token::hash_session_token, AuthOutcome};

pub const SESSION_COOKIE_NAME: &str = "custodia_session";

/// Open a session for an authenticated identity and return the raw token.
///
/// Expired rows for the same user are swept first so the sessions table
/// does not accumulate stale entries.
pub async fn start_session(pool: &PgPool, config: &AuthConfig, user_id: Uuid) -> Result<String> {
    store::delete_expired_sessions(pool, user_id).await?;
    store::insert_session(pool, user_id, config.session_ttl_seconds()).await
}

/// Resolve the request's cookie to an authentication outcome.
///
/// Missing, malformed, or expired tokens are `Unauthenticated`, not an
/// error; only storage failures are.
pub async fn resolve_session(pool: &PgPool, headers: &HeaderMap) -> Result<AuthOutcome> {
    let Some(token) = extract_session_token(headers) else {
        return Ok(AuthOutcome::Unauthenticated);
    };
    // Only the hash is stored; never compare raw tokens against the database.
    let token_hash = hash_session_token(&token);
    Ok(match store::lookup_session(pool, &token_hash).await? {
        Some(identity) => AuthOutcome::Authenticated(identity),
        None => AuthOutcome::Unauthenticated,
    })
}

/// Delete the session named by the request's cookie, if any. Idempotent.
pub async fn end_session(pool: &PgPool, headers: &HeaderMap) -> Result<()> {
    if let Some(token) = extract_session_token(headers) {
        let token_hash = hash_session_token(&token);
        store::delete_session(pool, &token_hash).await?;
    }
    Ok(())
}

/// Build a secure `HttpOnly` cookie for the session token.
pub fn session_cookie(config: &AuthConfig, token: &str) -> Result<HeaderValue, InvalidHeaderValue> {
    let ttl_seconds = config.session_ttl_seconds();
    let mut cookie = format!(
        "{SESSION_COOKIE_NAME}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={ttl_seconds}"
    );
    if config.cookie_secure() {
        cookie.push_str("; Secure");
    }
    HeaderValue::from_str(&cookie)
}

pub fn clear_session_cookie(config: &AuthConfig) -> Result<HeaderValue, InvalidHeaderValue> {
    let mut cookie = format!("{SESSION_COOKIE_NAME}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0");
    if config.cookie_secure() {
        cookie.push_str("; Secure");
    }
    HeaderValue::from_str(&cookie)
}

pub fn extract_session_token(headers: &HeaderMap) -> Option<String> {
    let header = headers.get(COOKIE)?;
    let value = header.to_str().ok()?;
    for pair in value.split(';') {
        let trimmed = pair.trim();
        let mut parts = trimmed.splitn(2, '=');
        let key = parts.next()?.trim();
        let val = parts.next()?.trim();
        if key == SESSION_COOKIE_NAME {
            return Some(val.to_string());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_cookie_sets_expected_flags() {
        let config = AuthConfig::new().with_session_ttl_seconds(3600);
        let cookie = session_cookie(&config, "tok").unwrap();
        let cookie = cookie.to_str().unwrap();
        assert_eq!(
            cookie,
            "custodia_session=tok; Path=/; HttpOnly; SameSite=Lax; Max-Age=3600"
        );
    }

    #[test]
    fn session_cookie_secure_flag_is_opt_in() {
        let config = AuthConfig::new().with_cookie_secure(true);
        let cookie = session_cookie(&config, "tok").unwrap();
        assert!(cookie.to_str().unwrap().ends_with("; Secure"));
    }

    #[test]
    fn clear_session_cookie_zeroes_max_age() {
        let config = AuthConfig::new();
        let cookie = clear_session_cookie(&config).unwrap();
        let cookie = cookie.to_str().unwrap();
        assert!(cookie.starts_with("custodia_session=;"));
        assert!(cookie.contains("Max-Age=0"));
    }

    #[test]
    fn extract_session_token_finds_cookie_among_others() {
        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_static("theme=dark; custodia_session=abc123; lang=en"),
        );
        assert_eq!(extract_session_token(&headers), Some("abc123".to_string()));
    }

    #[test]
    fn extract_session_token_missing_or_foreign_cookie() {
        let headers = HeaderMap::new();
        assert_eq!(extract_session_token(&headers), None);

        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static("theme=dark"));
        assert_eq!(extract_session_token(&headers), None);
    }
}

//! Runtime knobs for sessions and cookies.

const DEFAULT_SESSION_TTL_SECONDS: i64 = 12 * 60 * 60;

#[derive(Clone, Debug)]
pub struct AuthConfig {
    session_ttl_seconds: i64,
    cookie_secure: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthConfig {
    #[must_use]
    pub fn new() -> Self {
        Self {
            session_ttl_seconds: DEFAULT_SESSION_TTL_SECONDS,
            cookie_secure: false,
        }
    }

    #[must_use]
    pub fn with_session_ttl_seconds(mut self, seconds: i64) -> Self {
        self.session_ttl_seconds = seconds;
        self
    }

    #[must_use]
    pub fn with_cookie_secure(mut self, secure: bool) -> Self {
        self.cookie_secure = secure;
        self
    }

    #[must_use]
    pub fn session_ttl_seconds(&self) -> i64 {
        self.session_ttl_seconds
    }

    /// Only mark cookies secure when served over HTTPS.
    #[must_use]
    pub fn cookie_secure(&self) -> bool {
        self.cookie_secure
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_twelve_hours_and_insecure_cookies() {
        let config = AuthConfig::new();
        assert_eq!(config.session_ttl_seconds(), 43200);
        assert!(!config.cookie_secure());
    }

    #[test]
    fn builders_override_defaults() {
        let config = AuthConfig::new()
            .with_session_ttl_seconds(3600)
            .with_cookie_secure(true);
        assert_eq!(config.session_ttl_seconds(), 3600);
        assert!(config.cookie_secure());
    }
}

pub mod health;
pub use self::health::health;

pub mod pages;
pub use self::pages::{home, secret};

pub mod user_register;
pub use self::user_register::{register, register_form};

pub mod user_login;
pub use self::user_login::{login, login_form};

pub mod user_logout;
pub use self::user_logout::logout;

// common functions for the handlers
use crate::custodia::auth::{config::AuthConfig, session::session_cookie};
use axum::{
    http::{header::SET_COOKIE, HeaderMap, StatusCode},
    response::{IntoResponse, Redirect, Response},
};
use regex::Regex;
use secrecy::{ExposeSecret, SecretString};
use tracing::error;

pub const MIN_PASSWORD_CHARS: usize = 8;

pub fn valid_username(username: &str) -> bool {
    Regex::new(r"^[A-Za-z0-9_.-]{3,32}$").is_ok_and(|re| re.is_match(username))
}

pub fn valid_password(password: &SecretString) -> bool {
    password.expose_secret().chars().count() >= MIN_PASSWORD_CHARS
}

/// Attach the session cookie and send the fresh session to the
/// protected page.
pub(crate) fn signed_in_response(config: &AuthConfig, token: &str) -> Response {
    match session_cookie(config, token) {
        Ok(cookie) => {
            let mut headers = HeaderMap::new();
            headers.insert(SET_COOKIE, cookie);
            (headers, Redirect::to("/secret")).into_response()
        }
        Err(err) => {
            error!("Failed to build session cookie: {err}");
            generic_error()
        }
    }
}

/// Storage and other non-recoverable failures all look the same to the
/// client.
pub(crate) fn generic_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "Something went wrong".to_string(),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_username_accepts_reasonable_names() {
        assert!(valid_username("nate"));
        assert!(valid_username("alice.b-c_99"));
    }

    #[test]
    fn valid_username_rejects_bad_names() {
        assert!(!valid_username(""));
        assert!(!valid_username("ab"));
        assert!(!valid_username("has space"));
        assert!(!valid_username("way@too@strange"));
        assert!(!valid_username(&"x".repeat(33)));
    }

    #[test]
    fn valid_password_is_a_length_floor() {
        assert!(valid_password(&SecretString::from("12345678".to_string())));
        assert!(!valid_password(&SecretString::from("1234567".to_string())));
    }

    #[test]
    fn signed_in_response_sets_cookie_and_redirects() {
        let config = AuthConfig::new();
        let response = signed_in_response(&config, "tok");
        assert!(response.status().is_redirection());
        let cookie = response.headers().get(SET_COOKIE).unwrap();
        assert!(cookie.to_str().unwrap().starts_with("custodia_session=tok"));
        assert_eq!(
            response.headers().get("location").unwrap().to_str().unwrap(),
            "/secret"
        );
    }
}

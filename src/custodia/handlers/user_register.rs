use axum::{
    extract::Extension,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Form,
};
use secrecy::SecretString;
use serde::Deserialize;
use sqlx::PgPool;
use std::sync::Arc;
use tracing::{debug, error, instrument};

use super::{generic_error, pages::register_page, signed_in_response, valid_password, valid_username};
use crate::custodia::auth::{
    config::AuthConfig,
    password::hash_password,
    session::start_session,
    store::{create_user, CreateOutcome},
};

/// Registration form payload. The password deserializes straight into a
/// `SecretString` so it never shows up in debug output.
#[derive(Deserialize, Debug)]
pub struct RegisterForm {
    username: String,
    password: SecretString,
}

// axum handler for the registration form
pub async fn register_form() -> Html<String> {
    register_page(None)
}

// axum handler for user signup
#[instrument(skip(pool, config, payload))]
pub async fn register(
    pool: Extension<PgPool>,
    config: Extension<Arc<AuthConfig>>,
    payload: Option<Form<RegisterForm>>,
) -> Response {
    let form: RegisterForm = match payload {
        Some(Form(payload)) => payload,
        None => {
            return (
                StatusCode::BAD_REQUEST,
                register_page(Some("Missing form data")),
            )
                .into_response()
        }
    };

    let username = form.username.trim().to_string();

    if !valid_username(&username) {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            register_page(Some(
                "Usernames are 3-32 characters: letters, digits, '.', '-' or '_'",
            )),
        )
            .into_response();
    }

    if !valid_password(&form.password) {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            register_page(Some("Passwords need at least 8 characters")),
        )
            .into_response();
    }

    // Argon2 is deliberately expensive; keep it off the async workers.
    // The plaintext is dropped with the closure.
    let password = form.password;
    let password_hash = match tokio::task::spawn_blocking(move || hash_password(&password)).await {
        Ok(Ok(hash)) => hash,
        Ok(Err(err)) => {
            error!("Error hashing password: {err}");
            return generic_error();
        }
        Err(err) => {
            error!("Hashing task failed: {err}");
            return generic_error();
        }
    };

    match create_user(&pool, &username, &password_hash).await {
        Ok(CreateOutcome::Created(identity)) => {
            debug!("Registered user {}", identity.username);
            match start_session(&pool, &config, identity.user_id).await {
                Ok(token) => signed_in_response(&config, &token),
                Err(err) => {
                    error!("Error starting session: {err}");
                    generic_error()
                }
            }
        }
        Ok(CreateOutcome::DuplicateIdentity) => (
            StatusCode::CONFLICT,
            register_page(Some("That username is already taken")),
        )
            .into_response(),
        Err(err) => {
            error!("Error inserting user: {err}");
            generic_error()
        }
    }
}

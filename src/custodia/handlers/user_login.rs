use axum::{
    extract::Extension,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use secrecy::SecretString;
use serde::Deserialize;
use sqlx::PgPool;
use std::sync::Arc;
use tracing::{debug, error, instrument};

use super::{generic_error, pages::login_page, signed_in_response};
use crate::custodia::auth::{
    config::AuthConfig,
    session::start_session,
    verify::{verify_credentials, VerifyOutcome},
};

#[derive(Deserialize, Debug)]
pub struct LoginForm {
    username: String,
    password: SecretString,
}

// axum handler for the login form
pub async fn login_form() -> Html<String> {
    login_page()
}

// axum handler for user login
#[instrument(skip(pool, config, payload))]
pub async fn login(
    pool: Extension<PgPool>,
    config: Extension<Arc<AuthConfig>>,
    payload: Option<Form<LoginForm>>,
) -> Response {
    // A mangled form gets the same answer as bad credentials.
    let Some(Form(form)) = payload else {
        return Redirect::to("/login").into_response();
    };

    let username = form.username.trim().to_string();

    match verify_credentials(&pool, &username, form.password).await {
        Ok(VerifyOutcome::Authenticated(identity)) => {
            debug!("Login successful");
            match start_session(&pool, &config, identity.user_id).await {
                Ok(token) => signed_in_response(&config, &token),
                Err(err) => {
                    error!("Error starting session: {err}");
                    generic_error()
                }
            }
        }
        Ok(VerifyOutcome::InvalidCredentials) => {
            debug!("Invalid credentials");
            Redirect::to("/login").into_response()
        }
        Err(err) => {
            error!("Error verifying credentials: {err}");
            generic_error()
        }
    }
}

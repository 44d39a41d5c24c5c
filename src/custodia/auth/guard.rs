//! Route guards: two symmetric middleware functions over the per-request
//! authentication outcome.
//!
//! Guards only classify and redirect; session state changes happen in
//! the login/logout handlers, never here.

use axum::{
    extract::{Extension, Request},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use sqlx::PgPool;
use tracing::error;

use super::{session::resolve_session, AuthOutcome};
use crate::custodia::handlers::generic_error;

/// Let authenticated requests through; redirect the rest to `/login`.
///
/// On success the resolved [`super::Identity`] is inserted into the
/// request extensions for the downstream handler.
pub async fn require_authenticated(
    Extension(pool): Extension<PgPool>,
    mut request: Request,
    next: Next,
) -> Response {
    match resolve_session(&pool, request.headers()).await {
        Ok(AuthOutcome::Authenticated(identity)) => {
            request.extensions_mut().insert(identity);
            next.run(request).await
        }
        Ok(AuthOutcome::Unauthenticated) => Redirect::to("/login").into_response(),
        Err(err) => {
            error!("Failed to resolve session: {err}");
            generic_error()
        }
    }
}

/// Inverse guard for the login and registration forms: signed-in users
/// are sent back to the home page.
pub async fn require_unauthenticated(
    Extension(pool): Extension<PgPool>,
    request: Request,
    next: Next,
) -> Response {
    match resolve_session(&pool, request.headers()).await {
        Ok(AuthOutcome::Unauthenticated) => next.run(request).await,
        Ok(AuthOutcome::Authenticated(_)) => Redirect::to("/").into_response(),
        Err(err) => {
            error!("Failed to resolve session: {err}");
            generic_error()
        }
    }
}

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    server::{
        error::AppError,
        middleware::{
            auth::{can, AuthGuard, Permission},
            session::{AuthSession, CsrfSession},
        },
        service::auth::GoogleAuthService,
        state::AppState,
    },
    view::path,
};

/// Query parameters Google appends to the callback URL.
#[derive(Deserialize)]
pub struct CallbackParams {
    /// CSRF state token to be validated against the session value.
    pub state: String,
    /// Authorization code to exchange for an access token.
    pub code: String,
}

/// Redirects to Google's consent screen.
///
/// Logged-in users are sent back to the landing page instead.
pub async fn login(State(state): State<AppState>, session: Session) -> Result<Response, AppError> {
    let actor = AuthGuard::new(&state.db, &session).current_user().await?;
    if !can(actor.as_ref(), Permission::Login) {
        return Ok(Redirect::to("/").into_response());
    }

    let auth_service = GoogleAuthService::new(&state.db, &state.http_client, &state.oauth_client);
    let (url, csrf_token) = auth_service.login_url();

    CsrfSession::new(&session)
        .set_token(csrf_token.secret().to_string())
        .await?;

    Ok(Redirect::to(url.as_str()).into_response())
}

/// Completes the login started by [`login`].
///
/// # Returns
/// - `303 See Other` - To the user's profile after a successful login
/// - `400 Bad Request` - State does not match the session
/// - `500 Internal Server Error` - Token exchange or userinfo request failed
pub async fn callback(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<CallbackParams>,
) -> Result<Response, AppError> {
    CsrfSession::new(&session).validate(&params.state).await?;

    let auth_service = GoogleAuthService::new(&state.db, &state.http_client, &state.oauth_client);
    let user = auth_service.callback(params.code).await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    Ok(Redirect::to(&path::user(&user.slug)).into_response())
}

pub async fn logout(State(state): State<AppState>, session: Session) -> Result<Response, AppError> {
    let actor = AuthGuard::new(&state.db, &session).current_user().await?;

    if can(actor.as_ref(), Permission::Logout) {
        AuthSession::new(&session).clear().await;
    }

    Ok(Redirect::to("/").into_response())
}

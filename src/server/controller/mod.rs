//! HTTP request handlers.
//!
//! Each handler resolves the path segments to domain models (unknown ones are a 404),
//! checks the actor against the authorization predicate, verifies the form token on
//! writes, calls a service and either renders a page or redirects. Validation failures
//! re-render the submitted form with status 422.

pub mod auth;
pub mod book;
pub mod highlight;
pub mod home;
pub mod shelf;
pub mod user;

use axum::extract::Multipart;
use tower_sessions::Session;

use crate::{
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, session::FormTokenSession},
        model::user::User,
        state::AppState,
    },
    view::ViewContext,
};

/// Builds the view context for a request that may be anonymous.
pub(crate) async fn view_context(state: &AppState, session: &Session) -> Result<ViewContext, AppError> {
    let current_user = AuthGuard::new(&state.db, session).current_user().await?;
    let csrf_token = FormTokenSession::new(session).token().await?;

    Ok(ViewContext {
        current_user,
        csrf_token,
    })
}

/// Builds the view context for a request that needs a logged-in user.
///
/// # Returns
/// - `Ok((User, ViewContext))` - Acting user and the context rendering as them
/// - `Err(AuthError::UserNotInSession)` - Anonymous request, answered with a redirect
pub(crate) async fn login_context(
    state: &AppState,
    session: &Session,
) -> Result<(User, ViewContext), AppError> {
    let actor = AuthGuard::new(&state.db, session).require_login().await?;
    let csrf_token = FormTokenSession::new(session).token().await?;

    let ctx = ViewContext {
        current_user: Some(actor.clone()),
        csrf_token,
    };

    Ok((actor, ctx))
}

/// Checks the token submitted with a form against the session.
pub(crate) async fn verify_form_token(session: &Session, submitted: &str) -> Result<(), AppError> {
    FormTokenSession::new(session).verify(submitted).await
}

/// Parses a numeric id path segment. Anything else is an unknown resource.
pub(crate) fn parse_id(segment: &str, resource: &str) -> Result<i32, AppError> {
    segment
        .parse::<i32>()
        .map_err(|_| AppError::NotFound(format!("{} '{}'", resource, segment)))
}

/// Image upload form contents.
#[derive(Debug, Default)]
pub(crate) struct ImageUpload {
    pub csrf_token: String,
    pub image: Vec<u8>,
}

/// Reads the `csrf_token` and `image` fields of a multipart upload.
///
/// Unknown fields are skipped.
pub(crate) async fn read_image_upload(mut multipart: Multipart) -> Result<ImageUpload, AppError> {
    let mut upload = ImageUpload::default();

    while let Some(field) = multipart.next_field().await? {
        match field.name() {
            Some("csrf_token") => upload.csrf_token = field.text().await?,
            Some("image") => upload.image = field.bytes().await?.to_vec(),
            _ => {}
        }
    }

    Ok(upload)
}

use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use crate::{
    server::{controller::view_context, error::AppError, state::AppState},
    view::{self, path},
};

/// Landing page, or the visitor's own profile when logged in.
pub async fn index(State(state): State<AppState>, session: Session) -> Result<Response, AppError> {
    let ctx = view_context(&state, &session).await?;

    if let Some(user) = &ctx.current_user {
        return Ok(Redirect::to(&path::user(&user.slug)).into_response());
    }

    Ok(view::home::index(ctx))
}

pub async fn privacy(State(state): State<AppState>, session: Session) -> Result<Response, AppError> {
    let ctx = view_context(&state, &session).await?;

    Ok(view::home::privacy(ctx))
}

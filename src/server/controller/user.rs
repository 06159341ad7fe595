use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Form,
};
use tower_sessions::Session;

use crate::{
    model::user::UserFormDto,
    server::{
        controller::{login_context, verify_form_token, view_context},
        error::AppError,
        middleware::auth::{AuthGuard, Permission, UserAction},
        model::user::UpdateUserParam,
        service::user::UserService,
        state::AppState,
        util::validation::ValidationErrors,
    },
    view::{self, path},
};

/// Profile page with the user's shelves and books.
pub async fn show(
    State(state): State<AppState>,
    session: Session,
    Path(slug): Path<String>,
) -> Result<Response, AppError> {
    let ctx = view_context(&state, &session).await?;
    let user_service = UserService::new(&state.db);

    let user = user_service.find_by_slug(&slug).await?;
    let profile = user_service.profile(&user).await?;

    Ok(view::user::show(ctx, user, profile))
}

pub async fn edit(
    State(state): State<AppState>,
    session: Session,
    Path(slug): Path<String>,
) -> Result<Response, AppError> {
    let (actor, ctx) = login_context(&state, &session).await?;
    let user = UserService::new(&state.db).find_by_slug(&slug).await?;

    AuthGuard::authorize(Some(&actor), Permission::User(&user, UserAction::Edit))?;

    let form = user.to_form();
    Ok(view::user::edit(
        ctx,
        user,
        form,
        ValidationErrors::new(),
        StatusCode::OK,
    ))
}

pub async fn update(
    State(state): State<AppState>,
    session: Session,
    Path(slug): Path<String>,
    Form(form): Form<UserFormDto>,
) -> Result<Response, AppError> {
    let (actor, ctx) = login_context(&state, &session).await?;
    let user_service = UserService::new(&state.db);
    let user = user_service.find_by_slug(&slug).await?;

    AuthGuard::authorize(Some(&actor), Permission::User(&user, UserAction::Edit))?;
    verify_form_token(&session, &form.csrf_token).await?;

    let param = match UpdateUserParam::from_form(&form) {
        Ok(param) => param,
        Err(errors) => {
            return Ok(view::user::edit(
                ctx,
                user,
                form,
                errors,
                StatusCode::UNPROCESSABLE_ENTITY,
            ))
        }
    };

    let user = user_service.update(&user, param).await?;

    Ok(Redirect::to(&path::user(&user.slug)).into_response())
}

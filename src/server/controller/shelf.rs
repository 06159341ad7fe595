use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Form,
};
use tower_sessions::Session;

use crate::{
    model::{common::CsrfFormDto, shelf::ShelfFormDto},
    server::{
        controller::{login_context, parse_id, verify_form_token},
        error::AppError,
        middleware::auth::{AuthGuard, Permission, ShelfAction, UserAction},
        model::{
            shelf::{Shelf, ShelfParam},
            user::User,
        },
        service::{shelf::ShelfService, user::UserService},
        state::AppState,
        util::validation::ValidationErrors,
    },
    view::{self, path},
};

/// Resolves the `{user}` and `{shelf}` path segments.
async fn find_shelf(state: &AppState, slug: &str, shelf_id: &str) -> Result<(User, Shelf), AppError> {
    let shelf_id = parse_id(shelf_id, "Shelf")?;
    let owner = UserService::new(&state.db).find_by_slug(slug).await?;
    let shelf = ShelfService::new(&state.db).find(owner.id, shelf_id).await?;

    Ok((owner, shelf))
}

pub async fn index(
    State(state): State<AppState>,
    session: Session,
    Path(slug): Path<String>,
) -> Result<Response, AppError> {
    let (actor, ctx) = login_context(&state, &session).await?;
    let owner = UserService::new(&state.db).find_by_slug(&slug).await?;

    AuthGuard::authorize(Some(&actor), Permission::User(&owner, UserAction::ListShelves))?;

    let shelves = ShelfService::new(&state.db).list(owner.id).await?;

    Ok(view::shelf::index(ctx, owner, shelves))
}

pub async fn new(
    State(state): State<AppState>,
    session: Session,
    Path(slug): Path<String>,
) -> Result<Response, AppError> {
    let (actor, ctx) = login_context(&state, &session).await?;
    let owner = UserService::new(&state.db).find_by_slug(&slug).await?;

    AuthGuard::authorize(Some(&actor), Permission::User(&owner, UserAction::CreateShelf))?;

    Ok(view::shelf::new(
        ctx,
        owner,
        ShelfFormDto::default(),
        ValidationErrors::new(),
        StatusCode::OK,
    ))
}

/// Appends a new shelf after the owner's last one.
pub async fn create(
    State(state): State<AppState>,
    session: Session,
    Path(slug): Path<String>,
    Form(form): Form<ShelfFormDto>,
) -> Result<Response, AppError> {
    let (actor, ctx) = login_context(&state, &session).await?;
    let owner = UserService::new(&state.db).find_by_slug(&slug).await?;

    AuthGuard::authorize(Some(&actor), Permission::User(&owner, UserAction::CreateShelf))?;
    verify_form_token(&session, &form.csrf_token).await?;

    let param = match ShelfParam::from_form(&form) {
        Ok(param) => param,
        Err(errors) => {
            return Ok(view::shelf::new(
                ctx,
                owner,
                form,
                errors,
                StatusCode::UNPROCESSABLE_ENTITY,
            ))
        }
    };

    ShelfService::new(&state.db).create(owner.id, param).await?;

    Ok(Redirect::to(&path::shelves(&owner.slug)).into_response())
}

pub async fn edit(
    State(state): State<AppState>,
    session: Session,
    Path((slug, shelf_id)): Path<(String, String)>,
) -> Result<Response, AppError> {
    let (actor, ctx) = login_context(&state, &session).await?;
    let (owner, shelf) = find_shelf(&state, &slug, &shelf_id).await?;

    AuthGuard::authorize(Some(&actor), Permission::Shelf(&shelf, ShelfAction::Edit))?;

    let form = ShelfFormDto {
        name: shelf.name.clone(),
        ..Default::default()
    };
    Ok(view::shelf::edit(
        ctx,
        owner,
        shelf,
        form,
        ValidationErrors::new(),
        StatusCode::OK,
    ))
}

pub async fn update(
    State(state): State<AppState>,
    session: Session,
    Path((slug, shelf_id)): Path<(String, String)>,
    Form(form): Form<ShelfFormDto>,
) -> Result<Response, AppError> {
    let (actor, ctx) = login_context(&state, &session).await?;
    let (owner, shelf) = find_shelf(&state, &slug, &shelf_id).await?;

    AuthGuard::authorize(Some(&actor), Permission::Shelf(&shelf, ShelfAction::Edit))?;
    verify_form_token(&session, &form.csrf_token).await?;

    let param = match ShelfParam::from_form(&form) {
        Ok(param) => param,
        Err(errors) => {
            return Ok(view::shelf::edit(
                ctx,
                owner,
                shelf,
                form,
                errors,
                StatusCode::UNPROCESSABLE_ENTITY,
            ))
        }
    };

    ShelfService::new(&state.db).rename(&shelf, param).await?;

    Ok(Redirect::to(&path::shelves(&owner.slug)).into_response())
}

pub async fn move_up(
    State(state): State<AppState>,
    session: Session,
    Path((slug, shelf_id)): Path<(String, String)>,
    Form(form): Form<CsrfFormDto>,
) -> Result<Response, AppError> {
    let (actor, _) = login_context(&state, &session).await?;
    let (owner, shelf) = find_shelf(&state, &slug, &shelf_id).await?;

    AuthGuard::authorize(Some(&actor), Permission::Shelf(&shelf, ShelfAction::Up))?;
    verify_form_token(&session, &form.csrf_token).await?;

    ShelfService::new(&state.db).move_up(&shelf).await?;

    Ok(Redirect::to(&path::shelves(&owner.slug)).into_response())
}

pub async fn move_down(
    State(state): State<AppState>,
    session: Session,
    Path((slug, shelf_id)): Path<(String, String)>,
    Form(form): Form<CsrfFormDto>,
) -> Result<Response, AppError> {
    let (actor, _) = login_context(&state, &session).await?;
    let (owner, shelf) = find_shelf(&state, &slug, &shelf_id).await?;
    let shelf_service = ShelfService::new(&state.db);

    let last_position = shelf_service.last_position(owner.id).await?;
    AuthGuard::authorize(
        Some(&actor),
        Permission::Shelf(&shelf, ShelfAction::Down { last_position }),
    )?;
    verify_form_token(&session, &form.csrf_token).await?;

    shelf_service.move_down(&shelf).await?;

    Ok(Redirect::to(&path::shelves(&owner.slug)).into_response())
}

/// Deletes a shelf. Its books stay in the library without a shelf.
pub async fn delete(
    State(state): State<AppState>,
    session: Session,
    Path((slug, shelf_id)): Path<(String, String)>,
    Form(form): Form<CsrfFormDto>,
) -> Result<Response, AppError> {
    let (actor, _) = login_context(&state, &session).await?;
    let (owner, shelf) = find_shelf(&state, &slug, &shelf_id).await?;

    AuthGuard::authorize(Some(&actor), Permission::Shelf(&shelf, ShelfAction::Delete))?;
    verify_form_token(&session, &form.csrf_token).await?;

    ShelfService::new(&state.db).delete(&shelf).await?;

    Ok(Redirect::to(&path::shelves(&owner.slug)).into_response())
}

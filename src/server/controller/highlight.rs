use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Form,
};
use tower_sessions::Session;

use crate::{
    model::{common::CsrfFormDto, highlight::HighlightFormDto},
    server::{
        controller::{login_context, parse_id, read_image_upload, verify_form_token},
        error::AppError,
        middleware::auth::{AuthGuard, BookAction, Permission},
        model::{
            book::Book,
            highlight::{Highlight, HighlightParam},
            user::User,
        },
        service::{book::BookService, highlight::HighlightService, user::UserService},
        state::AppState,
        util::validation::ValidationErrors,
    },
    view::{self, path},
};

fn highlight_service(state: &AppState) -> HighlightService<'_> {
    HighlightService::new(&state.db, &state.highlight_images)
}

/// Resolves the `{user}` and `{isbn}` path segments.
async fn find_book(state: &AppState, slug: &str, isbn: &str) -> Result<(User, Book), AppError> {
    let owner = UserService::new(&state.db).find_by_slug(slug).await?;
    let book = BookService::new(&state.db, &state.book_images, &state.highlight_images)
        .find(owner.id, isbn)
        .await?;

    Ok((owner, book))
}

/// Resolves the `{user}`, `{isbn}` and `{id}` path segments.
async fn find_highlight(
    state: &AppState,
    slug: &str,
    isbn: &str,
    highlight_id: &str,
) -> Result<(User, Book, Highlight), AppError> {
    let highlight_id = parse_id(highlight_id, "Highlight")?;
    let (owner, book) = find_book(state, slug, isbn).await?;
    let highlight = highlight_service(state).find(book.id, highlight_id).await?;

    Ok((owner, book, highlight))
}

pub async fn new(
    State(state): State<AppState>,
    session: Session,
    Path((slug, isbn)): Path<(String, String)>,
) -> Result<Response, AppError> {
    let (actor, ctx) = login_context(&state, &session).await?;
    let (owner, book) = find_book(&state, &slug, &isbn).await?;

    AuthGuard::authorize(Some(&actor), Permission::Book(&book, BookAction::CreateHighlight))?;

    Ok(view::highlight::new(
        ctx,
        owner,
        book,
        HighlightFormDto::default(),
        ValidationErrors::new(),
        StatusCode::OK,
    ))
}

pub async fn create(
    State(state): State<AppState>,
    session: Session,
    Path((slug, isbn)): Path<(String, String)>,
    Form(form): Form<HighlightFormDto>,
) -> Result<Response, AppError> {
    let (actor, ctx) = login_context(&state, &session).await?;
    let (owner, book) = find_book(&state, &slug, &isbn).await?;

    AuthGuard::authorize(Some(&actor), Permission::Book(&book, BookAction::CreateHighlight))?;
    verify_form_token(&session, &form.csrf_token).await?;

    let param = match HighlightParam::from_form(&form) {
        Ok(param) => param,
        Err(errors) => {
            return Ok(view::highlight::new(
                ctx,
                owner,
                book,
                form,
                errors,
                StatusCode::UNPROCESSABLE_ENTITY,
            ))
        }
    };

    highlight_service(&state).create(book.id, param).await?;

    Ok(Redirect::to(&path::book(&owner.slug, &book.isbn)).into_response())
}

pub async fn edit(
    State(state): State<AppState>,
    session: Session,
    Path((slug, isbn, highlight_id)): Path<(String, String, String)>,
) -> Result<Response, AppError> {
    let (actor, ctx) = login_context(&state, &session).await?;
    let (owner, book, highlight) = find_highlight(&state, &slug, &isbn, &highlight_id).await?;

    AuthGuard::authorize(Some(&actor), Permission::Book(&book, BookAction::EditHighlight))?;

    let form = highlight.to_form();
    Ok(view::highlight::edit(
        ctx,
        owner,
        book,
        highlight,
        form,
        ValidationErrors::new(),
        StatusCode::OK,
    ))
}

pub async fn update(
    State(state): State<AppState>,
    session: Session,
    Path((slug, isbn, highlight_id)): Path<(String, String, String)>,
    Form(form): Form<HighlightFormDto>,
) -> Result<Response, AppError> {
    let (actor, ctx) = login_context(&state, &session).await?;
    let (owner, book, highlight) = find_highlight(&state, &slug, &isbn, &highlight_id).await?;

    AuthGuard::authorize(Some(&actor), Permission::Book(&book, BookAction::EditHighlight))?;
    verify_form_token(&session, &form.csrf_token).await?;

    let param = match HighlightParam::from_form(&form) {
        Ok(param) => param,
        Err(errors) => {
            return Ok(view::highlight::edit(
                ctx,
                owner,
                book,
                highlight,
                form,
                errors,
                StatusCode::UNPROCESSABLE_ENTITY,
            ))
        }
    };

    highlight_service(&state).update(&highlight, param).await?;

    Ok(Redirect::to(&path::book(&owner.slug, &book.isbn)).into_response())
}

/// Deletes the highlight and its image.
pub async fn delete(
    State(state): State<AppState>,
    session: Session,
    Path((slug, isbn, highlight_id)): Path<(String, String, String)>,
    Form(form): Form<CsrfFormDto>,
) -> Result<Response, AppError> {
    let (actor, _) = login_context(&state, &session).await?;
    let (owner, book, highlight) = find_highlight(&state, &slug, &isbn, &highlight_id).await?;

    AuthGuard::authorize(Some(&actor), Permission::Book(&book, BookAction::DeleteHighlight))?;
    verify_form_token(&session, &form.csrf_token).await?;

    highlight_service(&state).delete(&highlight).await?;

    Ok(Redirect::to(&path::book(&owner.slug, &book.isbn)).into_response())
}

pub async fn image_form(
    State(state): State<AppState>,
    session: Session,
    Path((slug, isbn, highlight_id)): Path<(String, String, String)>,
) -> Result<Response, AppError> {
    let (actor, ctx) = login_context(&state, &session).await?;
    let (owner, book, highlight) = find_highlight(&state, &slug, &isbn, &highlight_id).await?;

    AuthGuard::authorize(Some(&actor), Permission::Book(&book, BookAction::EditHighlight))?;

    Ok(view::highlight::image(
        ctx,
        owner,
        book,
        highlight,
        ValidationErrors::new(),
        StatusCode::OK,
    ))
}

pub async fn upload_image(
    State(state): State<AppState>,
    session: Session,
    Path((slug, isbn, highlight_id)): Path<(String, String, String)>,
    multipart: Multipart,
) -> Result<Response, AppError> {
    let (actor, ctx) = login_context(&state, &session).await?;
    let (owner, book, highlight) = find_highlight(&state, &slug, &isbn, &highlight_id).await?;

    AuthGuard::authorize(Some(&actor), Permission::Book(&book, BookAction::EditHighlight))?;

    let upload = read_image_upload(multipart).await?;
    verify_form_token(&session, &upload.csrf_token).await?;

    let mut errors = ValidationErrors::new();
    let Some(image) = errors.image("image", "Image", &upload.image, false) else {
        return Ok(view::highlight::image(
            ctx,
            owner,
            book,
            highlight,
            errors,
            StatusCode::UNPROCESSABLE_ENTITY,
        ));
    };

    highlight_service(&state).set_image(&highlight, image).await?;

    Ok(Redirect::to(&path::book(&owner.slug, &book.isbn)).into_response())
}

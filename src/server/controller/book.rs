use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Form,
};
use tower_sessions::Session;

use crate::{
    model::{
        book::{AssignShelfDto, BookFormDto, BookSearchQuery},
        common::CsrfFormDto,
    },
    server::{
        controller::{login_context, read_image_upload, verify_form_token, view_context},
        error::AppError,
        middleware::auth::{can, AuthGuard, BookAction, Permission, UserAction},
        model::{
            book::{Book, UpdateBookParam},
            user::User,
        },
        service::{
            book::BookService, google_books::GoogleBooksService, highlight::HighlightService,
            shelf::ShelfService, user::UserService,
        },
        state::AppState,
        util::validation::ValidationErrors,
    },
    view::{self, book::BookSearch, path},
};

fn book_service(state: &AppState) -> BookService<'_> {
    BookService::new(&state.db, &state.book_images, &state.highlight_images)
}

/// Resolves the `{user}` and `{isbn}` path segments.
async fn find_book(state: &AppState, slug: &str, isbn: &str) -> Result<(User, Book), AppError> {
    let owner = UserService::new(&state.db).find_by_slug(slug).await?;
    let book = book_service(state).find(owner.id, isbn).await?;

    Ok((owner, book))
}

/// Add book form. A `q` query searches Google Books and a `volume` query pre-fills the
/// form from one result. Catalog failures are logged and leave the form empty.
pub async fn new(
    State(state): State<AppState>,
    session: Session,
    Path(slug): Path<String>,
    Query(query): Query<BookSearchQuery>,
) -> Result<Response, AppError> {
    let (actor, ctx) = login_context(&state, &session).await?;
    let owner = UserService::new(&state.db).find_by_slug(&slug).await?;

    AuthGuard::authorize(Some(&actor), Permission::User(&owner, UserAction::CreateBook))?;

    let google_books = GoogleBooksService::new(&state.http_client);
    let keyword = query.q.trim().to_string();

    let form = match query.volume.trim() {
        "" => BookFormDto::default(),
        volume_id => match google_books.volume(volume_id).await {
            Ok(Some(volume)) => volume.to_form(),
            Ok(None) => BookFormDto::default(),
            Err(err) => {
                tracing::warn!("Google Books volume {} lookup failed: {}", volume_id, err);
                BookFormDto::default()
            }
        },
    };

    let results = if keyword.is_empty() {
        Vec::new()
    } else {
        google_books.search(&keyword).await.unwrap_or_else(|err| {
            tracing::warn!("Google Books search failed: {}", err);
            Vec::new()
        })
    };

    Ok(view::book::new(
        ctx,
        owner,
        form,
        ValidationErrors::new(),
        BookSearch { keyword, results },
        StatusCode::OK,
    ))
}

pub async fn create(
    State(state): State<AppState>,
    session: Session,
    Path(slug): Path<String>,
    Form(form): Form<BookFormDto>,
) -> Result<Response, AppError> {
    let (actor, ctx) = login_context(&state, &session).await?;
    let owner = UserService::new(&state.db).find_by_slug(&slug).await?;

    AuthGuard::authorize(Some(&actor), Permission::User(&owner, UserAction::CreateBook))?;
    verify_form_token(&session, &form.csrf_token).await?;

    match book_service(&state).create(owner.id, &form).await? {
        Ok(book) => Ok(Redirect::to(&path::book(&owner.slug, &book.isbn)).into_response()),
        Err(errors) => Ok(view::book::new(
            ctx,
            owner,
            form,
            errors,
            BookSearch::default(),
            StatusCode::UNPROCESSABLE_ENTITY,
        )),
    }
}

/// Book page with highlights, and the owner's shelves when the actor may reshelve it.
pub async fn show(
    State(state): State<AppState>,
    session: Session,
    Path((slug, isbn)): Path<(String, String)>,
) -> Result<Response, AppError> {
    let ctx = view_context(&state, &session).await?;
    let (owner, book) = find_book(&state, &slug, &isbn).await?;

    let highlights = HighlightService::new(&state.db, &state.highlight_images)
        .list(book.id)
        .await?;
    let shelves = if can(ctx.actor(), Permission::User(&owner, UserAction::ShowShelves)) {
        ShelfService::new(&state.db).list(owner.id).await?
    } else {
        Vec::new()
    };

    Ok(view::book::show(ctx, owner, book, highlights, shelves))
}

pub async fn edit(
    State(state): State<AppState>,
    session: Session,
    Path((slug, isbn)): Path<(String, String)>,
) -> Result<Response, AppError> {
    let (actor, ctx) = login_context(&state, &session).await?;
    let (owner, book) = find_book(&state, &slug, &isbn).await?;

    AuthGuard::authorize(Some(&actor), Permission::Book(&book, BookAction::Edit))?;

    let form = book.to_form();
    Ok(view::book::edit(
        ctx,
        owner,
        book,
        form,
        ValidationErrors::new(),
        StatusCode::OK,
    ))
}

pub async fn update(
    State(state): State<AppState>,
    session: Session,
    Path((slug, isbn)): Path<(String, String)>,
    Form(form): Form<BookFormDto>,
) -> Result<Response, AppError> {
    let (actor, ctx) = login_context(&state, &session).await?;
    let (owner, book) = find_book(&state, &slug, &isbn).await?;

    AuthGuard::authorize(Some(&actor), Permission::Book(&book, BookAction::Edit))?;
    verify_form_token(&session, &form.csrf_token).await?;

    let param = match UpdateBookParam::from_form(&form) {
        Ok(param) => param,
        Err(errors) => {
            return Ok(view::book::edit(
                ctx,
                owner,
                book,
                form,
                errors,
                StatusCode::UNPROCESSABLE_ENTITY,
            ))
        }
    };

    book_service(&state).update(&book, param).await?;

    Ok(Redirect::to(&path::book(&owner.slug, &book.isbn)).into_response())
}

/// Deletes the book, its highlights and their images.
pub async fn delete(
    State(state): State<AppState>,
    session: Session,
    Path((slug, isbn)): Path<(String, String)>,
    Form(form): Form<CsrfFormDto>,
) -> Result<Response, AppError> {
    let (actor, _) = login_context(&state, &session).await?;
    let (owner, book) = find_book(&state, &slug, &isbn).await?;

    AuthGuard::authorize(Some(&actor), Permission::Book(&book, BookAction::Delete))?;
    verify_form_token(&session, &form.csrf_token).await?;

    book_service(&state).delete(&book).await?;

    Ok(Redirect::to(&path::user(&owner.slug)).into_response())
}

/// Moves the book onto one of the owner's shelves, or off all shelves.
pub async fn assign_shelf(
    State(state): State<AppState>,
    session: Session,
    Path((slug, isbn)): Path<(String, String)>,
    Form(form): Form<AssignShelfDto>,
) -> Result<Response, AppError> {
    let (actor, _) = login_context(&state, &session).await?;
    let (owner, book) = find_book(&state, &slug, &isbn).await?;

    AuthGuard::authorize(Some(&actor), Permission::User(&owner, UserAction::ShowShelves))?;
    AuthGuard::authorize(Some(&actor), Permission::Book(&book, BookAction::Edit))?;
    verify_form_token(&session, &form.csrf_token).await?;

    let shelf_id = match form.shelf_id.trim() {
        "" => None,
        id => Some(
            id.parse::<i32>()
                .map_err(|_| AppError::BadRequest("Unknown shelf".to_string()))?,
        ),
    };

    book_service(&state).assign_shelf(&book, shelf_id).await?;

    Ok(Redirect::to(&path::book(&owner.slug, &book.isbn)).into_response())
}

pub async fn image_form(
    State(state): State<AppState>,
    session: Session,
    Path((slug, isbn)): Path<(String, String)>,
) -> Result<Response, AppError> {
    let (actor, ctx) = login_context(&state, &session).await?;
    let (owner, book) = find_book(&state, &slug, &isbn).await?;

    AuthGuard::authorize(Some(&actor), Permission::Book(&book, BookAction::Edit))?;

    Ok(view::book::image(
        ctx,
        owner,
        book,
        ValidationErrors::new(),
        StatusCode::OK,
    ))
}

/// Stores an uploaded cover. Covers must be in portrait orientation.
pub async fn upload_image(
    State(state): State<AppState>,
    session: Session,
    Path((slug, isbn)): Path<(String, String)>,
    multipart: Multipart,
) -> Result<Response, AppError> {
    let (actor, ctx) = login_context(&state, &session).await?;
    let (owner, book) = find_book(&state, &slug, &isbn).await?;

    AuthGuard::authorize(Some(&actor), Permission::Book(&book, BookAction::Edit))?;

    let upload = read_image_upload(multipart).await?;
    verify_form_token(&session, &upload.csrf_token).await?;

    let mut errors = ValidationErrors::new();
    let Some(image) = errors.image("image", "Image", &upload.image, true) else {
        return Ok(view::book::image(
            ctx,
            owner,
            book,
            errors,
            StatusCode::UNPROCESSABLE_ENTITY,
        ));
    };

    book_service(&state).set_cover(&book, image).await?;

    Ok(Redirect::to(&path::book(&owner.slug, &book.isbn)).into_response())
}

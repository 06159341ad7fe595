use std::path::Path;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::server::{
    controller::{auth, book, highlight, home, shelf, user},
    state::AppState,
};

/// Upper bound for multipart image uploads.
const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

pub fn router(public_dir: &Path) -> Router<AppState> {
    Router::new()
        .route("/", get(home::index))
        .route("/privacy", get(home::privacy))
        .route("/auth/google", get(auth::login))
        .route("/auth/google/callback", get(auth::callback))
        .route("/logout", get(auth::logout))
        .route("/users/{user}", get(user::show).post(user::update))
        .route("/users/{user}/edit", get(user::edit))
        .merge(book_routes())
        .merge(shelf_routes())
        .merge(highlight_routes())
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(TraceLayer::new_for_http())
        .fallback_service(ServeDir::new(public_dir))
}

fn book_routes() -> Router<AppState> {
    Router::new()
        .route("/users/{user}/books", post(book::create))
        .route("/users/{user}/books/new", get(book::new))
        .route(
            "/users/{user}/books/{isbn}",
            get(book::show).post(book::update).delete(book::delete),
        )
        .route("/users/{user}/books/{isbn}/edit", get(book::edit))
        .route("/users/{user}/books/{isbn}/shelf", post(book::assign_shelf))
        .route(
            "/users/{user}/books/{isbn}/image",
            get(book::image_form).post(book::upload_image),
        )
}

fn shelf_routes() -> Router<AppState> {
    Router::new()
        .route("/users/{user}/shelves", get(shelf::index).post(shelf::create))
        .route("/users/{user}/shelves/new", get(shelf::new))
        .route(
            "/users/{user}/shelves/{shelf}",
            post(shelf::update).delete(shelf::delete),
        )
        .route("/users/{user}/shelves/{shelf}/edit", get(shelf::edit))
        .route("/users/{user}/shelves/{shelf}/up", post(shelf::move_up))
        .route("/users/{user}/shelves/{shelf}/down", post(shelf::move_down))
}

fn highlight_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/users/{user}/books/{isbn}/highlights",
            post(highlight::create),
        )
        .route(
            "/users/{user}/books/{isbn}/highlights/new",
            get(highlight::new),
        )
        .route(
            "/users/{user}/books/{isbn}/highlights/{id}",
            post(highlight::update).delete(highlight::delete),
        )
        .route(
            "/users/{user}/books/{isbn}/highlights/{id}/edit",
            get(highlight::edit),
        )
        .route(
            "/users/{user}/books/{isbn}/highlights/{id}/image",
            get(highlight::image_form).post(highlight::upload_image),
        )
}

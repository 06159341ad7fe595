//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and the conversion logic that
//! turns errors into rendered HTML error pages. `AppError` is the single error type
//! returned by controllers; domain-specific errors like `AuthError` handle their own
//! response mapping while everything unexpected collapses into a logged 500 page.
//!
//! Validation failures are not errors at this level. Controllers re-render the offending
//! form with status 422 instead.

pub mod auth;
pub mod config;
pub mod internal;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{
    server::error::{auth::AuthError, config::ConfigError, internal::InternalError},
    view::error::render_error_page,
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur while handling a request. Most
/// variants use `#[from]` so `?` converts them automatically.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` for redirects and 400/401 pages.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Unexpected internal state, indicating a bug.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Session store operation error.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// HTTP client request error from reqwest.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Image decoding or encoding error.
    #[error(transparent)]
    ImageErr(#[from] image::ImageError),

    /// Filesystem error while storing or removing uploads.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Multipart body could not be read.
    ///
    /// Client-side failure such as a malformed body or an upload over the size limit.
    /// Results in a 4xx page with the status reported by axum.
    #[error(transparent)]
    MultipartErr(#[from] axum::extract::multipart::MultipartError),

    /// Resource not found error.
    ///
    /// Results in a 404 page. The message is logged but never shown, so unknown slugs,
    /// ISBNs and ids are indistinguishable to the client.
    ///
    /// # Fields
    /// - Message describing what resource was not found
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    ///
    /// # Fields
    /// - Message describing what was invalid about the request
    #[error("{0}")]
    BadRequest(String),
}

/// Converts application errors into HTML error pages.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest` variant
/// - 404 Not Found - For `NotFound` variant
/// - 400 / 413 - For `MultipartErr`, using the status axum reports
/// - Variable - For `AuthErr`, delegated to `AuthError::into_response()`
/// - 500 Internal Server Error - For all other error types
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::NotFound(msg) => {
                tracing::debug!("Not found: {}", msg);
                render_error_page(StatusCode::NOT_FOUND, "Page not found")
            }
            Self::BadRequest(msg) => render_error_page(StatusCode::BAD_REQUEST, &msg),
            Self::MultipartErr(err) if err.status().is_server_error() => {
                InternalServerError(err).into_response()
            }
            Self::MultipartErr(err) => {
                tracing::debug!("Rejected upload: {}", err);
                let message = if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
                    "The uploaded file is too large."
                } else {
                    "The upload could not be read, please try again."
                };
                render_error_page(err.status(), message)
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error page.
///
/// Logs the error message and renders a generic page so implementation details never
/// reach the client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        render_error_page(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Something went wrong, please try again later.",
        )
    }
}

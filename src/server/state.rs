//! Application state shared across all request handlers.
//!
//! `AppState` is built once during startup and cloned into every handler through
//! Axum's state extraction. Every field is cheap to clone: the database connection and
//! HTTP client are pools behind an `Arc`, and image stores only hold a path.

use oauth2::basic::{BasicErrorResponseType, BasicTokenType};
use oauth2::{
    Client, EmptyExtraTokenFields, EndpointNotSet, EndpointSet, RevocationErrorResponseType,
    StandardErrorResponse, StandardRevocableToken, StandardTokenIntrospectionResponse,
    StandardTokenResponse,
};
use sea_orm::DatabaseConnection;

use crate::server::service::image::ImageStore;

/// Type alias for the OAuth2 client configured for Google authentication.
pub(crate) type OAuth2Client = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardTokenIntrospectionResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: DatabaseConnection,

    /// HTTP client for the OAuth token exchange and Google userinfo requests.
    ///
    /// Configured without redirects.
    pub http_client: reqwest::Client,

    /// OAuth2 client for the Google login flow.
    pub oauth_client: OAuth2Client,

    /// Uploaded book covers, served under `/books/image`.
    pub book_images: ImageStore,

    /// Uploaded highlight images, served under `/highlights/image`.
    pub highlight_images: ImageStore,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        oauth_client: OAuth2Client,
        book_images: ImageStore,
        highlight_images: ImageStore,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
            book_images,
            highlight_images,
        }
    }
}

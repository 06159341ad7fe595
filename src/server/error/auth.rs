use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use thiserror::Error;

use crate::view::error::render_error_page;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user id is stored in the session.
    ///
    /// The request needs a logged-in user. Results in a redirect to the landing page.
    #[error("Failed to find user ID in session")]
    UserNotInSession,

    /// The session references a user that no longer exists.
    ///
    /// Treated like a missing session: the caller is redirected to the landing page.
    #[error("User ID {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// The authorization predicate denied the requested action.
    ///
    /// Results in a uniform 401 Unauthorized page with no detail about the target.
    #[error("Access denied: {0}")]
    AccessDenied(String),

    /// CSRF state validation failed during OAuth callback.
    ///
    /// The state in the callback URL does not match the one stored in the session.
    /// Results in a 400 Bad Request response.
    #[error("Failed to login user due to CSRF state mismatch")]
    CsrfValidationFailed,

    /// A submitted form carried a missing or mismatched CSRF token.
    ///
    /// Results in a 400 Bad Request response.
    #[error("Form CSRF token mismatch")]
    FormCsrfMismatch,

    /// Exchanging the OAuth authorization code for a token failed.
    #[error("Failed to exchange OAuth authorization code: {0}")]
    TokenExchangeFailed(String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `UserNotInSession` / `UserNotInDatabase` → redirect to `/`
/// - `AccessDenied` → 401 Unauthorized page
/// - `CsrfValidationFailed` / `FormCsrfMismatch` → 400 Bad Request page
/// - `TokenExchangeFailed` → 500 Internal Server Error page
///
/// All errors are logged at debug level while the client-facing messages stay generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => {
                Redirect::to("/").into_response()
            }
            Self::AccessDenied(_) => render_error_page(
                StatusCode::UNAUTHORIZED,
                "You are not allowed to do that.",
            ),
            Self::CsrfValidationFailed => render_error_page(
                StatusCode::BAD_REQUEST,
                "There was an issue logging you in, please try again.",
            ),
            Self::FormCsrfMismatch => render_error_page(
                StatusCode::BAD_REQUEST,
                "Your form has expired, please go back and try again.",
            ),
            Self::TokenExchangeFailed(msg) => {
                tracing::error!("Token exchange failed: {}", msg);
                render_error_page(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "There was an issue logging you in, please try again.",
                )
            }
        }
    }
}

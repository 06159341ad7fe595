use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// The userinfo response from the identity provider lacked a required field.
    #[error("Identity provider response is missing field '{0}'")]
    MissingUserInfoField(&'static str),

    /// The userinfo response from the identity provider was not valid JSON.
    #[error("Failed to parse identity provider response: {0}")]
    InvalidUserInfo(String),

    /// A Google Books request could not be built or its response parsed.
    #[error("Google Books lookup failed: {0}")]
    GoogleBooks(String),
}

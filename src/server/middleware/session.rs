//! Type-safe session management wrappers.
//!
//! Each struct wraps the same underlying `Session` but exposes only the methods relevant
//! to one concern, so session keys and value types live in a single place.
//!
//! - `AuthSession` - Logged-in user id
//! - `CsrfSession` - OAuth state token stored between login redirect and callback
//! - `FormTokenSession` - Per-session token embedded in every state-changing form

use rand::Rng;
use tower_sessions::Session;

use crate::server::error::{auth::AuthError, AppError};

const SESSION_AUTH_USER_ID: &str = "auth:user";
const SESSION_AUTH_CSRF_TOKEN: &str = "auth:csrf_token";
const SESSION_FORM_TOKEN: &str = "form:csrf_token";

/// Length of generated form tokens.
const FORM_TOKEN_LENGTH: usize = 32;

/// Authentication session management.
///
/// Stores and retrieves the authenticated user's id and clears the session on logout.
pub struct AuthSession<'a> {
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the user's id in the session after a successful login.
    ///
    /// The session id is cycled first so a pre-login session id cannot be reused.
    ///
    /// # Arguments
    /// - `user_id` - Primary key of the authenticated user
    ///
    /// # Returns
    /// - `Ok(())` - User ID successfully stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_user_id(&self, user_id: i32) -> Result<(), AppError> {
        self.session.cycle_id().await?;
        self.session.insert(SESSION_AUTH_USER_ID, user_id).await?;
        Ok(())
    }

    /// Retrieves the user's id from the session.
    ///
    /// # Returns
    /// - `Ok(Some(user_id))` - User is logged in
    /// - `Ok(None)` - No user in session
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn get_user_id(&self) -> Result<Option<i32>, AppError> {
        Ok(self.session.get::<i32>(SESSION_AUTH_USER_ID).await?)
    }

    /// Removes all session data, logging the user out.
    pub async fn clear(&self) {
        self.session.clear().await;
    }
}

/// CSRF protection for the OAuth flow.
///
/// The state token is stored when the login redirect is issued and taken back out during
/// the callback, so each token validates at most once.
pub struct CsrfSession<'a> {
    session: &'a Session,
}

impl<'a> CsrfSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the OAuth state token.
    ///
    /// # Returns
    /// - `Ok(())` - Token successfully stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_token(&self, token: String) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_CSRF_TOKEN, token).await?;
        Ok(())
    }

    /// Retrieves and removes the OAuth state token.
    ///
    /// # Returns
    /// - `Ok(Some(token))` - Token was found and removed
    /// - `Ok(None)` - No token in session
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn take_token(&self) -> Result<Option<String>, AppError> {
        let token = self.session.remove(SESSION_AUTH_CSRF_TOKEN).await?;
        Ok(token)
    }

    /// Takes the stored token and compares it with the callback state.
    ///
    /// # Returns
    /// - `Ok(())` - State matches the stored token
    /// - `Err(AuthError::CsrfValidationFailed)` - Token missing or different
    pub async fn validate(&self, state: &str) -> Result<(), AppError> {
        match self.take_token().await? {
            Some(token) if token == state => Ok(()),
            _ => Err(AuthError::CsrfValidationFailed.into()),
        }
    }
}

/// Form CSRF token management.
///
/// One random token is generated per session and rendered as a hidden field into every
/// form that changes state. POST handlers compare the submitted value against it.
pub struct FormTokenSession<'a> {
    session: &'a Session,
}

impl<'a> FormTokenSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Returns the session's form token, generating it on first use.
    ///
    /// # Returns
    /// - `Ok(token)` - Existing or newly stored token
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn token(&self) -> Result<String, AppError> {
        if let Some(token) = self.session.get::<String>(SESSION_FORM_TOKEN).await? {
            return Ok(token);
        }

        let token = generate_random_token();
        self.session
            .insert(SESSION_FORM_TOKEN, token.clone())
            .await?;

        Ok(token)
    }

    /// Checks a submitted form token against the session.
    ///
    /// # Returns
    /// - `Ok(())` - Token matches
    /// - `Err(AuthError::FormCsrfMismatch)` - No token in session or a different value
    pub async fn verify(&self, submitted: &str) -> Result<(), AppError> {
        match self.session.get::<String>(SESSION_FORM_TOKEN).await? {
            Some(token) if !submitted.is_empty() && token == submitted => Ok(()),
            _ => Err(AuthError::FormCsrfMismatch.into()),
        }
    }
}

/// Generates a random alphanumeric token.
fn generate_random_token() -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                             abcdefghijklmnopqrstuvwxyz\
                             0123456789";

    let mut rng = rand::rng();

    (0..FORM_TOKEN_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

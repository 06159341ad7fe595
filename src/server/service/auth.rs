//! Google OAuth2 login.

use oauth2::{AuthorizationCode, CsrfToken, Scope, TokenResponse};
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use url::Url;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, internal::InternalError, AppError},
    model::user::{UpsertUserParam, User},
    state::OAuth2Client,
};

const GOOGLE_USERINFO_URL: &str = "https://www.googleapis.com/oauth2/v2/userinfo";

/// Subset of Google's userinfo response used to create the local user.
#[derive(Debug, Deserialize)]
pub struct GoogleUserInfo {
    pub email: Option<String>,
    pub name: Option<String>,
    pub picture: Option<String>,
}

impl GoogleUserInfo {
    /// Converts the response into upsert parameters.
    ///
    /// The email is required since users are matched on it. A missing display name falls
    /// back to the email address.
    pub fn into_upsert_param(self) -> Result<UpsertUserParam, InternalError> {
        let email = self
            .email
            .filter(|e| !e.trim().is_empty())
            .ok_or(InternalError::MissingUserInfoField("email"))?;
        let name = self
            .name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| email.clone());

        Ok(UpsertUserParam {
            email,
            name,
            image: self.picture.filter(|p| !p.is_empty()),
        })
    }
}

pub struct GoogleAuthService<'a> {
    db: &'a DatabaseConnection,
    http_client: &'a reqwest::Client,
    oauth_client: &'a OAuth2Client,
}

impl<'a> GoogleAuthService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        http_client: &'a reqwest::Client,
        oauth_client: &'a OAuth2Client,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
        }
    }

    /// Generates the Google consent URL with a fresh CSRF state.
    ///
    /// # Returns
    /// - `(Url, CsrfToken)` - Authorization URL and the state to keep in the session
    pub fn login_url(&self) -> (Url, CsrfToken) {
        self.oauth_client
            .authorize_url(CsrfToken::new_random)
            .add_scope(Scope::new("email".to_string()))
            .add_scope(Scope::new("profile".to_string()))
            .url()
    }

    /// Completes the OAuth flow for an already validated callback.
    ///
    /// Exchanges the authorization code, fetches the Google profile and creates or
    /// refreshes the matching local user.
    ///
    /// # Returns
    /// - `Ok(User)` - Logged in user
    /// - `Err(AuthError::TokenExchangeFailed)` - Google rejected the code
    /// - `Err(AppError::ReqwestErr)` - Userinfo request failed
    /// - `Err(InternalError::MissingUserInfoField)` - Profile carried no email
    /// - `Err(AppError::DbErr)` - Upsert failed
    pub async fn callback(&self, authorization_code: String) -> Result<User, AppError> {
        let token = self
            .oauth_client
            .exchange_code(AuthorizationCode::new(authorization_code))
            .request_async(self.http_client)
            .await
            .map_err(|e| AuthError::TokenExchangeFailed(e.to_string()))?;

        let user_info = self.fetch_user_info(token.access_token().secret()).await?;
        let param = user_info.into_upsert_param()?;

        let user = UserRepository::new(self.db).upsert(param).await?;
        tracing::info!("User {} logged in", user.id);

        Ok(user)
    }

    async fn fetch_user_info(&self, access_token: &str) -> Result<GoogleUserInfo, AppError> {
        let body = self
            .http_client
            .get(GOOGLE_USERINFO_URL)
            .bearer_auth(access_token)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let user_info = serde_json::from_str(&body)
            .map_err(|e| InternalError::InvalidUserInfo(e.to_string()))?;

        Ok(user_info)
    }
}

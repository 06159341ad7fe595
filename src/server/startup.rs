//! Initialization of the resources held by `AppState`.

use oauth2::{basic::BasicClient, AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};
use sea_orm::DatabaseConnection;
use time::Duration;
use tower_sessions::{cookie::SameSite, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
    service::image::ImageStore,
    state::OAuth2Client,
};

/// Days of inactivity after which a session expires.
const SESSION_INACTIVITY_DAYS: i64 = 7;

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session layer backed by the application database.
///
/// Sessions live in their own table of the same SQLite database and expire after seven
/// days without a request.
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Layer ready to wrap the router
/// - `Err(AppError::DbErr)` - Failed to create the session table
pub async fn connect_to_session(
    db: &DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());

    session_store
        .migrate()
        .await
        .map_err(|e| sea_orm::DbErr::Custom(e.to_string()))?;

    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(Duration::days(SESSION_INACTIVITY_DAYS)));

    Ok(session_layer)
}

/// Builds the OAuth2 client for Google from configuration.
///
/// # Returns
/// - `Ok(OAuth2Client)` - Client with auth, token and redirect URLs set
/// - `Err(ConfigError::InvalidEnvVar)` - One of the URLs failed to parse
pub fn setup_oauth_client(config: &Config) -> Result<OAuth2Client, AppError> {
    let invalid = |name: &str| {
        let name = name.to_string();
        move |e: oauth2::url::ParseError| ConfigError::InvalidEnvVar {
            name,
            reason: e.to_string(),
        }
    };

    let client = BasicClient::new(ClientId::new(config.google_client_id.clone()))
        .set_client_secret(ClientSecret::new(config.google_client_secret.clone()))
        .set_auth_uri(
            AuthUrl::new(config.google_auth_url.clone()).map_err(invalid("GOOGLE_AUTH_URL"))?,
        )
        .set_token_uri(
            TokenUrl::new(config.google_token_url.clone()).map_err(invalid("GOOGLE_TOKEN_URL"))?,
        )
        .set_redirect_uri(
            RedirectUrl::new(config.google_redirect_url.clone())
                .map_err(invalid("GOOGLE_REDIRECT_URL"))?,
        );

    Ok(client)
}

/// Builds the HTTP client used for the token exchange and userinfo requests.
///
/// Redirects are disabled so a token endpoint cannot bounce requests elsewhere.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(client)
}

/// Creates the cover and highlight image directories under the public directory.
///
/// # Returns
/// - `Ok((book_images, highlight_images))` - Stores whose directories exist
/// - `Err(AppError::IoErr)` - A directory could not be created
pub async fn setup_image_stores(config: &Config) -> Result<(ImageStore, ImageStore), AppError> {
    let book_images = ImageStore::new(config.public_dir.join("books").join("image"));
    let highlight_images = ImageStore::new(config.public_dir.join("highlights").join("image"));

    book_images.ensure_dir().await?;
    highlight_images.ensure_dir().await?;

    Ok((book_images, highlight_images))
}

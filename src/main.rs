mod model;
mod server;
mod view;

use axum::{extract::Request, ServiceExt};
use tokio::net::TcpListener;
use tower::{util::MapRequestLayer, Layer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::server::{
    config::Config, error::AppError, middleware::method_override::method_override, router,
    startup, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "library=debug,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db).await?;
    let http_client = startup::setup_reqwest_client()?;
    let oauth_client = startup::setup_oauth_client(&config)?;
    let (book_images, highlight_images) = startup::setup_image_stores(&config).await?;

    let router = router::router(&config.public_dir)
        .with_state(AppState::new(
            db,
            http_client,
            oauth_client,
            book_images,
            highlight_images,
        ))
        .layer(session);

    // Forms can only submit GET and POST, so the override runs before routing.
    let app = MapRequestLayer::new(method_override).layer(router);

    let listener = TcpListener::bind(config.bind_address).await?;
    tracing::info!("Listening on {}", config.bind_address);

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}

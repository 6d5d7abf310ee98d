use std::sync::Arc;

use auth::TokenIssuer;
use rider_service::config::Config;
use rider_service::domain::rider::service::RiderService;
use rider_service::inbound::http::router::create_router;
use rider_service::outbound::hashing::ScryptCredentialHasher;
use rider_service::outbound::repositories::PostgresRiderRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rider_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "rider-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        token_ttl_seconds = config.token.ttl_seconds,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = config.database.max_connections,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let token_issuer = Arc::new(TokenIssuer::new(
        config.token.secret.as_bytes(),
        config.token.ttl()?,
    ));
    let rider_repository = Arc::new(PostgresRiderRepository::new(pg_pool));
    let credential_hasher = Arc::new(ScryptCredentialHasher::new());

    let rider_service = Arc::new(RiderService::new(
        rider_repository,
        credential_hasher,
        token_issuer,
    ));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    axum::serve(http_listener, create_router(rider_service)).await?;

    tracing::info!("Server exited");

    Ok(())
}

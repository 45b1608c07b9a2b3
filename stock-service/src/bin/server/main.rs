use std::sync::Arc;

use auth::PasswordHasher;
use auth::RevocationRegistry;
use auth::TokenIssuer;
use auth::TokenValidator;
use sqlx::postgres::PgPoolOptions;
use stock_service::config::Config;
use stock_service::domain::identity::service::AuthService;
use stock_service::domain::quote::service::QuoteService;
use stock_service::inbound::http::router::create_router;
use stock_service::outbound::quotes::FinnhubClient;
use stock_service::outbound::repositories::PostgresUserRepository;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stock_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "stock-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        token_ttl_minutes = config.jwt.expiration_minutes,
        finnhub_base_url = %config.finnhub.base_url,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = 5,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    // One registry for the process lifetime; revoked tokens survive until
    // shutdown and are never pruned
    let revocations = Arc::new(RevocationRegistry::new());

    let auth_service = Arc::new(AuthService::new(
        Arc::new(PostgresUserRepository::new(pg_pool)),
        PasswordHasher::new(),
        TokenIssuer::new(config.jwt.secret.as_bytes(), config.jwt.expiration_minutes),
        TokenValidator::new(config.jwt.secret.as_bytes()),
        Arc::clone(&revocations),
    ));

    let finnhub = FinnhubClient::new(config.finnhub.base_url, config.finnhub.api_key)?;
    let quote_service = Arc::new(QuoteService::new(Arc::new(finnhub)));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(auth_service, quote_service);
    axum::serve(http_listener, http_application).await?;

    Ok(())
}

//! Sociable Server Entry Point
//!
//! Loads configuration from the environment, connects to the database and
//! serves the HTTP API. A database connection failure at startup is fatal.

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info,sociable=debug".to_string());

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    let config = sociable::backend::server::config::Config::from_env();

    // No reconnect loop: if the store is unreachable the process exits.
    let pool = match sociable::backend::server::init::connect_database(&config).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("failed to connect to database: {e}");
            std::process::exit(1);
        }
    };

    let app = sociable::backend::server::init::create_app(pool, &config);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use duckbills::config::ServerConfig;
use duckbills::{Services, build_app};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();
    init_tracing();

    let config = ServerConfig::from_env()?;

    // Every store starts from the fixture rows; nothing is persisted
    let app = build_app(Services::seeded());

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Health check: http://{}/health", addr);
    info!("API docs: http://{}/docs", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

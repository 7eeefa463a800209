use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use phanloai_api::{build_router, config::Config, state::AppState};
use phanloai_classify::HttpClassifier;
use phanloai_persist::MongoStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config =
        Config::load().map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?;

    // Initialize logging
    init_logging(&config);

    tracing::info!("Starting Phan Loai API server");
    tracing::info!("Config loaded: {}:{}", config.server.host, config.server.port);

    // Initialize classification client
    let classifier = HttpClassifier::with_timeout(
        config.classifier.url.clone(),
        Duration::from_secs(config.classifier.timeout_secs),
    )?;
    tracing::info!("Classifier endpoint: {}", config.classifier.url);

    // Initialize persistence
    tracing::info!("Connecting to MongoDB");
    let store = Arc::new(MongoStore::connect(&config.mongodb_uri, &config.mongodb.database).await?);
    tracing::info!("MongoDB connected");

    // Create application state
    let state = Arc::new(AppState::new(
        config.clone(),
        store.clone(),
        store.clone(),
        store,
        Arc::new(classifier),
    ));

    // Build router
    let app = build_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {}", addr);
    tracing::info!("Health check: http://{}/health", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(env_filter);

    match config.logging.format.as_str() {
        "json" => {
            registry
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            registry
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
    }
}

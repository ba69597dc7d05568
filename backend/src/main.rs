//! Wash-Day Predictor - Backend Server
//!
//! Takes user-entered weather and traffic inputs, runs them through a
//! pre-trained gradient-boosting regression model, and returns derived
//! business metrics (expected car counts, staffing splits) for a
//! car-wash operation.

use std::{net::SocketAddr, sync::Arc};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use washday_predictor_backend::{
    config,
    create_app,
    external::GradientBoostedModel,
    services::{Adjuster, HistoricalDataset, PredictionService},
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "washday_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::load()?;

    tracing::info!("Starting Wash-Day Predictor Server");
    tracing::info!("Environment: {}", config.environment);

    // Fit the category encoder from the historical dataset
    tracing::info!("Loading historical dataset from {}", config.data.history_path);
    let dataset = HistoricalDataset::load(&config.data.history_path)?;
    let encoder = Arc::new(dataset.fit_encoder());
    tracing::info!(conditions = encoder.len(), "Category encoder fitted");

    // Load the pre-trained model artifact; the schema check happens here
    tracing::info!("Loading model artifact from {}", config.model.artifact_path);
    let model = Arc::new(GradientBoostedModel::load(&config.model.artifact_path)?);

    let adjuster = Arc::new(Adjuster::new(config.adjustment.clone()));
    let prediction = PredictionService::new(encoder, model, adjuster);

    // Create application state
    let state = AppState {
        config: Arc::new(config.clone()),
        prediction,
    };

    // Build application
    let app = create_app(state);

    // Start server
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

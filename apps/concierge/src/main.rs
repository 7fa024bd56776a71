mod comprehend;
mod concierge;
mod config;
mod errors;
mod lambda;
mod llm_client;
mod models;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use aws_config::{BehaviorVersion, Region, SdkConfig};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::comprehend::ComprehendExtractor;
use crate::concierge::Concierge;
use crate::config::Config;
use crate::llm_client::BedrockGenerator;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Concierge v{}", env!("CARGO_PKG_VERSION"));

    // Both collaborators share one region and credential chain
    let aws = load_aws_config(&config).await;
    let extractor = ComprehendExtractor::new(aws_sdk_comprehend::Client::new(&aws));
    let generator = BedrockGenerator::new(aws_sdk_bedrockruntime::Client::new(&aws));
    info!(
        "AWS clients initialized (region: {}, model: {})",
        config.aws_region,
        llm_client::MODEL
    );

    let concierge = Concierge::new(
        Arc::new(extractor),
        Arc::new(generator),
        config.resume_summary.clone(),
    );

    if lambda::is_lambda_environment() {
        return lambda::run(concierge).await;
    }

    let app = build_router(AppState { concierge })
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr} (local mode)");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Loads the default credential chain pinned to the configured region.
async fn load_aws_config(config: &Config) -> SdkConfig {
    aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(config.aws_region.clone()))
        .load()
        .await
}

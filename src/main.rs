use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use ecopack_api::{
    api::{create_router, AppState},
    config::Config,
    services::RecommendationContext,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("ecopack_api=info,tower_http=info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    // Models and catalog must load before the listener is bound
    let context = RecommendationContext::load(&config).inspect_err(|e| {
        tracing::error!(error = %format!("{:#}", e), "Failed to load recommendation context");
    })?;

    let state = AppState::new(context);
    let app = create_router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");
    axum::serve(listener, app).await?;

    Ok(())
}

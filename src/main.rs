use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;

use trip_estimator::{config::AppConfig, create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_logging();

    let config = AppConfig::from_env().context("reading configuration")?;
    let listen_addr = config.listen_addr;
    info!(
        "Unknown input policy: {:?}, currency symbol: {}",
        config.unknown_input_policy, config.currency_symbol
    );

    let state = AppState::from_config(config).context("loading catalog")?;
    info!(
        "Catalog ready: {} durations, {} activities",
        state.catalog.base_rates.len(),
        state.catalog.activities.len()
    );

    let app = create_router(state);

    let listener = TcpListener::bind(listen_addr)
        .await
        .with_context(|| format!("binding {}", listen_addr))?;
    info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let fmt_layer = tracing_subscriber::fmt::layer().with_target(false);
    let filter_layer = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,trip_estimator=debug,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}

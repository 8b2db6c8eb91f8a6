use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use rental_quotes::{build_router, catalog::Catalog, config::Config, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rental_quotes=debug,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().context("Invalid configuration")?;
    let catalog = Catalog::seeded().context("Failed to load seed catalog")?;

    info!(
        "Fees: insurance {} / service {} ({})",
        config.fees.insurance_rate, config.fees.service_rate, config.currency
    );

    let addr = format!("{}:{}", config.host, config.port);
    let app = build_router(AppState::new(config, catalog));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}

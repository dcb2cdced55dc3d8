use anyhow::Context;
use roamly_app::{summary, AppState};
use roamly_store::app_config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let config = Config::load().context("Failed to load config")?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let state = AppState::from_config(&config).context("Failed to build application state")?;
    tracing::info!("Roamly core ready");

    for card in summary::catalog(&state) {
        tracing::info!(
            "{} ({}, {} days): INR {} per traveler, {} {}°C",
            card.location,
            card.category,
            card.duration,
            card.price.total,
            card.weather.icon,
            card.weather.temperature
        );
    }

    let dashboard = summary::dashboard(&state);
    println!("{}", serde_json::to_string_pretty(&dashboard)?);
    Ok(())
}

mod app;
mod clock;
mod config;
mod docs;
mod error;
mod response;
mod state;
mod users;

use crate::{config::AppConfig, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "usercrud=debug,axum=info,tower_http=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let config = AppConfig::from_env()?;
    let addr = config.bind_addr()?;
    let app_state = AppState::init(config);

    {
        let directory = app_state.directory.read().await;
        if directory.is_empty() {
            tracing::info!("starting with an empty user directory");
        } else {
            tracing::info!(users = directory.len(), "user directory seeded");
        }
    }
    tracing::info!(
        delay_ms = app_state.config.simulated_delay.as_millis() as u64,
        "simulated latency"
    );

    app::serve(app::build_app(app_state), addr).await
}

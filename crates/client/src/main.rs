//! Terminal visualization for the gridnav controller.
//!
//! Scatters obstacles over a grid, drops the agent at the origin, and
//! watches the fuzzy controller wander: obstacles red, agent blue, one move
//! per tick. Grid size, obstacle count, seed, and tick cadence come from
//! `GRIDNAV_*` environment variables.
mod app;
mod config;
mod ui;

use anyhow::Result;

use app::App;
use config::ClientConfig;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = ClientConfig::from_env();
    App::new(config)?.run().await
}

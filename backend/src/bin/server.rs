//! Launch Dashboard HTTP Server Binary
//!
//! Loads the launch table, sets up the HTTP router and starts serving the
//! dashboard.
//!
//! # Usage
//!
//! ```bash
//! LAUNCH_DATA_PATH=spacex_launch_dash.csv cargo run --bin launch-dash-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8051)
//! - `LAUNCH_DATA_PATH`: CSV file to load (default: spacex_launch_dash.csv)
//! - `LAUNCH_DASH_DEBUG`: Verbose logging (default: true)
//! - `LAUNCH_DASH_CONFIG`: Optional TOML config file
//! - `RUST_LOG`: Log level when debug is off (default: info)

use std::env;
use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use launch_dash::config::ServerConfig;
use launch_dash::http::{create_router, AppState};
use launch_dash::parsing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::load()?;

    // Debug only changes how much gets logged
    let level = if config.debug {
        Level::DEBUG
    } else {
        env::var("RUST_LOG")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(Level::INFO)
    };
    FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting launch dashboard server");

    let dataset = parsing::load_launch_csv(&config.data_path)?;
    info!(
        records = dataset.len(),
        sites = dataset.sites().len(),
        checksum = dataset.checksum().unwrap_or_default(),
        "Launch table loaded from {}",
        config.data_path.display()
    );

    let state = AppState::new(Arc::new(dataset));
    let app = create_router(state);

    let addr = config.bind_address()?;
    info!("Dashboard listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

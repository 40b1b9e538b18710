//! Whitelist bridge entry point
//!
//! Run with:
//! ```bash
//! cargo run -p bridge-bot
//! ```
//!
//! Configuration is loaded from environment variables or a `.env` file.

use bridge_common::{try_init_tracing_with_config, AppConfig, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Load configuration
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    // Initialize tracing
    if let Err(e) = try_init_tracing_with_config(TracingConfig::for_environment(config.app.env)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    info!(env = ?config.app.env, "Starting whitelist bridge...");

    if let Err(e) = bridge_bot::run(config).await {
        error!(error = %e, code = e.error_code(), "Bridge stopped");
        std::process::exit(1);
    }
}

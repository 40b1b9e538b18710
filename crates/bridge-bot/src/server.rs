//! Bot setup and initialization
//!
//! Wires the PostgreSQL identity store, the Mojang lookup and the RCON
//! whitelist into a service context, then serves console commands.

use std::sync::Arc;

use bridge_common::{AppConfig, AppError};
use bridge_db::{create_pool, run_migrations, PgLinkedAccountRepository, PgMemberRepository};
use bridge_minecraft::{MojangClient, RconWhitelist};
use bridge_service::{ServiceContext, ServiceContextBuilder};
use tokio::io::BufReader;
use tracing::info;

use crate::console::run_console;

/// Initialize all dependencies and create the ServiceContext
pub async fn create_service_context(config: &AppConfig) -> Result<ServiceContext, AppError> {
    // Create database pool
    info!("Connecting to PostgreSQL...");
    let db_config = bridge_db::DatabaseConfig::from(&config.database);
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    run_migrations(&pool)
        .await
        .map_err(|e| AppError::Migration(e.to_string()))?;

    // Create repositories
    let member_repo = Arc::new(PgMemberRepository::new(pool.clone()));
    let link_repo = Arc::new(PgLinkedAccountRepository::new(pool));

    // Create collaborators
    let lookup = MojangClient::new(&config.lookup)
        .map_err(|e| AppError::ExternalService(e.to_string()))?;
    info!(api_url = %lookup.base_url(), "Mojang lookup ready");
    let whitelist = RconWhitelist::new(&config.rcon);
    info!(address = %config.rcon.address, "RCON whitelist ready");

    // Build service context
    ServiceContextBuilder::new()
        .member_repo(member_repo)
        .link_repo(link_repo)
        .lookup(Arc::new(lookup))
        .whitelist(Arc::new(whitelist))
        .lookup_timeout(config.lookup.timeout)
        .whitelist_timeout(config.rcon.timeout)
        .build()
        .map_err(AppError::internal)
}

/// Run the bot against stdin/stdout
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let ctx = create_service_context(&config).await?;

    info!(name = %config.app.name, "Ready for commands");

    run_console(ctx, BufReader::new(tokio::io::stdin()), tokio::io::stdout()).await
}

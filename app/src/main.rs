mod config;
mod error;
mod logging;
mod models;
mod rest;
mod store;

use std::sync::Arc;
use tracing::info;

#[tokio::main]
pub async fn main() -> Result<(), error::StartupError> {
    let config = config::Config::from_env()?;
    logging::init(&config)?;

    let sessions = models::SessionProvider::new(&config)?;
    if config.run_migrations() {
        info!("Applying database migrations");
        models::run_migrations(sessions.pool()).await?;
    }

    let store: Arc<dyn store::Store> = Arc::new(store::PgStore::new(sessions));
    rest::dispatch_server(store, config.bind_addr()).await
}

use catalog_service::config::AppConfig;
use catalog_service::lifecycle::{shutdown_signal, CatalogSystem};
use resource_store::tracing::setup_tracing;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing("info");

    let config = AppConfig::from_env().inspect_err(|e| {
        error!(error = %e, "Invalid configuration");
    })?;

    info!("Starting Product API");
    let system = CatalogSystem::new(config.seed);

    if let Err(e) = system.run(config.addr, shutdown_signal()).await {
        error!(error = %e, "Server failed");
        return Err(e.into());
    }
    Ok(())
}

use crate::clients::ProductClient;
use crate::product_store::{self, ProductStore};
use crate::web;
use axum::Router;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};

/// The runtime orchestrator for the catalog service.
///
/// # Example
///
/// ```ignore
/// let system = CatalogSystem::new(true);
/// let laptop = system.product_client.get_product(ProductId(1)).await?;
/// system.run(config.addr, shutdown_signal()).await?;
/// ```
pub struct CatalogSystem {
    /// Client used by the HTTP layer (and by tests).
    pub product_client: ProductClient,

    store: Arc<ProductStore>,
}

impl CatalogSystem {
    /// Creates the store, optionally seeds it, and wires the client over it.
    pub fn new(seed: bool) -> Self {
        let store = Arc::new(product_store::new());
        if seed {
            product_store::seed(&store);
        }
        let product_client = ProductClient::new(store.clone());

        Self {
            product_client,
            store,
        }
    }

    /// Direct access to the store.
    pub fn store(&self) -> &ProductStore {
        &self.store
    }

    /// The HTTP router over this system's client.
    pub fn router(&self) -> Router {
        web::router(self.product_client.clone())
    }

    /// Binds `addr` and serves the API until `shutdown` resolves.
    pub async fn run(
        self,
        addr: SocketAddr,
        shutdown: impl Future<Output = ()> + Send + 'static,
    ) -> Result<(), std::io::Error> {
        let listener = TcpListener::bind(addr).await.inspect_err(|e| {
            error!(%addr, error = %e, "Failed to bind listener");
        })?;
        let local = listener.local_addr()?;

        info!(addr = %local, products = self.store.len(), "Product API listening");
        info!("  GET    /health");
        info!("  GET    /api/v1/products[?category=C]");
        info!("  POST   /api/v1/products");
        info!("  GET    /api/v1/products/:id");
        info!("  PUT    /api/v1/products/:id");
        info!("  DELETE /api/v1/products/:id");
        info!("  GET    /api/v1/products/category/:category");

        web::serve(listener, self.product_client.clone(), shutdown).await?;

        info!(size = self.store.len(), "Shutdown complete");
        Ok(())
    }
}

/// Resolves on Ctrl+C.
pub async fn shutdown_signal() {
    shutdown_on(tokio::signal::ctrl_c()).await
}

/// Resolves once `signal` fires. Never resolves if the signal handler could not be installed.
async fn shutdown_on(signal: impl Future<Output = std::io::Result<()>>) {
    match signal.await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            error!(error = %e, "Failed to listen for shutdown signal");
            std::future::pending::<()>().await
        }
    }
}

//! # HTTP Transport
//!
//! Maps the product API onto [`ProductClient`] calls with axum.
//!
//! ## Routes
//!
//! - `GET /health`
//! - `GET /api/v1/products[?category=C]`, `POST /api/v1/products`
//! - `GET | PUT | DELETE /api/v1/products/{id}`
//! - `GET /api/v1/products/category/{category}`
//!
//! Failures are `{"error": "<message>"}` with the status chosen by [`ApiError`].

pub mod dto;
pub mod error;
pub mod handlers;

pub use error::ApiError;

use crate::clients::ProductClient;
use axum::routing::get;
use axum::Router;
use std::future::Future;
use tokio::net::TcpListener;

/// Build the axum `Router` serving the product API.
pub fn router(client: ProductClient) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/api/v1/products",
            get(handlers::list_products).post(handlers::create_product),
        )
        .route(
            "/api/v1/products/:id",
            get(handlers::get_product)
                .put(handlers::update_product)
                .delete(handlers::delete_product),
        )
        .route(
            "/api/v1/products/category/:category",
            get(handlers::products_by_category),
        )
        .with_state(client)
}

/// Serve the API on an already bound listener until `shutdown` resolves.
pub async fn serve(
    listener: TcpListener,
    client: ProductClient,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<(), std::io::Error> {
    axum::serve(listener, router(client))
        .with_graceful_shutdown(shutdown)
        .await
}

//! # Product Client
//!
//! Provides a high-level API over any [`Repository<Product>`]: the in-memory
//! [`ProductStore`](crate::product_store::ProductStore) in production, a
//! [`MockRepository`](resource_store::mock::MockRepository) in tests.
//! Missing ids become [`ProductError::NotFound`] here so callers can use `?`.
use crate::model::{Product, ProductDraft, ProductId, ProductPatch, ProductQuery};
use crate::product_store::ProductError;
use resource_store::Repository;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Client for the product catalog.
#[derive(Clone)]
pub struct ProductClient {
    inner: Arc<dyn Repository<Product>>,
}

impl ProductClient {
    pub fn new(inner: Arc<dyn Repository<Product>>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn list_products(&self) -> Vec<Product> {
        debug!("Sending request");
        self.inner.list().await
    }

    #[instrument(skip(self))]
    pub async fn get_product(&self, id: ProductId) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner
            .get(&id)
            .await
            .ok_or(ProductError::NotFound(id))
    }

    /// Stores the draft and returns the product with its assigned id.
    #[instrument(skip(self))]
    pub async fn create_product(&self, draft: ProductDraft) -> Product {
        debug!("Sending request");
        self.inner.create(draft).await
    }

    #[instrument(skip(self))]
    pub async fn update_product(
        &self,
        id: ProductId,
        patch: ProductPatch,
    ) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner
            .update(&id, patch)
            .await
            .ok_or(ProductError::NotFound(id))
    }

    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: ProductId) -> Result<(), ProductError> {
        debug!("Sending request");
        if self.inner.delete(&id).await {
            Ok(())
        } else {
            Err(ProductError::NotFound(id))
        }
    }

    /// Products in exactly this category; an empty category returns everything.
    #[instrument(skip(self))]
    pub async fn search_products(&self, category: &str) -> Vec<Product> {
        debug!("Sending request");
        self.inner.search(&ProductQuery::category(category)).await
    }
}

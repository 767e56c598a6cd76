//! Request and response bodies for the HTTP API.
//!
//! Requests decode leniently (every field optional) and are then validated into the store's
//! payload types, so a missing field and a bad value produce the same kind of 400.

use crate::model::{Product, ProductDraft, ProductPatch};
use crate::web::error::ApiError;
use serde::{Deserialize, Serialize};

/// Body of `POST /api/v1/products`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreateProductRequest {
    pub name: String,
    pub description: String,
    pub price: Option<f64>,
    pub stock: Option<i64>,
    pub category: String,
}

impl CreateProductRequest {
    /// Name non-empty, price present and positive, stock present and non-negative.
    pub fn validate(self) -> Result<ProductDraft, ApiError> {
        if self.name.is_empty() {
            return Err(bad_request("name is required"));
        }
        let price = match self.price {
            None => return Err(bad_request("price is required")),
            Some(price) if price > 0.0 => price,
            Some(_) => return Err(bad_request("price must be greater than 0")),
        };
        let stock = match self.stock {
            None => return Err(bad_request("stock is required")),
            Some(stock) => stock_in_range(stock)?,
        };

        Ok(ProductDraft::new(self.name, price, stock)
            .with_description(self.description)
            .with_category(self.category))
    }
}

/// Body of `PUT /api/v1/products/{id}`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<i64>,
    pub category: Option<String>,
}

impl UpdateProductRequest {
    /// Rejects negative price or stock. Everything else is left to the store's presence policy,
    /// so a zero price is accepted here and then ignored.
    pub fn validate(self) -> Result<ProductPatch, ApiError> {
        if matches!(self.price, Some(price) if price < 0.0) {
            return Err(bad_request("price must be greater than or equal to 0"));
        }
        if let Some(stock) = self.stock {
            stock_in_range(stock)?;
        }

        Ok(ProductPatch {
            name: self.name,
            description: self.description,
            price: self.price,
            stock: self.stock,
            category: self.category,
        })
    }
}

fn stock_in_range(stock: i64) -> Result<u32, ApiError> {
    if stock < 0 {
        return Err(bad_request("stock must be greater than or equal to 0"));
    }
    u32::try_from(stock).map_err(|_| bad_request("stock is out of range"))
}

fn bad_request(message: &str) -> ApiError {
    ApiError::BadRequest(message.to_string())
}

/// Query string of `GET /api/v1/products`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListParams {
    pub category: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductListResponse {
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
    pub products: Vec<Product>,
}

impl ProductListResponse {
    /// Everything fits on page 1.
    pub fn single_page(products: Vec<Product>) -> Self {
        Self {
            total: products.len(),
            page: 1,
            page_size: products.len(),
            products,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryResponse {
    pub category: String,
    pub total: usize,
    pub products: Vec<Product>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "healthy".to_string(),
            service: "Product API".to_string(),
            version: "1.0.0".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

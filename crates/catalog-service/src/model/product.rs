//! Represents a product in the catalog.
//!
//! # Resource Store
//! [`Product`] implements the [`StoreEntity`](resource_store::StoreEntity) trait,
//! allowing it to be held by a [`ResourceStore`](resource_store::ResourceStore).
//!
//! See [`impl StoreEntity for Product`](#impl-StoreEntity-for-Product) for details on:
//! - Creation parameters ([`ProductDraft`])
//! - Update parameters ([`ProductPatch`])
//! - Search parameters ([`ProductQuery`])

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use std::fmt::Display;
use std::num::ParseIntError;
use std::str::FromStr;

/// Type-safe identifier for Products. Serialized as a bare integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ProductId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>().map(Self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: u32,
    pub category: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Everything needed to create a product. The store assigns `id` and both timestamps.
///
/// Field constraints (non-empty name, positive price) are checked by the caller
/// before a draft reaches the store.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: u32,
    pub category: String,
}

impl ProductDraft {
    /// Creates a draft with an empty description and category.
    pub fn new(name: impl Into<String>, price: f64, stock: u32) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            price,
            stock,
            category: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }
}

/// Sparse update for a product.
///
/// A field is applied only when it is *present*:
///
/// | Field | Present when |
/// |---|---|
/// | `name`, `description`, `category` | `Some` and non-empty |
/// | `price` | `Some` and strictly greater than zero |
/// | `stock` | `Some` and `>= 0` |
///
/// Anything else leaves the stored value untouched; out-of-range values are ignored, not rejected.
///
/// # Known Limitation
/// An empty string and a zero price read as "not supplied", so a patch can never clear a text
/// field or set the price to zero. Stock is the exception: `Some(0)` sets it to zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub stock: Option<i64>,
    #[serde(default)]
    pub category: Option<String>,
}

/// Exact-match category filter. An empty category matches every product.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductQuery {
    pub category: String,
}

impl ProductQuery {
    pub fn category(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
        }
    }

    /// The query that matches everything.
    pub fn all() -> Self {
        Self::default()
    }
}

//! StoreEntity trait implementation for the Product domain type.
//!
//! This module contains the [`StoreEntity`] trait implementation that enables [`Product`]
//! to be held by the generic [`ResourceStore`](resource_store::ResourceStore): timestamps on
//! creation, the sparse-patch presence policy, and the category filter.

use crate::model::{Product, ProductDraft, ProductId, ProductPatch, ProductQuery};
use chrono::Utc;
use resource_store::StoreEntity;

impl StoreEntity for Product {
    type Id = ProductId;
    type Create = ProductDraft;
    type Update = ProductPatch;
    type Query = ProductQuery;

    /// Creates a new Product; `created_at` and `updated_at` start out equal.
    fn from_create_params(id: ProductId, draft: ProductDraft) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: draft.name,
            description: draft.description,
            price: draft.price,
            stock: draft.stock,
            category: draft.category,
            created_at: now,
            updated_at: now,
        }
    }

    /// Applies the fields of the patch that count as present (see [`ProductPatch`]).
    ///
    /// `updated_at` is refreshed even when nothing else changed.
    fn on_update(&mut self, patch: ProductPatch) {
        if let Some(name) = patch.name.filter(|name| !name.is_empty()) {
            self.name = name;
        }
        if let Some(description) = patch.description.filter(|d| !d.is_empty()) {
            self.description = description;
        }
        if let Some(price) = patch.price.filter(|price| *price > 0.0) {
            self.price = price;
        }
        // negative (or out of range) stock is dropped, zero is kept
        if let Some(stock) = patch.stock.and_then(|stock| u32::try_from(stock).ok()) {
            self.stock = stock;
        }
        if let Some(category) = patch.category.filter(|c| !c.is_empty()) {
            self.category = category;
        }

        // clamp so a clock stepping backwards cannot break updated_at >= created_at
        self.updated_at = Utc::now().max(self.created_at);
    }

    /// Case-sensitive exact match on category; an empty query matches everything.
    fn matches(&self, query: &ProductQuery) -> bool {
        query.category.is_empty() || self.category == query.category
    }
}

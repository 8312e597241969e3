//! Product records and the in-memory product repository.
//!
//! Products carry a free-text `category` name; nothing enforces that it names
//! an existing category. The category side only ever asks "how many products
//! carry this name", via [`CategoryProductCount`].

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use shopdesk_core::{DomainError, DomainResult, EntityId};

use crate::hierarchy::names_match;
use crate::CategoryProductCount;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: EntityId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock_quantity: i64,
    pub category: String,
    pub is_available: bool,
    pub created_at: DateTime<Utc>,
    pub last_modified: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock_quantity: i64,
    pub category: String,
    pub is_available: bool,
}

/// In-memory product repository (`RwLock<Vec<Product>>`, insertion order).
#[derive(Debug, Default)]
pub struct ProductStore {
    products: RwLock<Vec<Product>>,
}

impl ProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<Product>> {
        self.products.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Product>> {
        self.products.write().unwrap_or_else(|e| e.into_inner())
    }

    pub fn list(&self) -> Vec<Product> {
        self.read().clone()
    }

    pub fn get(&self, id: EntityId) -> Option<Product> {
        self.read().iter().find(|p| p.id == id).cloned()
    }

    /// Products whose category field matches `category` (case-insensitive).
    pub fn by_category(&self, category: &str) -> Vec<Product> {
        self.read()
            .iter()
            .filter(|p| names_match(&p.category, category))
            .cloned()
            .collect()
    }

    /// Products flagged available with stock on hand.
    pub fn available(&self) -> Vec<Product> {
        self.read()
            .iter()
            .filter(|p| p.is_available && p.stock_quantity > 0)
            .cloned()
            .collect()
    }

    pub fn create(&self, draft: ProductDraft) -> DomainResult<Product> {
        if draft.name.trim().is_empty() {
            return Err(DomainError::validation("product name cannot be empty"));
        }
        let mut products = self.write();
        let id = products
            .iter()
            .map(|p| p.id)
            .max()
            .map(|id| id.next())
            .unwrap_or(EntityId(1));

        let product = Product {
            id,
            name: draft.name.trim().to_string(),
            description: draft.description,
            price: draft.price,
            stock_quantity: draft.stock_quantity,
            category: draft.category,
            is_available: draft.is_available,
            created_at: Utc::now(),
            last_modified: None,
        };
        products.push(product.clone());
        tracing::info!(id = %product.id, name = %product.name, "product created");
        Ok(product)
    }

    pub fn update(&self, id: EntityId, draft: ProductDraft) -> DomainResult<Product> {
        if draft.name.trim().is_empty() {
            return Err(DomainError::validation("product name cannot be empty"));
        }
        let mut products = self.write();
        let product = products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(DomainError::NotFound)?;
        product.name = draft.name.trim().to_string();
        product.description = draft.description;
        product.price = draft.price;
        product.stock_quantity = draft.stock_quantity;
        product.category = draft.category;
        product.is_available = draft.is_available;
        product.last_modified = Some(Utc::now());
        Ok(product.clone())
    }

    pub fn delete(&self, id: EntityId) -> DomainResult<()> {
        let mut products = self.write();
        let idx = products
            .iter()
            .position(|p| p.id == id)
            .ok_or(DomainError::NotFound)?;
        products.remove(idx);
        tracing::info!(%id, "product deleted");
        Ok(())
    }
}

impl CategoryProductCount for ProductStore {
    fn count_in_category(&self, category: &str) -> usize {
        self.read()
            .iter()
            .filter(|p| names_match(&p.category, category))
            .count()
    }
}

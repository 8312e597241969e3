//! In-memory category repository.
//!
//! A `RwLock<Vec<Category>>` table: every mutation validates and applies under
//! one write guard, which is the single mutual-exclusion boundary for the
//! collection. Listings clone out of the read guard in insertion order.
//!
//! Intended for demos/tests. Not optimized for performance.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;

use shopdesk_core::{DomainResult, DomainError, EntityId};

use crate::category::{Category, CategoryDraft};
use crate::hierarchy;
use crate::CategoryProductCount;

#[derive(Debug, Default)]
pub struct CategoryStore {
    categories: RwLock<Vec<Category>>,
}

impl CategoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    // No code path panics while holding a guard, so a poisoned lock only
    // means some unrelated thread died; the data itself is intact.
    fn read(&self) -> RwLockReadGuard<'_, Vec<Category>> {
        self.categories.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Category>> {
        self.categories.write().unwrap_or_else(|e| e.into_inner())
    }

    pub fn list(&self) -> Vec<Category> {
        self.read().clone()
    }

    pub fn get(&self, id: EntityId) -> Option<Category> {
        self.read().iter().find(|c| c.id == id).cloned()
    }

    pub fn active(&self) -> Vec<Category> {
        self.read().iter().filter(|c| c.is_active).cloned().collect()
    }

    /// Root categories: no parent, regardless of active status.
    pub fn roots(&self) -> Vec<Category> {
        let guard = self.read();
        hierarchy::roots(&guard).into_iter().cloned().collect()
    }

    /// Direct children of `parent_name` (case-insensitive).
    pub fn children_of(&self, parent_name: &str) -> Vec<Category> {
        let guard = self.read();
        hierarchy::children_of(&guard, parent_name)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Name-substring search (case-insensitive), insertion order.
    pub fn search(&self, query: &str) -> Vec<Category> {
        let needle = query.to_lowercase();
        self.read()
            .iter()
            .filter(|c| c.name.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    pub fn create(&self, draft: CategoryDraft) -> DomainResult<Category> {
        let draft = draft.normalized();
        let mut categories = self.write();
        hierarchy::validate_create(&categories, &draft)?;

        let category = Category {
            id: hierarchy::next_id(&categories),
            name: draft.name,
            description: draft.description,
            is_active: draft.is_active,
            parent_category_name: draft.parent_category_name,
            image_url: draft.image_url,
            created_at: Utc::now(),
            last_modified: None,
        };
        categories.push(category.clone());
        tracing::info!(id = %category.id, name = %category.name, "category created");
        Ok(category)
    }

    /// Full replacement of the mutable fields. Renames do not cascade into
    /// children's parent links (they keep referencing the old name).
    pub fn update(&self, id: EntityId, draft: CategoryDraft) -> DomainResult<Category> {
        let draft = draft.normalized();
        let mut categories = self.write();
        hierarchy::validate_update(&categories, id, &draft)?;

        let idx = categories
            .iter()
            .position(|c| c.id == id)
            .ok_or(DomainError::NotFound)?;
        let category = &mut categories[idx];
        category.name = draft.name;
        category.description = draft.description;
        category.is_active = draft.is_active;
        category.parent_category_name = draft.parent_category_name;
        category.image_url = draft.image_url;
        category.last_modified = Some(Utc::now());
        Ok(category.clone())
    }

    /// Delete a leaf, product-free category.
    pub fn delete(&self, id: EntityId, products: &dyn CategoryProductCount) -> DomainResult<()> {
        let mut categories = self.write();
        let idx = categories
            .iter()
            .position(|c| c.id == id)
            .ok_or(DomainError::NotFound)?;
        let name = categories[idx].name.clone();

        hierarchy::validate_delete(&categories, &name, products.count_in_category(&name))?;

        categories.remove(idx);
        tracing::info!(%id, name, "category deleted");
        Ok(())
    }

    /// Flip the active flag. Deactivation is blocked while any child is active.
    pub fn toggle_active(&self, id: EntityId) -> DomainResult<Category> {
        let mut categories = self.write();
        let idx = categories
            .iter()
            .position(|c| c.id == id)
            .ok_or(DomainError::NotFound)?;

        if categories[idx].is_active {
            let name = categories[idx].name.clone();
            hierarchy::validate_deactivate(&categories, &name)?;
        }

        let category = &mut categories[idx];
        category.is_active = !category.is_active;
        category.last_modified = Some(Utc::now());
        Ok(category.clone())
    }
}

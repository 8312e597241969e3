//! `shopdesk-catalog` — category and product domain.
//!
//! The interesting part lives in [`hierarchy`]: pure validation of the
//! name-linked category tree (uniqueness, parent existence/activity, cycle
//! detection via ancestor walk). [`store`] applies that validation to a
//! concurrent-safe in-memory table; [`product`] is the flat product store that
//! doubles as the category's product-count collaborator.

pub mod category;
pub mod hierarchy;
pub mod product;
pub mod store;

pub use category::{Category, CategoryDraft};
pub use product::{Product, ProductDraft, ProductStore};
pub use store::CategoryStore;

/// Narrow capability the category component needs from the product side:
/// how many products carry a given category name.
///
/// Injected rather than referenced directly so the category store never
/// depends on the product store's full surface.
pub trait CategoryProductCount: Send + Sync {
    fn count_in_category(&self, category: &str) -> usize;
}

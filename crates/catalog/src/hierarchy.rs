//! Category hierarchy validation.
//!
//! Pure functions over a slice of [`Category`] records: name uniqueness,
//! parent existence/activity, self-parent rejection, and cycle detection via
//! an ancestor walk. The store calls these under its write guard; nothing here
//! mutates.
//!
//! Parent links are by *name*, case-insensitively. A dangling parent name
//! encountered mid-walk means the collection itself is inconsistent — that is
//! reported as [`DomainError::Inconsistency`], never swallowed.

use shopdesk_core::{DomainError, DomainResult, EntityId};

use crate::category::{Category, CategoryDraft};

/// Case-insensitive name comparison, the one rule for matching category names.
pub fn names_match(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// Find a category by name (case-insensitive).
pub fn find_by_name<'a>(categories: &'a [Category], name: &str) -> Option<&'a Category> {
    categories.iter().find(|c| names_match(&c.name, name))
}

/// Next id to assign: max + 1, or 1 for an empty collection.
pub fn next_id(categories: &[Category]) -> EntityId {
    categories
        .iter()
        .map(|c| c.id)
        .max()
        .map(|id| id.next())
        .unwrap_or(EntityId(1))
}

/// Categories with no parent, in insertion order, regardless of active status.
pub fn roots(categories: &[Category]) -> Vec<&Category> {
    categories
        .iter()
        .filter(|c| c.parent_category_name.is_none())
        .collect()
}

/// Direct children of `name`, in insertion order.
pub fn children_of<'a>(categories: &'a [Category], name: &str) -> Vec<&'a Category> {
    categories
        .iter()
        .filter(|c| {
            c.parent_category_name
                .as_deref()
                .is_some_and(|p| names_match(p, name))
        })
        .collect()
}

pub fn has_children(categories: &[Category], name: &str) -> bool {
    !children_of(categories, name).is_empty()
}

pub fn has_active_children(categories: &[Category], name: &str) -> bool {
    children_of(categories, name).iter().any(|c| c.is_active)
}

/// Walk the ancestor chain starting at `start` (itself included), following
/// parent-name links upward, and report whether `needle` appears in it.
///
/// Terminates at a root. A parent name with no matching record fails with
/// `Inconsistency`; the walk is also bounded by the collection size so
/// already-corrupted data cannot loop forever.
pub fn ancestor_chain_contains(
    categories: &[Category],
    start: &str,
    needle: &str,
) -> DomainResult<bool> {
    let mut current = Some(start.to_string());
    let mut hops = 0usize;

    while let Some(name) = current {
        if names_match(&name, needle) {
            return Ok(true);
        }
        let node = find_by_name(categories, &name).ok_or_else(|| {
            tracing::error!(parent = %name, "dangling parent link during ancestor walk");
            DomainError::inconsistency(format!(
                "parent category '{name}' is referenced but no such record exists"
            ))
        })?;
        current = node.parent_category_name.clone();

        hops += 1;
        if hops > categories.len() {
            tracing::error!(start, "ancestor walk exceeded category count");
            return Err(DomainError::inconsistency(
                "ancestor walk exceeded category count; hierarchy already contains a cycle",
            ));
        }
    }

    Ok(false)
}

/// Validate a create candidate. Expects a normalized draft.
pub fn validate_create(categories: &[Category], draft: &CategoryDraft) -> DomainResult<()> {
    if draft.name.is_empty() {
        return Err(DomainError::validation("category name cannot be empty"));
    }
    if find_by_name(categories, &draft.name).is_some() {
        return Err(DomainError::conflict("category with this name already exists"));
    }
    if let Some(parent) = draft.parent_category_name.as_deref() {
        let parent_cat = find_by_name(categories, parent)
            .ok_or_else(|| DomainError::invalid_reference("parent category does not exist"))?;
        if !parent_cat.is_active {
            return Err(DomainError::invalid_reference("parent category is not active"));
        }
    }
    Ok(())
}

/// Validate an update candidate against the record identified by `id`.
/// Expects a normalized draft.
///
/// Cycle detection walks upward from the proposed parent and rejects the
/// update if the candidate's stored name (the one children actually link to)
/// or its proposed new name appears anywhere in the chain.
pub fn validate_update(
    categories: &[Category],
    id: EntityId,
    draft: &CategoryDraft,
) -> DomainResult<()> {
    let existing = categories
        .iter()
        .find(|c| c.id == id)
        .ok_or(DomainError::NotFound)?;

    if draft.name.is_empty() {
        return Err(DomainError::validation("category name cannot be empty"));
    }
    if categories
        .iter()
        .any(|c| c.id != id && names_match(&c.name, &draft.name))
    {
        return Err(DomainError::conflict("category with this name already exists"));
    }

    if let Some(parent) = draft.parent_category_name.as_deref() {
        if names_match(parent, &existing.name) || names_match(parent, &draft.name) {
            return Err(DomainError::cyclic_reference(
                "category cannot be its own parent",
            ));
        }
        let parent_cat = find_by_name(categories, parent)
            .ok_or_else(|| DomainError::invalid_reference("parent category does not exist"))?;

        if ancestor_chain_contains(categories, &parent_cat.name, &existing.name)?
            || ancestor_chain_contains(categories, &parent_cat.name, &draft.name)?
        {
            return Err(DomainError::cyclic_reference(
                "assigning this parent would create a cycle in the category hierarchy",
            ));
        }
    }

    Ok(())
}

/// Validate that the category named `name` may be deleted: it must be a leaf
/// and have no associated products.
pub fn validate_delete(categories: &[Category], name: &str, product_count: usize) -> DomainResult<()> {
    if has_children(categories, name) {
        return Err(DomainError::precondition_failed(
            "cannot delete a category that has subcategories",
        ));
    }
    if product_count > 0 {
        return Err(DomainError::precondition_failed(format!(
            "cannot delete a category with {product_count} associated products"
        )));
    }
    Ok(())
}

/// Validate that the category named `name` may be deactivated.
pub fn validate_deactivate(categories: &[Category], name: &str) -> DomainResult<()> {
    if has_active_children(categories, name) {
        return Err(DomainError::precondition_failed(
            "cannot deactivate a category with active subcategories",
        ));
    }
    Ok(())
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use shopdesk_core::EntityId;

/// Category record.
///
/// `parent_category_name` references another category's *name*, not its id.
/// `None` means the category is a root. Names are trimmed on write and unique
/// case-insensitively; the hierarchy module enforces that the name-induced
/// parent graph stays acyclic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: EntityId,
    pub name: String,
    pub description: String,
    pub is_active: bool,
    pub parent_category_name: Option<String>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub last_modified: Option<DateTime<Utc>>,
}

/// Candidate state for a create or update, before validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryDraft {
    pub name: String,
    pub description: String,
    pub is_active: bool,
    pub parent_category_name: Option<String>,
    pub image_url: Option<String>,
}

impl CategoryDraft {
    /// Trim the name and collapse a blank parent reference to `None`.
    ///
    /// A whitespace-only parent name and an absent one both mean "root", so
    /// they normalize to the same shape before validation.
    pub fn normalized(mut self) -> Self {
        self.name = self.name.trim().to_string();
        self.parent_category_name = self
            .parent_category_name
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty());
        self
    }
}

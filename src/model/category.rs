//! Categories (a poet's books and sections).

use serde::{Deserialize, Serialize};

/// Category as returned by `/categories/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub url: Option<String>,
    pub poet: u64,
    pub poet_name: String,
    /// Parent category; the archive uses `0` or null for a poet's root.
    #[serde(default)]
    pub parent: Option<u64>,
    #[serde(default)]
    pub parent_title: Option<String>,
    pub poems_count: u64,
}

impl Category {
    pub fn is_root(&self) -> bool {
        matches!(self.parent, None | Some(0))
    }
}

/// One step of a category's ancestry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Breadcrumb {
    #[serde(alias = "name")]
    pub title: String,
    #[serde(default)]
    pub url: Option<String>,
}

/// Category as returned by `/categories/{id}/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryDetail {
    #[serde(flatten)]
    pub category: Category,
    #[serde(default)]
    pub children: Vec<Category>,
    /// JSON-encoded list of ancestors, carried as a string on the wire.
    #[serde(default)]
    pub breadcrumbs: String,
}

impl CategoryDetail {
    /// Decode `breadcrumbs`; empty or malformed input yields an empty trail.
    pub fn breadcrumb_trail(&self) -> Vec<Breadcrumb> {
        if self.breadcrumbs.trim().is_empty() {
            return Vec::new();
        }
        match serde_json::from_str(&self.breadcrumbs) {
            Ok(trail) => trail,
            Err(e) => {
                tracing::debug!(category = self.category.id, error = %e, "Unreadable breadcrumbs");
                Vec::new()
            }
        }
    }
}

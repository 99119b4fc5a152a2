//! Project record domain model.
//!
//! # Responsibility
//! - Define the canonical record held by `ProjectStore`.
//! - Define the `Category` partition and its presentation names.
//!
//! # Invariants
//! - `id` is generated once and never reused for another record.
//! - `category` is the only field mutated after creation.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for one project record.
///
/// Rendered as a hyphenated string when carried in a drag payload.
pub type ProjectId = Uuid;

/// Board column a project belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Work in flight. Default for new records.
    Active,
    /// Work completed.
    Finished,
}

impl Category {
    /// Stable lowercase name used for element ids.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Finished => "finished",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical project record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    /// Number of people assigned. Range is checked at entry, not here.
    pub people_count: u32,
    pub category: Category,
}

impl ProjectRecord {
    /// Creates an `Active` record with a freshly generated id.
    ///
    /// Inputs are stored as given; validation belongs to the entry form.
    pub fn new(title: impl Into<String>, description: impl Into<String>, people_count: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: description.into(),
            people_count,
            category: Category::Active,
        }
    }

    pub fn is_in(&self, category: Category) -> bool {
        self.category == category
    }
}

#[cfg(test)]
mod tests {
    use super::{Category, ProjectRecord};

    #[test]
    fn new_record_defaults_to_active() {
        let record = ProjectRecord::new("Build API", "Implement REST endpoints", 3);
        assert!(!record.id.is_nil());
        assert_eq!(record.category, Category::Active);
        assert!(record.is_in(Category::Active));
        assert!(!record.is_in(Category::Finished));
    }

    #[test]
    fn new_records_get_distinct_ids() {
        let first = ProjectRecord::new("a", "aaaaa", 1);
        let second = ProjectRecord::new("a", "aaaaa", 1);
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn category_names_are_lowercase() {
        assert_eq!(Category::Active.as_str(), "active");
        assert_eq!(Category::Finished.to_string(), "finished");
    }
}

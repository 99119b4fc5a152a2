//! Form input validation for new projects.
//!
//! # Responsibility
//! - Turn raw form strings into store-ready project fields.
//! - Keep entry rules configurable through `ValidationRules`.
//!
//! # Invariants
//! - Required checks use trimmed text; length checks count characters of the
//!   text as entered.
//! - The store never re-validates; this is the only guard in front of it.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Minimum description length accepted by default.
pub const DEFAULT_DESCRIPTION_MIN_CHARS: usize = 5;
/// Inclusive lower bound on assigned people.
pub const DEFAULT_PEOPLE_MIN: u32 = 1;
/// Inclusive upper bound on assigned people.
pub const DEFAULT_PEOPLE_MAX: u32 = 100;

/// Entry rules applied by `ProjectDraft::validate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationRules {
    pub description_min_chars: usize,
    pub people_min: u32,
    pub people_max: u32,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            description_min_chars: DEFAULT_DESCRIPTION_MIN_CHARS,
            people_min: DEFAULT_PEOPLE_MIN,
            people_max: DEFAULT_PEOPLE_MAX,
        }
    }
}

/// Raw, unvalidated form values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub people: String,
}

/// Validated fields ready for `ProjectStore::create`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidProject {
    pub title: String,
    pub description: String,
    pub people_count: u32,
}

impl ProjectDraft {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        people: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            people: people.into(),
        }
    }

    /// Checks every field against `rules`, reporting the first violation.
    pub fn validate(&self, rules: &ValidationRules) -> Result<ValidProject, ProjectValidationError> {
        if self.title.trim().is_empty() {
            return Err(ProjectValidationError::EmptyTitle);
        }

        if self.description.trim().is_empty() {
            return Err(ProjectValidationError::EmptyDescription);
        }
        let description_chars = self.description.chars().count();
        if description_chars < rules.description_min_chars {
            return Err(ProjectValidationError::DescriptionTooShort {
                min: rules.description_min_chars,
                actual: description_chars,
            });
        }

        let people = self.people.trim();
        if people.is_empty() {
            return Err(ProjectValidationError::EmptyPeople);
        }
        let people_count = people
            .parse::<u32>()
            .map_err(|_| ProjectValidationError::InvalidPeople(people.to_string()))?;
        if people_count < rules.people_min || people_count > rules.people_max {
            return Err(ProjectValidationError::PeopleOutOfRange {
                min: rules.people_min,
                max: rules.people_max,
                actual: people_count,
            });
        }

        Ok(ValidProject {
            title: self.title.clone(),
            description: self.description.clone(),
            people_count,
        })
    }
}

/// Entry validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectValidationError {
    EmptyTitle,
    EmptyDescription,
    DescriptionTooShort { min: usize, actual: usize },
    EmptyPeople,
    /// People value is not a non-negative integer.
    InvalidPeople(String),
    PeopleOutOfRange { min: u32, max: u32, actual: u32 },
}

impl Display for ProjectValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "title must not be blank"),
            Self::EmptyDescription => write!(f, "description must not be blank"),
            Self::DescriptionTooShort { min, actual } => write!(
                f,
                "description must be at least {min} characters, got {actual}"
            ),
            Self::EmptyPeople => write!(f, "people count must not be blank"),
            Self::InvalidPeople(value) => write!(f, "people count is not a number: {value}"),
            Self::PeopleOutOfRange { min, max, actual } => write!(
                f,
                "people count must be between {min} and {max}, got {actual}"
            ),
        }
    }
}

impl Error for ProjectValidationError {}

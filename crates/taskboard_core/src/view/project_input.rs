//! New-project entry form.
//!
//! # Responsibility
//! - Hold raw form field values between edits.
//! - Validate on submit and forward accepted input to the store.
//!
//! # Invariants
//! - The store is only called with input that passed `ValidationRules`.
//! - Fields are cleared only after a successful submit.

use crate::model::draft::{ProjectDraft, ProjectValidationError, ValidationRules};
use crate::model::project::ProjectId;
use crate::state::project_store::ProjectStore;
use log::{info, warn};
use std::rc::Rc;

/// Form component feeding `ProjectStore::create`.
pub struct ProjectInput {
    store: Rc<ProjectStore>,
    rules: ValidationRules,
    draft: ProjectDraft,
}

impl ProjectInput {
    pub fn new(store: Rc<ProjectStore>, rules: ValidationRules) -> Self {
        Self {
            store,
            rules,
            draft: ProjectDraft::default(),
        }
    }

    pub fn set_title(&mut self, value: impl Into<String>) {
        self.draft.title = value.into();
    }

    pub fn set_description(&mut self, value: impl Into<String>) {
        self.draft.description = value.into();
    }

    pub fn set_people(&mut self, value: impl Into<String>) {
        self.draft.people = value.into();
    }

    /// Current field values.
    pub fn draft(&self) -> &ProjectDraft {
        &self.draft
    }

    /// Validates the form and creates the project.
    ///
    /// # Errors
    /// - Returns the first validation failure; fields are left untouched so
    ///   the user can correct them.
    pub fn submit(&mut self) -> Result<ProjectId, ProjectValidationError> {
        let valid = self.draft.validate(&self.rules).inspect_err(|err| {
            warn!("event=project_submit module=input status=rejected reason=\"{err}\"");
        })?;

        let id = self
            .store
            .create(valid.title, valid.description, valid.people_count);
        info!("event=project_submit module=input status=ok id={id}");
        self.clear();
        Ok(id)
    }

    pub fn clear(&mut self) {
        self.draft = ProjectDraft::default();
    }
}

#[cfg(test)]
mod tests {
    use super::ProjectInput;
    use crate::model::draft::{ProjectValidationError, ValidationRules};
    use crate::state::project_store::ProjectStore;
    use std::rc::Rc;

    #[test]
    fn failed_submit_keeps_fields_and_skips_store() {
        let store = Rc::new(ProjectStore::new());
        let mut input = ProjectInput::new(Rc::clone(&store), ValidationRules::default());
        input.set_title("Build API");
        input.set_description("tiny");
        input.set_people("3");

        let err = input.submit().expect_err("short description must fail");
        assert!(matches!(err, ProjectValidationError::DescriptionTooShort { .. }));
        assert_eq!(input.draft().description, "tiny");
        assert!(store.is_empty());
    }

    #[test]
    fn custom_rules_are_applied() {
        let store = Rc::new(ProjectStore::new());
        let rules = ValidationRules {
            description_min_chars: 1,
            people_min: 1,
            people_max: 3,
        };
        let mut input = ProjectInput::new(Rc::clone(&store), rules);
        input.set_title("t");
        input.set_description("d");
        input.set_people("4");

        let err = input.submit().expect_err("above custom max must fail");
        assert_eq!(
            err,
            ProjectValidationError::PeopleOutOfRange {
                min: 1,
                max: 3,
                actual: 4
            }
        );
    }
}

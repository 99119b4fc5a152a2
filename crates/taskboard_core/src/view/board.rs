//! Board composition: one entry form and one view per category.

use crate::model::draft::ValidationRules;
use crate::model::project::Category;
use crate::state::project_store::ProjectStore;
use crate::view::category_view::CategoryView;
use crate::view::project_input::ProjectInput;
use crate::view::render::ProjectRenderer;
use log::info;
use std::rc::Rc;

/// Fully wired board sharing a single store.
pub struct Board {
    store: Rc<ProjectStore>,
    input: ProjectInput,
    active: Rc<CategoryView>,
    finished: Rc<CategoryView>,
}

impl Board {
    /// Builds the form and both category views with default entry rules.
    pub fn new(store: Rc<ProjectStore>, renderer: Rc<dyn ProjectRenderer>) -> Self {
        Self::with_rules(store, renderer, ValidationRules::default())
    }

    pub fn with_rules(
        store: Rc<ProjectStore>,
        renderer: Rc<dyn ProjectRenderer>,
        rules: ValidationRules,
    ) -> Self {
        let input = ProjectInput::new(Rc::clone(&store), rules);
        let active = CategoryView::new(Category::Active, Rc::clone(&store), Rc::clone(&renderer));
        let finished = CategoryView::new(Category::Finished, Rc::clone(&store), renderer);
        info!(
            "event=board_init module=board status=ok subscribers={}",
            store.subscriber_count()
        );
        Self {
            store,
            input,
            active,
            finished,
        }
    }

    pub fn store(&self) -> &Rc<ProjectStore> {
        &self.store
    }

    pub fn input(&mut self) -> &mut ProjectInput {
        &mut self.input
    }

    pub fn view(&self, category: Category) -> &Rc<CategoryView> {
        match category {
            Category::Active => &self.active,
            Category::Finished => &self.finished,
        }
    }
}

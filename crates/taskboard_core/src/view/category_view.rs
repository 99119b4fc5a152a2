//! Per-category list view and drop zone.
//!
//! # Responsibility
//! - Keep the subset of store records matching one category.
//! - Accept dropped project ids and reassign them through the store.
//!
//! # Invariants
//! - The held subset is replaced wholesale on every notification.
//! - `accept_drag` never pre-checks; the store decides whether anything moves.

use crate::model::project::{Category, ProjectId, ProjectRecord};
use crate::state::project_store::ProjectStore;
use crate::view::drag::{DragEvent, DragTarget, DRAG_PAYLOAD_TYPE};
use crate::view::project_item::ProjectItem;
use crate::view::render::ProjectRenderer;
use log::debug;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

/// Marker class applied to the container while a drop is possible.
pub const DROPPABLE_CLASS: &str = "droppable";

/// List of projects in one category, also acting as its drop zone.
pub struct CategoryView {
    category: Category,
    store: Rc<ProjectStore>,
    renderer: Rc<dyn ProjectRenderer>,
    assigned: RefCell<Vec<ProjectRecord>>,
    droppable: Cell<bool>,
}

impl CategoryView {
    /// Creates the view and subscribes it to `store`.
    ///
    /// The subscription holds a weak handle, so the store never keeps a
    /// dropped view alive. The view renders its current subset immediately.
    pub fn new(
        category: Category,
        store: Rc<ProjectStore>,
        renderer: Rc<dyn ProjectRenderer>,
    ) -> Rc<Self> {
        let view = Rc::new_cyclic(|weak: &Weak<Self>| {
            let weak = weak.clone();
            store.subscribe(move |projects| {
                if let Some(view) = weak.upgrade() {
                    view.apply(projects);
                }
            });
            Self {
                category,
                store: Rc::clone(&store),
                renderer,
                assigned: RefCell::new(Vec::new()),
                droppable: Cell::new(false),
            }
        });
        view.apply(&view.store.projects());
        view
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Element id of the list container, e.g. `active-project-list`.
    pub fn container_id(&self) -> String {
        format!("{}-project-list", self.category)
    }

    /// Element id of the whole section, e.g. `finished-projects`.
    pub fn element_id(&self) -> String {
        format!("{}-projects", self.category)
    }

    pub fn heading(&self) -> String {
        format!("{} PROJECTS", self.category.as_str().to_uppercase())
    }

    /// Records currently shown, in store order.
    pub fn projects(&self) -> Vec<ProjectRecord> {
        self.assigned.borrow().clone()
    }

    pub fn items(&self) -> Vec<ProjectItem> {
        self.assigned
            .borrow()
            .iter()
            .cloned()
            .map(ProjectItem::new)
            .collect()
    }

    /// Returns the item for `id` if it is shown in this view.
    pub fn item(&self, id: ProjectId) -> Option<ProjectItem> {
        self.assigned
            .borrow()
            .iter()
            .find(|project| project.id == id)
            .cloned()
            .map(ProjectItem::new)
    }

    pub fn is_droppable(&self) -> bool {
        self.droppable.get()
    }

    /// Classes the host should apply to the list container.
    pub fn container_class(&self) -> Option<&'static str> {
        self.droppable.get().then_some(DROPPABLE_CLASS)
    }

    /// Reassigns a dropped project into this view's category.
    ///
    /// Payloads that are not project ids are ignored like unknown ids.
    /// Returns whether the store changed.
    pub fn accept_drag(&self, candidate_id: &str) -> bool {
        let Ok(id) = candidate_id.trim().parse::<ProjectId>() else {
            debug!(
                "event=drag_accept module=view status=ignored category={} reason=malformed_id",
                self.category
            );
            return false;
        };
        self.store.reassign_category(id, self.category)
    }

    fn apply(&self, projects: &[ProjectRecord]) {
        let subset: Vec<ProjectRecord> = projects
            .iter()
            .filter(|project| project.is_in(self.category))
            .cloned()
            .collect();
        *self.assigned.borrow_mut() = subset.clone();
        self.renderer.render(&self.container_id(), &subset);
    }
}

impl DragTarget for CategoryView {
    fn drag_over(&self, event: &mut DragEvent) {
        let accepts = event
            .data_transfer
            .as_ref()
            .is_some_and(|transfer| transfer.leads_with(DRAG_PAYLOAD_TYPE));
        if accepts {
            event.prevent_default();
            self.droppable.set(true);
        }
    }

    fn drop_payload(&self, event: &mut DragEvent) {
        self.droppable.set(false);
        let Some(payload) = event.payload().map(str::to_string) else {
            debug!(
                "event=drag_accept module=view status=ignored category={} reason=no_payload",
                self.category
            );
            return;
        };
        self.accept_drag(&payload);
    }

    fn drag_leave(&self, _event: &DragEvent) {
        self.droppable.set(false);
    }
}

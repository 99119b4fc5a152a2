//! Project store: single source of truth for board records.
//!
//! # Responsibility
//! - Append new records and reassign record categories.
//! - Notify subscribers with a full snapshot after each effective mutation.
//!
//! # Invariants
//! - Records keep insertion order and are never removed.
//! - Reassigning to the current category or an unknown id never notifies.
//! - Subscribers fire in registration order and may call back into the store.

use crate::model::project::{Category, ProjectId, ProjectRecord};
use log::debug;
use std::cell::RefCell;
use std::rc::Rc;

/// Subscriber callback receiving the full current collection.
pub type ProjectListener = Rc<dyn Fn(&[ProjectRecord])>;

/// Authoritative, observable project collection.
///
/// One instance is created by the host and shared through `Rc`. The store is
/// single-threaded; interior mutability keeps `&self` APIs usable from
/// subscriber callbacks.
#[derive(Default)]
pub struct ProjectStore {
    projects: RefCell<Vec<ProjectRecord>>,
    listeners: RefCell<Vec<ProjectListener>>,
}

impl ProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a subscriber for all future notifications.
    ///
    /// There is no deduplication and no way to unsubscribe.
    pub fn subscribe(&self, listener: impl Fn(&[ProjectRecord]) + 'static) {
        self.listeners.borrow_mut().push(Rc::new(listener));
        debug!(
            "event=store_subscribe module=store status=ok subscribers={}",
            self.listeners.borrow().len()
        );
    }

    /// Appends a new `Active` record and notifies subscribers.
    ///
    /// # Contract
    /// - Inputs are assumed validated by the caller.
    /// - Returns the generated stable id.
    pub fn create(
        &self,
        title: impl Into<String>,
        description: impl Into<String>,
        people_count: u32,
    ) -> ProjectId {
        let record = ProjectRecord::new(title, description, people_count);
        let id = record.id;
        let total = {
            let mut projects = self.projects.borrow_mut();
            projects.push(record);
            projects.len()
        };
        debug!("event=project_create module=store status=ok id={id} total={total}");
        self.notify();
        id
    }

    /// Moves a record into `category`.
    ///
    /// Returns `true` when the record changed and subscribers were notified.
    /// Unknown ids and same-category moves are silent no-ops.
    pub fn reassign_category(&self, id: ProjectId, category: Category) -> bool {
        let changed = {
            let mut projects = self.projects.borrow_mut();
            match projects.iter_mut().find(|project| project.id == id) {
                Some(project) if project.category != category => {
                    project.category = category;
                    true
                }
                Some(_) => {
                    debug!("event=project_reassign module=store status=unchanged id={id} category={category}");
                    false
                }
                None => {
                    debug!("event=project_reassign module=store status=not_found id={id}");
                    false
                }
            }
        };

        if changed {
            debug!("event=project_reassign module=store status=ok id={id} category={category}");
            self.notify();
        }
        changed
    }

    /// Returns an order-preserving copy of the canonical collection.
    pub fn projects(&self) -> Vec<ProjectRecord> {
        self.projects.borrow().clone()
    }

    pub fn get(&self, id: ProjectId) -> Option<ProjectRecord> {
        self.projects
            .borrow()
            .iter()
            .find(|project| project.id == id)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.projects.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.borrow().is_empty()
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    fn notify(&self) {
        // Listeners registered during this broadcast wait for the next one.
        let listeners = self.listeners.borrow().clone();
        for listener in listeners {
            let snapshot = self.projects();
            listener(&snapshot);
        }
    }
}

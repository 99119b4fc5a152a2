//! Board view components and the drag-and-drop handoff between them.
//!
//! # Responsibility
//! - Derive per-category subsets from store notifications.
//! - Model drag payloads and the source/target capability contracts.
//! - Gather form input and forward validated records to the store.
//!
//! # Invariants
//! - Views never mutate records directly; every change goes through
//!   `ProjectStore`.
//! - Rendering is delegated to a `ProjectRenderer`; views do not build markup.

pub mod board;
pub mod category_view;
pub mod drag;
pub mod project_input;
pub mod project_item;
pub mod render;

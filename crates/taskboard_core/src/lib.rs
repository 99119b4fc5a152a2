//! Core logic for the taskboard project board.
//! The store in this crate is the single source of truth for board state.

pub mod logging;
pub mod model;
pub mod state;
pub mod view;

pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::draft::{ProjectDraft, ProjectValidationError, ValidProject, ValidationRules};
pub use model::project::{Category, ProjectId, ProjectRecord};
pub use state::project_store::{ProjectListener, ProjectStore};
pub use view::board::Board;
pub use view::category_view::{CategoryView, DROPPABLE_CLASS};
pub use view::drag::{
    DataTransfer, DragEvent, DragPhase, DragSession, DragSource, DragTarget, DropEffect,
    DRAG_PAYLOAD_TYPE,
};
pub use view::project_input::ProjectInput;
pub use view::project_item::ProjectItem;
pub use view::render::{ProjectRenderer, RecordingRenderer, RenderFrame};

/// Minimal health-check API for host integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

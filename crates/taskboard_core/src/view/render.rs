//! Rendering seam between board views and the host UI.

use crate::model::project::ProjectRecord;
use std::cell::RefCell;

/// Host-side list renderer.
///
/// Called with the container element id and the full subset to display.
/// Implementations replace the container contents on every call.
pub trait ProjectRenderer {
    fn render(&self, container_id: &str, projects: &[ProjectRecord]);
}

/// One captured render call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderFrame {
    pub container_id: String,
    pub projects: Vec<ProjectRecord>,
}

/// Renderer that records every frame in memory.
///
/// Used by headless hosts and tests to observe what a real UI would draw.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    frames: RefCell<Vec<RenderFrame>>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> Vec<RenderFrame> {
        self.frames.borrow().clone()
    }

    /// Returns the most recent frame drawn into `container_id`.
    pub fn last_frame(&self, container_id: &str) -> Option<RenderFrame> {
        self.frames
            .borrow()
            .iter()
            .rev()
            .find(|frame| frame.container_id == container_id)
            .cloned()
    }

    pub fn frame_count(&self, container_id: &str) -> usize {
        self.frames
            .borrow()
            .iter()
            .filter(|frame| frame.container_id == container_id)
            .count()
    }
}

impl ProjectRenderer for RecordingRenderer {
    fn render(&self, container_id: &str, projects: &[ProjectRecord]) {
        self.frames.borrow_mut().push(RenderFrame {
            container_id: container_id.to_string(),
            projects: projects.to_vec(),
        });
    }
}

//! Drag payload carrier, capability traits and session driver.
//!
//! The host event loop owns pointer tracking. This module only describes what
//! a drag event carries and what sources and targets do with it.

use log::debug;
use std::collections::BTreeMap;
use std::rc::Rc;

/// Payload type tag for a dragged project id.
pub const DRAG_PAYLOAD_TYPE: &str = "text/plain";

/// Operations a drag source allows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropEffect {
    #[default]
    None,
    Move,
}

/// Data carried by one drag session.
///
/// Mirrors the browser carrier: typed string entries plus the allowed effect.
/// `types()` keeps first-insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataTransfer {
    types: Vec<String>,
    entries: BTreeMap<String, String>,
    pub effect_allowed: DropEffect,
}

impl DataTransfer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_data(&mut self, format: &str, value: impl Into<String>) {
        if !self.entries.contains_key(format) {
            self.types.push(format.to_string());
        }
        self.entries.insert(format.to_string(), value.into());
    }

    pub fn get_data(&self, format: &str) -> Option<&str> {
        self.entries.get(format).map(String::as_str)
    }

    pub fn types(&self) -> &[String] {
        &self.types
    }

    /// Returns whether the first registered type is `format`.
    pub fn leads_with(&self, format: &str) -> bool {
        self.types.first().map(String::as_str) == Some(format)
    }
}

/// One dispatched drag event.
#[derive(Debug, Clone, Default)]
pub struct DragEvent {
    pub data_transfer: Option<DataTransfer>,
    default_prevented: bool,
}

impl DragEvent {
    pub fn new(data_transfer: DataTransfer) -> Self {
        Self {
            data_transfer: Some(data_transfer),
            default_prevented: false,
        }
    }

    /// Event without a payload carrier, as dispatched for foreign drags.
    pub fn without_payload() -> Self {
        Self::default()
    }

    /// Suppresses the default action. On drag-over this permits a drop.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    /// Returns the project id payload, if present.
    pub fn payload(&self) -> Option<&str> {
        self.data_transfer
            .as_ref()
            .and_then(|transfer| transfer.get_data(DRAG_PAYLOAD_TYPE))
    }
}

/// Capability of an element that can be picked up.
pub trait DragSource {
    fn drag_start(&self, event: &mut DragEvent);
    fn drag_end(&self, event: &DragEvent);
}

/// Capability of a container that can receive drops.
pub trait DragTarget {
    fn drag_over(&self, event: &mut DragEvent);
    fn drop_payload(&self, event: &mut DragEvent);
    fn drag_leave(&self, event: &DragEvent);
}

/// Lifecycle phase of a `DragSession`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPhase {
    Dragging,
    /// Hovering a target that accepted the payload.
    Over,
    Dropped,
    /// Released without a drop.
    Ended,
}

impl DragPhase {
    pub fn is_finished(self) -> bool {
        matches!(self, Self::Dropped | Self::Ended)
    }
}

/// Drives one drag interaction from pick-up to drop or abandonment.
///
/// Stands in for the host event dispatcher: each step builds the event the
/// browser would dispatch and hands it to the source or target. The session
/// remembers which target accepted the last drag-over; only that target
/// receives the drop, and it is sent a drag-leave when the pointer moves on.
pub struct DragSession {
    transfer: DataTransfer,
    phase: DragPhase,
    hovered: Option<Rc<dyn DragTarget>>,
}

impl DragSession {
    /// Starts a session; the source fills the payload.
    pub fn start(source: &impl DragSource) -> Self {
        let mut event = DragEvent::new(DataTransfer::new());
        source.drag_start(&mut event);
        let transfer = event.data_transfer.unwrap_or_default();
        debug!(
            "event=drag_start module=drag status=ok types={}",
            transfer.types().len()
        );
        Self {
            transfer,
            phase: DragPhase::Dragging,
            hovered: None,
        }
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    pub fn data_transfer(&self) -> &DataTransfer {
        &self.transfer
    }

    /// Moves the pointer over `target`. Returns whether the target accepted.
    ///
    /// A previously accepting target other than `target` gets a drag-leave
    /// first.
    pub fn over<T: DragTarget + 'static>(&mut self, target: &Rc<T>) -> bool {
        if self.phase.is_finished() {
            return false;
        }
        let target: Rc<dyn DragTarget> = target.clone();
        if !self.is_hovering(&target) {
            self.leave_hovered();
        }

        let mut event = self.event();
        target.drag_over(&mut event);
        if event.default_prevented() {
            self.hovered = Some(target);
            self.phase = DragPhase::Over;
            true
        } else {
            self.hovered = None;
            self.phase = DragPhase::Dragging;
            false
        }
    }

    pub fn leave<T: DragTarget + 'static>(&mut self, target: &Rc<T>) {
        if self.phase.is_finished() {
            return;
        }
        let target: Rc<dyn DragTarget> = target.clone();
        if self.is_hovering(&target) {
            self.hovered = None;
        }
        target.drag_leave(&self.event());
        self.phase = DragPhase::Dragging;
    }

    /// Releases over `target`.
    ///
    /// The drop fires only when `target` accepted the last drag-over.
    /// Releasing anywhere else ends the session without a drop and clears the
    /// marker on the target that was hovered.
    pub fn drop<T: DragTarget + 'static>(&mut self, target: &Rc<T>) -> bool {
        if self.phase.is_finished() {
            return false;
        }
        let target: Rc<dyn DragTarget> = target.clone();
        if self.phase == DragPhase::Over && self.is_hovering(&target) {
            self.hovered = None;
            let mut event = self.event();
            target.drop_payload(&mut event);
            self.phase = DragPhase::Dropped;
            debug!("event=drag_drop module=drag status=ok");
            return true;
        }

        self.leave_hovered();
        self.phase = DragPhase::Ended;
        debug!("event=drag_drop module=drag status=rejected");
        false
    }

    /// Notifies the source that the interaction finished.
    pub fn end(&mut self, source: &impl DragSource) {
        self.leave_hovered();
        source.drag_end(&self.event());
        if !self.phase.is_finished() {
            self.phase = DragPhase::Ended;
        }
    }

    fn is_hovering(&self, target: &Rc<dyn DragTarget>) -> bool {
        self.hovered
            .as_ref()
            .is_some_and(|hovered| same_target(hovered, target))
    }

    fn leave_hovered(&mut self) {
        if let Some(previous) = self.hovered.take() {
            previous.drag_leave(&self.event());
        }
    }

    fn event(&self) -> DragEvent {
        DragEvent::new(self.transfer.clone())
    }
}

fn same_target(left: &Rc<dyn DragTarget>, right: &Rc<dyn DragTarget>) -> bool {
    Rc::as_ptr(left).cast::<()>() == Rc::as_ptr(right).cast::<()>()
}

//! Project board domain model.
//!
//! # Responsibility
//! - Define canonical records owned by the project store.
//! - Define the two-valued category partition shared by store and views.
//!
//! # Invariants
//! - Every record is identified by a stable `ProjectId`.
//! - Records are never removed; only `category` changes after creation.

pub mod draft;
pub mod project;

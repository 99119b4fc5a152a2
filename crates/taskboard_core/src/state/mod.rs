//! Observable in-memory board state.
//!
//! # Responsibility
//! - Own the authoritative ordered list of project records.
//! - Broadcast full snapshots to subscribers after every mutation.
//!
//! # Invariants
//! - Notification is synchronous and happens only after a mutation completes.
//! - State lives for the process lifetime; nothing is persisted.

pub mod project_store;

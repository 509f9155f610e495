//! Observable state layer.
//!
//! # Responsibility
//! - Own all projects and dispatch change notifications.
//!
//! # Invariants
//! - The store is the single writer of project state.
//! - Listeners are notified only on actual state deltas.

pub mod project_store;

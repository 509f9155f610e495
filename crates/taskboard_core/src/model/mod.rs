//! Domain model for the task board.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//!
//! # Invariants
//! - Every domain object is identified by a stable `ProjectId`.
//! - Status is the only field that may change after creation.

pub mod project;

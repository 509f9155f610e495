//! Core domain logic for the task board.
//! This crate is the single source of truth for business invariants:
//! the observable project store, the status-transition rules, and the
//! creation-input validation contract. Rendering is an external
//! collaborator that subscribes to the store and projects snapshots onto
//! the page.

pub mod logging;
pub mod model;
pub mod service;
pub mod store;
pub mod validation;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::project::{partition, Project, ProjectId, ProjectStatus};
pub use service::board_service::BoardService;
pub use store::project_store::{global_store, Listener, ProjectStore};
pub use validation::{
    validate, Constraints, DraftValidationError, FieldValue, ProjectDraft, ProjectField,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

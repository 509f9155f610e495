//! Board use-case service.
//!
//! # Responsibility
//! - Gate project creation behind the draft validation rule.
//! - Translate drag-and-drop completion payloads into store transitions.
//!
//! # Invariants
//! - `add_project` is only reached with a fully validated draft.
//! - Implausible drop payloads are ignored before touching the store.

use crate::model::project::{ProjectId, ProjectStatus};
use crate::store::project_store::{Listener, ProjectStore};
use crate::validation::{DraftValidationError, ProjectDraft};
use log::debug;
use uuid::Uuid;

/// Use-case facade over an owned project store.
///
/// Collaborators that render the board register their listeners through
/// [`BoardService::subscribe`] and feed raw form/drop input into the two
/// entry points below.
#[derive(Default)]
pub struct BoardService {
    store: ProjectStore,
}

impl BoardService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a service around an existing store.
    pub fn with_store(store: ProjectStore) -> Self {
        Self { store }
    }

    /// Registers one render listener on the underlying store.
    pub fn subscribe(&mut self, listener: Listener) {
        self.store.add_listener(listener);
    }

    /// Validates raw form input and creates the project on full success.
    ///
    /// Rejection is all-or-nothing: on any field failure the store is
    /// untouched and no notification fires. The returned error names every
    /// failed field so the caller can surface one aggregate message.
    pub fn submit(
        &mut self,
        title: &str,
        description: &str,
        people: &str,
    ) -> Result<ProjectId, DraftValidationError> {
        let draft = ProjectDraft::from_input(title, description, people)?;
        Ok(self
            .store
            .add_project(draft.title, draft.description, draft.people))
    }

    /// Handles a completed drop onto the list showing `target`.
    ///
    /// The target status comes from which list accepted the drop, never
    /// from the dragged project. Payloads that are not plausible id text
    /// are ignored; ids that parse but match no project fall through to the
    /// store's silent no-op.
    pub fn complete_drop(&mut self, payload: &str, target: ProjectStatus) {
        let Ok(id) = Uuid::parse_str(payload.trim()) else {
            debug!("event=drop_ignored module=service status=bad_payload");
            return;
        };
        self.store.move_project(id, target);
    }

    /// Read access for render collaborators outside a notification.
    pub fn store(&self) -> &ProjectStore {
        &self.store
    }
}

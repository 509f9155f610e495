//! Project domain model.
//!
//! # Responsibility
//! - Define the canonical project record and its binary status.
//! - Provide the status-transition primitive used by the store.
//! - Classify snapshots into the derived Active/Finished partitions.
//!
//! # Invariants
//! - `id` is stable and never reused for another project.
//! - `status` is the only mutable field after creation.
//! - Every project belongs to exactly one partition at all times; the
//!   partition is derived from `status`, never stored.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for one project.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ProjectId = Uuid;

/// Binary lifecycle state of a project.
///
/// Both directions are legal: a finished project can be reopened without
/// restriction, and no history of prior states is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    /// On the board and being worked on.
    Active,
    /// Moved to the finished list.
    Finished,
}

impl ProjectStatus {
    /// Returns the other status.
    pub fn opposite(self) -> Self {
        match self {
            Self::Active => Self::Finished,
            Self::Finished => Self::Active,
        }
    }
}

/// Canonical record for one board entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Stable global ID used for drag payloads and listener bookkeeping.
    pub id: ProjectId,
    /// Short display title. Non-empty after trimming.
    pub title: String,
    /// Longer free-form text. At least 5 characters.
    pub description: String,
    /// Number of people assigned, in `1..=5`.
    pub people: u32,
    /// Current partition membership.
    pub status: ProjectStatus,
}

impl Project {
    /// Creates a new project with a generated stable ID and status `Active`.
    ///
    /// Field validation is the caller's job; the model accepts whatever
    /// well-typed values it is given.
    pub fn new(title: impl Into<String>, description: impl Into<String>, people: u32) -> Self {
        Self::with_id(Uuid::new_v4(), title, description, people)
    }

    /// Creates a new project with a caller-provided stable ID.
    ///
    /// Used by tests that need deterministic identities. The provided `id`
    /// must remain stable for the project lifetime.
    pub fn with_id(
        id: ProjectId,
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            people,
            status: ProjectStatus::Active,
        }
    }

    /// Applies a status transition, returning whether anything changed.
    ///
    /// Moving to the current status is a no-op and returns `false`; callers
    /// use the return value to suppress listener notification.
    pub fn move_to(&mut self, target: ProjectStatus) -> bool {
        if self.status == target {
            return false;
        }
        self.status = target;
        true
    }

    /// Returns whether this project sits in the given partition.
    pub fn in_partition(&self, status: ProjectStatus) -> bool {
        self.status == status
    }
}

/// Filters a snapshot down to one partition, preserving insertion order.
///
/// Recomputed from the full snapshot on every notification; membership is
/// never cached between renders.
pub fn partition(projects: &[Project], status: ProjectStatus) -> Vec<Project> {
    projects
        .iter()
        .filter(|project| project.in_partition(status))
        .cloned()
        .collect()
}

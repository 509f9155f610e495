//! Observable project store.
//!
//! # Responsibility
//! - Own the authoritative, insertion-ordered project sequence.
//! - Apply creation and status-transition requests.
//! - Notify registered listeners with an owned snapshot after every
//!   accepted mutation.
//!
//! # Invariants
//! - The store is the only component that mutates a project's status.
//! - Listeners run synchronously, in registration order.
//! - Listeners are notified only on an actual state delta: unknown ids and
//!   same-status moves are silent no-ops.
//! - Snapshots are owned copies; a listener can never reach the store's
//!   internal sequence through one.

use crate::model::project::{Project, ProjectId, ProjectStatus};
use log::{debug, info};
use once_cell::sync::Lazy;
use std::sync::Mutex;

/// Callback invoked with a full snapshot after any accepted mutation.
///
/// Listeners must not call back into the store that is notifying them: for
/// an owned store the borrow checker forbids it, and through
/// [`global_store`] it would deadlock on the guarding mutex. A panicking
/// listener unwinds through the mutating call and skips the listeners
/// registered after it.
pub type Listener = Box<dyn FnMut(&[Project]) + Send>;

static GLOBAL_STORE: Lazy<Mutex<ProjectStore>> = Lazy::new(|| Mutex::new(ProjectStore::new()));

/// Returns the process-wide store instance.
///
/// Lazily constructed on first access and never torn down; all access is
/// serialized behind the mutex. Collaborators that can thread a store
/// through their constructors should prefer an owned [`ProjectStore`].
pub fn global_store() -> &'static Mutex<ProjectStore> {
    &GLOBAL_STORE
}

/// Single source of truth for all projects on the board.
#[derive(Default)]
pub struct ProjectStore {
    projects: Vec<Project>,
    listeners: Vec<Listener>,
}

impl ProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one listener.
    ///
    /// Current state is not replayed to the new listener; callers that need
    /// the empty-state baseline must register before any project exists.
    /// There is no unregistration, matching the register-once lifetime of
    /// the views created at startup.
    pub fn add_listener(&mut self, listener: Listener) {
        self.listeners.push(listener);
    }

    /// Creates a project with status `Active` and a fresh ID, appends it,
    /// and notifies all listeners.
    ///
    /// The store performs no field validation; callers run the creation
    /// rule first (see `ProjectDraft::from_input`).
    pub fn add_project(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
    ) -> ProjectId {
        let project = Project::new(title, description, people);
        let id = project.id;
        self.projects.push(project);
        info!(
            "event=project_added module=store status=ok id={id} total={}",
            self.projects.len()
        );
        self.notify_listeners();
        id
    }

    /// Moves one project to `new_status`, notifying listeners on change.
    ///
    /// Unknown ids and moves to the current status are silent no-ops with
    /// no notification. Unknown ids are expected from stale drag payloads
    /// and are not an error.
    pub fn move_project(&mut self, id: ProjectId, new_status: ProjectStatus) {
        let Some(project) = self.projects.iter_mut().find(|project| project.id == id) else {
            debug!("event=move_ignored module=store status=unknown_id id={id}");
            return;
        };
        if !project.move_to(new_status) {
            debug!("event=move_ignored module=store status=no_change id={id}");
            return;
        }
        info!("event=project_moved module=store status=ok id={id} target={new_status:?}");
        self.notify_listeners();
    }

    /// Returns an owned copy of the current project sequence.
    pub fn snapshot(&self) -> Vec<Project> {
        self.projects.clone()
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    fn notify_listeners(&mut self) {
        // One copy shared by every listener in this round; listeners only
        // ever see the clone.
        let snapshot = self.projects.clone();
        for listener in &mut self.listeners {
            listener(&snapshot);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ProjectStore;
    use crate::model::project::ProjectStatus;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn counting_listener(counter: Arc<AtomicUsize>) -> super::Listener {
        Box::new(move |_projects| {
            counter.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[test]
    fn add_project_notifies_in_registration_order() {
        let order = Arc::new(std::sync::Mutex::new(Vec::new()));
        let mut store = ProjectStore::new();
        for tag in ["first", "second"] {
            let order = Arc::clone(&order);
            store.add_listener(Box::new(move |_projects| {
                order.lock().unwrap().push(tag);
            }));
        }

        store.add_project("t", "description", 1);
        assert_eq!(*order.lock().unwrap(), vec!["first", "second"]);
    }

    #[test]
    fn new_listener_gets_no_catch_up_replay() {
        let counter = Arc::new(AtomicUsize::new(0));
        let mut store = ProjectStore::new();
        store.add_project("t", "description", 1);

        store.add_listener(counting_listener(Arc::clone(&counter)));
        assert_eq!(counter.load(Ordering::SeqCst), 0);

        store.add_project("u", "another one", 2);
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn move_to_current_status_suppresses_notification() {
        let counter = Arc::new(AtomicUsize::new(0));
        let mut store = ProjectStore::new();
        let id = store.add_project("t", "description", 1);
        store.add_listener(counting_listener(Arc::clone(&counter)));

        store.move_project(id, ProjectStatus::Active);
        assert_eq!(counter.load(Ordering::SeqCst), 0);

        store.move_project(id, ProjectStatus::Finished);
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn global_store_returns_the_same_instance() {
        let first = super::global_store() as *const _;
        let second = super::global_store() as *const _;
        assert_eq!(first, second);
    }
}

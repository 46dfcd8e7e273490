//! Notifications emitted to the view layer.
//!
//! Observers are called synchronously, in subscription order, on the thread
//! that drives the model.

use std::sync::{Mutex, PoisonError};

use difftree_tree::NodeId;
use difftree_types::CheckState;

use crate::role::Role;

/// A notification from [`DiffTreeModel`](crate::DiffTreeModel).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ModelEvent {
    /// The tree is about to be replaced. Node ids are still valid.
    AboutToReset,
    /// The tree was replaced. Every earlier node id is stale.
    Reset,
    /// The answer to `role` may have changed for `node`.
    DataChanged { node: NodeId, role: Role },
    /// The user asked for `node` to become `value`.
    ///
    /// Carries the request, not the derived aggregate.
    CheckStateChanged { node: NodeId, value: CheckState },
}

/// Receives [`ModelEvent`]s.
pub trait ModelObserver {
    fn on_event(&self, event: &ModelEvent);
}

/// Observer that records every event, for tests and tooling.
#[derive(Debug, Default)]
pub struct EventLog {
    events: Mutex<Vec<ModelEvent>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything recorded so far.
    pub fn events(&self) -> Vec<ModelEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Drain the recorded events.
    pub fn take(&self) -> Vec<ModelEvent> {
        std::mem::take(&mut *self.events.lock().unwrap_or_else(PoisonError::into_inner))
    }

    pub fn is_empty(&self) -> bool {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }
}

impl ModelObserver for EventLog {
    fn on_event(&self, event: &ModelEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event.clone());
    }
}

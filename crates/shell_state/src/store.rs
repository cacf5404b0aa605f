use std::sync::Arc;

use tracing::debug;

use crate::{action::Action, model::AppState, reducer::reduce};

/// Owns the latest snapshot and feeds dispatched actions through the reducer.
#[derive(Debug, Clone, Default)]
pub struct Store {
    state: Arc<AppState>,
}

impl Store {
    pub fn new(initial: AppState) -> Self {
        Self {
            state: Arc::new(initial),
        }
    }

    pub fn state(&self) -> Arc<AppState> {
        Arc::clone(&self.state)
    }

    pub fn dispatch(&mut self, action: &Action) -> Arc<AppState> {
        let next = reduce(&self.state, action);
        if Arc::ptr_eq(&next, &self.state) {
            debug!(action = action.kind(), "ui action left state unchanged");
        } else {
            debug!(action = action.kind(), "dispatched ui action");
        }
        self.state = next;
        self.state()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch_replaces_snapshot_and_keeps_previous_intact() {
        let mut store = Store::default();
        let before = store.state();

        let after = store.dispatch(&Action::PageChanged);

        assert!(!before.unsaved_changes);
        assert!(after.unsaved_changes);
        assert!(Arc::ptr_eq(&after, &store.state()));
    }

    #[test]
    fn dispatch_of_unknown_action_keeps_snapshot() {
        let mut store = Store::new(AppState {
            is_loading: true,
            ..AppState::default()
        });
        let before = store.state();

        let after = store.dispatch(&Action::Unknown);

        assert!(Arc::ptr_eq(&before, &after));
    }
}

//! Bookkeeping for the global event listeners a toolbar holds
//!
//! The toolbar listens to window-wide pointer and keyboard events. Which
//! listeners it wants is derived from its state (mounted, hotkey enabled,
//! hotkey generation); the tracker reconciles that desired set with the
//! currently registered one so every registration has a matching release.

use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ListenerKind {
    PointerMove,
    PointerUp,
    KeyDown,
    KeyUp,
}

impl ListenerKind {
    pub fn is_pointer(self) -> bool {
        matches!(self, ListenerKind::PointerMove | ListenerKind::PointerUp)
    }

    pub fn is_keyboard(self) -> bool {
        matches!(self, ListenerKind::KeyDown | ListenerKind::KeyUp)
    }
}

/// A listener registration; a new generation replaces the old registration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Listener {
    pub kind: ListenerKind,
    pub generation: u64,
}

impl Listener {
    pub fn new(kind: ListenerKind, generation: u64) -> Self {
        Self { kind, generation }
    }
}

#[derive(Debug, Default)]
pub struct ListenerTracker {
    active: BTreeSet<Listener>,
    added: usize,
    removed: usize,
}

impl ListenerTracker {
    /// Release listeners no longer wanted, then register new ones
    pub fn reconcile(&mut self, desired: impl IntoIterator<Item = Listener>) {
        let desired: BTreeSet<Listener> = desired.into_iter().collect();

        let stale: Vec<Listener> = self.active.difference(&desired).copied().collect();
        for listener in stale {
            self.active.remove(&listener);
            self.removed += 1;
            log::debug!("Removed {:?} listener", listener);
        }

        let fresh: Vec<Listener> = desired.difference(&self.active).copied().collect();
        for listener in fresh {
            self.active.insert(listener);
            self.added += 1;
            log::debug!("Added {:?} listener", listener);
        }
    }

    pub fn clear(&mut self) {
        self.reconcile(std::iter::empty());
    }

    pub fn active(&self) -> impl Iterator<Item = &Listener> {
        self.active.iter()
    }

    pub fn is_active(&self, kind: ListenerKind) -> bool {
        self.active.iter().any(|listener| listener.kind == kind)
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Total registrations made so far
    pub fn added(&self) -> usize {
        self.added
    }

    /// Total releases made so far
    pub fn removed(&self) -> usize {
        self.removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_set(key_generation: u64) -> Vec<Listener> {
        vec![
            Listener::new(ListenerKind::PointerMove, 0),
            Listener::new(ListenerKind::PointerUp, 0),
            Listener::new(ListenerKind::KeyDown, key_generation),
            Listener::new(ListenerKind::KeyUp, key_generation),
        ]
    }

    #[test]
    fn test_reconcile_is_idempotent() {
        let mut tracker = ListenerTracker::default();
        tracker.reconcile(full_set(0));
        tracker.reconcile(full_set(0));
        assert_eq!(tracker.added(), 4);
        assert_eq!(tracker.removed(), 0);
        assert!(tracker.is_active(ListenerKind::KeyDown));
    }

    #[test]
    fn test_new_generation_replaces_keyboard_listeners() {
        let mut tracker = ListenerTracker::default();
        tracker.reconcile(full_set(0));
        tracker.reconcile(full_set(1));
        assert_eq!(tracker.added(), 6);
        assert_eq!(tracker.removed(), 2);
        assert_eq!(tracker.active().count(), 4);
        assert!(
            tracker
                .active()
                .filter(|listener| listener.kind.is_keyboard())
                .all(|listener| listener.generation == 1)
        );
    }

    #[test]
    fn test_clear_releases_everything() {
        let mut tracker = ListenerTracker::default();
        tracker.reconcile(full_set(0));
        tracker.reconcile(full_set(1));
        tracker.clear();
        assert!(tracker.is_empty());
        assert_eq!(tracker.added(), tracker.removed());
    }
}

//! Reactive state for one sortable widget.
//!
//! A [`SortableStore`] holds the item order, the active item, the sorting
//! strategy, movement modifiers and the cursor flag. It is owned by one
//! widget instance and handed to children through a [`StoreContext`];
//! nothing about it is global.
//!
//! Writes go through the `set_*` methods. A write that changes its slice
//! publishes a new [`StoreState`] snapshot on [`SortableStore::changed`]
//! synchronously, before the setter returns. Consumers either subscribe to
//! every snapshot or [`select`](SortableStore::select) a projection and are
//! only called when that projection's value changes.
//!
//! # Example
//!
//! ```
//! use std::sync::{Arc, Weak};
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use horizon_sortable::model::items_from_ids;
//! use horizon_sortable::store::SortableStore;
//!
//! let store = SortableStore::new();
//! let renders = Arc::new(AtomicUsize::new(0));
//!
//! let r = renders.clone();
//! store.select(|s| s.items.len(), move |_len| {
//!     r.fetch_add(1, Ordering::SeqCst);
//! });
//!
//! store.set_items(items_from_ids(["a", "b"]));
//! store.set_flat_cursor(false); // unrelated slice, no re-render
//! assert_eq!(renders.load(Ordering::SeqCst), 1);
//! ```

mod context;
mod state;

use std::sync::{Arc, Weak};

use horizon_sortable_core::{ConnectionId, Property, Signal};
use parking_lot::Mutex;

use crate::error::Result;
use crate::model::SortableItem;
use crate::orientation::{Modifier, SortingStrategy};

pub use context::{SortableStoreProvider, StoreContext};
pub use state::{StoreSlice, StoreState};

/// Payload of [`SortableStore::changed`].
#[derive(Debug, Clone)]
pub struct StoreChange {
    /// The slice that was written.
    pub slice: StoreSlice,
    /// The state after the write.
    pub state: Arc<StoreState>,
}

/// Reactive state container for one sortable widget.
pub struct SortableStore {
    state: Arc<Property<Arc<StoreState>>>,
    changed: Signal<StoreChange>,
}

impl Default for SortableStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SortableStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SortableStore")
            .field("state", &self.snapshot())
            .field("subscribers", &self.changed.connection_count())
            .finish()
    }
}

impl SortableStore {
    /// Creates a store with the default state.
    pub fn new() -> Self {
        Self::with_state(StoreState::default())
    }

    /// Creates a store with an initial state.
    pub fn with_state(state: StoreState) -> Self {
        Self {
            state: Arc::new(Property::new(Arc::new(state))),
            changed: Signal::new(),
        }
    }

    // -------------------------------------------------------------------------
    // Reads
    // -------------------------------------------------------------------------

    /// The current snapshot.
    pub fn snapshot(&self) -> Arc<StoreState> {
        self.state.get()
    }

    /// Reads the current state without cloning it.
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&StoreState) -> R,
    {
        self.state.with(|state| f(state))
    }

    /// The current items.
    pub fn items(&self) -> Vec<SortableItem> {
        self.with(|s| s.items.clone())
    }

    /// The item being dragged, if any.
    pub fn active_item(&self) -> Option<SortableItem> {
        self.with(|s| s.active_item.clone())
    }

    /// The sorting strategy.
    pub fn strategy(&self) -> Option<SortingStrategy> {
        self.with(|s| s.strategy.clone())
    }

    /// The movement modifiers.
    pub fn modifiers(&self) -> Vec<Modifier> {
        self.with(|s| s.modifiers.clone())
    }

    /// The cursor flag.
    pub fn flat_cursor(&self) -> bool {
        self.with(|s| s.flat_cursor)
    }

    // -------------------------------------------------------------------------
    // Writes
    // -------------------------------------------------------------------------

    /// Replaces the items. Returns `true` if subscribers were notified.
    pub fn set_items(&self, items: Vec<SortableItem>) -> bool {
        self.write(StoreSlice::Items, |s| s.items = items)
    }

    /// Replaces the active item.
    pub fn set_active_item(&self, item: Option<SortableItem>) -> bool {
        self.write(StoreSlice::ActiveItem, |s| s.active_item = item)
    }

    /// Replaces the sorting strategy.
    pub fn set_strategy(&self, strategy: Option<SortingStrategy>) -> bool {
        self.write(StoreSlice::Strategy, |s| s.strategy = strategy)
    }

    /// Replaces the movement modifiers.
    pub fn set_modifiers(&self, modifiers: Vec<Modifier>) -> bool {
        self.write(StoreSlice::Modifiers, |s| s.modifiers = modifiers)
    }

    /// Replaces the cursor flag.
    pub fn set_flat_cursor(&self, flat_cursor: bool) -> bool {
        self.write(StoreSlice::FlatCursor, |s| s.flat_cursor = flat_cursor)
    }

    fn write<F>(&self, slice: StoreSlice, apply: F) -> bool
    where
        F: FnOnce(&mut StoreState),
    {
        let next = self.state.update(|current| {
            let mut next = StoreState::clone(current);
            apply(&mut next);
            Arc::new(next)
        });

        match next {
            Some(state) => {
                tracing::debug!(target: "horizon_sortable::store", ?slice, "store slice changed");
                self.changed.emit(StoreChange { slice, state });
                true
            }
            None => false,
        }
    }

    // -------------------------------------------------------------------------
    // Subscriptions
    // -------------------------------------------------------------------------

    /// Signal emitted after every effective write.
    pub fn changed(&self) -> &Signal<StoreChange> {
        &self.changed
    }

    /// Calls `listener` with every new snapshot.
    pub fn subscribe<F>(&self, listener: F) -> ConnectionId
    where
        F: Fn(&StoreState) + Send + Sync + 'static,
    {
        self.changed.connect(move |change| listener(&change.state))
    }

    /// Calls `on_change` only when `projection` yields a different value.
    ///
    /// The projection is evaluated once immediately to seed the comparison
    /// and then after every write, against the store's current state rather
    /// than the emitted snapshot: a listener that writes during an emission
    /// makes the outer snapshot stale by the time later listeners see it.
    pub fn select<T, P, F>(&self, projection: P, on_change: F) -> ConnectionId
    where
        T: PartialEq + Clone + Send + 'static,
        P: Fn(&StoreState) -> T + Send + Sync + 'static,
        F: Fn(&T) + Send + Sync + 'static,
    {
        let last = Mutex::new(self.with(&projection));
        let current: Weak<Property<Arc<StoreState>>> = Arc::downgrade(&self.state);
        self.changed.connect(move |change| {
            let next = match current.upgrade() {
                Some(state) => state.with(|state| projection(state)),
                None => projection(&change.state),
            };
            let mut last = last.lock();
            if *last != next {
                *last = next.clone();
                drop(last);
                on_change(&next);
            }
        })
    }

    /// Removes a subscription made with `subscribe` or `select`.
    pub fn unsubscribe(&self, id: ConnectionId) -> Result<()> {
        Ok(self.changed.try_disconnect(id)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ItemId, items_from_ids};
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_defaults() {
        let store = SortableStore::new();
        assert!(store.items().is_empty());
        assert_eq!(store.strategy(), Some(SortingStrategy::Rect));
        assert!(store.flat_cursor());
        assert!(store.modifiers().is_empty());
        assert!(store.active_item().is_none());
    }

    #[test]
    fn test_setters_notify_synchronously() {
        let store = SortableStore::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let s = seen.clone();
        store.changed().connect(move |change| s.lock().push(change.slice));

        assert!(store.set_items(items_from_ids(["a"])));
        assert_eq!(*seen.lock(), vec![StoreSlice::Items]);

        assert!(store.set_active_item(Some(SortableItem::new("a"))));
        assert!(store.set_strategy(Some(SortingStrategy::VerticalList)));
        assert!(store.set_modifiers(vec![Modifier::RestrictToVerticalAxis]));
        assert!(store.set_flat_cursor(false));

        assert_eq!(
            *seen.lock(),
            vec![
                StoreSlice::Items,
                StoreSlice::ActiveItem,
                StoreSlice::Strategy,
                StoreSlice::Modifiers,
                StoreSlice::FlatCursor,
            ]
        );
    }

    #[test]
    fn test_unchanged_write_is_silent() {
        let store = SortableStore::new();
        let count = Arc::new(AtomicUsize::new(0));
        let c = count.clone();
        store.subscribe(move |_| {
            c.fetch_add(1, Ordering::SeqCst);
        });

        assert!(!store.set_flat_cursor(true));
        assert!(!store.set_items(Vec::new()));
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_select_only_fires_on_projection_change() {
        let store = SortableStore::with_state(StoreState::with_items(items_from_ids(["a", "b"])));
        let ids = Arc::new(Mutex::new(Vec::new()));

        let i = ids.clone();
        store.select(
            |s| s.active_item.as_ref().map(|item| item.id.clone()),
            move |active| i.lock().push(active.clone()),
        );

        store.set_items(items_from_ids(["b", "a"]));
        store.set_strategy(None);
        assert!(ids.lock().is_empty());

        store.set_active_item(Some(SortableItem::new("a")));
        store.set_active_item(None);
        assert_eq!(*ids.lock(), vec![Some(ItemId::from("a")), None]);
    }

    #[test]
    fn test_snapshot_is_immutable() {
        let store = SortableStore::with_state(StoreState::with_items(items_from_ids(["a"])));
        let before = store.snapshot();
        store.set_items(items_from_ids(["x", "y"]));
        assert_eq!(before.items.len(), 1);
        assert_eq!(store.snapshot().items.len(), 2);
    }

    #[test]
    fn test_unsubscribe() {
        let store = SortableStore::new();
        let count = Arc::new(AtomicUsize::new(0));
        let c = count.clone();
        let id = store.subscribe(move |_| {
            c.fetch_add(1, Ordering::SeqCst);
        });

        store.set_flat_cursor(false);
        store.unsubscribe(id).unwrap();
        store.set_flat_cursor(true);
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert!(store.unsubscribe(id).is_err());
    }

    #[test]
    fn test_select_tracks_writes_made_by_listeners() {
        let store = Arc::new(SortableStore::new());

        // Normalizes the cursor flag back to `true` whenever it is cleared.
        let weak = Arc::downgrade(&store);
        store.subscribe(move |state| {
            if !state.flat_cursor {
                if let Some(store) = weak.upgrade() {
                    store.set_flat_cursor(true);
                }
            }
        });

        let seen = Arc::new(Mutex::new(Vec::new()));
        let s = seen.clone();
        store.select(|state| state.flat_cursor, move |flat| s.lock().push(*flat));

        store.set_flat_cursor(false);
        assert!(store.flat_cursor());
        // The projection never settled on `false`, so nothing was re-rendered
        // and the last seen value still matches the store.
        assert!(seen.lock().is_empty());

        // A later effective change is still delivered.
        let other = Arc::new(Mutex::new(Vec::new()));
        let o = other.clone();
        store.select(|state| state.items.len(), move |len| o.lock().push(*len));
        store.set_items(items_from_ids(["a"]));
        assert_eq!(*other.lock(), vec![1]);
    }
}

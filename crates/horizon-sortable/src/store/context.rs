//! Store provider and the context handle children read it through.

use std::sync::Arc;

use crate::error::{Result, SortableError};
use crate::model::SortableItem;
use crate::orientation::SortingStrategy;

use super::{SortableStore, StoreState};

/// Owns the store of one mounted widget and keeps it in sync with props.
///
/// The store is created once, from the defaults overlaid with the initial
/// props. Afterwards [`sync`](Self::sync) copies new prop values in; the
/// props stay the source of truth and the store never writes back to them.
#[derive(Debug)]
pub struct SortableStoreProvider {
    store: Arc<SortableStore>,
}

impl SortableStoreProvider {
    /// Creates the store from the initial props.
    ///
    /// The strategy prop is taken as given; `None` leaves the choice to the
    /// layout layer.
    pub fn new(items: Vec<SortableItem>, strategy: Option<SortingStrategy>) -> Self {
        let state = StoreState {
            strategy,
            ..StoreState::with_items(items)
        };
        Self {
            store: Arc::new(SortableStore::with_state(state)),
        }
    }

    /// Copies new prop values into the store.
    ///
    /// Only slices whose value differs cause a notification.
    pub fn sync(&self, items: Vec<SortableItem>, strategy: Option<SortingStrategy>) {
        self.store.set_items(items);
        self.store.set_strategy(strategy);
    }

    /// The owned store.
    pub fn store(&self) -> &Arc<SortableStore> {
        &self.store
    }

    /// A context handle for child components.
    pub fn context(&self) -> StoreContext {
        StoreContext {
            store: Some(self.store.clone()),
        }
    }
}

/// How a child component reaches its widget's store.
///
/// A context created with [`StoreContext::detached`] has no store; reading
/// from it is a composition bug.
#[derive(Debug, Clone, Default)]
pub struct StoreContext {
    store: Option<Arc<SortableStore>>,
}

impl StoreContext {
    /// A context outside of any provider.
    pub fn detached() -> Self {
        Self { store: None }
    }

    /// Returns true if this context is inside a provider.
    pub fn is_provided(&self) -> bool {
        self.store.is_some()
    }

    /// Returns the store, or `MissingStoreContext` outside a provider.
    pub fn try_store(&self) -> Result<&Arc<SortableStore>> {
        self.store.as_ref().ok_or(SortableError::MissingStoreContext)
    }

    /// Returns the store.
    ///
    /// # Panics
    ///
    /// Panics if the context is not inside a [`SortableStoreProvider`].
    /// This is a composition error that cannot be recovered at runtime.
    pub fn store(&self) -> &Arc<SortableStore> {
        match self.store.as_ref() {
            Some(store) => store,
            None => panic!("{}", SortableError::MissingStoreContext),
        }
    }

    /// Reads a projection of the current state.
    pub fn select<T, F>(&self, projection: F) -> Result<T>
    where
        F: FnOnce(&StoreState) -> T,
    {
        Ok(self.try_store()?.with(projection))
    }
}

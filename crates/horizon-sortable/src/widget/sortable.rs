//! Self-managing sortable list.
//!
//! [`Sortable`] keeps its own copy of the collection and feeds every
//! reorder back into it, so a host that does not need to own the order can
//! hand over the data and forget about it.

use std::fmt;
use std::sync::Arc;

use horizon_sortable_core::Property;

use crate::drag::DragEvent;
use crate::model::{self, ItemId, SortableItem};
use crate::store::{SortableStoreProvider, StoreContext};

use super::root::{SortableRoot, SortableRootBuilder};

/// How a row's render key is derived.
#[derive(Clone)]
pub enum RowKey {
    /// Read the named field; `"id"` reads the item id.
    Field(String),
    /// Compute the key from the item.
    Func(Arc<dyn Fn(&SortableItem) -> Option<ItemId> + Send + Sync>),
}

impl Default for RowKey {
    fn default() -> Self {
        Self::Field("key".to_string())
    }
}

impl fmt::Debug for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(name) => f.debug_tuple("Field").field(name).finish(),
            Self::Func(_) => f.write_str("Func(..)"),
        }
    }
}

impl RowKey {
    /// Derives the key from a closure.
    pub fn func<F>(f: F) -> Self
    where
        F: Fn(&SortableItem) -> Option<ItemId> + Send + Sync + 'static,
    {
        Self::Func(Arc::new(f))
    }

    /// The key for `item` at `index`.
    ///
    /// Only a missing key or an empty string falls back to
    /// `sortable-item-{index}`. Integer `0` is kept as a key, unlike a
    /// falsy check would.
    pub fn key_for(&self, item: &SortableItem, index: usize) -> ItemId {
        let key = match self {
            Self::Field(name) if name == "id" => Some(item.id.clone()),
            Self::Field(name) => item.field(name).and_then(ItemId::from_value),
            Self::Func(f) => f(item),
        };
        match key {
            Some(key) if key.as_str() != Some("") => key,
            _ => ItemId::Str(format!("sortable-item-{index}")),
        }
    }
}

/// Options for [`Sortable`].
#[derive(Debug, Clone, Default)]
pub struct SortableOptions {
    /// How render keys are derived.
    pub row_key: RowKey,
    /// Whether rows may be removed through [`Sortable::remove`].
    pub removable: bool,
}

/// A sortable list that owns its collection.
pub struct Sortable {
    data: Arc<Property<Vec<SortableItem>>>,
    root: SortableRoot,
    options: SortableOptions,
}

impl fmt::Debug for Sortable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sortable")
            .field("len", &self.data.with(Vec::len))
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl Sortable {
    /// Creates a list with default root settings.
    pub fn new(data_source: Vec<SortableItem>, options: SortableOptions) -> Self {
        Self::with_root(data_source, options, SortableRoot::builder())
    }

    /// Creates a list, customizing the root through `builder`.
    ///
    /// The builder's items and `on_change` are replaced; the host's
    /// `on_change` is not needed because the list applies reorders itself.
    pub fn with_root(
        data_source: Vec<SortableItem>,
        options: SortableOptions,
        builder: SortableRootBuilder,
    ) -> Self {
        let data = Arc::new(Property::new(data_source.clone()));
        let provider = SortableStoreProvider::new(data_source.clone(), None);
        let store = provider.store().clone();

        let local = data.clone();
        let root = builder
            .items(data_source)
            .provider(provider)
            .on_change(move |items| {
                local.set(items.clone());
                store.set_items(items.clone());
            })
            .build();

        Self {
            data,
            root,
            options,
        }
    }

    /// Replaces the collection, discarding any local reorders.
    pub fn set_data_source(&self, items: Vec<SortableItem>) {
        self.data.set(items.clone());
        self.root.set_items(items);
    }

    /// The current collection.
    pub fn items(&self) -> Vec<SortableItem> {
        self.data.get()
    }

    /// Processes one drag lifecycle event.
    pub fn handle(&self, event: DragEvent) -> Option<String> {
        self.root.handle(event)
    }

    /// Render keys in collection order.
    pub fn render_keys(&self) -> Vec<ItemId> {
        self.data.with(|items| {
            items
                .iter()
                .enumerate()
                .map(|(index, item)| self.options.row_key.key_for(item, index))
                .collect()
        })
    }

    /// Whether rows may be removed.
    pub fn is_removable(&self) -> bool {
        self.options.removable
    }

    /// Removes the row with `id`. Returns `false` if rows are not removable
    /// or the id is unknown.
    pub fn remove(&self, id: &ItemId) -> bool {
        if !self.options.removable {
            return false;
        }
        let removed = self.data.update(|items| {
            let mut next = items.clone();
            if let Some(index) = model::index_of(items, id) {
                next.remove(index);
            }
            next
        });
        match removed {
            Some(_) => {
                tracing::debug!(target: "horizon_sortable::root", %id, "row removed");
                self.root.set_items(self.data.get());
                true
            }
            None => false,
        }
    }

    /// The underlying root.
    pub fn root(&self) -> &SortableRoot {
        &self.root
    }

    /// A context handle for item and overlay components.
    pub fn context(&self) -> StoreContext {
        self.root.context()
    }
}

//! Store state snapshot.

use crate::model::SortableItem;
use crate::orientation::{Modifier, SortingStrategy};

/// One immutable snapshot of a sortable store.
///
/// Writers never mutate a published snapshot; they build a new one, so
/// subscribers can hold on to the `Arc` they were handed.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreState {
    /// The ordered collection.
    pub items: Vec<SortableItem>,
    /// The item being dragged, if any.
    pub active_item: Option<SortableItem>,
    /// Sorting strategy tag, passed through to the layout layer.
    pub strategy: Option<SortingStrategy>,
    /// Movement modifiers, passed through to the sensor layer.
    pub modifiers: Vec<Modifier>,
    /// When set, items keep the default cursor instead of grab/grabbing.
    pub flat_cursor: bool,
}

impl Default for StoreState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            active_item: None,
            strategy: Some(SortingStrategy::Rect),
            modifiers: Vec::new(),
            flat_cursor: true,
        }
    }
}

impl StoreState {
    /// Creates the default state with the given items.
    pub fn with_items(items: Vec<SortableItem>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    /// Whether a drag is active.
    pub fn is_dragging(&self) -> bool {
        self.active_item.is_some()
    }
}

/// Identifies which slice of the state a write touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreSlice {
    /// `items`
    Items,
    /// `active_item`
    ActiveItem,
    /// `strategy`
    Strategy,
    /// `modifiers`
    Modifiers,
    /// `flat_cursor`
    FlatCursor,
}

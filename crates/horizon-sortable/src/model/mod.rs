//! Data model for sortable collections.
//!
//! A collection is a plain `Vec<SortableItem>`; its order is the displayed
//! and logical order. Item identity is the [`ItemId`], which the engine
//! assumes is unique within the collection.

mod item;

pub use item::{ItemId, SortableItem, items_from_ids};

/// Returns the zero-based index of the item with `id`, or `None` if absent.
pub fn index_of(items: &[SortableItem], id: &ItemId) -> Option<usize> {
    items.iter().position(|item| &item.id == id)
}

/// Returns the 1-based position of the item with `id`.
///
/// An absent id yields `0`, one past the "not found" index of `-1`. This
/// value only ever appears in announcement text.
pub fn position_of(items: &[SortableItem], id: &ItemId) -> usize {
    index_of(items, id).map_or(0, |index| index + 1)
}

/// Returns a clone of the item with `id`, if present.
pub fn find_item(items: &[SortableItem], id: &ItemId) -> Option<SortableItem> {
    items.iter().find(|item| &item.id == id).cloned()
}

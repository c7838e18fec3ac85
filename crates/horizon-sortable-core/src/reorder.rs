//! Pure reordering of ordered collections.
//!
//! [`array_move`] implements "move" semantics: the element at `from` is
//! removed and reinserted at `to` of the resulting shorter sequence, so
//! every element between the two positions shifts by one. Invalid indices
//! never fail; they produce an unchanged copy.
//!
//! ```
//! use horizon_sortable_core::reorder::array_move;
//!
//! let letters = ["a", "b", "c", "d"];
//! assert_eq!(array_move(&letters, 0, 2), vec!["b", "c", "a", "d"]);
//! assert_eq!(array_move(&letters, 3, 1), vec!["a", "d", "b", "c"]);
//! assert_eq!(array_move(&letters, 0, 9), letters.to_vec());
//! ```

use std::sync::Arc;

/// A reorder function: `(collection, from, to) -> new collection`.
///
/// Hosts can supply their own to replace [`array_move`].
pub type ReorderFn<T> = Arc<dyn Fn(&[T], usize, usize) -> Vec<T> + Send + Sync>;

/// Move the element at `from` to `to`, returning a new collection.
///
/// The input is never mutated. If either index is outside `[0, len)` or the
/// two are equal, the result is a clone of the input.
pub fn array_move<T: Clone>(items: &[T], from: usize, to: usize) -> Vec<T> {
    let mut moved = items.to_vec();
    let len = moved.len();
    if from >= len || to >= len || from == to {
        tracing::trace!(
            target: "horizon_sortable_core::reorder",
            from,
            to,
            len,
            "reorder is a no-op"
        );
        return moved;
    }

    let item = moved.remove(from);
    moved.insert(to, item);
    moved
}

/// The default [`ReorderFn`], wrapping [`array_move`].
pub fn default_reorder<T: Clone + 'static>() -> ReorderFn<T> {
    Arc::new(|items: &[T], from, to| array_move(items, from, to))
}

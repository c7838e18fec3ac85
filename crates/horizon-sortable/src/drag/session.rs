//! Drag session tracking.
//!
//! A [`DragSession`] exists conceptually from pick-up until drop or cancel.
//! There is exactly one session slot per root, so at most one item can be
//! active at a time.

use crate::model::{self, ItemId, SortableItem};

/// State of the session slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragState {
    /// No drag is active.
    Idle,
    /// A drag is in progress.
    Dragging,
}

/// The active drag session of a sortable root.
#[derive(Debug, Clone)]
pub struct DragSession {
    state: DragState,
    /// The picked-up item, `None` if idle or if its id was not found.
    active_item: Option<SortableItem>,
    /// Index the active item occupied at pick-up.
    origin_index: Option<usize>,
    /// Whether the next over event is the redundant one at the pick-up spot.
    first_over_pending: bool,
}

impl Default for DragSession {
    fn default() -> Self {
        Self::new()
    }
}

impl DragSession {
    /// Creates an idle session slot.
    pub fn new() -> Self {
        Self {
            state: DragState::Idle,
            active_item: None,
            origin_index: None,
            first_over_pending: true,
        }
    }

    /// Starts a session for `active_id`.
    ///
    /// If the id is not in `items` the drag still proceeds visually, but the
    /// session has no active item and a drop will not reorder anything.
    /// Returns the active item, if found.
    pub fn begin(&mut self, active_id: &ItemId, items: &[SortableItem]) -> Option<&SortableItem> {
        let origin_index = model::index_of(items, active_id);
        self.state = DragState::Dragging;
        self.origin_index = origin_index;
        self.active_item = origin_index.map(|index| items[index].clone());
        self.first_over_pending = true;
        self.active_item.as_ref()
    }

    /// Clears the session. Always callable; calling it twice is harmless.
    pub fn end(&mut self) {
        self.state = DragState::Idle;
        self.active_item = None;
        self.origin_index = None;
        self.first_over_pending = true;
    }

    /// Returns the session state.
    pub fn state(&self) -> DragState {
        self.state
    }

    /// Returns true while a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.state == DragState::Dragging
    }

    /// The picked-up item, if any.
    pub fn active_item(&self) -> Option<&SortableItem> {
        self.active_item.as_ref()
    }

    /// The index the active item had at pick-up.
    pub fn origin_index(&self) -> Option<usize> {
        self.origin_index
    }

    /// The active item's index in `items` (recomputed, not cached).
    pub fn active_index(&self, items: &[SortableItem]) -> Option<usize> {
        self.active_item
            .as_ref()
            .and_then(|item| model::index_of(items, &item.id))
    }

    /// Zero-based index of `id` in `items`.
    pub fn index(&self, items: &[SortableItem], id: &ItemId) -> Option<usize> {
        model::index_of(items, id)
    }

    /// 1-based position of `id` in `items`; `0` if absent.
    pub fn position(&self, items: &[SortableItem], id: &ItemId) -> usize {
        model::position_of(items, id)
    }

    /// Consumes the first-over flag.
    ///
    /// Returns `true` exactly once per session: for the first over event
    /// after pick-up.
    pub fn take_first_over(&mut self) -> bool {
        std::mem::replace(&mut self.first_over_pending, false)
    }

    /// Whether the first over event of this session is still pending.
    pub fn first_over_pending(&self) -> bool {
        self.first_over_pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::items_from_ids;

    #[test]
    fn test_begin_found() {
        let items = items_from_ids(["a", "b", "c"]);
        let mut session = DragSession::new();

        let active = session.begin(&ItemId::from("b"), &items).cloned();
        assert_eq!(active.map(|i| i.id), Some(ItemId::from("b")));
        assert!(session.is_dragging());
        assert_eq!(session.origin_index(), Some(1));
        assert_eq!(session.active_index(&items), Some(1));
    }

    #[test]
    fn test_begin_not_found() {
        let items = items_from_ids(["a"]);
        let mut session = DragSession::new();

        assert!(session.begin(&ItemId::from("zz"), &items).is_none());
        assert!(session.is_dragging());
        assert!(session.active_item().is_none());
        assert_eq!(session.active_index(&items), None);
    }

    #[test]
    fn test_end_is_idempotent() {
        let items = items_from_ids(["a"]);
        let mut session = DragSession::new();
        session.begin(&ItemId::from("a"), &items);

        session.end();
        session.end();
        assert_eq!(session.state(), DragState::Idle);
        assert!(session.active_item().is_none());
        assert!(session.first_over_pending());
    }

    #[test]
    fn test_first_over_taken_once_per_session() {
        let items = items_from_ids(["a", "b"]);
        let mut session = DragSession::new();

        session.begin(&ItemId::from("a"), &items);
        assert!(session.take_first_over());
        assert!(!session.take_first_over());

        session.end();
        session.begin(&ItemId::from("b"), &items);
        assert!(session.take_first_over());
    }

    #[test]
    fn test_active_index_tracks_current_collection() {
        let items = items_from_ids(["a", "b", "c"]);
        let mut session = DragSession::new();
        session.begin(&ItemId::from("a"), &items);

        let reordered = items_from_ids(["b", "c", "a"]);
        assert_eq!(session.active_index(&reordered), Some(2));
        assert_eq!(session.position(&reordered, &ItemId::from("a")), 3);
        assert_eq!(session.index(&reordered, &ItemId::from("q")), None);
    }
}

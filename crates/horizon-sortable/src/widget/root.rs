//! The sortable root: turns drag lifecycle events into announcements,
//! store updates and a reordered collection.
//!
//! Control flow for every event delivered to [`SortableRoot::handle`]:
//!
//! 1. The announcement is computed against the collection as it stands.
//! 2. The composed handler runs: the host callback first, then the root's
//!    own bookkeeping.
//! 3. On a drop over a different item, the reorder function builds a new
//!    collection and `on_change` receives it. The store is not written;
//!    the host feeds the new order back in through [`SortableRoot::set_items`].
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use parking_lot::Mutex;
//! use horizon_sortable::drag::DragEvent;
//! use horizon_sortable::model::{ItemId, items_from_ids};
//! use horizon_sortable::widget::SortableRoot;
//!
//! let latest = Arc::new(Mutex::new(None));
//! let sink = latest.clone();
//!
//! let root = SortableRoot::builder()
//!     .items(items_from_ids(["a", "b", "c"]))
//!     .on_change(move |items| *sink.lock() = Some(items.clone()))
//!     .build();
//!
//! root.handle(DragEvent::start("a"));
//! root.handle(DragEvent::end("a", Some(ItemId::from("c"))));
//!
//! let order: Vec<_> = latest.lock().clone().unwrap().into_iter().map(|i| i.id).collect();
//! assert_eq!(order, vec![ItemId::from("b"), ItemId::from("c"), ItemId::from("a")]);
//! ```

use std::fmt;
use std::sync::Arc;

use horizon_sortable_core::compose::invoke_isolated;
use horizon_sortable_core::{Handler, LifecycleSpan, ReorderFn, Signal, compose, default_reorder, handler};
use parking_lot::Mutex;

use crate::accessibility::{Announcements, Announcer, ScreenReaderInstructions};
use crate::config::SortableConfig;
use crate::drag::{
    DragCancelEvent, DragEndEvent, DragEvent, DragOverEvent, DragSession, DragStartEvent,
};
use crate::model::{self, SortableItem};
use crate::orientation::{CollisionDetection, Modifier, Orientation, SortingStrategy};
use crate::store::{SortableStore, SortableStoreProvider, StoreContext};

/// Host callback receiving the reordered collection.
pub type ChangeHandler = Handler<Vec<SortableItem>>;

/// Builder for [`SortableRoot`].
#[derive(Default)]
pub struct SortableRootBuilder {
    items: Vec<SortableItem>,
    orientation: Orientation,
    strategy: Option<SortingStrategy>,
    modifiers: Option<Vec<Modifier>>,
    collision_detection: Option<CollisionDetection>,
    flat_cursor: Option<bool>,
    announcements: Option<Arc<dyn Announcements>>,
    screen_reader_instructions: Option<ScreenReaderInstructions>,
    reorder: Option<ReorderFn<SortableItem>>,
    provider: Option<SortableStoreProvider>,
    on_drag_start: Option<Handler<DragStartEvent>>,
    on_drag_over: Option<Handler<DragOverEvent>>,
    on_drag_end: Option<Handler<DragEndEvent>>,
    on_drag_cancel: Option<Handler<DragCancelEvent>>,
    on_change: Option<ChangeHandler>,
}

impl SortableRootBuilder {
    /// The initial collection.
    pub fn items(mut self, items: Vec<SortableItem>) -> Self {
        self.items = items;
        self
    }

    /// Layout direction; picks default modifiers, strategy and collision
    /// detection.
    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Overrides the orientation's sorting strategy.
    pub fn strategy(mut self, strategy: SortingStrategy) -> Self {
        self.strategy = Some(strategy);
        self
    }

    /// Overrides the orientation's modifiers.
    pub fn modifiers(mut self, modifiers: Vec<Modifier>) -> Self {
        self.modifiers = Some(modifiers);
        self
    }

    /// Overrides the orientation's collision detection.
    pub fn collision_detection(mut self, collision_detection: CollisionDetection) -> Self {
        self.collision_detection = Some(collision_detection);
        self
    }

    /// Sets the cursor flag in the store.
    pub fn flat_cursor(mut self, flat_cursor: bool) -> Self {
        self.flat_cursor = Some(flat_cursor);
        self
    }

    /// Replaces the announcement templates.
    pub fn announcements(mut self, announcements: impl Announcements + 'static) -> Self {
        self.announcements = Some(Arc::new(announcements));
        self
    }

    /// Replaces the screen reader instructions.
    pub fn screen_reader_instructions(mut self, instructions: ScreenReaderInstructions) -> Self {
        self.screen_reader_instructions = Some(instructions);
        self
    }

    /// Replaces the reorder function used on drop.
    pub fn reorder<F>(mut self, reorder: F) -> Self
    where
        F: Fn(&[SortableItem], usize, usize) -> Vec<SortableItem> + Send + Sync + 'static,
    {
        self.reorder = Some(Arc::new(reorder));
        self
    }

    /// Uses an existing store provider instead of creating one.
    ///
    /// The builder's items and strategy are synced into it on build.
    pub fn provider(mut self, provider: SortableStoreProvider) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Applies a configuration. Explicit builder calls made afterwards win.
    pub fn config(mut self, config: &SortableConfig) -> Self {
        self.orientation = config.orientation;
        self.flat_cursor = Some(config.flat_cursor);
        if let Some(strategy) = &config.strategy {
            self.strategy = Some(strategy.clone());
        }
        if let Some(modifiers) = &config.modifiers {
            self.modifiers = Some(modifiers.clone());
        }
        if let Some(collision_detection) = config.collision_detection {
            self.collision_detection = Some(collision_detection);
        }
        self.screen_reader_instructions = Some(config.screen_reader_instructions.clone());
        self
    }

    /// Host callback for pick-up.
    pub fn on_drag_start<F>(mut self, f: F) -> Self
    where
        F: Fn(&DragStartEvent) + Send + Sync + 'static,
    {
        self.on_drag_start = Some(handler(f));
        self
    }

    /// Host callback for movement over targets.
    pub fn on_drag_over<F>(mut self, f: F) -> Self
    where
        F: Fn(&DragOverEvent) + Send + Sync + 'static,
    {
        self.on_drag_over = Some(handler(f));
        self
    }

    /// Host callback for drops.
    pub fn on_drag_end<F>(mut self, f: F) -> Self
    where
        F: Fn(&DragEndEvent) + Send + Sync + 'static,
    {
        self.on_drag_end = Some(handler(f));
        self
    }

    /// Host callback for cancellations.
    pub fn on_drag_cancel<F>(mut self, f: F) -> Self
    where
        F: Fn(&DragCancelEvent) + Send + Sync + 'static,
    {
        self.on_drag_cancel = Some(handler(f));
        self
    }

    /// Host callback receiving the reordered collection after a drop.
    pub fn on_change<F>(mut self, f: F) -> Self
    where
        F: Fn(&Vec<SortableItem>) + Send + Sync + 'static,
    {
        self.on_change = Some(handler(f));
        self
    }

    /// Builds the root.
    pub fn build(self) -> SortableRoot {
        let preset = self.orientation.config();
        let strategy = self.strategy.or(preset.strategy);
        let modifiers = self.modifiers.unwrap_or(preset.modifiers);
        let collision_detection = self
            .collision_detection
            .unwrap_or(preset.collision_detection);

        let provider = match self.provider {
            Some(provider) => {
                provider.sync(self.items, strategy);
                provider
            }
            None => SortableStoreProvider::new(self.items, strategy),
        };
        let store = provider.store().clone();
        store.set_modifiers(modifiers);
        if let Some(flat_cursor) = self.flat_cursor {
            store.set_flat_cursor(flat_cursor);
        }

        let session = Arc::new(Mutex::new(DragSession::new()));
        let reorder = self.reorder.unwrap_or_else(default_reorder);

        let on_drag_start = {
            let store = store.clone();
            let session = session.clone();
            compose(self.on_drag_start, move |event: &DragStartEvent| {
                let state = store.snapshot();
                let active = session.lock().begin(&event.active, &state.items).cloned();
                if active.is_none() {
                    tracing::warn!(
                        target: "horizon_sortable::root",
                        active = %event.active,
                        "drag started for an id that is not in the collection"
                    );
                }
                store.set_active_item(active);
            })
        };

        let on_drag_over = compose(self.on_drag_over, |event: &DragOverEvent| {
            tracing::trace!(
                target: "horizon_sortable::root",
                active = %event.active,
                over = ?event.over,
                "drag over"
            );
        });

        let on_drag_end = {
            let store = store.clone();
            let session = session.clone();
            let on_change = self.on_change;
            compose(self.on_drag_end, move |event: &DragEndEvent| {
                let items = store.items();
                let active_index = {
                    let mut session = session.lock();
                    let index = session.active_index(&items);
                    session.end();
                    index
                };
                store.set_active_item(None);

                let Some(over) = &event.over else {
                    tracing::debug!(target: "horizon_sortable::root", active = %event.active, "dropped outside any target");
                    return;
                };
                let over_index = model::index_of(&items, over);

                match (active_index, over_index) {
                    (Some(from), Some(to)) if from != to => {
                        let reordered = reorder(&items, from, to);
                        tracing::debug!(target: "horizon_sortable::root", from, to, "reordered collection");
                        if let Some(on_change) = &on_change {
                            invoke_isolated(on_change, &reordered);
                        }
                    }
                    _ => {
                        tracing::debug!(
                            target: "horizon_sortable::root",
                            ?active_index,
                            ?over_index,
                            "drop without reorder"
                        );
                    }
                }
            })
        };

        let on_drag_cancel = {
            let store = store.clone();
            let session = session.clone();
            compose(self.on_drag_cancel, move |_: &DragCancelEvent| {
                session.lock().end();
                store.set_active_item(None);
            })
        };

        let announcer = match self.announcements {
            Some(announcements) => Announcer::from_shared(announcements),
            None => Announcer::default(),
        };

        SortableRoot {
            provider,
            session,
            announcer,
            collision_detection,
            screen_reader_instructions: self.screen_reader_instructions.unwrap_or_default(),
            on_drag_start,
            on_drag_over,
            on_drag_end,
            on_drag_cancel,
            announced: Signal::new(),
        }
    }
}

/// Controller for one sortable list.
///
/// Owns the list's store, its single drag session slot, the announcer and
/// the composed lifecycle handlers.
pub struct SortableRoot {
    provider: SortableStoreProvider,
    session: Arc<Mutex<DragSession>>,
    announcer: Announcer,
    collision_detection: CollisionDetection,
    screen_reader_instructions: ScreenReaderInstructions,
    on_drag_start: Handler<DragStartEvent>,
    on_drag_over: Handler<DragOverEvent>,
    on_drag_end: Handler<DragEndEvent>,
    on_drag_cancel: Handler<DragCancelEvent>,
    announced: Signal<String>,
}

impl fmt::Debug for SortableRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortableRoot")
            .field("store", self.provider.store())
            .field("session", &*self.session.lock())
            .field("collision_detection", &self.collision_detection)
            .finish_non_exhaustive()
    }
}

impl SortableRoot {
    /// Starts building a root.
    pub fn builder() -> SortableRootBuilder {
        SortableRootBuilder::default()
    }

    /// Processes one drag lifecycle event.
    ///
    /// Returns the announcement for assistive technology, if the event
    /// produces one. The same text is emitted on [`announced`](Self::announced).
    pub fn handle(&self, event: DragEvent) -> Option<String> {
        let _span = LifecycleSpan::new(event.kind());

        let state = self.provider.store().snapshot();
        let suppressed = self.announcer.suppresses(&event, &mut self.session.lock());
        let announcement = if suppressed {
            None
        } else {
            self.announcer.message(&event, &state.items)
        };
        if let Some(text) = &announcement {
            self.announced.emit(text.clone());
        }

        match &event {
            DragEvent::Start(e) => (self.on_drag_start)(e),
            DragEvent::Over(e) => (self.on_drag_over)(e),
            DragEvent::End(e) => (self.on_drag_end)(e),
            DragEvent::Cancel(e) => (self.on_drag_cancel)(e),
        }

        announcement
    }

    /// Syncs the externally owned collection into the store.
    pub fn set_items(&self, items: Vec<SortableItem>) {
        self.provider.store().set_items(items);
    }

    /// Syncs the externally chosen strategy into the store.
    pub fn set_strategy(&self, strategy: Option<SortingStrategy>) {
        self.provider.store().set_strategy(strategy);
    }

    /// The current collection.
    pub fn items(&self) -> Vec<SortableItem> {
        self.provider.store().items()
    }

    /// The root's store.
    pub fn store(&self) -> &Arc<SortableStore> {
        self.provider.store()
    }

    /// A context handle for child components.
    pub fn context(&self) -> StoreContext {
        self.provider.context()
    }

    /// Whether a drag session is in progress.
    pub fn is_dragging(&self) -> bool {
        self.session.lock().is_dragging()
    }

    /// The item picked up in the current session, if any.
    pub fn active_item(&self) -> Option<SortableItem> {
        self.session.lock().active_item().cloned()
    }

    /// Current index of the active item.
    pub fn active_index(&self) -> Option<usize> {
        let items = self.items();
        self.session.lock().active_index(&items)
    }

    /// The collision detection handed to the sensor layer.
    pub fn collision_detection(&self) -> CollisionDetection {
        self.collision_detection
    }

    /// Instructions exposed on draggable items.
    pub fn screen_reader_instructions(&self) -> &ScreenReaderInstructions {
        &self.screen_reader_instructions
    }

    /// Signal emitted with every announcement.
    pub fn announced(&self) -> &Signal<String> {
        &self.announced
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ItemId, items_from_ids};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn id(s: &str) -> ItemId {
        ItemId::from(s)
    }

    #[test]
    fn test_orientation_presets_reach_store() {
        let root = SortableRoot::builder()
            .orientation(Orientation::Horizontal)
            .build();
        assert_eq!(root.store().strategy(), Some(SortingStrategy::HorizontalList));
        assert!(root.store().modifiers().contains(&Modifier::RestrictToHorizontalAxis));
        assert_eq!(root.collision_detection(), CollisionDetection::ClosestCenter);
    }

    #[test]
    fn test_explicit_overrides_win() {
        let root = SortableRoot::builder()
            .orientation(Orientation::Mixed)
            .strategy(SortingStrategy::RectSwapping)
            .modifiers(Vec::new())
            .collision_detection(CollisionDetection::PointerWithin)
            .flat_cursor(false)
            .build();
        assert_eq!(root.store().strategy(), Some(SortingStrategy::RectSwapping));
        assert!(root.store().modifiers().is_empty());
        assert_eq!(root.collision_detection(), CollisionDetection::PointerWithin);
        assert!(!root.store().flat_cursor());
    }

    #[test]
    fn test_start_sets_active_item() {
        let root = SortableRoot::builder()
            .items(items_from_ids(["a", "b"]))
            .build();

        root.handle(DragEvent::start("b"));
        assert!(root.is_dragging());
        assert_eq!(root.active_item().map(|i| i.id), Some(id("b")));
        assert_eq!(root.store().active_item().map(|i| i.id), Some(id("b")));
        assert_eq!(root.active_index(), Some(1));
    }

    #[test]
    fn test_unknown_active_id_has_no_logical_effect() {
        let changes = Arc::new(AtomicUsize::new(0));
        let c = changes.clone();
        let root = SortableRoot::builder()
            .items(items_from_ids(["a", "b"]))
            .on_change(move |_| {
                c.fetch_add(1, Ordering::SeqCst);
            })
            .build();

        root.handle(DragEvent::start("ghost"));
        assert!(root.is_dragging());
        assert!(root.store().active_item().is_none());

        root.handle(DragEvent::end("ghost", Some(id("b"))));
        assert_eq!(changes.load(Ordering::SeqCst), 0);
        assert!(!root.is_dragging());
    }

    #[test]
    fn test_drop_outside_target_keeps_order() {
        let changes = Arc::new(AtomicUsize::new(0));
        let c = changes.clone();
        let root = SortableRoot::builder()
            .items(items_from_ids(["a", "b"]))
            .on_change(move |_| {
                c.fetch_add(1, Ordering::SeqCst);
            })
            .build();

        root.handle(DragEvent::start("a"));
        assert_eq!(root.handle(DragEvent::end("a", None)), None);
        assert_eq!(changes.load(Ordering::SeqCst), 0);
        assert!(root.store().active_item().is_none());
    }

    #[test]
    fn test_cancel_clears_session() {
        let root = SortableRoot::builder()
            .items(items_from_ids(["a", "b", "c"]))
            .build();

        root.handle(DragEvent::start("c"));
        let text = root.handle(DragEvent::cancel("c")).unwrap();
        assert!(text.contains("returned to position 3 of 3"));
        assert!(!root.is_dragging());
        assert!(root.store().active_item().is_none());
    }

    #[test]
    fn test_custom_reorder_function() {
        let latest = Arc::new(Mutex::new(Vec::<ItemId>::new()));
        let sink = latest.clone();
        let root = SortableRoot::builder()
            .items(items_from_ids(["a", "b", "c"]))
            .reorder(|items, from, to| {
                let mut swapped = items.to_vec();
                swapped.swap(from, to);
                swapped
            })
            .on_change(move |items| *sink.lock() = items.iter().map(|i| i.id.clone()).collect())
            .build();

        root.handle(DragEvent::start("a"));
        root.handle(DragEvent::end("a", Some(id("c"))));
        assert_eq!(*latest.lock(), vec![id("c"), id("b"), id("a")]);
    }

    #[test]
    fn test_on_change_does_not_write_store() {
        let root = SortableRoot::builder()
            .items(items_from_ids(["a", "b"]))
            .on_change(|_| {})
            .build();

        root.handle(DragEvent::start("a"));
        root.handle(DragEvent::end("a", Some(id("b"))));
        assert_eq!(root.items(), items_from_ids(["a", "b"]));

        root.set_items(items_from_ids(["b", "a"]));
        assert_eq!(root.items(), items_from_ids(["b", "a"]));
    }

    #[test]
    fn test_announced_signal() {
        let root = SortableRoot::builder()
            .items(items_from_ids(["a"]))
            .build();
        let heard = Arc::new(Mutex::new(Vec::new()));
        let h = heard.clone();
        root.announced().connect(move |text| h.lock().push(text.clone()));

        root.handle(DragEvent::start("a"));
        root.handle(DragEvent::over("a", Some(id("a"))));
        root.handle(DragEvent::end("a", Some(id("a"))));

        let heard = heard.lock();
        assert_eq!(heard.len(), 2);
        assert!(heard[0].starts_with("Picked up sortable item a."));
        assert_eq!(heard[1], "Sortable item a was dropped at position 1 of 1.");
    }

    #[test]
    fn test_provider_reuse() {
        let provider = SortableStoreProvider::new(Vec::new(), None);
        let store = provider.store().clone();
        let root = SortableRoot::builder()
            .items(items_from_ids(["x"]))
            .provider(provider)
            .build();

        assert!(Arc::ptr_eq(&store, root.store()));
        assert_eq!(store.items().len(), 1);
    }
}

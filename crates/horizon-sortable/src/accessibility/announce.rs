//! Announcement text for assistive technology.
//!
//! Each drag lifecycle event can produce one plain-text message intended for
//! a live region. The wording comes from an [`Announcements`]
//! implementation; the [`Announcer`] applies the session rules on top
//! (suppressing the redundant first over event).

use std::fmt;
use std::sync::Arc;

use horizon_sortable_core::catch_host_panic;

use crate::drag::{DragEvent, DragSession};
use crate::model::{self, ItemId, SortableItem};

/// Read-only view of the collection an announcement is computed against.
#[derive(Debug, Clone, Copy)]
pub struct AnnouncementContext<'a> {
    items: &'a [SortableItem],
}

impl<'a> AnnouncementContext<'a> {
    /// Creates a context over the current collection.
    pub fn new(items: &'a [SortableItem]) -> Self {
        Self { items }
    }

    /// 1-based position of `id`; `0` if absent.
    pub fn position(&self, id: &ItemId) -> usize {
        model::position_of(self.items, id)
    }

    /// Current collection length.
    pub fn total(&self) -> usize {
        self.items.len()
    }

    /// The collection itself.
    pub fn items(&self) -> &'a [SortableItem] {
        self.items
    }
}

/// Message templates for drag lifecycle events.
///
/// Every method has a default producing the standard English text, so an
/// implementation only overrides the messages it wants to change.
///
/// # Example
///
/// ```
/// use horizon_sortable::accessibility::{AnnouncementContext, Announcements};
/// use horizon_sortable::model::ItemId;
///
/// struct Terse;
///
/// impl Announcements for Terse {
///     fn on_drag_start(&self, active: &ItemId, ctx: &AnnouncementContext<'_>) -> Option<String> {
///         Some(format!("{active} lifted"))
///     }
/// }
/// ```
pub trait Announcements: Send + Sync {
    /// Message for a pick-up.
    fn on_drag_start(&self, active: &ItemId, ctx: &AnnouncementContext<'_>) -> Option<String> {
        Some(format!(
            "Picked up sortable item {active}. Sortable item {active} is in position {} of {}.",
            ctx.position(active),
            ctx.total()
        ))
    }

    /// Message for movement over a target. Not called for the first over
    /// event of a session.
    fn on_drag_over(
        &self,
        active: &ItemId,
        over: Option<&ItemId>,
        ctx: &AnnouncementContext<'_>,
    ) -> Option<String> {
        over.map(|over| {
            format!(
                "Sortable item {active} was moved into position {} of {}.",
                ctx.position(over),
                ctx.total()
            )
        })
    }

    /// Message for a drop.
    fn on_drag_end(
        &self,
        active: &ItemId,
        over: Option<&ItemId>,
        ctx: &AnnouncementContext<'_>,
    ) -> Option<String> {
        over.map(|over| {
            format!(
                "Sortable item {active} was dropped at position {} of {}.",
                ctx.position(over),
                ctx.total()
            )
        })
    }

    /// Message for a cancellation.
    fn on_drag_cancel(&self, active: &ItemId, ctx: &AnnouncementContext<'_>) -> Option<String> {
        Some(format!(
            "Sorting was cancelled. Sortable item {active} was dropped and returned to position {} of {}.",
            ctx.position(active),
            ctx.total()
        ))
    }
}

/// The standard English announcements.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultAnnouncements;

impl Announcements for DefaultAnnouncements {}

/// Turns drag events into announcement strings.
#[derive(Clone)]
pub struct Announcer {
    announcements: Arc<dyn Announcements>,
}

impl Default for Announcer {
    fn default() -> Self {
        Self::new(DefaultAnnouncements)
    }
}

impl fmt::Debug for Announcer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Announcer").finish_non_exhaustive()
    }
}

impl Announcer {
    /// Creates an announcer with custom templates.
    pub fn new(announcements: impl Announcements + 'static) -> Self {
        Self {
            announcements: Arc::new(announcements),
        }
    }

    /// Creates an announcer from shared templates.
    pub fn from_shared(announcements: Arc<dyn Announcements>) -> Self {
        Self { announcements }
    }

    /// Computes the announcement for `event`.
    ///
    /// `items` is the collection as it stands before the event takes
    /// effect. The first over event of a session consumes the session's
    /// suppression flag and yields `None`: the sensor layer reports the
    /// pick-up location itself as the first over target, which would
    /// repeat the pick-up message.
    pub fn announce(
        &self,
        event: &DragEvent,
        session: &mut DragSession,
        items: &[SortableItem],
    ) -> Option<String> {
        if self.suppresses(event, session) {
            return None;
        }
        self.message(event, items)
    }

    /// Consumes the session's first-over flag if `event` is the redundant
    /// first over event. Returns `true` when it must not be announced.
    pub fn suppresses(&self, event: &DragEvent, session: &mut DragSession) -> bool {
        let DragEvent::Over(e) = event else {
            return false;
        };
        if !session.take_first_over() {
            return false;
        }
        tracing::trace!(
            target: "horizon_sortable::announce",
            active = %e.active,
            "suppressing first over announcement"
        );
        true
    }

    /// Renders the template for `event`, ignoring suppression.
    ///
    /// Templates are host code: a panicking template is logged and yields
    /// `None`. Callers must not hold the session lock, so a template may
    /// read the widget it announces for.
    pub fn message(&self, event: &DragEvent, items: &[SortableItem]) -> Option<String> {
        let ctx = AnnouncementContext::new(items);
        let templates = &self.announcements;
        let message = catch_host_panic("announcement template", || match event {
            DragEvent::Start(e) => templates.on_drag_start(&e.active, &ctx),
            DragEvent::Over(e) => templates.on_drag_over(&e.active, e.over.as_ref(), &ctx),
            DragEvent::End(e) => templates.on_drag_end(&e.active, e.over.as_ref(), &ctx),
            DragEvent::Cancel(e) => templates.on_drag_cancel(&e.active, &ctx),
        })
        .flatten();

        if let Some(text) = &message {
            tracing::debug!(target: "horizon_sortable::announce", kind = event.kind(), %text, "announcement");
        }
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::items_from_ids;

    fn abc() -> Vec<SortableItem> {
        items_from_ids(["a", "b", "c"])
    }

    fn id(s: &str) -> ItemId {
        ItemId::from(s)
    }

    #[test]
    fn test_start_message() {
        let items = abc();
        let mut session = DragSession::new();
        let text = Announcer::default().announce(&DragEvent::start("a"), &mut session, &items);
        assert_eq!(
            text.as_deref(),
            Some("Picked up sortable item a. Sortable item a is in position 1 of 3.")
        );
    }

    #[test]
    fn test_first_over_suppressed_then_announced() {
        let items = abc();
        let announcer = Announcer::default();
        let mut session = DragSession::new();
        session.begin(&id("a"), &items);

        let over = DragEvent::over("a", Some(id("c")));
        assert_eq!(announcer.announce(&over, &mut session, &items), None);
        assert_eq!(
            announcer.announce(&over, &mut session, &items).as_deref(),
            Some("Sortable item a was moved into position 3 of 3.")
        );
        assert_eq!(
            announcer
                .announce(&DragEvent::over("a", Some(id("b"))), &mut session, &items)
                .as_deref(),
            Some("Sortable item a was moved into position 2 of 3.")
        );
    }

    #[test]
    fn test_over_without_target_is_silent() {
        let items = abc();
        let announcer = Announcer::default();
        let mut session = DragSession::new();
        session.begin(&id("a"), &items);

        let _ = announcer.announce(&DragEvent::over("a", Some(id("a"))), &mut session, &items);
        assert_eq!(
            announcer.announce(&DragEvent::over("a", None), &mut session, &items),
            None
        );
    }

    #[test]
    fn test_suppression_rearms_after_session_end() {
        let items = abc();
        let announcer = Announcer::default();
        let mut session = DragSession::new();

        session.begin(&id("a"), &items);
        let over = DragEvent::over("a", Some(id("b")));
        assert!(announcer.announce(&over, &mut session, &items).is_none());
        assert!(announcer.announce(&over, &mut session, &items).is_some());
        session.end();

        session.begin(&id("b"), &items);
        let over = DragEvent::over("b", Some(id("c")));
        assert!(announcer.announce(&over, &mut session, &items).is_none());
    }

    #[test]
    fn test_end_messages() {
        let items = abc();
        let announcer = Announcer::default();
        let mut session = DragSession::new();

        assert_eq!(
            announcer
                .announce(&DragEvent::end("a", Some(id("c"))), &mut session, &items)
                .as_deref(),
            Some("Sortable item a was dropped at position 3 of 3.")
        );
        assert_eq!(
            announcer.announce(&DragEvent::end("a", None), &mut session, &items),
            None
        );
    }

    #[test]
    fn test_cancel_message() {
        let items = abc();
        let mut session = DragSession::new();
        let text = Announcer::default().announce(&DragEvent::cancel("b"), &mut session, &items);
        assert_eq!(
            text.as_deref(),
            Some(
                "Sorting was cancelled. Sortable item b was dropped and returned to position 2 of 3."
            )
        );
    }

    #[test]
    fn test_integer_ids() {
        let items = vec![SortableItem::new(10), SortableItem::new(20)];
        let mut session = DragSession::new();
        let text = Announcer::default().announce(&DragEvent::start(20), &mut session, &items);
        assert_eq!(
            text.as_deref(),
            Some("Picked up sortable item 20. Sortable item 20 is in position 2 of 2.")
        );
    }

    #[test]
    fn test_custom_announcements_keep_suppression() {
        struct Quiet;
        impl Announcements for Quiet {
            fn on_drag_over(
                &self,
                active: &ItemId,
                _over: Option<&ItemId>,
                _ctx: &AnnouncementContext<'_>,
            ) -> Option<String> {
                Some(format!("{active} moving"))
            }
        }

        let items = abc();
        let announcer = Announcer::new(Quiet);
        let mut session = DragSession::new();
        session.begin(&id("a"), &items);

        let over = DragEvent::over("a", None);
        assert_eq!(announcer.announce(&over, &mut session, &items), None);
        assert_eq!(
            announcer.announce(&over, &mut session, &items).as_deref(),
            Some("a moving")
        );
        assert!(
            announcer
                .announce(&DragEvent::start("a"), &mut session, &items)
                .unwrap()
                .starts_with("Picked up")
        );
    }

    #[test]
    fn test_panicking_template_yields_no_message() {
        struct Broken;
        impl Announcements for Broken {
            fn on_drag_end(
                &self,
                _active: &ItemId,
                _over: Option<&ItemId>,
                _ctx: &AnnouncementContext<'_>,
            ) -> Option<String> {
                panic!("template bug")
            }
        }

        let items = abc();
        let announcer = Announcer::new(Broken);
        let mut session = DragSession::new();
        let end = DragEvent::end("a", Some(id("c")));
        assert_eq!(announcer.announce(&end, &mut session, &items), None);
        assert!(announcer.message(&DragEvent::start("a"), &items).is_some());
    }
}

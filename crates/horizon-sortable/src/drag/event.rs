//! Drag lifecycle events delivered by the sensor layer.

use crate::model::ItemId;

/// Sent when an item is picked up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragStartEvent {
    /// The picked-up item.
    pub active: ItemId,
}

/// Sent when the dragged item moves over a target, or off all targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragOverEvent {
    /// The dragged item.
    pub active: ItemId,
    /// The item currently under the pointer/focus, if any.
    pub over: Option<ItemId>,
}

/// Sent when the dragged item is dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragEndEvent {
    /// The dragged item.
    pub active: ItemId,
    /// The drop target, if the item was released over one.
    pub over: Option<ItemId>,
}

/// Sent when the drag is cancelled (e.g. escape key).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragCancelEvent {
    /// The dragged item.
    pub active: ItemId,
}

/// One drag lifecycle event.
///
/// Events are processed strictly in delivery order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragEvent {
    /// Pick-up.
    Start(DragStartEvent),
    /// Movement over a target.
    Over(DragOverEvent),
    /// Drop.
    End(DragEndEvent),
    /// Cancellation.
    Cancel(DragCancelEvent),
}

impl DragEvent {
    /// Creates a start event.
    pub fn start(active: impl Into<ItemId>) -> Self {
        Self::Start(DragStartEvent {
            active: active.into(),
        })
    }

    /// Creates an over event.
    pub fn over(active: impl Into<ItemId>, over: Option<ItemId>) -> Self {
        Self::Over(DragOverEvent {
            active: active.into(),
            over,
        })
    }

    /// Creates an end event.
    pub fn end(active: impl Into<ItemId>, over: Option<ItemId>) -> Self {
        Self::End(DragEndEvent {
            active: active.into(),
            over,
        })
    }

    /// Creates a cancel event.
    pub fn cancel(active: impl Into<ItemId>) -> Self {
        Self::Cancel(DragCancelEvent {
            active: active.into(),
        })
    }

    /// The id of the dragged item.
    pub fn active(&self) -> &ItemId {
        match self {
            Self::Start(e) => &e.active,
            Self::Over(e) => &e.active,
            Self::End(e) => &e.active,
            Self::Cancel(e) => &e.active,
        }
    }

    /// A short name for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Start(_) => "drag_start",
            Self::Over(_) => "drag_over",
            Self::End(_) => "drag_end",
            Self::Cancel(_) => "drag_cancel",
        }
    }
}

//! Prelude module for Horizon Sortable.
//!
//! ```ignore
//! use horizon_sortable::prelude::*;
//! ```

// ============================================================================
// Core primitives
// ============================================================================

pub use crate::{ConnectionId, Property, Signal, array_move};

// ============================================================================
// Data model and drag lifecycle
// ============================================================================

pub use crate::drag::{DragCancelEvent, DragEndEvent, DragEvent, DragOverEvent, DragStartEvent};
pub use crate::model::{ItemId, SortableItem, items_from_ids};

// ============================================================================
// Widgets
// ============================================================================

pub use crate::accessibility::{Announcements, ScreenReaderInstructions};
pub use crate::config::SortableConfig;
pub use crate::orientation::{CollisionDetection, Modifier, Orientation, SortingStrategy};
pub use crate::store::{SortableStore, StoreContext};
pub use crate::widget::{
    DragOverlay, ItemOptions, ItemState, Sortable, SortableOptions, SortableRoot,
};

// ============================================================================
// Errors
// ============================================================================

pub use crate::{Result, SortableError};

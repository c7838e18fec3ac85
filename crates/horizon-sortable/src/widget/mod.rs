//! Sortable widgets.
//!
//! - [`SortableRoot`]: controlled list; the host owns the order and
//!   receives reorders through `on_change`
//! - [`Sortable`]: uncontrolled list that keeps its own copy of the order
//! - [`ItemState`] and [`DragOverlay`]: what a renderer needs to draw items
//!   and the floating drag preview

mod presentation;
mod root;
mod sortable;

pub use presentation::{
    DROP_ANIMATION_ACTIVE_OPACITY, DragOverlay, DropAnimation, ItemOptions, ItemState, RenderAs,
};
pub use root::{ChangeHandler, SortableRoot, SortableRootBuilder};
pub use sortable::{RowKey, Sortable, SortableOptions};

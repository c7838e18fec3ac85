//! Drag lifecycle: sensor events and the per-root session slot.
//!
//! The sensor layer (pointer, touch, keyboard) is external. It reports four
//! kinds of [`DragEvent`]; the root feeds them through its handlers and the
//! [`DragSession`] remembers which item is being dragged.

mod event;
mod session;

pub use event::{DragCancelEvent, DragEndEvent, DragEvent, DragOverEvent, DragStartEvent};
pub use session::{DragSession, DragState};

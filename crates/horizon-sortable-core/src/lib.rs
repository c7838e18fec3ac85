//! Core systems for Horizon Sortable.
//!
//! This crate provides the framework-agnostic building blocks of the
//! sortable-list engine:
//!
//! - **Signal/Slot System**: Synchronous, type-safe change notification
//! - **Property System**: Values with change detection
//! - **Handler Composition**: Host-then-internal event handler chaining
//! - **Reorder Engine**: Pure move-semantics reordering of collections
//!
//! # Signal/Slot Example
//!
//! ```
//! use horizon_sortable_core::Signal;
//!
//! let order_changed = Signal::<Vec<u32>>::new();
//! let conn_id = order_changed.connect(|order| {
//!     println!("New order: {:?}", order);
//! });
//!
//! order_changed.emit(vec![2, 1, 3]);
//! order_changed.disconnect(conn_id);
//! ```
//!
//! # Reorder Example
//!
//! ```
//! use horizon_sortable_core::array_move;
//!
//! assert_eq!(array_move(&["a", "b", "c"], 0, 2), vec!["b", "c", "a"]);
//! ```

pub mod compose;
mod error;
pub mod logging;
pub mod property;
pub mod reorder;
pub mod signal;

pub use compose::{Handler, catch_host_panic, compose, handler};
pub use error::SignalError;
pub use logging::LifecycleSpan;
pub use property::Property;
pub use reorder::{ReorderFn, array_move, default_reorder};
pub use signal::{ConnectionGuard, ConnectionId, Signal};

//! Horizon Sortable - a framework-agnostic engine for drag-to-reorder lists.
//!
//! The engine sits between a drag sensor layer (pointer, touch, keyboard)
//! and a renderer. It tracks the drag session, produces accessible
//! announcements, keeps a per-widget reactive store and computes the new
//! order when an item is dropped.
//!
//! # Example
//!
//! ```
//! use horizon_sortable::prelude::*;
//!
//! let root = SortableRoot::builder()
//!     .items(items_from_ids(["a", "b", "c"]))
//!     .orientation(Orientation::Vertical)
//!     .on_change(|items| println!("new order: {items:?}"))
//!     .build();
//!
//! let picked = root.handle(DragEvent::start("a"));
//! assert_eq!(
//!     picked.as_deref(),
//!     Some("Picked up sortable item a. Sortable item a is in position 1 of 3.")
//! );
//! ```

pub use horizon_sortable_core::*;

pub mod accessibility;
pub mod config;
pub mod drag;
mod error;
pub mod model;
pub mod orientation;
pub mod prelude;
pub mod store;
pub mod widget;

pub use error::{Result, SortableError};

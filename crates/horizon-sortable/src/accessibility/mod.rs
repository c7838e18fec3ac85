//! Accessibility support for sortable lists.
//!
//! Provides the announcement strings a live region should read out while
//! an item is dragged, plus the usage instructions exposed on draggable
//! items. Rendering the live region is the host's job; the root returns
//! each message and emits it on its `announced` signal.

mod announce;
mod instructions;

pub use announce::{AnnouncementContext, Announcements, Announcer, DefaultAnnouncements};
pub use instructions::{DEFAULT_DRAGGABLE_INSTRUCTIONS, ScreenReaderInstructions};

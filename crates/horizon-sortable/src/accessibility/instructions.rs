//! Screen reader usage instructions for draggable items.

use serde::{Deserialize, Serialize};

/// The standard instructions for keyboard sorting.
pub const DEFAULT_DRAGGABLE_INSTRUCTIONS: &str = "To pick up a sortable item, press the space bar. \
While sorting, use the arrow keys to move the item. \
Press space again to drop the item in its new position, or press escape to cancel.";

/// Instructions exposed as the accessible description of draggable items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenReaderInstructions {
    /// Text describing how to operate a draggable item.
    pub draggable: String,
}

impl Default for ScreenReaderInstructions {
    fn default() -> Self {
        Self {
            draggable: DEFAULT_DRAGGABLE_INSTRUCTIONS.to_string(),
        }
    }
}

impl ScreenReaderInstructions {
    /// Creates instructions with custom text.
    pub fn new(draggable: impl Into<String>) -> Self {
        Self {
            draggable: draggable.into(),
        }
    }
}

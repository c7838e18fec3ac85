//! Render-facing state for sortable items and the drag overlay.
//!
//! Nothing here draws. The types compute what a renderer needs to know
//! about an item (cursor, dimming, interactivity, data attributes) from the
//! store, so every frontend applies the same rules.

use cursor_icon::CursorIcon;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::{ItemId, SortableItem};
use crate::orientation::Modifier;
use crate::store::StoreContext;

/// Opacity of the source item while its overlay is being dropped.
pub const DROP_ANIMATION_ACTIVE_OPACITY: f32 = 0.5;

/// How an item or content container renders its element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RenderAs {
    /// Render an element with the given tag.
    Native(String),
    /// Merge behavior into the single child element the host provides.
    Slot,
}

impl RenderAs {
    /// The element tag to emit, or `None` when rendering into a slot.
    pub fn tag(&self) -> Option<&str> {
        match self {
            Self::Native(tag) => Some(tag),
            Self::Slot => None,
        }
    }
}

/// Per-item rendering options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemOptions {
    /// Element rendering.
    pub render_as: RenderAs,
    /// Whether the whole item acts as the drag handle.
    pub as_handle: bool,
    /// Disabled items cannot be picked up or focused.
    pub disabled: bool,
}

impl Default for ItemOptions {
    fn default() -> Self {
        Self {
            render_as: RenderAs::Native("li".to_string()),
            as_handle: true,
            disabled: false,
        }
    }
}

impl ItemOptions {
    /// Options for a disabled item.
    pub fn disabled() -> Self {
        Self {
            disabled: true,
            ..Self::default()
        }
    }

    /// Options for an item whose drag handle is a separate child.
    pub fn with_separate_handle() -> Self {
        Self {
            as_handle: false,
            ..Self::default()
        }
    }
}

/// Computed presentation of one item.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemState {
    /// Pointer cursor over the item.
    pub cursor: CursorIcon,
    /// The item is the one being dragged.
    pub dragging: bool,
    /// Rendered at reduced opacity.
    pub dimmed: bool,
    /// Receives pointer input.
    pub interactive: bool,
    /// Touch scrolling is disabled over the item.
    pub touch_locked: bool,
    /// Drag listeners are attached to the item itself.
    pub handle_bound: bool,
    /// Keyboard focus order; `None` removes the item from tab order.
    pub tab_index: Option<i32>,
}

impl ItemState {
    /// Computes the presentation from the item's options and the store flags.
    pub fn compute(options: &ItemOptions, is_dragging: bool, flat_cursor: bool) -> Self {
        let cursor = if flat_cursor {
            CursorIcon::Default
        } else if is_dragging {
            CursorIcon::Grabbing
        } else if options.as_handle {
            CursorIcon::Grab
        } else {
            CursorIcon::Default
        };

        Self {
            cursor,
            dragging: is_dragging,
            dimmed: is_dragging || options.disabled,
            interactive: !options.disabled,
            touch_locked: options.as_handle,
            handle_bound: options.as_handle && !options.disabled,
            tab_index: (!options.disabled).then_some(0),
        }
    }

    /// Computes the presentation of `id` from the store behind `ctx`.
    pub fn for_item(ctx: &StoreContext, id: &ItemId, options: &ItemOptions) -> Result<Self> {
        ctx.select(|state| {
            let is_dragging = state
                .active_item
                .as_ref()
                .is_some_and(|active| &active.id == id);
            Self::compute(options, is_dragging, state.flat_cursor)
        })
    }

    /// Data attributes for the item element.
    ///
    /// Flags are present-or-absent: `data-dragging` only on the dragged
    /// item, `data-index` only on enabled items.
    pub fn data_attributes(&self) -> Vec<(&'static str, String)> {
        let mut attributes = Vec::new();
        if let Some(index) = self.tab_index {
            attributes.push(("data-index", index.to_string()));
        }
        if self.dragging {
            attributes.push(("data-dragging", String::new()));
        }
        if !self.interactive {
            attributes.push(("data-disabled", String::new()));
        }
        attributes
    }
}

/// Drop animation applied when the overlay lands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DropAnimation {
    /// Opacity of the source item during the animation.
    pub active_opacity: f32,
}

impl Default for DropAnimation {
    fn default() -> Self {
        Self {
            active_opacity: DROP_ANIMATION_ACTIVE_OPACITY,
        }
    }
}

/// The floating copy of the active item that follows the pointer.
#[derive(Debug, Clone, Default)]
pub struct DragOverlay {
    drop_animation: DropAnimation,
}

impl DragOverlay {
    /// Creates an overlay with the default drop animation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the drop animation.
    pub fn with_drop_animation(mut self, drop_animation: DropAnimation) -> Self {
        self.drop_animation = drop_animation;
        self
    }

    /// The drop animation.
    pub fn drop_animation(&self) -> DropAnimation {
        self.drop_animation
    }

    /// The item to render in the overlay; `None` while idle.
    pub fn content(&self, ctx: &StoreContext) -> Result<Option<SortableItem>> {
        ctx.select(|state| state.active_item.clone())
    }

    /// Cursor over the overlay.
    pub fn cursor(&self, ctx: &StoreContext) -> Result<CursorIcon> {
        ctx.select(|state| {
            if state.flat_cursor {
                CursorIcon::Default
            } else {
                CursorIcon::Grabbing
            }
        })
    }

    /// Movement modifiers the overlay is constrained by.
    pub fn modifiers(&self, ctx: &StoreContext) -> Result<Vec<Modifier>> {
        ctx.select(|state| state.modifiers.clone())
    }
}

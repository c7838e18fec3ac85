//! Sorting strategies, drag modifiers, collision detection and the
//! orientation presets that bundle them.
//!
//! All three tags are opaque to the engine: they are stored and handed to
//! the layout/sensor layer unchanged. The presets only pick sensible
//! defaults for a list laid out vertically, horizontally or as a grid.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The layout algorithm used to compute visual positions while sorting.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortingStrategy {
    /// Free 2D layout (grids, wrapping rows).
    #[default]
    Rect,
    /// Single column.
    VerticalList,
    /// Single row.
    HorizontalList,
    /// Items swap places instead of shifting.
    RectSwapping,
    /// A host-defined strategy, identified by name.
    Custom(String),
}

impl fmt::Display for SortingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rect => f.write_str("rect"),
            Self::VerticalList => f.write_str("vertical-list"),
            Self::HorizontalList => f.write_str("horizontal-list"),
            Self::RectSwapping => f.write_str("rect-swapping"),
            Self::Custom(name) => write!(f, "custom:{name}"),
        }
    }
}

/// A constraint applied to drag movement.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Modifier {
    /// Lock movement to the vertical axis.
    RestrictToVerticalAxis,
    /// Lock movement to the horizontal axis.
    RestrictToHorizontalAxis,
    /// Keep the dragged item inside its parent's bounds.
    RestrictToParentElement,
    /// Keep the dragged item inside the window.
    RestrictToWindowEdges,
    /// A host-defined modifier, identified by name.
    Custom(String),
}

/// How the sensor layer decides which item is "over".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CollisionDetection {
    /// The droppable whose center is closest to the dragged item's center.
    #[default]
    ClosestCenter,
    /// The droppable whose corners are closest.
    ClosestCorners,
    /// The droppable with the largest intersection area.
    RectIntersection,
    /// The droppable under the pointer.
    PointerWithin,
}

/// The overall layout direction of a sortable list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Orientation {
    /// Items stacked top to bottom.
    #[default]
    Vertical,
    /// Items laid out left to right.
    Horizontal,
    /// Items in a grid or wrapping flow.
    Mixed,
}

/// The defaults an [`Orientation`] implies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrientationConfig {
    /// Movement constraints.
    pub modifiers: Vec<Modifier>,
    /// Sorting strategy; `None` leaves the choice to the layout layer.
    pub strategy: Option<SortingStrategy>,
    /// Collision detection algorithm.
    pub collision_detection: CollisionDetection,
}

impl Orientation {
    /// Returns the preset for this orientation.
    pub fn config(self) -> OrientationConfig {
        match self {
            Self::Vertical => OrientationConfig {
                modifiers: vec![
                    Modifier::RestrictToVerticalAxis,
                    Modifier::RestrictToParentElement,
                ],
                strategy: Some(SortingStrategy::VerticalList),
                collision_detection: CollisionDetection::ClosestCenter,
            },
            Self::Horizontal => OrientationConfig {
                modifiers: vec![
                    Modifier::RestrictToHorizontalAxis,
                    Modifier::RestrictToParentElement,
                ],
                strategy: Some(SortingStrategy::HorizontalList),
                collision_detection: CollisionDetection::ClosestCenter,
            },
            Self::Mixed => OrientationConfig {
                modifiers: vec![Modifier::RestrictToParentElement],
                strategy: None,
                collision_detection: CollisionDetection::ClosestCorners,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertical_preset() {
        let config = Orientation::Vertical.config();
        assert_eq!(config.strategy, Some(SortingStrategy::VerticalList));
        assert_eq!(config.collision_detection, CollisionDetection::ClosestCenter);
        assert!(config.modifiers.contains(&Modifier::RestrictToVerticalAxis));
    }

    #[test]
    fn test_mixed_preset_has_no_strategy() {
        let config = Orientation::Mixed.config();
        assert_eq!(config.strategy, None);
        assert_eq!(config.collision_detection, CollisionDetection::ClosestCorners);
        assert_eq!(config.modifiers, vec![Modifier::RestrictToParentElement]);
    }

    #[test]
    fn test_default_orientation_is_vertical() {
        assert_eq!(Orientation::default(), Orientation::Vertical);
        assert_eq!(SortingStrategy::default(), SortingStrategy::Rect);
    }

    #[test]
    fn test_strategy_display() {
        assert_eq!(SortingStrategy::VerticalList.to_string(), "vertical-list");
        assert_eq!(
            SortingStrategy::Custom("masonry".into()).to_string(),
            "custom:masonry"
        );
    }
}

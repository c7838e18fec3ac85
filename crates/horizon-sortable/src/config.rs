//! Declarative configuration for a sortable root.
//!
//! A [`SortableConfig`] can be written in TOML or JSON. Every field is
//! optional; omitted fields keep the defaults a bare builder would use.
//!
//! ```toml
//! orientation = "horizontal"
//! flat_cursor = false
//! collision_detection = "closest-corners"
//!
//! [screen_reader_instructions]
//! draggable = "Press space to lift."
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::accessibility::ScreenReaderInstructions;
use crate::error::{Result, SortableError};
use crate::orientation::{CollisionDetection, Modifier, Orientation, SortingStrategy};

/// Settings applied to a [`SortableRootBuilder`](crate::widget::SortableRootBuilder).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SortableConfig {
    /// Layout direction preset.
    pub orientation: Orientation,
    /// Keep the default cursor instead of grab/grabbing.
    pub flat_cursor: bool,
    /// Overrides the preset's strategy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy: Option<SortingStrategy>,
    /// Overrides the preset's modifiers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifiers: Option<Vec<Modifier>>,
    /// Overrides the preset's collision detection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collision_detection: Option<CollisionDetection>,
    /// Accessible usage instructions.
    pub screen_reader_instructions: ScreenReaderInstructions,
}

impl Default for SortableConfig {
    fn default() -> Self {
        Self {
            orientation: Orientation::default(),
            flat_cursor: true,
            strategy: None,
            modifiers: None,
            collision_detection: None,
            screen_reader_instructions: ScreenReaderInstructions::default(),
        }
    }
}

impl SortableConfig {
    /// Parses TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e: toml::de::Error| SortableError::config(e.to_string()))
    }

    /// Parses JSON text.
    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| SortableError::config(e.to_string()))
    }

    /// Loads a `.toml` or `.json` file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| SortableError::io(path, e))?;

        let config = match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Self::from_toml_str(&text)?,
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::from_json_str(&text)?,
            other => {
                return Err(SortableError::config(format!(
                    "unsupported configuration format: {}",
                    other.unwrap_or("<none>")
                )));
            }
        };

        tracing::debug!(target: "horizon_sortable::config", path = %path.display(), orientation = ?config.orientation, "loaded sortable configuration");
        Ok(config)
    }

    /// Serializes to TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| SortableError::config(e.to_string()))
    }
}

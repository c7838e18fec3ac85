//! Sortable items and their identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The identifier of a sortable item: a string or an integer.
///
/// Ids must be unique within one collection. Displays as the bare value,
/// which is what accessibility announcements show.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    /// An integer id.
    Int(i64),
    /// A string id.
    Str(String),
}

impl ItemId {
    /// Returns the string form if this is a string id.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            Self::Int(_) => None,
        }
    }

    /// Builds an id from a JSON value, if it is a string or an integer.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(Self::Str(s.clone())),
            Value::Number(n) => n.as_i64().map(Self::Int),
            _ => None,
        }
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Str(s) => f.write_str(s),
        }
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<i64> for ItemId {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<i32> for ItemId {
    fn from(n: i32) -> Self {
        Self::Int(n.into())
    }
}

impl From<u32> for ItemId {
    fn from(n: u32) -> Self {
        Self::Int(n.into())
    }
}

/// One entry of a sortable collection.
///
/// The payload is opaque to the engine; only `id` is ever inspected.
/// `style` and `class_name` are presentation hints passed through to the
/// renderer untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortableItem {
    /// Unique identifier within the collection.
    pub id: ItemId,
    /// Caller-defined fields, flattened next to `id` when serialized.
    #[serde(flatten)]
    pub payload: Map<String, Value>,
    /// Optional inline style hint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    /// Optional class/tag hint.
    #[serde(default, rename = "className", skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
}

impl SortableItem {
    /// Creates an item with an empty payload.
    pub fn new(id: impl Into<ItemId>) -> Self {
        Self {
            id: id.into(),
            payload: Map::new(),
            style: None,
            class_name: None,
        }
    }

    /// Adds a payload field.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.payload.insert(name.into(), value.into());
        self
    }

    /// Sets the style hint.
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    /// Sets the class hint.
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Returns a payload field.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.payload.get(name)
    }
}

/// Builds a collection of payload-less items from ids.
pub fn items_from_ids<I, T>(ids: I) -> Vec<SortableItem>
where
    I: IntoIterator<Item = T>,
    T: Into<ItemId>,
{
    ids.into_iter().map(SortableItem::new).collect()
}

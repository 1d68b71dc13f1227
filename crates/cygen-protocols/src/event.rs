//! Recorded browser events.
//!
//! Events arrive as JSON objects from the recorder, e.g.
//! `{"action": "click", "selector": "#submit", "frameId": 0}`. The `action`
//! field selects the variant; fields that do not belong to the action are
//! ignored. Unknown actions deserialize into [`EventAction::Unknown`].
//! Scalar fields are decoded leniently (see [`crate::lenient`]), so a field
//! of an unexpected type never rejects the recording.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Key code of the TAB key.
pub const TAB_KEY_CODE: u64 = 9;

/// One recorded browser interaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordedEvent {
    /// What happened, with its action-specific fields.
    #[serde(flatten)]
    pub action: EventAction,

    /// Frame the event originated from. `None` or `0` means the main page.
    #[serde(
        default,
        deserialize_with = "crate::lenient::integer",
        skip_serializing_if = "Option::is_none"
    )]
    pub frame_id: Option<u64>,

    /// URL of the originating frame.
    #[serde(
        default,
        deserialize_with = "crate::lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub frame_url: Option<String>,
}

impl RecordedEvent {
    /// Event on the main page.
    pub fn new(action: EventAction) -> Self {
        Self {
            action,
            frame_id: None,
            frame_url: None,
        }
    }

    /// Event originating from a sub-frame.
    pub fn in_frame(action: EventAction, frame_id: u64, frame_url: impl Into<String>) -> Self {
        Self {
            action,
            frame_id: Some(frame_id),
            frame_url: Some(frame_url.into()),
        }
    }

    /// Parse a JSON array of events.
    pub fn parse_list(json: &str) -> Result<Vec<Self>, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// The action of a recorded event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action")]
pub enum EventAction {
    #[serde(rename = "click")]
    Click {
        #[serde(default, deserialize_with = "crate::lenient::string")]
        selector: Option<String>,
    },

    #[serde(rename = "change", rename_all = "camelCase")]
    Change {
        #[serde(default, deserialize_with = "crate::lenient::string")]
        selector: Option<String>,
        #[serde(default, deserialize_with = "crate::lenient::string")]
        value: Option<String>,
        /// Upper-case tag name of the target element (`INPUT`, `SELECT`, ...).
        #[serde(default, deserialize_with = "crate::lenient::string")]
        tag_name: Option<String>,
        /// `type` attribute of an input target (`checkbox`, `text`, ...).
        #[serde(default, deserialize_with = "crate::lenient::string")]
        target_type: Option<String>,
    },

    #[serde(rename = "keydown", rename_all = "camelCase")]
    Keydown {
        #[serde(default, deserialize_with = "crate::lenient::string")]
        selector: Option<String>,
        #[serde(default, deserialize_with = "crate::lenient::string")]
        value: Option<String>,
        #[serde(default, deserialize_with = "crate::lenient::integer")]
        key_code: Option<u64>,
    },

    #[serde(rename = "goto*")]
    Goto {
        #[serde(default, deserialize_with = "crate::lenient::string")]
        href: Option<String>,
    },

    #[serde(rename = "viewport*")]
    Viewport { value: Option<ViewportSize> },

    #[serde(rename = "navigation*")]
    Navigation {
        #[serde(default, deserialize_with = "crate::lenient::string")]
        href: Option<String>,
    },

    #[serde(rename = "cookie")]
    Cookie { cookies: Option<Vec<CookieEntry>> },

    #[serde(rename = "storage")]
    Storage { value: Option<Vec<StorageEntry>> },

    /// Any action the generator does not handle.
    #[serde(other)]
    Unknown,
}

impl EventAction {
    /// Wire name of the action, `None` for unknown actions.
    pub fn name(&self) -> Option<&'static str> {
        match self {
            Self::Click { .. } => Some("click"),
            Self::Change { .. } => Some("change"),
            Self::Keydown { .. } => Some("keydown"),
            Self::Goto { .. } => Some("goto*"),
            Self::Viewport { .. } => Some("viewport*"),
            Self::Navigation { .. } => Some("navigation*"),
            Self::Cookie { .. } => Some("cookie"),
            Self::Storage { .. } => Some("storage"),
            Self::Unknown => None,
        }
    }
}

/// Viewport dimensions carried by a `viewport*` event.
///
/// Dimensions are kept as given, fractions included.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportSize {
    #[serde(default, deserialize_with = "crate::lenient::number")]
    pub width: Option<f64>,
    #[serde(default, deserialize_with = "crate::lenient::number")]
    pub height: Option<f64>,
}

/// A cookie snapshot entry.
///
/// Everything other than `name` and `value` (domain, path, expiry, ...) is
/// kept in `options`, in input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CookieEntry {
    #[serde(default, deserialize_with = "crate::lenient::string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "crate::lenient::string")]
    pub value: Option<String>,
    #[serde(flatten)]
    pub options: Map<String, Value>,
}

impl CookieEntry {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            value: Some(value.into()),
            options: Map::new(),
        }
    }
}

/// A local storage key/value pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageEntry {
    #[serde(default, deserialize_with = "crate::lenient::string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "crate::lenient::string")]
    pub value: Option<String>,
}

impl StorageEntry {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            value: Some(value.into()),
        }
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;

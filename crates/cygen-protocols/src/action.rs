//! Action vocabulary shared by recorded events and generated lines.

use serde::{Deserialize, Serialize};

/// Semantic tag of a generated line.
///
/// One tag per kind of line the generator emits. Wire names match the
/// `action` discriminator of the producing event, plus `frame-set` for the
/// synthetic frame declarations added by post-processing. Navigation lines
/// are tagged `goto*`; keydown events emit no lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionTag {
    #[serde(rename = "click")]
    Click,
    #[serde(rename = "change")]
    Change,
    #[serde(rename = "goto*")]
    Goto,
    #[serde(rename = "viewport*")]
    Viewport,
    #[serde(rename = "cookie")]
    Cookie,
    #[serde(rename = "storage")]
    LocalStorage,
    #[serde(rename = "frame-set")]
    FrameSet,
}

impl ActionTag {
    /// Wire name of the tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::Change => "change",
            Self::Goto => "goto*",
            Self::Viewport => "viewport*",
            Self::Cookie => "cookie",
            Self::LocalStorage => "storage",
            Self::FrameSet => "frame-set",
        }
    }
}

impl std::fmt::Display for ActionTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

//! Generator options.

use serde::{Deserialize, Serialize};

/// Options recognised by the generator.
///
/// Field names follow the recorder's camelCase convention so a caller's
/// options object deserializes directly. Missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorOptions {
    /// Wrap the test case in a `describe` suite.
    #[serde(default = "default_true")]
    pub wrap_describe: bool,

    /// Separate generated lines with blank lines.
    #[serde(default = "default_true")]
    pub blank_lines_between_blocks: bool,

    /// Attribute preferred by the recorder's selector strategy.
    /// Carried for the surrounding tooling; generation does not read it.
    #[serde(default)]
    pub data_attribute: String,

    /// Inject frame lookups before the first line that uses a sub-frame.
    #[serde(default = "default_true")]
    pub declare_frames: bool,

    /// How blank lines are produced when `blank_lines_between_blocks` is set.
    #[serde(default)]
    pub blank_line_style: BlankLineStyle,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            wrap_describe: true,
            blank_lines_between_blocks: true,
            data_attribute: String::new(),
            declare_frames: true,
            blank_line_style: BlankLineStyle::default(),
        }
    }
}

impl GeneratorOptions {
    /// Indentation applied to body and setup lines.
    pub fn indent(&self) -> &'static str {
        if self.wrap_describe { "    " } else { "   " }
    }

    /// Whether separator blocks should be spliced into the block list.
    pub fn uses_separator_blocks(&self) -> bool {
        self.blank_lines_between_blocks && self.blank_line_style == BlankLineStyle::Separators
    }

    /// Whether the renderer joins lines with a blank line.
    pub fn uses_joined_blank_lines(&self) -> bool {
        self.blank_lines_between_blocks && self.blank_line_style == BlankLineStyle::Joined
    }
}

/// Blank-line strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlankLineStyle {
    /// Every body line is followed by a line holding a single space.
    #[default]
    Joined,
    /// An empty separator line before and between blocks.
    Separators,
}

impl std::str::FromStr for BlankLineStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "joined" => Ok(Self::Joined),
            "separators" => Ok(Self::Separators),
            other => Err(format!("unknown blank line style: {}", other)),
        }
    }
}

fn default_true() -> bool {
    true
}

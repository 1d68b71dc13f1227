//! Generated lines and the blocks that group them.

use cygen_protocols::ActionTag;

use crate::frame::{FrameId, MAIN_FRAME_ID};

/// One line of generated code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    kind: Option<ActionTag>,
    text: String,
    frame_id: Option<FrameId>,
}

impl Line {
    /// Semantic tag, `None` for structural lines.
    pub fn kind(&self) -> Option<ActionTag> {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Sub-frame the line addresses, `None` on the main page.
    pub fn frame_id(&self) -> Option<FrameId> {
        self.frame_id
    }

    /// Structural lines (separators) carry no semantic tag.
    pub fn is_structural(&self) -> bool {
        self.kind.is_none()
    }
}

/// Lines produced by one event or one synthetic action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    frame_id: FrameId,
    lines: Vec<Line>,
}

impl Block {
    /// Empty block owned by `frame_id`.
    pub fn new(frame_id: FrameId) -> Self {
        Self {
            frame_id,
            lines: Vec::new(),
        }
    }

    /// Block holding a single tagged line.
    pub fn with_line(frame_id: FrameId, kind: ActionTag, text: impl Into<String>) -> Self {
        let mut block = Self::new(frame_id);
        block.push(kind, text);
        block
    }

    /// A blank separator: one untagged empty line on the main page.
    pub fn separator() -> Self {
        Self {
            frame_id: MAIN_FRAME_ID,
            lines: vec![Line {
                kind: None,
                text: String::new(),
                frame_id: None,
            }],
        }
    }

    /// Append a line stamped with this block's frame.
    pub fn push(&mut self, kind: ActionTag, text: impl Into<String>) {
        let line = self.stamp(kind, text.into());
        self.lines.push(line);
    }

    /// Rebuild the block with `prefix` lines ahead of the existing ones.
    pub fn with_prefix<I, S>(self, prefix: I) -> Self
    where
        I: IntoIterator<Item = (ActionTag, S)>,
        S: Into<String>,
    {
        let mut lines: Vec<Line> = prefix
            .into_iter()
            .map(|(kind, text)| self.stamp(kind, text.into()))
            .collect();
        lines.extend(self.lines);
        Self {
            frame_id: self.frame_id,
            lines,
        }
    }

    pub fn frame_id(&self) -> FrameId {
        self.frame_id
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn is_separator(&self) -> bool {
        !self.lines.is_empty() && self.lines.iter().all(Line::is_structural)
    }

    fn stamp(&self, kind: ActionTag, text: String) -> Line {
        Line {
            kind: Some(kind),
            text,
            frame_id: (self.frame_id != MAIN_FRAME_ID).then_some(self.frame_id),
        }
    }
}

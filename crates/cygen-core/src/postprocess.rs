//! Second pass over dispatched blocks.
//!
//! Both passes rebuild the block list instead of splicing it in place.

use tracing::debug;

use cygen_config::GeneratorOptions;
use cygen_protocols::ActionTag;

use crate::block::Block;
use crate::frame::FrameRegistry;
use crate::handlers;

/// Applies the option-driven block transforms.
pub struct PostProcessor<'a> {
    options: &'a GeneratorOptions,
}

impl<'a> PostProcessor<'a> {
    pub fn new(options: &'a GeneratorOptions) -> Self {
        Self { options }
    }

    /// Run every enabled pass, frame declarations first.
    pub fn run(&self, blocks: Vec<Block>, mut frames: FrameRegistry) -> Vec<Block> {
        let mut blocks = blocks;

        if self.options.declare_frames && !frames.is_empty() {
            blocks = inject_frame_declarations(blocks, &mut frames);
        }

        if self.options.uses_separator_blocks() {
            blocks = insert_separators(blocks);
        }

        blocks
    }
}

/// Declare each registered frame at the start of the first block that uses it.
///
/// The registry entry is consumed on injection, so a frame is declared once.
pub fn inject_frame_declarations(blocks: Vec<Block>, frames: &mut FrameRegistry) -> Vec<Block> {
    let mut out = Vec::with_capacity(blocks.len());

    for block in blocks {
        if frames.is_empty() {
            out.push(block);
            continue;
        }

        let pending = block
            .lines()
            .iter()
            .filter_map(|line| line.frame_id())
            .find(|id| frames.contains(*id));

        match pending.and_then(|id| frames.take(id).map(|url| (id, url))) {
            Some((id, url)) => {
                debug!("Declaring frame {} ({:?})", id, url);
                out.push(block.with_prefix([
                    (ActionTag::FrameSet, handlers::frames_declaration()),
                    (
                        ActionTag::FrameSet,
                        handlers::frame_lookup(id, url.as_deref()),
                    ),
                ]));
            }
            None => out.push(block),
        }
    }

    out
}

/// Put a separator before the first block and after every block.
///
/// An empty list stays empty.
pub fn insert_separators(blocks: Vec<Block>) -> Vec<Block> {
    if blocks.is_empty() {
        return blocks;
    }

    let mut out = Vec::with_capacity(blocks.len() * 2 + 1);
    out.push(Block::separator());
    for block in blocks {
        out.push(block);
        out.push(Block::separator());
    }
    out
}

#[cfg(test)]
#[path = "postprocess_tests.rs"]
mod tests;

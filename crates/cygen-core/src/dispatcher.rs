//! Event dispatch.
//!
//! Scans the recorded events once, in order, keeping the frame tracker
//! current and routing each event to its handler.

use tracing::{debug, trace};

use cygen_protocols::{ActionTag, EventAction, RecordedEvent, TAB_KEY_CODE};

use crate::block::Block;
use crate::frame::{FrameRegistry, FrameTracker};
use crate::handlers;

/// Result of dispatching an event sequence.
#[derive(Debug, Clone, Default)]
pub struct Translation {
    /// Blocks of the test body, in event order.
    pub blocks: Vec<Block>,
    /// Blocks for the `beforeEach` setup section.
    pub setup_blocks: Vec<Block>,
    /// Sub-frames seen while scanning, with their first URL.
    pub frames: FrameRegistry,
    /// Whether any navigation was recorded.
    pub has_navigation: bool,
}

/// Translate events into main and setup blocks.
pub fn translate(events: &[RecordedEvent]) -> Translation {
    let mut dispatcher = Dispatcher::new();
    for event in events {
        dispatcher.dispatch(event);
    }
    dispatcher.finish()
}

/// Per-generation dispatch state.
#[derive(Debug, Default)]
pub struct Dispatcher {
    tracker: FrameTracker,
    blocks: Vec<Block>,
    setup_blocks: Vec<Block>,
    has_navigation: bool,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle one event in the frame it came from.
    pub fn dispatch(&mut self, event: &RecordedEvent) {
        self.tracker
            .observe(event.frame_id, event.frame_url.as_deref());

        match &event.action {
            EventAction::Click { selector } => {
                let text = handlers::click(self.handle(), selector.as_deref());
                self.emit(ActionTag::Click, text);
            }
            EventAction::Change {
                selector,
                value,
                tag_name,
                target_type,
            } => self.dispatch_change(
                selector.as_deref(),
                value.as_deref(),
                tag_name.as_deref(),
                target_type.as_deref(),
            ),
            EventAction::Keydown { key_code, .. } => {
                // Typing is captured by change events; TAB is reserved for
                // focus moves and produces nothing either.
                if *key_code == Some(TAB_KEY_CODE) {
                    trace!("Skipping TAB keydown");
                }
            }
            EventAction::Goto { href } => {
                let text = handlers::visit(self.handle(), href.as_deref());
                self.emit(ActionTag::Goto, text);
            }
            EventAction::Viewport { value } => {
                let (width, height) = value.map_or((None, None), |v| (v.width, v.height));
                let text = handlers::viewport(self.handle(), width, height);
                self.emit(ActionTag::Viewport, text);
            }
            EventAction::Navigation { href } => {
                // Cypress waits for page loads on its own, so the wait block
                // carries no lines.
                self.blocks.push(Block::new(self.tracker.current_id()));
                let text = handlers::visit(self.handle(), href.as_deref());
                self.emit(ActionTag::Goto, text);
                self.has_navigation = true;
            }
            EventAction::Cookie { cookies } => {
                let frame_id = self.tracker.current_id();
                let handle = self.handle();
                let mut setup = vec![Block::with_line(
                    frame_id,
                    ActionTag::Cookie,
                    handlers::clear_cookies(handle),
                )];
                for cookie in cookies.iter().flatten() {
                    setup.push(Block::with_line(
                        frame_id,
                        ActionTag::Cookie,
                        handlers::set_cookie(
                            handle,
                            cookie.name.as_deref(),
                            cookie.value.as_deref(),
                            &cookie.options,
                        ),
                    ));
                }
                self.setup_blocks.extend(setup);
            }
            EventAction::Storage { value } => {
                for entry in value.iter().flatten() {
                    let text =
                        handlers::set_local_storage(entry.name.as_deref(), entry.value.as_deref());
                    self.emit(ActionTag::LocalStorage, text);
                }
            }
            EventAction::Unknown => {
                debug!("Skipping event with unhandled action");
            }
        }
    }

    fn dispatch_change(
        &mut self,
        selector: Option<&str>,
        value: Option<&str>,
        tag_name: Option<&str>,
        target_type: Option<&str>,
    ) {
        let text = match (tag_name, target_type) {
            (Some("SELECT"), _) => handlers::select(self.handle(), selector, value),
            (Some("INPUT"), Some("checkbox")) => handlers::check(self.handle(), selector, value),
            (Some("INPUT"), _) => handlers::type_text(self.handle(), selector, value),
            (other, _) => {
                debug!("Skipping change on unsupported element {:?}", other);
                return;
            }
        };
        self.emit(ActionTag::Change, text);
    }

    fn handle(&self) -> &str {
        self.tracker.handle()
    }

    fn emit(&mut self, kind: ActionTag, text: String) {
        let block = Block::with_line(self.tracker.current_id(), kind, text);
        self.blocks.push(block);
    }

    /// Consume the dispatcher and hand back everything it built.
    pub fn finish(self) -> Translation {
        Translation {
            blocks: self.blocks,
            setup_blocks: self.setup_blocks,
            frames: self.tracker.into_registry(),
            has_navigation: self.has_navigation,
        }
    }
}

#[cfg(test)]
#[path = "dispatcher_tests.rs"]
mod tests;

//! Frame context tracking.
//!
//! Every event is stamped with the frame it came from. The tracker keeps the
//! frame that is active while events are scanned, and a registry of the URL
//! first seen for each sub-frame so declarations can be injected later.

use std::collections::BTreeMap;

/// Recorder-assigned frame identifier.
pub type FrameId = u64;

/// Frame id of the main page.
pub const MAIN_FRAME_ID: FrameId = 0;

/// Handle that addresses the main page in generated code.
pub const MAIN_FRAME_HANDLE: &str = "cy";

/// Handle name bound to a sub-frame in generated code.
pub fn frame_handle(frame_id: FrameId) -> String {
    format!("frame_{}", frame_id)
}

/// Sub-frame id to the URL first observed for it.
///
/// Entries are taken out once the frame has been declared, so each frame is
/// declared at most once per generation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameRegistry {
    frames: BTreeMap<FrameId, Option<String>>,
}

impl FrameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `url` for `frame_id` unless the frame is already known.
    pub fn record(&mut self, frame_id: FrameId, url: Option<&str>) {
        self.frames
            .entry(frame_id)
            .or_insert_with(|| url.map(str::to_string));
    }

    pub fn contains(&self, frame_id: FrameId) -> bool {
        self.frames.contains_key(&frame_id)
    }

    /// URL recorded for `frame_id`, if the frame is known and had one.
    pub fn url(&self, frame_id: FrameId) -> Option<&str> {
        self.frames.get(&frame_id).and_then(|u| u.as_deref())
    }

    /// Remove the entry for `frame_id`, returning its URL slot.
    pub fn take(&mut self, frame_id: FrameId) -> Option<Option<String>> {
        self.frames.remove(&frame_id)
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Known frame ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = FrameId> + '_ {
        self.frames.keys().copied()
    }
}

/// Tracks the active frame while events are scanned.
#[derive(Debug, Clone)]
pub struct FrameTracker {
    current_id: FrameId,
    handle: String,
    registry: FrameRegistry,
}

impl Default for FrameTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameTracker {
    pub fn new() -> Self {
        Self {
            current_id: MAIN_FRAME_ID,
            handle: MAIN_FRAME_HANDLE.to_string(),
            registry: FrameRegistry::new(),
        }
    }

    /// Switch to the frame an event came from.
    ///
    /// A missing or zero id selects the main page.
    pub fn observe(&mut self, frame_id: Option<FrameId>, frame_url: Option<&str>) {
        match frame_id {
            Some(id) if id != MAIN_FRAME_ID => {
                self.current_id = id;
                self.handle = frame_handle(id);
                self.registry.record(id, frame_url);
            }
            _ => {
                self.current_id = MAIN_FRAME_ID;
                self.handle = MAIN_FRAME_HANDLE.to_string();
            }
        }
    }

    pub fn current_id(&self) -> FrameId {
        self.current_id
    }

    /// Handle of the active frame (`cy` or `frame_<id>`).
    pub fn handle(&self) -> &str {
        &self.handle
    }

    pub fn registry(&self) -> &FrameRegistry {
        &self.registry
    }

    pub fn into_registry(self) -> FrameRegistry {
        self.registry
    }
}

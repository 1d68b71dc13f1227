//! # cygen Core
//!
//! Translates recorded browser events into the source of a Cypress test.
//!
//! ## Pipeline
//!
//! ```text
//! events ──► Dispatcher ──► PostProcessor ──► Renderer ──► String
//!            (blocks,        (frame decls,     (templates,
//!             setup blocks)   separators)       indentation)
//! ```
//!
//! Every stage is a pure function of its inputs; a [`CodeGenerator`] holds
//! only options, so one instance can serve many generations concurrently.

pub mod block;
pub mod dispatcher;
pub mod frame;
pub mod generator;
pub mod handlers;
pub mod postprocess;
pub mod render;
pub mod validate;

pub use block::{Block, Line};
pub use dispatcher::{translate, Dispatcher, Translation};
pub use frame::{frame_handle, FrameId, FrameRegistry, FrameTracker, MAIN_FRAME_HANDLE, MAIN_FRAME_ID};
pub use generator::CodeGenerator;
pub use handlers::PLACEHOLDER;
pub use postprocess::PostProcessor;
pub use render::Renderer;
pub use validate::EventValidator;

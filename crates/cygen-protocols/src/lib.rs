//! # cygen Protocols
//!
//! Shared data definitions for the cygen code generator.
//! Contains only types - no generation logic.
//!
//! ## Contents
//!
//! - [`RecordedEvent`] - One recorded browser interaction, as produced by the recorder
//! - [`EventAction`] - The closed set of actions the generator understands
//! - [`ActionTag`] - Semantic tag carried by every generated line
//! - [`GenerateError`] - Errors surfaced by checked generation
//! - [`lenient`] - Field decoders that accept loosely typed recorder output

pub mod action;
pub mod error;
pub mod event;
pub mod lenient;

pub use action::ActionTag;
pub use error::GenerateError;
pub use event::{CookieEntry, EventAction, RecordedEvent, StorageEntry, ViewportSize, TAB_KEY_CODE};

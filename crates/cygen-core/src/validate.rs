//! Opt-in checks for malformed events.
//!
//! Generation itself never rejects an event: missing fields become
//! placeholders. Callers that need correct output validate first.

use cygen_config::{ValidationError, ValidationResult, ValidationWarning};
use cygen_protocols::{EventAction, RecordedEvent};

use crate::frame::MAIN_FRAME_ID;

/// Checks recorded events for fields their handlers need.
pub struct EventValidator;

impl EventValidator {
    /// Validate a whole sequence; paths are `events[<index>].<field>`.
    pub fn validate(events: &[RecordedEvent]) -> ValidationResult {
        let mut result = ValidationResult::default();
        for (index, event) in events.iter().enumerate() {
            result.merge(Self::validate_event(event).prefixed(&format!("events[{}]", index)));
        }
        result
    }

    /// Validate one event; paths are relative to the event.
    pub fn validate_event(event: &RecordedEvent) -> ValidationResult {
        let mut result = ValidationResult::default();

        if let Some(id) = event.frame_id {
            if id != MAIN_FRAME_ID && event.frame_url.is_none() {
                result.add_error(ValidationError::new(
                    "frameUrl",
                    format!("required for frame {}", id),
                ));
            }
        }

        match &event.action {
            EventAction::Click { selector } => {
                require(&mut result, "selector", selector.is_some());
            }
            EventAction::Change {
                selector,
                value,
                tag_name,
                ..
            } => {
                require(&mut result, "selector", selector.is_some());
                require(&mut result, "value", value.is_some());
                match tag_name.as_deref() {
                    Some("SELECT") | Some("INPUT") => {}
                    Some(other) => result.add_warning(ValidationWarning::new(
                        "tagName",
                        format!("change on {} is not translated", other),
                    )),
                    None => require(&mut result, "tagName", false),
                }
            }
            EventAction::Keydown { .. } => {}
            EventAction::Goto { href } | EventAction::Navigation { href } => {
                require(&mut result, "href", href.is_some());
            }
            EventAction::Viewport { value } => match value {
                Some(size) => {
                    require(&mut result, "value.width", size.width.is_some());
                    require(&mut result, "value.height", size.height.is_some());
                }
                None => require(&mut result, "value", false),
            },
            EventAction::Cookie { cookies } => match cookies {
                Some(cookies) => {
                    for (i, cookie) in cookies.iter().enumerate() {
                        let path = format!("cookies[{}]", i);
                        require(&mut result, &format!("{}.name", path), cookie.name.is_some());
                        require(&mut result, &format!("{}.value", path), cookie.value.is_some());
                    }
                }
                None => require(&mut result, "cookies", false),
            },
            EventAction::Storage { value } => match value {
                Some(entries) => {
                    for (i, entry) in entries.iter().enumerate() {
                        let path = format!("value[{}]", i);
                        require(&mut result, &format!("{}.name", path), entry.name.is_some());
                        require(&mut result, &format!("{}.value", path), entry.value.is_some());
                    }
                }
                None => require(&mut result, "value", false),
            },
            EventAction::Unknown => {
                result.add_warning(ValidationWarning::new(
                    "action",
                    "unrecognized action is skipped",
                ));
            }
        }

        result
    }
}

fn require(result: &mut ValidationResult, field: &str, present: bool) {
    if !present {
        result.add_error(ValidationError::new(field, "missing required field"));
    }
}

//! Reading recorded events.

use std::io::Read;
use std::path::Path;

use thiserror::Error;

use cygen_protocols::{GenerateError, RecordedEvent};

/// Errors while reading event input.
#[derive(Debug, Error)]
pub(crate) enum InputError {
    #[error("Failed to read {source_name}: {error}")]
    Io {
        source_name: String,
        error: std::io::Error,
    },

    #[error(transparent)]
    Generate(#[from] GenerateError),
}

/// Read a JSON event array from `path`, or from `reader` when the path is
/// absent or `-`.
pub(crate) fn read_events<R: Read>(
    path: Option<&Path>,
    mut reader: R,
) -> Result<Vec<RecordedEvent>, InputError> {
    let content = match path {
        Some(p) if p != Path::new("-") => {
            std::fs::read_to_string(p).map_err(|error| InputError::Io {
                source_name: p.display().to_string(),
                error,
            })?
        }
        _ => {
            let mut buf = String::new();
            reader
                .read_to_string(&mut buf)
                .map_err(|error| InputError::Io {
                    source_name: "stdin".to_string(),
                    error,
                })?;
            buf
        }
    };

    let events = RecordedEvent::parse_list(&content).map_err(GenerateError::from)?;
    Ok(events)
}

//! Code generator entry point.

use tracing::{debug, warn};

use cygen_config::{ConfigValidator, GeneratorOptions};
use cygen_protocols::{GenerateError, RecordedEvent};

use crate::dispatcher::translate;
use crate::postprocess::PostProcessor;
use crate::render::Renderer;
use crate::validate::EventValidator;

/// Generates a Cypress test from recorded events.
///
/// Holds only options; all per-generation state lives inside [`generate`],
/// so a shared generator is safe to use from several threads.
///
/// [`generate`]: CodeGenerator::generate
#[derive(Debug, Clone, Default)]
pub struct CodeGenerator {
    options: GeneratorOptions,
}

impl CodeGenerator {
    pub fn new(options: GeneratorOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// Generate test source for `events`.
    ///
    /// Never fails: unknown actions are skipped and missing fields are
    /// written as placeholders.
    pub fn generate(&self, events: &[RecordedEvent]) -> String {
        debug!("Generating code for {} events", events.len());

        let translation = translate(events);
        if translation.has_navigation {
            debug!("Recording contains navigation");
        }

        let blocks = PostProcessor::new(&self.options).run(translation.blocks, translation.frames);
        Renderer::new(&self.options).render(&blocks, &translation.setup_blocks)
    }

    /// Validate options and events, then generate.
    ///
    /// Fails on the first invalid option or the first event missing a field
    /// its handler needs. Warnings are logged and do not fail.
    pub fn generate_checked(&self, events: &[RecordedEvent]) -> Result<String, GenerateError> {
        ConfigValidator::ensure_valid(&self.options)
            .map_err(|e| GenerateError::InvalidOptions(e.to_string()))?;

        for (index, event) in events.iter().enumerate() {
            let result = EventValidator::validate_event(event);
            for warning in &result.warnings {
                warn!("Event {}: {}", index, warning);
            }
            if let Some(error) = result.errors.into_iter().next() {
                return Err(GenerateError::InvalidEvent {
                    index,
                    message: error.to_string(),
                });
            }
        }

        Ok(self.generate(events))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cygen_protocols::EventAction;

    #[test]
    fn test_default_options() {
        let generator = CodeGenerator::default();
        assert!(generator.options().wrap_describe);
        assert!(generator.options().blank_lines_between_blocks);
    }

    #[test]
    fn test_generate_checked_rejects_missing_field() {
        let generator = CodeGenerator::default();
        let events = vec![
            RecordedEvent::new(EventAction::Click {
                selector: Some("#ok".to_string()),
            }),
            RecordedEvent::new(EventAction::Goto { href: None }),
        ];
        let err = generator.generate_checked(&events).unwrap_err();
        match err {
            GenerateError::InvalidEvent { index, message } => {
                assert_eq!(index, 1);
                assert!(message.contains("href"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_generate_checked_rejects_bad_options() {
        let generator = CodeGenerator::new(GeneratorOptions {
            data_attribute: "data cy".to_string(),
            ..Default::default()
        });
        let err = generator.generate_checked(&[]).unwrap_err();
        assert!(matches!(err, GenerateError::InvalidOptions(_)));
    }

    #[test]
    fn test_generate_checked_matches_generate() {
        let generator = CodeGenerator::default();
        let events = vec![
            RecordedEvent::new(EventAction::Click {
                selector: Some("#ok".to_string()),
            }),
            RecordedEvent::new(EventAction::Unknown),
        ];
        let checked = generator.generate_checked(&events).unwrap();
        assert_eq!(checked, generator.generate(&events));
    }
}

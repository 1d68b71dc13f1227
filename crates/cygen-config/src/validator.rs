//! Options validation.

use crate::error::ConfigError;
use crate::schema::{BlankLineStyle, GeneratorOptions};

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// Append another result's findings.
    pub fn merge(&mut self, other: ValidationResult) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }

    /// Nest every finding under `prefix`: `selector` becomes `<prefix>.selector`.
    pub fn prefixed(self, prefix: &str) -> Self {
        let nest = |path: String| format!("{}.{}", prefix, path);
        Self {
            errors: self
                .errors
                .into_iter()
                .map(|e| ValidationError::new(nest(e.path), e.message))
                .collect(),
            warnings: self
                .warnings
                .into_iter()
                .map(|w| ValidationWarning::new(nest(w.path), w.message))
                .collect(),
        }
    }
}

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// A validation warning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
}

impl ValidationWarning {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Options validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate generator options.
    pub fn validate(options: &GeneratorOptions) -> ValidationResult {
        let mut result = ValidationResult::default();

        Self::validate_data_attribute(options, &mut result);
        Self::validate_spacing(options, &mut result);

        result
    }

    /// Validate and turn the first error into a [`ConfigError`].
    pub fn ensure_valid(options: &GeneratorOptions) -> Result<(), ConfigError> {
        let result = Self::validate(options);
        match result.errors.into_iter().next() {
            Some(error) => Err(ConfigError::InvalidValue {
                field: error.path,
                message: error.message,
            }),
            None => Ok(()),
        }
    }

    fn validate_data_attribute(options: &GeneratorOptions, result: &mut ValidationResult) {
        let attr = &options.data_attribute;
        if attr.chars().any(char::is_whitespace) {
            result.add_error(ValidationError::new(
                "dataAttribute",
                "must not contain whitespace",
            ));
        }

        if attr.contains(['\'', '"', '[', ']', '=']) {
            result.add_error(ValidationError::new(
                "dataAttribute",
                "must be a bare attribute name",
            ));
        }
    }

    fn validate_spacing(options: &GeneratorOptions, result: &mut ValidationResult) {
        if !options.blank_lines_between_blocks
            && options.blank_line_style == BlankLineStyle::Separators
        {
            result.add_warning(ValidationWarning::new(
                "blankLineStyle",
                "has no effect while blankLinesBetweenBlocks is false",
            ));
        }
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;

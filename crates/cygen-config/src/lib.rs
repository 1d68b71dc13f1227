//! # cygen Config
//!
//! Generator options for the cygen code generator.

mod error;
mod schema;
mod validator;

pub use error::ConfigError;
pub use schema::*;
pub use validator::{ConfigValidator, ValidationError, ValidationResult, ValidationWarning};

//! Error types for bounded generation.

use thiserror::Error;

/// Main error type for configuring and running bounded generators.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenError {
    /// The range configuration could not be turned into a domain.
    #[error("Invalid configuration for `{field}`: {message}")]
    Configuration {
        field: &'static str,
        message: String,
    },

    /// A wide value that must name a value of the target type did not.
    #[error("Representation defect: {value} is not a valid {type_name}")]
    RepresentationDefect {
        value: String,
        type_name: &'static str,
    },
}

impl GenError {
    pub(crate) fn configuration(field: &'static str, message: impl Into<String>) -> Self {
        GenError::Configuration {
            field,
            message: message.into(),
        }
    }
}

/// Result type for generator operations.
pub type Result<T> = std::result::Result<T, GenError>;

// Error types module

use thiserror::Error;

/// Centralized error type for the CDN layer
///
/// Errors fall into two groups:
/// - Startup errors (`Config`, `ConfigFile`, `UnknownPreset`) abort plugin
///   initialization and are never seen at query time.
/// - Call-site errors (`UnknownArgument`, `InvalidArgument`, `MissingSource`,
///   `MalformedSource`) indicate a schema/argument mismatch or bad stored
///   data and surface from a single resolve or render call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CdnError {
    /// Invalid plugin configuration (no transformer, bad field path, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration file could not be read or parsed
    #[error("Failed to load configuration: {0}")]
    ConfigFile(String),

    /// `cdn.preset` names a provider that is not registered
    #[error("Unknown CDN preset '{0}'")]
    UnknownPreset(String),

    /// Argument name is absent from the provider's catalog
    #[error("Unknown argument '{name}' for provider '{provider}'")]
    UnknownArgument { provider: String, name: String },

    /// Argument value does not match the catalog's value kind
    #[error("Invalid value for argument '{name}': expected {expected}, found {found}")]
    InvalidArgument {
        name: String,
        expected: String,
        found: String,
    },

    /// Source field is null or missing on the parent record
    #[error("Field '{type_name}.{field}' has no source value")]
    MissingSource { type_name: String, field: String },

    /// Source field holds something other than a string URL
    #[error("Field '{type_name}.{field}' is not a string (found {found})")]
    MalformedSource {
        type_name: String,
        field: String,
        found: String,
    },
}

impl CdnError {
    /// True for errors that must abort initialization
    pub fn is_startup_error(&self) -> bool {
        matches!(
            self,
            CdnError::Config(_) | CdnError::ConfigFile(_) | CdnError::UnknownPreset(_)
        )
    }

    pub(crate) fn config(message: impl Into<String>) -> Self {
        CdnError::Config(message.into())
    }
}

/// Short description of a JSON value's kind, used in error messages
pub(crate) fn describe_json(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => "null".to_string(),
        serde_json::Value::Bool(_) => "boolean".to_string(),
        serde_json::Value::Number(_) => "number".to_string(),
        serde_json::Value::String(_) => "string".to_string(),
        serde_json::Value::Array(_) => "array".to_string(),
        serde_json::Value::Object(_) => "object".to_string(),
    }
}

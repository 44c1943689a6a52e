//! Error types for the website's view logic

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by view-state operations and startup configuration
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to parse site configuration: {message}")]
    ConfigParse { message: String },

    // ─────────────────────────────────────────────────────────────
    // Routing Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Route registered twice: {path}")]
    DuplicateRoute { path: String },

    // ─────────────────────────────────────────────────────────────
    // Form Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Required fields are empty: {}", fields.join(", "))]
    MissingFields { fields: Vec<&'static str> },

    // ─────────────────────────────────────────────────────────────
    // Admin Demo Errors
    // ─────────────────────────────────────────────────────────────
    #[error("No version with id {id}")]
    UnknownVersion { id: u32 },

    #[error("Invalid version: {message}")]
    InvalidVersion { message: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn duplicate_route(path: impl Into<String>) -> Self {
        Self::DuplicateRoute { path: path.into() }
    }

    pub fn invalid_version(message: impl Into<String>) -> Self {
        Self::InvalidVersion {
            message: message.into(),
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Self::ConfigParse {
            message: err.message().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = Error::MissingFields {
            fields: vec!["name", "email"],
        };
        assert_eq!(err.to_string(), "Required fields are empty: name, email");

        let err = Error::UnknownVersion { id: 7 };
        assert_eq!(err.to_string(), "No version with id 7");

        let err = Error::duplicate_route("/docs");
        assert!(err.to_string().contains("/docs"));
    }

    #[test]
    fn test_error_from_toml() {
        let toml_err = toml::from_str::<toml::Table>("name = ").unwrap_err();
        let err: Error = toml_err.into();
        assert!(matches!(err, Error::ConfigParse { .. }));
    }
}

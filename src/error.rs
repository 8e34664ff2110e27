//! Error types for form-widgets
//!
//! Centralized error handling using snafu for ergonomic error definitions.

use snafu::Snafu;

/// Main error type for the widget library
#[derive(Debug, Snafu)]
pub enum Error {
    /// Invalid input or configuration
    #[snafu(display("Invalid: {message}"))]
    Invalid { message: String },

    /// An option record is missing its value/label keys
    #[snafu(display(
        "Expecting option(s) to have keys: {}. Received keys: {}.",
        expected.join(", "),
        received.join(", ")
    ))]
    OptionShape {
        expected: Vec<String>,
        received: Vec<String>,
    },

    /// The create-option callback rejected a new option
    #[snafu(display("Create option failed: {message}"))]
    CreateOption { message: String },

    /// IO error (config file access)
    #[snafu(display("IO error: {source}"))]
    Io { source: std::io::Error },

    /// TOML deserialization error
    #[snafu(display("TOML parse error: {source}"))]
    TomlDe { source: toml::de::Error },
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io { source }
    }
}

impl From<toml::de::Error> for Error {
    fn from(source: toml::de::Error) -> Self {
        Error::TomlDe { source }
    }
}

/// Result type alias for convenience
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_and_toml_errors_convert() {
        let err: Error = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(err, Error::Io { .. }));

        let err: Error = toml::from_str::<toml::Table>("key = ")
            .map_err(Error::from)
            .expect_err("incomplete table");
        assert!(err.to_string().starts_with("TOML parse error"));
    }

    #[test]
    fn option_shape_message_names_both_key_sets() {
        let err = Error::OptionShape {
            expected: vec!["id".into(), "name".into()],
            received: vec!["value".into(), "label".into()],
        };
        assert_eq!(
            err.to_string(),
            "Expecting option(s) to have keys: id, name. Received keys: value, label."
        );
    }
}

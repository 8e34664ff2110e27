//! FieldError - Validation Errors Read by Fields
//!
//! Validation is owned by whatever resolver the form uses; fields only look up the
//! error for their own name and render it.

use std::collections::BTreeMap;

use indexmap::IndexMap;

use crate::error::Error;

/// Validation errors keyed by field name
pub type FieldErrors = BTreeMap<String, FieldError>;

/// Errors for the keys of one object, in schema order
pub type KeyErrors = IndexMap<String, FieldError>;

/// A validation error for one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// Plain message
    Message(String),
    /// Errors for the keys of an object value
    Nested(KeyErrors),
    /// Per-item errors for an array value
    List(Vec<KeyErrors>),
}

impl FieldError {
    pub fn message(text: impl Into<String>) -> Self {
        FieldError::Message(text.into())
    }

    /// Message of a plain error
    pub fn as_message(&self) -> Option<&str> {
        match self {
            FieldError::Message(message) => Some(message),
            _ => None,
        }
    }
}

/// Text to render under a field.
///
/// A list error, or an object error whose children carry messages, means the schema
/// expects option records with different keys than the field was given; that case is
/// reported as a key-shape diagnostic instead of a raw message.
pub fn error_text(errors: &FieldErrors, name: &str, value_key: &str, label_key: &str) -> String {
    let Some(error) = errors.get(name) else {
        return String::new();
    };

    let received = vec![value_key.to_string(), label_key.to_string()];
    match error {
        FieldError::List(items) => {
            let expected = items
                .first()
                .map(|item| item.keys().cloned().collect())
                .unwrap_or_default();
            Error::OptionShape { expected, received }.to_string()
        }
        FieldError::Nested(children)
            if children.values().any(|child| child.as_message().is_some()) =>
        {
            let expected = children.keys().cloned().collect();
            Error::OptionShape { expected, received }.to_string()
        }
        FieldError::Nested(_) => String::new(),
        FieldError::Message(message) => message.clone(),
    }
}

/// Plain message for a field, without the option-shape heuristic
pub fn message_text(errors: &FieldErrors, name: &str) -> String {
    errors
        .get(name)
        .and_then(FieldError::as_message)
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nested(keys: &[&str]) -> KeyErrors {
        keys.iter()
            .map(|k| (k.to_string(), FieldError::message("Required")))
            .collect()
    }

    #[test]
    fn no_error_is_empty() {
        assert_eq!(error_text(&FieldErrors::new(), "framework", "id", "name"), "");
    }

    #[test]
    fn plain_message_passes_through() {
        let mut errors = FieldErrors::new();
        errors.insert("framework".into(), FieldError::message("Must add at least one option"));
        assert_eq!(
            error_text(&errors, "framework", "id", "name"),
            "Must add at least one option"
        );
    }

    #[test]
    fn list_error_reports_key_shape() {
        let mut errors = FieldErrors::new();
        errors.insert("framework".into(), FieldError::List(vec![nested(&["id", "name"])]));
        assert_eq!(
            error_text(&errors, "framework", "value", "label"),
            "Expecting option(s) to have keys: id, name. Received keys: value, label."
        );
    }

    #[test]
    fn nested_error_reports_key_shape() {
        let mut errors = FieldErrors::new();
        errors.insert("framework".into(), FieldError::Nested(nested(&["id", "name"])));
        assert_eq!(
            error_text(&errors, "framework", "value", "label"),
            "Expecting option(s) to have keys: id, name. Received keys: value, label."
        );
    }

    #[test]
    fn expected_keys_keep_schema_order() {
        let mut errors = FieldErrors::new();
        errors.insert("framework".into(), FieldError::List(vec![nested(&["value", "label"])]));
        assert_eq!(
            error_text(&errors, "framework", "id", "name"),
            "Expecting option(s) to have keys: value, label. Received keys: id, name."
        );
    }

    #[test]
    fn message_text_ignores_structured_errors() {
        let mut errors = FieldErrors::new();
        errors.insert("a".into(), FieldError::Nested(nested(&["x"])));
        errors.insert("b".into(), FieldError::message("Must add text."));
        assert_eq!(message_text(&errors, "a"), "");
        assert_eq!(message_text(&errors, "b"), "Must add text.");
    }
}

//! SelectOption - Labeled/Valued Records
//!
//! An option always carries a value string and a label string. The map keys those two
//! strings live under are chosen per field through an [`OptionKeys`] marker type, so
//! `{ "id": "react", "name": "React" }` and `{ "value": "react", "label": "React" }`
//! are both first-class. Any other keys ride along in [`SelectOption::extra`].

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use serde::de::{self, Deserializer};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Names of the value and label keys of an option record
pub trait OptionKeys: 'static {
    const VALUE: &'static str;
    const LABEL: &'static str;

    /// Both key names, value first
    fn expected() -> Vec<String> {
        vec![Self::VALUE.to_string(), Self::LABEL.to_string()]
    }
}

/// `value` / `label`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultKeys;

impl OptionKeys for DefaultKeys {
    const VALUE: &'static str = "value";
    const LABEL: &'static str = "label";
}

/// Declare a marker type naming the value and label keys of an option record.
///
/// ```ignore
/// option_keys!(pub FrameworkKeys, value = "id", label = "name");
/// let opt: SelectOption<FrameworkKeys> = SelectOption::new("react", "React");
/// ```
#[macro_export]
macro_rules! option_keys {
    ($(#[$meta:meta])* $vis:vis $name:ident, value = $value:literal, label = $label:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
        $vis struct $name;

        impl $crate::domain::option::OptionKeys for $name {
            const VALUE: &'static str = $value;
            const LABEL: &'static str = $label;
        }
    };
}

/// A selectable option
pub struct SelectOption<K: OptionKeys = DefaultKeys> {
    pub value: String,
    pub label: String,
    /// Passthrough keys other than the value/label keys
    pub extra: Map<String, Value>,
    _keys: PhantomData<fn() -> K>,
}

impl<K: OptionKeys> SelectOption<K> {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            extra: Map::new(),
            _keys: PhantomData,
        }
    }

    /// An option whose value and label are the same text
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        Self::new(text.clone(), text)
    }

    /// Attach a passthrough key
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        if key != K::VALUE && key != K::LABEL {
            self.extra.insert(key, value.into());
        }
        self
    }

    /// Case-insensitive substring match on the label
    pub fn label_contains(&self, query: &str) -> bool {
        self.label.to_lowercase().contains(&query.to_lowercase())
    }

    /// Case-insensitive equality on the label
    pub fn label_eq(&self, text: &str) -> bool {
        self.label.to_lowercase() == text.to_lowercase()
    }

    /// Build from a JSON object keyed by `K`
    pub fn from_map(mut map: Map<String, Value>) -> Result<Self> {
        let received: Vec<String> = map.keys().cloned().collect();
        let value = take_string(&mut map, K::VALUE);
        let label = take_string(&mut map, K::LABEL);

        match (value, label) {
            (Some(value), Some(label)) => Ok(Self {
                value,
                label,
                extra: map,
                _keys: PhantomData,
            }),
            _ => Err(Error::OptionShape {
                expected: K::expected(),
                received,
            }),
        }
    }

    /// Build from any JSON value; only objects are accepted
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Self::from_map(map),
            other => Err(Error::Invalid {
                message: format!("expected an option object, got {other}"),
            }),
        }
    }

    /// Convert to a JSON object keyed by `K`
    pub fn to_value(&self) -> Value {
        let mut map = Map::with_capacity(self.extra.len() + 2);
        map.insert(K::VALUE.to_string(), Value::String(self.value.clone()));
        map.insert(K::LABEL.to_string(), Value::String(self.label.clone()));
        for (key, value) in &self.extra {
            map.insert(key.clone(), value.clone());
        }
        Value::Object(map)
    }
}

fn take_string(map: &mut Map<String, Value>, key: &str) -> Option<String> {
    match map.remove(key)? {
        Value::String(s) => Some(s),
        other => {
            map.insert(key.to_string(), other);
            None
        }
    }
}

impl<K: OptionKeys> Clone for SelectOption<K> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            label: self.label.clone(),
            extra: self.extra.clone(),
            _keys: PhantomData,
        }
    }
}

impl<K: OptionKeys> fmt::Debug for SelectOption<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectOption")
            .field(K::VALUE, &self.value)
            .field(K::LABEL, &self.label)
            .field("extra", &self.extra)
            .finish()
    }
}

// Options are identified by their value alone.
impl<K: OptionKeys> PartialEq for SelectOption<K> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<K: OptionKeys> Eq for SelectOption<K> {}

impl<K: OptionKeys> Hash for SelectOption<K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<K: OptionKeys> Serialize for SelectOption<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.extra.len() + 2))?;
        map.serialize_entry(K::VALUE, &self.value)?;
        map.serialize_entry(K::LABEL, &self.label)?;
        for (key, value) in &self.extra {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de, K: OptionKeys> Deserialize<'de> for SelectOption<K> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let map = Map::<String, Value>::deserialize(deserializer)?;
        Self::from_map(map).map_err(de::Error::custom)
    }
}

/// Options whose label case-insensitively contains `query`, in input order
pub fn filter_options<'a, K: OptionKeys>(
    options: impl IntoIterator<Item = &'a SelectOption<K>>,
    query: &str,
) -> Vec<&'a SelectOption<K>> {
    let query = query.to_lowercase();
    options
        .into_iter()
        .filter(|option| option.label.to_lowercase().contains(&query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    crate::option_keys!(FrameworkKeys, value = "id", label = "name");

    fn frameworks() -> Vec<SelectOption<FrameworkKeys>> {
        vec![
            SelectOption::new("react", "React"),
            SelectOption::new("vue", "Vue"),
            SelectOption::new("angular", "Angular"),
            SelectOption::new("preact", "Preact"),
        ]
    }

    #[test]
    fn serializes_with_custom_keys_and_passthrough() {
        let option: SelectOption<FrameworkKeys> =
            SelectOption::new("react", "React").with_extra("val2", "1");
        let value = serde_json::to_value(&option).expect("serialize");
        assert_eq!(value, json!({ "id": "react", "name": "React", "val2": "1" }));
        assert_eq!(option.to_value(), value);
    }

    #[test]
    fn deserializes_custom_keys() {
        let option: SelectOption<FrameworkKeys> =
            serde_json::from_value(json!({ "id": "vue", "name": "Vue", "val2": "2" }))
                .expect("deserialize");
        assert_eq!(option.value, "vue");
        assert_eq!(option.label, "Vue");
        assert_eq!(option.extra.get("val2"), Some(&json!("2")));
    }

    #[test]
    fn missing_keys_report_expected_and_received() {
        let err = SelectOption::<FrameworkKeys>::from_value(json!({ "value": "x", "label": "X" }))
            .expect_err("shape mismatch");
        match err {
            Error::OptionShape { expected, received } => {
                assert_eq!(expected, vec!["id", "name"]);
                assert_eq!(received, vec!["label", "value"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn non_string_value_is_a_shape_error() {
        let err = SelectOption::<DefaultKeys>::from_value(json!({ "value": 1, "label": "One" }));
        assert!(matches!(err, Err(Error::OptionShape { .. })));
    }

    #[test]
    fn equality_is_by_value() {
        let a: SelectOption = SelectOption::new("a", "First");
        let b: SelectOption = SelectOption::new("a", "Renamed");
        assert_eq!(a, b);
    }

    #[test]
    fn extra_cannot_shadow_required_keys() {
        let option: SelectOption = SelectOption::new("a", "A").with_extra("label", "B");
        assert!(option.extra.is_empty());
        assert_eq!(option.label, "A");
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        let options = frameworks();
        let labels: Vec<_> = filter_options(&options, "REact")
            .into_iter()
            .map(|o| o.label.as_str())
            .collect();
        assert_eq!(labels, vec!["React", "Preact"]);
    }

    #[test]
    fn filter_with_empty_query_keeps_everything() {
        let options = frameworks();
        assert_eq!(filter_options(&options, "").len(), options.len());
    }

    #[test]
    fn filter_returns_exactly_the_matching_options() {
        let options = frameworks();
        for query in ["a", "u", "ng", "x", "PRE"] {
            let filtered = filter_options(&options, query);
            let expected: Vec<_> = options
                .iter()
                .filter(|o| o.label.to_lowercase().contains(&query.to_lowercase()))
                .collect();
            assert_eq!(filtered, expected, "query {query:?}");
        }
    }
}

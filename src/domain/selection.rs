//! Selection - Single or Multi Option Selection

use std::fmt;

use serde_json::Value;

use crate::domain::option::{DefaultKeys, OptionKeys, SelectOption};
use crate::error::{Error, Result};

/// Current selection of a select or radio field
pub enum Selection<K: OptionKeys = DefaultKeys> {
    /// Single-select: one option or nothing
    Single(Option<SelectOption<K>>),
    /// Multi-select: options in the order they were selected
    Multi(Vec<SelectOption<K>>),
}

impl<K: OptionKeys> Selection<K> {
    /// Empty selection of the given arity
    pub fn empty(multi: bool) -> Self {
        if multi {
            Selection::Multi(Vec::new())
        } else {
            Selection::Single(None)
        }
    }

    pub fn is_multi(&self) -> bool {
        matches!(self, Selection::Multi(_))
    }

    /// Selected options as a slice
    pub fn options(&self) -> &[SelectOption<K>] {
        match self {
            Selection::Single(option) => option.as_slice(),
            Selection::Multi(options) => options,
        }
    }

    pub fn len(&self) -> usize {
        self.options().len()
    }

    pub fn is_empty(&self) -> bool {
        self.options().is_empty()
    }

    /// Whether an option with this value is selected
    pub fn contains_value(&self, value: &str) -> bool {
        self.options().iter().any(|o| o.value == value)
    }

    pub fn labels(&self) -> Vec<&str> {
        self.options().iter().map(|o| o.label.as_str()).collect()
    }

    /// Selection with `option` added: replaces for single, appends for multi
    pub fn with(&self, option: SelectOption<K>) -> Self {
        match self {
            Selection::Single(_) => Selection::Single(Some(option)),
            Selection::Multi(options) => {
                let mut options = options.clone();
                options.push(option);
                Selection::Multi(options)
            }
        }
    }

    /// Selection with the option at `index` removed
    pub fn without_index(&self, index: usize) -> Self {
        match self {
            Selection::Single(_) => Selection::Single(None),
            Selection::Multi(options) => {
                let mut options = options.clone();
                if index < options.len() {
                    options.remove(index);
                }
                Selection::Multi(options)
            }
        }
    }

    /// Selection with every option carrying `value` removed
    pub fn without_value(&self, value: &str) -> Self {
        match self {
            Selection::Single(Some(option)) if option.value == value => Selection::Single(None),
            Selection::Single(option) => Selection::Single(option.clone()),
            Selection::Multi(options) => {
                Selection::Multi(options.iter().filter(|o| o.value != value).cloned().collect())
            }
        }
    }

    /// Convert to the form-store representation
    pub fn to_value(&self) -> Value {
        match self {
            Selection::Single(None) => Value::Null,
            Selection::Single(Some(option)) => option.to_value(),
            Selection::Multi(options) => {
                Value::Array(options.iter().map(SelectOption::to_value).collect())
            }
        }
    }

    /// Read a form-store value; arity follows `multi`
    pub fn from_value(value: Option<&Value>, multi: bool) -> Result<Self> {
        let options = match value {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(items)) => items
                .iter()
                .cloned()
                .map(SelectOption::from_value)
                .collect::<Result<Vec<_>>>()?,
            Some(Value::Object(map)) => vec![SelectOption::from_map(map.clone())?],
            Some(other) => {
                return Err(Error::Invalid {
                    message: format!("expected an option or list of options, got {other}"),
                });
            }
        };

        if multi {
            Ok(Selection::Multi(options))
        } else {
            Ok(Selection::Single(options.into_iter().next()))
        }
    }
}

impl<K: OptionKeys> Clone for Selection<K> {
    fn clone(&self) -> Self {
        match self {
            Selection::Single(option) => Selection::Single(option.clone()),
            Selection::Multi(options) => Selection::Multi(options.clone()),
        }
    }
}

impl<K: OptionKeys> fmt::Debug for Selection<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::Single(option) => f.debug_tuple("Single").field(option).finish(),
            Selection::Multi(options) => f.debug_tuple("Multi").field(options).finish(),
        }
    }
}

impl<K: OptionKeys> PartialEq for Selection<K> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Selection::Single(a), Selection::Single(b)) => a == b,
            (Selection::Multi(a), Selection::Multi(b)) => a == b,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn single_round_trips_through_null_and_object() {
        let empty: Selection = Selection::from_value(Some(&Value::Null), false).expect("null");
        assert_eq!(empty, Selection::Single(None));
        assert_eq!(empty.to_value(), Value::Null);

        let one: Selection =
            Selection::from_value(Some(&json!({ "value": "a", "label": "A" })), false)
                .expect("object");
        assert_eq!(one.labels(), vec!["A"]);
    }

    #[test]
    fn multi_preserves_order() {
        let value = json!([
            { "value": "b", "label": "B" },
            { "value": "a", "label": "A" },
        ]);
        let selection: Selection = Selection::from_value(Some(&value), true).expect("array");
        assert_eq!(selection.labels(), vec!["B", "A"]);
        assert_eq!(selection.to_value(), value);
    }

    #[test]
    fn missing_value_reads_as_empty() {
        let selection: Selection = Selection::from_value(None, true).expect("missing");
        assert!(selection.is_empty());
        assert!(selection.is_multi());
    }

    #[test]
    fn scalar_value_is_rejected() {
        let result: Result<Selection> = Selection::from_value(Some(&json!(5)), false);
        assert!(result.is_err());
    }

    #[test]
    fn with_and_without() {
        let selection: Selection = Selection::empty(true)
            .with(SelectOption::new("a", "A"))
            .with(SelectOption::new("b", "B"));
        assert_eq!(selection.without_index(0).labels(), vec!["B"]);
        assert_eq!(selection.without_value("b").labels(), vec!["A"]);

        let single: Selection = Selection::empty(false).with(SelectOption::new("a", "A"));
        assert_eq!(single.with(SelectOption::new("b", "B")).labels(), vec!["B"]);
    }
}

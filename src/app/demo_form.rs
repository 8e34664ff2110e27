//! DemoForm - Values and Validation of the Demo Form

use serde_json::{Value, json};

use crate::domain::field_error::{FieldError, FieldErrors};
use crate::domain::option::SelectOption;
use crate::state::form_state::FormValues;

crate::option_keys!(
    /// Framework records are keyed `id` / `name`
    pub FrameworkKeys, value = "id", label = "name"
);

pub const SELECT_ERROR: &str = "Must add at least one option";
pub const TEXT_ERROR: &str = "Must add text.";
pub const NUMBER_ERROR: &str = "Expected a number";
pub const MASK_ERROR: &str = "Must be exactly 9 characters";

pub fn framework_options() -> Vec<SelectOption<FrameworkKeys>> {
    let names = [
        "React", "Vue", "Angular", "React1", "Vue1", "Angular1", "React2", "Vue2", "Angular2",
        "React3", "Vue3", "Angular3",
    ];
    names
        .iter()
        .enumerate()
        .map(|(ix, name)| {
            SelectOption::new(name.to_lowercase(), *name).with_extra("val2", (ix + 1).to_string())
        })
        .collect()
}

pub fn default_values() -> FormValues {
    let mut values = FormValues::new();
    values.insert(
        "framework".into(),
        json!([
            { "name": "React", "id": "react", "val2": "1" },
            { "name": "Vue", "id": "vue", "val2": "2" },
        ]),
    );
    values.insert("text".into(), json!("default"));
    values.insert("number".into(), json!(123));
    values.insert("maskText".into(), json!("123456789"));
    values.insert("size".into(), json!({ "value": "m", "label": "Medium" }));
    values
}

fn framework_error(value: Option<&Value>) -> Option<FieldError> {
    let Some(Value::Array(items)) = value else {
        return Some(FieldError::message(SELECT_ERROR));
    };
    if items.is_empty() {
        return Some(FieldError::message(SELECT_ERROR));
    }

    // Every item needs string `name` and `id` keys
    let bad_shape = items.iter().any(|item| {
        ["name", "id"]
            .iter()
            .any(|key| !item.get(key).is_some_and(Value::is_string))
    });
    if bad_shape {
        let item = ["name", "id"]
            .into_iter()
            .map(|key| (key.to_string(), FieldError::message(SELECT_ERROR)))
            .collect();
        return Some(FieldError::List(vec![item]));
    }
    None
}

/// Validation rules of the demo form
pub fn resolve(values: &FormValues) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if let Some(error) = framework_error(values.get("framework")) {
        errors.insert("framework".into(), error);
    }

    let text_ok = values
        .get("text")
        .and_then(Value::as_str)
        .is_some_and(|text| !text.is_empty());
    if !text_ok {
        errors.insert("text".into(), FieldError::message(TEXT_ERROR));
    }

    if !values.get("number").is_some_and(Value::is_number) {
        errors.insert("number".into(), FieldError::message(NUMBER_ERROR));
    }

    let mask_ok = values
        .get("maskText")
        .and_then(Value::as_str)
        .is_some_and(|text| text.chars().count() == 9);
    if !mask_ok {
        errors.insert("maskText".into(), FieldError::message(MASK_ERROR));
    }

    errors
}

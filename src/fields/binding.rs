//! Binding - Writes From Edit Views Into the Form Store

use gpui::{App, Entity};
use serde_json::Value;

use crate::config::FieldDefaults;
use crate::domain::field_error::FieldErrors;
use crate::state::form_state::FormState;

/// Change callback shared by the edit view and the field config
pub type ChangeHandler<T> = std::rc::Rc<dyn Fn(&T, &mut App) + 'static>;

/// Blur callback
pub type BlurHandler = std::rc::Rc<dyn Fn(&mut App) + 'static>;

/// Store `value` under `name` and notify observers of the form
pub fn commit(form: &Entity<FormState>, name: &str, value: Value, cx: &mut App) {
    form.update(cx, |form, cx| {
        form.set_value(name, value);
        cx.notify();
    });
}

/// Mark `name` touched and notify observers of the form
pub fn blur(form: &Entity<FormState>, name: &str, cx: &mut App) {
    form.update(cx, |form, cx| {
        form.blur(name);
        cx.notify();
    });
}

/// Installed defaults, or the built-in ones when none were installed
pub fn field_defaults(cx: &App) -> FieldDefaults {
    cx.try_global::<FieldDefaults>().cloned().unwrap_or_default()
}

/// Read-mode text for a field without a value
pub fn empty_message(own: Option<&str>, fallback: impl FnOnce() -> String) -> String {
    own.map(str::to_string).unwrap_or_else(fallback)
}

pub fn has_error(errors: &FieldErrors, name: &str) -> bool {
    errors.contains_key(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_message_wins_over_fallback() {
        assert_eq!(empty_message(Some("Not provided"), || "None".into()), "Not provided");
        assert_eq!(empty_message(None, || "None".into()), "None");
    }
}

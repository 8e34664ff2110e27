//! NumberInputState - Numeric Text Entry

use serde_json::{Number, Value};

use crate::state::text_state::TextInputState;

/// Parse a number; empty or non-numeric text has no value
pub fn parse_number(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    text.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Format a number for display; `None` formats as an empty string
pub fn format_number(value: Option<f64>) -> String {
    value.map(|n| n.to_string()).unwrap_or_default()
}

/// Form-store representation: a JSON number, or null when there is no value
pub fn number_to_value(value: Option<f64>) -> Value {
    value
        .and_then(Number::from_f64)
        .map(Value::Number)
        .unwrap_or(Value::Null)
}

pub fn number_from_value(value: Option<&Value>) -> Option<f64> {
    value.and_then(Value::as_f64)
}

fn is_number_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E')
}

/// Text buffer of a number input
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NumberInputState {
    text: TextInputState,
}

impl NumberInputState {
    pub fn new(value: Option<f64>) -> Self {
        Self {
            text: TextInputState::new(format_number(value)),
        }
    }

    pub fn text(&self) -> &TextInputState {
        &self.text
    }

    /// Parsed value of the buffer
    pub fn value(&self) -> Option<f64> {
        parse_number(self.text.value())
    }

    /// Replace the buffer unless it already parses to `value`
    pub fn sync(&mut self, value: Option<f64>) {
        if self.value() != value {
            self.text.set_value(format_number(value));
        }
    }

    /// Type text; only characters that can form a number are kept
    pub fn insert_str(&mut self, text: &str) -> bool {
        let filtered: String = text.chars().filter(|&c| is_number_char(c)).collect();
        self.text.insert_str(&filtered)
    }

    pub fn backspace(&mut self) -> bool {
        self.text.backspace()
    }

    pub fn delete(&mut self) -> bool {
        self.text.delete()
    }

    pub fn move_left(&mut self) {
        self.text.move_left();
    }

    pub fn move_right(&mut self) {
        self.text.move_right();
    }

    pub fn home(&mut self) {
        self.text.home();
    }

    pub fn end(&mut self) {
        self.text.end();
    }

    /// Step by `delta`, treating an empty value as zero
    pub fn step(&mut self, delta: f64) {
        let next = self.value().unwrap_or(0.0) + delta;
        self.text.set_value(format_number(Some(next)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_text_has_no_value() {
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("   "), None);
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("12.5"), Some(12.5));
    }

    #[test]
    fn zero_formats_as_zero() {
        assert_eq!(format_number(Some(0.0)), "0");
        assert_eq!(format_number(Some(123.0)), "123");
        assert_eq!(format_number(None), "");
    }

    #[test]
    fn value_conversion() {
        assert_eq!(number_to_value(Some(123.0)), json!(123.0));
        assert_eq!(number_to_value(None), Value::Null);
        assert_eq!(number_from_value(Some(&json!(42))), Some(42.0));
        assert_eq!(number_from_value(Some(&Value::Null)), None);
    }

    #[test]
    fn typing_filters_non_numeric_chars() {
        let mut state = NumberInputState::new(None);
        assert!(state.insert_str("1a2"));
        assert_eq!(state.text().value(), "12");
        assert_eq!(state.value(), Some(12.0));
    }

    #[test]
    fn partial_input_has_no_value_until_complete() {
        let mut state = NumberInputState::new(None);
        state.insert_str("-");
        assert_eq!(state.value(), None);
        state.insert_str("4");
        assert_eq!(state.value(), Some(-4.0));
    }

    #[test]
    fn sync_keeps_equivalent_text() {
        let mut state = NumberInputState::new(None);
        state.insert_str("1.50");
        state.sync(Some(1.5));
        assert_eq!(state.text().value(), "1.50");
        state.sync(Some(2.0));
        assert_eq!(state.text().value(), "2");
    }

    #[test]
    fn step_from_empty() {
        let mut state = NumberInputState::new(None);
        state.step(1.0);
        assert_eq!(state.value(), Some(1.0));
        state.step(-3.0);
        assert_eq!(state.text().value(), "-2");
    }
}

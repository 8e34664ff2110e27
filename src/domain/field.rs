//! Field - Shared Field Configuration

use serde::{Deserialize, Serialize};

/// Read/edit mode of a field
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldMode {
    /// Read-only formatted display
    Read,
    /// Interactive control bound to the form store
    #[default]
    Edit,
}

impl FieldMode {
    pub fn toggled(self) -> Self {
        match self {
            FieldMode::Read => FieldMode::Edit,
            FieldMode::Edit => FieldMode::Read,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FieldMode::Read => "read",
            FieldMode::Edit => "edit",
        }
    }
}

/// Control size
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldSize {
    #[serde(rename = "2xs")]
    TwoXs,
    #[serde(rename = "xs")]
    Xs,
    #[serde(rename = "sm")]
    Sm,
    #[default]
    #[serde(rename = "md")]
    Md,
    #[serde(rename = "lg")]
    Lg,
    #[serde(rename = "xl")]
    Xl,
    #[serde(rename = "2xl")]
    TwoXl,
}

/// Tooltip attached to a field label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tooltip {
    pub content: String,
    /// Glyph shown instead of the default info icon
    pub icon: Option<String>,
}

impl Tooltip {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            icon: None,
        }
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

/// Configuration every field shares
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMeta {
    /// Key of the field in the form store
    pub name: String,
    pub label: Option<String>,
    pub tooltip: Option<Tooltip>,
    pub helper_text: Option<String>,
    pub warning_text: Option<String>,
    pub placeholder: Option<String>,
    pub required: bool,
    pub disabled: bool,
    pub read_only: bool,
    pub size: FieldSize,
    /// Shown in read mode when the field has no value
    pub no_value_message: Option<String>,
}

impl FieldMeta {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn tooltip(mut self, tooltip: Tooltip) -> Self {
        self.tooltip = Some(tooltip);
        self
    }

    pub fn helper_text(mut self, text: impl Into<String>) -> Self {
        self.helper_text = Some(text.into());
        self
    }

    pub fn warning_text(mut self, text: impl Into<String>) -> Self {
        self.warning_text = Some(text.into());
        self
    }

    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = Some(text.into());
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    pub fn size(mut self, size: FieldSize) -> Self {
        self.size = size;
        self
    }

    pub fn no_value_message(mut self, message: impl Into<String>) -> Self {
        self.no_value_message = Some(message.into());
        self
    }

    /// Whether the control accepts input
    pub fn is_interactive(&self) -> bool {
        !self.disabled && !self.read_only
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_defaults_to_edit_and_toggles() {
        assert_eq!(FieldMode::default(), FieldMode::Edit);
        assert_eq!(FieldMode::Edit.toggled(), FieldMode::Read);
        assert_eq!(FieldMode::Read.toggled(), FieldMode::Edit);
    }

    #[test]
    fn size_uses_short_names() {
        let size: FieldSize = serde_json::from_str("\"2xl\"").expect("size");
        assert_eq!(size, FieldSize::TwoXl);
        assert_eq!(serde_json::to_string(&FieldSize::Sm).expect("size"), "\"sm\"");
    }

    #[test]
    fn read_only_field_is_not_interactive() {
        let meta = FieldMeta::new("email").read_only(true);
        assert!(!meta.is_interactive());
        assert!(FieldMeta::new("email").is_interactive());
    }
}

//! FieldFrame - Label, Help and Error Text Around a Control

use gpui::{
    AnyElement, App, IntoElement, ParentElement, RenderOnce, SharedString, Styled, Window, div,
    prelude::*, px,
};

use crate::components::tooltip::LabelWithTooltip;
use crate::domain::field::{FieldMeta, FieldMode};
use crate::theme::colors::FormColors;
use crate::theme::typography::Typography;

/// Wraps a field control with its label, tooltip, helper, warning and error text.
///
/// Helper and warning text only show in edit mode, and the error replaces both.
#[derive(IntoElement)]
pub struct FieldFrame {
    meta: FieldMeta,
    mode: FieldMode,
    error: SharedString,
    children: Vec<AnyElement>,
}

impl FieldFrame {
    pub fn new(meta: FieldMeta) -> Self {
        Self {
            meta,
            mode: FieldMode::Edit,
            error: SharedString::default(),
            children: Vec::new(),
        }
    }

    pub fn mode(mut self, mode: FieldMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn error(mut self, error: impl Into<SharedString>) -> Self {
        self.error = error.into();
        self
    }
}

impl ParentElement for FieldFrame {
    fn extend(&mut self, elements: impl IntoIterator<Item = AnyElement>) {
        self.children.extend(elements);
    }
}

impl RenderOnce for FieldFrame {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let meta = self.meta;
        let editing = self.mode == FieldMode::Edit;
        let label_size = Typography::label_text(meta.size);

        let footer: Option<(SharedString, gpui::Rgba)> = if !editing {
            None
        } else if !self.error.is_empty() {
            Some((self.error, FormColors::danger()))
        } else if let Some(warning) = meta.warning_text.clone() {
            Some((warning.into(), FormColors::warning()))
        } else {
            meta.helper_text
                .clone()
                .map(|helper| (helper.into(), FormColors::text_secondary()))
        };

        div()
            .flex()
            .flex_col()
            .gap_1()
            .w_full()
            .when_some(meta.label.clone(), |this, label| {
                this.child(
                    LabelWithTooltip::new(SharedString::from(format!("{}-tooltip", meta.name)), label)
                        .required(meta.required && editing)
                        .tooltip(meta.tooltip.clone())
                        .text_size(label_size),
                )
            })
            .children(self.children)
            .when_some(footer, |this, (text, color)| {
                this.child(
                    div()
                        .text_size(px(Typography::TEXT_XS))
                        .text_color(color)
                        .child(text),
                )
            })
    }
}

//! Tooltip - Field Label With Hover Help

use gpui::{
    AnyView, App, Context, ElementId, IntoElement, ParentElement, Render, RenderOnce, SharedString,
    Styled, Window, div, prelude::*, px,
};

use crate::domain::field::Tooltip;
use crate::theme::colors::FormColors;

const DEFAULT_ICON: &str = "ⓘ";

/// Floating tooltip body
pub struct TooltipView {
    text: SharedString,
}

impl TooltipView {
    pub fn build(text: impl Into<SharedString>, cx: &mut App) -> AnyView {
        cx.new(|_| Self { text: text.into() }).into()
    }
}

impl Render for TooltipView {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .px_2()
            .py_1()
            .max_w(px(280.0))
            .rounded_md()
            .bg(FormColors::tooltip_bg())
            .text_color(FormColors::text_light())
            .text_xs()
            .child(self.text.clone())
    }
}

/// Field label with required marker and optional tooltip icon
#[derive(IntoElement)]
pub struct LabelWithTooltip {
    id: ElementId,
    label: SharedString,
    required: bool,
    tooltip: Option<Tooltip>,
    text_size: f32,
}

impl LabelWithTooltip {
    pub fn new(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            required: false,
            tooltip: None,
            text_size: 14.0,
        }
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn tooltip(mut self, tooltip: Option<Tooltip>) -> Self {
        self.tooltip = tooltip;
        self
    }

    pub fn text_size(mut self, size: f32) -> Self {
        self.text_size = size;
        self
    }
}

impl RenderOnce for LabelWithTooltip {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        div()
            .flex()
            .items_center()
            .gap_1()
            .text_size(px(self.text_size))
            .text_color(FormColors::text_primary())
            .child(self.label)
            .when(self.required, |this| {
                this.child(div().text_color(FormColors::danger()).child("*"))
            })
            .when_some(self.tooltip, |this, tooltip| {
                let content = SharedString::from(tooltip.content);
                let icon = tooltip.icon.unwrap_or_else(|| DEFAULT_ICON.to_string());
                this.child(
                    div()
                        .id(self.id)
                        .cursor_pointer()
                        .text_color(FormColors::text_muted())
                        .child(icon)
                        .tooltip(move |_window, cx| TooltipView::build(content.clone(), cx)),
                )
            })
    }
}

//! RadioButton Component

use gpui::{
    App, ElementId, InteractiveElement, IntoElement, ParentElement, RenderOnce, SharedString,
    StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};

use crate::theme::colors::FormColors;

/// A radio button with label
#[derive(IntoElement)]
pub struct RadioButton {
    id: ElementId,
    checked: bool,
    focused: bool,
    label: SharedString,
    disabled: bool,
    on_click: Option<Box<dyn Fn(&mut Window, &mut App) + 'static>>,
}

impl RadioButton {
    pub fn new(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            checked: false,
            focused: false,
            label: label.into(),
            disabled: false,
            on_click: None,
        }
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Keyboard focus ring
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn on_click(mut self, handler: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for RadioButton {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let border_color = if self.checked || self.focused {
            FormColors::accent()
        } else {
            FormColors::input_border()
        };

        let mut radio = div()
            .id(self.id)
            .flex()
            .items_center()
            .gap_2()
            .child(
                div()
                    .size(px(16.0))
                    .rounded_full()
                    .border_1()
                    .when(self.focused, |this| this.border_2())
                    .border_color(border_color)
                    .bg(FormColors::input_bg())
                    .flex()
                    .items_center()
                    .justify_center()
                    .when(self.checked, |this| {
                        this.child(div().size(px(8.0)).rounded_full().bg(FormColors::accent()))
                    }),
            )
            .child(
                div()
                    .text_sm()
                    .text_color(FormColors::text_primary())
                    .child(self.label),
            );

        if self.disabled {
            radio = radio.opacity(0.5);
        } else if let Some(handler) = self.on_click {
            radio = radio
                .cursor_pointer()
                .on_click(move |_event, window, cx| handler(window, cx));
        }

        radio
    }
}

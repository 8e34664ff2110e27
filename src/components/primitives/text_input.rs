//! InputBox Component
//!
//! Single-line box that renders text around a caret. Editing happens in the owning view;
//! this only draws the current state.

use gpui::{
    AnyElement, App, ElementId, IntoElement, ParentElement, RenderOnce, SharedString, Styled,
    Window, div, prelude::*, px,
};

use crate::domain::field::FieldSize;
use crate::theme::colors::FormColors;
use crate::theme::typography::Typography;

/// Styled text box with caret, placeholder and slots before/after the text
#[derive(IntoElement)]
pub struct InputBox {
    id: ElementId,
    before_cursor: SharedString,
    after_cursor: SharedString,
    placeholder: SharedString,
    focused: bool,
    disabled: bool,
    invalid: bool,
    size: FieldSize,
    prefix: Vec<AnyElement>,
    suffix: Vec<AnyElement>,
}

impl InputBox {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            before_cursor: SharedString::default(),
            after_cursor: SharedString::default(),
            placeholder: SharedString::default(),
            focused: false,
            disabled: false,
            invalid: false,
            size: FieldSize::default(),
            prefix: Vec::new(),
            suffix: Vec::new(),
        }
    }

    /// Text split at the caret
    pub fn text(mut self, before: impl Into<SharedString>, after: impl Into<SharedString>) -> Self {
        self.before_cursor = before.into();
        self.after_cursor = after.into();
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<SharedString>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn invalid(mut self, invalid: bool) -> Self {
        self.invalid = invalid;
        self
    }

    pub fn size(mut self, size: FieldSize) -> Self {
        self.size = size;
        self
    }

    /// Elements drawn before the text, such as chips
    pub fn prefix(mut self, element: impl IntoElement) -> Self {
        self.prefix.push(element.into_any_element());
        self
    }

    /// Elements drawn after the text, such as a clear button
    pub fn suffix(mut self, element: impl IntoElement) -> Self {
        self.suffix.push(element.into_any_element());
        self
    }
}

fn caret(height: f32) -> impl IntoElement {
    div()
        .w(px(1.0))
        .h(px(height))
        .bg(FormColors::border_focus())
}

impl RenderOnce for InputBox {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let border_color = if self.invalid {
            FormColors::border_error()
        } else if self.focused {
            FormColors::border_focus()
        } else {
            FormColors::input_border()
        };
        let bg = if self.disabled {
            FormColors::input_disabled_bg()
        } else {
            FormColors::input_bg()
        };

        let text_size = Typography::field_text(self.size);
        let empty = self.before_cursor.is_empty() && self.after_cursor.is_empty();
        let show_caret = self.focused && !self.disabled;

        let text = if empty {
            div()
                .flex()
                .items_center()
                .when(show_caret, |this| this.child(caret(text_size + 2.0)))
                .child(
                    div()
                        .text_color(FormColors::input_placeholder())
                        .child(self.placeholder),
                )
        } else {
            div()
                .flex()
                .items_center()
                .text_color(FormColors::text_primary())
                .child(self.before_cursor)
                .when(show_caret, |this| this.child(caret(text_size + 2.0)))
                .child(self.after_cursor)
        };

        div()
            .id(self.id)
            .flex()
            .flex_wrap()
            .items_center()
            .gap_1()
            .px_3()
            .min_h(px(Typography::field_height(self.size)))
            .min_w(px(200.0))
            .bg(bg)
            .border_1()
            .border_color(border_color)
            .rounded_md()
            .text_size(px(text_size))
            .when(self.disabled, |this| this.opacity(0.5))
            .when(!self.disabled, |this| this.cursor_text())
            .children(self.prefix)
            .child(div().flex_1().child(text))
            .children(self.suffix)
    }
}

//! Button - Form Action Buttons
//!
//! Used for the submit, reset and mode controls around a form. The button height
//! follows the same [`FieldSize`] scale as the inputs so a row of fields and buttons
//! lines up.

use gpui::{
    App, ClickEvent, ElementId, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    Rgba, SharedString, StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};

use crate::domain::field::FieldSize;
use crate::theme::colors::FormColors;
use crate::theme::typography::Typography;

type ClickHandler = Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Submits the form
    #[default]
    Primary,
    Secondary,
    /// No background until hovered
    Ghost,
}

/// Background, text and hover background
struct ButtonPalette {
    bg: Option<Rgba>,
    text: Rgba,
    hover: Rgba,
}

impl ButtonVariant {
    fn palette(self) -> ButtonPalette {
        match self {
            ButtonVariant::Primary => ButtonPalette {
                bg: Some(FormColors::button_primary_bg()),
                text: FormColors::button_primary_text(),
                hover: FormColors::button_primary_hover(),
            },
            ButtonVariant::Secondary => ButtonPalette {
                bg: Some(FormColors::button_secondary_bg()),
                text: FormColors::text_primary(),
                hover: FormColors::button_secondary_hover(),
            },
            ButtonVariant::Ghost => ButtonPalette {
                bg: None,
                text: FormColors::button_ghost_text(),
                hover: FormColors::option_hover(),
            },
        }
    }
}

#[derive(IntoElement)]
pub struct Button {
    id: ElementId,
    label: SharedString,
    variant: ButtonVariant,
    size: FieldSize,
    disabled: bool,
    on_click: Option<ClickHandler>,
}

impl Button {
    pub fn new(
        id: impl Into<ElementId>,
        label: impl Into<SharedString>,
        variant: ButtonVariant,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            variant,
            size: FieldSize::default(),
            disabled: false,
            on_click: None,
        }
    }

    pub fn primary(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label, ButtonVariant::Primary)
    }

    pub fn secondary(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label, ButtonVariant::Secondary)
    }

    pub fn ghost(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label, ButtonVariant::Ghost)
    }

    pub fn size(mut self, size: FieldSize) -> Self {
        self.size = size;
        self
    }

    /// A disabled button ignores clicks
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn on_click(
        mut self,
        handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for Button {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let palette = self.variant.palette();

        let mut button = div()
            .id(self.id)
            .h(px(Typography::field_height(self.size)))
            .px(px(Typography::field_height(self.size) / 2.5))
            .flex()
            .items_center()
            .rounded_md()
            .text_size(px(Typography::field_text(self.size)))
            .text_color(palette.text)
            .child(self.label);

        if let Some(bg) = palette.bg {
            button = button.bg(bg);
        }

        if self.disabled {
            return button.opacity(0.5);
        }

        button = button
            .cursor_pointer()
            .hover(move |style| style.bg(palette.hover));
        if let Some(handler) = self.on_click {
            button = button.on_click(handler);
        }
        button
    }
}

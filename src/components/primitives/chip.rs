//! Chip Component

use gpui::{
    App, ClickEvent, ElementId, IntoElement, ParentElement, RenderOnce, SharedString, Styled,
    Window, div, prelude::*, px,
};

use crate::theme::colors::FormColors;

type ClickHandler = Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>;

/// A selected option shown inside a multi-select
#[derive(IntoElement)]
pub struct Chip {
    index: usize,
    label: SharedString,
    active: bool,
    disabled: bool,
    on_click: Option<ClickHandler>,
    on_remove: Option<ClickHandler>,
}

impl Chip {
    /// Chip at `index` of the selection
    pub fn new(index: usize, label: impl Into<SharedString>) -> Self {
        Self {
            index,
            label: label.into(),
            active: false,
            disabled: false,
            on_click: None,
            on_remove: None,
        }
    }

    /// Keyboard focus is on this chip
    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn on_click(mut self, handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }

    /// Handler for the close control
    pub fn on_remove(mut self, handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static) -> Self {
        self.on_remove = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for Chip {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let bg = if self.active {
            FormColors::chip_active_bg()
        } else {
            FormColors::chip_bg()
        };
        let enabled = !self.disabled;
        let mut label = div()
            .id(ElementId::from(("chip", self.index)))
            .child(self.label);
        if enabled {
            if let Some(handler) = self.on_click {
                label = label.cursor_pointer().on_click(handler);
            }
        }

        let mut close = div()
            .id(ElementId::from(("chip-remove", self.index)))
            .px_1()
            .rounded_sm()
            .text_color(FormColors::text_secondary())
            .child("×");
        if enabled {
            if let Some(handler) = self.on_remove {
                close = close
                    .cursor_pointer()
                    .hover(|s| s.bg(FormColors::option_hover()))
                    .on_click(handler);
            }
        }

        div()
            .flex()
            .items_center()
            .gap_1()
            .pl_2()
            .pr_1()
            .py(px(1.0))
            .rounded_md()
            .bg(bg)
            .text_color(FormColors::text_primary())
            .child(label)
            .when(enabled, |this| this.child(close))
    }
}

/// Read-only label pill
#[derive(IntoElement)]
pub struct Badge {
    label: SharedString,
}

impl Badge {
    pub fn new(label: impl Into<SharedString>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

impl RenderOnce for Badge {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        div()
            .px_2()
            .py(px(1.0))
            .rounded_md()
            .bg(FormColors::badge_bg())
            .text_color(FormColors::badge_text())
            .text_xs()
            .child(self.label)
    }
}

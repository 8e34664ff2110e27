//! OptionList Component
//!
//! The dropdown under a select trigger.

use std::rc::Rc;

use gpui::{
    App, ElementId, IntoElement, ParentElement, RenderOnce, SharedString, Styled, Window, div,
    prelude::*, px,
};

use crate::theme::colors::FormColors;

/// One row of the list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionRow {
    pub label: SharedString,
    /// Synthetic "create" row
    pub create: bool,
    pub highlighted: bool,
}

type SelectHandler = Rc<dyn Fn(usize, &mut Window, &mut App) + 'static>;

/// Scrollable list of option rows
#[derive(IntoElement)]
pub struct OptionList {
    id: ElementId,
    rows: Vec<OptionRow>,
    empty_text: SharedString,
    max_height: f32,
    on_select: Option<SelectHandler>,
}

impl OptionList {
    pub fn new(id: impl Into<ElementId>, rows: Vec<OptionRow>) -> Self {
        Self {
            id: id.into(),
            rows,
            empty_text: "No options".into(),
            max_height: 240.0,
            on_select: None,
        }
    }

    pub fn empty_text(mut self, text: impl Into<SharedString>) -> Self {
        self.empty_text = text.into();
        self
    }

    pub fn max_height(mut self, height: f32) -> Self {
        self.max_height = height;
        self
    }

    /// Called with the row index on click
    pub fn on_select(mut self, handler: impl Fn(usize, &mut Window, &mut App) + 'static) -> Self {
        self.on_select = Some(Rc::new(handler));
        self
    }
}

impl RenderOnce for OptionList {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let on_select = self.on_select;
        let empty = self.rows.is_empty();

        let rows = self.rows.into_iter().enumerate().map(|(ix, row)| {
            let bg = if row.highlighted {
                FormColors::option_highlight()
            } else {
                FormColors::content_bg()
            };
            let mut item = div()
                .id(ElementId::from(("option", ix)))
                .px_3()
                .py_1()
                .bg(bg)
                .cursor_pointer()
                .hover(|s| s.bg(FormColors::option_hover()))
                .when(row.create, |this| this.text_color(FormColors::accent()))
                .child(row.label);
            if let Some(handler) = on_select.clone() {
                item = item.on_click(move |_event, window, cx| handler(ix, window, cx));
            }
            item
        });

        div()
            .id(self.id)
            .flex()
            .flex_col()
            .py_1()
            .min_w(px(200.0))
            .max_h(px(self.max_height))
            .overflow_y_scroll()
            .bg(FormColors::content_bg())
            .border_1()
            .border_color(FormColors::border())
            .rounded_md()
            .shadow_md()
            .text_sm()
            .text_color(FormColors::text_primary())
            .when(empty, |this| {
                this.child(
                    div()
                        .px_3()
                        .py_1()
                        .text_color(FormColors::text_muted())
                        .child(self.empty_text),
                )
            })
            .children(rows)
    }
}

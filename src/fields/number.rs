//! NumberField - Numeric Entry With Arrow-Key Stepping

use std::rc::Rc;

use gpui::{
    App, AppContext, Context, Entity, FocusHandle, Focusable, IntoElement, KeyDownEvent,
    ParentElement, Render, RenderOnce, SharedString, Styled, Subscription, Window, div,
    prelude::*,
};

use crate::components::primitives::InputBox;
use crate::config::FieldDefaults;
use crate::domain::field::FieldMeta;
use crate::fields::binding::{self, BlurHandler, ChangeHandler};
use crate::fields::dispatch::FieldWidget;
use crate::state::form_state::FormState;
use crate::state::number_state::{
    NumberInputState, format_number, number_from_value, number_to_value,
};
use crate::theme::colors::FormColors;

/// Number field configuration
pub struct NumberField {
    pub meta: FieldMeta,
    /// Arrow up/down step
    pub step: f64,
    on_change: Option<ChangeHandler<Option<f64>>>,
    on_blur: Option<BlurHandler>,
}

impl NumberField {
    pub fn new(meta: FieldMeta) -> Self {
        Self {
            meta,
            step: 1.0,
            on_change: None,
            on_blur: None,
        }
    }

    pub fn step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    pub fn on_change(mut self, handler: impl Fn(&Option<f64>, &mut App) + 'static) -> Self {
        self.on_change = Some(Rc::new(handler));
        self
    }

    pub fn on_blur(mut self, handler: impl Fn(&mut App) + 'static) -> Self {
        self.on_blur = Some(Rc::new(handler));
        self
    }

    fn stored(&self, form: &FormState) -> Option<f64> {
        number_from_value(form.value(&self.meta.name))
    }
}

/// Read-mode rendering of a number field
#[derive(IntoElement)]
pub struct NumberReadProps {
    pub value: Option<f64>,
    pub empty_message: String,
}

impl NumberReadProps {
    /// Formatted number; zero is a value, not an empty field
    pub fn display_text(&self) -> String {
        match self.value {
            Some(_) => format_number(self.value),
            None => self.empty_message.clone(),
        }
    }
}

impl RenderOnce for NumberReadProps {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let color = if self.value.is_some() {
            FormColors::text_primary()
        } else {
            FormColors::text_muted()
        };
        div()
            .text_sm()
            .text_color(color)
            .child(SharedString::from(self.display_text()))
    }
}

impl FieldWidget for NumberField {
    type ReadProps = NumberReadProps;
    type EditView = NumberEditView;

    fn meta(&self) -> &FieldMeta {
        &self.meta
    }

    fn read_props(&self, form: &FormState, defaults: &FieldDefaults) -> NumberReadProps {
        NumberReadProps {
            value: self.stored(form),
            empty_message: binding::empty_message(self.meta.no_value_message.as_deref(), || {
                defaults.no_value_message()
            }),
        }
    }

    fn build_edit_view(
        self: Rc<Self>,
        form: Entity<FormState>,
        window: &mut Window,
        cx: &mut App,
    ) -> Entity<NumberEditView> {
        cx.new(|cx| NumberEditView::new(self, form, window, cx))
    }
}

/// Edit view of a number field
pub struct NumberEditView {
    field: Rc<NumberField>,
    form: Entity<FormState>,
    state: NumberInputState,
    focus_handle: FocusHandle,
    _subscriptions: Vec<Subscription>,
}

impl NumberEditView {
    fn new(
        field: Rc<NumberField>,
        form: Entity<FormState>,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let focus_handle = cx.focus_handle();
        let state = NumberInputState::new(field.stored(form.read(cx)));

        let subscriptions = vec![
            cx.observe(&form, |this, form, cx| {
                let stored = this.field.stored(form.read(cx));
                this.state.sync(stored);
                cx.notify();
            }),
            cx.on_blur(&focus_handle, window, |this, _window, cx| {
                // Normalise half-typed input such as "1." once the user leaves
                let value = this.state.value();
                this.state = NumberInputState::new(value);
                binding::blur(&this.form, &this.field.meta.name, cx);
                if let Some(on_blur) = this.field.on_blur.clone() {
                    on_blur(cx);
                }
                cx.notify();
            }),
        ];

        Self {
            field,
            form,
            state,
            focus_handle,
            _subscriptions: subscriptions,
        }
    }

    fn commit(&mut self, cx: &mut Context<Self>) {
        let value = self.state.value();
        binding::commit(&self.form, &self.field.meta.name, number_to_value(value), cx);
        if let Some(on_change) = self.field.on_change.clone() {
            on_change(&value, cx);
        }
    }

    fn on_key_down(&mut self, event: &KeyDownEvent, _window: &mut Window, cx: &mut Context<Self>) {
        if !self.field.meta.is_interactive() {
            return;
        }
        let keystroke = &event.keystroke;
        let changed = match keystroke.key.as_str() {
            "up" => {
                self.state.step(self.field.step);
                true
            }
            "down" => {
                self.state.step(-self.field.step);
                true
            }
            "backspace" => self.state.backspace(),
            "delete" => self.state.delete(),
            "left" => {
                self.state.move_left();
                false
            }
            "right" => {
                self.state.move_right();
                false
            }
            "home" => {
                self.state.home();
                false
            }
            "end" => {
                self.state.end();
                false
            }
            _ if keystroke.modifiers.control || keystroke.modifiers.platform => false,
            _ => match &keystroke.key_char {
                Some(text) => self.state.insert_str(text),
                None => false,
            },
        };
        if changed {
            self.commit(cx);
        }
        cx.notify();
    }
}

impl Focusable for NumberEditView {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for NumberEditView {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let meta = &self.field.meta;
        let focused = self.focus_handle.is_focused(window);
        let invalid = binding::has_error(self.form.read(cx).errors(), &meta.name);
        let (before, after) = self.state.text().split_at_cursor();
        let focus_handle = self.focus_handle.clone();

        div()
            .track_focus(&self.focus_handle)
            .on_key_down(cx.listener(Self::on_key_down))
            .on_mouse_down(gpui::MouseButton::Left, move |_event, window, _cx| {
                window.focus(&focus_handle);
            })
            .child(
                InputBox::new(SharedString::from(format!("number-{}", meta.name)))
                    .text(before.to_string(), after.to_string())
                    .placeholder(meta.placeholder.clone().unwrap_or_default())
                    .focused(focused)
                    .disabled(!meta.is_interactive())
                    .invalid(invalid)
                    .size(meta.size),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn field() -> NumberField {
        NumberField::new(FieldMeta::new("age"))
    }

    #[test]
    fn zero_is_shown_not_treated_as_empty() {
        let mut form = FormState::default();
        form.set_value("age", json!(0));
        let props = field().read_props(&form, &FieldDefaults::default());
        assert_eq!(props.display_text(), "0");
    }

    #[test]
    fn integral_values_have_no_decimal_point() {
        let mut form = FormState::default();
        form.set_value("age", json!(123.0));
        assert_eq!(field().read_props(&form, &FieldDefaults::default()).display_text(), "123");
    }

    #[test]
    fn missing_number_uses_no_value_message() {
        let props = field().read_props(&FormState::default(), &FieldDefaults::default());
        assert_eq!(props.display_text(), "None");
    }
}

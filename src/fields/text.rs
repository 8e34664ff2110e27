//! TextField - Plain Single-Line Text

use std::rc::Rc;

use gpui::{
    App, AppContext, Context, Entity, FocusHandle, Focusable, IntoElement, KeyDownEvent,
    ParentElement, Render, RenderOnce, SharedString, Styled, Subscription, Window, div,
    prelude::*,
};
use serde_json::Value;

use crate::components::primitives::InputBox;
use crate::config::FieldDefaults;
use crate::domain::field::FieldMeta;
use crate::fields::binding::{self, BlurHandler, ChangeHandler};
use crate::fields::dispatch::FieldWidget;
use crate::state::form_state::FormState;
use crate::state::text_state::TextInputState;
use crate::theme::colors::FormColors;

/// Text field configuration
pub struct TextField {
    pub meta: FieldMeta,
    on_change: Option<ChangeHandler<str>>,
    on_blur: Option<BlurHandler>,
}

impl TextField {
    pub fn new(meta: FieldMeta) -> Self {
        Self {
            meta,
            on_change: None,
            on_blur: None,
        }
    }

    pub fn on_change(mut self, handler: impl Fn(&str, &mut App) + 'static) -> Self {
        self.on_change = Some(Rc::new(handler));
        self
    }

    pub fn on_blur(mut self, handler: impl Fn(&mut App) + 'static) -> Self {
        self.on_blur = Some(Rc::new(handler));
        self
    }

    fn stored_text(&self, form: &FormState) -> String {
        match form.value(&self.meta.name) {
            Some(Value::String(text)) => text.clone(),
            Some(Value::Null) | None => String::new(),
            Some(other) => other.to_string(),
        }
    }
}

/// Read-mode rendering of a text field
#[derive(IntoElement)]
pub struct TextReadProps {
    pub value: String,
    pub empty_message: String,
}

impl TextReadProps {
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn display_text(&self) -> &str {
        if self.is_empty() {
            &self.empty_message
        } else {
            &self.value
        }
    }
}

impl RenderOnce for TextReadProps {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let color = if self.is_empty() {
            FormColors::text_muted()
        } else {
            FormColors::text_primary()
        };
        div()
            .text_sm()
            .text_color(color)
            .child(SharedString::from(self.display_text().to_string()))
    }
}

impl FieldWidget for TextField {
    type ReadProps = TextReadProps;
    type EditView = TextEditView;

    fn meta(&self) -> &FieldMeta {
        &self.meta
    }

    fn read_props(&self, form: &FormState, defaults: &FieldDefaults) -> TextReadProps {
        TextReadProps {
            value: self.stored_text(form),
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
    ) -> Entity<TextEditView> {
        cx.new(|cx| TextEditView::new(self, form, window, cx))
    }
}

/// Edit view of a text field
pub struct TextEditView {
    field: Rc<TextField>,
    form: Entity<FormState>,
    state: TextInputState,
    focus_handle: FocusHandle,
    _subscriptions: Vec<Subscription>,
}

impl TextEditView {
    fn new(
        field: Rc<TextField>,
        form: Entity<FormState>,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let focus_handle = cx.focus_handle();
        let state = TextInputState::new(field.stored_text(form.read(cx)));

        let subscriptions = vec![
            cx.observe(&form, |this, form, cx| {
                let stored = this.field.stored_text(form.read(cx));
                if stored != this.state.value() {
                    this.state.set_value(stored);
                }
                cx.notify();
            }),
            cx.on_blur(&focus_handle, window, |this, _window, cx| {
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
        let value = Value::String(self.state.value().to_string());
        binding::commit(&self.form, &self.field.meta.name, value, cx);
        if let Some(on_change) = self.field.on_change.clone() {
            on_change(self.state.value(), cx);
        }
    }

    fn on_key_down(&mut self, event: &KeyDownEvent, _window: &mut Window, cx: &mut Context<Self>) {
        if !self.field.meta.is_interactive() {
            return;
        }
        let keystroke = &event.keystroke;
        let changed = match keystroke.key.as_str() {
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

impl Focusable for TextEditView {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for TextEditView {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let meta = &self.field.meta;
        let focused = self.focus_handle.is_focused(window);
        let invalid = binding::has_error(self.form.read(cx).errors(), &meta.name);
        let (before, after) = self.state.split_at_cursor();
        let focus_handle = self.focus_handle.clone();

        div()
            .track_focus(&self.focus_handle)
            .on_key_down(cx.listener(Self::on_key_down))
            .child(
                InputBox::new(SharedString::from(format!("text-{}", meta.name)))
                    .text(before.to_string(), after.to_string())
                    .placeholder(meta.placeholder.clone().unwrap_or_default())
                    .focused(focused)
                    .disabled(!meta.is_interactive())
                    .invalid(invalid)
                    .size(meta.size),
            )
            .on_mouse_down(gpui::MouseButton::Left, move |_event, window, _cx| {
                window.focus(&focus_handle);
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn field() -> TextField {
        TextField::new(FieldMeta::new("name").label("Name"))
    }

    #[test]
    fn read_mode_shows_value() {
        let mut form = FormState::default();
        form.set_value("name", json!("Ada"));
        let props = field().read_props(&form, &FieldDefaults::default());
        assert_eq!(props.display_text(), "Ada");
    }

    #[test]
    fn read_mode_falls_back_to_configured_message() {
        let form = FormState::default();
        let defaults = FieldDefaults {
            no_value_message: Some("Nothing yet".into()),
            ..Default::default()
        };
        assert_eq!(field().read_props(&form, &defaults).display_text(), "Nothing yet");

        let own = TextField::new(FieldMeta::new("name").no_value_message("Not given"));
        assert_eq!(own.read_props(&form, &defaults).display_text(), "Not given");
    }

    #[test]
    fn read_mode_default_message_is_none() {
        let props = field().read_props(&FormState::default(), &FieldDefaults::default());
        assert_eq!(props.display_text(), "None");
    }
}

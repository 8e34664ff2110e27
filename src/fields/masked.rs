//! MaskedField - Fixed-Pattern Text Such as SSN and Phone Numbers
//!
//! The form stores only the characters typed into slots (`123456789`); the edit and
//! read views both rebuild the display string (`123-45-6789`) from the pattern.

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
use crate::state::mask_state::{MaskPattern, MaskedInputState, PhoneFormat};
use crate::theme::colors::FormColors;

/// Masked field configuration
pub struct MaskedField {
    pub meta: FieldMeta,
    pub pattern: MaskPattern,
    on_change: Option<ChangeHandler<str>>,
    on_blur: Option<BlurHandler>,
}

impl MaskedField {
    pub fn new(meta: FieldMeta, pattern: MaskPattern) -> Self {
        Self {
            meta,
            pattern,
            on_change: None,
            on_blur: None,
        }
    }

    /// `___-__-____`
    pub fn ssn(meta: FieldMeta) -> Self {
        Self::new(meta, MaskPattern::ssn())
    }

    pub fn phone(meta: FieldMeta, format: PhoneFormat, country_code: Option<&str>) -> Self {
        Self::new(meta, MaskPattern::phone(format, country_code))
    }

    /// Called with the stored (unmasked) value
    pub fn on_change(mut self, handler: impl Fn(&str, &mut App) + 'static) -> Self {
        self.on_change = Some(Rc::new(handler));
        self
    }

    pub fn on_blur(mut self, handler: impl Fn(&mut App) + 'static) -> Self {
        self.on_blur = Some(Rc::new(handler));
        self
    }

    fn stored(&self, form: &FormState) -> String {
        match form.value(&self.meta.name) {
            Some(Value::String(text)) => text.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => String::new(),
        }
    }
}

/// Read-mode rendering of a masked field
#[derive(IntoElement)]
pub struct MaskedReadProps {
    pub stored: String,
    pub pattern: MaskPattern,
    pub empty_message: String,
}

impl MaskedReadProps {
    pub fn display_text(&self) -> String {
        if self.stored.is_empty() {
            self.empty_message.clone()
        } else {
            self.pattern.to_display(&self.stored)
        }
    }
}

impl RenderOnce for MaskedReadProps {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let color = if self.stored.is_empty() {
            FormColors::text_muted()
        } else {
            FormColors::text_primary()
        };
        div()
            .text_sm()
            .text_color(color)
            .child(SharedString::from(self.display_text()))
    }
}

impl FieldWidget for MaskedField {
    type ReadProps = MaskedReadProps;
    type EditView = MaskedEditView;

    fn meta(&self) -> &FieldMeta {
        &self.meta
    }

    fn read_props(&self, form: &FormState, defaults: &FieldDefaults) -> MaskedReadProps {
        MaskedReadProps {
            stored: self.stored(form),
            pattern: self.pattern.clone(),
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
    ) -> Entity<MaskedEditView> {
        cx.new(|cx| MaskedEditView::new(self, form, window, cx))
    }
}

/// Edit view of a masked field
pub struct MaskedEditView {
    field: Rc<MaskedField>,
    form: Entity<FormState>,
    state: MaskedInputState,
    focus_handle: FocusHandle,
    _subscriptions: Vec<Subscription>,
}

impl MaskedEditView {
    fn new(
        field: Rc<MaskedField>,
        form: Entity<FormState>,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let focus_handle = cx.focus_handle();
        let state =
            MaskedInputState::new(field.pattern.clone()).with_stored(&field.stored(form.read(cx)));

        let subscriptions = vec![
            cx.observe(&form, |this, form, cx| {
                let stored = this.field.stored(form.read(cx));
                if stored != this.state.stored() {
                    this.state.set_stored(&stored);
                }
                cx.notify();
            }),
            cx.on_focus(&focus_handle, window, |this, _window, cx| {
                this.state.focus();
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
        let stored = self.state.stored().to_string();
        let value = if stored.is_empty() {
            Value::Null
        } else {
            Value::String(stored.clone())
        };
        binding::commit(&self.form, &self.field.meta.name, value, cx);
        if let Some(on_change) = self.field.on_change.clone() {
            on_change(&stored, cx);
        }
    }

    /// Insert text at the cursor the way a native control edits its display string
    fn paste(&mut self, text: &str) -> bool {
        let display: Vec<char> = self.state.display().chars().collect();
        let cursor = self.state.cursor().min(display.len());
        let before: String = display[..cursor].iter().collect();
        let after: String = display[cursor..].iter().collect();
        let raw = format!("{before}{text}{after}");
        self.state.apply_input(&raw, cursor + text.chars().count())
    }

    fn on_key_down(&mut self, event: &KeyDownEvent, _window: &mut Window, cx: &mut Context<Self>) {
        if !self.field.meta.is_interactive() {
            return;
        }
        let keystroke = &event.keystroke;
        let command = keystroke.modifiers.control || keystroke.modifiers.platform;
        let changed = match keystroke.key.as_str() {
            "backspace" => self.state.backspace(),
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
            "v" if command => match cx.read_from_clipboard().and_then(|item| item.text()) {
                Some(text) => self.paste(&text),
                None => false,
            },
            _ if command => false,
            _ => match &keystroke.key_char {
                Some(text) => text
                    .chars()
                    .fold(false, |changed, c| self.state.insert_char(c) || changed),
                None => false,
            },
        };
        if changed {
            self.commit(cx);
        }
        cx.notify();
    }
}

impl Focusable for MaskedEditView {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for MaskedEditView {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let meta = &self.field.meta;
        let focused = self.focus_handle.is_focused(window);
        let invalid = binding::has_error(self.form.read(cx).errors(), &meta.name);
        let focus_handle = self.focus_handle.clone();

        // An untouched mask shows the caller's placeholder, or the pattern itself
        let (before, after) = if self.state.stored().is_empty() && !focused {
            (String::new(), String::new())
        } else {
            let display: Vec<char> = self.state.display().chars().collect();
            let cursor = self.state.cursor().min(display.len());
            (
                display[..cursor].iter().collect(),
                display[cursor..].iter().collect(),
            )
        };
        let placeholder = meta
            .placeholder
            .clone()
            .unwrap_or_else(|| self.field.pattern.placeholder());

        div()
            .track_focus(&self.focus_handle)
            .on_key_down(cx.listener(Self::on_key_down))
            .on_mouse_down(gpui::MouseButton::Left, move |_event, window, _cx| {
                window.focus(&focus_handle);
            })
            .child(
                InputBox::new(SharedString::from(format!("masked-{}", meta.name)))
                    .text(before, after)
                    .placeholder(placeholder)
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

    #[test]
    fn ssn_read_mode_formats_stored_digits() {
        let mut form = FormState::default();
        form.set_value("ssn", json!("123456789"));
        let field = MaskedField::ssn(FieldMeta::new("ssn"));
        let props = field.read_props(&form, &FieldDefaults::default());
        assert_eq!(props.display_text(), "123-45-6789");
    }

    #[test]
    fn phone_read_mode_uses_format() {
        let mut form = FormState::default();
        form.set_value("phone", json!("5551234567"));
        let field = MaskedField::phone(FieldMeta::new("phone"), PhoneFormat::Standard, None);
        let props = field.read_props(&form, &FieldDefaults::default());
        assert_eq!(props.display_text(), "(555) 123 4567");
    }

    #[test]
    fn empty_mask_shows_no_value_message() {
        let field = MaskedField::ssn(FieldMeta::new("ssn").no_value_message("Not on file"));
        let props = field.read_props(&FormState::default(), &FieldDefaults::default());
        assert_eq!(props.display_text(), "Not on file");
    }
}

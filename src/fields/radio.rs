//! RadioField - Single Choice From a Short Option List

use std::rc::Rc;

use gpui::{
    App, AppContext, Context, ElementId, Entity, FocusHandle, Focusable, IntoElement,
    KeyDownEvent, ParentElement, Render, RenderOnce, SharedString, Styled, Subscription, Window,
    div, prelude::*,
};

use crate::components::primitives::RadioButton;
use crate::config::FieldDefaults;
use crate::domain::field::FieldMeta;
use crate::domain::field_error::error_text;
use crate::domain::option::{DefaultKeys, OptionKeys, SelectOption};
use crate::domain::selection::Selection;
use crate::fields::binding::{self, BlurHandler, ChangeHandler};
use crate::fields::dispatch::FieldWidget;
use crate::state::form_state::FormState;
use crate::state::radio_state::RadioState;
use crate::theme::colors::FormColors;

/// Radio group configuration
pub struct RadioField<K: OptionKeys = DefaultKeys> {
    pub meta: FieldMeta,
    pub options: Vec<SelectOption<K>>,
    /// Lay the buttons out in a row instead of a column
    pub inline: bool,
    on_change: Option<ChangeHandler<Option<SelectOption<K>>>>,
    on_blur: Option<BlurHandler>,
}

impl<K: OptionKeys> RadioField<K> {
    pub fn new(meta: FieldMeta, options: Vec<SelectOption<K>>) -> Self {
        Self {
            meta,
            options,
            inline: false,
            on_change: None,
            on_blur: None,
        }
    }

    pub fn inline(mut self, inline: bool) -> Self {
        self.inline = inline;
        self
    }

    /// Called with the new choice; `None` when the current choice was clicked again
    pub fn on_change(
        mut self,
        handler: impl Fn(&Option<SelectOption<K>>, &mut App) + 'static,
    ) -> Self {
        self.on_change = Some(Rc::new(handler));
        self
    }

    pub fn on_blur(mut self, handler: impl Fn(&mut App) + 'static) -> Self {
        self.on_blur = Some(Rc::new(handler));
        self
    }

    fn current(&self, form: &FormState) -> Option<SelectOption<K>> {
        match Selection::<K>::from_value(form.value(&self.meta.name), false) {
            Ok(selection) => selection.options().first().cloned(),
            Err(e) => {
                tracing::debug!(field = %self.meta.name, "Unreadable radio value: {e}");
                None
            }
        }
    }
}

/// Read-mode rendering of a radio group
#[derive(IntoElement)]
pub struct RadioReadProps {
    pub label: Option<String>,
    pub empty_message: String,
}

impl RadioReadProps {
    pub fn display_text(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.empty_message)
    }
}

impl RenderOnce for RadioReadProps {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let color = if self.label.is_some() {
            FormColors::text_primary()
        } else {
            FormColors::text_muted()
        };
        div()
            .text_sm()
            .text_color(color)
            .child(SharedString::from(self.display_text().to_string()))
    }
}

impl<K: OptionKeys> FieldWidget for RadioField<K> {
    type ReadProps = RadioReadProps;
    type EditView = RadioEditView<K>;

    fn meta(&self) -> &FieldMeta {
        &self.meta
    }

    fn read_props(&self, form: &FormState, defaults: &FieldDefaults) -> RadioReadProps {
        RadioReadProps {
            label: self.current(form).map(|option| option.label),
            empty_message: binding::empty_message(self.meta.no_value_message.as_deref(), || {
                defaults.no_selection_message()
            }),
        }
    }

    fn build_edit_view(
        self: Rc<Self>,
        form: Entity<FormState>,
        window: &mut Window,
        cx: &mut App,
    ) -> Entity<RadioEditView<K>> {
        cx.new(|cx| RadioEditView::new(self, form, window, cx))
    }

    fn error_text(&self, form: &FormState) -> String {
        error_text(form.errors(), &self.meta.name, K::VALUE, K::LABEL)
    }
}

/// Edit view of a radio group
pub struct RadioEditView<K: OptionKeys = DefaultKeys> {
    field: Rc<RadioField<K>>,
    form: Entity<FormState>,
    state: RadioState<K>,
    focus_handle: FocusHandle,
    _subscriptions: Vec<Subscription>,
}

impl<K: OptionKeys> RadioEditView<K> {
    fn new(
        field: Rc<RadioField<K>>,
        form: Entity<FormState>,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let focus_handle = cx.focus_handle();
        let state = RadioState::new(field.options.clone());

        let subscriptions = vec![
            cx.observe(&form, |_this, _form, cx| cx.notify()),
            cx.on_blur(&focus_handle, window, |this, _window, cx| {
                this.state.set_focused(None);
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

    fn commit(&mut self, next: Option<SelectOption<K>>, cx: &mut Context<Self>) {
        let value = Selection::Single(next.clone()).to_value();
        binding::commit(&self.form, &self.field.meta.name, value, cx);
        if let Some(on_change) = self.field.on_change.clone() {
            on_change(&next, cx);
        }
    }

    fn choose(&mut self, index: usize, cx: &mut Context<Self>) {
        if !self.field.meta.is_interactive() {
            return;
        }
        self.state.set_focused(Some(index));
        let current = self.field.current(self.form.read(cx));
        let Some(value) = self.state.options().get(index).map(|o| o.value.clone()) else {
            return;
        };
        if let Some(next) = self.state.toggle(&value, current.as_ref()) {
            self.commit(next, cx);
        }
        cx.notify();
    }

    fn on_key_down(&mut self, event: &KeyDownEvent, _window: &mut Window, cx: &mut Context<Self>) {
        if !self.field.meta.is_interactive() {
            return;
        }
        match event.keystroke.key.as_str() {
            "down" | "right" => self.state.focus_next(),
            "up" | "left" => self.state.focus_prev(),
            "space" | "enter" => {
                let current = self.field.current(self.form.read(cx));
                if let Some(next) = self.state.toggle_focused(current.as_ref()) {
                    self.commit(next, cx);
                }
            }
            _ => return,
        }
        cx.notify();
    }
}

impl<K: OptionKeys> Focusable for RadioEditView<K> {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl<K: OptionKeys> Render for RadioEditView<K> {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let focused = self.focus_handle.is_focused(window);
        let disabled = !self.field.meta.is_interactive();
        let current = self.field.current(self.form.read(cx));
        let keyboard_focus = self.state.focused().filter(|_| focused);

        let buttons = self
            .state
            .options()
            .iter()
            .enumerate()
            .map(|(ix, option)| {
                let checked = current.as_ref().is_some_and(|c| c.value == option.value);
                let view = cx.entity().downgrade();
                RadioButton::new(ElementId::from(("radio", ix)), option.label.clone())
                    .checked(checked)
                    .focused(keyboard_focus == Some(ix))
                    .disabled(disabled)
                    .on_click(move |window, cx| {
                        let _ = view.update(cx, |this, cx| {
                            window.focus(&this.focus_handle);
                            this.choose(ix, cx);
                        });
                    })
            })
            .collect::<Vec<_>>();

        div()
            .track_focus(&self.focus_handle)
            .on_key_down(cx.listener(Self::on_key_down))
            .flex()
            .gap_3()
            .when(!self.field.inline, |this| this.flex_col().gap_2())
            .children(buttons)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::field_error::{FieldError, KeyErrors};
    use serde_json::json;

    fn field() -> RadioField {
        RadioField::new(
            FieldMeta::new("size"),
            vec![SelectOption::new("s", "Small"), SelectOption::new("l", "Large")],
        )
    }

    #[test]
    fn read_mode_shows_selected_label() {
        let mut form = FormState::default();
        form.set_value("size", json!({ "value": "l", "label": "Large" }));
        let props = field().read_props(&form, &FieldDefaults::default());
        assert_eq!(props.display_text(), "Large");
    }

    #[test]
    fn read_mode_without_choice_uses_selection_message() {
        let props = field().read_props(&FormState::default(), &FieldDefaults::default());
        assert_eq!(props.display_text(), "None Selected");

        let custom: RadioField = RadioField::new(
            FieldMeta::new("size").no_value_message("No size yet"),
            vec![SelectOption::new("s", "Small")],
        );
        let props = custom.read_props(&FormState::default(), &FieldDefaults::default());
        assert_eq!(props.display_text(), "No size yet");
    }

    #[test]
    fn wrong_option_shape_is_reported() {
        let mut form = FormState::default();
        let mut item = KeyErrors::new();
        item.insert("id".to_string(), FieldError::message("Required"));
        form.set_error("size", FieldError::Nested(item));
        assert_eq!(
            field().error_text(&form),
            "Expecting option(s) to have keys: id. Received keys: value, label."
        );
    }
}

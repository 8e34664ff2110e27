//! SelectField - Single/Multi Select With Search and Ad-Hoc Option Creation
//!
//! The view forwards keys and clicks into [`SelectState`] and commits whatever
//! selection it hands back. Creating an option may call out to the caller, so the
//! callback's future is spawned on the foreground executor and its result is routed back
//! through a weak handle; a view dropped in the meantime simply discards the result.

use std::rc::Rc;

use futures::future::LocalBoxFuture;
use gpui::{
    App, AppContext, ClickEvent, Context, Entity, FocusHandle, Focusable, IntoElement,
    KeyDownEvent, ParentElement, Render, RenderOnce, SharedString, Styled, Subscription, Window,
    div, prelude::*,
};

use crate::components::primitives::{Badge, Chip, InputBox, OptionList, OptionRow};
use crate::config::FieldDefaults;
use crate::domain::field::FieldMeta;
use crate::domain::field_error::error_text;
use crate::domain::option::{DefaultKeys, OptionKeys, SelectOption};
use crate::domain::selection::Selection;
use crate::fields::binding::{self, BlurHandler, ChangeHandler};
use crate::fields::dispatch::FieldWidget;
use crate::i18n;
use crate::state::form_state::FormState;
use crate::state::select_state::{
    Candidate, CreateRequest, SelectAction, SelectConfig, SelectState,
};
use crate::theme::colors::FormColors;

/// Creates an option on the caller's side, e.g. by saving it to a server
pub type CreateOptionFn<K> =
    Rc<dyn Fn(SelectOption<K>) -> LocalBoxFuture<'static, anyhow::Result<SelectOption<K>>>>;

/// Select field configuration
pub struct SelectField<K: OptionKeys = DefaultKeys> {
    pub meta: FieldMeta,
    pub options: Vec<SelectOption<K>>,
    pub multi: bool,
    pub createable: bool,
    /// `None` shows the search input only above the configured option count
    pub searchable: Option<bool>,
    pub clearable: bool,
    on_change: Option<ChangeHandler<Selection<K>>>,
    on_blur: Option<BlurHandler>,
    on_create_option: Option<CreateOptionFn<K>>,
}

impl<K: OptionKeys> SelectField<K> {
    pub fn new(meta: FieldMeta, options: Vec<SelectOption<K>>) -> Self {
        Self {
            meta,
            options,
            multi: false,
            createable: false,
            searchable: None,
            clearable: false,
            on_change: None,
            on_blur: None,
            on_create_option: None,
        }
    }

    pub fn multi(mut self, multi: bool) -> Self {
        self.multi = multi;
        self
    }

    pub fn createable(mut self, createable: bool) -> Self {
        self.createable = createable;
        self
    }

    pub fn searchable(mut self, searchable: bool) -> Self {
        self.searchable = Some(searchable);
        self
    }

    pub fn clearable(mut self, clearable: bool) -> Self {
        self.clearable = clearable;
        self
    }

    /// Read-mode text for an empty selection; same as `FieldMeta::no_value_message`
    pub fn no_selection_message(mut self, message: impl Into<String>) -> Self {
        self.meta.no_value_message = Some(message.into());
        self
    }

    pub fn on_change(mut self, handler: impl Fn(&Selection<K>, &mut App) + 'static) -> Self {
        self.on_change = Some(Rc::new(handler));
        self
    }

    pub fn on_blur(mut self, handler: impl Fn(&mut App) + 'static) -> Self {
        self.on_blur = Some(Rc::new(handler));
        self
    }

    /// Without a callback a created option is the typed text as both value and label
    pub fn on_create_option(
        mut self,
        handler: impl Fn(SelectOption<K>) -> LocalBoxFuture<'static, anyhow::Result<SelectOption<K>>>
        + 'static,
    ) -> Self {
        self.on_create_option = Some(Rc::new(handler));
        self
    }

    pub fn config(&self, searchable_threshold: usize) -> SelectConfig {
        let mut config = SelectConfig::for_options(self.options.len(), searchable_threshold)
            .multi(self.multi)
            .createable(self.createable)
            .disabled(self.meta.disabled)
            .read_only(self.meta.read_only);
        if let Some(searchable) = self.searchable {
            config = config.searchable(searchable);
        }
        config
    }

    pub fn selection(&self, form: &FormState) -> Selection<K> {
        Selection::from_value(form.value(&self.meta.name), self.multi).unwrap_or_else(|e| {
            tracing::debug!(field = %self.meta.name, "Unreadable selection: {e}");
            Selection::empty(self.multi)
        })
    }
}

/// Read-mode rendering of a select field
#[derive(IntoElement)]
pub struct SelectReadProps {
    pub labels: Vec<String>,
    pub multi: bool,
    pub empty_message: String,
}

impl SelectReadProps {
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn display_text(&self) -> String {
        if self.is_empty() {
            self.empty_message.clone()
        } else {
            self.labels.join(", ")
        }
    }
}

impl RenderOnce for SelectReadProps {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        if self.is_empty() {
            return div()
                .text_sm()
                .text_color(FormColors::text_muted())
                .child(self.empty_message);
        }
        if self.multi {
            return div()
                .flex()
                .flex_wrap()
                .gap_1()
                .children(self.labels.into_iter().map(Badge::new));
        }
        div()
            .text_sm()
            .text_color(FormColors::text_primary())
            .child(self.labels.join(", "))
    }
}

impl<K: OptionKeys> FieldWidget for SelectField<K> {
    type ReadProps = SelectReadProps;
    type EditView = SelectEditView<K>;

    fn meta(&self) -> &FieldMeta {
        &self.meta
    }

    fn read_props(&self, form: &FormState, defaults: &FieldDefaults) -> SelectReadProps {
        SelectReadProps {
            labels: self
                .selection(form)
                .labels()
                .into_iter()
                .map(str::to_string)
                .collect(),
            multi: self.multi,
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
    ) -> Entity<SelectEditView<K>> {
        cx.new(|cx| SelectEditView::new(self, form, window, cx))
    }

    fn error_text(&self, form: &FormState) -> String {
        error_text(form.errors(), &self.meta.name, K::VALUE, K::LABEL)
    }
}

/// Edit view of a select field
pub struct SelectEditView<K: OptionKeys = DefaultKeys> {
    field: Rc<SelectField<K>>,
    form: Entity<FormState>,
    state: SelectState<K>,
    focus_handle: FocusHandle,
    _subscriptions: Vec<Subscription>,
}

impl<K: OptionKeys> SelectEditView<K> {
    fn new(
        field: Rc<SelectField<K>>,
        form: Entity<FormState>,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let focus_handle = cx.focus_handle();
        let threshold = binding::field_defaults(cx).searchable_threshold;
        let mut state = SelectState::new(field.options.clone(), field.config(threshold));
        state.sync_form_reset(form.read(cx).reset_count());

        let subscriptions = vec![
            cx.observe(&form, |this, form, cx| {
                let resets = form.read(cx).reset_count();
                this.state.sync_form_reset(resets);
                cx.notify();
            }),
            cx.on_blur(&focus_handle, window, |this, _window, cx| {
                this.state.close();
                let selection = this.selection(cx);
                this.state.focus_chip(None, &selection);
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

    fn selection(&self, cx: &App) -> Selection<K> {
        self.field.selection(self.form.read(cx))
    }

    fn commit(&mut self, selection: Selection<K>, cx: &mut Context<Self>) {
        binding::commit(&self.form, &self.field.meta.name, selection.to_value(), cx);
        if let Some(on_change) = self.field.on_change.clone() {
            on_change(&selection, cx);
        }
    }

    fn apply(&mut self, action: SelectAction<K>, cx: &mut Context<Self>) {
        match action {
            SelectAction::None => {}
            SelectAction::Commit(selection) => self.commit(selection, cx),
            SelectAction::Create(request) => self.spawn_create(request, cx),
        }
    }

    fn spawn_create(&mut self, request: CreateRequest<K>, cx: &mut Context<Self>) {
        let ticket = request.ticket;
        let Some(create) = self.field.on_create_option.clone() else {
            self.resolve_create(ticket, Ok(request.option), cx);
            return;
        };

        let future = create(request.option);
        cx.spawn(async move |this, cx| {
            let result = future.await;
            if this
                .update(cx, |this, cx| this.resolve_create(ticket, result, cx))
                .is_err()
            {
                tracing::debug!(ticket, "Select view dropped before option was created");
            }
        })
        .detach();
    }

    fn resolve_create(
        &mut self,
        ticket: u64,
        result: anyhow::Result<SelectOption<K>>,
        cx: &mut Context<Self>,
    ) {
        let selection = self.selection(cx);
        if let Some(next) = self.state.finish_create(ticket, result, &selection) {
            self.commit(next, cx);
        }
        cx.notify();
    }

    fn on_key_down(&mut self, event: &KeyDownEvent, _window: &mut Window, cx: &mut Context<Self>) {
        let keystroke = &event.keystroke;
        let selection = self.selection(cx);

        match keystroke.key.as_str() {
            "down" => self.state.highlight_next(&selection),
            "up" => self.state.highlight_prev(&selection),
            "enter" => {
                let action = self.state.enter(&selection);
                self.apply(action, cx);
            }
            "escape" => self.state.close(),
            "backspace" => {
                if let Some(next) = self.state.backspace(&selection) {
                    self.commit(next, cx);
                }
            }
            "left" => self.state.move_left(&selection),
            "right" => self.state.move_right(&selection),
            "space" if !self.state.search_enabled() => self.state.toggle_open(),
            _ if keystroke.modifiers.control || keystroke.modifiers.platform => return,
            _ => match &keystroke.key_char {
                Some(text) => {
                    self.state.insert_search(text);
                }
                None => return,
            },
        }
        cx.notify();
    }

    fn on_trigger_click(&mut self, _event: &ClickEvent, window: &mut Window, cx: &mut Context<Self>) {
        window.focus(&self.focus_handle);
        self.state.toggle_open();
        cx.notify();
    }

    fn on_clear(&mut self, _event: &ClickEvent, _window: &mut Window, cx: &mut Context<Self>) {
        cx.stop_propagation();
        let selection = self.selection(cx);
        if let Some(next) = self.state.clear(&selection) {
            self.commit(next, cx);
        }
        cx.notify();
    }

    fn choose_row(&mut self, index: usize, window: &mut Window, cx: &mut Context<Self>) {
        window.focus(&self.focus_handle);
        let selection = self.selection(cx);
        let action = self.state.choose_candidate(index, &selection);
        self.apply(action, cx);
        cx.notify();
    }

    fn placeholder(&self, focused: bool, defaults: &FieldDefaults) -> SharedString {
        if self.state.is_busy() {
            return defaults.t("select-loading");
        }
        if let Some(placeholder) = &self.field.meta.placeholder {
            return placeholder.clone().into();
        }
        let config = self.state.config();
        match (focused && self.state.search_enabled(), config.searchable, config.createable) {
            (false, _, _) => defaults.t("select-placeholder"),
            (true, true, true) => defaults.t("select-search-create"),
            (true, false, true) => defaults.t("select-create"),
            (true, _, false) => defaults.t("select-search"),
        }
    }

    fn rows(&self, selection: &Selection<K>, defaults: &FieldDefaults) -> Vec<OptionRow> {
        self.state
            .candidates(selection)
            .into_iter()
            .enumerate()
            .map(|(ix, candidate)| OptionRow {
                label: match &candidate {
                    Candidate::Create(text) => i18n::t_with(defaults.locale, "select-create-item", text),
                    Candidate::Existing(option) => option.label.clone().into(),
                },
                create: candidate.is_create(),
                highlighted: self.state.highlighted() == Some(ix),
            })
            .collect()
    }
}

impl<K: OptionKeys> Focusable for SelectEditView<K> {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl<K: OptionKeys> Render for SelectEditView<K> {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let defaults = binding::field_defaults(cx);
        let selection = self.selection(cx);
        let meta = &self.field.meta;
        let focused = self.focus_handle.is_focused(window);
        let interactive = self.state.is_interactive();
        let invalid = binding::has_error(self.form.read(cx).errors(), &meta.name);

        let mut input = InputBox::new(SharedString::from(format!("select-{}", meta.name)))
            .placeholder(self.placeholder(focused, &defaults))
            .focused(focused && self.state.search_enabled())
            .disabled(!interactive && !self.state.is_busy())
            .invalid(invalid)
            .size(meta.size);

        match &selection {
            Selection::Single(Some(option)) if self.state.search_term().is_empty() => {
                input = input.text(option.label.clone(), "");
            }
            _ => {
                let (before, after) = self.state.search().split_at_cursor();
                input = input.text(before.to_string(), after.to_string());
            }
        }

        if let Selection::Multi(options) = &selection {
            for (ix, option) in options.iter().enumerate() {
                input = input.prefix(
                    Chip::new(ix, option.label.clone())
                        .active(self.state.active_chip() == Some(ix))
                        .disabled(!interactive)
                        .on_click(cx.listener(move |this, _event: &ClickEvent, window, cx| {
                            cx.stop_propagation();
                            window.focus(&this.focus_handle);
                            let selection = this.selection(cx);
                            this.state.focus_chip(Some(ix), &selection);
                            cx.notify();
                        }))
                        .on_remove(cx.listener(move |this, _event: &ClickEvent, _window, cx| {
                            cx.stop_propagation();
                            let selection = this.selection(cx);
                            if let Some(next) = this.state.remove_chip(ix, &selection) {
                                this.commit(next, cx);
                            }
                            cx.notify();
                        })),
                );
            }
        }

        if self.field.clearable && interactive && !selection.is_empty() {
            input = input.suffix(
                div()
                    .id("select-clear")
                    .px_1()
                    .cursor_pointer()
                    .text_color(FormColors::text_muted())
                    .hover(|s| s.text_color(FormColors::text_primary()))
                    .child("×")
                    .on_click(cx.listener(Self::on_clear)),
            );
        }
        input = input.suffix(
            div()
                .text_xs()
                .text_color(FormColors::text_muted())
                .child(if self.state.is_open() { "▴" } else { "▾" }),
        );

        let list = self.state.is_open().then(|| {
            let view = cx.entity().downgrade();
            OptionList::new("select-options", self.rows(&selection, &defaults))
                .empty_text(defaults.t("select-no-options"))
                .on_select(move |index, window, cx| {
                    let _ = view.update(cx, |this, cx| this.choose_row(index, window, cx));
                })
        });

        div()
            .id("select-field")
            .track_focus(&self.focus_handle)
            .on_key_down(cx.listener(Self::on_key_down))
            .flex()
            .flex_col()
            .gap_1()
            .child(
                div()
                    .id("select-trigger")
                    .on_click(cx.listener(Self::on_trigger_click))
                    .child(input),
            )
            .children(list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::field_error::{FieldError, KeyErrors};
    use futures::FutureExt;
    use serde_json::json;

    crate::option_keys!(FrameworkKeys, value = "id", label = "name");

    fn frameworks() -> Vec<SelectOption<FrameworkKeys>> {
        vec![
            SelectOption::new("react", "React"),
            SelectOption::new("vue", "Vue"),
        ]
    }

    #[test]
    fn single_read_mode_shows_label() {
        let mut form = FormState::default();
        form.set_value("framework", json!({ "id": "vue", "name": "Vue" }));
        let field = SelectField::new(FieldMeta::new("framework"), frameworks());
        let props = field.read_props(&form, &FieldDefaults::default());
        assert_eq!(props.display_text(), "Vue");
    }

    #[test]
    fn multi_read_mode_lists_every_label() {
        let mut form = FormState::default();
        form.set_value(
            "frameworks",
            json!([{ "id": "vue", "name": "Vue" }, { "id": "react", "name": "React" }]),
        );
        let field = SelectField::new(FieldMeta::new("frameworks"), frameworks()).multi(true);
        let props = field.read_props(&form, &FieldDefaults::default());
        assert_eq!(props.labels, vec!["Vue", "React"]);
    }

    #[test]
    fn empty_read_mode_uses_selection_message() {
        let field = SelectField::new(FieldMeta::new("framework"), frameworks());
        let props = field.read_props(&FormState::default(), &FieldDefaults::default());
        assert_eq!(props.display_text(), "None Selected");

        let custom = SelectField::new(FieldMeta::new("framework"), frameworks())
            .no_selection_message("Pick one later");
        let props = custom.read_props(&FormState::default(), &FieldDefaults::default());
        assert_eq!(props.display_text(), "Pick one later");
    }

    #[test]
    fn meta_no_value_message_applies_to_select() {
        let field = SelectField::new(
            FieldMeta::new("framework").no_value_message("No frameworks"),
            frameworks(),
        )
        .multi(true);
        let props = field.read_props(&FormState::default(), &FieldDefaults::default());
        assert_eq!(props.display_text(), "No frameworks");
    }

    #[test]
    fn searchable_follows_threshold_unless_set() {
        let field = SelectField::new(FieldMeta::new("framework"), frameworks());
        assert!(!field.config(10).searchable);
        assert!(field.config(1).searchable);

        let forced = SelectField::new(FieldMeta::new("framework"), frameworks()).searchable(true);
        assert!(forced.config(10).searchable);
    }

    #[test]
    fn config_carries_meta_flags() {
        let field = SelectField::new(FieldMeta::new("f").disabled(true), frameworks())
            .multi(true)
            .createable(true);
        let config = field.config(10);
        assert!(config.multi && config.createable && config.disabled);
    }

    #[test]
    fn shape_errors_name_the_field_keys() {
        let mut form = FormState::default();
        let mut item = KeyErrors::new();
        item.insert("value".to_string(), FieldError::message("Required"));
        item.insert("label".to_string(), FieldError::message("Required"));
        form.set_error("framework", FieldError::List(vec![item]));

        let field = SelectField::new(FieldMeta::new("framework"), frameworks());
        assert_eq!(
            field.error_text(&form),
            "Expecting option(s) to have keys: value, label. Received keys: id, name."
        );
    }

    #[test]
    fn create_callback_future_resolves_into_state() {
        let field = SelectField::new(FieldMeta::new("f"), frameworks())
            .multi(true)
            .createable(true)
            .on_create_option(|option| {
                async move { Ok(SelectOption::new(format!("new-{}", option.value), option.label)) }
                    .boxed_local()
            });

        let mut state = SelectState::new(field.options.clone(), field.config(10));
        let selection = Selection::empty(true);
        let request = state.begin_create("Svelte").expect("request");
        let create = field.on_create_option.clone().expect("callback");
        let result = futures::executor::block_on(create(request.option));
        let next = state
            .finish_create(request.ticket, result, &selection)
            .expect("selected");

        assert_eq!(next.to_value(), json!([{ "id": "new-Svelte", "name": "Svelte" }]));
    }
}

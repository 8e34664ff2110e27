//! Workspace - Demo Form Window
//!
//! Lays out one field of every kind against the shared form store, with buttons to
//! submit, reset and flip every field between read and edit mode.

use futures::FutureExt;
use gpui::{
    AnyElement, AppContext, Context, Entity, IntoElement, ParentElement, Render,
    SharedString, Styled, Window, div, prelude::*, px,
};
use serde_json::Value;

use crate::app::demo_form::{self, FrameworkKeys};
use crate::app::entities::DemoEntities;
use crate::components::primitives::Button;
use crate::config::FieldDefaults;
use crate::domain::field::{FieldMeta, FieldMode, Tooltip};
use crate::domain::option::SelectOption;
use crate::fields::{FieldView, MaskedField, NumberField, RadioField, SelectField, TextField};
use crate::state::form_state::FormState;
use crate::state::mask_state::PhoneFormat;
use crate::theme::colors::FormColors;
use crate::theme::typography::Typography;

/// Outcome of the last submit shown under the buttons
#[derive(Debug, Clone)]
enum SubmitOutcome {
    Valid(String),
    Invalid(usize),
}

/// Main workspace holding the demo form
pub struct Workspace {
    form: Entity<FormState>,
    mode: FieldMode,
    framework: Entity<FieldView<SelectField<FrameworkKeys>>>,
    text: Entity<FieldView<TextField>>,
    number: Entity<FieldView<NumberField>>,
    mask_text: Entity<FieldView<MaskedField>>,
    phone: Entity<FieldView<MaskedField>>,
    size: Entity<FieldView<RadioField>>,
    last_submit: Option<SubmitOutcome>,
}

impl Workspace {
    pub fn new(entities: DemoEntities, _window: &mut Window, cx: &mut Context<Self>) -> Self {
        let form = entities.form;

        let framework = SelectField::new(
            FieldMeta::new("framework")
                .label("Framework")
                .tooltip(Tooltip::new("Pick every framework you use"))
                .required(true),
            demo_form::framework_options(),
        )
        .multi(true)
        .createable(true)
        .searchable(true)
        .clearable(true)
        .on_change(|selection, _cx| {
            tracing::info!(selected = ?selection.labels(), "Framework changed");
        })
        .on_create_option(|option| {
            async move {
                // A created option gets an id the way a server would assign one
                let id = option.label.to_lowercase().replace(' ', "-");
                Ok::<_, anyhow::Error>(SelectOption::<FrameworkKeys>::new(id, option.label))
            }
            .boxed_local()
        });

        let text = TextField::new(
            FieldMeta::new("text")
                .label("Text")
                .helper_text("Enter any text")
                .required(true),
        )
        .on_change(|text, _cx| tracing::debug!(len = text.len(), "Text changed"));

        let number = NumberField::new(FieldMeta::new("number").label("Number"));

        let mask_text = MaskedField::ssn(
            FieldMeta::new("maskText")
                .label("SSN")
                .warning_text("Stored without dashes"),
        );

        let phone = MaskedField::phone(
            FieldMeta::new("phone").label("Phone"),
            PhoneFormat::International,
            Some("1"),
        );

        let size = RadioField::new(
            FieldMeta::new("size").label("Size"),
            vec![
                SelectOption::new("s", "Small"),
                SelectOption::new("m", "Medium"),
                SelectOption::new("l", "Large"),
            ],
        )
        .inline(true);

        cx.observe(&form, |_this, _form, cx| cx.notify()).detach();

        Self {
            framework: cx.new(|cx| FieldView::new(framework, form.clone(), cx)),
            text: cx.new(|cx| FieldView::new(text, form.clone(), cx)),
            number: cx.new(|cx| FieldView::new(number, form.clone(), cx)),
            mask_text: cx.new(|cx| FieldView::new(mask_text, form.clone(), cx)),
            phone: cx.new(|cx| FieldView::new(phone, form.clone(), cx)),
            size: cx.new(|cx| FieldView::new(size, form.clone(), cx)),
            form,
            mode: FieldMode::Edit,
            last_submit: None,
        }
    }

    fn submit(&mut self, cx: &mut Context<Self>) {
        let result = self.form.update(cx, |form, cx| {
            let result = form.handle_submit();
            cx.notify();
            result
        });
        self.last_submit = Some(match result {
            Ok(values) => {
                let json = Value::Object(values).to_string();
                tracing::info!(values = %json, "Form submitted");
                SubmitOutcome::Valid(json)
            }
            Err(errors) => {
                tracing::warn!(fields = ?errors.keys().collect::<Vec<_>>(), "Form has errors");
                SubmitOutcome::Invalid(errors.len())
            }
        });
        cx.notify();
    }

    fn reset(&mut self, cx: &mut Context<Self>) {
        self.form.update(cx, |form, cx| {
            form.reset(None);
            cx.notify();
        });
        self.last_submit = None;
        cx.notify();
    }

    fn toggle_mode(&mut self, cx: &mut Context<Self>) {
        self.mode = self.mode.toggled();
        let mode = self.mode;
        self.framework.update(cx, |view, cx| view.set_mode(mode, cx));
        self.text.update(cx, |view, cx| view.set_mode(mode, cx));
        self.number.update(cx, |view, cx| view.set_mode(mode, cx));
        self.mask_text.update(cx, |view, cx| view.set_mode(mode, cx));
        self.phone.update(cx, |view, cx| view.set_mode(mode, cx));
        self.size.update(cx, |view, cx| view.set_mode(mode, cx));
        cx.notify();
    }

    fn render_outcome(&self, defaults: &FieldDefaults) -> Option<AnyElement> {
        let outcome = self.last_submit.as_ref()?;
        let (color, text): (_, SharedString) = match outcome {
            SubmitOutcome::Valid(json) => (FormColors::text_secondary(), json.clone().into()),
            SubmitOutcome::Invalid(count) => (
                FormColors::danger(),
                format!("{count} {}", defaults.t("demo-invalid")).into(),
            ),
        };
        Some(
            div()
                .text_size(px(Typography::TEXT_XS))
                .text_color(color)
                .child(text)
                .into_any_element(),
        )
    }
}

impl Render for Workspace {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let defaults = cx.try_global::<FieldDefaults>().cloned().unwrap_or_default();
        let dirty = self.form.read(cx).is_form_dirty() || self.last_submit.is_some();
        let toggle_label = match self.mode {
            FieldMode::Edit => defaults.t("demo-read"),
            FieldMode::Read => defaults.t("demo-edit"),
        };

        div()
            .id("workspace")
            .size_full()
            .overflow_y_scroll()
            .bg(FormColors::background())
            .p_6()
            .child(
                div()
                    .max_w(px(640.0))
                    .flex()
                    .flex_col()
                    .gap_4()
                    .p_6()
                    .rounded_lg()
                    .bg(FormColors::content_bg())
                    .border_1()
                    .border_color(FormColors::border())
                    .child(
                        div()
                            .text_size(px(Typography::TEXT_XL))
                            .text_color(FormColors::text_primary())
                            .child(defaults.t("demo-title")),
                    )
                    .child(self.framework.clone())
                    .child(self.text.clone())
                    .child(self.number.clone())
                    .child(self.mask_text.clone())
                    .child(self.phone.clone())
                    .child(self.size.clone())
                    .child(
                        div()
                            .flex()
                            .gap_2()
                            .child(
                                Button::primary("submit", defaults.t("demo-submit"))
                                    .on_click(cx.listener(|this, _, _, cx| this.submit(cx))),
                            )
                            .child(
                                Button::secondary("reset", defaults.t("demo-reset"))
                                    .disabled(!dirty)
                                    .on_click(cx.listener(|this, _, _, cx| this.reset(cx))),
                            )
                            .child(
                                Button::ghost("toggle-mode", toggle_label)
                                    .on_click(cx.listener(|this, _, _, cx| this.toggle_mode(cx))),
                            ),
                    )
                    .children(self.render_outcome(&defaults)),
            )
    }
}

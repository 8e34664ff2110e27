//! Dispatch - Read/Edit Mode Switching for Every Field
//!
//! A [`FieldView`] renders one field in either mode. Read mode draws the widget's read
//! props (or a caller override). Edit mode draws the widget's interactive view, which is
//! built the first time edit mode renders and kept afterwards.

use std::rc::Rc;

use gpui::{
    AnyElement, App, Context, Entity, IntoElement, ParentElement, Render, Styled, Subscription,
    Window, div,
};

use crate::components::field_frame::FieldFrame;
use crate::config::FieldDefaults;
use crate::domain::field::{FieldMeta, FieldMode};
use crate::domain::field_error::message_text;
use crate::fields::binding::field_defaults;
use crate::state::form_state::FormState;

/// A field type that can be shown by [`FieldView`]
pub trait FieldWidget: 'static {
    /// Everything read mode needs, computed from the form
    type ReadProps: IntoElement;
    /// Interactive view used in edit mode
    type EditView: Render;

    fn meta(&self) -> &FieldMeta;

    fn read_props(&self, form: &FormState, defaults: &FieldDefaults) -> Self::ReadProps;

    fn build_edit_view(
        self: Rc<Self>,
        form: Entity<FormState>,
        window: &mut Window,
        cx: &mut App,
    ) -> Entity<Self::EditView>;

    /// Error text shown under the control in edit mode
    fn error_text(&self, form: &FormState) -> String {
        message_text(form.errors(), &self.meta().name)
    }
}

/// Replaces the built-in read view
pub type ReadOverride<P> = Rc<dyn Fn(&P, &mut Window, &mut App) -> AnyElement + 'static>;

/// Replaces the built-in edit view
pub type EditOverride =
    Rc<dyn Fn(&FieldMeta, &Entity<FormState>, &mut Window, &mut App) -> AnyElement + 'static>;

/// Which renderer a field body comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldBody {
    ReadOverride,
    ReadBuiltIn,
    EditOverride,
    EditBuiltIn,
}

impl FieldBody {
    pub fn resolve(mode: FieldMode, has_read_override: bool, has_edit_override: bool) -> Self {
        match mode {
            FieldMode::Read if has_read_override => FieldBody::ReadOverride,
            FieldMode::Read => FieldBody::ReadBuiltIn,
            FieldMode::Edit if has_edit_override => FieldBody::EditOverride,
            FieldMode::Edit => FieldBody::EditBuiltIn,
        }
    }
}

/// One field bound to a form
pub struct FieldView<W: FieldWidget> {
    widget: Rc<W>,
    form: Entity<FormState>,
    mode: FieldMode,
    edit_view: Option<Entity<W::EditView>>,
    read_override: Option<ReadOverride<W::ReadProps>>,
    edit_override: Option<EditOverride>,
    _subscriptions: Vec<Subscription>,
}

impl<W: FieldWidget> FieldView<W> {
    pub fn new(widget: W, form: Entity<FormState>, cx: &mut Context<Self>) -> Self {
        let subscriptions = vec![cx.observe(&form, |_this, _form, cx| cx.notify())];
        Self {
            widget: Rc::new(widget),
            form,
            mode: FieldMode::default(),
            edit_view: None,
            read_override: None,
            edit_override: None,
            _subscriptions: subscriptions,
        }
    }

    pub fn with_mode(mut self, mode: FieldMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_read_override(
        mut self,
        render: impl Fn(&W::ReadProps, &mut Window, &mut App) -> AnyElement + 'static,
    ) -> Self {
        self.read_override = Some(Rc::new(render));
        self
    }

    pub fn with_edit_override(
        mut self,
        render: impl Fn(&FieldMeta, &Entity<FormState>, &mut Window, &mut App) -> AnyElement
        + 'static,
    ) -> Self {
        self.edit_override = Some(Rc::new(render));
        self
    }

    pub fn mode(&self) -> FieldMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: FieldMode, cx: &mut Context<Self>) {
        if self.mode != mode {
            tracing::debug!(field = %self.widget.meta().name, mode = mode.label(), "Field mode changed");
            self.mode = mode;
            cx.notify();
        }
    }

    pub fn toggle_mode(&mut self, cx: &mut Context<Self>) {
        self.set_mode(self.mode.toggled(), cx);
    }

    pub fn widget(&self) -> &W {
        &self.widget
    }

    fn edit_view(&mut self, window: &mut Window, cx: &mut Context<Self>) -> Entity<W::EditView> {
        if let Some(view) = &self.edit_view {
            return view.clone();
        }
        let view = self
            .widget
            .clone()
            .build_edit_view(self.form.clone(), window, cx);
        self.edit_view = Some(view.clone());
        view
    }
}

impl<W: FieldWidget> Render for FieldView<W> {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let meta = self.widget.meta().clone();
        let body_kind = FieldBody::resolve(
            self.mode,
            self.read_override.is_some(),
            self.edit_override.is_some(),
        );

        let (read_props, error) = {
            let defaults = field_defaults(cx);
            let form = self.form.read(cx);
            match self.mode {
                FieldMode::Read => (Some(self.widget.read_props(form, &defaults)), String::new()),
                FieldMode::Edit => (None, self.widget.error_text(form)),
            }
        };

        let body: AnyElement = match (body_kind, read_props) {
            (FieldBody::ReadOverride, Some(props)) => match &self.read_override {
                Some(render) => render(&props, window, cx),
                None => props.into_any_element(),
            },
            (_, Some(props)) => props.into_any_element(),
            (FieldBody::EditOverride, None) => match self.edit_override.clone() {
                Some(render) => render(&meta, &self.form, window, cx),
                None => self.edit_view(window, cx).into_any_element(),
            },
            (_, None) => self.edit_view(window, cx).into_any_element(),
        };

        div().w_full().child(
            FieldFrame::new(meta)
                .mode(self.mode)
                .error(error)
                .child(body),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_replace_built_in_bodies() {
        assert_eq!(
            FieldBody::resolve(FieldMode::Read, true, false),
            FieldBody::ReadOverride
        );
        assert_eq!(
            FieldBody::resolve(FieldMode::Read, false, true),
            FieldBody::ReadBuiltIn
        );
        assert_eq!(
            FieldBody::resolve(FieldMode::Edit, true, true),
            FieldBody::EditOverride
        );
        assert_eq!(
            FieldBody::resolve(FieldMode::Edit, true, false),
            FieldBody::EditBuiltIn
        );
    }

    #[test]
    fn edit_is_the_default_mode() {
        assert_eq!(FieldMode::default(), FieldMode::Edit);
        assert_eq!(FieldMode::Edit.toggled(), FieldMode::Read);
    }
}

//! DemoEntities - Global Entity Handles of the Demo

use gpui::{App, AppContext, Entity, Global};

use crate::app::demo_form;
use crate::state::form_state::FormState;

/// Collection of all global Entity handles
#[derive(Clone)]
pub struct DemoEntities {
    /// The demo form store every field binds to
    pub form: Entity<FormState>,
}

impl Global for DemoEntities {}

impl DemoEntities {
    pub fn init(cx: &mut App) -> Self {
        Self {
            form: cx.new(|_| {
                FormState::new(demo_form::default_values()).with_resolver(demo_form::resolve)
            }),
        }
    }
}

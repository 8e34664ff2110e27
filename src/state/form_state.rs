//! FormState - Field Values, Errors and Subscriptions
//!
//! The store every field binds to. Values are kept as JSON keyed by field name so that
//! one store can hold strings, numbers and option records side by side. Validation is
//! delegated to a [`Resolver`]; the store never interprets values itself.

use std::collections::BTreeSet;
use std::fmt;

use serde_json::{Map, Value};

use crate::domain::field_error::{FieldError, FieldErrors};

/// All values of a form keyed by field name
pub type FormValues = Map<String, Value>;

/// Produces validation errors for a set of values
pub trait Resolver {
    fn resolve(&self, values: &FormValues) -> FieldErrors;
}

impl<F> Resolver for F
where
    F: Fn(&FormValues) -> FieldErrors,
{
    fn resolve(&self, values: &FormValues) -> FieldErrors {
        self(values)
    }
}

/// Change notifications sent to subscribers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    ValueChanged { name: String },
    Blurred { name: String },
    ErrorsChanged,
    Reset,
    Submitted { valid: bool },
}

/// Handle returned by [`FormState::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// What a field needs from the form it is bound to
pub trait FieldController {
    fn value(&self, name: &str) -> Option<&Value>;
    fn set_value(&mut self, name: &str, value: Value);
    fn blur(&mut self, name: &str);
    fn error(&self, name: &str) -> Option<&FieldError>;
    fn errors(&self) -> &FieldErrors;
}

type Listener = Box<dyn FnMut(&FormEvent)>;

/// Form value store
pub struct FormState {
    defaults: FormValues,
    values: FormValues,
    errors: FieldErrors,
    touched: BTreeSet<String>,
    dirty: BTreeSet<String>,
    resolver: Option<Box<dyn Resolver>>,
    /// After the first submit every change is re-validated
    submitted: bool,
    /// Bumped by every `reset`, so views can drop their transient state
    resets: u64,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_listener_id: u64,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new(FormValues::new())
    }
}

impl FormState {
    pub fn new(defaults: FormValues) -> Self {
        Self {
            values: defaults.clone(),
            defaults,
            errors: FieldErrors::new(),
            touched: BTreeSet::new(),
            dirty: BTreeSet::new(),
            resolver: None,
            submitted: false,
            resets: 0,
            listeners: Vec::new(),
            next_listener_id: 1,
        }
    }

    pub fn with_resolver(mut self, resolver: impl Resolver + 'static) -> Self {
        self.resolver = Some(Box::new(resolver));
        self
    }

    pub fn set_resolver(&mut self, resolver: impl Resolver + 'static) {
        self.resolver = Some(Box::new(resolver));
    }

    // ==================== Values ====================

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn value(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Store a value; a `null` value removes the field
    pub fn set_value(&mut self, name: &str, value: Value) {
        if self.values.get(name) == Some(&value) {
            return;
        }
        if value.is_null() && !self.values.contains_key(name) {
            return;
        }

        if value.is_null() {
            self.values.remove(name);
        } else {
            self.values.insert(name.to_string(), value);
        }

        if self.values.get(name) == self.defaults.get(name) {
            self.dirty.remove(name);
        } else {
            self.dirty.insert(name.to_string());
        }

        self.emit(FormEvent::ValueChanged {
            name: name.to_string(),
        });
        if self.submitted {
            self.validate();
        }
    }

    pub fn blur(&mut self, name: &str) {
        self.touched.insert(name.to_string());
        self.emit(FormEvent::Blurred {
            name: name.to_string(),
        });
    }

    pub fn is_touched(&self, name: &str) -> bool {
        self.touched.contains(name)
    }

    pub fn is_dirty(&self, name: &str) -> bool {
        self.dirty.contains(name)
    }

    pub fn is_form_dirty(&self) -> bool {
        !self.dirty.is_empty()
    }

    // ==================== Errors ====================

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, name: &str) -> Option<&FieldError> {
        self.errors.get(name)
    }

    pub fn set_error(&mut self, name: &str, error: FieldError) {
        self.errors.insert(name.to_string(), error);
        self.emit(FormEvent::ErrorsChanged);
    }

    pub fn clear_error(&mut self, name: &str) {
        if self.errors.remove(name).is_some() {
            self.emit(FormEvent::ErrorsChanged);
        }
    }

    /// Run the resolver and replace the errors; returns whether the form is valid
    pub fn validate(&mut self) -> bool {
        let Some(resolver) = &self.resolver else {
            return self.errors.is_empty();
        };
        let errors = resolver.resolve(&self.values);
        if errors != self.errors {
            tracing::debug!(count = errors.len(), "Form errors changed");
            self.errors = errors;
            self.emit(FormEvent::ErrorsChanged);
        }
        self.errors.is_empty()
    }

    /// Validate and hand back the values, or the errors when invalid
    pub fn handle_submit(&mut self) -> Result<FormValues, FieldErrors> {
        self.submitted = true;
        let valid = self.validate();
        self.emit(FormEvent::Submitted { valid });
        if valid {
            Ok(self.values.clone())
        } else {
            Err(self.errors.clone())
        }
    }

    /// Restore the values to `defaults`, or the current defaults when `None`
    pub fn reset(&mut self, defaults: Option<FormValues>) {
        if let Some(defaults) = defaults {
            self.defaults = defaults;
        }
        self.values = self.defaults.clone();
        self.errors.clear();
        self.touched.clear();
        self.dirty.clear();
        self.submitted = false;
        self.resets += 1;
        self.emit(FormEvent::Reset);
    }

    /// Number of resets so far
    pub fn reset_count(&self) -> u64 {
        self.resets
    }

    // ==================== Subscriptions ====================

    pub fn subscribe(&mut self, listener: impl FnMut(&FormEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_listener_id);
        self.next_listener_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    fn emit(&mut self, event: FormEvent) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(&event);
        }
    }
}

impl FieldController for FormState {
    fn value(&self, name: &str) -> Option<&Value> {
        FormState::value(self, name)
    }

    fn set_value(&mut self, name: &str, value: Value) {
        FormState::set_value(self, name, value);
    }

    fn blur(&mut self, name: &str) {
        FormState::blur(self, name);
    }

    fn error(&self, name: &str) -> Option<&FieldError> {
        FormState::error(self, name)
    }

    fn errors(&self) -> &FieldErrors {
        FormState::errors(self)
    }
}

impl fmt::Debug for FormState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormState")
            .field("values", &self.values)
            .field("errors", &self.errors)
            .field("touched", &self.touched)
            .field("dirty", &self.dirty)
            .field("has_resolver", &self.resolver.is_some())
            .field("submitted", &self.submitted)
            .field("resets", &self.resets)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

//! Domain - Pure Data Structures
//!
//! These types don't depend on GPUI and describe options, selections and field
//! configuration.

pub mod field;
pub mod field_error;
pub mod option;
pub mod selection;

pub use field::{FieldMeta, FieldMode, FieldSize, Tooltip};
pub use field_error::{FieldError, FieldErrors, KeyErrors, error_text, message_text};
pub use option::{DefaultKeys, OptionKeys, SelectOption, filter_options};
pub use selection::Selection;

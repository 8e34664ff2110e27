//! Fields - Form-Bound Widgets
//!
//! Each field pairs a configuration struct with a read-mode props type and an edit-mode
//! view, and is shown through [`dispatch::FieldView`].

pub mod binding;
pub mod dispatch;
pub mod masked;
pub mod number;
pub mod radio;
pub mod select;
pub mod text;

pub use dispatch::{FieldView, FieldWidget};
pub use masked::MaskedField;
pub use number::NumberField;
pub use radio::RadioField;
pub use select::{CreateOptionFn, SelectField};
pub use text::TextField;

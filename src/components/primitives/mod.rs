//! Primitive Components
//!
//! Basic building blocks the field views are drawn with.

pub mod button;
pub mod chip;
pub mod radio;
pub mod select;
pub mod text_input;

pub use button::{Button, ButtonVariant};
pub use chip::{Badge, Chip};
pub use radio::RadioButton;
pub use select::{OptionList, OptionRow};
pub use text_input::InputBox;

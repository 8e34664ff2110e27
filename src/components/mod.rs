//! Components - Reusable UI Components
//!
//! Pure UI components that don't touch the form store.

pub mod field_frame;
pub mod primitives;
pub mod tooltip;

pub use field_frame::FieldFrame;
pub use tooltip::{LabelWithTooltip, TooltipView};

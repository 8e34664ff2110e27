//! Theme - Colors and Typography

pub mod colors;
pub mod typography;

pub use colors::FormColors;
pub use typography::Typography;

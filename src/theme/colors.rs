//! Colors - Form Widget Colors

use gpui::{Hsla, Rgba, rgb};

/// Form widget palette - All colors are accessed via associated functions
pub struct FormColors;

impl FormColors {
    // Background colors
    /// Window background
    pub fn background() -> Rgba { rgb(0xf5f5f5) }
    /// Card/panel background
    pub fn content_bg() -> Rgba { rgb(0xffffff) }

    // Text colors
    /// Primary text
    pub fn text_primary() -> Rgba { rgb(0x1f2937) }
    /// Secondary text
    pub fn text_secondary() -> Rgba { rgb(0x6b7280) }
    /// Muted text
    pub fn text_muted() -> Rgba { rgb(0x9ca3af) }
    /// Light text (on dark backgrounds)
    pub fn text_light() -> Rgba { rgb(0xffffff) }

    // Status colors
    /// Warning text - Amber
    pub fn warning() -> Rgba { rgb(0xd97706) }
    /// Error text and required marker - Red
    pub fn danger() -> Rgba { rgb(0xef4444) }
    /// Accent - Blue
    pub fn accent() -> Rgba { rgb(0x3b82f6) }

    // Border colors
    /// Default border
    pub fn border() -> Rgba { rgb(0xe5e7eb) }
    /// Focused border
    pub fn border_focus() -> Rgba { rgb(0x3b82f6) }
    /// Invalid field border
    pub fn border_error() -> Rgba { rgb(0xef4444) }

    // Button colors
    /// Primary button background
    pub fn button_primary_bg() -> Rgba { rgb(0x3b82f6) }
    /// Primary button text
    pub fn button_primary_text() -> Rgba { rgb(0xffffff) }
    /// Primary button under the pointer
    pub fn button_primary_hover() -> Rgba { rgb(0x2563eb) }
    /// Secondary button background
    pub fn button_secondary_bg() -> Rgba { rgb(0xe5e7eb) }
    /// Secondary button under the pointer
    pub fn button_secondary_hover() -> Rgba { rgb(0xd1d5db) }
    /// Ghost button text
    pub fn button_ghost_text() -> Rgba { rgb(0x6b7280) }

    // Input colors
    /// Input background
    pub fn input_bg() -> Rgba { rgb(0xffffff) }
    /// Disabled input background
    pub fn input_disabled_bg() -> Rgba { rgb(0xf3f4f6) }
    /// Input border
    pub fn input_border() -> Rgba { rgb(0xd1d5db) }
    /// Input placeholder
    pub fn input_placeholder() -> Rgba { rgb(0x9ca3af) }

    // Option list colors
    /// Highlighted option row
    pub fn option_highlight() -> Rgba { rgb(0xeff6ff) }
    /// Hovered option row
    pub fn option_hover() -> Rgba { rgb(0xf3f4f6) }

    // Chip colors
    /// Chip background
    pub fn chip_bg() -> Rgba { rgb(0xe5e7eb) }
    /// Focused chip background
    pub fn chip_active_bg() -> Rgba { rgb(0xbfdbfe) }
    /// Read-mode badge background
    pub fn badge_bg() -> Rgba { rgb(0xdbeafe) }
    /// Read-mode badge text
    pub fn badge_text() -> Rgba { rgb(0x1e40af) }

    // Tooltip colors
    /// Tooltip background
    pub fn tooltip_bg() -> Rgba { rgb(0x1f2937) }
}

/// Convert Rgba to Hsla for certain GPUI operations
impl FormColors {
    pub fn accent_hsla() -> Hsla {
        Hsla::from(Self::accent())
    }
}

//! Typography - Font Sizes and Field Sizing

use crate::domain::field::FieldSize;

/// Typography constants
pub struct Typography;

impl Typography {
    // Font sizes
    pub const TEXT_2XS: f32 = 10.0;
    pub const TEXT_XS: f32 = 12.0;
    pub const TEXT_SM: f32 = 14.0;
    pub const TEXT_BASE: f32 = 16.0;
    pub const TEXT_LG: f32 = 18.0;
    pub const TEXT_XL: f32 = 20.0;
    pub const TEXT_2XL: f32 = 24.0;

    // Line heights
    pub const LEADING_TIGHT: f32 = 1.25;
    pub const LEADING_NORMAL: f32 = 1.5;

    /// Font size of a field's input text
    pub fn field_text(size: FieldSize) -> f32 {
        match size {
            FieldSize::TwoXs => Self::TEXT_2XS,
            FieldSize::Xs => Self::TEXT_XS,
            FieldSize::Sm => Self::TEXT_SM - 1.0,
            FieldSize::Md => Self::TEXT_SM,
            FieldSize::Lg => Self::TEXT_BASE,
            FieldSize::Xl => Self::TEXT_LG,
            FieldSize::TwoXl => Self::TEXT_XL,
        }
    }

    /// Height of a single-line input box
    pub fn field_height(size: FieldSize) -> f32 {
        match size {
            FieldSize::TwoXs => 20.0,
            FieldSize::Xs => 24.0,
            FieldSize::Sm => 28.0,
            FieldSize::Md => 32.0,
            FieldSize::Lg => 40.0,
            FieldSize::Xl => 48.0,
            FieldSize::TwoXl => 56.0,
        }
    }

    /// Font size of the field label
    pub fn label_text(size: FieldSize) -> f32 {
        match size {
            FieldSize::TwoXs | FieldSize::Xs => Self::TEXT_XS,
            FieldSize::Sm | FieldSize::Md => Self::TEXT_SM,
            _ => Self::TEXT_BASE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes_grow_monotonically() {
        let sizes = [
            FieldSize::TwoXs,
            FieldSize::Xs,
            FieldSize::Sm,
            FieldSize::Md,
            FieldSize::Lg,
            FieldSize::Xl,
            FieldSize::TwoXl,
        ];
        for pair in sizes.windows(2) {
            assert!(Typography::field_height(pair[0]) < Typography::field_height(pair[1]));
            assert!(Typography::field_text(pair[0]) < Typography::field_text(pair[1]));
        }
    }
}

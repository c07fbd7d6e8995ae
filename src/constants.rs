//! Physical dimensions and layout defaults, all lengths in centimeters

/// A4 page width in centimeters
pub const A4_WIDTH_CM: f32 = 21.0;

/// A4 page height in centimeters
pub const A4_HEIGHT_CM: f32 = 29.7;

/// Fixed page margin on each vertical edge (left and right)
pub const H_MARGIN_CM: f32 = 2.1;

/// Fixed page margin on each horizontal edge (top and bottom)
pub const V_MARGIN_CM: f32 = 1.5;

/// Minimum horizontal gap between neighbouring labels
pub const MIN_H_SPACING_CM: f32 = 0.1;

/// Minimum vertical gap between neighbouring labels
pub const MIN_V_SPACING_CM: f32 = 0.1;

/// Default label width when no saved design exists
pub const DEFAULT_LABEL_WIDTH_CM: f32 = 5.0;

/// Default label height when no saved design exists
pub const DEFAULT_LABEL_HEIGHT_CM: f32 = 4.0;

/// Default number of copies to lay out
pub const DEFAULT_REPEAT_COUNT: u32 = 1;

/// Default label text size in points
pub const DEFAULT_TEXT_SIZE_PT: f32 = 14.0;

/// Smallest accepted label text size in points
pub const MIN_TEXT_SIZE_PT: f32 = 6.0;

/// Largest accepted label text size in points
pub const MAX_TEXT_SIZE_PT: f32 = 72.0;

/// Tolerance for floating-point comparison of physical lengths
pub const LENGTH_EPSILON: f32 = 1e-4;

//! Layout inputs: sheet geometry, label size, and the layout request

use crate::Result;
use crate::constants::*;
use crate::error::LayoutError;

/// Usable printable area of a sheet, in centimeters
///
/// Derived from a fixed physical page size minus fixed margins on each side.
/// Margins are static configuration, not user input; both usable dimensions
/// are strictly positive by construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetGeometry {
    usable_width: f32,
    usable_height: f32,
}

impl SheetGeometry {
    /// A4 with the configured fixed margins
    pub fn a4() -> Self {
        Self {
            usable_width: A4_WIDTH_CM - 2.0 * H_MARGIN_CM,
            usable_height: A4_HEIGHT_CM - 2.0 * V_MARGIN_CM,
        }
    }

    /// Build usable geometry from a full page size and per-side margins
    pub fn from_page(
        page_width: f32,
        page_height: f32,
        h_margin: f32,
        v_margin: f32,
    ) -> Result<Self> {
        let usable_width = page_width - 2.0 * h_margin;
        let usable_height = page_height - 2.0 * v_margin;

        if !usable_width.is_finite()
            || !usable_height.is_finite()
            || usable_width <= 0.0
            || usable_height <= 0.0
        {
            return Err(LayoutError::GeometryError(format!(
                "margins leave no printable area on a {page_width}x{page_height} page"
            )));
        }

        Ok(Self {
            usable_width,
            usable_height,
        })
    }

    /// Usable width in centimeters
    pub fn usable_width(&self) -> f32 {
        self.usable_width
    }

    /// Usable height in centimeters
    pub fn usable_height(&self) -> f32 {
        self.usable_height
    }
}

impl Default for SheetGeometry {
    fn default() -> Self {
        Self::a4()
    }
}

/// Physical label dimensions in centimeters
///
/// A single size applies uniformly to every label on every sheet of one
/// layout. Both dimensions are strictly positive by construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelSize {
    width: f32,
    height: f32,
}

impl LabelSize {
    /// Create a validated label size
    pub fn new(width: f32, height: f32) -> Result<Self> {
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return Err(LayoutError::DimensionError(format!(
                "label dimensions must be positive, got {width}x{height}"
            )));
        }
        Ok(Self { width, height })
    }

    /// Create a label size, substituting defaults for invalid dimensions
    ///
    /// Used on the snapshot restore path, where malformed saved values fall
    /// back to the default design instead of surfacing an error.
    pub fn clamped(width: f32, height: f32) -> Self {
        let width = if width.is_finite() && width > 0.0 {
            width
        } else {
            DEFAULT_LABEL_WIDTH_CM
        };
        let height = if height.is_finite() && height > 0.0 {
            height
        } else {
            DEFAULT_LABEL_HEIGHT_CM
        };
        Self { width, height }
    }

    /// Label width in centimeters
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Label height in centimeters
    pub fn height(&self) -> f32 {
        self.height
    }
}

impl Default for LabelSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_LABEL_WIDTH_CM,
            height: DEFAULT_LABEL_HEIGHT_CM,
        }
    }
}

/// A complete layout request: one label size repeated a number of times on
/// one sheet geometry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutRequest {
    pub sheet: SheetGeometry,
    pub label: LabelSize,
    repeat_count: u32,
}

impl LayoutRequest {
    /// Create a layout request; `repeat_count` is clamped to at least one copy
    pub fn new(sheet: SheetGeometry, label: LabelSize, repeat_count: u32) -> Self {
        Self {
            sheet,
            label,
            repeat_count: repeat_count.max(1),
        }
    }

    /// Number of label copies to lay out, always at least 1
    pub fn repeat_count(&self) -> u32 {
        self.repeat_count
    }
}

//! Grid capacity calculation: how many labels fit per row and per column

use crate::constants::{MIN_H_SPACING_CM, MIN_V_SPACING_CM};
use crate::geometry::{LabelSize, SheetGeometry};
use tracing::trace;

/// Maximum number of whole labels per axis and the actual gap between them
///
/// Recomputed on every change to the sheet geometry or label size; never
/// cached across computation cycles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridCapacity {
    /// Labels per row across the usable width
    pub per_row: u32,
    /// Labels per column down the usable height
    pub per_column: u32,
    /// Actual horizontal gap, stretched to fill the usable width exactly
    pub h_spacing: f32,
    /// Actual vertical gap, stretched to fill the usable height exactly
    pub v_spacing: f32,
}

impl GridCapacity {
    /// Compute capacity for one label size on one sheet
    pub fn compute(sheet: &SheetGeometry, label: &LabelSize) -> Self {
        let (per_row, h_spacing) =
            capacity_along_axis(sheet.usable_width(), label.width(), MIN_H_SPACING_CM);
        let (per_column, v_spacing) =
            capacity_along_axis(sheet.usable_height(), label.height(), MIN_V_SPACING_CM);

        trace!(per_row, per_column, h_spacing, v_spacing, "computed grid capacity");

        Self {
            per_row,
            per_column,
            h_spacing,
            v_spacing,
        }
    }

    /// Number of labels that fit on one full sheet
    pub fn per_sheet(&self) -> u32 {
        self.per_row * self.per_column
    }
}

/// Largest `n >= 1` whole labels along one axis, with the gap between them
/// stretched so the usable length is consumed exactly
///
/// An oversized label still yields a single placement with zero spacing;
/// overflow past the sheet bounds is accepted rather than rejected, so a
/// nonsensical input degrades to one label per sheet instead of refusing to
/// render.
///
/// Preconditions (enforced by [`SheetGeometry`] and [`LabelSize`]):
/// `usable_length > 0`, `label_length > 0`, `min_spacing >= 0`, all finite.
pub fn capacity_along_axis(usable_length: f32, label_length: f32, min_spacing: f32) -> (u32, f32) {
    if label_length >= usable_length {
        return (1, 0.0);
    }

    // Largest n with n*label + (n-1)*min_spacing <= usable. The cast
    // saturates, so a degenerate tiny label cannot overflow or hang.
    let n = (((usable_length + min_spacing) / (label_length + min_spacing)).floor() as u32).max(1);

    let spacing = if n > 1 {
        (usable_length - n as f32 * label_length) / (n - 1) as f32
    } else {
        0.0
    };

    (n, spacing)
}

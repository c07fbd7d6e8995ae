//! Print-layout geometry and pagination for tiled label sheets
//!
//! Given a label's physical size in centimeters, the usable area of an A4
//! sheet, and a repeat count, this library computes how many labels fit per
//! row and column, the exact redistributed spacing between them, and the
//! ordered sequence of printable sheets with page navigation over it. The
//! on-screen preview and the physical print consume the same numbers, so the
//! two cannot diverge.

use tracing::{debug, instrument};

pub mod capacity;
pub mod constants;
pub mod cursor;
pub mod design;
pub mod error;
pub mod geometry;
pub mod paginate;
pub mod snapshot;

pub use capacity::{GridCapacity, capacity_along_axis};
pub use cursor::PaginationCursor;
pub use design::{Color, LabelDesign, PatternKind, TextPlacement};
pub use error::{LayoutError, Result};
pub use geometry::{LabelSize, LayoutRequest, SheetGeometry};
pub use paginate::{Sheet, paginate};
pub use snapshot::{DesignSnapshot, restore};

/// A fully computed layout: grid capacity plus the ordered sheet sequence
///
/// Derived state, recomputed whenever any input changes and never mutated in
/// place.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetLayout {
    pub capacity: GridCapacity,
    pub sheets: Vec<Sheet>,
}

impl SheetLayout {
    /// Number of sheets in the layout, always at least 1
    pub fn total_pages(&self) -> u32 {
        self.sheets.len() as u32
    }

    /// A cursor positioned at the first sheet of this layout
    pub fn cursor(&self) -> PaginationCursor {
        PaginationCursor::new(self.total_pages())
    }
}

/// Compute the complete layout for one request
///
/// Pure recomputation from a snapshot of the inputs: deterministic,
/// idempotent, and cheap enough to run on every render.
#[instrument(skip(request), fields(repeat_count = request.repeat_count()))]
pub fn compute_layout(request: &LayoutRequest) -> SheetLayout {
    debug!("computing sheet layout");

    let capacity = GridCapacity::compute(&request.sheet, &request.label);
    let sheets = paginate::paginate(request.repeat_count(), &capacity);

    SheetLayout { capacity, sheets }
}

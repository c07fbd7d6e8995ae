//! Sheet pagination: partitioning repeated labels into printable pages

use crate::capacity::GridCapacity;
use tracing::{debug, trace};

/// One printable page of a layout
///
/// `start_index..end_index` is a half-open range into the flat sequence of
/// label instances. `columns` and `rows` are the actual grid shape for this
/// sheet: the last sheet reflows to its remaining content instead of padding
/// to full capacity, and the preview renders the same shape, so preview and
/// print cannot diverge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sheet {
    /// 1-indexed page number within the emitted sequence
    pub number: u32,
    /// First label instance on this sheet
    pub start_index: u32,
    /// One past the last label instance on this sheet
    pub end_index: u32,
    /// Actual columns on this sheet, at most the per-row capacity
    pub columns: u32,
    /// Actual rows on this sheet
    pub rows: u32,
    /// Horizontal gap between labels, copied from the grid capacity
    pub h_spacing: f32,
    /// Vertical gap between labels, copied from the grid capacity
    pub v_spacing: f32,
    /// Whether this is the final sheet; no page break follows it
    pub is_last: bool,
}

impl Sheet {
    /// Number of labels on this sheet, always positive
    pub fn label_count(&self) -> u32 {
        self.end_index - self.start_index
    }
}

/// Partition `repeat_count` label instances into ordered, non-empty sheets
///
/// Every sheet but possibly the last is filled to capacity. The sequence
/// never contains an empty sheet; callers clamp `repeat_count` to at least 1
/// (see [`crate::LayoutRequest::new`]), so the sequence is never empty either.
pub fn paginate(repeat_count: u32, capacity: &GridCapacity) -> Vec<Sheet> {
    let per_sheet = capacity.per_sheet().max(1);
    let per_row = capacity.per_row.max(1);
    let total_unfiltered = repeat_count.div_ceil(per_sheet);

    debug!(repeat_count, per_sheet, total_unfiltered, "paginating layout");

    let mut sheets = Vec::with_capacity(total_unfiltered as usize);
    for page in 0..total_unfiltered {
        let start_index = page * per_sheet;
        let end_index = (start_index + per_sheet).min(repeat_count);
        let on_page = end_index - start_index;

        // A zero count or an exact multiple must never emit an empty page
        if on_page == 0 {
            continue;
        }

        let columns = per_row.min(on_page);
        let rows = on_page.div_ceil(columns);

        sheets.push(Sheet {
            number: sheets.len() as u32 + 1,
            start_index,
            end_index,
            columns,
            rows,
            h_spacing: capacity.h_spacing,
            v_spacing: capacity.v_spacing,
            is_last: false,
        });
    }

    if let Some(last) = sheets.last_mut() {
        last.is_last = true;
    }

    trace!("emitted {} sheets", sheets.len());
    sheets
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capacity_3x6() -> GridCapacity {
        GridCapacity {
            per_row: 3,
            per_column: 6,
            h_spacing: 0.9,
            v_spacing: 0.54,
        }
    }

    #[test]
    fn exact_multiple_fills_one_sheet() {
        let sheets = paginate(18, &capacity_3x6());
        assert_eq!(sheets.len(), 1);
        assert_eq!(sheets[0].label_count(), 18);
        assert_eq!(sheets[0].columns, 3);
        assert_eq!(sheets[0].rows, 6);
        assert!(sheets[0].is_last);
    }

    #[test]
    fn remainder_spills_onto_reflowed_last_sheet() {
        let sheets = paginate(20, &capacity_3x6());
        assert_eq!(sheets.len(), 2);

        assert_eq!(sheets[0].label_count(), 18);
        assert_eq!(sheets[0].columns, 3);
        assert_eq!(sheets[0].rows, 6);
        assert!(!sheets[0].is_last);

        // 2 remaining labels lay out as a 2x1 grid, not 3 columns with a gap
        assert_eq!(sheets[1].label_count(), 2);
        assert_eq!(sheets[1].columns, 2);
        assert_eq!(sheets[1].rows, 1);
        assert_eq!(sheets[1].start_index, 18);
        assert_eq!(sheets[1].end_index, 20);
        assert!(sheets[1].is_last);
    }

    #[test]
    fn label_counts_sum_to_repeat_count() {
        let capacity = capacity_3x6();
        for repeat_count in 1..=100 {
            let sheets = paginate(repeat_count, &capacity);
            let total: u32 = sheets.iter().map(Sheet::label_count).sum();
            assert_eq!(total, repeat_count);

            // Every sheet but the last is full
            for sheet in &sheets[..sheets.len() - 1] {
                assert_eq!(sheet.label_count(), capacity.per_sheet());
            }
        }
    }

    #[test]
    fn no_empty_sheets_ever() {
        let capacity = capacity_3x6();
        for repeat_count in 0..=60 {
            let sheets = paginate(repeat_count, &capacity);
            assert!(sheets.iter().all(|s| s.label_count() > 0));
        }
    }

    #[test]
    fn zero_repeat_count_yields_empty_sequence() {
        // Upstream clamps to 1; if 0 slips through the filter still holds
        let sheets = paginate(0, &capacity_3x6());
        assert!(sheets.is_empty());
    }

    #[test]
    fn last_sheet_columns_follow_the_remainder() {
        let capacity = capacity_3x6();
        for repeat_count in 1..=60 {
            let sheets = paginate(repeat_count, &capacity);
            let remainder = repeat_count % capacity.per_sheet();
            if remainder > 0 {
                let last = sheets.last().unwrap();
                assert_eq!(last.columns, capacity.per_row.min(remainder));
                assert_eq!(last.rows, last.label_count().div_ceil(last.columns));
            }
        }
    }

    #[test]
    fn sheet_numbers_are_contiguous_from_one() {
        let sheets = paginate(55, &capacity_3x6());
        assert_eq!(sheets.len(), 4);
        for (i, sheet) in sheets.iter().enumerate() {
            assert_eq!(sheet.number, i as u32 + 1);
            assert_eq!(sheet.is_last, i == sheets.len() - 1);
        }
    }

    #[test]
    fn single_cell_capacity_paginates_one_label_per_sheet() {
        let capacity = GridCapacity {
            per_row: 1,
            per_column: 1,
            h_spacing: 0.0,
            v_spacing: 0.0,
        };
        let sheets = paginate(3, &capacity);
        assert_eq!(sheets.len(), 3);
        assert!(sheets.iter().all(|s| s.columns == 1 && s.rows == 1));
    }

    #[test]
    fn spacing_is_carried_onto_every_sheet() {
        let capacity = capacity_3x6();
        let sheets = paginate(20, &capacity);
        for sheet in &sheets {
            assert_eq!(sheet.h_spacing, capacity.h_spacing);
            assert_eq!(sheet.v_spacing, capacity.v_spacing);
        }
    }
}

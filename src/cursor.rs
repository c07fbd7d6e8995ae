//! Page navigation over a computed sheet sequence

/// 1-indexed cursor over the pages of a layout
///
/// The current page moves only through the explicit navigation methods and
/// always stays inside `[1, total_pages]`. With a single page every movement
/// is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationCursor {
    current: u32,
    total: u32,
}

impl PaginationCursor {
    /// Cursor positioned at the first page of a sequence
    pub fn new(total_pages: u32) -> Self {
        Self {
            current: 1,
            total: total_pages.max(1),
        }
    }

    /// Current page, 1-indexed
    pub fn current_page(&self) -> u32 {
        self.current
    }

    /// Total number of pages, at least 1
    pub fn total_pages(&self) -> u32 {
        self.total
    }

    /// Advance one page, saturating at the last page
    pub fn next(&mut self) {
        self.current = (self.current + 1).min(self.total);
    }

    /// Go back one page, saturating at the first page
    pub fn prev(&mut self) {
        self.current = self.current.saturating_sub(1).max(1);
    }

    /// Jump to the first page
    pub fn home(&mut self) {
        self.current = 1;
    }

    /// Jump to the last page
    pub fn end(&mut self) {
        self.current = self.total;
    }

    /// Return to page one
    ///
    /// Called whenever the label size or repeat count changes; the prior page
    /// framing is invalid after either.
    pub fn reset(&mut self) {
        self.current = 1;
    }

    /// Re-clamp after a recompute changed the number of pages
    pub fn clamp_to(&mut self, total_pages: u32) {
        self.total = total_pages.max(1);
        self.current = self.current.min(self.total);
    }
}

//! Page arithmetic and the page indicator shown under the list.
//!
//! This module only tracks which page is current and how many there are; the
//! list decides what a page contains.

/// How the page indicator is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Type {
    /// `2/5`
    Arabic,
    /// `○•○○○`
    #[default]
    Dots,
}

/// Paginator state.
#[derive(Debug, Clone)]
pub struct Model {
    /// Indicator style.
    pub paginator_type: Type,
    /// Zero-based current page.
    pub page: usize,
    /// Items per page, never zero.
    pub per_page: usize,
    /// Number of pages, never zero.
    pub total_pages: usize,
    /// Marker for the current page in dots mode.
    pub active_dot: String,
    /// Marker for other pages in dots mode.
    pub inactive_dot: String,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            paginator_type: Type::default(),
            page: 0,
            per_page: 1,
            total_pages: 1,
            active_dot: "•".to_string(),
            inactive_dot: "○".to_string(),
        }
    }
}

impl Model {
    /// Creates a single-page paginator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page size, clamped to at least one.
    pub fn set_per_page(&mut self, per_page: usize) {
        self.per_page = per_page.max(1);
    }

    /// Recomputes the page count for `items` and clamps the current page.
    pub fn set_total_items(&mut self, items: usize) {
        self.total_pages = if items == 0 {
            1
        } else {
            items.div_ceil(self.per_page)
        };
        if self.page >= self.total_pages {
            self.page = self.total_pages - 1;
        }
    }

    /// Returns `[start, end)` of the current page within `length` items.
    pub fn get_slice_bounds(&self, length: usize) -> (usize, usize) {
        let start = (self.page * self.per_page).min(length);
        let end = (start + self.per_page).min(length);
        (start, end)
    }

    /// Moves to the previous page if there is one.
    pub fn prev_page(&mut self) {
        self.page = self.page.saturating_sub(1);
    }

    /// Moves to the next page if there is one.
    pub fn next_page(&mut self) {
        if !self.on_last_page() {
            self.page += 1;
        }
    }

    /// Whether the current page is the first.
    pub fn on_first_page(&self) -> bool {
        self.page == 0
    }

    /// Whether the current page is the last.
    pub fn on_last_page(&self) -> bool {
        self.page + 1 >= self.total_pages
    }

    /// Renders the indicator.
    pub fn view(&self) -> String {
        match self.paginator_type {
            Type::Arabic => format!("{}/{}", self.page + 1, self.total_pages),
            Type::Dots => (0..self.total_pages)
                .map(|i| {
                    if i == self.page {
                        self.active_dot.as_str()
                    } else {
                        self.inactive_dot.as_str()
                    }
                })
                .collect(),
        }
    }
}

//! View composition: title bar, status bar, entry page, pagination, help.

use super::model::line_count;
use super::style::{BULLET, ELLIPSIS};
use super::types::{FilterState, Item};
use super::Model;
use crate::paginator;
use lipgloss_extras::lipgloss;

impl<I: Item + Send + Sync + 'static> Model<I> {
    /// Renders the whole list.
    pub fn view(&self) -> String {
        let mut sections = Vec::new();
        if self.shows_title_bar() {
            sections.push(self.title_view());
        }
        if self.show_status_bar {
            sections.push(self.status_view());
        }
        sections.push(self.padded_items_view());
        if self.show_pagination {
            sections.push(self.pagination_view());
        }
        if self.show_help {
            sections.push(self.help_view());
        }
        sections.join("\n")
    }

    pub(super) fn shows_title_bar(&self) -> bool {
        self.show_title || self.filter_state == FilterState::Filtering
    }

    /// Title and status message, or the filter prompt while filtering.
    pub(super) fn title_view(&self) -> String {
        let mut view = String::new();
        if self.filter_state == FilterState::Filtering {
            view.push_str(
                &self
                    .filter_input
                    .view(&self.styles.filter_prompt, &self.styles.filter_cursor),
            );
        } else if self.show_title {
            view.push_str(&self.styles.title.render(&self.title));
            if !self.status_message.is_empty() {
                view.push_str("  ");
                view.push_str(&self.status_message);
            }
        }
        self.styles.title_bar.render(&view)
    }

    /// Entry counts and filter summary.
    pub(super) fn status_view(&self) -> String {
        let total = self.items.len();
        let visible = self.len();
        let noun = if visible == 1 {
            &self.item_name_singular
        } else {
            &self.item_name_plural
        };
        let items_display = format!("{} {}", visible, noun);

        let mut status = String::new();
        if self.filter_state == FilterState::Filtering {
            if visible == 0 {
                status = self.styles.status_empty.render("Nothing matched");
            } else {
                status = items_display;
            }
        } else if total == 0 {
            status = self
                .styles
                .status_empty
                .render(&format!("No {}", self.item_name_plural));
        } else {
            if self.filter_state == FilterState::FilterApplied {
                let query = truncate_chars(self.filter_input.value().trim(), 10);
                status.push_str(
                    &self
                        .styles
                        .status_bar_active_filter
                        .render(&format!("“{}”", query)),
                );
                status.push(' ');
            }
            status.push_str(&items_display);
        }

        let num_filtered = total - visible.min(total);
        if num_filtered > 0 {
            status.push_str(&self.styles.divider_dot.render(&format!(" {} ", BULLET)));
            status.push_str(
                &self
                    .styles
                    .status_bar_filter_count
                    .render(&format!("{} filtered", num_filtered)),
            );
        }

        self.styles.status_bar.render(&status)
    }

    /// Entries on the current page, drawn by the delegate.
    pub(super) fn items_view(&self) -> String {
        if self.is_empty() {
            if self.filter_state == FilterState::Filtering {
                return String::new();
            }
            return self
                .styles
                .no_items
                .render(&format!("No {}.", self.item_name_plural));
        }

        let indices: Vec<usize> = if self.filter_state == FilterState::Unfiltered {
            (0..self.items.len()).collect()
        } else {
            self.filtered_items.iter().map(|fi| fi.index).collect()
        };
        let (start, end) = self.paginator.get_slice_bounds(indices.len());

        let mut lines = Vec::new();
        for (offset, &index) in indices[start..end].iter().enumerate() {
            lines.push(self.delegate.render(self, index, &self.items[index]));
            if start + offset + 1 < end {
                for _ in 0..self.delegate.spacing() {
                    lines.push(String::new());
                }
            }
        }
        lines.join("\n")
    }

    // Pads the entry page so pagination and help stay at the bottom.
    fn padded_items_view(&self) -> String {
        let mut view = self.items_view();
        let available = self.available_item_lines();
        let mut lines = line_count(&view).max(1);
        while lines < available {
            view.push('\n');
            lines += 1;
        }
        view
    }

    /// Page dots, or `n/m` when the dots would not fit.
    pub(super) fn pagination_view(&self) -> String {
        if self.paginator.total_pages < 2 {
            return String::new();
        }
        let mut view = self.paginator.view();
        if self.paginator.paginator_type == paginator::Type::Dots
            && lipgloss::width_visible(&view) > self.width
        {
            let mut arabic = self.paginator.clone();
            arabic.paginator_type = paginator::Type::Arabic;
            view = self.styles.status_empty.render(&arabic.view());
        }
        self.styles.pagination_style.render(&view)
    }

    /// Short or full help for the current state.
    pub(super) fn help_view(&self) -> String {
        self.styles.help_style.render(&self.help.view(self))
    }
}

fn truncate_chars(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
    out.push_str(ELLIPSIS);
    out
}

#[cfg(test)]
mod tests {
    use super::truncate_chars;

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("short", 10), "short");
        assert_eq!(truncate_chars("exactly10!", 10), "exactly10!");
        assert_eq!(truncate_chars("much too long", 10), "much too …");
    }
}

//! Styles for the parts of the list that are not entries.
//!
//! Entry styles live with [`super::DefaultDelegate`]. Colors are adaptive so
//! the list reads on light and dark terminals alike.

use lipgloss_extras::prelude::*;

/// Bullet used for pagination dots and the status bar divider.
pub const BULLET: &str = "•";

/// Marker for truncated text.
pub const ELLIPSIS: &str = "…";

/// Styles for title bar, status bar, pagination, and help.
#[derive(Debug, Clone)]
pub struct ListStyles {
    /// Container of the title or filter prompt.
    pub title_bar: Style,
    /// The title text.
    pub title: Style,
    /// `Filter: ` prompt.
    pub filter_prompt: Style,
    /// Cursor cell inside the filter prompt.
    pub filter_cursor: Style,
    /// Container of the status line.
    pub status_bar: Style,
    /// `No items` / `Nothing matched`.
    pub status_empty: Style,
    /// Query echoed in the status line.
    pub status_bar_active_filter: Style,
    /// `N filtered` count.
    pub status_bar_filter_count: Style,
    /// Placeholder for an empty list.
    pub no_items: Style,
    /// Container of the page indicator.
    pub pagination_style: Style,
    /// Container of the help line.
    pub help_style: Style,
    /// Current page dot.
    pub active_pagination_dot: Style,
    /// Other page dots.
    pub inactive_pagination_dot: Style,
    /// Divider between status parts.
    pub divider_dot: Style,
}

impl Default for ListStyles {
    fn default() -> Self {
        let very_subdued_color = AdaptiveColor {
            Light: "#DDDADA",
            Dark: "#3C3C3C",
        };
        let subdued_color = AdaptiveColor {
            Light: "#9B9B9B",
            Dark: "#5C5C5C",
        };

        Self {
            title_bar: Style::new().padding(0, 0, 1, 2),
            title: Style::new()
                .background(Color::from("62"))
                .foreground(Color::from("230"))
                .padding(0, 1, 0, 1),
            filter_prompt: Style::new().foreground(AdaptiveColor {
                Light: "#04B575",
                Dark: "#ECFD65",
            }),
            filter_cursor: Style::new().foreground(AdaptiveColor {
                Light: "#EE6FF8",
                Dark: "#EE6FF8",
            }),
            status_bar: Style::new()
                .foreground(AdaptiveColor {
                    Light: "#A49FA5",
                    Dark: "#777777",
                })
                .padding(0, 0, 1, 2),
            status_empty: Style::new().foreground(subdued_color),
            status_bar_active_filter: Style::new().foreground(AdaptiveColor {
                Light: "#1a1a1a",
                Dark: "#dddddd",
            }),
            status_bar_filter_count: Style::new().foreground(very_subdued_color.clone()),
            no_items: Style::new().foreground(AdaptiveColor {
                Light: "#909090",
                Dark: "#626262",
            }),
            pagination_style: Style::new().padding_left(2),
            help_style: Style::new().padding(1, 0, 0, 2),
            active_pagination_dot: Style::new().foreground(AdaptiveColor {
                Light: "#847A85",
                Dark: "#979797",
            }),
            inactive_pagination_dot: Style::new().foreground(very_subdued_color.clone()),
            divider_dot: Style::new().foreground(very_subdued_color),
        }
    }
}

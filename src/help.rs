//! Footer help view generated from key bindings.
//!
//! The list renders a one-line summary of its active bindings by default and a
//! column layout when the user toggles full help with `?`. Disabled bindings
//! are skipped, so the footer always reflects what the current state accepts.

use crate::key;
use lipgloss_extras::lipgloss;
use lipgloss_extras::prelude::*;

/// Anything that can describe its bindings for a help view.
pub trait KeyMap {
    /// Bindings for the compact single-line view.
    fn short_help(&self) -> Vec<&key::Binding>;
    /// Binding columns for the expanded view.
    fn full_help(&self) -> Vec<Vec<&key::Binding>>;
}

/// Styles for help text.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Style of the truncation marker.
    pub ellipsis: Style,
    /// Key legend in short help.
    pub short_key: Style,
    /// Description in short help.
    pub short_desc: Style,
    /// Separator between short help entries.
    pub short_separator: Style,
    /// Key legend in full help.
    pub full_key: Style,
    /// Description in full help.
    pub full_desc: Style,
    /// Separator between full help columns.
    pub full_separator: Style,
}

impl Default for Styles {
    fn default() -> Self {
        let key_style = Style::new().foreground(AdaptiveColor {
            Light: "#909090",
            Dark: "#626262",
        });
        let desc_style = Style::new().foreground(AdaptiveColor {
            Light: "#B2B2B2",
            Dark: "#4A4A4A",
        });
        let sep_style = Style::new().foreground(AdaptiveColor {
            Light: "#DDDADA",
            Dark: "#3C3C3C",
        });

        Self {
            ellipsis: sep_style.clone(),
            short_key: key_style.clone(),
            short_desc: desc_style.clone(),
            short_separator: sep_style.clone(),
            full_key: key_style,
            full_desc: desc_style,
            full_separator: sep_style,
        }
    }
}

/// Help view state.
#[derive(Debug, Clone)]
pub struct Model {
    /// Show the expanded column layout instead of the single line.
    pub show_all: bool,
    /// Maximum width in cells; `0` disables truncation.
    pub width: usize,
    /// Separator between short help entries.
    pub short_separator: String,
    /// Separator between full help columns.
    pub full_separator: String,
    /// Marker appended when entries are cut off.
    pub ellipsis: String,
    /// Styles for all parts of the view.
    pub styles: Styles,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            show_all: false,
            width: 0,
            short_separator: " • ".to_string(),
            full_separator: "    ".to_string(),
            ellipsis: "…".to_string(),
            styles: Styles::default(),
        }
    }
}

impl Model {
    /// Creates a help model with default styles and no width limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the width limit.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Renders either the short or the full view depending on `show_all`.
    pub fn view<K: KeyMap + ?Sized>(&self, keymap: &K) -> String {
        if self.show_all {
            self.full_help_view(keymap.full_help())
        } else {
            self.short_help_view(keymap.short_help())
        }
    }

    /// Renders bindings on one line, truncating with an ellipsis at `width`.
    pub fn short_help_view(&self, bindings: Vec<&key::Binding>) -> String {
        let separator = self
            .styles
            .short_separator
            .clone()
            .inline(true)
            .render(&self.short_separator);

        let mut builder = String::new();
        let mut total_width = 0;
        for kb in bindings.iter().filter(|b| b.enabled()) {
            let sep = if total_width > 0 { separator.as_str() } else { "" };
            let help = kb.help();
            let item = format!(
                "{}{} {}",
                sep,
                self.styles.short_key.clone().inline(true).render(&help.key),
                self.styles.short_desc.clone().inline(true).render(&help.desc)
            );
            let item_width = lipgloss::width_visible(&item);

            if let Some(tail) = self.overflow_tail(total_width, item_width) {
                builder.push_str(&tail);
                break;
            }

            total_width += item_width;
            builder.push_str(&item);
        }
        builder
    }

    /// Renders binding groups as side-by-side columns.
    pub fn full_help_view(&self, groups: Vec<Vec<&key::Binding>>) -> String {
        let separator = self
            .styles
            .full_separator
            .clone()
            .inline(true)
            .render(&self.full_separator);

        let mut columns = Vec::new();
        let mut total_width = 0;
        for group in groups.iter().filter(|g| should_render_column(g)) {
            let rows: Vec<String> = group
                .iter()
                .filter(|b| b.enabled())
                .map(|b| {
                    let help = b.help();
                    format!(
                        "{} {}",
                        self.styles.full_key.clone().inline(true).render(&help.key),
                        self.styles.full_desc.clone().inline(true).render(&help.desc)
                    )
                })
                .collect();
            let column = rows.join("\n");
            let column_width = lipgloss::width_visible(&column);

            if let Some(tail) = self.overflow_tail(total_width, column_width) {
                if !tail.is_empty() {
                    columns.push(tail);
                }
                break;
            }

            total_width += column_width;
            columns.push(column);
        }

        let mut parts: Vec<&str> = Vec::new();
        for (i, column) in columns.iter().enumerate() {
            if i > 0 {
                parts.push(separator.as_str());
            }
            parts.push(column.as_str());
        }
        lipgloss::join_horizontal(lipgloss::TOP, &parts)
    }

    // Some(tail) when the next entry would overflow; the tail is empty if even
    // the ellipsis does not fit.
    fn overflow_tail(&self, total_width: usize, item_width: usize) -> Option<String> {
        if self.width == 0 || total_width + item_width <= self.width {
            return None;
        }
        let tail = format!(
            " {}",
            self.styles
                .ellipsis
                .clone()
                .inline(true)
                .render(&self.ellipsis)
        );
        if total_width + lipgloss::width_visible(&tail) < self.width {
            Some(tail)
        } else {
            Some(String::new())
        }
    }
}

/// A column is rendered only if at least one of its bindings is enabled.
pub fn should_render_column(bindings: &[&key::Binding]) -> bool {
    bindings.iter().any(|b| b.enabled())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;

    struct Keys {
        up: key::Binding,
        down: key::Binding,
        quit: key::Binding,
    }

    impl Keys {
        fn new() -> Self {
            Self {
                up: key::Binding::new(vec![KeyCode::Up]).with_help("↑", "up"),
                down: key::Binding::new(vec![KeyCode::Down]).with_help("↓", "down"),
                quit: key::Binding::new(vec![KeyCode::Char('q')]).with_help("q", "quit"),
            }
        }
    }

    impl KeyMap for Keys {
        fn short_help(&self) -> Vec<&key::Binding> {
            vec![&self.up, &self.down, &self.quit]
        }

        fn full_help(&self) -> Vec<Vec<&key::Binding>> {
            vec![vec![&self.up, &self.down], vec![&self.quit]]
        }
    }

    fn plain(s: &str) -> String {
        strip_ansi_escapes::strip_str(s)
    }

    #[test]
    fn test_short_help_joins_entries() {
        let help = Model::new();
        assert_eq!(plain(&help.view(&Keys::new())), "↑ up • ↓ down • q quit");
    }

    #[test]
    fn test_short_help_skips_disabled() {
        let mut keys = Keys::new();
        keys.down.set_enabled(false);
        assert_eq!(plain(&Model::new().view(&keys)), "↑ up • q quit");
    }

    #[test]
    fn test_short_help_truncates_at_width() {
        let help = Model::new().with_width(12);
        let out = plain(&help.view(&Keys::new()));
        assert!(out.starts_with("↑ up"));
        assert!(out.ends_with('…'));
        assert!(!out.contains("quit"));
    }

    #[test]
    fn test_full_help_has_columns() {
        let mut help = Model::new();
        help.show_all = true;
        let out = plain(&help.view(&Keys::new()));
        assert!(out.contains("↑ up"));
        assert!(out.contains("↓ down"));
        assert!(out.contains("q quit"));
        assert!(out.lines().count() >= 2);
    }

    #[test]
    fn test_empty_column_not_rendered() {
        let mut keys = Keys::new();
        keys.quit.set_enabled(false);
        assert!(!should_render_column(&[&keys.quit]));
        assert!(should_render_column(&[&keys.quit, &keys.up]));
    }
}

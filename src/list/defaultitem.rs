//! Default delegate: a title line and a description line per entry.
//!
//! Entries are drawn in one of three looks:
//! - normal
//! - selected, with a left border
//! - dimmed, while the filter prompt is open and still empty
//!
//! Characters matched by the filter are underlined in the first two.

use super::style::ELLIPSIS;
use super::{FilterState, Item, ItemDelegate, Model};
use lipgloss_extras::lipgloss;
use lipgloss_extras::prelude::*;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

fn apply_character_highlighting(
    text: &str,
    matches: &[usize],
    highlight_style: &Style,
    normal_style: &Style,
) -> String {
    if matches.is_empty() {
        return normal_style.render(text);
    }

    let chars: Vec<char> = text.chars().collect();
    let mut sorted = matches.to_vec();
    sorted.sort_unstable();
    sorted.dedup();

    let mut result = String::new();
    let mut current = 0;
    for &idx in sorted.iter().filter(|&&i| i < chars.len()) {
        if current < idx {
            let segment: String = chars[current..idx].iter().collect();
            result.push_str(&normal_style.render(&segment));
        }
        result.push_str(&highlight_style.render(&chars[idx].to_string()));
        current = idx + 1;
    }
    if current < chars.len() {
        let rest: String = chars[current..].iter().collect();
        result.push_str(&normal_style.render(&rest));
    }
    result
}

// Cuts `s` to `width` display cells, ending with an ellipsis when shortened.
fn truncate(s: &str, width: usize) -> String {
    if UnicodeWidthStr::width(s) <= width {
        return s.to_string();
    }
    let limit = width.saturating_sub(1);
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > limit {
            break;
        }
        used += w;
        out.push(c);
    }
    if width > 0 {
        out.push_str(ELLIPSIS);
    }
    out
}

/// Styles for each look of an entry.
#[derive(Debug, Clone)]
pub struct DefaultItemStyles {
    /// Title, normal.
    pub normal_title: Style,
    /// Description, normal.
    pub normal_desc: Style,
    /// Title, selected.
    pub selected_title: Style,
    /// Description, selected.
    pub selected_desc: Style,
    /// Title, dimmed.
    pub dimmed_title: Style,
    /// Description, dimmed.
    pub dimmed_desc: Style,
    /// Applied on top of the above for matched characters.
    pub filter_match: Style,
}

impl Default for DefaultItemStyles {
    fn default() -> Self {
        let normal_title = Style::new()
            .foreground(AdaptiveColor {
                Light: "#1a1a1a",
                Dark: "#dddddd",
            })
            .padding(0, 0, 0, 2);
        let normal_desc = normal_title.clone().foreground(AdaptiveColor {
            Light: "#A49FA5",
            Dark: "#777777",
        });
        let selected_title = Style::new()
            .border_style(lipgloss::normal_border())
            .border_top(false)
            .border_right(false)
            .border_bottom(false)
            .border_left(true)
            .border_left_foreground(Color::from("#AD58B4"))
            .foreground(AdaptiveColor {
                Light: "#EE6FF8",
                Dark: "#EE6FF8",
            })
            .padding(0, 0, 0, 1);
        let selected_desc = selected_title.clone().foreground(AdaptiveColor {
            Light: "#F793FF",
            Dark: "#AD58B4",
        });
        let dimmed_title = Style::new()
            .foreground(AdaptiveColor {
                Light: "#A49FA5",
                Dark: "#777777",
            })
            .padding(0, 0, 0, 2);
        let dimmed_desc = dimmed_title.clone().foreground(AdaptiveColor {
            Light: "#C2B8C2",
            Dark: "#4D4D4D",
        });

        Self {
            normal_title,
            normal_desc,
            selected_title,
            selected_desc,
            dimmed_title,
            dimmed_desc,
            filter_match: Style::new().underline(true),
        }
    }
}

/// Draws entries as a title line plus a description line.
#[derive(Debug, Clone)]
pub struct DefaultDelegate {
    /// Draw the description line.
    pub show_description: bool,
    /// Entry styles.
    pub styles: DefaultItemStyles,
    spacing: usize,
}

impl Default for DefaultDelegate {
    fn default() -> Self {
        Self {
            show_description: true,
            styles: DefaultItemStyles::default(),
            spacing: 1,
        }
    }
}

impl DefaultDelegate {
    /// Two-line entries separated by one blank line.
    pub fn new() -> Self {
        Self::default()
    }
}

// Left padding and border width shared by all title styles.
const GUTTER: usize = 2;

impl<I: Item + Send + Sync + 'static> ItemDelegate<I> for DefaultDelegate {
    fn render(&self, m: &Model<I>, index: usize, item: &I) -> String {
        if m.width() == 0 {
            return String::new();
        }

        let text_width = m.width().saturating_sub(GUTTER);
        let title = truncate(item.title(), text_width);
        let desc = truncate(item.description(), text_width);

        let s = &self.styles;
        let is_selected = m.global_index() == Some(index);
        let empty_filter = m.filter_state() == FilterState::Filtering && m.filter_value().is_empty();
        let matches = m.matches_for_item(index).unwrap_or(&[]);

        let (title_out, desc_out) = if empty_filter {
            (s.dimmed_title.render(&title), s.dimmed_desc.render(&desc))
        } else if is_selected && m.filter_state() != FilterState::Filtering {
            let highlight = s.selected_title.clone().inherit(s.filter_match.clone());
            (
                apply_character_highlighting(&title, matches, &highlight, &s.selected_title),
                s.selected_desc.render(&desc),
            )
        } else {
            let highlight = s.normal_title.clone().inherit(s.filter_match.clone());
            (
                apply_character_highlighting(&title, matches, &highlight, &s.normal_title),
                s.normal_desc.render(&desc),
            )
        };

        if self.show_description {
            format!("{}\n{}", title_out, desc_out)
        } else {
            title_out
        }
    }

    fn height(&self) -> usize {
        if self.show_description {
            2
        } else {
            1
        }
    }

    fn spacing(&self) -> usize {
        self.spacing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Line;

    fn list(texts: &[&str]) -> Model<Line> {
        let items = texts.iter().map(|t| Line::new(*t)).collect();
        Model::new(items, DefaultDelegate::new(), 40, 20)
    }

    fn render_plain(m: &Model<Line>, index: usize) -> String {
        let d = DefaultDelegate::new();
        strip_ansi_escapes::strip_str(d.render(m, index, &m.items()[index]))
    }

    #[test]
    fn test_selected_entry_is_height_lines() {
        let m = list(&["alpha", "beta"]);
        let d = DefaultDelegate::new();
        let out = render_plain(&m, 0);
        let lines: Vec<&str> = out.split('\n').collect();
        assert_eq!(lines.len(), ItemDelegate::<Line>::height(&d));
        assert!(lines[0].starts_with('│'));
        assert!(lines[0].contains("alpha"));
        assert!(!out.contains('┌') && !out.contains('└') && !out.contains('─'));
    }

    #[test]
    fn test_unselected_entry_is_height_lines() {
        let m = list(&["alpha", "beta"]);
        let d = DefaultDelegate::new();
        let out = render_plain(&m, 1);
        assert_eq!(out.split('\n').count(), ItemDelegate::<Line>::height(&d));
        assert_eq!(out.split('\n').next().map(str::trim), Some("beta"));
    }

    #[test]
    fn test_nothing_drawn_without_width() {
        let items = vec![Line::new("alpha")];
        let m = Model::new(items, DefaultDelegate::new(), 0, 0);
        assert_eq!(render_plain(&m, 0), "");
    }

    #[test]
    fn test_truncate_fits() {
        assert_eq!(truncate("hello", 5), "hello");
        assert_eq!(truncate("", 0), "");
    }

    #[test]
    fn test_truncate_adds_ellipsis() {
        assert_eq!(truncate("hello world", 6), "hello…");
        assert_eq!(truncate("你好世界", 5), "你好…");
    }

    #[test]
    fn test_highlighting_keeps_text() {
        let plain = Style::new();
        let out = apply_character_highlighting("grape", &[4, 2, 2], &plain, &plain);
        assert_eq!(strip_ansi_escapes::strip_str(&out), "grape");
    }

    #[test]
    fn test_highlighting_ignores_out_of_range() {
        let plain = Style::new();
        let out = apply_character_highlighting("ab", &[7], &plain, &plain);
        assert_eq!(strip_ansi_escapes::strip_str(&out), "ab");
    }
}

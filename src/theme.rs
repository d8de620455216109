//! Styles owned by the application rather than the list.
//!
//! Built once at startup and handed to [`crate::app::App::new`].

use lipgloss_extras::prelude::*;

/// Application-level styles.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Frame around the whole list.
    pub app: Style,
    /// Accent for confirmation messages.
    pub status_message: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            // Unset border sides count toward the frame size, so turn them off.
            app: Style::new()
                .padding(1, 2, 1, 2)
                .border_top(false)
                .border_right(false)
                .border_bottom(false)
                .border_left(false),
            status_message: Style::new().foreground(AdaptiveColor {
                Light: "#04B575",
                Dark: "#04B575",
            }),
        }
    }
}

impl Theme {
    /// Horizontal and vertical cells taken by the app frame.
    pub fn frame_size(&self) -> (usize, usize) {
        (
            self.app.get_horizontal_frame_size() as usize,
            self.app.get_vertical_frame_size() as usize,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_frame_is_padding() {
        assert_eq!(Theme::default().frame_size(), (4, 2));
    }

    #[test]
    fn test_frame_draws_no_border() {
        let out = strip_ansi_escapes::strip_str(Theme::default().app.render("x"));
        let lines: Vec<&str> = out.split('\n').collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1].trim(), "x");
        assert!(!out.contains('│'));
    }

    #[test]
    fn test_status_style_keeps_text() {
        let out = Theme::default().status_message.render("Removed a");
        assert_eq!(strip_ansi_escapes::strip_str(out), "Removed a");
    }
}

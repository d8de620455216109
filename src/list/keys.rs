//! Key bindings for list navigation and filtering.
//!
//! ## Browsing
//!
//! - `↑/k`, `↓/j`: move the cursor
//! - `→/l/pgdn/f/d`, `←/h/pgup/b/u`: change page
//! - `g/home`, `G/end`: jump to the first or last entry
//! - `/`: start filtering, `esc`: clear an applied filter
//! - `?`: toggle full help, `q`: quit, `ctrl+c`: force quit
//!
//! ## Filtering
//!
//! - `esc`: cancel, `enter/tab/↑/↓`: apply

use crate::key::Binding;
use crossterm::event::KeyCode;

/// All bindings the list reacts to.
#[derive(Debug, Clone)]
pub struct ListKeyMap {
    /// Move up one entry.
    pub cursor_up: Binding,
    /// Move down one entry.
    pub cursor_down: Binding,
    /// Next page.
    pub next_page: Binding,
    /// Previous page.
    pub prev_page: Binding,
    /// First entry.
    pub go_to_start: Binding,
    /// Last entry.
    pub go_to_end: Binding,
    /// Open the filter prompt.
    pub filter: Binding,
    /// Drop an applied filter.
    pub clear_filter: Binding,
    /// Leave the filter prompt without applying.
    pub cancel_while_filtering: Binding,
    /// Apply the typed filter.
    pub accept_while_filtering: Binding,
    /// Expand help.
    pub show_full_help: Binding,
    /// Collapse help.
    pub close_full_help: Binding,
    /// Quit.
    pub quit: Binding,
    /// Quit from any state.
    pub force_quit: Binding,
}

impl Default for ListKeyMap {
    fn default() -> Self {
        Self {
            cursor_up: Binding::new(vec![KeyCode::Up, KeyCode::Char('k')]).with_help("↑/k", "up"),
            cursor_down: Binding::new(vec![KeyCode::Down, KeyCode::Char('j')])
                .with_help("↓/j", "down"),
            next_page: Binding::new(vec![
                KeyCode::Right,
                KeyCode::Char('l'),
                KeyCode::PageDown,
                KeyCode::Char('f'),
                KeyCode::Char('d'),
            ])
            .with_help("→/l/pgdn", "next page"),
            prev_page: Binding::new(vec![
                KeyCode::Left,
                KeyCode::Char('h'),
                KeyCode::PageUp,
                KeyCode::Char('b'),
                KeyCode::Char('u'),
            ])
            .with_help("←/h/pgup", "prev page"),
            go_to_start: Binding::new(vec![KeyCode::Home, KeyCode::Char('g')])
                .with_help("g/home", "go to start"),
            go_to_end: Binding::new(vec![KeyCode::End, KeyCode::Char('G')])
                .with_help("G/end", "go to end"),
            filter: Binding::new(vec![KeyCode::Char('/')]).with_help("/", "filter"),
            clear_filter: Binding::new(vec![KeyCode::Esc]).with_help("esc", "clear filter"),
            cancel_while_filtering: Binding::new(vec![KeyCode::Esc]).with_help("esc", "cancel"),
            accept_while_filtering: Binding::from_strs(&[
                "enter",
                "tab",
                "shift+tab",
                "ctrl+k",
                "up",
                "ctrl+j",
                "down",
            ])
            .with_help("enter", "apply filter"),
            show_full_help: Binding::new(vec![KeyCode::Char('?')]).with_help("?", "more"),
            close_full_help: Binding::new(vec![KeyCode::Char('?')]).with_help("?", "close help"),
            quit: Binding::new(vec![KeyCode::Char('q'), KeyCode::Esc]).with_help("q", "quit"),
            force_quit: Binding::from_strs(&["ctrl+c"]).with_help("ctrl+c", "force quit"),
        }
    }
}

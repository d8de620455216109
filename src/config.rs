//! Runtime settings, fixed for the life of the process.

use std::time::Duration;

/// Settings that shape the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Title shown above the list.
    pub title: String,
    /// How long confirmation messages stay visible.
    pub status_lifetime: Duration,
    /// Noun for one entry in the status bar.
    pub item_name: String,
    /// Noun for several entries in the status bar.
    pub items_name: String,
    /// Whether the help line is shown.
    pub show_help: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: "List".to_string(),
            status_lifetime: Duration::from_secs(1),
            item_name: "item".to_string(),
            items_name: "items".to_string(),
            show_help: true,
        }
    }
}

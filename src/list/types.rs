//! Core traits and value types shared by the list submodules.
//!
//! - [`Item`]: what an entry exposes to rendering and filtering
//! - [`ItemDelegate`]: how an entry is drawn
//! - [`ItemEventHandler`] and [`ListHandle`]: the seam through which key events
//!   aimed at the highlighted entry mutate the list
//! - [`Effect`] and [`Command`]: outcomes of a transition

use bubbletea_rs::{tick as bubbletea_tick, Cmd, KeyMsg, Msg};
use std::time::Duration;

/// An entry that can be displayed and filtered.
pub trait Item: Clone {
    /// Main line of the entry.
    fn title(&self) -> &str;
    /// Secondary line; may be empty.
    fn description(&self) -> &str;
    /// Text the filter matches against.
    fn filter_value(&self) -> &str;
}

/// Draws entries for the list.
///
/// `index` is the entry's absolute position in the unfiltered collection,
/// which is what [`super::Model::global_index`] reports for the cursor.
pub trait ItemDelegate<I: Item> {
    /// Renders one entry. The output must be exactly `height()` lines.
    fn render(&self, m: &super::Model<I>, index: usize, item: &I) -> String;

    /// Lines per entry.
    fn height(&self) -> usize;

    /// Blank lines between entries.
    fn spacing(&self) -> usize;
}

/// What an [`ItemEventHandler`] may see and change on the list.
pub trait ListHandle<I: Item> {
    /// The highlighted entry, if any is visible.
    fn selected_item(&self) -> Option<&I>;

    /// Absolute index of the highlighted entry in the unfiltered collection.
    fn global_index(&self) -> Option<usize>;

    /// Removes the entry at an absolute index, returning it.
    fn remove_item(&mut self, index: usize) -> Option<I>;

    /// Number of entries left in the collection, ignoring any filter.
    fn item_count(&self) -> usize;
}

/// Policy for key events the list does not consume itself.
///
/// The list only calls the handler while browsing; keys typed into the filter
/// prompt never reach it.
pub trait ItemEventHandler<I: Item> {
    /// Handles one key event against the list.
    fn handle(&self, key: &KeyMsg, list: &mut dyn ListHandle<I>) -> Effect;
}

/// Observable outcome of handling a key event.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Effect {
    /// Nothing beyond internal state changes.
    #[default]
    None,
    /// Stop the program.
    Quit,
    /// Show a transient message in the title bar.
    Status(String),
}

/// Follow-up action produced by a list transition.
///
/// Commands are plain data so transitions can be inspected; [`Command::into_cmd`]
/// turns them into engine commands at the program boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Stop the program.
    Quit,
    /// Clear status message `id` once `after` has elapsed.
    ExpireStatus {
        /// Identifier of the message to clear.
        id: u64,
        /// Delay before clearing.
        after: Duration,
    },
}

impl Command {
    /// Converts into a bubbletea-rs command.
    pub fn into_cmd(self) -> Cmd {
        match self {
            Command::Quit => bubbletea_rs::quit(),
            Command::ExpireStatus { id, after } => {
                bubbletea_tick(after, move |_| Box::new(StatusMessageTimeoutMsg { id }) as Msg)
            }
        }
    }
}

/// Delivered when a status message's lifetime is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusMessageTimeoutMsg {
    /// Identifier of the message that expired.
    pub id: u64,
}

/// Filtering state of the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterState {
    /// No filter; every entry is visible.
    Unfiltered,
    /// The user is typing into the filter prompt.
    Filtering,
    /// A filter has been accepted; only matches are visible.
    FilterApplied,
}

impl std::fmt::Display for FilterState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            FilterState::Unfiltered => "unfiltered",
            FilterState::Filtering => "filtering",
            FilterState::FilterApplied => "filter applied",
        };
        f.write_str(s)
    }
}

// A filter hit: absolute index of the entry and the matched char positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct FilteredItem {
    pub index: usize,
    pub matches: Vec<usize>,
}

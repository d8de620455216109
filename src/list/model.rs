//! The list model: construction, accessors, and layout bookkeeping.

use super::filtering::FilterInput;
use super::keys::ListKeyMap;
use super::style::{ListStyles, BULLET};
use super::types::{Command, FilterState, FilteredItem, Item, ItemDelegate, ItemEventHandler};
use crate::{help, key, paginator};
use std::sync::Arc;
use std::time::Duration;

/// Default time a status message stays on screen.
pub const DEFAULT_STATUS_MESSAGE_LIFETIME: Duration = Duration::from_secs(1);

/// A filterable, paginated list of `I`.
///
/// The cursor indexes the visible entries, which are all entries when
/// unfiltered and the filter hits otherwise. Mutations go through absolute
/// indices into the full collection.
pub struct Model<I: Item> {
    pub(super) title: String,
    pub(super) items: Vec<I>,
    pub(super) delegate: Box<dyn ItemDelegate<I> + Send + Sync>,
    pub(super) handler: Option<Arc<dyn ItemEventHandler<I> + Send + Sync>>,

    pub(super) paginator: paginator::Model,
    pub(super) width: usize,
    pub(super) height: usize,
    pub(super) styles: ListStyles,

    pub(super) show_title: bool,
    pub(super) show_status_bar: bool,
    pub(super) show_pagination: bool,
    pub(super) show_help: bool,
    pub(super) item_name_singular: String,
    pub(super) item_name_plural: String,

    pub(super) status_message: String,
    pub(super) status_message_id: u64,
    pub(super) status_message_lifetime: Duration,

    pub(super) help: help::Model,
    pub(super) keymap: ListKeyMap,
    pub(super) additional_short_help: Vec<key::Binding>,

    pub(super) filter_state: FilterState,
    pub(super) filtered_items: Vec<FilteredItem>,
    pub(super) filter_input: FilterInput,
    pub(super) cursor: usize,
}

impl<I: Item + Send + Sync + 'static> Model<I> {
    /// Creates a list over `items` drawn by `delegate` in a `width`×`height` area.
    pub fn new<D>(items: Vec<I>, delegate: D, width: usize, height: usize) -> Self
    where
        D: ItemDelegate<I> + Send + Sync + 'static,
    {
        let styles = ListStyles::default();
        let mut paginator = paginator::Model::new();
        paginator.active_dot = styles.active_pagination_dot.render(BULLET);
        paginator.inactive_dot = styles.inactive_pagination_dot.render(BULLET);

        let mut m = Self {
            title: "List".to_string(),
            items,
            delegate: Box::new(delegate),
            handler: None,
            paginator,
            width,
            height,
            styles,
            show_title: true,
            show_status_bar: true,
            show_pagination: true,
            show_help: true,
            item_name_singular: "item".to_string(),
            item_name_plural: "items".to_string(),
            status_message: String::new(),
            status_message_id: 0,
            status_message_lifetime: DEFAULT_STATUS_MESSAGE_LIFETIME,
            help: help::Model::new(),
            keymap: ListKeyMap::default(),
            additional_short_help: Vec::new(),
            filter_state: FilterState::Unfiltered,
            filtered_items: Vec::new(),
            filter_input: FilterInput::new("Filter: "),
            cursor: 0,
        };
        m.update_keybindings();
        m.update_pagination();
        m
    }

    /// Installs the handler for key events the list does not consume.
    pub fn with_handler<H>(mut self, handler: H) -> Self
    where
        H: ItemEventHandler<I> + Send + Sync + 'static,
    {
        self.handler = Some(Arc::new(handler));
        self
    }

    /// Adds bindings to the short help shown while browsing.
    pub fn with_additional_short_help(mut self, bindings: Vec<key::Binding>) -> Self {
        self.additional_short_help = bindings;
        self.update_keybindings();
        self.update_pagination();
        self
    }

    /// Sets the title.
    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    /// The title shown in the title bar.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Sets the nouns used in the status bar.
    pub fn set_item_names(&mut self, singular: &str, plural: &str) {
        self.item_name_singular = singular.to_string();
        self.item_name_plural = plural.to_string();
        self.update_pagination();
    }

    /// Shows or hides the help line.
    pub fn set_show_help(&mut self, show: bool) {
        self.show_help = show;
        self.update_pagination();
    }

    /// Sets how long status messages stay visible.
    pub fn set_status_message_lifetime(&mut self, lifetime: Duration) {
        self.status_message_lifetime = lifetime;
    }

    /// Resizes the list's content area.
    pub fn set_size(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.help.width = width;
        self.update_pagination();
    }

    /// Width of the content area.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height of the content area.
    pub fn height(&self) -> usize {
        self.height
    }

    /// All entries, ignoring the filter.
    pub fn items(&self) -> &[I] {
        &self.items
    }

    /// Entries currently visible, in display order.
    pub fn visible_items(&self) -> Vec<&I> {
        if self.filter_state == FilterState::Unfiltered {
            self.items.iter().collect()
        } else {
            self.filtered_items
                .iter()
                .filter_map(|fi| self.items.get(fi.index))
                .collect()
        }
    }

    /// The highlighted entry.
    pub fn selected_item(&self) -> Option<&I> {
        self.global_index().and_then(|i| self.items.get(i))
    }

    /// Cursor position among the visible entries.
    pub fn index(&self) -> usize {
        self.cursor
    }

    /// Absolute index of the highlighted entry in [`Self::items`].
    pub fn global_index(&self) -> Option<usize> {
        if self.filter_state == FilterState::Unfiltered {
            (self.cursor < self.items.len()).then_some(self.cursor)
        } else {
            self.filtered_items.get(self.cursor).map(|fi| fi.index)
        }
    }

    /// Number of visible entries.
    pub fn len(&self) -> usize {
        if self.filter_state == FilterState::Unfiltered {
            self.items.len()
        } else {
            self.filtered_items.len()
        }
    }

    /// Whether no entries are visible.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Current filter state.
    pub fn filter_state(&self) -> FilterState {
        self.filter_state
    }

    /// Text typed into the filter prompt.
    pub fn filter_value(&self) -> String {
        self.filter_input.value()
    }

    /// Matched character positions for an entry, by absolute index.
    pub fn matches_for_item(&self, index: usize) -> Option<&[usize]> {
        if self.filter_state == FilterState::Unfiltered {
            return None;
        }
        self.filtered_items
            .iter()
            .find(|fi| fi.index == index)
            .map(|fi| fi.matches.as_slice())
    }

    /// The status message currently displayed, empty if none.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Shows `msg` next to the title and returns the command that expires it.
    pub fn new_status_message(&mut self, msg: impl Into<String>) -> Command {
        self.status_message = msg.into();
        self.status_message_id += 1;
        Command::ExpireStatus {
            id: self.status_message_id,
            after: self.status_message_lifetime,
        }
    }

    /// Clears the status message if `id` is the one on screen.
    pub fn expire_status_message(&mut self, id: u64) {
        if id == self.status_message_id {
            self.status_message.clear();
        }
    }

    pub(super) fn hide_status_message(&mut self) {
        self.status_message.clear();
    }

    /// The key map in effect.
    pub fn keymap(&self) -> &ListKeyMap {
        &self.keymap
    }

    pub(super) fn set_cursor(&mut self, cursor: usize) {
        self.cursor = cursor.min(self.len().saturating_sub(1));
        self.paginator.page = self.cursor / self.paginator.per_page;
    }

    // Enables only the bindings that make sense in the current state.
    pub(super) fn update_keybindings(&mut self) {
        let filtering = self.filter_state == FilterState::Filtering;
        let has_items = !self.items.is_empty();
        let k = &mut self.keymap;

        k.cursor_up.set_enabled(!filtering);
        k.cursor_down.set_enabled(!filtering);
        k.next_page.set_enabled(!filtering);
        k.prev_page.set_enabled(!filtering);
        k.go_to_start.set_enabled(!filtering);
        k.go_to_end.set_enabled(!filtering);
        k.filter.set_enabled(!filtering && has_items);
        k.clear_filter
            .set_enabled(self.filter_state == FilterState::FilterApplied);
        k.cancel_while_filtering.set_enabled(filtering);
        k.accept_while_filtering.set_enabled(filtering);
        k.quit.set_enabled(!filtering);
        k.show_full_help.set_enabled(!filtering && !self.help.show_all);
        k.close_full_help.set_enabled(!filtering && self.help.show_all);

        // Extra bindings act on the highlighted entry.
        for binding in &mut self.additional_short_help {
            binding.set_enabled(has_items);
        }
    }

    // Derives the page size from the space left by title, status, pagination,
    // and help, then re-clamps page and cursor.
    pub(super) fn update_pagination(&mut self) {
        let item_height = self.delegate.height() + self.delegate.spacing();
        let available = self.available_item_lines();
        if item_height > 0 {
            self.paginator.set_per_page((available / item_height).max(1));
        }
        self.paginator.set_total_items(self.len());
        self.set_cursor(self.cursor);
    }

    pub(super) fn available_item_lines(&self) -> usize {
        let mut used = 0;
        if self.shows_title_bar() {
            used += line_count(&self.title_view());
        }
        if self.show_status_bar {
            used += line_count(&self.status_view());
        }
        if self.show_pagination {
            used += 1;
        }
        if self.show_help {
            used += line_count(&self.help_view());
        }
        self.height.saturating_sub(used)
    }
}

pub(super) fn line_count(s: &str) -> usize {
    if s.is_empty() {
        0
    } else {
        s.split('\n').count()
    }
}

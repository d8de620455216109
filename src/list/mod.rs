//! Filterable, paginated list with status messages and contextual help.
//!
//! [`Model<I>`] owns the entries, the cursor, the page, and the filter state
//! machine. Rendering is delegated per entry to an [`ItemDelegate`]; key events
//! the list does not consume itself are offered to an [`ItemEventHandler`],
//! which acts through the [`ListHandle`] view of the list.
//!
//! ### Filtering states
//! - `Unfiltered`: every entry is visible
//! - `Filtering`: the user is typing; keystrokes edit the query
//! - `FilterApplied`: the query was accepted; only matches are visible
//!
//! Transitions return [`Command`]s rather than engine commands so they can be
//! inspected directly.

pub mod defaultitem;
pub mod keys;
pub mod style;

mod api;
mod filtering;
mod model;
mod rendering;
mod types;

pub use defaultitem::{DefaultDelegate, DefaultItemStyles};
pub use filtering::FilterInput;
pub use keys::ListKeyMap;
pub use model::{Model, DEFAULT_STATUS_MESSAGE_LIFETIME};
pub use style::ListStyles;
pub use types::{
    Command, Effect, FilterState, Item, ItemDelegate, ItemEventHandler, ListHandle,
    StatusMessageTimeoutMsg,
};

use crate::{help, key};
use bubbletea_rs::KeyMsg;

impl<I: Item> help::KeyMap for Model<I> {
    fn short_help(&self) -> Vec<&key::Binding> {
        match self.filter_state {
            FilterState::Filtering => vec![
                &self.keymap.accept_while_filtering,
                &self.keymap.cancel_while_filtering,
            ],
            _ => {
                let mut bindings = vec![&self.keymap.cursor_up, &self.keymap.cursor_down];
                bindings.extend(self.additional_short_help.iter());
                bindings.extend([
                    &self.keymap.filter,
                    &self.keymap.clear_filter,
                    &self.keymap.quit,
                    &self.keymap.show_full_help,
                ]);
                bindings
            }
        }
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![
            vec![
                &self.keymap.cursor_up,
                &self.keymap.cursor_down,
                &self.keymap.next_page,
                &self.keymap.prev_page,
                &self.keymap.go_to_start,
                &self.keymap.go_to_end,
            ],
            vec![
                &self.keymap.filter,
                &self.keymap.clear_filter,
                &self.keymap.accept_while_filtering,
                &self.keymap.cancel_while_filtering,
            ],
            vec![
                &self.keymap.close_full_help,
                &self.keymap.quit,
                &self.keymap.force_quit,
            ],
        ]
    }
}

impl<I: Item + Send + Sync + 'static> Model<I> {
    /// Handles a key press in whichever mode the list is in.
    pub fn handle_key(&mut self, key: &KeyMsg) -> Vec<Command> {
        if self.filter_state == FilterState::Filtering {
            self.handle_filtering(key)
        } else {
            self.handle_browsing(key)
        }
    }

    /// Handles a key press as filter prompt input. The item handler is never
    /// consulted on this path.
    pub fn handle_filtering(&mut self, key: &KeyMsg) -> Vec<Command> {
        if self.keymap.force_quit.matches(key) {
            return vec![Command::Quit];
        }

        if self.keymap.cancel_while_filtering.matches(key) {
            tracing::debug!("filter cancelled");
            self.reset_filtering();
        } else if self.keymap.accept_while_filtering.matches(key) {
            self.accept_filter();
            tracing::debug!(state = %self.filter_state, matches = self.len(), "filter accepted");
        } else if self.filter_input.update(key) {
            self.refilter();
            self.update_keybindings();
        }
        Vec::new()
    }

    fn handle_browsing(&mut self, key: &KeyMsg) -> Vec<Command> {
        if self.keymap.force_quit.matches(key) {
            return vec![Command::Quit];
        }

        if self.keymap.clear_filter.matches(key) {
            self.reset_filtering();
        } else if self.keymap.quit.matches(key) {
            return vec![Command::Quit];
        } else if self.keymap.cursor_up.matches(key) {
            self.set_cursor(self.cursor.saturating_sub(1));
        } else if self.keymap.cursor_down.matches(key) {
            self.set_cursor(self.cursor + 1);
        } else if self.keymap.next_page.matches(key) {
            self.paginator.next_page();
            self.keep_row_on_page();
        } else if self.keymap.prev_page.matches(key) {
            self.paginator.prev_page();
            self.keep_row_on_page();
        } else if self.keymap.go_to_start.matches(key) {
            self.set_cursor(0);
        } else if self.keymap.go_to_end.matches(key) {
            self.set_cursor(self.len().saturating_sub(1));
        } else if self.keymap.filter.matches(key) {
            tracing::debug!("filter started");
            self.start_filtering();
        } else if self.keymap.show_full_help.matches(key)
            || self.keymap.close_full_help.matches(key)
        {
            self.help.show_all = !self.help.show_all;
            self.update_keybindings();
            self.update_pagination();
        } else {
            return self.delegate_key(key);
        }
        Vec::new()
    }

    // After a page change, keeps the cursor on the same row of the new page.
    fn keep_row_on_page(&mut self) {
        let per_page = self.paginator.per_page;
        self.set_cursor(self.paginator.page * per_page + self.cursor % per_page);
    }

    // Offers an unconsumed key to the item handler.
    fn delegate_key(&mut self, key: &KeyMsg) -> Vec<Command> {
        let Some(handler) = self.handler.clone() else {
            return Vec::new();
        };
        let effect = handler.handle(key, self);
        self.apply_effect(effect).into_iter().collect()
    }

    /// Turns a handler outcome into the command that realises it.
    pub fn apply_effect(&mut self, effect: Effect) -> Option<Command> {
        match effect {
            Effect::None => None,
            Effect::Quit => Some(Command::Quit),
            Effect::Status(msg) => Some(self.new_status_message(msg)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Line;
    use crossterm::event::{KeyCode, KeyModifiers};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    fn key(code: KeyCode) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn lines(texts: &[&str]) -> Vec<Line> {
        texts.iter().map(|t| Line::new(*t)).collect()
    }

    fn list(texts: &[&str]) -> Model<Line> {
        Model::new(lines(texts), DefaultDelegate::new(), 80, 40)
    }

    fn type_text(m: &mut Model<Line>, text: &str) {
        for c in text.chars() {
            m.handle_key(&key(KeyCode::Char(c)));
        }
    }

    // Records every call and the absolute index it saw.
    struct Recorder {
        calls: Arc<AtomicUsize>,
        last_index: Arc<AtomicUsize>,
    }

    impl ItemEventHandler<Line> for Recorder {
        fn handle(&self, key: &KeyMsg, list: &mut dyn ListHandle<Line>) -> Effect {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if key.key == KeyCode::Enter {
                if let Some(i) = list.global_index() {
                    self.last_index.store(i, Ordering::SeqCst);
                }
            }
            Effect::None
        }
    }

    fn recorded(texts: &[&str]) -> (Model<Line>, Arc<AtomicUsize>, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let last_index = Arc::new(AtomicUsize::new(usize::MAX));
        let m = list(texts).with_handler(Recorder {
            calls: calls.clone(),
            last_index: last_index.clone(),
        });
        (m, calls, last_index)
    }

    #[test]
    fn test_cursor_movement_is_clamped() {
        let mut m = list(&["a", "b", "c"]);
        m.handle_key(&key(KeyCode::Up));
        assert_eq!(m.index(), 0);
        m.handle_key(&key(KeyCode::Down));
        m.handle_key(&key(KeyCode::Char('j')));
        m.handle_key(&key(KeyCode::Down));
        assert_eq!(m.index(), 2);
        assert_eq!(m.selected_item().map(Line::text), Some("c"));
        m.handle_key(&key(KeyCode::Char('g')));
        assert_eq!(m.index(), 0);
        m.handle_key(&key(KeyCode::Char('G')));
        assert_eq!(m.index(), 2);
    }

    #[test]
    fn test_paging_moves_cursor_by_page() {
        let texts: Vec<String> = (0..50).map(|i| format!("line {i}")).collect();
        let refs: Vec<&str> = texts.iter().map(String::as_str).collect();
        let mut m = list(&refs);
        let per_page = m.paginator.per_page;
        assert!(per_page < 50);

        m.handle_key(&key(KeyCode::PageDown));
        assert_eq!(m.paginator.page, 1);
        assert_eq!(m.index(), per_page);

        m.handle_key(&key(KeyCode::PageUp));
        assert_eq!(m.paginator.page, 0);
        assert_eq!(m.index(), 0);

        m.handle_key(&key(KeyCode::PageUp));
        assert_eq!(m.index(), 0);

        m.handle_key(&key(KeyCode::End));
        m.handle_key(&key(KeyCode::PageDown));
        assert!(m.paginator.on_last_page());
        assert_eq!(m.index(), 49);
    }

    #[test]
    fn test_quit_keys() {
        let mut m = list(&["a"]);
        assert_eq!(m.handle_key(&key(KeyCode::Char('q'))), vec![Command::Quit]);
        assert_eq!(m.handle_key(&key(KeyCode::Esc)), vec![Command::Quit]);
        let ctrl_c = KeyMsg {
            key: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
        };
        assert_eq!(m.handle_key(&ctrl_c), vec![Command::Quit]);

        m.handle_key(&key(KeyCode::Char('/')));
        assert_eq!(m.filter_state(), FilterState::Filtering);
        assert!(m.handle_key(&key(KeyCode::Char('q'))).is_empty());
        assert_eq!(m.handle_key(&ctrl_c), vec![Command::Quit]);
    }

    #[test]
    fn test_filter_lifecycle() {
        let mut m = list(&["apple", "banana", "cherry"]);
        m.handle_key(&key(KeyCode::Char('/')));
        assert_eq!(m.filter_state(), FilterState::Filtering);
        assert_eq!(m.len(), 3);

        type_text(&mut m, "an");
        assert_eq!(m.filter_value(), "an");
        assert_eq!(m.len(), 1);
        assert_eq!(m.selected_item().map(Line::text), Some("banana"));

        m.handle_key(&key(KeyCode::Enter));
        assert_eq!(m.filter_state(), FilterState::FilterApplied);
        assert_eq!(m.len(), 1);

        // esc clears an applied filter instead of quitting
        assert!(m.handle_key(&key(KeyCode::Esc)).is_empty());
        assert_eq!(m.filter_state(), FilterState::Unfiltered);
        assert_eq!(m.len(), 3);
    }

    #[test]
    fn test_cancel_filter_restores_everything() {
        let mut m = list(&["apple", "banana"]);
        m.handle_key(&key(KeyCode::Char('/')));
        type_text(&mut m, "zzz");
        assert_eq!(m.len(), 0);
        m.handle_key(&key(KeyCode::Esc));
        assert_eq!(m.filter_state(), FilterState::Unfiltered);
        assert_eq!(m.filter_value(), "");
        assert_eq!(m.len(), 2);
    }

    #[test]
    fn test_accepting_without_matches_resets() {
        let mut m = list(&["apple"]);
        m.handle_key(&key(KeyCode::Char('/')));
        type_text(&mut m, "zzz");
        m.handle_key(&key(KeyCode::Enter));
        assert_eq!(m.filter_state(), FilterState::Unfiltered);
        assert_eq!(m.len(), 1);
    }

    #[test]
    fn test_accepting_empty_prompt_resets() {
        let mut m = list(&["apple", "banana"]);
        m.handle_key(&key(KeyCode::Char('/')));
        assert!(m.keymap().accept_while_filtering.enabled());
        m.handle_key(&key(KeyCode::Enter));
        assert_eq!(m.filter_state(), FilterState::Unfiltered);
        assert_eq!(m.len(), 2);
    }

    #[test]
    fn test_additional_help_follows_item_count() {
        let extra = key::Binding::new(vec![KeyCode::Enter]).with_help("enter", "remove");
        let mut m = list(&["a"]).with_additional_short_help(vec![extra]);
        assert!(m.additional_short_help[0].enabled());
        m.remove_item(0);
        assert!(!m.additional_short_help[0].enabled());

        let empty = list(&[]).with_additional_short_help(vec![
            key::Binding::new(vec![KeyCode::Enter]).with_help("enter", "remove"),
        ]);
        assert!(!empty.additional_short_help[0].enabled());
    }

    #[test]
    fn test_handler_not_called_while_filtering() {
        let (mut m, calls, _) = recorded(&["apple", "banana"]);
        m.handle_key(&key(KeyCode::Char('/')));
        m.handle_key(&key(KeyCode::Enter));
        type_text(&mut m, "x");
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_handler_sees_absolute_index_under_filter() {
        let (mut m, calls, last_index) = recorded(&["apple", "banana", "cherry"]);
        m.handle_key(&key(KeyCode::Char('/')));
        type_text(&mut m, "cherry");
        m.handle_key(&key(KeyCode::Enter));
        assert_eq!(m.index(), 0);

        m.handle_key(&key(KeyCode::Enter));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(last_index.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_consumed_keys_skip_handler() {
        let (mut m, calls, _) = recorded(&["a", "b"]);
        m.handle_key(&key(KeyCode::Down));
        m.handle_key(&key(KeyCode::Char('?')));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        m.handle_key(&key(KeyCode::Char('x')));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_remove_under_filter_shifts_indices() {
        let mut m = list(&["a1", "b", "a2", "a3"]);
        m.handle_key(&key(KeyCode::Char('/')));
        type_text(&mut m, "a");
        m.handle_key(&key(KeyCode::Enter));
        assert_eq!(m.len(), 3);

        let removed = ListHandle::remove_item(&mut m, 0);
        assert_eq!(removed.map(|l| l.text().to_string()), Some("a1".to_string()));
        assert_eq!(m.items().len(), 3);
        assert_eq!(m.len(), 2);
        let visible: Vec<&str> = m.visible_items().into_iter().map(Line::text).collect();
        assert!(visible.contains(&"a2"));
        assert!(visible.contains(&"a3"));
        assert!(!visible.contains(&"b"));
    }

    #[test]
    fn test_removing_last_match_resets_filter() {
        let mut m = list(&["apple", "banana"]);
        m.handle_key(&key(KeyCode::Char('/')));
        type_text(&mut m, "banana");
        m.handle_key(&key(KeyCode::Enter));
        let index = m.global_index();
        assert_eq!(index, Some(1));

        ListHandle::remove_item(&mut m, 1);
        assert_eq!(m.filter_state(), FilterState::Unfiltered);
        assert_eq!(m.len(), 1);
        assert_eq!(m.selected_item().map(Line::text), Some("apple"));
    }

    #[test]
    fn test_remove_clamps_cursor_and_rejects_bad_index() {
        let mut m = list(&["a", "b"]);
        m.handle_key(&key(KeyCode::Down));
        ListHandle::remove_item(&mut m, 1);
        assert_eq!(m.index(), 0);
        assert_eq!(m.selected_item().map(Line::text), Some("a"));
        assert!(ListHandle::remove_item(&mut m, 5).is_none());
    }

    #[test]
    fn test_status_message_expiry_matches_id() {
        let mut m = list(&["a"]);
        m.set_status_message_lifetime(Duration::from_millis(250));
        let first = m.new_status_message("one");
        let second = m.new_status_message("two");
        assert_eq!(
            second,
            Command::ExpireStatus {
                id: 2,
                after: Duration::from_millis(250)
            }
        );
        assert_ne!(first, second);

        m.expire_status_message(1);
        assert_eq!(m.status_message(), "two");
        m.expire_status_message(2);
        assert_eq!(m.status_message(), "");
    }

    #[test]
    fn test_apply_effect() {
        let mut m = list(&["a"]);
        assert_eq!(m.apply_effect(Effect::None), None);
        assert_eq!(m.apply_effect(Effect::Quit), Some(Command::Quit));
        assert!(matches!(
            m.apply_effect(Effect::Status("saved".into())),
            Some(Command::ExpireStatus { .. })
        ));
        assert_eq!(m.status_message(), "saved");
    }

    #[test]
    fn test_view_lists_entries_and_status() {
        let m = list(&["alpha", "beta"]);
        let out = strip_ansi_escapes::strip_str(m.view());
        assert!(out.contains("List"));
        assert!(out.contains("alpha"));
        assert!(out.contains("beta"));
        assert!(out.contains("2 items"));
    }

    #[test]
    fn test_view_empty_list() {
        let m = list(&[]);
        let out = strip_ansi_escapes::strip_str(m.view());
        assert!(out.contains("No items."));
    }

    #[test]
    fn test_view_shows_filter_prompt_and_counts() {
        let mut m = list(&["apple", "banana", "cherry"]);
        m.handle_key(&key(KeyCode::Char('/')));
        type_text(&mut m, "an");
        let out = strip_ansi_escapes::strip_str(m.view());
        assert!(out.contains("Filter: an"));
        assert!(out.contains("1 item"));
        assert!(out.contains("2 filtered"));

        m.handle_key(&key(KeyCode::Enter));
        let out = strip_ansi_escapes::strip_str(m.view());
        assert!(out.contains("“an”"));
    }

    #[test]
    fn test_view_is_stable() {
        let mut m = list(&["a", "b", "c"]);
        m.handle_key(&key(KeyCode::Down));
        assert_eq!(m.view(), m.view());
    }

    #[test]
    fn test_help_toggle_changes_bindings() {
        let mut m = list(&["a"]);
        assert!(m.keymap().show_full_help.enabled());
        m.handle_key(&key(KeyCode::Char('?')));
        assert!(m.keymap().close_full_help.enabled());
        assert!(!m.keymap().show_full_help.enabled());
    }
}

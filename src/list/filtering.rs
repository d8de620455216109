//! Filter prompt editing and fuzzy matching.
//!
//! Matches are ranked by [`SkimMatcherV2`] score, best first; entries with
//! equal scores keep their list order. An empty query matches everything.

use super::types::{FilterState, FilteredItem, Item};
use super::Model;
use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use lipgloss_extras::prelude::*;

/// Single-line text input behind the `Filter: ` prompt.
#[derive(Debug, Clone)]
pub struct FilterInput {
    prompt: String,
    value: Vec<char>,
    pos: usize,
    focused: bool,
}

impl FilterInput {
    /// Creates an empty, unfocused input.
    pub fn new(prompt: &str) -> Self {
        Self {
            prompt: prompt.to_string(),
            value: Vec::new(),
            pos: 0,
            focused: false,
        }
    }

    /// Current text.
    pub fn value(&self) -> String {
        self.value.iter().collect()
    }

    /// Replaces the text and moves the cursor to the end.
    pub fn set_value(&mut self, s: &str) {
        self.value = s.chars().collect();
        self.pos = self.value.len();
    }

    /// Cursor position in chars.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Starts accepting keystrokes and moves the cursor to the end.
    pub fn focus(&mut self) {
        self.focused = true;
        self.pos = self.value.len();
    }

    /// Stops accepting keystrokes.
    pub fn blur(&mut self) {
        self.focused = false;
    }

    /// Applies an editing key. Returns whether the text changed.
    pub fn update(&mut self, key: &KeyMsg) -> bool {
        if !self.focused {
            return false;
        }
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let before = self.value.len();
        match key.key {
            KeyCode::Char('a') if ctrl => self.pos = 0,
            KeyCode::Char('e') if ctrl => self.pos = self.value.len(),
            KeyCode::Char('u') if ctrl => {
                self.value.drain(..self.pos);
                self.pos = 0;
            }
            KeyCode::Char('w') if ctrl => self.delete_word_backward(),
            KeyCode::Char(_) if ctrl => {}
            KeyCode::Char(c) => {
                self.value.insert(self.pos, c);
                self.pos += 1;
                return true;
            }
            KeyCode::Backspace if self.pos > 0 => {
                self.pos -= 1;
                self.value.remove(self.pos);
            }
            KeyCode::Delete if self.pos < self.value.len() => {
                self.value.remove(self.pos);
            }
            KeyCode::Left => self.pos = self.pos.saturating_sub(1),
            KeyCode::Right => self.pos = (self.pos + 1).min(self.value.len()),
            KeyCode::Home => self.pos = 0,
            KeyCode::End => self.pos = self.value.len(),
            _ => {}
        }
        self.value.len() != before
    }

    fn delete_word_backward(&mut self) {
        let mut start = self.pos;
        while start > 0 && self.value[start - 1].is_whitespace() {
            start -= 1;
        }
        while start > 0 && !self.value[start - 1].is_whitespace() {
            start -= 1;
        }
        self.value.drain(start..self.pos);
        self.pos = start;
    }

    /// Renders prompt, text, and a block cursor when focused.
    pub fn view(&self, prompt_style: &Style, cursor_style: &Style) -> String {
        let mut out = prompt_style.render(&self.prompt);
        let before: String = self.value[..self.pos].iter().collect();
        out.push_str(&before);
        if self.focused {
            let under = self.value.get(self.pos).copied().unwrap_or(' ');
            out.push_str(&cursor_style.clone().reverse(true).render(&under.to_string()));
            let after: String = self.value.iter().skip(self.pos + 1).collect();
            out.push_str(&after);
        } else {
            let after: String = self.value[self.pos..].iter().collect();
            out.push_str(&after);
        }
        out
    }
}

/// Ranks `items` against `query`, best match first.
pub(super) fn filter_items<I: Item>(items: &[I], query: &str) -> Vec<FilteredItem> {
    if query.is_empty() {
        return (0..items.len())
            .map(|index| FilteredItem {
                index,
                matches: Vec::new(),
            })
            .collect();
    }

    let matcher = SkimMatcherV2::default();
    let mut scored: Vec<(i64, FilteredItem)> = items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| {
            matcher
                .fuzzy_indices(item.filter_value(), query)
                .map(|(score, matches)| (score, FilteredItem { index, matches }))
        })
        .collect();
    // Stable, so equal scores stay in list order.
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.into_iter().map(|(_, fi)| fi).collect()
}

impl<I: Item + Send + Sync + 'static> Model<I> {
    /// Opens the filter prompt with every entry visible.
    pub(super) fn start_filtering(&mut self) {
        self.hide_status_message();
        self.filter_state = FilterState::Filtering;
        self.filter_input.focus();
        self.refilter();
        self.update_keybindings();
    }

    /// Re-runs the query and moves the cursor to the best match.
    pub(super) fn refilter(&mut self) {
        self.filtered_items = filter_items(&self.items, &self.filter_input.value());
        self.cursor = 0;
        self.paginator.page = 0;
        self.update_pagination();
    }

    /// Accepts the typed query. An empty query or no hits resets the filter.
    pub(super) fn accept_filter(&mut self) {
        self.hide_status_message();
        if self.filtered_items.is_empty() || self.filter_input.value().is_empty() {
            self.reset_filtering();
            return;
        }
        self.filter_input.blur();
        self.filter_state = FilterState::FilterApplied;
        self.update_keybindings();
        self.update_pagination();
    }

    /// Drops any filter and returns to the top of the full list.
    pub fn reset_filtering(&mut self) {
        self.filter_input.set_value("");
        self.filter_input.blur();
        self.filter_state = FilterState::Unfiltered;
        self.filtered_items.clear();
        self.cursor = 0;
        self.paginator.page = 0;
        self.update_keybindings();
        self.update_pagination();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn ctrl(c: char) -> KeyMsg {
        KeyMsg {
            key: KeyCode::Char(c),
            modifiers: KeyModifiers::CONTROL,
        }
    }

    #[derive(Clone)]
    struct Word(&'static str);

    impl Item for Word {
        fn title(&self) -> &str {
            self.0
        }
        fn description(&self) -> &str {
            ""
        }
        fn filter_value(&self) -> &str {
            self.0
        }
    }

    #[test]
    fn test_input_ignores_keys_when_blurred() {
        let mut input = FilterInput::new("> ");
        assert!(!input.update(&key(KeyCode::Char('x'))));
        assert_eq!(input.value(), "");
    }

    #[test]
    fn test_input_editing() {
        let mut input = FilterInput::new("> ");
        input.focus();
        for c in "hello world".chars() {
            input.update(&key(KeyCode::Char(c)));
        }
        assert_eq!(input.value(), "hello world");

        assert!(input.update(&ctrl('w')));
        assert_eq!(input.value(), "hello ");

        input.update(&key(KeyCode::Home));
        assert_eq!(input.position(), 0);
        assert!(input.update(&key(KeyCode::Delete)));
        assert_eq!(input.value(), "ello ");

        input.update(&key(KeyCode::End));
        assert!(input.update(&key(KeyCode::Backspace)));
        assert_eq!(input.value(), "ello");

        input.update(&key(KeyCode::Left));
        input.update(&key(KeyCode::Left));
        assert!(input.update(&ctrl('u')));
        assert_eq!(input.value(), "lo");
        assert_eq!(input.position(), 0);
    }

    #[test]
    fn test_cursor_moves_do_not_change_value() {
        let mut input = FilterInput::new("> ");
        input.focus();
        input.set_value("abc");
        assert!(!input.update(&key(KeyCode::Left)));
        assert!(!input.update(&ctrl('a')));
        assert!(!input.update(&key(KeyCode::Backspace)));
        assert_eq!(input.value(), "abc");
        assert_eq!(input.position(), 0);
    }

    #[test]
    fn test_empty_query_matches_everything_in_order() {
        let items = [Word("b"), Word("a"), Word("c")];
        let hits = filter_items(&items, "");
        let indices: Vec<usize> = hits.iter().map(|h| h.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
        assert!(hits.iter().all(|h| h.matches.is_empty()));
    }

    #[test]
    fn test_query_drops_non_matches_and_records_positions() {
        let items = [Word("apple"), Word("banana"), Word("grape")];
        let hits = filter_items(&items, "ape");
        let indices: Vec<usize> = hits.iter().map(|h| h.index).collect();
        assert!(indices.contains(&2));
        assert!(!indices.contains(&1));
        let grape = hits.iter().find(|h| h.index == 2).map(|h| h.matches.clone());
        assert_eq!(grape, Some(vec![2, 3, 4]));
    }

    #[test]
    fn test_better_match_ranks_first() {
        let items = [Word("a_x_b_x_c"), Word("abc")];
        let hits = filter_items(&items, "abc");
        assert_eq!(hits.first().map(|h| h.index), Some(1));
    }
}

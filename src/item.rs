//! The list entry: one line of input.

use crate::list::Item;
use std::fmt;

/// One input line. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Line {
    text: String,
}

impl Line {
    /// Wraps a line of text, without its terminator.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The line as read.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl Item for Line {
    fn title(&self) -> &str {
        &self.text
    }

    fn description(&self) -> &str {
        ""
    }

    fn filter_value(&self) -> &str {
        &self.text
    }
}

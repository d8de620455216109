//! What pressing enter on the highlighted line does: strike it off.
//!
//! The line is removed from the list. Removing the last line ends the program;
//! otherwise a `Removed <line>` confirmation is shown.

use crate::item::Line;
use crate::key::Binding;
use crate::list::{Effect, Item, ItemEventHandler, ListHandle};
use bubbletea_rs::KeyMsg;
use crossterm::event::KeyCode;
use lipgloss_extras::prelude::*;

/// Removes the highlighted line on confirm.
#[derive(Debug, Clone)]
pub struct RemoveOnConfirm {
    confirm: Binding,
    status_style: Style,
}

impl RemoveOnConfirm {
    /// Confirms with enter and styles the confirmation with `status_style`.
    pub fn new(status_style: Style) -> Self {
        Self {
            confirm: Binding::new(vec![KeyCode::Enter]).with_help("enter", "remove"),
            status_style,
        }
    }

    /// The confirm binding, for help views.
    pub fn confirm(&self) -> &Binding {
        &self.confirm
    }
}

impl ItemEventHandler<Line> for RemoveOnConfirm {
    fn handle(&self, key: &KeyMsg, list: &mut dyn ListHandle<Line>) -> Effect {
        let Some(title) = list.selected_item().map(|item| item.title().to_string()) else {
            return Effect::None;
        };
        if !self.confirm.matches(key) {
            return Effect::None;
        }
        let Some(index) = list.global_index() else {
            return Effect::None;
        };

        list.remove_item(index);
        if list.item_count() == 0 {
            tracing::info!("last item removed, quitting");
            return Effect::Quit;
        }
        Effect::Status(self.status_style.render(&format!("Removed {}", title)))
    }
}

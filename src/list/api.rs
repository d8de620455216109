//! [`ListHandle`] implementation: the mutations item handlers may perform.

use super::types::{FilterState, Item, ListHandle};
use super::Model;

impl<I: Item + Send + Sync + 'static> ListHandle<I> for Model<I> {
    fn selected_item(&self) -> Option<&I> {
        Model::selected_item(self)
    }

    fn global_index(&self) -> Option<usize> {
        Model::global_index(self)
    }

    fn remove_item(&mut self, index: usize) -> Option<I> {
        if index >= self.items.len() {
            return None;
        }
        let removed = self.items.remove(index);

        if self.filter_state != FilterState::Unfiltered {
            self.filtered_items.retain(|fi| fi.index != index);
            for fi in &mut self.filtered_items {
                if fi.index > index {
                    fi.index -= 1;
                }
            }
            if self.filtered_items.is_empty() {
                tracing::debug!("filter has no matches left, resetting");
                self.reset_filtering();
            }
        }

        tracing::debug!(index, remaining = self.items.len(), "removed item");
        self.update_keybindings();
        self.update_pagination();
        Some(removed)
    }

    fn item_count(&self) -> usize {
        self.items.len()
    }
}

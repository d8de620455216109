//! The application model: one list, framed, driven by terminal events.
//!
//! [`App::on_event`] is the whole state machine. Resizes shrink the list by the
//! frame, keys go to the list (only to its filter prompt while the user is
//! typing a filter), and status timeouts clear confirmation messages. The
//! bubbletea-rs [`Model`](BubbleTeaModel) impl only translates messages to
//! [`Event`]s and [`Command`]s to engine commands.

use crate::config::Settings;
use crate::item::Line;
use crate::list::{self, Command, DefaultDelegate, FilterState, StatusMessageTimeoutMsg};
use crate::selection::RemoveOnConfirm;
use crate::theme::Theme;
use bubbletea_rs::{batch, Cmd, KeyMsg, Model as BubbleTeaModel, Msg, WindowSizeMsg};
use once_cell::sync::Lazy;
use std::sync::Mutex;

// The engine's init() takes no arguments, so main stages the app here first.
static STAGED: Lazy<Mutex<Option<App>>> = Lazy::new(|| Mutex::new(None));

/// Hands a fully built app to the next [`BubbleTeaModel::init`] call.
pub fn stage(app: App) {
    if let Ok(mut slot) = STAGED.lock() {
        *slot = Some(app);
    }
}

fn take_staged() -> Option<App> {
    STAGED.lock().ok().and_then(|mut slot| slot.take())
}

/// Everything the app reacts to.
#[derive(Debug, Clone)]
pub enum Event {
    /// The terminal now has this many cells.
    Resize {
        /// Columns.
        width: usize,
        /// Rows.
        height: usize,
    },
    /// A key press.
    Key(KeyMsg),
    /// A status message's lifetime ran out.
    StatusExpired(u64),
}

impl Event {
    /// Decodes an engine message; messages the app does not handle yield `None`.
    pub fn from_msg(msg: &Msg) -> Option<Self> {
        if let Some(size) = msg.downcast_ref::<WindowSizeMsg>() {
            return Some(Event::Resize {
                width: usize::from(size.width),
                height: usize::from(size.height),
            });
        }
        if let Some(key) = msg.downcast_ref::<KeyMsg>() {
            return Some(Event::Key(KeyMsg {
                key: key.key,
                modifiers: key.modifiers,
            }));
        }
        if let Some(timeout) = msg.downcast_ref::<StatusMessageTimeoutMsg>() {
            return Some(Event::StatusExpired(timeout.id));
        }
        None
    }
}

/// Top-level state.
pub struct App {
    list: list::Model<Line>,
    theme: Theme,
}

impl App {
    /// Builds the list over `items` with the remove-on-enter policy installed.
    ///
    /// The size starts at zero and is set by the first resize event.
    pub fn new(items: Vec<Line>, settings: &Settings, theme: Theme) -> Self {
        let handler = RemoveOnConfirm::new(theme.status_message.clone());
        let confirm = handler.confirm().clone();

        let mut list = list::Model::new(items, DefaultDelegate::new(), 0, 0)
            .with_title(&settings.title)
            .with_additional_short_help(vec![confirm])
            .with_handler(handler);
        list.set_item_names(&settings.item_name, &settings.items_name);
        list.set_status_message_lifetime(settings.status_lifetime);
        list.set_show_help(settings.show_help);

        Self { list, theme }
    }

    /// The list being shown.
    pub fn list(&self) -> &list::Model<Line> {
        &self.list
    }

    /// Applies one event and returns the follow-up commands it produced.
    pub fn on_event(&mut self, event: Event) -> Vec<Command> {
        match event {
            Event::Resize { width, height } => {
                let (h, v) = self.theme.frame_size();
                tracing::debug!(width, height, "resize");
                self.list
                    .set_size(width.saturating_sub(h), height.saturating_sub(v));
                Vec::new()
            }
            // Enter may accept the filter here; it must not reach the
            // remove-on-enter handler.
            Event::Key(key) if self.list.filter_state() == FilterState::Filtering => {
                self.list.handle_filtering(&key)
            }
            Event::Key(key) => self.list.handle_key(&key),
            Event::StatusExpired(id) => {
                self.list.expire_status_message(id);
                Vec::new()
            }
        }
    }

    /// The list inside the app frame.
    pub fn view(&self) -> String {
        self.theme.app.render(&self.list.view())
    }
}

impl BubbleTeaModel for App {
    fn init() -> (Self, Option<Cmd>) {
        let app = take_staged()
            .unwrap_or_else(|| App::new(Vec::new(), &Settings::default(), Theme::default()));
        (app, None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        let event = Event::from_msg(&msg)?;
        let mut cmds: Vec<Cmd> = self
            .on_event(event)
            .into_iter()
            .map(Command::into_cmd)
            .collect();
        match cmds.len() {
            0 => None,
            1 => cmds.pop(),
            _ => Some(batch(cmds)),
        }
    }

    fn view(&self) -> String {
        App::view(self)
    }
}

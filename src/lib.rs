//! # whittle
//!
//! Reads lines from standard input and shows them as a filterable list in the
//! terminal. Pressing enter on a line removes it; the program exits once the
//! last line is gone, or when the user quits.
//!
//! ```text
//! git branch --merged | whittle
//! ```
//!
//! The crate is split the way its parts depend on each other:
//!
//! - [`ingest`] turns standard input into [`item::Line`]s
//! - [`list`] is the list widget: cursor, pages, filter, status messages
//! - [`selection`] is the enter-to-remove policy plugged into the list
//! - [`app`] frames the list and routes terminal events to it
//!
//! [`key`], [`help`] and [`paginator`] are small building blocks of the list.

#![warn(missing_docs)]

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod help;
pub mod ingest;
pub mod item;
pub mod key;
pub mod list;
pub mod logging;
pub mod paginator;
pub mod selection;
pub mod theme;

pub use app::{App, Event};
pub use config::Settings;
pub use error::{Error, Result};
pub use item::Line;
pub use theme::Theme;

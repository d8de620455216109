//! Command line flags.

use crate::config::Settings;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Pipe lines in, press enter to strike them off; exits when none are left.
#[derive(Debug, Parser)]
#[command(name = "whittle")]
#[command(version)]
pub struct Cli {
    /// Title shown above the list
    #[arg(long, default_value = "List")]
    pub title: String,

    /// How long the "Removed ..." message stays visible, in milliseconds
    #[arg(long, value_name = "MS", default_value_t = 1000)]
    pub status_lifetime: u64,

    /// Noun for a single entry in the status bar
    #[arg(long, default_value = "item")]
    pub item_name: String,

    /// Noun for several entries in the status bar
    #[arg(long, default_value = "items")]
    pub items_name: String,

    /// Hide the key help line
    #[arg(long)]
    pub no_help: bool,

    /// Append logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log level used with --log-file
    #[arg(long, default_value = "info")]
    pub log_level: tracing::Level,
}

impl Cli {
    /// Freezes the flags into [`Settings`].
    pub fn settings(&self) -> Settings {
        Settings {
            title: self.title.clone(),
            status_lifetime: Duration::from_millis(self.status_lifetime),
            item_name: self.item_name.clone(),
            items_name: self.items_name.clone(),
            show_help: !self.no_help,
        }
    }
}

//! Optional file logging.
//!
//! The terminal belongs to the list view, so logs only go to a file and only
//! when one is requested.

use crate::error::{Error, Result};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing::Level;

/// Installs a plain-text subscriber appending to `path`, or nothing if `None`.
pub fn init(path: Option<&Path>, level: Level) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| Error::LogFile {
            path: path.to_path_buf(),
            source,
        })?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(level)
        .try_init()
        .map_err(|e| Error::Logger(e.to_string()))?;

    tracing::debug!(path = %path.display(), %level, "logging started");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_path_installs_nothing() {
        assert!(init(None, Level::INFO).is_ok());
    }

    #[test]
    fn test_unopenable_path_is_reported() {
        let path = Path::new("/nonexistent-dir/whittle/test.log");
        let err = init(Some(path), Level::INFO).unwrap_err();
        assert!(matches!(err, Error::LogFile { .. }));
        assert!(err.to_string().contains("test.log"));
    }
}

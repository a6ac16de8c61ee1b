//! Test utilities and fixtures for vitrine tests.
//!
//! Provides common mock factories and an in-memory settings handle to
//! reduce boilerplate in tests.
//!
//! # Example
//!
//! ```ignore
//! use vitrine::test_utils::{memory_settings, mock_album};
//!
//! #[test]
//! fn test_something() {
//!     let settings = memory_settings();
//!     let album = mock_album("key");
//!     // ... test logic
//! }
//! ```

use std::sync::Arc;

use crate::model::{AlbumData, AlbumModel, Translator};
use crate::settings::{Settings, SettingsHandle};

/// Translator that wraps keys in brackets, so tests can tell resolved
/// metadata from translation fallbacks.
pub struct StubTranslator;

impl Translator for StubTranslator {
    fn translate(&self, key: &str) -> String {
        format!("[{key}]")
    }
}

/// Creates mock AlbumData with sensible defaults.
///
/// Customize using struct update syntax:
///
/// ```ignore
/// let data = AlbumData {
///     year: Some(1984),
///     ..mock_album_data("key")
/// };
/// ```
pub fn mock_album_data(key: &str) -> AlbumData {
    AlbumData {
        album_key: key.to_string(),
        album_title: Some("Test Album".to_string()),
        album_artists: vec!["Test Artist".to_string()],
        ..AlbumData::default()
    }
}

/// Creates a mock AlbumModel with the given key and a stub translator.
pub fn mock_album(key: &str) -> AlbumModel {
    AlbumModel::new(mock_album_data(key), Arc::new(StubTranslator))
}

/// Creates a mock AlbumModel with a release year, for ordering tests.
pub fn mock_album_with_year(key: &str, year: i32) -> AlbumModel {
    AlbumModel::new(
        AlbumData {
            year: Some(year),
            ..mock_album_data(key)
        },
        Arc::new(StubTranslator),
    )
}

/// Creates a shared settings handle with no backing file.
///
/// Saves through this handle are no-ops, so tests never touch the real
/// config directory.
pub fn memory_settings() -> SettingsHandle {
    Settings::in_memory().into_handle()
}

/// Initialize tracing for a test, respecting RUST_LOG.
///
/// Safe to call from every test; only the first call installs the
/// subscriber.
pub fn init_test_logging() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_album_defaults() {
        let album = mock_album("key-1");
        assert_eq!(album.album_key(), "key-1");
        assert_eq!(album.album_title(), "Test Album");
        assert_eq!(album.album_artist(), "Test Artist");
        assert_eq!(album.year(), None);
    }

    #[test]
    fn test_mock_album_with_year() {
        let album = mock_album_with_year("key-1", 1984);
        assert_eq!(album.year(), Some(1984));
    }

    #[test]
    fn test_memory_settings_have_defaults() {
        let settings = memory_settings();
        assert_eq!(settings.read().albums_right_pane_width_percent, 30);
    }
}

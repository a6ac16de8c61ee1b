//! Core data models for the album collection.
//!
//! Defines the raw metadata record [`AlbumData`] and the display model
//! [`AlbumModel`] that the collection pane works with. Display strings
//! for missing metadata come from a host-supplied [`Translator`], so
//! the crate never hardcodes user-facing text.

use chrono::{DateTime, Utc};
use std::fmt;
use std::sync::Arc;

/// Translation key for an album without a title.
pub const UNKNOWN_ALBUM_KEY: &str = "unknown-album";
/// Translation key for an album without any artist.
pub const UNKNOWN_ARTIST_KEY: &str = "unknown-artist";

/// Host-supplied localization collaborator.
///
/// The host application owns the translation catalog; tests supply a
/// stub that echoes keys back.
pub trait Translator {
    /// Resolve a translation key to a display string.
    fn translate(&self, key: &str) -> String;
}

/// Raw album metadata as produced by the album provider.
#[derive(Debug, Clone, Default)]
pub struct AlbumData {
    /// Stable key identifying the album within the library
    pub album_key: String,
    /// Album title (missing for untagged files)
    pub album_title: Option<String>,
    /// Album artists, in tag order
    pub album_artists: Vec<String>,
    /// Track artists, used as a fallback when no album artist is tagged
    pub artists: Vec<String>,
    /// Release year
    pub year: Option<i32>,
    /// When the album was added to the library
    pub date_added: Option<DateTime<Utc>>,
    /// Oldest file-creation date among the album's tracks
    pub date_file_created: Option<DateTime<Utc>>,
    /// When a track of this album was last played
    pub date_last_played: Option<DateTime<Utc>>,
    /// Artwork cache id, if artwork was indexed
    pub artwork_id: Option<String>,
}

/// Display model for a single album in the collection pane.
///
/// Wraps [`AlbumData`] and resolves title/artist fallbacks through the
/// host's [`Translator`]. Identity is the album key: two models with
/// the same key compare equal regardless of the rest of the metadata.
#[derive(Clone)]
pub struct AlbumModel {
    data: AlbumData,
    translator: Arc<dyn Translator>,
}

impl AlbumModel {
    pub fn new(data: AlbumData, translator: Arc<dyn Translator>) -> Self {
        Self { data, translator }
    }

    /// Stable key identifying this album.
    pub fn album_key(&self) -> &str {
        &self.data.album_key
    }

    /// Album title, falling back to the translated "unknown album" string.
    pub fn album_title(&self) -> String {
        match self.data.album_title.as_deref() {
            Some(title) if !title.trim().is_empty() => title.to_string(),
            _ => self.translator.translate(UNKNOWN_ALBUM_KEY),
        }
    }

    /// Primary display artist.
    ///
    /// Prefers the first album artist, then the first track artist,
    /// then the translated "unknown artist" string.
    pub fn album_artist(&self) -> String {
        self.data
            .album_artists
            .iter()
            .chain(self.data.artists.iter())
            .find(|a| !a.trim().is_empty())
            .cloned()
            .unwrap_or_else(|| self.translator.translate(UNKNOWN_ARTIST_KEY))
    }

    pub fn year(&self) -> Option<i32> {
        self.data.year
    }

    pub fn date_added(&self) -> Option<DateTime<Utc>> {
        self.data.date_added
    }

    pub fn date_file_created(&self) -> Option<DateTime<Utc>> {
        self.data.date_file_created
    }

    pub fn date_last_played(&self) -> Option<DateTime<Utc>> {
        self.data.date_last_played
    }

    pub fn artwork_id(&self) -> Option<&str> {
        self.data.artwork_id.as_deref()
    }
}

impl PartialEq for AlbumModel {
    fn eq(&self, other: &Self) -> bool {
        self.data.album_key == other.data.album_key
    }
}

impl Eq for AlbumModel {}

impl fmt::Debug for AlbumModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlbumModel")
            .field("album_key", &self.data.album_key)
            .field("album_title", &self.data.album_title)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{StubTranslator, mock_album, mock_album_data};

    #[test]
    fn test_album_title_from_metadata() {
        let album = mock_album("album-1");
        assert_eq!(album.album_title(), "Test Album");
    }

    #[test]
    fn test_album_title_falls_back_to_translation() {
        let data = AlbumData {
            album_title: None,
            ..mock_album_data("album-1")
        };
        let album = AlbumModel::new(data, Arc::new(StubTranslator));
        assert_eq!(album.album_title(), format!("[{UNKNOWN_ALBUM_KEY}]"));
    }

    #[test]
    fn test_blank_album_title_falls_back_to_translation() {
        let data = AlbumData {
            album_title: Some("   ".to_string()),
            ..mock_album_data("album-1")
        };
        let album = AlbumModel::new(data, Arc::new(StubTranslator));
        assert_eq!(album.album_title(), format!("[{UNKNOWN_ALBUM_KEY}]"));
    }

    #[test]
    fn test_album_artist_prefers_album_artists() {
        let data = AlbumData {
            album_artists: vec!["Album Artist".to_string()],
            artists: vec!["Track Artist".to_string()],
            ..mock_album_data("album-1")
        };
        let album = AlbumModel::new(data, Arc::new(StubTranslator));
        assert_eq!(album.album_artist(), "Album Artist");
    }

    #[test]
    fn test_album_artist_falls_back_to_track_artists() {
        let data = AlbumData {
            album_artists: vec![],
            artists: vec!["Track Artist".to_string()],
            ..mock_album_data("album-1")
        };
        let album = AlbumModel::new(data, Arc::new(StubTranslator));
        assert_eq!(album.album_artist(), "Track Artist");
    }

    #[test]
    fn test_album_artist_falls_back_to_translation() {
        let data = AlbumData {
            album_artists: vec![],
            artists: vec![],
            ..mock_album_data("album-1")
        };
        let album = AlbumModel::new(data, Arc::new(StubTranslator));
        assert_eq!(album.album_artist(), format!("[{UNKNOWN_ARTIST_KEY}]"));
    }

    #[test]
    fn test_equality_is_key_based() {
        let a = mock_album("same-key");
        let b = AlbumModel::new(
            AlbumData {
                album_title: Some("A different title".to_string()),
                ..mock_album_data("same-key")
            },
            Arc::new(StubTranslator),
        );
        assert_eq!(a, b);
        assert_ne!(a, mock_album("other-key"));
    }
}

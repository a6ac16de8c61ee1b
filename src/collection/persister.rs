//! Settings-backed persistence for the albums pane.

use crate::collection::order::AlbumOrder;
use crate::collection::traits::AlbumsPersistence;
use crate::model::AlbumModel;
use crate::settings::{self, SettingsHandle};

/// Adapter that reads and writes the albums pane's persisted state
/// (sort order and selected album) on the shared settings record.
///
/// Writes update the in-memory record and flush to disk best-effort;
/// disk failures are logged by the settings layer and never reach the
/// pane.
pub struct AlbumsPersister {
    settings: SettingsHandle,
}

impl AlbumsPersister {
    pub fn new(settings: SettingsHandle) -> Self {
        Self { settings }
    }
}

impl AlbumsPersistence for AlbumsPersister {
    fn active_album_order(&self) -> AlbumOrder {
        self.settings.read().albums_active_order
    }

    fn save_active_album_order(&self, order: AlbumOrder) {
        tracing::debug!(target: "collection::persister", "Saving album order: {:?}", order);
        self.settings.write().albums_active_order = order;
        settings::flush(&self.settings);
    }

    fn active_album(&self, albums: &[AlbumModel]) -> Option<AlbumModel> {
        let key = self.settings.read().albums_selected_album.clone()?;
        let resolved = albums.iter().find(|a| a.album_key() == key).cloned();
        if resolved.is_none() {
            tracing::debug!(target: "collection::persister", "Persisted album {:?} not in library", key);
        }
        resolved
    }

    fn save_active_album(&self, album: Option<&AlbumModel>) {
        let key = album.map(|a| a.album_key().to_string());
        tracing::debug!(target: "collection::persister", "Saving active album: {:?}", key);
        self.settings.write().albums_selected_album = key;
        settings::flush(&self.settings);
    }
}

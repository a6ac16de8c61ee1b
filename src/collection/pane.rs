//! The album-collection pane component.
//!
//! Holds the pane's state between host callbacks: the album list, the
//! active (selected) album, the active sort order, and the split sizes
//! of the two pane halves. The host framework constructs the pane once,
//! calls [`CollectionAlbumsPane::initialize`] when the view is shown,
//! and forwards user interactions to the remaining methods.

use crate::collection::order::{self, AlbumOrder};
use crate::collection::traits::{AlbumProvider, AlbumsPersistence, PlaybackController};
use crate::model::AlbumModel;
use crate::settings::{self, SettingsHandle};

/// State behind the collection view's albums pane.
///
/// Invariant: `left_pane_size + right_pane_size == 100` after
/// construction and after every resize.
pub struct CollectionAlbumsPane {
    playback: Box<dyn PlaybackController>,
    album_provider: Box<dyn AlbumProvider>,
    persister: Box<dyn AlbumsPersistence>,
    settings: SettingsHandle,

    left_pane_size: u32,
    right_pane_size: u32,

    albums: Vec<AlbumModel>,
    active_album: Option<AlbumModel>,
    active_album_order: AlbumOrder,
}

impl CollectionAlbumsPane {
    /// Build the pane with its four collaborators.
    ///
    /// Reads the persisted right-pane width and derives the left width
    /// as its complement. A hand-edited settings value above 100 is
    /// clamped so the size invariant holds.
    pub fn new(
        playback: Box<dyn PlaybackController>,
        album_provider: Box<dyn AlbumProvider>,
        persister: Box<dyn AlbumsPersistence>,
        settings: SettingsHandle,
    ) -> Self {
        let stored = settings.read().albums_right_pane_width_percent;
        if stored > 100 {
            tracing::warn!(target: "collection::pane", "Right pane width {} out of range, clamping to 100", stored);
        }
        let right_pane_size = u32::from(stored.min(100));

        Self {
            playback,
            album_provider,
            persister,
            settings,
            left_pane_size: 100 - right_pane_size,
            right_pane_size,
            albums: Vec::new(),
            active_album: None,
            active_album_order: AlbumOrder::default(),
        }
    }

    /// Lifecycle hook, called once by the host when the view is shown.
    ///
    /// Restores the sort order from settings, fills the album list if
    /// it is still empty, and restores the previous selection if none
    /// is set yet.
    pub fn initialize(&mut self) {
        self.set_active_album_order(self.persister.active_album_order());

        if self.albums.is_empty() {
            self.albums = self.album_provider.get_all_albums();
            tracing::debug!(target: "collection::pane", "Loaded {} albums", self.albums.len());
        }

        if self.active_album.is_none() {
            self.active_album = self.persister.active_album(&self.albums);
        }
    }

    /// The sort order last applied to the album list.
    pub fn active_album_order(&self) -> AlbumOrder {
        self.active_album_order
    }

    /// Set the sort order and persist it.
    ///
    /// Persists on every assignment, including re-assignment of the
    /// current value.
    pub fn set_active_album_order(&mut self, order: AlbumOrder) {
        tracing::debug!(target: "collection::pane", "Album order: {:?}", order);
        self.active_album_order = order;
        self.persister.save_active_album_order(order);
    }

    /// The currently selected album, if any.
    pub fn active_album(&self) -> Option<&AlbumModel> {
        self.active_album.as_ref()
    }

    /// Set or clear the selected album and persist the selection.
    pub fn set_active_album(&mut self, album: Option<AlbumModel>) {
        self.persister.save_active_album(album.as_ref());
        self.active_album = album;
    }

    /// Albums currently shown, in the order they were loaded.
    pub fn albums(&self) -> &[AlbumModel] {
        &self.albums
    }

    /// Replace the album list (host-driven refresh).
    pub fn set_albums(&mut self, albums: Vec<AlbumModel>) {
        self.albums = albums;
    }

    /// The album list sorted by the active order, for display.
    pub fn ordered_albums(&self) -> Vec<AlbumModel> {
        order::order_albums(&self.albums, self.active_album_order)
    }

    /// Drag-resize handler; `sizes` is the `[left, right]` percentage
    /// pair reported by the host's split widget.
    ///
    /// Only persists the right width. The in-memory pane sizes are not
    /// recomputed here; the split widget owns them during a drag.
    pub fn on_pane_resize(&mut self, sizes: [u32; 2]) {
        let right = sizes[1].min(100) as u8;
        tracing::debug!(target: "collection::pane", "Right pane resized to {}%", right);
        self.settings.write().albums_right_pane_width_percent = right;
        settings::flush(&self.settings);
    }

    /// Width of the left pane half, in percent.
    pub fn left_pane_size(&self) -> u32 {
        self.left_pane_size
    }

    /// Width of the right pane half, in percent.
    pub fn right_pane_size(&self) -> u32 {
        self.right_pane_size
    }

    /// Start playing an album through the host's playback controller.
    pub fn play_album(&self, album: &AlbumModel) {
        tracing::debug!(target: "collection::pane", "Play album {:?}", album.album_key());
        self.playback.enqueue_album(album);
    }

    /// The injected playback controller, for host view bindings.
    pub fn playback(&self) -> &dyn PlaybackController {
        self.playback.as_ref()
    }
}

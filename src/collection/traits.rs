//! Trait definitions for the pane's collaborators.
//!
//! These traits enable dependency injection and mocking for tests.
//! The host application wires in its real playback controller and
//! album provider; tests substitute the mock implementations below.
//! All contracts are synchronous: the component is single-threaded
//! and driven by host callbacks.

use crate::collection::order::AlbumOrder;
use crate::model::AlbumModel;

/// Source of the full album list.
pub trait AlbumProvider {
    /// All albums in the library, in the provider's order.
    fn get_all_albums(&self) -> Vec<AlbumModel>;
}

/// Playback side of the host application.
///
/// The pane only forwards play requests; queue and transport state
/// stay with the host.
pub trait PlaybackController {
    /// Replace the playback queue with the given album and start playing.
    fn enqueue_album(&self, album: &AlbumModel);
}

/// Persistence adapter for the pane's settings-backed state.
///
/// Implemented by [`AlbumsPersister`](crate::collection::AlbumsPersister)
/// over the shared settings record. Calls are infallible by contract;
/// implementations handle their own failures.
pub trait AlbumsPersistence {
    /// The persisted album sort order.
    fn active_album_order(&self) -> AlbumOrder;

    /// Persist the album sort order.
    fn save_active_album_order(&self, order: AlbumOrder);

    /// Resolve the persisted album selection against `albums`.
    ///
    /// Returns `None` when nothing is persisted or the persisted key
    /// no longer matches an album.
    fn active_album(&self, albums: &[AlbumModel]) -> Option<AlbumModel>;

    /// Persist (or clear) the album selection.
    fn save_active_album(&self, album: Option<&AlbumModel>);
}

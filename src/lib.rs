//! Vitrine - the album-collection pane of a desktop music player.
//!
//! This crate is the state and persistence layer behind a resizable
//! two-pane collection view: the album list, the active album and sort
//! order, and the split widths, all persisted across sessions. The
//! host application owns rendering, playback, album data, and
//! localization, and injects them as collaborators (see
//! [`collection::traits`]).
//!
//! Typical wiring:
//!
//! ```ignore
//! use vitrine::collection::{AlbumsPersister, CollectionAlbumsPane};
//! use vitrine::settings::Settings;
//!
//! let settings = Settings::load().into_handle();
//! let persister = AlbumsPersister::new(settings.clone());
//! let mut pane = CollectionAlbumsPane::new(
//!     Box::new(playback),
//!     Box::new(album_provider),
//!     Box::new(persister),
//!     settings,
//! );
//! pane.initialize();
//! ```

pub mod collection;
pub mod model;
pub mod settings;
#[cfg(test)]
pub mod test_utils;

pub use collection::{AlbumOrder, AlbumsPersister, CollectionAlbumsPane};
pub use model::{AlbumData, AlbumModel, Translator};
pub use settings::{Settings, SettingsHandle};

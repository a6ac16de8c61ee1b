//! The album-collection pane: state, ordering, and persistence.

pub mod order;
pub mod pane;
pub mod persister;
pub mod traits;

pub use order::{AlbumOrder, order_albums};
pub use pane::CollectionAlbumsPane;
pub use persister::AlbumsPersister;
pub use traits::{AlbumProvider, AlbumsPersistence, PlaybackController};

//! Album sort orders and the ordering function applying them.

use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::model::AlbumModel;

/// Sort order for the album list.
///
/// Persisted in settings, so the variant names are part of the
/// settings-file format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlbumOrder {
    #[default]
    ByAlbumTitleAscending,
    ByAlbumTitleDescending,
    ByDateAdded,
    ByDateCreated,
    ByAlbumArtist,
    ByYearAscending,
    ByYearDescending,
    ByLastPlayed,
    Random,
}

/// Return `albums` sorted by `order`.
///
/// Sorts are stable, so albums that compare equal keep their provider
/// order. Title and artist comparisons are case-insensitive. The date
/// orders put the most recent album first; albums without the date
/// sort last.
pub fn order_albums(albums: &[AlbumModel], order: AlbumOrder) -> Vec<AlbumModel> {
    let mut ordered = albums.to_vec();

    match order {
        AlbumOrder::ByAlbumTitleAscending => {
            ordered.sort_by_key(|a| a.album_title().to_lowercase());
        }
        AlbumOrder::ByAlbumTitleDescending => {
            ordered.sort_by(|a, b| {
                b.album_title()
                    .to_lowercase()
                    .cmp(&a.album_title().to_lowercase())
            });
        }
        AlbumOrder::ByDateAdded => {
            ordered.sort_by(|a, b| b.date_added().cmp(&a.date_added()));
        }
        AlbumOrder::ByDateCreated => {
            ordered.sort_by(|a, b| b.date_file_created().cmp(&a.date_file_created()));
        }
        AlbumOrder::ByAlbumArtist => {
            ordered.sort_by_key(|a| {
                (
                    a.album_artist().to_lowercase(),
                    a.album_title().to_lowercase(),
                )
            });
        }
        AlbumOrder::ByYearAscending => {
            ordered.sort_by_key(|a| a.year());
        }
        AlbumOrder::ByYearDescending => {
            ordered.sort_by(|a, b| b.year().cmp(&a.year()));
        }
        AlbumOrder::ByLastPlayed => {
            ordered.sort_by(|a, b| b.date_last_played().cmp(&a.date_last_played()));
        }
        AlbumOrder::Random => {
            ordered.shuffle(&mut rand::rng());
        }
    }

    ordered
}

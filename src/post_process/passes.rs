//! Passes run over a finished catalog before and after the full manifest is
//! written. Each pass mutates the catalog in place and cannot be undone.

use crate::foundation::catalog::Catalog;
use rand::seq::SliceRandom;
use rand::Rng;
use std::num::NonZeroUsize;

/// Sets `total_tracks` on every album that lacks it to the number of songs
/// actually collected. Returns how many albums were filled in.
pub fn backfill_total_tracks(catalog: &mut Catalog) -> usize {
    let mut filled = 0;
    for album in catalog.albums_mut() {
        if album.total_tracks.is_none() {
            album.total_tracks = Some(album.songs.len() as u32);
            filled += 1;
        }
    }
    filled
}

/// Removes the fields the compact manifest does not carry: album track and
/// disc totals and composers, song track numbers and file paths.
///
/// Must only run once the full manifest has been written.
pub fn strip_compact_fields(catalog: &mut Catalog) {
    for album in catalog.albums_mut() {
        album.total_tracks = None;
        album.total_discs = None;
        album.composers = None;

        for song in &mut album.songs {
            song.track_number = None;
            song.filepath = None;
        }
    }
}

/// Shuffles the artist order and, when `denom` is set, drops the first
/// `len / denom` artists of the shuffled list. Returns how many were dropped.
pub fn shuffle_and_truncate<R: Rng + ?Sized>(
    catalog: &mut Catalog,
    denom: Option<NonZeroUsize>,
    rng: &mut R,
) -> usize {
    let mut entries = catalog.take_entries();
    entries.shuffle(rng);

    let dropped = denom.map_or(0, |n| entries.len() / n.get());
    *catalog = Catalog::from_entries(entries.split_off(dropped));
    dropped
}

//! Artist selection
//!
//! The dataset is reduced to a single artist's songs. The filter target is
//! a compiled-in constant; an empty result is valid and propagates silently
//! (both exports come out header-only).

use crate::types::SongRecord;

/// Spotify artist id the dataset is reduced to (Taylor Swift)
pub const TARGET_ARTIST_ID: &str = "06HL4z0CvFAxyc27GXpf02";

/// Retain the songs belonging to the target artist, preserving input order
pub fn filter_by_artist(songs: Vec<SongRecord>) -> Vec<SongRecord> {
    retain_artist(songs, TARGET_ARTIST_ID)
}

/// Retain the songs whose artist id matches `artist_id` exactly
pub fn retain_artist(songs: Vec<SongRecord>, artist_id: &str) -> Vec<SongRecord> {
    songs
        .into_iter()
        .filter(|song| song.artist_id == artist_id)
        .collect()
}

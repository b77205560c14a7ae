//! Exploding token sequences into per-chord records
//!
//! Each song's token sequence flattens to one record per chord occurrence,
//! carrying the song id, a 1-based per-song `time` rank, the root letter,
//! and the looked-up degree vector. A lookup miss leaves the vector absent;
//! it never aborts the run.

use crate::types::{ChordRow, DegreeMap, NormalizedSong};
use std::collections::HashMap;

/// Explode normalized songs into the per-chord table
///
/// `time` is a running 1-based counter per song id, so rows for one id form
/// the contiguous sequence 1..N even if that id recurs later in the input.
/// Songs with zero tokens contribute zero rows.
pub fn explode(songs: &[NormalizedSong], map: &DegreeMap) -> Vec<ChordRow> {
    let mut counters: HashMap<String, u32> = HashMap::new();
    let mut rows = Vec::new();

    for song in songs {
        let counter = counters.entry(song.id.clone()).or_insert(0);

        for token in &song.tokens {
            // Tokens come from a whitespace split and are never empty.
            let Some(root) = token.chars().next() else {
                continue;
            };

            *counter += 1;
            rows.push(ChordRow {
                id: song.id.clone(),
                time: *counter,
                chord: token.clone(),
                root,
                degrees: map.degrees(token).copied(),
            });
        }
    }

    rows
}

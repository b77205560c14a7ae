//! Pipeline orchestration
//!
//! Strings the stages together in data-flow order:
//! loader → artist filter → normalizer → {progression export,
//! degree mapper → mapped export}. Data flows strictly forward; no stage
//! reads the output of a downstream stage. Both inputs load and transform
//! before either output file is created, so fatal conditions halt the run
//! with nothing written.

use crate::config::Config;
use crate::error::Result;
use crate::services::{
    artist_filter, catalog_loader, chord_normalizer, degree_mapper, mapped_writer,
    progression_writer,
};
use std::collections::HashSet;
use tracing::info;

/// Counters reported after a completed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Songs in the full input dataset
    pub songs_total: usize,
    /// Songs retained by the artist filter
    pub songs_matched: usize,
    /// Chord occurrences in the mapped export
    pub chord_rows: usize,
    /// Distinct chord symbols with no mapping entry
    pub unmapped_chords: usize,
}

/// Execute one batch run
pub fn run(config: &Config) -> Result<RunSummary> {
    let songs = catalog_loader::load_song_catalog(&config.dataset_path)?;
    let songs_total = songs.len();
    info!(songs = songs_total, "Loaded chord-progression dataset");

    let degree_map = catalog_loader::load_degree_map(&config.mapping_path)?;
    info!(entries = degree_map.len(), "Loaded chord mapping table");

    let matched = artist_filter::filter_by_artist(songs);
    let songs_matched = matched.len();
    info!(
        songs = songs_matched,
        artist = artist_filter::TARGET_ARTIST_ID,
        "Applied artist filter"
    );

    let normalized = chord_normalizer::normalize_songs(matched);
    let rows = degree_mapper::explode(&normalized, &degree_map);

    // Lookup misses are expected data, not errors; they surface only as a
    // summary count.
    let unmapped: HashSet<&str> = rows
        .iter()
        .filter(|row| row.degrees.is_none())
        .map(|row| row.chord.as_str())
        .collect();

    progression_writer::write_progressions(&config.progression_output, &normalized)?;
    info!(
        path = %config.progression_output.display(),
        rows = normalized.len(),
        "Wrote progression export"
    );

    mapped_writer::write_mapped(&config.mapped_output, &rows)?;
    info!(
        path = %config.mapped_output.display(),
        rows = rows.len(),
        "Wrote mapped export"
    );

    Ok(RunSummary {
        songs_total,
        songs_matched,
        chord_rows: rows.len(),
        unmapped_chords: unmapped.len(),
    })
}

//! Dataset and mapping-table loading
//!
//! Reads the two CSV inputs into typed records. Columns are resolved by
//! header name, so extra columns in either file are ignored; a missing
//! required column aborts the run. The mapping table's `Degrees` and
//! `Notes` cells arrive as string-encoded list literals and are
//! deserialized here, once, into native values — a malformed literal is a
//! fatal error, not a per-chord recoverable one.

use crate::error::{Error, Result};
use crate::types::{DegreeMap, DegreeVector, SongRecord, SEMITONES};
use crate::utils::list_literal;
use std::path::Path;
use tracing::debug;

/// Table names used in missing-column diagnostics
const SONG_TABLE: &str = "chord-progression dataset";
const MAPPING_TABLE: &str = "chord mapping table";

/// Load the chord-progression dataset
///
/// Requires columns `id`, `spotify_artist_id`, and `chords`. Each record
/// keeps its 0-based position in the input table as `source_row`.
pub fn load_song_catalog(path: &Path) -> Result<Vec<SongRecord>> {
    let mut reader = csv::Reader::from_path(path)?;

    let headers = reader.headers()?.clone();
    let id_idx = column_index(&headers, SONG_TABLE, "id")?;
    let artist_idx = column_index(&headers, SONG_TABLE, "spotify_artist_id")?;
    let chords_idx = column_index(&headers, SONG_TABLE, "chords")?;

    let mut songs = Vec::new();
    for (source_row, record) in reader.records().enumerate() {
        let record = record?;
        songs.push(SongRecord {
            source_row,
            id: field(&record, id_idx),
            artist_id: field(&record, artist_idx),
            chords: field(&record, chords_idx),
        });
    }

    debug!(path = %path.display(), songs = songs.len(), "Song catalog loaded");
    Ok(songs)
}

/// Load the chord-to-degree mapping table
///
/// Requires columns `Chords`, `Degrees`, and `Notes`. The degree literal
/// must decode to exactly 12 elements, each 0 or 1.
pub fn load_degree_map(path: &Path) -> Result<DegreeMap> {
    let mut reader = csv::Reader::from_path(path)?;

    let headers = reader.headers()?.clone();
    let chord_idx = column_index(&headers, MAPPING_TABLE, "Chords")?;
    let degrees_idx = column_index(&headers, MAPPING_TABLE, "Degrees")?;
    let notes_idx = column_index(&headers, MAPPING_TABLE, "Notes")?;

    let mut map = DegreeMap::default();
    for record in reader.records() {
        let record = record?;
        let chord = field(&record, chord_idx);

        let degrees = list_literal::parse_int_list(&field(&record, degrees_idx))
            .map_err(|e| malformed(&chord, e.to_string()))
            .and_then(|values| degree_vector(&chord, &values))?;
        let notes = list_literal::parse_string_list(&field(&record, notes_idx))
            .map_err(|e| malformed(&chord, e.to_string()))?;

        map.insert(chord, degrees, notes);
    }

    debug!(path = %path.display(), entries = map.len(), "Degree map loaded");
    Ok(map)
}

/// Validate a decoded degree list into the fixed-width binary vector
fn degree_vector(chord: &str, values: &[i64]) -> Result<DegreeVector> {
    if values.len() != SEMITONES {
        return Err(malformed(
            chord,
            format!("expected {} degrees, found {}", SEMITONES, values.len()),
        ));
    }

    let mut vector = [0u8; SEMITONES];
    for (slot, &value) in vector.iter_mut().zip(values) {
        *slot = match value {
            0 => 0,
            1 => 1,
            other => return Err(malformed(chord, format!("degree value {} is not 0/1", other))),
        };
    }
    Ok(vector)
}

fn malformed(chord: &str, reason: String) -> Error {
    Error::MalformedMapping {
        chord: chord.to_string(),
        reason,
    }
}

fn column_index(
    headers: &csv::StringRecord,
    table: &'static str,
    column: &'static str,
) -> Result<usize> {
    headers
        .iter()
        .position(|header| header == column)
        .ok_or(Error::MissingColumn { table, column })
}

fn field(record: &csv::StringRecord, index: usize) -> String {
    record.get(index).unwrap_or_default().to_string()
}

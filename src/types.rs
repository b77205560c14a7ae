//! Core record types for the chord pipeline
//!
//! The input tables and both exports are modeled as explicit records with
//! named fields rather than generic tabular frames; the mapping table is a
//! plain key-to-vector lookup.

use std::collections::HashMap;

/// Number of chromatic pitch classes in a degree vector
pub const SEMITONES: usize = 12;

/// Binary presence of each of the 12 chromatic semitones in a chord
pub type DegreeVector = [u8; SEMITONES];

/// One row of the chord-progression dataset, as loaded
///
/// Extra input columns beyond the three used here are ignored at load time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongRecord {
    /// 0-based position of this row in the full input table
    ///
    /// Preserved through filtering so the progression export can carry the
    /// original row identity.
    pub source_row: usize,
    /// Song identifier
    pub id: String,
    /// Spotify artist id, used only for filtering
    pub artist_id: String,
    /// Raw chord string, markup and inversion suffixes still present
    pub chords: String,
}

/// A song after normalization: the raw chord string replaced by an ordered
/// token sequence
///
/// The sequence may be empty when the raw string reduces to whitespace
/// after cleanup. Token order encodes musical sequence and is preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedSong {
    /// 0-based position of this row in the full input table
    pub source_row: usize,
    /// Song identifier
    pub id: String,
    /// Cleaned chord symbols in musical order
    pub tokens: Vec<String>,
}

/// Chord-symbol lookup tables parsed from the mapping CSV
///
/// Degree vectors drive the mapped export. Note-name spellings are loaded
/// for completeness and traceability but nothing downstream consumes them.
/// Duplicate chord symbols keep the last occurrence.
#[derive(Debug, Clone, Default)]
pub struct DegreeMap {
    degrees: HashMap<String, DegreeVector>,
    notes: HashMap<String, Vec<String>>,
}

impl DegreeMap {
    /// Insert one mapping-table row
    pub fn insert(&mut self, chord: String, degrees: DegreeVector, notes: Vec<String>) {
        self.degrees.insert(chord.clone(), degrees);
        self.notes.insert(chord, notes);
    }

    /// Degree vector for a chord symbol, if the table has one
    pub fn degrees(&self, chord: &str) -> Option<&DegreeVector> {
        self.degrees.get(chord)
    }

    /// Note-name spelling for a chord symbol, if the table has one
    pub fn notes(&self, chord: &str) -> Option<&[String]> {
        self.notes.get(chord).map(Vec::as_slice)
    }

    /// Number of chord symbols in the table
    pub fn len(&self) -> usize {
        self.degrees.len()
    }

    /// True when the table has no entries
    pub fn is_empty(&self) -> bool {
        self.degrees.is_empty()
    }
}

/// One chord occurrence in the exploded table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChordRow {
    /// Song id, repeated for every chord in that song
    pub id: String,
    /// 1-based position of this chord within its song
    pub time: u32,
    /// The chord symbol token
    pub chord: String,
    /// First character of the token, the note letter
    pub root: char,
    /// Looked-up degree vector; None when the symbol has no mapping entry
    ///
    /// Absent stays absent in the export (12 empty cells), deliberately not
    /// zero-filled.
    pub degrees: Option<DegreeVector>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degree_map_lookup_hit_and_miss() {
        let mut map = DegreeMap::default();
        map.insert(
            "C".to_string(),
            [1, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0],
            vec!["C".to_string(), "E".to_string(), "G".to_string()],
        );

        assert_eq!(map.len(), 1);
        assert_eq!(
            map.degrees("C"),
            Some(&[1, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0])
        );
        assert_eq!(map.notes("C").map(|n| n.len()), Some(3));
        assert_eq!(map.degrees("Xz9"), None);
        assert_eq!(map.notes("Xz9"), None);
    }

    #[test]
    fn degree_map_duplicate_key_keeps_last() {
        let mut map = DegreeMap::default();
        map.insert("C".to_string(), [0; 12], vec![]);
        map.insert("C".to_string(), [1; 12], vec!["C".to_string()]);

        assert_eq!(map.len(), 1);
        assert_eq!(map.degrees("C"), Some(&[1; 12]));
    }
}

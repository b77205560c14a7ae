//! Chord-string cleanup and tokenization
//!
//! Raw chord strings interleave musical tokens with structural annotation
//! spans (`<verse_1>`, `<chorus_2>`) and bass-note/inversion suffixes
//! (`G/B`, `D/F#`). Normalization strips both and splits what remains on
//! whitespace. Removal is best-effort and non-failing; a string that
//! reduces to whitespace yields an empty token sequence.

use crate::types::{NormalizedSong, SongRecord};
use once_cell::sync::Lazy;
use regex::Regex;

/// Structural annotation spans: `<` followed by anything up to the next `>`
static ANNOTATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<[^>]*>").expect("annotation pattern is valid"));

/// Bass-note/inversion suffixes: `/` up to the next space, tab, or end
static INVERSION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/[^ \t]*").expect("inversion pattern is valid"));

/// Clean one raw chord string into an ordered token sequence
pub fn normalize(raw: &str) -> Vec<String> {
    let without_annotations = ANNOTATION.replace_all(raw, "");
    let without_inversions = INVERSION.replace_all(&without_annotations, "");

    without_inversions
        .split_whitespace()
        .map(str::to_owned)
        .collect()
}

/// Normalize every song's raw chord string, preserving row order
pub fn normalize_songs(songs: Vec<SongRecord>) -> Vec<NormalizedSong> {
    songs
        .into_iter()
        .map(|song| NormalizedSong {
            source_row: song.source_row,
            id: song.id,
            tokens: normalize(&song.chords),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_annotations_and_inversions() {
        let tokens = normalize("<verse_1> Am G/B C F <chorus_1> Am");

        assert_eq!(tokens, vec!["Am", "G", "C", "F", "Am"]);
    }

    #[test]
    fn no_bracket_content_survives() {
        let tokens = normalize("<intro_1> C <bridge_2> <outro_1> G7");

        assert!(tokens
            .iter()
            .all(|t| !t.contains('<') && !t.contains('>')));
        assert_eq!(tokens, vec!["C", "G7"]);
    }

    #[test]
    fn no_slash_survives() {
        let tokens = normalize("D/F# G/B C/G Am7/E");

        assert!(tokens.iter().all(|t| !t.contains('/')));
        assert_eq!(tokens, vec!["D", "G", "C", "Am7"]);
    }

    #[test]
    fn whitespace_only_residue_yields_empty_sequence() {
        assert!(normalize("<verse_1> <chorus_1>").is_empty());
        assert!(normalize("   \t ").is_empty());
        assert!(normalize("").is_empty());
    }

    #[test]
    fn inversion_suffix_runs_to_whitespace() {
        // The suffix swallows everything up to the next space or tab,
        // matching the source dataset's token boundaries.
        assert_eq!(normalize("G/B-flat C"), vec!["G", "C"]);
    }

    #[test]
    fn collapses_whitespace_runs() {
        assert_eq!(normalize("  Am   G \t C  "), vec!["Am", "G", "C"]);
    }

    #[test]
    fn idempotent_on_clean_sequences() {
        let cleaned = normalize("<verse_1> Am G/B C");
        let rejoined = cleaned.join(" ");

        assert_eq!(normalize(&rejoined), cleaned);
    }

    #[test]
    fn normalize_songs_preserves_order_and_identity() {
        let songs = vec![
            SongRecord {
                source_row: 4,
                id: "a".to_string(),
                artist_id: "x".to_string(),
                chords: "<verse_1> Am G".to_string(),
            },
            SongRecord {
                source_row: 9,
                id: "b".to_string(),
                artist_id: "x".to_string(),
                chords: "<intro_1>".to_string(),
            },
        ];

        let normalized = normalize_songs(songs);

        assert_eq!(normalized.len(), 2);
        assert_eq!(normalized[0].source_row, 4);
        assert_eq!(normalized[0].tokens, vec!["Am", "G"]);
        assert_eq!(normalized[1].source_row, 9);
        assert!(normalized[1].tokens.is_empty());
    }
}

//! Per-song progression export
//!
//! One CSV row per filtered song: the song's original source-row index in
//! an unnamed leading column, then the cleaned token sequence serialized as
//! a single-quoted list literal. Row order and indices are preserved
//! exactly; there is no transformation beyond serialization.

use crate::error::Result;
use crate::types::NormalizedSong;
use std::path::Path;

/// Render a token sequence as a list literal, e.g. `['Am', 'G', 'C']`
///
/// Empty sequences render as `[]`. Quotes and backslashes inside tokens are
/// backslash-escaped.
pub fn format_token_list(tokens: &[String]) -> String {
    let mut out = String::from("[");
    for (i, token) in tokens.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push('\'');
        for c in token.chars() {
            if c == '\'' || c == '\\' {
                out.push('\\');
            }
            out.push(c);
        }
        out.push('\'');
    }
    out.push(']');
    out
}

/// Write the progression export
pub fn write_progressions(path: &Path, songs: &[NormalizedSong]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record(["", "chords"])?;
    for song in songs {
        writer.write_record([
            song.source_row.to_string(),
            format_token_list(&song.tokens),
        ])?;
    }
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn song(source_row: usize, id: &str, tokens: &[&str]) -> NormalizedSong {
        NormalizedSong {
            source_row,
            id: id.to_string(),
            tokens: tokens.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn formats_token_lists() {
        assert_eq!(
            format_token_list(&["Am".to_string(), "G".to_string()]),
            "['Am', 'G']"
        );
        assert_eq!(format_token_list(&[]), "[]");
        assert_eq!(format_token_list(&["A'm".to_string()]), r"['A\'m']");
    }

    #[test]
    fn writes_one_row_per_song_with_source_index() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("chords.csv");
        let songs = vec![
            song(3, "a", &["Am", "G", "C"]),
            song(7, "b", &[]),
        ];

        write_progressions(&path, &songs).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], ",chords");
        assert_eq!(lines[1], "3,\"['Am', 'G', 'C']\"");
        assert_eq!(lines[2], "7,[]");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn empty_input_writes_header_only() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("chords.csv");

        write_progressions(&path, &[]).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, ",chords\n");
    }
}

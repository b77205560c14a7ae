//! Exploded chord-table export
//!
//! One CSV row per chord occurrence, fixed column order
//! `id, time, chord, root, degree_1, ..., degree_12`, no row-index column.
//! Rows are written in the order received; no filtering or reordering
//! happens here. An absent degree vector renders as 12 empty cells.

use crate::error::Result;
use crate::types::{ChordRow, SEMITONES};
use std::path::Path;

/// Write the mapped export
pub fn write_mapped(path: &Path, rows: &[ChordRow]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    let mut header = vec![
        "id".to_string(),
        "time".to_string(),
        "chord".to_string(),
        "root".to_string(),
    ];
    for degree in 1..=SEMITONES {
        header.push(format!("degree_{degree}"));
    }
    writer.write_record(&header)?;

    for row in rows {
        let mut record = Vec::with_capacity(4 + SEMITONES);
        record.push(row.id.clone());
        record.push(row.time.to_string());
        record.push(row.chord.clone());
        record.push(row.root.to_string());
        match row.degrees {
            Some(vector) => record.extend(vector.iter().map(u8::to_string)),
            None => record.resize(4 + SEMITONES, String::new()),
        }
        writer.write_record(&record)?;
    }
    writer.flush()?;

    Ok(())
}

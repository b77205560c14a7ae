//! chordon - chord-progression ingest and degree-mapping batch tool
//!
//! Single batch run: reads the chord-progression dataset and the
//! chord-to-degree mapping table, filters to the target artist, and writes
//! the progression and mapped-chord CSV exports.

use anyhow::Result;
use chordon::Config;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting chordon batch run");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let config = Config::resolve()?;
    info!("Dataset: {}", config.dataset_path.display());
    info!("Mapping table: {}", config.mapping_path.display());

    let summary = chordon::pipeline::run(&config)?;

    info!(
        songs_total = summary.songs_total,
        songs_matched = summary.songs_matched,
        chord_rows = summary.chord_rows,
        unmapped_chords = summary.unmapped_chords,
        "Run complete"
    );

    Ok(())
}

//! Pipeline stage services
//!
//! One module per stage, in data-flow order: loader, artist filter, token
//! normalizer, degree mapper, and the two exporters.

pub mod artist_filter;
pub mod catalog_loader;
pub mod chord_normalizer;
pub mod degree_mapper;
pub mod mapped_writer;
pub mod progression_writer;

pub use artist_filter::{filter_by_artist, TARGET_ARTIST_ID};
pub use catalog_loader::{load_degree_map, load_song_catalog};
pub use chord_normalizer::{normalize, normalize_songs};
pub use degree_mapper::explode;
pub use mapped_writer::write_mapped;
pub use progression_writer::write_progressions;

//! # chordon
//!
//! Batch pipeline over the Chordonomicon chord-annotation dataset:
//! - Loads the chord-progression CSV and the chord→degree mapping CSV
//! - Filters to one artist's songs
//! - Normalizes raw chord strings into token sequences
//! - Exports per-song progressions and a per-chord table with 12 binary
//!   scale-degree columns
//!
//! The library exposes every stage for testing; the binary wires them into
//! a single synchronous run.

pub mod config;
pub mod error;
pub mod pipeline;
pub mod services;
pub mod types;
pub mod utils;

pub use config::Config;
pub use error::{Error, Result};
pub use pipeline::RunSummary;

//! Participant ingestion utilities.
//!
//! Loads a delimited participant list, relabels its columns to `name` and
//! `criterion-1..criterion-N`, and builds the [`ParticipantTable`] the
//! pairing engine consumes.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use santa_ingest::{CsvOptions, participants_from_table, read_csv_table};
//!
//! let table = read_csv_table(Path::new("data/example.csv"), &CsvOptions::default())?;
//! let participants = participants_from_table(&table)?;
//! ```
//!
//! [`ParticipantTable`]: santa_model::ParticipantTable

mod columns;
mod csv_table;
mod error;
mod participants;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use csv_table::{CsvOptions, CsvTable, read_csv_reader, read_csv_table};

// === Column Normalization ===
pub use columns::{NAME_COLUMN, criterion_column, normalize_columns, normalized_headers};

// === Participants ===
pub use participants::participants_from_table;

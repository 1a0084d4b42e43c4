//! Error types for loading the raw Olympics tables.

use std::path::PathBuf;

/// Errors that can occur while reading the athlete-event or region files.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The input file could not be opened.
    #[error("Failed to open {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// A row could not be read or did not match the expected columns.
    #[error("Malformed record in {origin}")]
    Malformed {
        origin: String,
        #[source]
        source: csv::Error,
    },
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterFileError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: String },
}

/// Why a single PLAYER record was rejected. Never escapes a load: malformed
/// records are skipped with a warning and parsing continues.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecordError {
    #[error("expected 10 fields, found {found}")]
    FieldCount { found: usize },

    #[error("unknown position {0:?}")]
    Position(String),

    #[error("unparsable {field} value {value:?}")]
    Number { field: &'static str, value: String },

    #[error("jersey number {0} already loaded")]
    DuplicateJersey(u8),

    #[error("roster capacity reached")]
    CapacityExceeded,
}

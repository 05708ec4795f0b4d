// Flat-file persistence for roster state.
// Human-readable line-oriented text, tolerant of malformed records on load.

pub mod codec;
pub mod error;

pub use codec::{load_roster, roster_file_exists, save_roster, LoadSummary};
pub use error::RosterFileError;

/// Default backing file, overridable per save/load call.
pub const DATA_FILE: &str = "roster.txt";

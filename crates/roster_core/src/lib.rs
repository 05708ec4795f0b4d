//! # roster_core - Single-Team Roster Store
//!
//! This library owns the in-memory roster for one basketball team and its
//! flat-file persistence:
//! - [`Roster`]: bounded, invariant-preserving player container
//!   (unique jersey numbers, capacity of [`MAX_ROSTER_SIZE`], dirty flag)
//! - [`validate`]: pure field validators shared by interactive input
//! - [`file`]: line-oriented text codec, tolerant of malformed records
//!
//! The interactive menu layer lives in the `roster_cli` binary and calls in
//! exclusively through this crate's public API.

pub mod file;
pub mod models;
pub mod roster;
pub mod validate;

// Re-export the data model
pub use models::{format_height, Player, Position};

// Re-export the roster store
pub use roster::{Roster, MAX_ROSTER_SIZE};

// Re-export field validators
pub use validate::{
    validate_bounded_int, validate_bounded_real, validate_jersey, validate_name,
    validate_position, validate_yes_no, ValidationError,
};

// Re-export the persistence codec
pub use file::{
    load_roster, roster_file_exists, save_roster, LoadSummary, RosterFileError, DATA_FILE,
};

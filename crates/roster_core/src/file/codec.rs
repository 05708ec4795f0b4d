//! Line-oriented flat-file codec for [`Roster`] state.
//!
//! Format, one record per line, UTF-8:
//! ```text
//! TEAMNAME:<team name verbatim>
//! PLAYER:<first>,<last>,<jersey>,<pos>,<height>,<weight>,<age>,<ppg>,<rpg>,<apg>
//! ```
//! Blank lines and lines with neither prefix are ignored, so external tools
//! may annotate the file without breaking loads.

use super::error::{RecordError, RosterFileError};
use crate::models::{Player, Position};
use crate::roster::{Roster, MAX_ROSTER_SIZE};

use std::fmt::Write as _;
use std::fs::{rename, File};
use std::io::Write;
use std::path::Path;
use std::str::FromStr;

const TEAMNAME_PREFIX: &str = "TEAMNAME:";
const PLAYER_PREFIX: &str = "PLAYER:";

/// Outcome of a completed load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadSummary {
    /// Players admitted into the roster.
    pub loaded: usize,
    /// Malformed records skipped with a warning.
    pub skipped: usize,
}

/// Write the roster to `path`, replacing any existing content.
///
/// The file is written to a `.tmp` sibling and renamed into place, so a
/// failed write never leaves a truncated roster file behind. Does not mutate
/// the roster; the caller marks it saved.
pub fn save_roster(roster: &Roster, path: impl AsRef<Path>) -> Result<(), RosterFileError> {
    let path = path.as_ref();

    let mut contents = String::new();
    let _ = writeln!(contents, "{}{}", TEAMNAME_PREFIX, roster.team_name());
    for p in roster.players() {
        let _ = writeln!(
            contents,
            "{}{},{},{},{},{},{},{},{},{},{}",
            PLAYER_PREFIX,
            p.first_name,
            p.last_name,
            p.jersey_number,
            p.position.code(),
            p.height_inches,
            p.weight_lbs,
            p.age,
            p.points_per_game,
            p.rebounds_per_game,
            p.assists_per_game,
        );
    }

    let temp_path = path.with_extension("tmp");
    {
        let mut file = File::create(&temp_path)?;
        file.write_all(contents.as_bytes())?;
        file.flush()?;
        file.sync_all()?;
    }
    rename(&temp_path, path)?;

    log::debug!("Saved {} players to {:?}", roster.len(), path);
    Ok(())
}

/// Read `path` and replace the roster's state wholesale.
///
/// Fails without touching the roster when the file is missing or unreadable.
/// A malformed PLAYER record (wrong field count, unparsable number, unknown
/// position, duplicate jersey, or a record past the capacity bound) is
/// skipped with a warning; the load itself still succeeds. The team name is
/// replaced only when a non-empty TEAMNAME line is present. Clears the dirty
/// flag on completion.
pub fn load_roster(
    roster: &mut Roster,
    path: impl AsRef<Path>,
) -> Result<LoadSummary, RosterFileError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(RosterFileError::FileNotFound { path: path.display().to_string() });
    }

    let contents = std::fs::read_to_string(path)?;

    let mut players: Vec<Player> = Vec::new();
    let mut team_name: Option<String> = None;
    let mut skipped = 0usize;

    for (idx, line) in contents.lines().enumerate() {
        if line.is_empty() {
            continue;
        }
        if let Some(rest) = line.strip_prefix(TEAMNAME_PREFIX) {
            team_name = Some(rest.to_string());
            continue;
        }
        if let Some(rest) = line.strip_prefix(PLAYER_PREFIX) {
            match parse_player(rest).and_then(|p| admit(&players, p)) {
                Ok(player) => players.push(player),
                Err(reason) => {
                    skipped += 1;
                    log::warn!("Skipping player record on line {}: {}", idx + 1, reason);
                }
            }
        }
        // anything else: unknown prefix, ignored for forward compatibility
    }

    let loaded = players.len();
    roster.replace_players(players);
    if let Some(name) = team_name.filter(|n| !n.is_empty()) {
        roster.set_team_name(name);
    }
    roster.mark_saved();

    log::info!("Loaded {} players from {:?} ({} skipped)", loaded, path, skipped);
    Ok(LoadSummary { loaded, skipped })
}

/// Existence probe used before an initial or explicit load.
pub fn roster_file_exists(path: impl AsRef<Path>) -> bool {
    path.as_ref().exists()
}

fn parse_player(record: &str) -> Result<Player, RecordError> {
    let fields: Vec<&str> = record.split(',').collect();
    if fields.len() != 10 {
        return Err(RecordError::FieldCount { found: fields.len() });
    }

    let position = Position::from_str(fields[3])
        .map_err(|_| RecordError::Position(fields[3].to_string()))?;

    Ok(Player {
        first_name: fields[0].to_string(),
        last_name: fields[1].to_string(),
        jersey_number: parse_num(fields[2], "jersey")?,
        position,
        height_inches: parse_num(fields[4], "height")?,
        weight_lbs: parse_num(fields[5], "weight")?,
        age: parse_num(fields[6], "age")?,
        points_per_game: parse_num(fields[7], "ppg")?,
        rebounds_per_game: parse_num(fields[8], "rpg")?,
        assists_per_game: parse_num(fields[9], "apg")?,
    })
}

fn parse_num<T: FromStr>(raw: &str, field: &'static str) -> Result<T, RecordError> {
    raw.trim().parse().map_err(|_| RecordError::Number { field, value: raw.to_string() })
}

/// The store's invariants also hold against hand-edited files: duplicate
/// jerseys and records past the capacity bound are malformed, not admitted.
fn admit(loaded: &[Player], candidate: Player) -> Result<Player, RecordError> {
    if loaded.iter().any(|p| p.jersey_number == candidate.jersey_number) {
        return Err(RecordError::DuplicateJersey(candidate.jersey_number));
    }
    if loaded.len() >= MAX_ROSTER_SIZE {
        return Err(RecordError::CapacityExceeded);
    }
    Ok(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn player(first: &str, last: &str, jersey: u8, ppg: f32) -> Player {
        Player {
            first_name: first.to_string(),
            last_name: last.to_string(),
            jersey_number: jersey,
            position: Position::SG,
            height_inches: 78,
            weight_lbs: 212,
            age: 27,
            points_per_game: ppg,
            rebounds_per_game: 6.3,
            assists_per_game: 5.0,
        }
    }

    #[test]
    fn save_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("roster.txt");

        let mut original = Roster::new("Los Angeles Lakers");
        original.add_player(player("Kobe", "Bryant", 8, 28.5));
        original.add_player(player("Shaquille", "O'Neal", 34, 27.2));
        original.add_player(player("Derek", "Fisher", 2, 6.0));

        save_roster(&original, &path).unwrap();

        let mut loaded = Roster::new("Placeholder");
        let summary = load_roster(&mut loaded, &path).unwrap();

        assert_eq!(summary, LoadSummary { loaded: 3, skipped: 0 });
        assert_eq!(loaded.team_name(), "Los Angeles Lakers");
        assert_eq!(loaded.players(), original.players());
        assert!(!loaded.has_unsaved_changes());
    }

    #[test]
    fn missing_file_leaves_roster_untouched() {
        let dir = TempDir::new().unwrap();
        let mut roster = Roster::new("Keep Me");
        roster.add_player(player("Kobe", "Bryant", 8, 28.5));

        let result = load_roster(&mut roster, dir.path().join("nope.txt"));
        assert!(matches!(result, Err(RosterFileError::FileNotFound { .. })));
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.team_name(), "Keep Me");
    }

    #[test]
    fn short_record_is_skipped_not_fatal() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("roster.txt");
        std::fs::write(
            &path,
            "TEAMNAME:Lakers\n\
             PLAYER:Kobe,Bryant,8,SG,78,212,27,28.5,6.3,5\n\
             PLAYER:Short,Record,9,SG,78,212,27,28.5,6.3\n",
        )
        .unwrap();

        let mut roster = Roster::default();
        let summary = load_roster(&mut roster, &path).unwrap();

        assert_eq!(summary, LoadSummary { loaded: 1, skipped: 1 });
        assert_eq!(roster.find_by_jersey(8).unwrap().last_name, "Bryant");
    }

    #[test]
    fn bad_numeric_field_skips_only_that_record() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("roster.txt");
        std::fs::write(
            &path,
            "PLAYER:Bad,Height,9,C,tall,212,27,10,6,5\n\
             PLAYER:Kobe,Bryant,8,SG,78,212,27,28.5,6.3,5\n\
             PLAYER:Bad,Ppg,10,PF,78,212,27,lots,6,5\n",
        )
        .unwrap();

        let mut roster = Roster::default();
        let summary = load_roster(&mut roster, &path).unwrap();

        assert_eq!(summary, LoadSummary { loaded: 1, skipped: 2 });
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.find_by_jersey(8).unwrap().points_per_game, 28.5);
    }

    #[test]
    fn blank_and_unknown_lines_are_ignored() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("roster.txt");
        std::fs::write(
            &path,
            "\n# a comment some tool added\nTEAMNAME:Lakers\n\nNOTES:hello\n\
             PLAYER:Kobe,Bryant,8,SG,78,212,27,28.5,6.3,5\n",
        )
        .unwrap();

        let mut roster = Roster::default();
        let summary = load_roster(&mut roster, &path).unwrap();
        assert_eq!(summary, LoadSummary { loaded: 1, skipped: 0 });
        assert_eq!(roster.team_name(), "Lakers");
    }

    #[test]
    fn absent_teamname_keeps_in_memory_name() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("roster.txt");
        std::fs::write(&path, "PLAYER:Kobe,Bryant,8,SG,78,212,27,28.5,6.3,5\n").unwrap();

        let mut roster = Roster::new("Original Name");
        load_roster(&mut roster, &path).unwrap();
        assert_eq!(roster.team_name(), "Original Name");
    }

    #[test]
    fn duplicate_jersey_record_is_skipped() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("roster.txt");
        std::fs::write(
            &path,
            "PLAYER:Kobe,Bryant,8,SG,78,212,27,28.5,6.3,5\n\
             PLAYER:Copy,Cat,8,PG,74,180,25,10,3,7\n",
        )
        .unwrap();

        let mut roster = Roster::default();
        let summary = load_roster(&mut roster, &path).unwrap();
        assert_eq!(summary, LoadSummary { loaded: 1, skipped: 1 });
        assert_eq!(roster.find_by_jersey(8).unwrap().first_name, "Kobe");
    }

    #[test]
    fn records_past_capacity_are_skipped() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("roster.txt");
        let mut contents = String::new();
        for jersey in 0..20 {
            contents.push_str(&format!(
                "PLAYER:First,Last,{},SG,78,212,27,10,5,3\n",
                jersey
            ));
        }
        std::fs::write(&path, contents).unwrap();

        let mut roster = Roster::default();
        let summary = load_roster(&mut roster, &path).unwrap();
        assert_eq!(summary, LoadSummary { loaded: MAX_ROSTER_SIZE, skipped: 5 });
        assert_eq!(roster.len(), MAX_ROSTER_SIZE);
    }

    #[test]
    fn load_replaces_previous_players_wholesale() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("roster.txt");
        std::fs::write(&path, "PLAYER:Pau,Gasol,16,PF,84,250,28,18.9,9.6,3.2\n").unwrap();

        let mut roster = Roster::new("Lakers");
        roster.add_player(player("Kobe", "Bryant", 8, 28.5));
        roster.add_player(player("Derek", "Fisher", 2, 6.0));

        load_roster(&mut roster, &path).unwrap();
        assert_eq!(roster.len(), 1);
        assert!(roster.find_by_jersey(8).is_none());
        assert_eq!(roster.find_by_jersey(16).unwrap().first_name, "Pau");
    }

    #[test]
    fn exists_probe() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("roster.txt");
        assert!(!roster_file_exists(&path));
        save_roster(&Roster::default(), &path).unwrap();
        assert!(roster_file_exists(&path));
    }

    #[test]
    fn save_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("roster.txt");
        save_roster(&Roster::default(), &path).unwrap();
        assert!(!path.with_extension("tmp").exists());
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One roster member.
///
/// Field domains are enforced by the validators in [`crate::validate`]
/// before a `Player` is admitted into a roster; the type itself stays a
/// plain record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Player {
    pub first_name: String,
    pub last_name: String,
    /// Range: 0..=99, unique within a roster
    pub jersey_number: u8,
    pub position: Position,
    /// Range: 60..=96
    pub height_inches: u8,
    /// Range: 150..=350
    pub weight_lbs: u16,
    /// Range: 18..=45
    pub age: u8,
    /// Season average, 0.0..=50.0
    pub points_per_game: f32,
    /// Season average, 0.0..=25.0
    pub rebounds_per_game: f32,
    /// Season average, 0.0..=20.0
    pub assists_per_game: f32,
}

impl Player {
    /// "First Last", the form name searches match against.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Position {
    PG,
    SG,
    SF,
    PF,
    C,
}

impl Position {
    /// Listing order used by the grouped-by-position view.
    pub const ALL: [Position; 5] =
        [Position::PG, Position::SG, Position::SF, Position::PF, Position::C];

    /// Canonical uppercase code, as persisted in the roster file.
    pub fn code(&self) -> &'static str {
        match self {
            Position::PG => "PG",
            Position::SG => "SG",
            Position::SF => "SF",
            Position::PF => "PF",
            Position::C => "C",
        }
    }

    /// Get position display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            Position::PG => "Point Guard",
            Position::SG => "Shooting Guard",
            Position::SF => "Small Forward",
            Position::PF => "Power Forward",
            Position::C => "Center",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Position {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "PG" => Ok(Position::PG),
            "SG" => Ok(Position::SG),
            "SF" => Ok(Position::SF),
            "PF" => Ok(Position::PF),
            "C" => Ok(Position::C),
            _ => Err(format!("Invalid position: {}", s)),
        }
    }
}

/// Render a height in inches as feet'inches" (78 -> `6'6"`).
pub fn format_height(inches: u8) -> String {
    format!("{}'{}\"", inches / 12, inches % 12)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_parses_case_insensitively() {
        assert_eq!("pg".parse::<Position>().unwrap(), Position::PG);
        assert_eq!(" c ".parse::<Position>().unwrap(), Position::C);
        assert_eq!("Sf".parse::<Position>().unwrap(), Position::SF);
        assert!("GK".parse::<Position>().is_err());
        assert!("".parse::<Position>().is_err());
    }

    #[test]
    fn position_code_round_trips() {
        for pos in Position::ALL {
            assert_eq!(pos.code().parse::<Position>().unwrap(), pos);
        }
    }

    #[test]
    fn height_formatting() {
        assert_eq!(format_height(78), "6'6\"");
        assert_eq!(format_height(72), "6'0\"");
        assert_eq!(format_height(60), "5'0\"");
    }
}

//! The authoritative, invariant-preserving container for a team's players.
//!
//! Invariants held at all times:
//! - at most [`MAX_ROSTER_SIZE`] players
//! - jersey numbers are unique across the roster
//!
//! Mutators return `bool`: business-rule violations (duplicate jersey,
//! roster full, jersey not found) are expected outcomes, not errors, and a
//! failing call leaves the roster untouched. No operation here performs I/O.

use crate::models::{Player, Position};
use serde::{Deserialize, Serialize};

pub const MAX_ROSTER_SIZE: usize = 15;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Roster {
    team_name: String,
    players: Vec<Player>,
    unsaved_changes: bool,
}

impl Roster {
    pub fn new(team_name: impl Into<String>) -> Self {
        Self { team_name: team_name.into(), players: Vec::new(), unsaved_changes: false }
    }

    /// Append a player. Fails when the roster is at capacity or the jersey
    /// number is already in use.
    pub fn add_player(&mut self, player: Player) -> bool {
        if self.players.len() >= MAX_ROSTER_SIZE {
            return false;
        }
        if self.is_jersey_taken(player.jersey_number) {
            return false;
        }
        self.players.push(player);
        self.unsaved_changes = true;
        true
    }

    /// Remove the player holding `jersey`. Fails when no player has it.
    pub fn remove_player(&mut self, jersey: u8) -> bool {
        match self.players.iter().position(|p| p.jersey_number == jersey) {
            Some(idx) => {
                self.players.remove(idx);
                self.unsaved_changes = true;
                true
            }
            None => false,
        }
    }

    /// Replace the full record of the player currently holding `jersey`.
    ///
    /// Fails when no player holds `jersey`, or when the update re-keys to a
    /// number already taken by a *different* player. Keeping the same number
    /// is never a conflict, even though it is "taken" by the record being
    /// edited.
    pub fn edit_player(&mut self, jersey: u8, updated: Player) -> bool {
        if updated.jersey_number != jersey && self.is_jersey_taken(updated.jersey_number) {
            return false;
        }
        match self.players.iter_mut().find(|p| p.jersey_number == jersey) {
            Some(slot) => {
                *slot = updated;
                self.unsaved_changes = true;
                true
            }
            None => false,
        }
    }

    pub fn find_by_jersey(&self, jersey: u8) -> Option<&Player> {
        self.players.iter().find(|p| p.jersey_number == jersey)
    }

    /// Case-insensitive substring match against "first last", roster order.
    pub fn find_by_name(&self, query: &str) -> Vec<&Player> {
        let needle = query.to_lowercase();
        self.players
            .iter()
            .filter(|p| p.full_name().to_lowercase().contains(&needle))
            .collect()
    }

    pub fn find_by_position(&self, position: Position) -> Vec<&Player> {
        self.players.iter().filter(|p| p.position == position).collect()
    }

    pub fn is_jersey_taken(&self, jersey: u8) -> bool {
        self.find_by_jersey(jersey).is_some()
    }

    /// Players sorted by points per game, highest first. Stable, so equal
    /// scorers keep roster order.
    pub fn by_points_desc(&self) -> Vec<&Player> {
        let mut sorted: Vec<&Player> = self.players.iter().collect();
        sorted.sort_by(|a, b| {
            b.points_per_game.partial_cmp(&a.points_per_game).unwrap_or(std::cmp::Ordering::Equal)
        });
        sorted
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn remaining_slots(&self) -> usize {
        MAX_ROSTER_SIZE - self.players.len()
    }

    pub fn team_name(&self) -> &str {
        &self.team_name
    }

    pub fn set_team_name(&mut self, name: impl Into<String>) {
        self.team_name = name.into();
        self.unsaved_changes = true;
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Wholesale replacement used by the file codec on load.
    ///
    /// The store's invariants hold regardless of what the caller passes:
    /// duplicate jersey numbers keep their first occurrence, and records
    /// past the capacity bound are dropped. Does not touch the dirty flag;
    /// the load path clears it explicitly via [`mark_saved`].
    ///
    /// [`mark_saved`]: Roster::mark_saved
    pub(crate) fn replace_players(&mut self, players: Vec<Player>) {
        let mut admitted: Vec<Player> = Vec::with_capacity(players.len().min(MAX_ROSTER_SIZE));
        for player in players {
            if admitted.len() >= MAX_ROSTER_SIZE {
                break;
            }
            if admitted.iter().any(|p| p.jersey_number == player.jersey_number) {
                continue;
            }
            admitted.push(player);
        }
        self.players = admitted;
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.unsaved_changes
    }

    pub fn mark_saved(&mut self) {
        self.unsaved_changes = false;
    }

    pub fn mark_changed(&mut self) {
        self.unsaved_changes = true;
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::new("My Team")
    }
}

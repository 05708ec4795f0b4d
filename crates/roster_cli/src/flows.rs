//! One flow per main-menu action. Each flow collects validated input,
//! calls a single store or codec operation, and reports the outcome.
//! Business-rule failures print a message and leave the roster unchanged.

use crate::prompt::{
    clear_screen, pause, prompt_menu_choice, prompt_validated, prompt_yes_no, read_trimmed,
};
use crate::screens;
use anyhow::Result;
use roster_core::{
    format_height, load_roster, roster_file_exists, save_roster, validate_bounded_int,
    validate_bounded_real, validate_jersey, validate_name, validate_position, Player, Roster,
    MAX_ROSTER_SIZE,
};
use std::path::Path;

pub fn view_full_roster(roster: &Roster) {
    screens::full_roster(roster);
}

pub fn view_by_position(roster: &Roster) {
    screens::by_position(roster);
}

pub fn view_top_scorers(roster: &Roster) {
    screens::top_scorers(roster);
}

pub fn add_player(roster: &mut Roster) -> Result<()> {
    screens::banner("ADD NEW PLAYER");

    if roster.remaining_slots() == 0 {
        println!(
            "\n  Roster is full ({}/{}). Remove a player before adding.",
            MAX_ROSTER_SIZE, MAX_ROSTER_SIZE
        );
        return Ok(());
    }
    println!("\n  Available slots: {}\n", roster.remaining_slots());

    let first_name = prompt_validated("  Enter first name: ", validate_name)?;
    let last_name = prompt_validated("  Enter last name: ", validate_name)?;
    let jersey_number = prompt_free_jersey(roster)?;
    let position = prompt_validated("  Enter position (PG/SG/SF/PF/C): ", validate_position)?;
    let height_inches =
        prompt_validated("  Enter height in inches (60-96): ", |s| validate_bounded_int(s, 60, 96))?
            as u8;
    let weight_lbs =
        prompt_validated("  Enter weight in lbs (150-350): ", |s| validate_bounded_int(s, 150, 350))?
            as u16;
    let age =
        prompt_validated("  Enter age (18-45): ", |s| validate_bounded_int(s, 18, 45))? as u8;
    let points_per_game = prompt_validated("  Enter points per game (0.0-50.0): ", |s| {
        validate_bounded_real(s, 0.0, 50.0)
    })?;
    let rebounds_per_game = prompt_validated("  Enter rebounds per game (0.0-25.0): ", |s| {
        validate_bounded_real(s, 0.0, 25.0)
    })?;
    let assists_per_game = prompt_validated("  Enter assists per game (0.0-20.0): ", |s| {
        validate_bounded_real(s, 0.0, 20.0)
    })?;

    let player = Player {
        first_name,
        last_name,
        jersey_number,
        position,
        height_inches,
        weight_lbs,
        age,
        points_per_game,
        rebounds_per_game,
        assists_per_game,
    };

    println!("\n  --- Player Summary ---");
    screens::player_details(&player);

    if prompt_yes_no("\n  Confirm add player? (Y/N): ")? {
        let label = format!("{} (#{})", player.full_name(), player.jersey_number);
        if roster.add_player(player) {
            println!("\n  ✓ {} added to roster successfully.", label);
        } else {
            println!("\n  Error adding player.");
        }
    } else {
        println!("\n  Player not added.");
    }
    Ok(())
}

/// Prompt for a jersey number, re-asking while it belongs to someone.
fn prompt_free_jersey(roster: &Roster) -> Result<u8> {
    loop {
        let jersey = prompt_validated("  Enter jersey number (0-99): ", validate_jersey)?;
        match roster.find_by_jersey(jersey) {
            None => return Ok(jersey),
            Some(holder) => println!(
                "  Jersey number {} is already taken by {}.",
                jersey,
                holder.full_name()
            ),
        }
    }
}

pub fn remove_player(roster: &mut Roster) -> Result<()> {
    screens::banner("REMOVE PLAYER");

    if roster.is_empty() {
        println!("\n  Roster is empty. Nothing to remove.");
        return Ok(());
    }
    screens::full_roster(roster);

    let jersey = prompt_validated("\n  Enter jersey number to remove: ", validate_jersey)?;
    let found = match roster.find_by_jersey(jersey) {
        Some(p) => format!("{} (#{})", p.full_name(), p.jersey_number),
        None => {
            println!("\n  No player found with jersey number {}.", jersey);
            return Ok(());
        }
    };
    println!("\n  Found: {}", found);

    if prompt_yes_no("  Remove this player? This cannot be undone. (Y/N): ")? {
        roster.remove_player(jersey);
        println!("\n  ✓ Player removed. Roster now has {} players.", roster.len());
    } else {
        println!("\n  Removal cancelled.");
    }
    Ok(())
}

pub fn edit_player(roster: &mut Roster) -> Result<()> {
    screens::banner("EDIT PLAYER");

    if roster.is_empty() {
        println!("\n  Roster is empty. Nothing to edit.");
        return Ok(());
    }
    screens::full_roster(roster);

    let mut jersey = prompt_validated("\n  Enter jersey number to edit: ", validate_jersey)?;
    if roster.find_by_jersey(jersey).is_none() {
        println!("\n  No player found with jersey number {}.", jersey);
        return Ok(());
    }

    loop {
        // Re-fetch each round: the previous edit replaced the record, and a
        // jersey edit re-keys it.
        let current = match roster.find_by_jersey(jersey) {
            Some(p) => p.clone(),
            None => break,
        };

        clear_screen();
        screens::edit_menu(&current);
        let choice = prompt_menu_choice(0, 6)?;
        if choice == 0 {
            break;
        }

        let mut updated = current.clone();
        match choice {
            1 => edit_name(&mut updated)?,
            2 => edit_jersey(&mut updated, roster, jersey)?,
            3 => edit_position(&mut updated)?,
            4 => edit_physical(&mut updated)?,
            5 => edit_stats(&mut updated)?,
            6 => {
                edit_name(&mut updated)?;
                edit_jersey(&mut updated, roster, jersey)?;
                edit_position(&mut updated)?;
                edit_physical(&mut updated)?;
                edit_stats(&mut updated)?;
            }
            _ => unreachable!("menu choice is bounded"),
        }

        if updated == current {
            println!("\n  No changes made.");
            pause()?;
            continue;
        }

        // Every edit goes back through the store's invariant-checking
        // entry point; nothing mutates an admitted record in place.
        let new_jersey = updated.jersey_number;
        if roster.edit_player(jersey, updated) {
            jersey = new_jersey;
            println!("\n  ✓ Changes applied.");
        } else {
            println!("\n  Changes could not be applied.");
        }
        pause()?;
    }
    Ok(())
}

fn edit_name(player: &mut Player) -> Result<()> {
    println!("\n  Current: {}", player.full_name());
    player.first_name = prompt_validated("  New first name: ", validate_name)?;
    player.last_name = prompt_validated("  New last name: ", validate_name)?;
    Ok(())
}

fn edit_jersey(player: &mut Player, roster: &Roster, original_jersey: u8) -> Result<()> {
    println!("\n  Current jersey: #{}", player.jersey_number);
    loop {
        let new_jersey = prompt_validated("  New jersey number: ", validate_jersey)?;

        if new_jersey == player.jersey_number {
            println!("  Jersey unchanged.");
            return Ok(());
        }
        if new_jersey != original_jersey && roster.is_jersey_taken(new_jersey) {
            // find_by_jersey is Some here by the is_jersey_taken check
            if let Some(holder) = roster.find_by_jersey(new_jersey) {
                println!("  Jersey {} is already taken by {}.", new_jersey, holder.full_name());
            }
            continue;
        }

        player.jersey_number = new_jersey;
        return Ok(());
    }
}

fn edit_position(player: &mut Player) -> Result<()> {
    println!("\n  Current position: {}", player.position.code());
    player.position = prompt_validated("  New position (PG/SG/SF/PF/C): ", validate_position)?;
    Ok(())
}

fn edit_physical(player: &mut Player) -> Result<()> {
    println!(
        "\n  Current: {}, {} lbs, {} years old",
        format_height(player.height_inches),
        player.weight_lbs,
        player.age
    );
    player.height_inches =
        prompt_validated("  New height (inches, 60-96): ", |s| validate_bounded_int(s, 60, 96))?
            as u8;
    player.weight_lbs =
        prompt_validated("  New weight (lbs, 150-350): ", |s| validate_bounded_int(s, 150, 350))?
            as u16;
    player.age = prompt_validated("  New age (18-45): ", |s| validate_bounded_int(s, 18, 45))? as u8;
    Ok(())
}

fn edit_stats(player: &mut Player) -> Result<()> {
    println!(
        "\n  Current: {:.1} PPG, {:.1} RPG, {:.1} APG",
        player.points_per_game, player.rebounds_per_game, player.assists_per_game
    );
    player.points_per_game =
        prompt_validated("  New PPG (0.0-50.0): ", |s| validate_bounded_real(s, 0.0, 50.0))?;
    player.rebounds_per_game =
        prompt_validated("  New RPG (0.0-25.0): ", |s| validate_bounded_real(s, 0.0, 25.0))?;
    player.assists_per_game =
        prompt_validated("  New APG (0.0-20.0): ", |s| validate_bounded_real(s, 0.0, 20.0))?;
    Ok(())
}

pub fn search_players(roster: &Roster) -> Result<()> {
    if roster.is_empty() {
        println!("\n  Roster is empty. Nothing to search.");
        return Ok(());
    }

    loop {
        clear_screen();
        screens::search_menu();

        match prompt_menu_choice(0, 3)? {
            1 => {
                search_by_name(roster)?;
                pause()?;
            }
            2 => {
                search_by_jersey(roster)?;
                pause()?;
            }
            3 => {
                search_by_position(roster)?;
                pause()?;
            }
            _ => return Ok(()),
        }
    }
}

fn search_by_name(roster: &Roster) -> Result<()> {
    let query = read_trimmed("\n  Enter name to search: ")?;
    let results = roster.find_by_name(&query);

    if results.is_empty() {
        println!("\n  No players found matching '{}'.", query);
        return Ok(());
    }
    println!("\n  Found {} player(s):", results.len());
    for player in results {
        screens::player_details(player);
    }
    Ok(())
}

fn search_by_jersey(roster: &Roster) -> Result<()> {
    let jersey = prompt_validated("\n  Enter jersey number: ", validate_jersey)?;
    match roster.find_by_jersey(jersey) {
        Some(player) => {
            println!("\n  Found:");
            screens::player_details(player);
        }
        None => println!("\n  No player found with jersey number {}.", jersey),
    }
    Ok(())
}

fn search_by_position(roster: &Roster) -> Result<()> {
    let position = prompt_validated("\n  Enter position (PG/SG/SF/PF/C): ", validate_position)?;
    let results = roster.find_by_position(position);

    if results.is_empty() {
        println!("\n  No players found at position {}.", position.code());
        return Ok(());
    }
    println!("\n  Found {} {}(s):", results.len(), position.code());
    for player in results {
        screens::player_details(player);
    }
    Ok(())
}

pub fn save(roster: &mut Roster, path: &Path) {
    match save_roster(roster, path) {
        Ok(()) => {
            roster.mark_saved();
            println!("\n  ✓ Roster saved to '{}'.", path.display());
        }
        Err(e) => println!("\n  Error saving file: {}. Check disk space and permissions.", e),
    }
}

pub fn load(roster: &mut Roster, path: &Path) -> Result<()> {
    if !roster_file_exists(path) {
        println!("\n  File '{}' not found.", path.display());
        return Ok(());
    }

    if roster.has_unsaved_changes()
        && !prompt_yes_no(
            "  You have unsaved changes. Loading will overwrite them. Continue? (Y/N): ",
        )?
    {
        println!("\n  Load cancelled.");
        return Ok(());
    }

    match load_roster(roster, path) {
        Ok(summary) => {
            println!("\n  ✓ Loaded {} players from '{}'.", summary.loaded, path.display());
            if summary.skipped > 0 {
                println!("  Skipped {} malformed record(s).", summary.skipped);
            }
        }
        Err(e) => println!("\n  Error loading file: {}.", e),
    }
    Ok(())
}

pub fn change_team_name(roster: &mut Roster) -> Result<()> {
    println!("\n  Current team name: {}", roster.team_name());
    let new_name = prompt_validated("  Enter new team name: ", validate_name)?;
    roster.set_team_name(new_name.clone());
    println!("\n  ✓ Team name changed to '{}'.", new_name);
    Ok(())
}

/// Returns true when the session should end.
pub fn handle_exit(roster: &mut Roster, path: &Path) -> Result<bool> {
    if roster.has_unsaved_changes()
        && prompt_yes_no("\n  You have unsaved changes. Save before exiting? (Y/N): ")?
    {
        save(roster, path);
    }
    Ok(true)
}

//! 80-column table and menu rendering. Pure output, no prompting.

use roster_core::{format_height, Player, Position, Roster, MAX_ROSTER_SIZE};

const WIDTH: usize = 80;

pub fn banner(title: &str) {
    println!();
    println!("{}", "=".repeat(WIDTH));
    println!("{:^width$}", title, width = WIDTH);
    println!("{}", "=".repeat(WIDTH));
}

pub fn main_menu(team_name: &str) {
    banner(&format!("ROSTER MANAGER - {}", team_name));
    println!();
    println!("  [1]  View Full Roster");
    println!("  [2]  View Roster by Position");
    println!("  [3]  View Top Scorers");
    println!("  [4]  Add Player");
    println!("  [5]  Remove Player");
    println!("  [6]  Edit Player");
    println!("  [7]  Search Players");
    println!("  [8]  Save Roster");
    println!("  [9]  Load Roster");
    println!("  [10] Change Team Name");
    println!("  [0]  Exit");
    println!();
}

pub fn search_menu() {
    banner("SEARCH PLAYERS");
    println!();
    println!("  [1] Search by Name");
    println!("  [2] Search by Jersey Number");
    println!("  [3] Search by Position");
    println!("  [0] Back to Main Menu");
    println!();
}

pub fn edit_menu(player: &Player) {
    banner(&format!("EDITING: {} (#{})", player.full_name(), player.jersey_number));
    println!();
    println!("  [1] Edit Name");
    println!("  [2] Edit Jersey Number");
    println!("  [3] Edit Position");
    println!("  [4] Edit Physical Stats (Height/Weight/Age)");
    println!("  [5] Edit Performance Stats (PPG/RPG/APG)");
    println!("  [6] Edit All Fields");
    println!("  [0] Cancel and Return");
    println!();
}

fn last_first(player: &Player) -> String {
    // char-wise cut: names may contain non-ASCII letters
    format!("{}, {}", player.last_name, player.first_name).chars().take(20).collect()
}

pub fn player_row(p: &Player) -> String {
    format!(
        "| #{:02} | {:<20} | {:<3} | {:<6} | {:>3} | {:>5.1} | {:>5.1} | {:>5.1} |",
        p.jersey_number,
        last_first(p),
        p.position.code(),
        format_height(p.height_inches),
        p.weight_lbs,
        p.points_per_game,
        p.rebounds_per_game,
        p.assists_per_game,
    )
}

fn table_header() {
    println!("  #   | Name                 | Pos | Height | Wt  |  PPG  |  RPG  |  APG  |");
    println!("{}", "-".repeat(WIDTH));
}

pub fn full_roster(roster: &Roster) {
    if roster.is_empty() {
        println!("\n  No players on roster. Add players using option [4].");
        return;
    }

    banner(&format!("{} ROSTER", roster.team_name()));
    table_header();
    for player in roster.players() {
        println!("{}", player_row(player));
    }
    println!("{}", "-".repeat(WIDTH));
    println!(
        "  Players: {}/{} | Available Slots: {}",
        roster.len(),
        MAX_ROSTER_SIZE,
        roster.remaining_slots()
    );
    println!("{}", "=".repeat(WIDTH));
}

pub fn by_position(roster: &Roster) {
    if roster.is_empty() {
        println!("\n  No players on roster.");
        return;
    }

    banner(&format!("{} - BY POSITION", roster.team_name()));
    for position in Position::ALL {
        let players = roster.find_by_position(position);
        if players.is_empty() {
            continue;
        }
        println!("\n  {} ({}):", position.code(), position.display_name());
        println!("{}", "-".repeat(WIDTH - 2));
        for player in players {
            println!("  {}", player_row(player));
        }
    }
    println!("{}", "=".repeat(WIDTH));
}

pub fn top_scorers(roster: &Roster) {
    if roster.is_empty() {
        println!("\n  No players on roster.");
        return;
    }

    banner(&format!("{} - TOP SCORERS", roster.team_name()));
    println!("  Rank | Name                 | Pos |  PPG  |  RPG  |  APG  |");
    println!("{}", "-".repeat(WIDTH));
    for (rank, p) in roster.by_points_desc().iter().enumerate() {
        println!(
            "  {:>4} | {:<20} | {:<3} | {:>5.1} | {:>5.1} | {:>5.1} |",
            rank + 1,
            last_first(p),
            p.position.code(),
            p.points_per_game,
            p.rebounds_per_game,
            p.assists_per_game,
        );
    }
    println!("{}", "=".repeat(WIDTH));
}

pub fn player_details(p: &Player) {
    println!();
    println!("  Name:     {}", p.full_name());
    println!("  Jersey:   #{}", p.jersey_number);
    println!("  Position: {} ({})", p.position.code(), p.position.display_name());
    println!("  Height:   {}", format_height(p.height_inches));
    println!("  Weight:   {} lbs", p.weight_lbs);
    println!("  Age:      {} years", p.age);
    println!("  PPG:      {:.1}", p.points_per_game);
    println!("  RPG:      {:.1}", p.rebounds_per_game);
    println!("  APG:      {:.1}", p.assists_per_game);
}

//! Interactive console roster manager.
//!
//! Menu-driven frontend over `roster_core`: view/add/remove/edit/search
//! players, save and load the flat roster file, rename the team. Offers to
//! save on exit when there are unsaved changes.

mod flows;
mod prompt;
mod screens;

use anyhow::Result;
use clap::Parser;
use roster_core::{load_roster, roster_file_exists, Roster, DATA_FILE};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "roster_cli")]
#[command(about = "Single-team roster manager", long_about = None)]
struct Cli {
    /// Backing roster file
    #[arg(long, default_value = DATA_FILE)]
    file: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut roster = Roster::new("Los Angeles Lakers");

    if roster_file_exists(&cli.file) {
        match load_roster(&mut roster, &cli.file) {
            Ok(summary) => {
                println!(
                    "\n  Loaded {} players from '{}'.",
                    summary.loaded,
                    cli.file.display()
                );
                prompt::pause()?;
            }
            Err(e) => {
                println!("\n  Could not load '{}': {}.", cli.file.display(), e);
                prompt::pause()?;
            }
        }
    }

    let mut running = true;
    while running {
        prompt::clear_screen();
        screens::main_menu(roster.team_name());

        let choice = prompt::prompt_menu_choice(0, 10)?;
        match choice {
            1 => flows::view_full_roster(&roster),
            2 => flows::view_by_position(&roster),
            3 => flows::view_top_scorers(&roster),
            4 => flows::add_player(&mut roster)?,
            5 => flows::remove_player(&mut roster)?,
            6 => flows::edit_player(&mut roster)?,
            7 => flows::search_players(&roster)?,
            8 => flows::save(&mut roster, &cli.file),
            9 => flows::load(&mut roster, &cli.file)?,
            10 => flows::change_team_name(&mut roster)?,
            _ => running = !flows::handle_exit(&mut roster, &cli.file)?,
        }

        if running && choice != 0 {
            prompt::pause()?;
        }
    }

    println!("\n  Goodbye!\n");
    Ok(())
}

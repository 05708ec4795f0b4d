//! Stdin prompt helpers: every validated prompt re-asks until the validator
//! accepts. The only hard failure is the input stream closing.

use anyhow::{bail, Result};
use roster_core::{validate_bounded_int, validate_yes_no, ValidationError};
use std::io::{self, Write};

/// Print `prompt` and read one trimmed line. Errors when stdin reaches EOF.
pub fn read_trimmed(prompt: &str) -> Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        bail!("input stream closed");
    }
    Ok(line.trim().to_string())
}

/// Re-prompt until `validator` accepts, echoing its rejection message.
pub fn prompt_validated<T>(
    prompt: &str,
    validator: impl Fn(&str) -> Result<T, ValidationError>,
) -> Result<T> {
    loop {
        let input = read_trimmed(prompt)?;
        match validator(&input) {
            Ok(value) => return Ok(value),
            Err(e) => println!("  Invalid input: {}.", e),
        }
    }
}

pub fn prompt_menu_choice(min: u32, max: u32) -> Result<u32> {
    loop {
        let input = read_trimmed("  Enter choice: ")?;
        match validate_bounded_int(&input, min, max) {
            Ok(choice) => return Ok(choice),
            Err(_) => {
                println!("  Invalid input. Please enter a number between {} and {}.", min, max)
            }
        }
    }
}

pub fn prompt_yes_no(prompt: &str) -> Result<bool> {
    loop {
        let input = read_trimmed(prompt)?;
        match validate_yes_no(&input) {
            Ok(answer) => return Ok(answer),
            Err(_) => println!("  Please enter Y or N."),
        }
    }
}

pub fn pause() -> Result<()> {
    let _ = read_trimmed("\n  Press Enter to continue...")?;
    Ok(())
}

pub fn clear_screen() {
    // ANSI clear + cursor home; a scrolled screen is harmless where
    // escape codes are unsupported.
    print!("\x1B[2J\x1B[1;1H");
    let _ = io::stdout().flush();
}

#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** Wayfarer **
//! A small terminal text adventure.

use std::io::Write;

use anyhow::Result;
use colored::Colorize;
use log::info;

use wayfarer::repl::input::{Console, InputEvent, TerminalConsole};
use wayfarer::style::GameStyle;
use wayfarer::{World, run_repl};

fn main() -> Result<()> {
    env_logger::init();
    info!("Start: wayfarer v{}", wayfarer::WAYFARER_VERSION);

    // clear the screen
    print!("\x1B[2J\x1B[H");
    std::io::stdout().flush()?;

    println!("{:^60}", "WAYFARER: A SMALL ADVENTURE".bright_yellow().underline());
    println!("\n{}", "Welcome to the Text Adventure Game!".heading_style());

    let mut console = TerminalConsole::new()?;
    let name = match console.read_line("What's your name, adventurer? ")? {
        InputEvent::Line(line) => {
            let trimmed = line.trim().to_string();
            if trimmed.is_empty() { "Adventurer".to_string() } else { trimmed }
        },
        InputEvent::Eof | InputEvent::Interrupted => {
            println!("Maybe another time, then.");
            return Ok(());
        },
    };
    println!("Welcome, {}! Your adventure begins...", name.as_str().bold().bright_blue());

    let mut world = World::sample(&name);
    info!("world ready, starting the game loop");
    run_repl(&mut world, &mut console, &mut rand::rng())
}

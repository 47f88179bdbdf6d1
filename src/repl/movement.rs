//! Handler for moving the player between connected locations.

use anyhow::{Context, Result};
use log::info;

use crate::repl::input::{Console, InputEvent};
use crate::style::GameStyle;
use crate::world::World;

/// Offer the current location's connections as a numbered menu and move the
/// player to the chosen one. Anything other than a valid 1-based index leaves
/// the player where they are.
pub fn move_handler<C: Console>(world: &mut World, console: &mut C) -> Result<()> {
    let connections = world
        .map
        .connections(&world.player.location)
        .with_context(|| format!("player stranded in '{}'", world.player.location))?
        .to_vec();

    println!("You can move to these locations:");
    for (i, name) in connections.iter().enumerate() {
        println!("{}. {}", i + 1, name.location_style());
    }

    let prompt = "Enter the number of your destination: ".prompt_style().to_string();
    let line = match console.read_line(&prompt)? {
        InputEvent::Line(line) => line,
        InputEvent::Eof | InputEvent::Interrupted => {
            println!("{}", "Invalid choice. You stay where you are.".error_style());
            return Ok(());
        },
    };

    match line.trim().parse::<usize>() {
        Ok(choice) if (1..=connections.len()).contains(&choice) => {
            let destination = connections[choice - 1].clone();
            info!("{} moved from '{}' to '{destination}'", world.player.name, world.player.location);
            world.player.location = destination;
            println!("You have moved to {}.", world.player.location.location_style());
        },
        _ => println!("{}", "Invalid choice. You stay where you are.".error_style()),
    }
    Ok(())
}

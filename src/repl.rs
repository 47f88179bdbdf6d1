//! The game's read-eval-print loop and command handlers.
//!
//! One iteration renders the status block and location, fires any
//! location-triggered encounter, lists the quests on offer, then reads one
//! menu choice and dispatches to a handler. The loop owns the [`World`] and
//! hands mutable access only to the handler currently executing; it runs
//! until the player quits or input ends.

pub mod encounter;
pub mod input;
pub mod inventory;
pub mod movement;
pub mod quests;

use anyhow::{Context, Result};
use log::info;
use rand::Rng;

use crate::style::GameStyle;
use crate::world::World;
use input::{Console, InputEvent};

pub use encounter::run_encounter;
pub use inventory::inventory_handler;
pub use movement::move_handler;
pub use quests::take_quest_handler;


/// Control flow signal used by handlers to exit the REPL.
pub enum ReplControl {
    Continue,
    Quit,
}

/// Run the main game loop until the player quits.
///
/// Randomness is injected so sessions can be made deterministic; live play
/// passes `rand::rng()`.
///
/// # Errors
/// Propagates input failures and lookups that can only miss if the seeded
/// world data is inconsistent.
pub fn run_repl<C: Console, R: Rng>(world: &mut World, console: &mut C, rng: &mut R) -> Result<()> {
    loop {
        render_status(world);

        let description = world
            .map
            .describe(&world.player.location)
            .with_context(|| format!("player stranded in '{}'", world.player.location))?;
        let width = textwrap::termwidth().min(84);
        println!("{}", textwrap::fill(description, width).description_style());

        run_encounter(world, console, rng)?;

        let available = world.quests.available(&world.player.location);
        if !available.is_empty() {
            println!("{}", "Available Quests:".heading_style());
            for (menu_pos, &idx) in available.iter().enumerate() {
                if let Some(quest) = world.quests.get(idx) {
                    println!(
                        "{}. {}: {}",
                        menu_pos + 1,
                        quest.name.quest_style(),
                        quest.description
                    );
                }
            }
        }

        println!("\nWhat would you like to do?");
        println!("1. Move to a new location");
        println!("2. Check inventory");
        println!("3. Take on a quest");
        println!("4. Quit game");

        let prompt = "Enter your choice (1-4): ".prompt_style().to_string();
        let line = match console.read_line(&prompt)? {
            InputEvent::Line(line) => line,
            InputEvent::Eof => {
                quit_handler(world);
                break;
            },
            InputEvent::Interrupted => continue,
        };

        match line.trim() {
            "1" => move_handler(world, console)?,
            "2" => inventory_handler(&world.player),
            "3" => take_quest_handler(world, console, rng, &available)?,
            "4" => {
                if let ReplControl::Quit = quit_handler(world) {
                    break;
                }
            },
            _ => println!("{}", "Invalid choice. Please try again.".error_style()),
        }
    }
    Ok(())
}

/// Print the per-turn status block: location, health, inventory.
fn render_status(world: &World) {
    let divider = "=".repeat(40);
    println!("\n{divider}");
    println!("Location: {}", world.player.location.location_style());
    println!("Health: {}", world.player.health.to_string().health_style());
    println!("Inventory: {}", world.player.inventory.join(", ").item_style());
    println!("{divider}");
}

/// Say goodbye and signal the loop to stop. No state is mutated.
fn quit_handler(world: &World) -> ReplControl {
    info!(
        "{} quit at '{}' with {} hp",
        world.player.name, world.player.location, world.player.health
    );
    info!("ending inventory:");
    world.player.inventory.iter().for_each(|i| info!("- {i}"));
    for quest in &world.quests {
        info!("quest '{}': {:?}", quest.name, quest.status());
    }
    println!("Thanks for playing! Goodbye.");
    ReplControl::Quit
}

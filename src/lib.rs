#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

pub const WAYFARER_VERSION: &str = env!("CARGO_PKG_VERSION");

// Core modules
pub mod map;
pub mod player;
pub mod quest;
pub mod repl;
pub mod style;
pub mod world;

// Re-exports for convenience
pub use map::{Location, MapError, WorldMap};
pub use player::Player;
pub use quest::{ChallengeKind, Quest, QuestLog, QuestStatus};
pub use repl::input::{Console, InputEvent, ScriptedConsole, TerminalConsole};
pub use repl::run_repl;
pub use world::World;

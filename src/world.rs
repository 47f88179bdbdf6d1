//! The aggregate game world and its seeding.
//!
//! [`World`] bundles the fixed map, the quest log, and the player. It is
//! created once at startup and owned by the REPL for the whole session; no
//! state lives anywhere else.

use log::info;

use crate::map::{Location, WorldMap};
use crate::player::Player;
use crate::quest::{ChallengeKind, Quest, QuestLog};

/// Complete state of a running game.
#[derive(Debug, Clone)]
pub struct World {
    pub map: WorldMap,
    pub quests: QuestLog,
    pub player: Player,
}

impl World {
    /// Build the sample world: six locations radiating out from the trailhead
    /// and five quests, two of which carry bespoke mini-games. The forest
    /// hosts the number-guessing drunkard and the cave the rock-paper-scissors
    /// stranger; those locations declare their encounters here, and matching
    /// quests are seeded alongside.
    pub fn sample(player_name: &str) -> World {
        let mut map = WorldMap::new();
        map.insert(
            Location::new(
                "start",
                "You are at the starting point. There's a path leading to a forest, a cave, and a mountain.",
                &["forest", "cave", "mountain"],
            )
            .with_arrival_note("You're at the beginning of your journey. The path ahead looks promising."),
        );
        map.insert(
            Location::new(
                "forest",
                "You are in a dense forest. You can see a clearing ahead.",
                &["start", "clearing"],
            )
            .with_encounter(ChallengeKind::GuessNumber),
        );
        map.insert(
            Location::new(
                "cave",
                "You are at the entrance of a dark cave. It looks ominous.",
                &["start"],
            )
            .with_arrival_note("The darkness of the cave is pierced by strange, glowing fungi on the walls.")
            .with_encounter(ChallengeKind::RockPaperScissors),
        );
        map.insert(Location::new(
            "clearing",
            "You are in a peaceful clearing in the forest.",
            &["forest"],
        ));
        map.insert(
            Location::new(
                "mountain",
                "You are at the base of a tall mountain. The air is thin and crisp.",
                &["start", "peak"],
            )
            .with_arrival_note("You feel the thin air at this altitude. The view from here is breathtaking."),
        );
        map.insert(Location::new(
            "peak",
            "You've reached the mountain peak. The view is breathtaking.",
            &["mountain"],
        ));

        let mut quests = QuestLog::new();
        quests.add(Quest::new(
            "Forest Exploration",
            "Explore the forest and find a rare flower",
            "forest",
            "Rare Flower",
            ChallengeKind::Generic,
        ));
        quests.add(Quest::new(
            "Cave Mystery",
            "Investigate the strange noises coming from the cave",
            "cave",
            "Ancient Artifact",
            ChallengeKind::Generic,
        ));
        quests.add(Quest::new(
            "Mountain Climb",
            "Reach the peak of the mountain",
            "mountain",
            "Golden Compass",
            ChallengeKind::Generic,
        ));
        quests.add(Quest::new(
            "Guess Number",
            "Play the guessing game in the forest",
            "forest",
            "Sword",
            ChallengeKind::GuessNumber,
        ));
        quests.add(Quest::new(
            "Rock Paper Scissors",
            "Play rock paper scissors in the cave",
            "cave",
            "Magical Amulet",
            ChallengeKind::RockPaperScissors,
        ));

        let player = Player::new(player_name, "start");
        info!(
            "world seeded: {} locations in play, {} quests, player '{}'",
            6,
            quests.len(),
            player.name
        );

        World { map, quests, player }
    }
}

//! Scripted end-to-end sessions through the full game loop.

use rand::RngCore;
use wayfarer::quest::QuestStatus;
use wayfarer::{ScriptedConsole, World, run_repl};

/// Generator that yields the same word forever, forcing the coin flip.
struct FixedRng(u64);

impl RngCore for FixedRng {
    fn next_u32(&mut self) -> u32 {
        (self.0 & u64::from(u32::MAX)) as u32
    }
    fn next_u64(&mut self) -> u64 {
        self.0
    }
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        dest.fill(0);
    }
}

fn run_script(script: &[&str]) -> World {
    let mut world = World::sample("Tess");
    let mut console = ScriptedConsole::new(script.iter().copied());
    run_repl(&mut world, &mut console, &mut FixedRng(1)).unwrap();
    world
}

#[test]
fn quit_immediately_mutates_nothing() {
    let world = run_script(&["4"]);
    assert_eq!(world.player.location, "start");
    assert_eq!(world.player.health, 100);
    assert!(world.player.inventory.is_empty());
    for quest in &world.quests {
        assert_eq!(quest.status(), QuestStatus::Fresh);
    }
}

#[test]
fn eof_ends_the_session_like_a_quit() {
    let world = run_script(&[]);
    assert_eq!(world.player.location, "start");
    assert!(world.player.inventory.is_empty());
}

#[test]
fn invalid_menu_choices_are_recovered() {
    // Garbage, out-of-range, blank; the loop keeps going until the quit.
    let world = run_script(&["x", "9", "", "4"]);
    assert_eq!(world.player.location, "start");
    assert_eq!(world.player.health, 100);
}

#[test]
fn move_then_inspect_then_quit() {
    // Move (start -> mountain is connection 3), check inventory, quit.
    let world = run_script(&["1", "3", "2", "4"]);
    assert_eq!(world.player.location, "mountain");
    assert!(world.player.inventory.is_empty());
}

#[test]
fn bad_move_choice_stays_put() {
    let world = run_script(&["1", "7", "4"]);
    assert_eq!(world.player.location, "start");
}

#[test]
fn generic_quest_resolves_on_the_mountain() {
    // Move to the mountain, take its only quest, quit. The forced flip makes
    // the outcome deterministic either way; assert the terminal-state
    // invariants rather than a particular side of the coin.
    let world = run_script(&["1", "3", "3", "1", "4"]);
    assert_eq!(world.player.location, "mountain");

    let quest = world
        .quests
        .iter()
        .find(|q| q.location == "mountain")
        .unwrap();
    assert!(quest.completed, "the quest must resolve, never dangle");
    assert_eq!(quest.attempts, 1);
    if quest.success {
        assert_eq!(world.player.inventory, [quest.reward.clone()]);
    } else {
        assert!(world.player.inventory.is_empty());
    }
    assert!(world.quests.available("mountain").is_empty());
}

#[test]
fn cave_encounter_fires_once_and_a_decline_sticks() {
    // Enter the cave; the stranger's challenge fires automatically. Decline,
    // then quit. The quest is parked in progress and never offered again.
    let world = run_script(&["1", "2", "no", "4"]);
    assert_eq!(world.player.location, "cave");

    let quest = world.quests.iter().find(|q| q.name == "Rock Paper Scissors").unwrap();
    assert_eq!(quest.status(), QuestStatus::InProgress);
    assert_eq!(quest.attempts, 1);
    assert!(world.player.inventory.is_empty());
    assert_eq!(world.player.health, 100);

    // The cave's generic quest is still listed; the parked one is not.
    let listed = world.quests.available("cave");
    assert_eq!(listed.len(), 1);
    assert_eq!(world.quests.get(listed[0]).unwrap().name, "Cave Mystery");
}

#[test]
fn cave_rps_played_to_a_throw_is_internally_consistent() {
    // The stranger's throw comes from the injected generator, so don't pin
    // the winner; whatever happened must leave a coherent world. Exact
    // win/loss outcomes are pinned at the unit level where both throws are
    // forced.
    let world = run_script(&["1", "2", "yes", "rock", "4"]);
    let quest = world.quests.iter().find(|q| q.name == "Rock Paper Scissors").unwrap();
    assert_eq!(quest.attempts, 1);

    match quest.status() {
        QuestStatus::Resolved { success: true } => {
            assert_eq!(world.player.inventory, ["Magical Amulet"]);
            assert_eq!(world.player.health, 100);
        },
        QuestStatus::Resolved { success: false } => {
            assert!(world.player.inventory.is_empty());
            assert_eq!(world.player.health, 90);
        },
        // A tie resolves nothing and costs nothing.
        QuestStatus::InProgress => {
            assert!(world.player.inventory.is_empty());
            assert_eq!(world.player.health, 100);
        },
        QuestStatus::Fresh => panic!("the encounter must at least mark an attempt"),
    }
    // However it went, the quest never reappears.
    assert!(!world
        .quests
        .available("cave")
        .iter()
        .any(|&idx| world.quests.get(idx).unwrap().name == "Rock Paper Scissors"));
}

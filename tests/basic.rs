use wayfarer as wf;
use wf::quest::QuestStatus;
use wf::{ChallengeKind, MapError, Quest, QuestLog, World};

#[test]
fn test_lib_version() {
    assert!(!wf::WAYFARER_VERSION.is_empty());
}

#[test]
fn test_sample_world_shape() {
    let world = World::sample("Tess");
    assert_eq!(world.quests.len(), 5);
    for name in ["start", "forest", "cave", "clearing", "mountain", "peak"] {
        assert!(world.map.contains(name), "missing location '{name}'");
    }
}

#[test]
fn test_sample_world_connections() {
    let world = World::sample("Tess");
    assert_eq!(
        world.map.connections("start").unwrap(),
        ["forest".to_string(), "cave".to_string(), "mountain".to_string()]
    );
    assert_eq!(world.map.connections("peak").unwrap(), ["mountain".to_string()]);
}

#[test]
fn test_unknown_location_lookup_fails() {
    let world = World::sample("Tess");
    assert_eq!(
        world.map.describe("shire"),
        Err(MapError::UnknownLocation("shire".into()))
    );
}

#[test]
fn test_minigame_quests_are_seeded_where_declared() {
    let world = World::sample("Tess");
    let forest = world
        .quests
        .challenge_at("forest", ChallengeKind::GuessNumber)
        .and_then(|idx| world.quests.get(idx))
        .expect("forest guessing quest");
    assert_eq!(forest.reward, "Sword");

    let cave = world
        .quests
        .challenge_at("cave", ChallengeKind::RockPaperScissors)
        .and_then(|idx| world.quests.get(idx))
        .expect("cave rock-paper-scissors quest");
    assert_eq!(cave.reward, "Magical Amulet");
}

#[test]
fn test_availability_never_lists_played_or_completed() {
    let mut log = QuestLog::new();
    log.add(Quest::new("a", "", "glade", "x", ChallengeKind::Generic));
    log.add(Quest::new("b", "", "glade", "y", ChallengeKind::Generic));
    assert_eq!(log.available("glade").len(), 2);

    log.get_mut(0).unwrap().attempt();
    assert_eq!(log.available("glade"), vec![1]);

    let b = log.get_mut(1).unwrap();
    b.attempt();
    b.complete();
    assert!(log.available("glade").is_empty());
}

#[test]
fn test_quest_resolution_is_terminal() {
    let mut quest = Quest::new("a", "", "glade", "x", ChallengeKind::Generic);
    quest.attempt();
    quest.attempt();
    quest.fail();
    assert_eq!(quest.status(), QuestStatus::Resolved { success: false });
    assert_eq!(quest.attempts, 2);
}

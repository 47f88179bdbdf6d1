//! Location-triggered encounters and the two bespoke mini-games.
//!
//! Each turn, before the menu, the current location gets a chance to act: it
//! prints its arrival note (or a generic exploration line) and, if it declares
//! an encounter, runs the matching mini-game. The game only actually fires
//! while an unplayed quest of that challenge kind exists at the location, so
//! in practice each encounter is single-shot.
//!
//! A mini-game that is declined or abandoned mid-play leaves its quest parked
//! in progress: it never resolves, never reappears in listings, and never
//! re-triggers.

use std::fmt;

use anyhow::Result;
use log::{info, warn};
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::quest::ChallengeKind;
use crate::repl::input::{Console, InputEvent};
use crate::repl::quests::announce_outcome;
use crate::style::GameStyle;
use crate::world::World;

/// Fire the current location's arrival text and encounter, if any.
///
/// # Errors
/// Propagates input failures from the mini-games.
pub fn run_encounter<C: Console, R: Rng>(
    world: &mut World,
    console: &mut C,
    rng: &mut R,
) -> Result<()> {
    let Some(location) = world.map.get(&world.player.location) else {
        warn!("encounter step found no location '{}'", world.player.location);
        return Ok(());
    };
    let encounter = location.encounter;

    match &location.arrival_note {
        Some(note) => println!("{}", note.flavor_style()),
        None if encounter.is_none() => println!(
            "You explore the {}, taking in the unique sights and sounds.",
            location.name.location_style()
        ),
        None => {},
    }

    let Some(kind) = encounter else {
        return Ok(());
    };
    let Some(quest_idx) = world.quests.challenge_at(&world.player.location, kind) else {
        // A declared encounter with no backing quest simply never fires.
        return Ok(());
    };
    if world.quests.get(quest_idx).is_some_and(|q| q.played) {
        return Ok(());
    }

    match kind {
        ChallengeKind::GuessNumber => guess_number(world, quest_idx, console, rng),
        ChallengeKind::RockPaperScissors => rock_paper_scissors(world, quest_idx, console, rng),
        ChallengeKind::Generic => Ok(()),
    }
}

/// Run the number-guessing game against a freshly drawn secret.
///
/// # Errors
/// Propagates input failures.
pub fn guess_number<C: Console, R: Rng>(
    world: &mut World,
    quest_idx: usize,
    console: &mut C,
    rng: &mut R,
) -> Result<()> {
    let secret = rng.random_range(1..=100);
    play_guess_number(world, quest_idx, console, secret)
}

/// Core of the guessing game, with the secret supplied by the caller so a
/// scripted session can be exact.
///
/// Ten guesses; inputs outside 1..=100 and non-numbers are rejected without
/// costing a guess. A hit completes the quest and awards its reward; running
/// dry reveals the secret and fails it.
///
/// # Errors
/// Propagates input failures.
pub fn play_guess_number<C: Console>(
    world: &mut World,
    quest_idx: usize,
    console: &mut C,
    secret: u32,
) -> Result<()> {
    let Some(quest) = world.quests.get_mut(quest_idx) else {
        return Ok(());
    };
    quest.attempt();
    let reward = quest.reward.clone();
    info!("guess-number started, secret drawn");

    println!("As you enter the forest, you encounter a drunk man who challenges you to a game.");
    println!(
        "{}",
        "He says: 'If you can guess my number between 1 and 100 in 10 tries or less, I'll let you pass and give you a sword!'"
            .flavor_style()
    );

    let mut guesses_left = 10;
    while guesses_left > 0 {
        let prompt = format!("Enter your guess (1-100), you have {guesses_left} guesses left: ")
            .prompt_style()
            .to_string();
        let line = match console.read_line(&prompt)? {
            InputEvent::Line(line) => line,
            InputEvent::Eof | InputEvent::Interrupted => {
                // Walking away leaves the quest unresolved for good.
                println!("You back away from the drunk man and his game.");
                warn!("guess-number abandoned mid-play");
                return Ok(());
            },
        };

        let Ok(guess) = line.trim().parse::<u32>() else {
            println!("{}", "Please enter a valid number.".error_style());
            continue;
        };
        if !(1..=100).contains(&guess) {
            println!("{}", "Please enter a number between 1 and 100.".error_style());
            continue;
        }

        if guess == secret {
            println!("{}", "Congratulations! You guessed the number correctly!".reward_style());
            println!("The drunk man lets you pass and hands you a shiny sword.");
            world.player.add_item(&reward);
            if let Some(quest) = world.quests.get_mut(quest_idx) {
                quest.complete();
                announce_outcome(quest);
            }
            return Ok(());
        }

        if guess < secret {
            println!("Too low!");
        } else {
            println!("Too high!");
        }
        guesses_left -= 1;
    }

    println!("Sorry, you've run out of guesses. The number was {secret}.");
    println!("The drunk man blocks your path. You'll have to find another way around.");
    if let Some(quest) = world.quests.get_mut(quest_idx) {
        quest.fail();
        announce_outcome(quest);
    }
    Ok(())
}

/// One of the three throws in rock-paper-scissors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hand {
    Rock,
    Paper,
    Scissors,
}

impl Hand {
    pub const ALL: [Hand; 3] = [Hand::Rock, Hand::Paper, Hand::Scissors];

    /// Parse a player's throw, case-insensitively.
    pub fn parse(input: &str) -> Option<Hand> {
        match input.trim().to_lowercase().as_str() {
            "rock" => Some(Hand::Rock),
            "paper" => Some(Hand::Paper),
            "scissors" => Some(Hand::Scissors),
            _ => None,
        }
    }

    /// Standard beats relation: rock > scissors > paper > rock.
    pub fn beats(self, other: Hand) -> bool {
        matches!(
            (self, other),
            (Hand::Rock, Hand::Scissors) | (Hand::Paper, Hand::Rock) | (Hand::Scissors, Hand::Paper)
        )
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Hand::Rock => "rock",
            Hand::Paper => "paper",
            Hand::Scissors => "scissors",
        };
        write!(f, "{name}")
    }
}

/// Run the rock-paper-scissors challenge, drawing the stranger's throw at
/// random.
///
/// # Errors
/// Propagates input failures.
pub fn rock_paper_scissors<C: Console, R: Rng>(
    world: &mut World,
    quest_idx: usize,
    console: &mut C,
    rng: &mut R,
) -> Result<()> {
    let Some(quest) = world.quests.get_mut(quest_idx) else {
        return Ok(());
    };
    quest.attempt();

    println!("You encounter a mysterious stranger who challenges you to a game of Rock, Paper, Scissors.");
    println!(
        "{}",
        "If you win, you'll receive a magical item. If you lose, you'll lose some health. Do you accept? (yes/no)"
            .flavor_style()
    );

    let answer = match console.read_line("")? {
        InputEvent::Line(line) => line,
        InputEvent::Eof | InputEvent::Interrupted => String::new(),
    };
    if !answer.trim().eq_ignore_ascii_case("yes") {
        // Declining parks the quest in progress forever.
        println!("You decline the challenge and continue on your journey.");
        info!("rock-paper-scissors declined, quest left unresolved");
        return Ok(());
    }

    let prompt = "Enter your choice (rock/paper/scissors): ".prompt_style().to_string();
    let line = match console.read_line(&prompt)? {
        InputEvent::Line(line) => line,
        InputEvent::Eof | InputEvent::Interrupted => String::new(),
    };
    let Some(player_hand) = Hand::parse(&line) else {
        println!("{}", "Invalid choice. Game cancelled.".error_style());
        info!("rock-paper-scissors cancelled on bad throw, quest left unresolved");
        return Ok(());
    };

    let stranger_hand = Hand::ALL.choose(rng).copied().unwrap_or(Hand::Rock);
    play_rps_round(world, quest_idx, player_hand, stranger_hand);
    Ok(())
}

/// Resolve one round of rock-paper-scissors with both throws known. A tie has
/// no effect beyond a message and leaves the quest in progress.
pub fn play_rps_round(world: &mut World, quest_idx: usize, player: Hand, stranger: Hand) {
    println!("The stranger chose {stranger}.");

    if player == stranger {
        println!("It's a tie! Nothing happens.");
        return;
    }

    if player.beats(stranger) {
        println!("{}", "You win! You receive a magical amulet.".reward_style());
        let reward = world
            .quests
            .get(quest_idx)
            .map(|q| q.reward.clone())
            .unwrap_or_default();
        world.player.add_item(&reward);
        if let Some(quest) = world.quests.get_mut(quest_idx) {
            quest.complete();
            announce_outcome(quest);
        }
    } else {
        println!("You lose! You feel a bit weaker.");
        world.player.damage(10);
        println!(
            "Your health is now {}",
            world.player.health.to_string().health_style()
        );
        if let Some(quest) = world.quests.get_mut(quest_idx) {
            quest.fail();
            announce_outcome(quest);
        }
    }
}

//! Quests and the quest log.
//!
//! A [`Quest`] is a named challenge bound to one location. It moves one way
//! through a small state machine: fresh, then in progress once an attempt
//! starts, then resolved as a success or a failure. Resolution is terminal;
//! no quest is ever replayed.
//!
//! The [`QuestLog`] is an append-only, insertion-ordered collection. Its
//! availability filter hides a quest the instant an attempt starts -- even
//! before resolution -- so a quest abandoned mid-game vanishes from every
//! listing for the rest of the session.

use log::info;

/// What actually happens when a quest is taken on.
///
/// Dispatch is by variant, not by quest name, so a typo in seeded data cannot
/// silently downgrade a mini-game quest to a coin flip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChallengeKind {
    /// No bespoke mini-game; resolved by an unweighted coin flip.
    Generic,
    GuessNumber,
    RockPaperScissors,
}

/// Where a quest currently sits in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestStatus {
    Fresh,
    InProgress,
    Resolved { success: bool },
}

/// A single challenge tied to a location, with its attempt/resolution state.
#[derive(Debug, Clone)]
pub struct Quest {
    pub name: String,
    pub description: String,
    /// Name of the owning location; must be a valid map key (seeding's job).
    pub location: String,
    /// Item granted on success.
    pub reward: String,
    pub challenge: ChallengeKind,
    pub played: bool,
    pub completed: bool,
    /// Meaningful only once `completed` is set.
    pub success: bool,
    pub attempts: u32,
}

impl Quest {
    pub fn new(
        name: &str,
        description: &str,
        location: &str,
        reward: &str,
        challenge: ChallengeKind,
    ) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            location: location.to_string(),
            reward: reward.to_string(),
            challenge,
            played: false,
            completed: false,
            success: false,
            attempts: 0,
        }
    }

    /// Record the start of an attempt. May be called again before resolution;
    /// each call bumps the attempt counter.
    pub fn attempt(&mut self) {
        self.played = true;
        self.attempts += 1;
        info!("quest '{}' attempted ({} so far)", self.name, self.attempts);
    }

    /// Resolve the quest as a success. One-way; never called twice in a
    /// correct run.
    pub fn complete(&mut self) {
        self.completed = true;
        self.success = true;
        info!("quest '{}' completed, reward: {}", self.name, self.reward);
    }

    /// Resolve the quest as a failure. One-way.
    pub fn fail(&mut self) {
        self.completed = true;
        self.success = false;
        info!("quest '{}' failed after {} attempt(s)", self.name, self.attempts);
    }

    /// Derive the state-machine view of this quest's flags.
    pub fn status(&self) -> QuestStatus {
        if self.completed {
            QuestStatus::Resolved { success: self.success }
        } else if self.played {
            QuestStatus::InProgress
        } else {
            QuestStatus::Fresh
        }
    }
}

/// Append-only, insertion-ordered collection of every quest in the game.
#[derive(Debug, Clone, Default)]
pub struct QuestLog {
    quests: Vec<Quest>,
}

impl QuestLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a quest. Insertion order is the order quests appear in menus.
    pub fn add(&mut self, quest: Quest) {
        self.quests.push(quest);
    }

    /// Indices of quests offered at `location`: owned by it, not completed,
    /// and not yet played, in insertion order.
    pub fn available(&self, location: &str) -> Vec<usize> {
        self.quests
            .iter()
            .enumerate()
            .filter(|(_, q)| q.location == location && !q.completed && !q.played)
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Find the quest backing a location-triggered encounter: the first quest
    /// at `location` with the given challenge kind. Seeding supplies at most
    /// one per location, so first-match is unambiguous.
    pub fn challenge_at(&self, location: &str, kind: ChallengeKind) -> Option<usize> {
        self.quests
            .iter()
            .position(|q| q.location == location && q.challenge == kind)
    }

    pub fn get(&self, idx: usize) -> Option<&Quest> {
        self.quests.get(idx)
    }

    pub fn get_mut(&mut self, idx: usize) -> Option<&mut Quest> {
        self.quests.get_mut(idx)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Quest> {
        self.quests.iter()
    }

    pub fn len(&self) -> usize {
        self.quests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quests.is_empty()
    }
}

impl<'a> IntoIterator for &'a QuestLog {
    type Item = &'a Quest;
    type IntoIter = std::slice::Iter<'a, Quest>;

    fn into_iter(self) -> Self::IntoIter {
        self.quests.iter()
    }
}

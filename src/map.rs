//! Location definitions and the fixed world map.
//!
//! Every place the player can stand is a [`Location`]: a name, a description,
//! and an ordered list of outbound connections. The whole map is built once at
//! startup and never mutated afterward. Connections are directed; nothing here
//! enforces that they are symmetric or even that they point at locations which
//! exist -- that is the world builder's responsibility.

use std::collections::HashMap;

use thiserror::Error;

use crate::quest::ChallengeKind;

/// Errors from map lookups. Only ever seen if the seeded world data is
/// inconsistent, which is a programmer error rather than a player one.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MapError {
    #[error("unknown location: '{0}'")]
    UnknownLocation(String),
}

/// A named place in the world.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: String,
    pub description: String,
    /// Outbound connections, in the order they are offered to the player.
    pub connections: Vec<String>,
    /// Flavor line printed each time the player is here at the top of a turn.
    /// Locations without one fall back to a generic exploration line, unless
    /// they host an encounter (which supplies its own introduction).
    pub arrival_note: Option<String>,
    /// Mini-game this location triggers on arrival, if any. The encounter
    /// only actually fires while a matching unplayed quest exists here.
    pub encounter: Option<ChallengeKind>,
}

impl Location {
    /// Create a plain location with no arrival note and no encounter.
    pub fn new(name: &str, description: &str, connections: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            connections: connections.iter().map(ToString::to_string).collect(),
            arrival_note: None,
            encounter: None,
        }
    }

    /// Attach a flavor line printed whenever the player starts a turn here.
    #[must_use]
    pub fn with_arrival_note(mut self, note: &str) -> Self {
        self.arrival_note = Some(note.to_string());
        self
    }

    /// Declare the mini-game encounter this location triggers.
    #[must_use]
    pub fn with_encounter(mut self, kind: ChallengeKind) -> Self {
        self.encounter = Some(kind);
        self
    }
}

/// The fixed, read-only table of locations, keyed by name.
#[derive(Debug, Clone, Default)]
pub struct WorldMap {
    locations: HashMap<String, Location>,
}

impl WorldMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a location to the map. Last insert wins on a duplicate name.
    pub fn insert(&mut self, location: Location) {
        self.locations.insert(location.name.clone(), location);
    }

    pub fn get(&self, name: &str) -> Option<&Location> {
        self.locations.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.locations.contains_key(name)
    }

    /// Description of the named location.
    ///
    /// # Errors
    /// `MapError::UnknownLocation` if no location has that name.
    pub fn describe(&self, name: &str) -> Result<&str, MapError> {
        self.locations
            .get(name)
            .map(|loc| loc.description.as_str())
            .ok_or_else(|| MapError::UnknownLocation(name.to_string()))
    }

    /// Outbound connections of the named location, in offer order.
    ///
    /// # Errors
    /// `MapError::UnknownLocation` if no location has that name.
    pub fn connections(&self, name: &str) -> Result<&[String], MapError> {
        self.locations
            .get(name)
            .map(|loc| loc.connections.as_slice())
            .ok_or_else(|| MapError::UnknownLocation(name.to_string()))
    }
}

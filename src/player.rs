//! Player -- the adventurer's mutable state for one session.

use log::info;

/// The player character. One per run; owned by the world and handed to
/// whichever handler is currently executing.
#[derive(Debug, Clone)]
pub struct Player {
    pub name: String,
    /// Hit points. Floors at zero; nothing in the current design raises it.
    pub health: u32,
    /// Ordered, append-only list of item names. Duplicates allowed.
    pub inventory: Vec<String>,
    /// Name of the occupied location. Always a valid map key; only the Move
    /// handler rewrites it.
    pub location: String,
}

impl Player {
    pub fn new(name: &str, start: &str) -> Self {
        Self {
            name: name.to_string(),
            health: 100,
            inventory: Vec::new(),
            location: start.to_string(),
        }
    }

    /// Reduce health, saturating at zero.
    pub fn damage(&mut self, amount: u32) {
        self.health = self.health.saturating_sub(amount);
        info!("{} took {amount} damage, health now {}", self.name, self.health);
    }

    /// Append an item to inventory.
    pub fn add_item(&mut self, item: &str) {
        self.inventory.push(item.to_string());
        info!("{} picked up '{item}'", self.name);
    }

    pub fn has_item(&self, item: &str) -> bool {
        self.inventory.iter().any(|i| i == item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn damage_floors_at_zero() {
        let mut player = Player::new("Tess", "start");
        player.damage(30);
        assert_eq!(player.health, 70);

        player.health = 5;
        player.damage(10);
        assert_eq!(player.health, 0);
    }

    #[test]
    fn inventory_keeps_order_and_duplicates() {
        let mut player = Player::new("Tess", "start");
        player.add_item("Rope");
        player.add_item("Torch");
        player.add_item("Rope");
        assert_eq!(player.inventory, ["Rope", "Torch", "Rope"]);
        assert!(player.has_item("Torch"));
        assert!(!player.has_item("Lantern"));
    }
}

//! Handler for the inventory listing. Pure read.

use crate::player::Player;
use crate::style::GameStyle;

/// Print the player's inventory, one line per item, duplicates and all.
pub fn inventory_handler(player: &Player) {
    if player.inventory.is_empty() {
        println!("Your inventory is empty.");
    } else {
        println!("Your inventory contains:");
        for item in &player.inventory {
            println!("- {}", item.item_style());
        }
    }
}

//! Player state: current room, inventory, story flags.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The player's position, possessions, and story flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Id of the room the player is standing in.
    pub room_id: String,
    /// Ids of carried objects, unique, in pickup order.
    pub inventory: Vec<String>,
    /// Boolean story state (`knows_the_future`, `found_quarter`, ...).
    pub flags: BTreeMap<String, bool>,
}

impl Player {
    /// Create a player standing in the given room with empty hands.
    pub fn new(room_id: impl Into<String>) -> Self {
        Self {
            room_id: room_id.into(),
            inventory: Vec::new(),
            flags: BTreeMap::new(),
        }
    }

    /// Set a story flag at construction time.
    pub fn with_flag(mut self, name: impl Into<String>, value: bool) -> Self {
        self.flags.insert(name.into(), value);
        self
    }

    /// Whether an object is carried.
    pub fn has_item(&self, object_id: &str) -> bool {
        self.inventory.iter().any(|id| id == object_id)
    }

    /// Add an object to the inventory; carrying it twice is impossible.
    pub fn add_item(&mut self, object_id: impl Into<String>) {
        let object_id = object_id.into();
        if !self.has_item(&object_id) {
            self.inventory.push(object_id);
        }
    }

    /// Remove an object from the inventory. Returns whether it was carried.
    pub fn remove_item(&mut self, object_id: &str) -> bool {
        if let Some(pos) = self.inventory.iter().position(|id| id == object_id) {
            self.inventory.remove(pos);
            true
        } else {
            false
        }
    }

    /// Read a story flag, defaulting to `false`.
    pub fn flag(&self, name: &str) -> bool {
        self.flags.get(name).copied().unwrap_or(false)
    }

    /// Set a story flag.
    pub fn set_flag(&mut self, name: impl Into<String>, value: bool) {
        self.flags.insert(name.into(), value);
    }
}

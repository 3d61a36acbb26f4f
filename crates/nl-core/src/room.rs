//! Rooms and their exit tables.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One exit: a keyword the player can move through, and where it leads.
///
/// Keywords are not limited to compass directions; rooms freely alias
/// exits with nouns like `shop`, `counter`, or `trapdoor`. Order matters:
/// exits are listed to the player in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exit {
    /// The movement keyword, lowercase.
    pub keyword: String,
    /// Destination room id.
    pub to: String,
}

/// A place the player can stand in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    /// Stable identifier, referenced by exits and the player's position.
    pub id: String,
    /// Display name shown as the room header.
    pub name: String,
    /// Full description; re-entry shows only the first sentence.
    pub description: String,
    /// Ordered exit table.
    pub exits: Vec<Exit>,
    /// Ids of objects physically present, in listing order.
    pub objects: Vec<String>,
    /// Ids of NPCs present, in listing order.
    pub npcs: Vec<String>,
    /// Whether the player has been here.
    pub visited: bool,
    /// Boolean puzzle state local to this room.
    pub flags: BTreeMap<String, bool>,
}

impl Room {
    /// Create an empty room.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            exits: Vec::new(),
            objects: Vec::new(),
            npcs: Vec::new(),
            visited: false,
            flags: BTreeMap::new(),
        }
    }

    /// Add an exit.
    pub fn with_exit(mut self, keyword: impl Into<String>, to: impl Into<String>) -> Self {
        self.exits.push(Exit {
            keyword: keyword.into(),
            to: to.into(),
        });
        self
    }

    /// List objects present in the room.
    pub fn with_objects<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.objects.extend(ids.into_iter().map(Into::into));
        self
    }

    /// List NPCs present in the room.
    pub fn with_npcs<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.npcs.extend(ids.into_iter().map(Into::into));
        self
    }

    /// Set a puzzle flag.
    pub fn with_flag(mut self, name: impl Into<String>, value: bool) -> Self {
        self.flags.insert(name.into(), value);
        self
    }

    /// Look up the destination for a movement keyword.
    pub fn exit_to(&self, keyword: &str) -> Option<&str> {
        self.exits
            .iter()
            .find(|e| e.keyword == keyword)
            .map(|e| e.to.as_str())
    }

    /// Read a puzzle flag, defaulting to `false`.
    pub fn flag(&self, name: &str) -> bool {
        self.flags.get(name).copied().unwrap_or(false)
    }

    /// Set a puzzle flag in place.
    pub fn set_flag(&mut self, name: impl Into<String>, value: bool) {
        self.flags.insert(name.into(), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exits_resolve_by_keyword_in_order() {
        let room = Room::new("outside", "Outside", "Pavement.")
            .with_exit("east", "store")
            .with_exit("in", "store")
            .with_exit("west", "home");

        assert_eq!(room.exit_to("east"), Some("store"));
        assert_eq!(room.exit_to("in"), Some("store"));
        assert_eq!(room.exit_to("north"), None);
        assert_eq!(room.exits[0].keyword, "east");
    }

    #[test]
    fn flags_default_to_false() {
        let mut room = Room::new("entry", "Entry", "Dust.").with_flag("sealed", true);
        assert!(room.flag("sealed"));
        assert!(!room.flag("visited_twice"));
        room.set_flag("sealed", false);
        assert!(!room.flag("sealed"));
    }
}

//! Objects, NPCs, and the typed location they occupy.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::WorldError;

/// Where an entity currently is.
///
/// Serialized as the compact strings `room:<id>`, `player`, and
/// `inside:<id>` so snapshots stay readable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Location {
    /// Physically present in a room.
    Room(String),
    /// Carried by the player.
    Player,
    /// Hidden inside another object (e.g. a keycard between book pages).
    Inside(String),
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Room(id) => write!(f, "room:{id}"),
            Self::Player => write!(f, "player"),
            Self::Inside(id) => write!(f, "inside:{id}"),
        }
    }
}

impl From<Location> for String {
    fn from(location: Location) -> Self {
        location.to_string()
    }
}

impl TryFrom<String> for Location {
    type Error = WorldError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value == "player" {
            return Ok(Self::Player);
        }
        if let Some(id) = value.strip_prefix("room:") {
            if !id.is_empty() {
                return Ok(Self::Room(id.to_string()));
            }
        }
        if let Some(id) = value.strip_prefix("inside:") {
            if !id.is_empty() {
                return Ok(Self::Inside(id.to_string()));
            }
        }
        Err(WorldError::BadLocation(value))
    }
}

/// A physical object the player can examine, and possibly take and use.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Object {
    /// Stable identifier, referenced by room lists and the inventory.
    pub id: String,
    /// Display name shown in room listings and messages.
    pub name: String,
    /// Alternate spellings the resolver accepts as exact matches.
    pub aliases: Vec<String>,
    /// Text shown when the object is examined or read.
    pub description: String,
    /// Where the object currently is.
    pub location: Location,
    /// Whether the object can be picked up.
    pub portable: bool,
    /// Static text shown when the object is used, if any.
    pub use_text: Option<String>,
}

impl Object {
    /// Create an object carried by nobody and placed nowhere; chain
    /// [`Object::in_room`] or [`Object::inside`] to position it.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            aliases: Vec::new(),
            description: description.into(),
            location: Location::Player,
            portable: false,
            use_text: None,
        }
    }

    /// Place the object in a room.
    pub fn in_room(mut self, room_id: impl Into<String>) -> Self {
        self.location = Location::Room(room_id.into());
        self
    }

    /// Hide the object inside another object.
    pub fn inside(mut self, object_id: impl Into<String>) -> Self {
        self.location = Location::Inside(object_id.into());
        self
    }

    /// Add alternate spellings.
    pub fn with_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases.extend(aliases.into_iter().map(Into::into));
        self
    }

    /// Mark the object as portable.
    pub fn portable(mut self) -> Self {
        self.portable = true;
        self
    }

    /// Set the static use text.
    pub fn with_use_text(mut self, text: impl Into<String>) -> Self {
        self.use_text = Some(text.into());
        self
    }
}

/// A character the player can examine and talk to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Npc {
    /// Stable identifier, referenced by room NPC lists.
    pub id: String,
    /// Display name shown in room listings and messages.
    pub name: String,
    /// Alternate spellings the resolver accepts as exact matches.
    pub aliases: Vec<String>,
    /// Text shown when the NPC is examined.
    pub description: String,
    /// Where the NPC currently is.
    pub location: Location,
    /// Static dialogue pool; one line is spoken per talk. May be empty.
    pub dialogue: Vec<String>,
}

impl Npc {
    /// Create an NPC; chain [`Npc::in_room`] to position it.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            aliases: Vec::new(),
            description: description.into(),
            location: Location::Player,
            dialogue: Vec::new(),
        }
    }

    /// Place the NPC in a room.
    pub fn in_room(mut self, room_id: impl Into<String>) -> Self {
        self.location = Location::Room(room_id.into());
        self
    }

    /// Add alternate spellings.
    pub fn with_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases.extend(aliases.into_iter().map(Into::into));
        self
    }

    /// Add static dialogue lines.
    pub fn with_dialogue<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dialogue.extend(lines.into_iter().map(Into::into));
        self
    }
}

//! Error types used throughout the crate.

use thiserror::Error;

/// Result type for world-model operations.
pub type WorldResult<T> = Result<T, WorldError>;

/// Consistency violations in a [`crate::WorldState`].
///
/// These surface when a world is constructed or when a snapshot is
/// restored; a valid world can only be mutated through the helpers on
/// `WorldState`, which preserve the invariants.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WorldError {
    /// An exit keyword points at a room id that does not exist.
    #[error("exit \"{keyword}\" in room \"{room}\" leads to unknown room \"{target}\"")]
    DanglingExit {
        /// The room the exit leaves from.
        room: String,
        /// The exit keyword.
        keyword: String,
        /// The missing destination id.
        target: String,
    },

    /// A room lists an object id that does not exist.
    #[error("room \"{room}\" lists unknown object \"{object}\"")]
    UnknownRoomObject {
        /// The listing room.
        room: String,
        /// The missing object id.
        object: String,
    },

    /// A room lists an NPC id that does not exist.
    #[error("room \"{room}\" lists unknown npc \"{npc}\"")]
    UnknownRoomNpc {
        /// The listing room.
        room: String,
        /// The missing NPC id.
        npc: String,
    },

    /// A room lists an object whose own location disagrees.
    #[error("object \"{object}\" is listed in room \"{room}\" but located at \"{location}\"")]
    MisplacedObject {
        /// The listing room.
        room: String,
        /// The object id.
        object: String,
        /// Where the object claims to be.
        location: String,
    },

    /// The player stands in a room that does not exist.
    #[error("player is in unknown room \"{0}\"")]
    UnknownPlayerRoom(String),

    /// The inventory lists an object id that does not exist.
    #[error("inventory lists unknown object \"{0}\"")]
    UnknownInventoryObject(String),

    /// An object claims to be carried but is not in the inventory.
    #[error("object \"{0}\" is located at the player but not carried")]
    StrayCarriedObject(String),

    /// A location string could not be parsed.
    #[error("malformed location \"{0}\"")]
    BadLocation(String),
}

//! The central world state that owns everything.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::entity::{Location, Npc, Object};
use crate::error::{WorldError, WorldResult};
use crate::player::Player;
use crate::room::Room;

/// Cross-cutting session state readable by any handler.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Globals {
    /// Number of commands processed in active play.
    pub turn: u64,
    /// Whether the adventure has left the title screen.
    pub game_started: bool,
    /// Boolean puzzle state shared across rooms (`backdoor_unlocked`, ...).
    pub flags: BTreeMap<String, bool>,
}

impl Globals {
    /// Set a puzzle flag at construction time.
    pub fn with_flag(mut self, name: impl Into<String>, value: bool) -> Self {
        self.flags.insert(name.into(), value);
        self
    }

    /// Read a puzzle flag, defaulting to `false`.
    pub fn flag(&self, name: &str) -> bool {
        self.flags.get(name).copied().unwrap_or(false)
    }

    /// Set a puzzle flag.
    pub fn set_flag(&mut self, name: impl Into<String>, value: bool) {
        self.flags.insert(name.into(), value);
    }
}

/// The whole mutable world: rooms, objects, NPCs, player, globals.
///
/// There is exactly one of these per session. Handlers mutate it in
/// place; the persistence layer snapshots it wholesale. Entities are
/// never deleted, only relocated or flagged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldState {
    /// All rooms by id.
    pub rooms: BTreeMap<String, Room>,
    /// All objects by id, wherever they currently are.
    pub objects: BTreeMap<String, Object>,
    /// All NPCs by id.
    pub npcs: BTreeMap<String, Npc>,
    /// The player.
    pub player: Player,
    /// Cross-cutting session state.
    pub globals: Globals,
}

impl WorldState {
    /// Create an empty world with the given player.
    pub fn new(player: Player) -> Self {
        Self {
            rooms: BTreeMap::new(),
            objects: BTreeMap::new(),
            npcs: BTreeMap::new(),
            player,
            globals: Globals::default(),
        }
    }

    /// Add a room, keyed by its id.
    pub fn add_room(&mut self, room: Room) {
        self.rooms.insert(room.id.clone(), room);
    }

    /// Add an object, keyed by its id.
    pub fn add_object(&mut self, object: Object) {
        self.objects.insert(object.id.clone(), object);
    }

    /// Add an NPC, keyed by its id.
    pub fn add_npc(&mut self, npc: Npc) {
        self.npcs.insert(npc.id.clone(), npc);
    }

    /// Look up a room.
    pub fn room(&self, id: &str) -> Option<&Room> {
        self.rooms.get(id)
    }

    /// Look up a room mutably.
    pub fn room_mut(&mut self, id: &str) -> Option<&mut Room> {
        self.rooms.get_mut(id)
    }

    /// Look up an object.
    pub fn object(&self, id: &str) -> Option<&Object> {
        self.objects.get(id)
    }

    /// Look up an object mutably.
    pub fn object_mut(&mut self, id: &str) -> Option<&mut Object> {
        self.objects.get_mut(id)
    }

    /// Look up an NPC.
    pub fn npc(&self, id: &str) -> Option<&Npc> {
        self.npcs.get(id)
    }

    /// The room the player is standing in, if it exists.
    pub fn current_room(&self) -> Option<&Room> {
        self.rooms.get(&self.player.room_id)
    }

    /// Move an object into the player's hands, wherever it was: it is
    /// struck from every room listing, relocated to the player, and
    /// added to the inventory.
    pub fn give_to_player(&mut self, object_id: &str) {
        for room in self.rooms.values_mut() {
            room.objects.retain(|id| id != object_id);
        }
        if let Some(object) = self.objects.get_mut(object_id) {
            object.location = Location::Player;
        }
        self.player.add_item(object_id);
    }

    /// Move a carried object onto the floor of a room. Returns whether
    /// the object was actually carried.
    pub fn drop_from_player(&mut self, object_id: &str, room_id: &str) -> bool {
        if !self.player.remove_item(object_id) {
            return false;
        }
        if let Some(object) = self.objects.get_mut(object_id) {
            object.location = Location::Room(room_id.to_string());
        }
        if let Some(room) = self.rooms.get_mut(room_id) {
            room.objects.push(object_id.to_string());
        }
        true
    }

    /// Check the structural invariants: exits lead somewhere, room
    /// listings agree with entity locations, the player stands in a real
    /// room, and the inventory matches the carried locations.
    pub fn validate(&self) -> WorldResult<()> {
        for room in self.rooms.values() {
            for exit in &room.exits {
                if !self.rooms.contains_key(&exit.to) {
                    return Err(WorldError::DanglingExit {
                        room: room.id.clone(),
                        keyword: exit.keyword.clone(),
                        target: exit.to.clone(),
                    });
                }
            }
            for object_id in &room.objects {
                let Some(object) = self.objects.get(object_id) else {
                    return Err(WorldError::UnknownRoomObject {
                        room: room.id.clone(),
                        object: object_id.clone(),
                    });
                };
                if object.location != Location::Room(room.id.clone()) {
                    return Err(WorldError::MisplacedObject {
                        room: room.id.clone(),
                        object: object_id.clone(),
                        location: object.location.to_string(),
                    });
                }
            }
            for npc_id in &room.npcs {
                if !self.npcs.contains_key(npc_id) {
                    return Err(WorldError::UnknownRoomNpc {
                        room: room.id.clone(),
                        npc: npc_id.clone(),
                    });
                }
            }
        }

        if !self.rooms.contains_key(&self.player.room_id) {
            return Err(WorldError::UnknownPlayerRoom(self.player.room_id.clone()));
        }
        for object_id in &self.player.inventory {
            if !self.objects.contains_key(object_id) {
                return Err(WorldError::UnknownInventoryObject(object_id.clone()));
            }
        }
        for object in self.objects.values() {
            if object.location == Location::Player && !self.player.has_item(&object.id) {
                return Err(WorldError::StrayCarriedObject(object.id.clone()));
            }
        }
        Ok(())
    }
}

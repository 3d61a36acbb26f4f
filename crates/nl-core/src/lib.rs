//! World model for the NEUROLINK-7800 text adventure.
//!
//! This crate defines the data the interpreter operates on: rooms wired
//! together by exit keywords, objects and NPCs with aliases and locations,
//! the player, and the cross-cutting globals. The whole world is one
//! serializable [`WorldState`] value. It is constructed once, mutated in
//! place by command handlers, and snapshotted wholesale through a
//! [`SaveStore`] after every turn.

/// Objects, NPCs, and the typed location they occupy.
pub mod entity;
/// Error types used throughout the crate.
pub mod error;
/// Player state: current room, inventory, story flags.
pub mod player;
/// Rooms and their exit tables.
pub mod room;
/// Snapshot persistence behind the `SaveStore` trait.
pub mod store;
/// The central world state that owns everything.
pub mod world;

pub use entity::{Location, Npc, Object};
pub use error::WorldError;
pub use player::Player;
pub use room::{Exit, Room};
pub use store::{FileStore, MemoryStore, SaveStore, StoreError};
pub use world::{Globals, WorldState};

//! The NEUROLINK-7800 adventure world.
//!
//! A storm is rehearsing over a small town: a tech shop full of futures
//! that haven't happened yet, a warm house across the road, a train that
//! is always delayed, and a tunnel where worried voices argue about how
//! it all ends. This crate holds the content (rooms, objects, NPCs)
//! and the scripted behavior that wires the puzzles together.

mod npcs;
mod objects;
mod rooms;
mod script;

use nl_core::{Player, WorldState};
use nl_engine::WorldScript;

/// Assemble the complete world and its script. The player starts outside
/// the shopfront with a working light and no idea what's coming.
pub fn build() -> (WorldState, WorldScript) {
    let player = Player::new("outside")
        .with_flag("storm_noticed", false)
        .with_flag("has_light", true)
        .with_flag("knows_the_future", false)
        .with_flag("found_quarter", false);

    let mut world = WorldState::new(player);
    rooms::install(&mut world);
    objects::install(&mut world);
    npcs::install(&mut world);

    world.globals.set_flag("storm_warning_received", false);
    world.globals.set_flag("backdoor_unlocked", false);
    world.globals.set_flag("explored_all_rooms", false);

    (world, script::script())
}

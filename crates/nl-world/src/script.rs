//! Scripted puzzle behavior wiring the content together.
//!
//! All the special cases live here: the two locked doors around the
//! backrooms, the keycard hidden in THE CITY, the personal AI box that
//! shows you how the storm ends, and the tunnel dwellers who notice
//! when a lock opens far above them.

use nl_core::WorldState;
use nl_engine::WorldScript;
use rand::Rng;
use rand::rngs::StdRng;

const KEYCARD: &str = "backdoor_key_1";

/// The fragment of the wide-eyed figure's pleading line used to find it
/// in their pool.
const MANIC_MARKER: &str = "You've seen it! Please tell me!";

const THANKS_LINES: [&str; 3] = [
    "Whatever you unchained above us, thank you. The air moves differently down \
     here now.",
    "We felt a lock sigh open somewhere overhead. It's easier to breathe when \
     doors remember how.",
    "For a moment the corridor widened, as if the world remembered another exit. \
     That was you, wasn't it?",
];

const ABOUT: [&str; 13] = [
    "ABOUT THIS PLACE",
    "",
    "This is a small corner of the digital realm, or perhaps a text adventure in \
     someone's mind. The distinction blurs.",
    "",
    "Its keeper builds things: games, systems, experiments. Code as a form of \
     expression. A shapeshifter tool, played with while not quite knowing where \
     it's going, half of the time.",
    "",
    "Feel free to explore. Poke around. Break things (gently). Some objects \
     remember real projects; just be careful not to get lost.",
    "",
    "The engine runs entirely in your terminal. No servers were harmed in the \
     making of this adventure.",
    "",
    "Have fun!",
    "",
    "Type LOOK to continue exploring.",
];

pub(crate) fn script() -> WorldScript {
    WorldScript::new()
        .with_exit_gate("store", "backrooms_entry", staff_door)
        .with_exit_gate("tunnel", "backrooms_deep", metal_door)
        .with_use_hook("city_book", reveal_keycard)
        .with_use_hook("personal_ai_box", glimpse_the_future)
        .with_pickup_flag("quarter", "found_quarter")
        .with_dialogue("past_paranoid", tunnel_voice)
        .with_dialogue("future_paranoid", future_watcher)
        .with_dialogue("lost_wanderer", tunnel_voice)
        .with_dialogue("compilation_paranoid", tunnel_voice)
        .with_about(ABOUT)
}

/// The staff door between the shop and the backrooms. The first time it
/// admits the player, the whole back area remembers being opened.
fn staff_door(world: &mut WorldState) -> Option<String> {
    if !world.player.has_item(KEYCARD) {
        return Some(
            "You try the staff door, but the lock stares back, unimpressed. \
             Whatever opens it isn't in your hands yet."
                .to_string(),
        );
    }
    if !world.globals.flag("backdoor_unlocked") {
        world.globals.set_flag("backdoor_unlocked", true);
        if let Some(store) = world.room_mut("store") {
            store.set_flag("backdoor_unlocked", true);
        }
        if let Some(entry) = world.room_mut("backrooms_entry") {
            entry.set_flag("sealed", false);
        }
    }
    None
}

/// The tunnel-side metal door back into the deep backrooms.
fn metal_door(world: &mut WorldState) -> Option<String> {
    if world.player.has_item(KEYCARD) {
        None
    } else {
        Some(
            "Your hand finds a metal door in the gloom. It does not budge. \
             Something small and precise is missing from the equation."
                .to_string(),
        )
    }
}

/// Thumbing through THE CITY shakes the keycard loose, once.
fn reveal_keycard(world: &mut WorldState) -> Option<String> {
    if world.player.has_item(KEYCARD) {
        return None;
    }
    world.give_to_player(KEYCARD);
    Some(
        " You slip the frayed keycard you find between the pages into your pocket."
            .to_string(),
    )
}

/// Peering into the box leaves the player knowing too much.
fn glimpse_the_future(world: &mut WorldState) -> Option<String> {
    world.player.set_flag("knows_the_future", true);
    None
}

fn pool_of(world: &WorldState, npc_id: &str) -> Vec<String> {
    world
        .npc(npc_id)
        .map(|npc| npc.dialogue.clone())
        .unwrap_or_default()
}

/// Once the back door is open, the tunnel dwellers occasionally swap
/// their usual worries for gratitude.
fn thanks_override(world: &WorldState, rng: &mut StdRng) -> Option<String> {
    let opened =
        world.globals.flag("backdoor_unlocked") || world.player.has_item(KEYCARD);
    if opened && rng.random_bool(0.3) {
        Some(THANKS_LINES[rng.random_range(0..THANKS_LINES.len())].to_string())
    } else {
        None
    }
}

/// Shared selector for the tunnel dwellers with no conditional lines.
fn tunnel_voice(world: &WorldState, npc_id: &str, rng: &mut StdRng) -> String {
    let lines = pool_of(world, npc_id);
    if lines.is_empty() {
        return "...".to_string();
    }
    let line = lines[rng.random_range(0..lines.len())].clone();
    thanks_override(world, rng).unwrap_or(line)
}

/// The wide-eyed figure withholds their most desperate plea until the
/// player has actually glimpsed the future; after that it has an
/// elevated, but not guaranteed, chance of bursting out.
fn future_watcher(world: &WorldState, npc_id: &str, rng: &mut StdRng) -> String {
    let lines = pool_of(world, npc_id);
    if lines.is_empty() {
        return "...".to_string();
    }

    let manic = lines.iter().position(|line| line.contains(MANIC_MARKER));
    let knows = world.player.flag("knows_the_future");

    if let Some(idx) = manic {
        // The forced plea preempts even the thank-you pool.
        if knows && rng.random_bool(0.5) {
            return lines[idx].clone();
        }
    }

    let pool: Vec<&String> = lines
        .iter()
        .enumerate()
        .filter(|(idx, _)| knows || Some(*idx) != manic)
        .map(|(_, line)| line)
        .collect();
    if pool.is_empty() {
        return "...".to_string();
    }
    let line = pool[rng.random_range(0..pool.len())].clone();
    thanks_override(world, rng).unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn world() -> WorldState {
        let (world, _) = crate::build();
        world
    }

    fn rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    #[test]
    fn staff_door_refuses_without_the_keycard() {
        let mut world = world();
        let refusal = staff_door(&mut world).unwrap();
        assert!(refusal.contains("unimpressed"));
        assert!(!world.globals.flag("backdoor_unlocked"));
    }

    #[test]
    fn first_unlock_unseals_the_back_area() {
        let mut world = world();
        world.give_to_player(KEYCARD);

        assert_eq!(staff_door(&mut world), None);
        assert!(world.globals.flag("backdoor_unlocked"));
        assert!(world.room("store").unwrap().flag("backdoor_unlocked"));
        assert!(!world.room("backrooms_entry").unwrap().flag("sealed"));
    }

    #[test]
    fn keycard_reveal_happens_once() {
        let mut world = world();

        let extra = reveal_keycard(&mut world).unwrap();
        assert!(extra.contains("frayed keycard"));
        assert!(world.player.has_item(KEYCARD));

        assert_eq!(reveal_keycard(&mut world), None);
        assert_eq!(
            world.player.inventory.iter().filter(|id| *id == KEYCARD).count(),
            1
        );
    }

    #[test]
    fn the_plea_is_withheld_until_the_future_is_known() {
        let world = world();
        // Many draws, never the withheld line while ignorant.
        for seed in 0..64 {
            let line = future_watcher(&world, "future_paranoid", &mut rng(seed));
            assert!(!line.contains(MANIC_MARKER), "seed {seed} leaked the plea");
        }
    }

    #[test]
    fn the_plea_can_burst_out_once_the_future_is_known() {
        let mut world = world();
        let _ = glimpse_the_future(&mut world);

        let forced = (0..64)
            .any(|seed| {
                future_watcher(&world, "future_paranoid", &mut rng(seed))
                    .contains(MANIC_MARKER)
            });
        assert!(forced);
    }

    #[test]
    fn gratitude_only_flows_after_the_unlock() {
        let mut world = world();
        for seed in 0..64 {
            let line = tunnel_voice(&world, "lost_wanderer", &mut rng(seed));
            assert!(!THANKS_LINES.contains(&line.as_str()), "seed {seed}");
        }

        world.give_to_player(KEYCARD);
        let thanked = (0..64).any(|seed| {
            let line = tunnel_voice(&world, "lost_wanderer", &mut rng(seed));
            THANKS_LINES.contains(&line.as_str())
        });
        assert!(thanked);
    }
}

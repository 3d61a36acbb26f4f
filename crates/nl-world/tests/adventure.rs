//! End-to-end playthroughs of the shipped world.

use nl_core::MemoryStore;
use nl_engine::{Session, SessionConfig};

fn new_session(seed: u64) -> (Session, MemoryStore) {
    let (world, script) = nl_world::build();
    let store = MemoryStore::new();
    let session = Session::new(
        world,
        script,
        Box::new(store.clone()),
        SessionConfig { seed: Some(seed) },
    )
    .expect("the shipped world is consistent");
    (session, store)
}

/// A session already past the title screen.
fn started(seed: u64) -> (Session, MemoryStore) {
    let (mut session, store) = new_session(seed);
    session.submit("look");
    (session, store)
}

#[test]
fn the_first_look_shows_the_shopfront() {
    let (mut session, _) = new_session(1);

    let text = session.submit("look").flat_text();
    assert!(text.contains("INITIATING ADVENTURE SEQUENCE"));
    assert!(text.contains("Outside the Shopfront"));
    assert!(text.contains("damp pavement"));
    assert!(text.contains("Present: friendly lookout."));
    assert!(text.contains("tarnished quarter"));
    assert!(text.contains("Obvious exits:"));
    assert!(text.contains("EAST"));
}

#[test]
fn taking_the_quarter_moves_it_and_flags_it() {
    let (mut session, _) = started(1);

    let text = session.submit("take quarter").flat_text();
    assert!(text.contains("You pick up the tarnished quarter."));
    assert!(session.world().player.has_item("quarter"));
    assert!(session.world().player.flag("found_quarter"));
    assert!(
        !session
            .world()
            .room("outside")
            .unwrap()
            .objects
            .contains(&"quarter".to_string())
    );

    // Aliases work too, and the room listing no longer shows it.
    let text = session.submit("look").flat_text();
    assert!(!text.contains("tarnished quarter,"));
    let text = session.submit("examine coin").flat_text();
    assert!(text.contains("1984"));
}

#[test]
fn walking_into_a_wall_changes_nothing() {
    let (mut session, _) = started(1);
    session.submit("east");
    session.submit("north"); // retro games aisle

    let text = session.submit("north").flat_text();
    assert_eq!(
        text,
        "You cannot go that way. The world, it seems, has boundaries."
    );
    assert_eq!(session.world().player.room_id, "store_games");
}

#[test]
fn keyword_exits_work_like_directions() {
    let (mut session, _) = started(1);

    let text = session.submit("go shop").flat_text();
    assert!(text.contains("Tech Shop"));

    let text = session.submit("go counter").flat_text();
    assert!(text.contains("staff door"));
    assert_eq!(session.world().player.room_id, "store");
}

#[test]
fn talking_to_nobody_echoes_the_name() {
    let (mut session, _) = started(1);
    assert_eq!(
        session.submit("talk to bob").flat_text(),
        "You cannot see any \"bob\" here to talk to."
    );
}

#[test]
fn the_lookout_always_has_something_to_say() {
    let (mut session, _) = started(3);
    let line = session.submit("talk to lookout").flat_text();
    let (world, _) = nl_world::build();
    let pool = &world.npc("friendly_lookout").unwrap().dialogue;
    assert!(pool.contains(&line));
}

#[test]
fn every_command_counts_a_turn_and_autosaves() {
    let (mut session, store) = started(1);
    let turns = session.turn();
    let saves = store.save_count();

    session.submit("inventory");
    session.submit("frobnicate");
    session.submit("north");

    assert_eq!(session.turn(), turns + 3);
    assert_eq!(store.save_count(), saves + 3);
}

#[test]
fn the_backrooms_quest_unlocks_in_order() {
    let (mut session, _) = started(1);

    // The staff door is shut until the keycard turns up.
    session.submit("east");
    let refusal = session.submit("east").flat_text();
    assert!(refusal.contains("the lock stares back, unimpressed"));
    assert_eq!(session.world().player.room_id, "store");

    // The keycard hides inside THE CITY in the books section.
    session.submit("south");
    session.submit("east");
    let reveal = session.submit("use book").flat_text();
    assert!(reveal.contains("You thumb through THE CITY."));
    assert!(reveal.contains("into your pocket"));
    assert!(session.world().player.has_item("backdoor_key_1"));

    // Using it again finds nothing new.
    let again = session.submit("use book").flat_text();
    assert!(!again.contains("into your pocket"));

    // Now the staff door opens and the first unlock unseals the area.
    session.submit("west");
    session.submit("north");
    let entered = session.submit("east").flat_text();
    assert!(entered.contains("Backrooms Entrance"));
    assert!(session.world().globals.flag("backdoor_unlocked"));
    assert!(!session.world().room("backrooms_entry").unwrap().flag("sealed"));

    // Deeper still, and out into the tunnel.
    let deep = session.submit("down").flat_text();
    assert!(deep.contains("Deep Down"));
    let tunnel = session.submit("east").flat_text();
    assert!(tunnel.contains("The Tunnel"));

    // The metal door lets a keycard holder back through.
    let back = session.submit("west").flat_text();
    assert!(back.contains("Deep Down"));
}

#[test]
fn the_metal_door_blocks_the_keyless() {
    let (mut session, _) = started(1);

    // Reach the tunnel through the home-office trapdoor, no keycard.
    session.submit("west");
    session.submit("north");
    let tunnel = session.submit("down").flat_text();
    assert!(tunnel.contains("The Tunnel"));

    let refusal = session.submit("west").flat_text();
    assert!(refusal.contains("It does not budge."));
    assert_eq!(session.world().player.room_id, "tunnel");
}

#[test]
fn peering_into_the_box_changes_what_the_tunnel_says() {
    let (mut session, _) = started(1);

    session.submit("east");
    session.submit("use ai box");
    assert!(session.world().player.flag("knows_the_future"));
}

#[test]
fn reading_frames_the_description() {
    let (mut session, _) = started(1);
    let text = session.submit("read sign").flat_text();
    assert!(text.starts_with("You read the flickering neon sign."));
    assert!(text.contains("METAPHORA"));
}

#[test]
fn the_bell_rings_for_nobody() {
    let (mut session, _) = started(1);
    session.submit("east");
    let text = session.submit("use bell").flat_text();
    assert!(text.contains("No clerk appears"));
}

#[test]
fn a_second_session_resumes_from_the_autosave() {
    let (mut first, store) = started(1);
    first.submit("take quarter");
    first.submit("north");

    let (world, script) = nl_world::build();
    let mut second = Session::new(
        world,
        script,
        Box::new(store.clone()),
        SessionConfig { seed: Some(9) },
    )
    .unwrap();

    let text = second.submit("load").flat_text();
    assert!(text.contains("Game loaded."));
    assert!(text.contains("Train Station"));
    assert!(second.world().player.has_item("quarter"));
    assert!(second.world().player.flag("found_quarter"));
    assert_eq!(second.world().player.room_id, "train_station");
}

#[test]
fn save_load_round_trip_is_observably_identical() {
    let (mut session, _) = started(1);
    session.submit("take quarter");
    session.submit("east");
    session.submit("save");

    let room = session.world().player.room_id.clone();
    let inventory = session.world().player.inventory.clone();
    let flags = session.world().player.flags.clone();
    let room_objects = session.world().room("outside").unwrap().objects.clone();

    session.submit("load");

    assert_eq!(session.world().player.room_id, room);
    assert_eq!(session.world().player.inventory, inventory);
    assert_eq!(session.world().player.flags, flags);
    assert_eq!(
        session.world().room("outside").unwrap().objects,
        room_objects
    );
}

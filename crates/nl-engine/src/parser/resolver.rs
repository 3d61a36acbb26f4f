//! Free-text phrase to entity-id resolution.
//!
//! Matching is deliberately simple: a candidate matches when its display
//! name contains the phrase as a substring, or its id or one of its
//! aliases equals the phrase exactly. No fuzzy matching. The first hit
//! in candidate order wins, so a short phrase like "box" can land on an
//! earlier entity whose name merely contains it; that order-dependence
//! is part of the contract.

use nl_core::WorldState;

fn name_matches(name: &str, id: &str, aliases: &[String], phrase: &str) -> bool {
    name.to_lowercase().contains(phrase)
        || id == phrase
        || aliases.iter().any(|alias| alias.to_lowercase() == phrase)
}

/// Resolve a phrase to an object id. Candidates are the current room's
/// objects followed by the inventory, in listing order.
pub fn find_object(world: &WorldState, phrase: &str) -> Option<String> {
    let phrase = phrase.trim().to_lowercase();
    if phrase.is_empty() {
        return None;
    }
    let room = world.current_room()?;

    let candidates = room.objects.iter().chain(world.player.inventory.iter());
    for id in candidates {
        let Some(object) = world.object(id) else {
            continue;
        };
        if name_matches(&object.name, &object.id, &object.aliases, &phrase) {
            return Some(object.id.clone());
        }
    }
    None
}

/// Resolve a phrase to an NPC id. Only NPCs in the current room are
/// visible; everyone elsewhere is out of earshot.
pub fn find_npc(world: &WorldState, phrase: &str) -> Option<String> {
    let phrase = phrase.trim().to_lowercase();
    if phrase.is_empty() {
        return None;
    }
    let room = world.current_room()?;

    for id in &room.npcs {
        let Some(npc) = world.npc(id) else {
            continue;
        };
        if name_matches(&npc.name, &npc.id, &npc.aliases, &phrase) {
            return Some(npc.id.clone());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use nl_core::{Npc, Object, Player, Room, WorldState};

    fn test_world() -> WorldState {
        let mut world = WorldState::new(Player::new("shop"));
        world.add_room(
            Room::new("shop", "Shop", "Shelves.")
                .with_objects(["ai_box", "bell"])
                .with_npcs(["clerk"]),
        );
        world.add_room(Room::new("street", "Street", "Rain.").with_npcs(["busker"]));
        world.add_object(
            Object::new("ai_box", "personal AI box", "Cardboard towers.")
                .in_room("shop")
                .with_aliases(["box", "ai box"]),
        );
        world.add_object(
            Object::new("bell", "brass counter bell", "Polished brass.")
                .in_room("shop")
                .with_aliases(["counter"]),
        );
        world.add_npc(
            Npc::new("clerk", "tired clerk", "Half asleep.").in_room("shop"),
        );
        world.add_npc(
            Npc::new("busker", "rain-soaked busker", "Singing anyway.").in_room("street"),
        );
        world
    }

    #[test]
    fn substring_match_on_display_name() {
        let world = test_world();
        assert_eq!(find_object(&world, "brass"), Some("bell".to_string()));
        assert_eq!(find_object(&world, "AI BOX"), Some("ai_box".to_string()));
    }

    #[test]
    fn alias_and_id_match_exactly() {
        let world = test_world();
        assert_eq!(find_object(&world, "counter"), Some("bell".to_string()));
        assert_eq!(find_object(&world, "ai_box"), Some("ai_box".to_string()));
    }

    #[test]
    fn first_candidate_wins_on_overlap() {
        // "box" is a substring of "personal AI box" and an alias of it;
        // the earlier listing wins even for vaguer queries.
        let world = test_world();
        assert_eq!(find_object(&world, "box"), Some("ai_box".to_string()));
    }

    #[test]
    fn inventory_objects_are_candidates() {
        let mut world = test_world();
        world.add_object(
            Object::new("coin", "tarnished coin", "Old metal.").in_room("shop"),
        );
        world.give_to_player("coin");
        assert_eq!(find_object(&world, "coin"), Some("coin".to_string()));
    }

    #[test]
    fn npcs_resolve_only_in_current_room() {
        let mut world = test_world();
        assert_eq!(find_npc(&world, "clerk"), Some("clerk".to_string()));
        assert_eq!(find_npc(&world, "busker"), None);

        world.player.room_id = "street".to_string();
        assert_eq!(find_npc(&world, "busker"), Some("busker".to_string()));
        assert_eq!(find_npc(&world, "clerk"), None);
    }

    #[test]
    fn empty_or_unknown_phrases_resolve_to_nothing() {
        let world = test_world();
        assert_eq!(find_object(&world, ""), None);
        assert_eq!(find_object(&world, "   "), None);
        assert_eq!(find_object(&world, "zeppelin"), None);
        assert_eq!(find_npc(&world, "bob"), None);
    }
}

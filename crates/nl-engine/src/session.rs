//! The session: state machine, dispatcher, and verb handlers.

use nl_core::{Location, SaveStore, WorldError, WorldState};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::parser::{Command, Direction, Verb, find_npc, find_object, parse_line};
use crate::reply::{Reply, Style};
use crate::script::{Dialogue, WorldScript};

const MSG_NOWHERE: &str = "You are nowhere. This is concerning.";
const MSG_BOUNDARY: &str = "You cannot go that way. The world, it seems, has boundaries.";
const MSG_NO_SAVED_GAME: &str = "No saved game found. Perhaps you haven't been here before.";

const UNKNOWN_RESPONSES: [&str; 5] = [
    "That's ambitious. The parser, alas, is not.",
    "I do not understand that. Perhaps try different words?",
    "The parser scratches its metaphorical head. Type HELP for suggestions.",
    "That command exists in a parallel universe where the parser is smarter.",
    "You could do that, but it wouldn't advance the plot, such as it is.",
];

const HELP_TEXT: [&str; 22] = [
    "You type words. I try to understand them. We muddle through together.",
    "",
    "COMMANDS:",
    "  LOOK (L)         - Describe your surroundings",
    "  EXAMINE X (X X)  - Look closely at something",
    "  INVENTORY (I)    - Check what you're carrying",
    "  TAKE / GET       - Pick something up",
    "  DROP             - Put something down",
    "  USE              - Interact with an object",
    "  READ             - Read text on objects",
    "  TALK             - Strike up a conversation",
    "",
    "MOVEMENT:",
    "  NORTH (N), SOUTH (S), EAST (E), WEST (W)",
    "  UP (U), DOWN (D), IN, OUT",
    "",
    "META:",
    "  HELP    - You're reading it",
    "  ABOUT   - Learn more about this place",
    "  CLEAR   - Clear the screen",
    "  SAVE / LOAD - Preserve or restore your progress",
    "  QUIT    - A polite farewell",
];

const QUIT_TEXT: [&str; 3] = [
    "You consider leaving, but where would you go? The real world awaits, certainly, \
     with its meetings and deadlines. But you're always welcome back here. The \
     terminal will remember you.",
    "",
    "(Come back any time. Your progress is saved after every step.)",
];

/// Which screen the session is on. `Title` lasts until the first real
/// input; `Active` is terminal for the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Title,
    Active,
}

/// Configuration for a [`Session`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionConfig {
    /// RNG seed for deterministic flavor and dialogue selection. `None`
    /// seeds from the operating system.
    pub seed: Option<u64>,
}

/// One playthrough: the world, its script, a save store, and an RNG.
///
/// [`Session::submit`] is the whole surface: one input line in, one
/// [`Reply`] out, never an error. Every command processed in active play
/// advances the turn counter and autosaves, whether or not it succeeded
/// in world terms.
pub struct Session {
    world: WorldState,
    script: WorldScript,
    store: Box<dyn SaveStore>,
    rng: StdRng,
    mode: Mode,
}

impl Session {
    /// Create a session over a validated world. The only way this fails
    /// is an inconsistent world definition.
    pub fn new(
        world: WorldState,
        script: WorldScript,
        store: Box<dyn SaveStore>,
        config: SessionConfig,
    ) -> Result<Self, WorldError> {
        world.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Ok(Self {
            world,
            script,
            store,
            rng,
            mode: Mode::Title,
        })
    }

    /// The current world state.
    pub fn world(&self) -> &WorldState {
        &self.world
    }

    /// Number of commands processed in active play.
    pub fn turn(&self) -> u64 {
        self.world.globals.turn
    }

    /// Whether the session is still on the title screen.
    pub fn on_title(&self) -> bool {
        self.mode == Mode::Title
    }

    /// Process one line of player input.
    pub fn submit(&mut self, input: &str) -> Reply {
        let command = parse_line(input);
        match self.mode {
            // On the title screen, help and about show their content
            // without starting the adventure. Anything else starts it
            // and is then dispatched as a normal first command.
            Mode::Title => match command.verb {
                Some(Verb::Help) => self.do_help(),
                Some(Verb::About) => self.do_about(),
                _ => {
                    self.mode = Mode::Active;
                    self.world.globals.game_started = true;
                    let start = self.world.player.room_id.clone();
                    if let Some(room) = self.world.room_mut(&start) {
                        room.visited = true;
                    }
                    let mut reply = Reply::new();
                    reply.push_system("[ INITIATING ADVENTURE SEQUENCE... ]");
                    reply.blank();
                    reply.extend(self.turn_with(command));
                    reply
                }
            },
            Mode::Active => self.turn_with(command),
        }
    }

    /// Dispatch one command, advance the turn counter, autosave.
    fn turn_with(&mut self, command: Command) -> Reply {
        let reply = self.dispatch(command);
        self.world.globals.turn += 1;
        if let Err(e) = self.store.save(&self.world) {
            log::warn!("autosave failed: {e}");
        }
        reply
    }

    fn dispatch(&mut self, command: Command) -> Reply {
        match command.verb {
            None => self.unknown(),
            Some(Verb::Go) => match command.object.as_deref() {
                None => Reply::text("Go where? A direction would help."),
                Some(direction) => self.do_move(direction),
            },
            Some(Verb::Look) => self.do_look(command.object.as_deref()),
            Some(Verb::Examine) => self.do_examine(command.object.as_deref()),
            Some(Verb::Read) => self.do_read(command.object.as_deref()),
            Some(Verb::Inventory) => self.do_inventory(),
            Some(Verb::Take) => self.do_take(command.object.as_deref()),
            Some(Verb::Drop) => self.do_drop(command.object.as_deref()),
            Some(Verb::Use) => self.do_use(command.object.as_deref()),
            Some(Verb::Talk) => self.do_talk(command.object.as_deref()),
            Some(Verb::Help) => self.do_help(),
            Some(Verb::About) => self.do_about(),
            Some(Verb::Clear) => self.do_clear(),
            Some(Verb::Quit) => self.do_quit(),
            Some(Verb::Save) => self.do_save(),
            Some(Verb::Load) => self.do_load(),
        }
    }

    fn unknown(&mut self) -> Reply {
        let line = UNKNOWN_RESPONSES[self.rng.random_range(0..UNKNOWN_RESPONSES.len())];
        Reply::text(line)
    }

    fn do_move(&mut self, token: &str) -> Reply {
        let (from, target) = {
            let Some(room) = self.world.current_room() else {
                return Reply::text(MSG_NOWHERE);
            };
            // Single letters canonicalize; anything else is looked up
            // verbatim, so keyword exits like "shop" or "counter" work.
            let keyword = match Direction::parse(token) {
                Some(direction) => direction.name().to_string(),
                None => token.to_string(),
            };
            match room.exit_to(&keyword) {
                None => return Reply::text(MSG_BOUNDARY),
                Some(target) => (room.id.clone(), target.to_string()),
            }
        };

        let veto = self
            .script
            .exit_gate(&from, &target)
            .and_then(|gate| gate(&mut self.world));
        if let Some(refusal) = veto {
            return Reply::text(refusal);
        }

        self.world.player.room_id = target.clone();
        let was_visited = match self.world.room_mut(&target) {
            Some(room) => {
                let was = room.visited;
                room.visited = true;
                was
            }
            None => false,
        };
        self.describe_room(&target, was_visited)
    }

    /// Assemble a room description: header, body (abbreviated on
    /// re-entry), occupants, objects, exits.
    fn describe_room(&self, room_id: &str, short: bool) -> Reply {
        let Some(room) = self.world.room(room_id) else {
            return Reply::text(MSG_NOWHERE);
        };

        let mut reply = Reply::new();
        reply.push(room.name.clone(), Style::RoomName);
        if short && room.visited {
            reply.push_text(first_sentence(&room.description));
        } else {
            reply.push_text(room.description.clone());
        }

        let here = Location::Room(room_id.to_string());
        let npc_names: Vec<&str> = room
            .npcs
            .iter()
            .filter_map(|id| self.world.npc(id))
            .filter(|npc| npc.location == here)
            .map(|npc| npc.name.as_str())
            .collect();
        if !npc_names.is_empty() {
            reply.blank();
            reply.push_system(format!("Present: {}.", npc_names.join(", ")));
        }

        let object_names: Vec<&str> = room
            .objects
            .iter()
            .filter_map(|id| self.world.object(id))
            .filter(|object| object.location == here)
            .map(|object| object.name.as_str())
            .collect();
        if !object_names.is_empty() {
            reply.push_system(format!("You can see: {}.", object_names.join(", ")));
        }

        if !room.exits.is_empty() {
            let exits: Vec<String> = room
                .exits
                .iter()
                .map(|exit| exit.keyword.to_uppercase())
                .collect();
            reply.push_system(format!("Obvious exits: {}", exits.join(", ")));
        }

        reply
    }

    fn do_look(&mut self, object: Option<&str>) -> Reply {
        let Some(token) = object else {
            let here = self.world.player.room_id.clone();
            return self.describe_room(&here, false);
        };

        // Only the four compass directions get a preview; "look up"
        // falls through to the examine path like any other phrase.
        match Direction::parse(token) {
            Some(direction) if direction.is_compass() => self.preview(direction),
            _ => self.do_examine(Some(token)),
        }
    }

    fn preview(&self, direction: Direction) -> Reply {
        let Some(room) = self.world.current_room() else {
            return Reply::text(MSG_NOWHERE);
        };
        match room
            .exit_to(direction.name())
            .and_then(|id| self.world.room(id))
        {
            Some(next) => Reply::text(format!(
                "Looking {}, you see the way to {}.",
                direction.name().to_uppercase(),
                next.name
            )),
            None => Reply::text(format!(
                "There's nothing particularly interesting to the {}.",
                direction.name()
            )),
        }
    }

    fn do_examine(&mut self, phrase: Option<&str>) -> Reply {
        let Some(phrase) = phrase else {
            return Reply::text("Examine what, exactly? The void stares back, unimpressed.");
        };

        if let Some(object) = find_object(&self.world, phrase).and_then(|id| self.world.object(&id))
        {
            return Reply::text(object.description.clone());
        }
        if let Some(npc) = find_npc(&self.world, phrase).and_then(|id| self.world.npc(&id)) {
            return Reply::text(npc.description.clone());
        }
        Reply::text(format!(
            "You cannot see any \"{phrase}\" here. Perhaps it's in another room, \
             or perhaps it never existed."
        ))
    }

    fn do_read(&mut self, phrase: Option<&str>) -> Reply {
        let Some(phrase) = phrase else {
            return Reply::text("Read what? The air contains no visible text.");
        };

        match find_object(&self.world, phrase).and_then(|id| self.world.object(&id)) {
            Some(object) => Reply::text(format!(
                "You read the {}.\n\n{}",
                object.name, object.description
            )),
            None => Reply::text(format!("You cannot see any \"{phrase}\" here.")),
        }
    }

    fn do_inventory(&mut self) -> Reply {
        if self.world.player.inventory.is_empty() {
            return Reply::text(
                "You are carrying nothing. Unburdened by material possessions, you \
                 feel lighter. Also slightly unprepared.",
            );
        }

        let names: Vec<&str> = self
            .world
            .player
            .inventory
            .iter()
            .map(|id| {
                self.world
                    .object(id)
                    .map_or(id.as_str(), |object| object.name.as_str())
            })
            .collect();
        Reply::text(format!("You are carrying: {}.", names.join(", ")))
    }

    fn do_take(&mut self, phrase: Option<&str>) -> Reply {
        let Some(phrase) = phrase else {
            return Reply::text("Take what? Your options are limited to things that exist.");
        };

        let Some(id) = find_object(&self.world, phrase) else {
            return Reply::text(format!("You cannot see any \"{phrase}\" here."));
        };

        if self.world.player.has_item(&id) {
            return Reply::text("You already have that. Excellent memory, that.");
        }

        let (name, portable) = match self.world.object(&id) {
            Some(object) => (object.name.clone(), object.portable),
            None => return Reply::text(format!("You cannot see any \"{phrase}\" here.")),
        };
        if !portable {
            return Reply::text(format!(
                "The {name} cannot be taken. It's either too heavy, bolted down, or \
                 simply not interested in being picked up."
            ));
        }

        let in_room = self
            .world
            .current_room()
            .is_some_and(|room| room.objects.iter().any(|o| o == &id));
        if !in_room {
            return Reply::text("You cannot see that here.");
        }

        self.world.give_to_player(&id);
        if let Some(flag) = self.script.pickup_flag(&id) {
            let flag = flag.to_string();
            self.world.player.set_flag(flag, true);
        }
        Reply::text(format!(
            "You pick up the {name}. It's yours now, for better or worse."
        ))
    }

    fn do_drop(&mut self, phrase: Option<&str>) -> Reply {
        let Some(phrase) = phrase else {
            return Reply::text("Drop what? Being specific helps.");
        };

        let Some(id) = find_object(&self.world, phrase) else {
            return Reply::text(format!("You don't have any \"{phrase}\"."));
        };

        let name = self
            .world
            .object(&id)
            .map_or_else(|| id.clone(), |object| object.name.clone());
        let here = self.world.player.room_id.clone();
        if !self.world.drop_from_player(&id, &here) {
            return Reply::text(format!("You're not carrying any {name}."));
        }
        Reply::text(format!(
            "You drop the {name}. It lands with the quiet dignity of an object that \
             knows its worth."
        ))
    }

    fn do_use(&mut self, phrase: Option<&str>) -> Reply {
        let Some(phrase) = phrase else {
            return Reply::text("Use what? The parser requires slightly more information.");
        };

        let Some(id) = find_object(&self.world, phrase) else {
            return Reply::text(format!("You cannot see any \"{phrase}\" here."));
        };
        let (name, use_text) = match self.world.object(&id) {
            Some(object) => (object.name.clone(), object.use_text.clone()),
            None => return Reply::text(format!("You cannot see any \"{phrase}\" here.")),
        };

        // Scripted behavior first; its text is appended to the static
        // use text so a hook can narrate what changed.
        let extra = self
            .script
            .use_hook(&id)
            .and_then(|hook| hook(&mut self.world));

        let text = match (use_text, extra) {
            (Some(text), Some(extra)) => format!("{text}{extra}"),
            (Some(text), None) => text,
            (None, Some(extra)) => extra,
            (None, None) => format!(
                "You fiddle with the {name}, but nothing particularly interesting \
                 happens. Perhaps it has other uses, or perhaps it's just here for \
                 ambience."
            ),
        };
        Reply::text(text)
    }

    fn do_talk(&mut self, phrase: Option<&str>) -> Reply {
        let Some(phrase) = phrase else {
            return Reply::text("Talk to whom? The silence offers no suggestions.");
        };

        let Some(id) = find_npc(&self.world, phrase) else {
            return Reply::text(format!(
                "You cannot see any \"{phrase}\" here to talk to."
            ));
        };
        let (name, lines) = match self.world.npc(&id) {
            Some(npc) => (npc.name.clone(), npc.dialogue.clone()),
            None => {
                return Reply::text(format!(
                    "You cannot see any \"{phrase}\" here to talk to."
                ));
            }
        };

        match self.script.dialogue_for(&id, &lines) {
            None => Reply::text(format!(
                "The {name} seems disinclined to conversation at the moment."
            )),
            Some(Dialogue::Scripted(selector)) => {
                Reply::text(selector(&self.world, &id, &mut self.rng))
            }
            Some(Dialogue::Lines(pool)) => {
                Reply::text(pool[self.rng.random_range(0..pool.len())].clone())
            }
        }
    }

    fn do_help(&mut self) -> Reply {
        let mut reply = Reply::new();
        for line in HELP_TEXT {
            reply.push_text(line);
        }
        reply
    }

    fn do_about(&mut self) -> Reply {
        if self.script.about().is_empty() {
            return Reply::text("There is little to say about this place. Yet.");
        }
        let mut reply = Reply::new();
        for line in self.script.about() {
            reply.push_text(line.clone());
        }
        reply
    }

    fn do_clear(&mut self) -> Reply {
        let mut reply = Reply::new();
        reply.clear_screen = true;
        reply.extend(self.do_look(None));
        reply
    }

    fn do_quit(&mut self) -> Reply {
        let mut reply = Reply::new();
        for line in QUIT_TEXT {
            reply.push_text(line);
        }
        reply.end_session = true;
        reply
    }

    fn do_save(&mut self) -> Reply {
        match self.store.save(&self.world) {
            Ok(()) => Reply::text(
                "Game saved. Your progress is preserved in the machine's memory.",
            ),
            Err(e) => {
                log::warn!("manual save failed: {e}");
                Reply::text(
                    "Something hiccups in the storage layer. Your progress was not \
                     preserved.",
                )
            }
        }
    }

    fn do_load(&mut self) -> Reply {
        match self.store.load() {
            Ok(Some(world)) => match world.validate() {
                Ok(()) => {
                    self.world = world;
                    let here = self.world.player.room_id.clone();
                    let mut reply = Reply::new();
                    reply.push_system("Game loaded.");
                    reply.extend(self.describe_room(&here, false));
                    reply
                }
                Err(e) => {
                    log::warn!("saved game failed validation: {e}");
                    Reply::text(MSG_NO_SAVED_GAME)
                }
            },
            Ok(None) => Reply::text(MSG_NO_SAVED_GAME),
            Err(e) => {
                log::warn!("failed to load saved game: {e}");
                Reply::text(MSG_NO_SAVED_GAME)
            }
        }
    }
}

/// Everything up to and including the first sentence terminator, used
/// for abbreviated re-entry descriptions.
fn first_sentence(text: &str) -> String {
    match text.find(['.', '!', '?']) {
        Some(idx) => text[..=idx].to_string(),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nl_core::{MemoryStore, Npc, Object, Player, Room, WorldState};

    fn pebble_gate(world: &mut WorldState) -> Option<String> {
        if world.player.has_item("pebble") {
            world.globals.set_flag("vault_opened", true);
            None
        } else {
            Some("The vault door wants a token of sincerity first.".to_string())
        }
    }

    fn statue_hook(world: &mut WorldState) -> Option<String> {
        world.player.set_flag("statue_touched", true);
        None
    }

    fn test_world() -> (WorldState, WorldScript) {
        let mut world = WorldState::new(Player::new("porch"));
        world.add_room(
            Room::new(
                "porch",
                "Front Porch",
                "A creaking porch. Paint peels in long curls from the railing.",
            )
            .with_exit("east", "parlor")
            .with_objects(["pebble", "statue"])
            .with_npcs(["gardener", "scarecrow"]),
        );
        world.add_room(
            Room::new(
                "parlor",
                "Dusty Parlor",
                "Dust sheets drape the furniture. A clock ticks somewhere unseen.",
            )
            .with_exit("west", "porch")
            .with_exit("north", "vault")
            .with_objects(["lamp"]),
        );
        world.add_room(
            Room::new("vault", "Quiet Vault", "Shelves of sealed boxes.")
                .with_exit("south", "parlor"),
        );
        world.add_object(
            Object::new("pebble", "smooth pebble", "A river pebble, worn flat.")
                .in_room("porch")
                .with_aliases(["stone"])
                .portable(),
        );
        world.add_object(
            Object::new("statue", "stone statue", "A statue of someone forgotten.")
                .in_room("porch"),
        );
        world.add_object(
            Object::new("lamp", "oil lamp", "It smells faintly of smoke.")
                .in_room("parlor")
                .portable()
                .with_use_text("The lamp sputters to life."),
        );
        world.add_npc(
            Npc::new("gardener", "old gardener", "Mud to the elbows.")
                .in_room("porch")
                .with_dialogue(["The roses won't prune themselves."]),
        );
        world.add_npc(
            Npc::new("scarecrow", "limp scarecrow", "Straw and silence.").in_room("porch"),
        );

        let script = WorldScript::new()
            .with_exit_gate("parlor", "vault", pebble_gate)
            .with_use_hook("statue", statue_hook)
            .with_pickup_flag("pebble", "found_pebble")
            .with_about(["A small test estate."]);
        (world, script)
    }

    fn session_with(seed: u64) -> (Session, MemoryStore) {
        let (world, script) = test_world();
        let store = MemoryStore::new();
        let session = Session::new(
            world,
            script,
            Box::new(store.clone()),
            SessionConfig { seed: Some(seed) },
        )
        .unwrap();
        (session, store)
    }

    /// Start the adventure with a throwaway first command.
    fn started(seed: u64) -> (Session, MemoryStore) {
        let (mut session, store) = session_with(seed);
        session.submit("look");
        (session, store)
    }

    #[test]
    fn title_help_and_about_do_not_start() {
        let (mut session, store) = session_with(1);

        let reply = session.submit("help");
        assert!(reply.flat_text().contains("COMMANDS:"));
        assert!(session.on_title());

        let reply = session.submit("about");
        assert!(reply.flat_text().contains("A small test estate."));
        assert!(session.on_title());

        assert_eq!(session.turn(), 0);
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn first_input_starts_and_dispatches() {
        let (mut session, store) = session_with(1);

        let reply = session.submit("east");
        let text = reply.flat_text();
        assert!(text.contains("INITIATING ADVENTURE SEQUENCE"));
        assert!(text.contains("Dusty Parlor"));
        assert!(!session.on_title());
        assert!(session.world().globals.game_started);
        assert_eq!(session.world().player.room_id, "parlor");
        assert_eq!(session.turn(), 1);
        assert_eq!(store.save_count(), 1);
    }

    #[test]
    fn every_active_command_advances_turn_and_autosaves() {
        let (mut session, store) = started(1);
        let before = session.turn();

        session.submit("north"); // boundary refusal, still a turn
        session.submit("xyzzy"); // unknown verb, still a turn
        session.submit("inventory");

        assert_eq!(session.turn(), before + 3);
        assert_eq!(store.save_count(), before as usize + 3);
    }

    #[test]
    fn movement_through_missing_exit_changes_nothing() {
        let (mut session, _) = started(1);

        let reply = session.submit("north");
        assert_eq!(reply.flat_text(), MSG_BOUNDARY);
        assert_eq!(session.world().player.room_id, "porch");
    }

    #[test]
    fn revisits_abbreviate_the_description() {
        let (mut session, _) = started(1);

        let first = session.submit("east").flat_text();
        assert!(first.contains("A clock ticks somewhere unseen."));

        session.submit("west");
        let second = session.submit("east").flat_text();
        assert!(second.contains("Dust sheets drape the furniture."));
        assert!(!second.contains("A clock ticks"));

        // An explicit look always shows the full text.
        let looked = session.submit("look").flat_text();
        assert!(looked.contains("A clock ticks somewhere unseen."));
    }

    #[test]
    fn look_previews_compass_exits_only() {
        let (mut session, _) = started(1);

        let preview = session.submit("look east").flat_text();
        assert_eq!(preview, "Looking EAST, you see the way to Dusty Parlor.");

        let nothing = session.submit("look north").flat_text();
        assert_eq!(
            nothing,
            "There's nothing particularly interesting to the north."
        );

        // "look up" is not a preview; it falls through to examine.
        let up = session.submit("look up").flat_text();
        assert!(up.contains("You cannot see any \"up\" here."));
    }

    #[test]
    fn examine_describes_objects_and_npcs() {
        let (mut session, _) = started(1);

        assert_eq!(
            session.submit("examine pebble").flat_text(),
            "A river pebble, worn flat."
        );
        assert_eq!(
            session.submit("x gardener").flat_text(),
            "Mud to the elbows."
        );
        assert!(
            session
                .submit("examine ghost")
                .flat_text()
                .contains("You cannot see any \"ghost\" here.")
        );
    }

    #[test]
    fn take_failure_cases_in_order() {
        let (mut session, _) = started(1);

        assert!(
            session
                .submit("take zeppelin")
                .flat_text()
                .contains("You cannot see any \"zeppelin\" here.")
        );
        assert!(
            session
                .submit("take statue")
                .flat_text()
                .contains("cannot be taken")
        );

        session.submit("take pebble");
        assert!(
            session
                .submit("take pebble")
                .flat_text()
                .contains("You already have that.")
        );
    }

    #[test]
    fn take_then_drop_restores_room_membership() {
        let (mut session, _) = started(1);

        let reply = session.submit("take pebble");
        assert!(reply.flat_text().contains("You pick up the smooth pebble."));
        assert!(session.world().player.has_item("pebble"));
        assert!(session.world().player.flag("found_pebble"));
        assert!(
            !session
                .world()
                .room("porch")
                .unwrap()
                .objects
                .contains(&"pebble".to_string())
        );

        let reply = session.submit("drop pebble");
        assert!(reply.flat_text().contains("You drop the smooth pebble."));
        assert!(!session.world().player.has_item("pebble"));
        assert!(
            session
                .world()
                .room("porch")
                .unwrap()
                .objects
                .contains(&"pebble".to_string())
        );
    }

    #[test]
    fn drop_without_carrying_refuses() {
        let (mut session, _) = started(1);

        assert!(
            session
                .submit("drop pebble")
                .flat_text()
                .contains("You're not carrying any smooth pebble.")
        );
        assert!(
            session
                .submit("drop zeppelin")
                .flat_text()
                .contains("You don't have any \"zeppelin\".")
        );
    }

    #[test]
    fn inventory_lists_carried_names() {
        let (mut session, _) = started(1);

        assert!(
            session
                .submit("inventory")
                .flat_text()
                .contains("You are carrying nothing.")
        );

        session.submit("take pebble");
        assert_eq!(
            session.submit("i").flat_text(),
            "You are carrying: smooth pebble."
        );
    }

    #[test]
    fn use_runs_hook_and_static_text() {
        let (mut session, _) = started(1);

        // Hook only: sets a flag, no text of its own, generic fallback.
        let reply = session.submit("use statue").flat_text();
        assert!(reply.contains("You fiddle with the stone statue"));
        assert!(session.world().player.flag("statue_touched"));

        session.submit("east");
        assert_eq!(
            session.submit("use lamp").flat_text(),
            "The lamp sputters to life."
        );
    }

    #[test]
    fn exit_gate_vetoes_until_condition_met() {
        let (mut session, _) = started(1);
        session.submit("east");

        let refusal = session.submit("north").flat_text();
        assert_eq!(refusal, "The vault door wants a token of sincerity first.");
        assert_eq!(session.world().player.room_id, "parlor");

        session.submit("west");
        session.submit("take pebble");
        session.submit("east");
        let entered = session.submit("north").flat_text();
        assert!(entered.contains("Quiet Vault"));
        assert!(session.world().globals.flag("vault_opened"));
    }

    #[test]
    fn talk_picks_lines_and_handles_silence() {
        let (mut session, _) = started(1);

        assert_eq!(
            session.submit("talk to gardener").flat_text(),
            "The roses won't prune themselves."
        );
        assert_eq!(
            session.submit("talk to scarecrow").flat_text(),
            "The limp scarecrow seems disinclined to conversation at the moment."
        );
        assert_eq!(
            session.submit("talk to bob").flat_text(),
            "You cannot see any \"bob\" here to talk to."
        );
    }

    #[test]
    fn unknown_verbs_draw_from_the_flavor_pool() {
        let (mut session, _) = started(7);
        let reply = session.submit("defenestrate everything").flat_text();
        assert!(UNKNOWN_RESPONSES.contains(&reply.as_str()));
    }

    #[test]
    fn clear_wipes_and_looks_again() {
        let (mut session, _) = started(1);
        let reply = session.submit("clear");
        assert!(reply.clear_screen);
        assert!(reply.flat_text().contains("Front Porch"));
    }

    #[test]
    fn quit_says_farewell_and_signals_the_front_end() {
        let (mut session, _) = started(1);
        let reply = session.submit("quit");
        assert!(reply.end_session);
        assert!(reply.flat_text().contains("You consider leaving"));
    }

    #[test]
    fn load_restores_a_previous_session() {
        let (mut first, store) = started(1);
        first.submit("take pebble");
        first.submit("east");

        // A fresh session over the same store resumes where the last
        // autosave left off.
        let (world, script) = test_world();
        let mut second = Session::new(
            world,
            script,
            Box::new(store.clone()),
            SessionConfig { seed: Some(2) },
        )
        .unwrap();
        let reply = second.submit("load");

        let text = reply.flat_text();
        assert!(text.contains("Game loaded."));
        assert!(text.contains("Dusty Parlor"));
        assert_eq!(second.world().player.room_id, "parlor");
        assert!(second.world().player.has_item("pebble"));
    }

    #[test]
    fn save_and_load_are_idempotent() {
        let (mut session, _) = started(1);
        session.submit("take pebble");
        session.submit("east");
        session.submit("save");

        let room_before = session.world().player.room_id.clone();
        let inventory_before = session.world().player.inventory.clone();
        let flags_before = session.world().player.flags.clone();

        session.submit("load");
        assert_eq!(session.world().player.room_id, room_before);
        assert_eq!(session.world().player.inventory, inventory_before);
        assert_eq!(session.world().player.flags, flags_before);
    }

    #[test]
    fn missing_or_corrupt_saves_degrade_to_a_message() {
        let (mut session, store) = session_with(1);
        // Still on the title screen: the first input transitions and the
        // load finds an empty store.
        let reply = session.submit("load");
        assert!(reply.flat_text().contains(MSG_NO_SAVED_GAME));

        store.inject_raw("{corrupt");
        let reply = session.submit("load");
        assert!(reply.flat_text().contains(MSG_NO_SAVED_GAME));
    }

    #[test]
    fn first_sentence_cuts_at_the_terminator() {
        assert_eq!(first_sentence("One. Two. Three."), "One.");
        assert_eq!(first_sentence("Wait! More."), "Wait!");
        assert_eq!(first_sentence("No terminator"), "No terminator");
    }
}

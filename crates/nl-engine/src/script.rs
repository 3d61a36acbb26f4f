//! Per-world scripted behavior: use hooks, exit gates, dialogue.
//!
//! World content wires its special cases into one table at construction
//! time, keyed by entity and room ids. The handlers consult the table
//! instead of comparing id strings, so all puzzle logic for a world
//! lives in one place.

use std::collections::HashMap;

use nl_core::WorldState;
use rand::rngs::StdRng;

/// Bespoke behavior when an object is used. Runs before the object's
/// static use text; returned text is appended to it (or stands alone if
/// the object has none).
pub type UseHook = fn(&mut WorldState) -> Option<String>;

/// A guard on a movement edge. Returning `Some(refusal)` vetoes the move
/// and shows the refusal instead; returning `None` lets the player
/// through, possibly after flipping first-unlock flags.
pub type ExitGate = fn(&mut WorldState) -> Option<String>;

/// A dialogue selector consulted with the full world state, the id of
/// the NPC being addressed, and the session RNG, so conditional and
/// probabilistic lines stay testable under a fixed seed.
pub type DialogueFn = fn(&WorldState, &str, &mut StdRng) -> String;

/// How an NPC talks: a fixed pool or a stateful selector.
#[derive(Clone, Copy)]
pub enum Dialogue<'a> {
    /// One line is chosen uniformly at random from the pool.
    Lines(&'a [String]),
    /// The selector decides, reading whatever world state it likes.
    Scripted(DialogueFn),
}

/// The capability table for a world: every scripted special case,
/// resolved once at construction.
#[derive(Default)]
pub struct WorldScript {
    use_hooks: HashMap<String, UseHook>,
    exit_gates: HashMap<(String, String), ExitGate>,
    dialogue: HashMap<String, DialogueFn>,
    pickup_flags: HashMap<String, String>,
    about: Vec<String>,
}

impl WorldScript {
    /// An empty script: no special cases anywhere.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register bespoke use behavior for an object.
    pub fn with_use_hook(mut self, object_id: impl Into<String>, hook: UseHook) -> Self {
        self.use_hooks.insert(object_id.into(), hook);
        self
    }

    /// Register a gate on the movement edge from `from` into `to`.
    pub fn with_exit_gate(
        mut self,
        from: impl Into<String>,
        to: impl Into<String>,
        gate: ExitGate,
    ) -> Self {
        self.exit_gates.insert((from.into(), to.into()), gate);
        self
    }

    /// Register a dialogue selector for an NPC, overriding its static
    /// line pool.
    pub fn with_dialogue(mut self, npc_id: impl Into<String>, dialogue: DialogueFn) -> Self {
        self.dialogue.insert(npc_id.into(), dialogue);
        self
    }

    /// Record that picking up an object sets a player flag.
    pub fn with_pickup_flag(
        mut self,
        object_id: impl Into<String>,
        flag: impl Into<String>,
    ) -> Self {
        self.pickup_flags.insert(object_id.into(), flag.into());
        self
    }

    /// Set the ABOUT text block.
    pub fn with_about<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.about.extend(lines.into_iter().map(Into::into));
        self
    }

    /// The use hook for an object, if any.
    pub fn use_hook(&self, object_id: &str) -> Option<UseHook> {
        self.use_hooks.get(object_id).copied()
    }

    /// The gate on a movement edge, if any.
    pub fn exit_gate(&self, from: &str, to: &str) -> Option<ExitGate> {
        self.exit_gates
            .get(&(from.to_string(), to.to_string()))
            .copied()
    }

    /// How the given NPC talks: its scripted selector if registered,
    /// otherwise its static pool (or nothing to say).
    pub fn dialogue_for<'a>(&self, npc_id: &str, lines: &'a [String]) -> Option<Dialogue<'a>> {
        if let Some(selector) = self.dialogue.get(npc_id) {
            return Some(Dialogue::Scripted(*selector));
        }
        if lines.is_empty() {
            None
        } else {
            Some(Dialogue::Lines(lines))
        }
    }

    /// The player flag set by picking up an object, if any.
    pub fn pickup_flag(&self, object_id: &str) -> Option<&str> {
        self.pickup_flags.get(object_id).map(String::as_str)
    }

    /// The ABOUT text block.
    pub fn about(&self) -> &[String] {
        &self.about
    }
}

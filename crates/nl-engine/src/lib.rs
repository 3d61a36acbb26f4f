//! Command interpreter for the NEUROLINK-7800 text adventure.
//!
//! One line of player input flows through the pipeline: the lexer
//! lowercases and tokenizes it, the parser shapes the tokens into a
//! [`Command`], and the [`Session`] dispatches that command to a verb
//! handler which mutates the [`nl_core::WorldState`] and returns a
//! [`Reply`] for the renderer. Nothing in that pipeline panics or
//! returns an error: unrecognized input, unresolvable names, and failed
//! preconditions all degrade to in-world text so the session continues.

/// Tokenization, vocabulary, command parsing, and entity resolution.
pub mod parser;
/// Renderable output: tagged lines plus renderer signals.
pub mod reply;
/// Per-world scripted behavior: use hooks, exit gates, dialogue.
pub mod script;
/// The session: state machine, dispatcher, and verb handlers.
pub mod session;

pub use parser::{Command, Direction, Preposition, Verb, parse_line};
pub use reply::{Line, Reply, Style};
pub use script::{Dialogue, DialogueFn, ExitGate, UseHook, WorldScript};
pub use session::{Session, SessionConfig};

//! Command structure and the token-stream parser.

use super::lexer::tokenize;
use super::vocab::{Direction, Preposition, Verb};

/// A parsed player command: verb plus up to two object phrases.
///
/// Produced fresh per input line. A `verb` of `None` means the first
/// token was not in the vocabulary; the dispatcher answers with flavor
/// text rather than an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Command {
    /// The canonical verb, if the first token was recognized.
    pub verb: Option<Verb>,
    /// The object phrase, joined with single spaces.
    pub object: Option<String>,
    /// The preposition splitting the two object phrases, if any.
    pub preposition: Option<Preposition>,
    /// The phrase after the preposition.
    pub second_object: Option<String>,
}

impl Command {
    fn bare(verb: Option<Verb>) -> Self {
        Self {
            verb,
            ..Self::default()
        }
    }

    fn with_object(verb: Option<Verb>, object: String) -> Self {
        Self {
            verb,
            object: Some(object),
            ..Self::default()
        }
    }
}

/// Parse normalized tokens into a [`Command`]. Never panics; the worst
/// case is a command with no recognized verb.
pub fn parse(tokens: &[String]) -> Command {
    let Some(first) = tokens.first() else {
        return Command::default();
    };

    // A leading direction word always means movement; anything after it
    // is discarded. "north please" walks north.
    if let Some(direction) = Direction::parse(first) {
        return Command::with_object(Some(Verb::Go), direction.name().to_string());
    }

    let verb = Verb::parse(first);
    if tokens.len() == 1 {
        return Command::bare(verb);
    }

    let mut rest = &tokens[1..];

    // A preposition directly after the verb is connective noise:
    // "talk to bob" addresses bob, "look in box" examines the box.
    if Preposition::parse(&rest[0]).is_some() {
        rest = &rest[1..];
    }
    if rest.is_empty() {
        return Command::bare(verb);
    }

    // Scan for a split point in the fixed preposition order; a hit only
    // counts strictly inside the phrase, so a trailing preposition joins
    // the object instead of dangling.
    let split = Preposition::SCAN_ORDER.iter().find_map(|&preposition| {
        rest.iter()
            .position(|t| t == preposition.word())
            .filter(|&idx| idx > 0 && idx < rest.len() - 1)
            .map(|idx| (preposition, idx))
    });
    if let Some((preposition, idx)) = split {
        return Command {
            verb,
            object: Some(rest[..idx].join(" ")),
            preposition: Some(preposition),
            second_object: Some(rest[idx + 1..].join(" ")),
        };
    }

    Command::with_object(verb, rest.join(" "))
}

/// Tokenize and parse a raw input line.
pub fn parse_line(input: &str) -> Command {
    parse(&tokenize(input))
}

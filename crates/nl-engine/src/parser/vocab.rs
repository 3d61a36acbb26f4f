//! Canonical verbs, directions, and prepositions.
//!
//! Lookup here is pure and total: unknown spellings map to `None`,
//! never to an error.

/// A canonical command verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    /// Move through an exit.
    Go,
    /// Describe the room, preview a direction, or examine something.
    Look,
    /// Look closely at an object or NPC.
    Examine,
    /// Read text on an object.
    Read,
    /// List carried objects.
    Inventory,
    /// Pick something up.
    Take,
    /// Put something down.
    Drop,
    /// Interact with an object.
    Use,
    /// Address an NPC.
    Talk,
    /// Show the command summary.
    Help,
    /// Show the about text.
    About,
    /// Wipe the screen and look again.
    Clear,
    /// Say farewell.
    Quit,
    /// Persist the world.
    Save,
    /// Restore the world.
    Load,
}

impl Verb {
    /// Map a raw first token to its canonical verb.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "go" | "walk" | "move" | "head" | "enter" => Some(Self::Go),
            "l" | "look" => Some(Self::Look),
            "x" | "examine" | "inspect" | "check" => Some(Self::Examine),
            "read" | "study" => Some(Self::Read),
            "i" | "inv" | "inventory" => Some(Self::Inventory),
            "take" | "get" | "grab" | "pick" => Some(Self::Take),
            "drop" | "put" | "discard" => Some(Self::Drop),
            "use" | "activate" | "press" => Some(Self::Use),
            "talk" | "speak" | "chat" => Some(Self::Talk),
            "help" | "?" => Some(Self::Help),
            "about" | "info" => Some(Self::About),
            "clear" | "cls" => Some(Self::Clear),
            "quit" | "exit" | "q" => Some(Self::Quit),
            "save" => Some(Self::Save),
            "load" | "restore" => Some(Self::Load),
            _ => None,
        }
    }
}

/// A movement direction, including the free-standing `in`/`out` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// North.
    North,
    /// South.
    South,
    /// East.
    East,
    /// West.
    West,
    /// Up.
    Up,
    /// Down.
    Down,
    /// Inward (through a door, into a shop).
    In,
    /// Outward.
    Out,
}

impl Direction {
    /// Parse a direction word or single-letter shortcut.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "n" | "north" => Some(Self::North),
            "s" | "south" => Some(Self::South),
            "e" | "east" => Some(Self::East),
            "w" | "west" => Some(Self::West),
            "u" | "up" => Some(Self::Up),
            "d" | "down" => Some(Self::Down),
            "in" => Some(Self::In),
            "out" => Some(Self::Out),
            _ => None,
        }
    }

    /// The canonical full word.
    pub fn name(self) -> &'static str {
        match self {
            Self::North => "north",
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
            Self::Up => "up",
            Self::Down => "down",
            Self::In => "in",
            Self::Out => "out",
        }
    }

    /// Whether this is one of the four compass directions. Only those
    /// get a `look <direction>` preview.
    pub fn is_compass(self) -> bool {
        matches!(self, Self::North | Self::South | Self::East | Self::West)
    }
}

/// A preposition that can split an object phrase in two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preposition {
    /// `use key on door`
    On,
    /// `put key in box`
    In,
    /// `use rock with window`
    With,
    /// `talk to bob`
    To,
}

impl Preposition {
    /// The fixed scan order: the parser checks for each of these in turn
    /// and the first one present in the phrase wins, regardless of where
    /// the others sit.
    pub const SCAN_ORDER: [Self; 4] = [Self::On, Self::In, Self::With, Self::To];

    /// Parse a preposition token.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "on" => Some(Self::On),
            "in" => Some(Self::In),
            "with" => Some(Self::With),
            "to" => Some(Self::To),
            _ => None,
        }
    }

    /// The literal word.
    pub fn word(self) -> &'static str {
        match self {
            Self::On => "on",
            Self::In => "in",
            Self::With => "with",
            Self::To => "to",
        }
    }
}

/// Tokens dropped outright during normalization. The four meaningful
/// prepositions are deliberately absent: the parser decides whether they
/// are noise or a split point based on position.
pub(crate) const FILLER_WORDS: &[&str] = &["the", "a", "an", "at", "into", "onto", "from"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verb_synonyms_map_to_canonical() {
        assert_eq!(Verb::parse("get"), Some(Verb::Take));
        assert_eq!(Verb::parse("x"), Some(Verb::Examine));
        assert_eq!(Verb::parse("?"), Some(Verb::Help));
        assert_eq!(Verb::parse("restore"), Some(Verb::Load));
        assert_eq!(Verb::parse("dance"), None);
    }

    #[test]
    fn direction_shortcuts_match_full_words() {
        for (short, long) in [
            ("n", "north"),
            ("s", "south"),
            ("e", "east"),
            ("w", "west"),
            ("u", "up"),
            ("d", "down"),
        ] {
            assert_eq!(Direction::parse(short), Direction::parse(long));
        }
        assert_eq!(Direction::parse("in"), Some(Direction::In));
        assert_eq!(Direction::parse("sideways"), None);
    }

    #[test]
    fn only_compass_directions_preview() {
        assert!(Direction::North.is_compass());
        assert!(!Direction::Up.is_compass());
        assert!(!Direction::In.is_compass());
    }
}

//! Renderable output: tagged lines plus renderer signals.

/// Presentation category for a line of output. The renderer decides what
/// each category looks like; the interpreter only tags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Style {
    /// Narrative body text.
    #[default]
    Normal,
    /// A room header.
    RoomName,
    /// Status and meta information.
    System,
    /// An echo of what the player typed.
    UserEcho,
}

/// One line of output with its presentation category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// The text. May contain embedded newlines for paragraph breaks.
    pub text: String,
    /// How the renderer should style it.
    pub style: Style,
}

/// The full result of one command: ordered lines plus two renderer
/// signals. Handlers build exactly one of these per turn.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reply {
    lines: Vec<Line>,
    /// Ask the renderer to wipe visible output before printing.
    pub clear_screen: bool,
    /// Tell the front end the player said farewell.
    pub end_session: bool,
}

impl Reply {
    /// An empty reply.
    pub fn new() -> Self {
        Self::default()
    }

    /// A single body-text line.
    pub fn text(text: impl Into<String>) -> Self {
        let mut reply = Self::new();
        reply.push(text, Style::Normal);
        reply
    }

    /// Append a line with the given style.
    pub fn push(&mut self, text: impl Into<String>, style: Style) {
        self.lines.push(Line {
            text: text.into(),
            style,
        });
    }

    /// Append a body-text line.
    pub fn push_text(&mut self, text: impl Into<String>) {
        self.push(text, Style::Normal);
    }

    /// Append a system line.
    pub fn push_system(&mut self, text: impl Into<String>) {
        self.push(text, Style::System);
    }

    /// Append an empty spacer line.
    pub fn blank(&mut self) {
        self.push(String::new(), Style::Normal);
    }

    /// Append every line and signal from another reply.
    pub fn extend(&mut self, other: Reply) {
        self.lines.extend(other.lines);
        self.clear_screen |= other.clear_screen;
        self.end_session |= other.end_session;
    }

    /// The ordered lines.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// All line text joined with newlines; convenient for assertions.
    pub fn flat_text(&self) -> String {
        self.lines
            .iter()
            .map(|line| line.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_in_order_with_styles() {
        let mut reply = Reply::new();
        reply.push("Tech Shop", Style::RoomName);
        reply.push_text("Shelves of prepaid AI cards stand to attention.");
        reply.blank();
        reply.push_system("Obvious exits: WEST");

        assert_eq!(reply.lines().len(), 4);
        assert_eq!(reply.lines()[0].style, Style::RoomName);
        assert_eq!(reply.lines()[3].style, Style::System);
        assert!(reply.flat_text().contains("Obvious exits"));
    }

    #[test]
    fn extend_carries_signals() {
        let mut wipe = Reply::new();
        wipe.clear_screen = true;
        let mut reply = Reply::text("Hello.");
        reply.extend(wipe);
        assert!(reply.clear_screen);
        assert!(!reply.end_session);
    }
}

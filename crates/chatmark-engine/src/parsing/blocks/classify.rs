use super::kinds::{BlockQuote, CodeFence, Heading, ListMarker, Table, ThematicBreak};

/// What a single line looks like, decided without reference to its
/// neighbours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    Blank,
    FenceOpen {
        language: &'a str,
    },
    /// Starts with `|`. Whether it is really a table depends on the next line.
    TableRow,
    Heading {
        level: u8,
        text: &'a str,
    },
    Quote {
        text: &'a str,
    },
    ListItem(ListMarker<'a>),
    ThematicBreak,
    Text,
}

/// Classification of a single line.
///
/// This is phase 1 of block parsing: each line is classified independently.
#[derive(Debug, Clone, Copy)]
pub struct LineClass<'a> {
    /// The line as written, minus a trailing `\r`. Code bodies use this.
    pub raw: &'a str,
    /// `raw` with surrounding whitespace removed. Everything else uses this.
    pub trimmed: &'a str,
    pub kind: LineKind<'a>,
}

/// Classifies individual lines for the block parsing phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line. Recognizers are tried top to bottom and the first
    /// match wins.
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        let raw = line.trim_end_matches(['\r', '\n']);
        let trimmed = raw.trim();

        let kind = if trimmed.is_empty() {
            LineKind::Blank
        } else if let Some(language) = CodeFence::opens(trimmed) {
            LineKind::FenceOpen { language }
        } else if Table::is_row(trimmed) {
            LineKind::TableRow
        } else if let Some((level, text)) = Heading::parse(trimmed) {
            LineKind::Heading { level, text }
        } else if let Some(text) = BlockQuote::strip_prefix(trimmed) {
            LineKind::Quote { text }
        } else if let Some(marker) = ListMarker::parse(trimmed) {
            LineKind::ListItem(marker)
        } else if ThematicBreak::matches(trimmed) {
            LineKind::ThematicBreak
        } else {
            LineKind::Text
        };

        LineClass { raw, trimmed, kind }
    }
}

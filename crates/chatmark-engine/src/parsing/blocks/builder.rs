use crate::parsing::inline::{Inline, tokenize};

use super::{
    classify::{LineClass, LineKind},
    kinds::{CodeFence, ListMarker, Table},
    types::{Block, ListItem},
};

/// Multi-line construct currently being accumulated.
#[derive(Debug)]
enum OpenState {
    None,
    Fence {
        language: String,
        lines: Vec<String>,
    },
    /// A `|` line waiting to see whether a separator row follows.
    TableHeader {
        line: String,
    },
    Table {
        headers: Vec<Vec<Inline>>,
        rows: Vec<Vec<Vec<Inline>>>,
    },
    List {
        ordered: bool,
        items: Vec<ListItem>,
    },
}

/// Line-at-a-time block builder.
///
/// Single-line constructs are emitted as soon as they are pushed. Fences,
/// tables and lists stay open until a line arrives that they cannot absorb;
/// that line is then handled as if nothing had been open.
pub struct BlockBuilder {
    open: OpenState,
    out: Vec<Block>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            open: OpenState::None,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: &LineClass<'_>) {
        if self.continue_open(c) {
            return;
        }

        match c.kind {
            LineKind::Blank => {}
            LineKind::FenceOpen { language } => {
                self.open = OpenState::Fence {
                    language: language.to_string(),
                    lines: vec![],
                };
            }
            LineKind::TableRow => {
                self.open = OpenState::TableHeader {
                    line: c.trimmed.to_string(),
                };
            }
            LineKind::Heading { level, text } => self.out.push(Block::Heading {
                level,
                content: tokenize(text),
            }),
            LineKind::Quote { text } => self.out.push(Block::Blockquote {
                content: tokenize(text),
            }),
            LineKind::ListItem(marker) => {
                self.open = OpenState::List {
                    ordered: marker.ordered,
                    items: vec![list_item(&marker)],
                };
            }
            LineKind::ThematicBreak => self.out.push(Block::HorizontalRule),
            LineKind::Text => self.push_paragraph(c.trimmed),
        }
    }

    pub fn finish(mut self) -> Vec<Block> {
        // EOF flush; an unterminated fence keeps everything after its opener
        self.close_open();
        self.out
    }

    /// Feeds `c` to the open construct. Returns `true` if it was absorbed;
    /// otherwise the construct has been closed and `c` still needs handling.
    fn continue_open(&mut self, c: &LineClass<'_>) -> bool {
        match &mut self.open {
            OpenState::None => false,
            OpenState::Fence { lines, .. } => {
                if CodeFence::closes(c.trimmed) {
                    self.close_open();
                } else {
                    lines.push(c.raw.to_string());
                }
                true
            }
            OpenState::TableHeader { line } => {
                if matches!(c.kind, LineKind::TableRow) && Table::is_separator(c.trimmed) {
                    let headers = row_cells(line);
                    self.open = OpenState::Table {
                        headers,
                        rows: vec![],
                    };
                    true
                } else {
                    self.close_open();
                    false
                }
            }
            OpenState::Table { rows, .. } => {
                if matches!(c.kind, LineKind::TableRow) {
                    rows.push(row_cells(c.trimmed));
                    true
                } else {
                    self.close_open();
                    false
                }
            }
            OpenState::List { ordered, items } => match c.kind {
                LineKind::ListItem(marker) if marker.ordered == *ordered => {
                    items.push(list_item(&marker));
                    true
                }
                _ => {
                    self.close_open();
                    false
                }
            },
        }
    }

    fn close_open(&mut self) {
        match std::mem::replace(&mut self.open, OpenState::None) {
            OpenState::None => {}
            OpenState::Fence { language, lines } => self.out.push(Block::CodeBlock {
                language,
                code: lines.join("\n"),
            }),
            // Header never got its separator row: plain paragraph after all
            OpenState::TableHeader { line } => self.push_paragraph(&line),
            OpenState::Table { headers, rows } => self.out.push(Block::Table { headers, rows }),
            OpenState::List { ordered, items } => self.out.push(Block::List { ordered, items }),
        }
    }

    fn push_paragraph(&mut self, trimmed: &str) {
        self.out.push(Block::Paragraph {
            content: tokenize(trimmed),
        });
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn row_cells(trimmed: &str) -> Vec<Vec<Inline>> {
    Table::cells(trimmed).into_iter().map(tokenize).collect()
}

fn list_item(marker: &ListMarker<'_>) -> ListItem {
    ListItem {
        is_task: marker.task.is_some(),
        checked: marker.task.unwrap_or(false),
        content: tokenize(marker.text),
    }
}

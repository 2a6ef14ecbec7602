use serde::{Deserialize, Serialize};

use crate::parsing::inline::{Inline, inline_visible_text};

/// One item of a [`Block::List`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    /// Written as `- [ ]` or `- [x]`.
    pub is_task: bool,
    /// Only meaningful when `is_task` is set.
    pub checked: bool,
    pub content: Vec<Inline>,
}

/// A parsed block.
///
/// Blank lines separate blocks but never produce one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Paragraph {
        content: Vec<Inline>,
    },
    Heading {
        /// 1 through 6.
        level: u8,
        content: Vec<Inline>,
    },
    /// Fenced code. The body is verbatim; no inline parsing inside.
    CodeBlock {
        /// Empty when the fence carried no tag.
        language: String,
        code: String,
    },
    Table {
        headers: Vec<Vec<Inline>>,
        rows: Vec<Vec<Vec<Inline>>>,
    },
    List {
        ordered: bool,
        items: Vec<ListItem>,
    },
    /// A single `>` line.
    Blockquote {
        content: Vec<Inline>,
    },
    HorizontalRule,
}

impl Block {
    /// The visible characters of the block, markers removed.
    ///
    /// Table cells and list items are joined with single spaces.
    pub fn visible_text(&self) -> String {
        match self {
            Block::Paragraph { content }
            | Block::Heading { content, .. }
            | Block::Blockquote { content } => inline_visible_text(content),
            Block::CodeBlock { code, .. } => code.clone(),
            Block::Table { headers, rows } => std::iter::once(headers)
                .chain(rows)
                .flat_map(|row| row.iter().map(|cell| inline_visible_text(cell)))
                .collect::<Vec<_>>()
                .join(" "),
            Block::List { items, .. } => items
                .iter()
                .map(|item| inline_visible_text(&item.content))
                .collect::<Vec<_>>()
                .join(" "),
            Block::HorizontalRule => String::new(),
        }
    }
}

/// Visible text of a whole document, one line per block.
pub fn visible_text(blocks: &[Block]) -> String {
    blocks
        .iter()
        .map(Block::visible_text)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

use serde::{Deserialize, Serialize};

/// A parsed inline fragment.
///
/// A line tokenizes into a flat sequence of these covering the whole input.
/// Emphasis variants carry children so that code spans, links or
/// strikethrough inside a bold run keep their formatting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Inline {
    /// Text that isn't part of any marker pair.
    Text { text: String },
    /// `**bold**`
    Bold { children: Vec<Inline> },
    /// `*italic*`
    Italic { children: Vec<Inline> },
    /// `` `code` `` - raw, never tokenized further.
    Code { code: String },
    /// `[label](url)`
    Link { label: String, url: String },
    /// `![alt](url)`
    Image { alt: String, url: String },
    /// `~~struck~~`
    Strikethrough { children: Vec<Inline> },
}

impl Inline {
    pub fn text(s: impl Into<String>) -> Self {
        Inline::Text { text: s.into() }
    }

    /// Appends the characters a reader would see, without markers.
    pub fn push_visible_text(&self, out: &mut String) {
        match self {
            Inline::Text { text } => out.push_str(text),
            Inline::Code { code } => out.push_str(code),
            Inline::Link { label, .. } => out.push_str(label),
            Inline::Image { alt, .. } => out.push_str(alt),
            Inline::Bold { children }
            | Inline::Italic { children }
            | Inline::Strikethrough { children } => {
                for child in children {
                    child.push_visible_text(out);
                }
            }
        }
    }

    pub fn visible_text(&self) -> String {
        let mut out = String::new();
        self.push_visible_text(&mut out);
        out
    }
}

/// Flattens a fragment sequence to its visible characters.
pub fn inline_visible_text(nodes: &[Inline]) -> String {
    let mut out = String::new();
    for n in nodes {
        n.push_visible_text(&mut out);
    }
    out
}

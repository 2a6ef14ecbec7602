//! Cheap regex pre-scan deciding how much rendering machinery a message needs.
//!
//! The tiers only gate a fast path: every tier renders correctly through the
//! block segmenter.

use std::sync::LazyLock;

use regex::RegexSet;
use serde::{Deserialize, Serialize};

/// Anything the tokenizer or segmenter would react to.
static MARKDOWN_SYNTAX: LazyLock<RegexSet> = LazyLock::new(|| {
    RegexSet::new([
        r"\*\*[^*]+\*\*",         // bold
        r"\*[^*]+\*",             // italic
        r"__[^_]+__",             // bold (underscore)
        r"_[^_]+_",               // italic (underscore)
        r"(?m)^\s*#{1,6}\s",      // headings
        r"(?m)^\s*[-*+]\s",       // bullets
        r"(?m)^\s*\d+\.\s",       // numbered items
        r"\[[^\]]*\]\([^)]*\)",   // links and images
        r"`[^`]+`",               // inline code
        r"(?m)^\s*```",           // fences, closed or not
        r"(?m)^\s*>",             // blockquotes
        r"(?m)^\s*[-*_]{3,}\s*$", // rules
        r"(?m)^\s*\|",            // table rows
        r"\|.*\|.*\|",            // inline pipes
        r"~~[^~]+~~",             // strikethrough
    ])
    .expect("markdown syntax patterns are valid")
});

/// Constructs only the full renderer handled in the widget.
static FULL_MARKDOWN: LazyLock<RegexSet> = LazyLock::new(|| {
    RegexSet::new([
        r"(?m)^\s*\|.+\|",        // tables
        r"(?is)<[a-z].*>",        // html tags
        r"(?m)^[-*]\s+\[[ xX]\]", // task lists
        r"~~[^~]+~~",             // strikethrough
        r"(?m)^\s*>",             // blockquotes
        r"(?m)^\s*\d+\.\s",       // numbered lists
        r"(?m)^#{4,6}\s",         // h4-h6
        r"(?s)```.*?```",         // fenced code
    ])
    .expect("full markdown patterns are valid")
});

static CODE_BLOCKS: LazyLock<RegexSet> = LazyLock::new(|| {
    RegexSet::new([r"(?s)```.*?```", r"(?m)^\s{4,}\S"])
        .expect("code block patterns are valid")
});

/// How much markdown machinery a message needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Complexity {
    /// No markers at all; every line renders as literal text.
    Plain,
    /// Bold, italic, inline code, links, bullets, H1-H3.
    Simple,
    /// Tables, task lists, strikethrough, quotes, numbered lists, H4-H6,
    /// fenced code or HTML.
    Complex,
}

impl Complexity {
    pub fn of(text: &str) -> Self {
        if !has_markdown_syntax(text) {
            Complexity::Plain
        } else if needs_full_markdown(text) {
            Complexity::Complex
        } else {
            Complexity::Simple
        }
    }
}

/// True if any marker the parser understands appears in `text`.
pub fn has_markdown_syntax(text: &str) -> bool {
    !text.is_empty() && MARKDOWN_SYNTAX.is_match(text)
}

/// True if `text` uses anything beyond the simple tier.
pub fn needs_full_markdown(text: &str) -> bool {
    !text.is_empty() && FULL_MARKDOWN.is_match(text)
}

/// Fenced blocks, or lines indented four spaces or more.
pub fn has_code_blocks(text: &str) -> bool {
    !text.is_empty() && CODE_BLOCKS.is_match(text)
}

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static TABLES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\|[^\n]+\|").expect("table pattern is valid"));
static TASK_LISTS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[-*]\s+\[[ xX]\]").expect("task pattern is valid"));
static STRIKETHROUGH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"~~[^~]+~~").expect("strikethrough pattern is valid"));
static HTML: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<[a-z].*>").expect("html pattern is valid"));
static AUTOLINKS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)https?://[^\s<>]+").expect("autolink pattern is valid"));

/// Which GFM extensions a message uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkdownFeatures {
    pub tables: bool,
    pub task_lists: bool,
    pub strikethrough: bool,
    pub html: bool,
    pub autolinks: bool,
}

impl MarkdownFeatures {
    pub fn detect(text: &str) -> Self {
        if text.is_empty() {
            return Self::default();
        }
        Self {
            tables: TABLES.is_match(text),
            task_lists: TASK_LISTS.is_match(text),
            strikethrough: STRIKETHROUGH.is_match(text),
            html: HTML.is_match(text),
            autolinks: AUTOLINKS.is_match(text),
        }
    }

    /// HTML is deliberately not part of GFM here.
    pub fn has_gfm(&self) -> bool {
        self.tables || self.task_lists || self.strikethrough || self.autolinks
    }
}

use std::sync::LazyLock;

use regex::Regex;

static UNORDERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-*]\s+").expect("bullet pattern is valid"));
static TASK_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-*]\s+\[([ xX])\]\s*").expect("task pattern is valid"));
static ORDERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\s+").expect("number pattern is valid"));

/// A recognized list-item line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListMarker<'a> {
    pub ordered: bool,
    /// `Some(checked)` for `- [ ]` / `- [x]` task items.
    pub task: Option<bool>,
    /// Item text after the marker (and task box).
    pub text: &'a str,
}

impl<'a> ListMarker<'a> {
    pub fn parse(trimmed: &'a str) -> Option<Self> {
        if let Some(caps) = TASK_ITEM.captures(trimmed) {
            let whole = caps.get(0)?;
            let mark = caps.get(1)?.as_str();
            return Some(Self {
                ordered: false,
                task: Some(mark.eq_ignore_ascii_case("x")),
                text: &trimmed[whole.end()..],
            });
        }
        if let Some(m) = UNORDERED_ITEM.find(trimmed) {
            return Some(Self {
                ordered: false,
                task: None,
                text: &trimmed[m.end()..],
            });
        }
        ORDERED_ITEM.find(trimmed).map(|m| Self {
            ordered: true,
            task: None,
            text: &trimmed[m.end()..],
        })
    }
}

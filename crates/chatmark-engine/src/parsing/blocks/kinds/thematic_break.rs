pub struct ThematicBreak;

impl ThematicBreak {
    /// Three or more of `-`, `*`, `_` and nothing else. Mixed runs count.
    pub fn matches(trimmed: &str) -> bool {
        trimmed.len() >= 3 && trimmed.bytes().all(|b| matches!(b, b'-' | b'*' | b'_'))
    }
}

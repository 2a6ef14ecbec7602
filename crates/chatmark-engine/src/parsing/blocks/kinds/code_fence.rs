pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// Returns the language tag if `trimmed` opens a fence.
    ///
    /// The tag is the run of word characters right after the backticks and
    /// may be empty: "```" and "``` rust" both open an untagged fence.
    pub fn opens(trimmed: &str) -> Option<&str> {
        let rest = trimmed.strip_prefix(Self::BACKTICKS)?;
        let end = rest
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
            .unwrap_or(rest.len());
        Some(&rest[..end])
    }

    /// Any line starting with backticks closes an open fence, tagged or not.
    pub fn closes(trimmed: &str) -> bool {
        trimmed.starts_with(Self::BACKTICKS)
    }
}

/// Blockquote block type with owned delimiter constant.
///
/// Quotes are single-line: consecutive `>` lines stay separate blocks.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Strips the `>` marker and at most one following space.
    ///
    /// Returns `None` if the line is not a quote.
    pub fn strip_prefix(trimmed: &str) -> Option<&str> {
        let rest = trimmed.strip_prefix(Self::PREFIX)?;
        Some(rest.strip_prefix(' ').unwrap_or(rest))
    }
}

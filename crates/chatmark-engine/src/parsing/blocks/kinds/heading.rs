use std::sync::LazyLock;

use regex::Regex;

static ATX_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,6})\s+(.+)$").expect("heading pattern is valid"));

pub struct Heading;

impl Heading {
    /// Parses an ATX heading into `(level, text)`.
    ///
    /// Seven or more `#` are not a heading.
    pub fn parse(trimmed: &str) -> Option<(u8, &str)> {
        let caps = ATX_HEADING.captures(trimmed)?;
        let level = caps.get(1)?.as_str().len();
        let text = caps.get(2)?.as_str();
        Some((level.clamp(1, 6) as u8, text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_levels() {
        assert_eq!(Heading::parse("# Title"), Some((1, "Title")));
        assert_eq!(Heading::parse("###### Deep"), Some((6, "Deep")));
    }

    #[test]
    fn requires_space() {
        assert_eq!(Heading::parse("#hashtag"), None);
    }

    #[test]
    fn rejects_seven_hashes() {
        assert_eq!(Heading::parse("####### too deep"), None);
    }

    #[test]
    fn rejects_empty_heading() {
        assert_eq!(Heading::parse("#"), None);
    }
}

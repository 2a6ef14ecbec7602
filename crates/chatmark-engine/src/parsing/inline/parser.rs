use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::types::Inline;

/// All inline markers as one alternation. Order of the alternatives is
/// significant: the regex engine takes the first alternative that matches at
/// the leftmost position.
static INLINE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"\*\*(?P<bold>[^*]+)\*\*",
        r"|\*(?P<italic>[^*]+)\*",
        r"|`(?P<code>[^`]+)`",
        r"|\[(?P<label>[^\]]*)\]\((?P<href>[^)]*)\)",
        r"|!\[(?P<alt>[^\]]*)\]\((?P<src>[^)]*)\)",
        r"|~~(?P<strike>[^~]+)~~",
    ))
    .expect("inline pattern is valid")
});

/// Tokenizes `s` into a sequence of [`Inline`] fragments.
///
/// Fragments cover the entire input in order: text between matches is
/// emitted as [`Inline::Text`]. Emphasis and strikethrough bodies are
/// tokenized again for the markers they can still contain (code, links,
/// images and the other emphasis kinds).
///
/// Never fails; input without markers comes back as a single `Text`
/// (or nothing, for the empty string).
pub fn tokenize(s: &str) -> Vec<Inline> {
    let mut out = vec![];
    let mut last = 0;

    for caps in INLINE_PATTERN.captures_iter(s) {
        let Some(whole) = caps.get(0) else { continue };
        if whole.start() > last {
            out.push(Inline::text(&s[last..whole.start()]));
        }
        out.push(fragment(&caps));
        last = whole.end();
    }

    if last < s.len() {
        out.push(Inline::text(&s[last..]));
    }
    out
}

/// Builds the fragment for whichever alternative produced `caps`.
fn fragment(caps: &Captures<'_>) -> Inline {
    let group = |name: &str| caps.name(name).map(|m| m.as_str());

    if let Some(body) = group("bold") {
        Inline::Bold {
            children: tokenize(body),
        }
    } else if let Some(body) = group("italic") {
        Inline::Italic {
            children: tokenize(body),
        }
    } else if let Some(code) = group("code") {
        Inline::Code { code: code.into() }
    } else if let (Some(label), Some(url)) = (group("label"), group("href")) {
        Inline::Link {
            label: label.into(),
            url: url.into(),
        }
    } else if let (Some(alt), Some(url)) = (group("alt"), group("src")) {
        Inline::Image {
            alt: alt.into(),
            url: url.into(),
        }
    } else if let Some(body) = group("strike") {
        Inline::Strikethrough {
            children: tokenize(body),
        }
    } else {
        // Every alternative has a named group, so this is unreachable in
        // practice; keep the matched text rather than dropping it.
        Inline::text(caps.get(0).map_or("", |m| m.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn bold(s: &str) -> Inline {
        Inline::Bold {
            children: vec![Inline::text(s)],
        }
    }

    #[test]
    fn parse_simple_text() {
        assert_eq!(tokenize("hello world"), vec![Inline::text("hello world")]);
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn parse_bold_in_text() {
        assert_eq!(
            tokenize("a **bold** move"),
            vec![Inline::text("a "), bold("bold"), Inline::text(" move")]
        );
    }

    #[test]
    fn parse_italic() {
        assert_eq!(
            tokenize("*lean*"),
            vec![Inline::Italic {
                children: vec![Inline::text("lean")]
            }]
        );
    }

    #[test]
    fn parse_code_span() {
        assert_eq!(
            tokenize("run `cargo test` now"),
            vec![
                Inline::text("run "),
                Inline::Code {
                    code: "cargo test".into()
                },
                Inline::text(" now"),
            ]
        );
    }

    #[test]
    fn code_span_is_raw() {
        assert_eq!(
            tokenize("`**not bold**`"),
            vec![Inline::Code {
                code: "**not bold**".into()
            }]
        );
    }

    #[test]
    fn parse_link() {
        assert_eq!(
            tokenize("[docs](https://example.com/docs)"),
            vec![Inline::Link {
                label: "docs".into(),
                url: "https://example.com/docs".into(),
            }]
        );
    }

    #[test]
    fn empty_link_still_links() {
        assert_eq!(
            tokenize("[]()"),
            vec![Inline::Link {
                label: String::new(),
                url: String::new(),
            }]
        );
    }

    #[test]
    fn parse_image() {
        assert_eq!(
            tokenize("![logo](/logo.png)"),
            vec![Inline::Image {
                alt: "logo".into(),
                url: "/logo.png".into(),
            }]
        );
    }

    #[test]
    fn parse_strikethrough() {
        assert_eq!(
            tokenize("~~old~~ new"),
            vec![
                Inline::Strikethrough {
                    children: vec![Inline::text("old")]
                },
                Inline::text(" new"),
            ]
        );
    }

    #[test]
    fn triple_star_prefers_bold_inside() {
        assert_eq!(
            tokenize("***text***"),
            vec![Inline::text("*"), bold("text"), Inline::text("*")]
        );
    }

    #[test]
    fn stray_star_stays_literal() {
        assert_eq!(tokenize("5 * 3"), vec![Inline::text("5 * 3")]);
    }

    #[test]
    fn unclosed_markers_become_text() {
        assert_eq!(
            tokenize("**open and `also open"),
            vec![Inline::text("**open and `also open")]
        );
    }

    #[test]
    fn bold_body_keeps_code() {
        assert_eq!(
            tokenize("**use `x`**"),
            vec![Inline::Bold {
                children: vec![Inline::text("use "), Inline::Code { code: "x".into() }]
            }]
        );
    }

    #[test]
    fn strikethrough_body_keeps_bold() {
        assert_eq!(
            tokenize("~~**gone**~~"),
            vec![Inline::Strikethrough {
                children: vec![bold("gone")]
            }]
        );
    }

    #[test]
    fn multibyte_text_is_preserved() {
        assert_eq!(
            tokenize("Welcome to **HaiIntel**! 👋"),
            vec![
                Inline::text("Welcome to "),
                bold("HaiIntel"),
                Inline::text("! 👋"),
            ]
        );
    }
}

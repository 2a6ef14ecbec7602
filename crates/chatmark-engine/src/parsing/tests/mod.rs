//! Behavioural tests for the block segmenter and render entry points.

use pretty_assertions::assert_eq;
use rstest::rstest;

use super::{
    blocks::{Block, ListItem, visible_text},
    inline::Inline,
    parse_document, render_markdown,
};

fn para(text: &str) -> Block {
    Block::Paragraph {
        content: vec![Inline::text(text)],
    }
}

fn item(text: &str) -> ListItem {
    ListItem {
        is_task: false,
        checked: false,
        content: vec![Inline::text(text)],
    }
}

fn cells(texts: &[&str]) -> Vec<Vec<Inline>> {
    texts.iter().map(|t| vec![Inline::text(*t)]).collect()
}

#[test]
fn empty_document() {
    assert!(parse_document("").is_empty());
    assert!(render_markdown("").is_empty());
}

#[test]
fn blank_lines_only() {
    assert!(parse_document("\n  \n\t\n").is_empty());
}

#[test]
fn each_line_is_its_own_paragraph() {
    assert_eq!(
        parse_document("  first line  \nsecond"),
        vec![para("first line"), para("second")]
    );
}

#[test]
fn simple_table() {
    assert_eq!(
        parse_document("| A | B |\n|---|---|\n| 1 | 2 |"),
        vec![Block::Table {
            headers: cells(&["A", "B"]),
            rows: vec![cells(&["1", "2"])],
        }]
    );
}

#[test]
fn table_stops_at_first_non_pipe_line() {
    let blocks = parse_document("| A |\n|---|\n| 1 |\nafter");
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[1], para("after"));
}

#[test]
fn pipe_line_without_separator_is_paragraph() {
    assert_eq!(
        parse_document("| not | a table |\n| still | not |"),
        vec![para("| not | a table |"), para("| still | not |")]
    );
}

#[test]
fn lone_pipe_line_at_end_is_paragraph() {
    assert_eq!(parse_document("|x|"), vec![para("|x|")]);
}

#[test]
fn fenced_code_is_verbatim() {
    assert_eq!(
        parse_document("```rust\n    let **x** = 1;\n\n```\nafter"),
        vec![
            Block::CodeBlock {
                language: "rust".into(),
                code: "    let **x** = 1;\n".into(),
            },
            para("after"),
        ]
    );
}

#[test]
fn unterminated_fence_takes_the_rest() {
    assert_eq!(
        parse_document("intro\n```\nline one\n# not a heading"),
        vec![
            para("intro"),
            Block::CodeBlock {
                language: String::new(),
                code: "line one\n# not a heading".into(),
            },
        ]
    );
}

#[test]
fn headings_by_level() {
    assert_eq!(
        parse_document("# One\n#### Four"),
        vec![
            Block::Heading {
                level: 1,
                content: vec![Inline::text("One")],
            },
            Block::Heading {
                level: 4,
                content: vec![Inline::text("Four")],
            },
        ]
    );
}

#[test]
fn blockquotes_stay_per_line() {
    assert_eq!(
        parse_document("> one\n> two"),
        vec![
            Block::Blockquote {
                content: vec![Inline::text("one")],
            },
            Block::Blockquote {
                content: vec![Inline::text("two")],
            },
        ]
    );
}

#[test]
fn blank_line_splits_lists() {
    assert_eq!(
        parse_document("- a\n- b\n\n- c"),
        vec![
            Block::List {
                ordered: false,
                items: vec![item("a"), item("b")],
            },
            Block::List {
                ordered: false,
                items: vec![item("c")],
            },
        ]
    );
}

#[test]
fn switching_marker_style_splits_lists() {
    assert_eq!(
        parse_document("- a\n1. b\n2. c\n* d"),
        vec![
            Block::List {
                ordered: false,
                items: vec![item("a")],
            },
            Block::List {
                ordered: true,
                items: vec![item("b"), item("c")],
            },
            Block::List {
                ordered: false,
                items: vec![item("d")],
            },
        ]
    );
}

#[test]
fn task_list_items() {
    assert_eq!(
        parse_document("- [ ] todo\n- [x] done"),
        vec![Block::List {
            ordered: false,
            items: vec![
                ListItem {
                    is_task: true,
                    checked: false,
                    content: vec![Inline::text("todo")],
                },
                ListItem {
                    is_task: true,
                    checked: true,
                    content: vec![Inline::text("done")],
                },
            ],
        }]
    );
}

#[test]
fn list_closed_by_paragraph() {
    assert_eq!(
        parse_document("- a\nplain"),
        vec![
            Block::List {
                ordered: false,
                items: vec![item("a")],
            },
            para("plain"),
        ]
    );
}

#[test]
fn horizontal_rules() {
    assert_eq!(
        parse_document("---\n***\n___"),
        vec![
            Block::HorizontalRule,
            Block::HorizontalRule,
            Block::HorizontalRule
        ]
    );
}

#[test]
fn crlf_line_endings() {
    assert_eq!(
        parse_document("# Title\r\n```\r\ncode\r\n```\r\n"),
        vec![
            Block::Heading {
                level: 1,
                content: vec![Inline::text("Title")],
            },
            Block::CodeBlock {
                language: String::new(),
                code: "code".into(),
            },
        ]
    );
}

#[rstest]
#[case("Hello there\n\n  We reply within a day.  \nThanks")]
#[case("a * b * c")]
#[case("2 * 3 = 6")]
#[case("#hashtag and # alone")]
#[case("1.5 million users")]
#[case("x | y")]
#[case("| lone pipe")]
#[case("-dash and _under")]
#[case("snake_case_name")]
#[case("--")]
#[case("- ")]
#[case("***")]
#[case("   ---   ")]
#[case("> ")]
#[case(">no space")]
#[case("a `b")]
#[case("[x] y (z)")]
#[case("[]()")]
#[case("![]()")]
#[case("~~")]
#[case("~ tilde ~")]
#[case("  ```")]
#[case("**")]
#[case("\r\n\r\n")]
#[case("Price: $5 - $6\r\nCall 555-0100")]
fn plain_fast_path_matches_segmenter(#[case] text: &str) {
    assert_eq!(render_markdown(text), parse_document(text));
}

#[test]
fn render_is_idempotent() {
    let text = "# Hi\n| a | b |\n|---|---|\n| 1 | 2 |\n- [x] ok\n> quote\n```js\nx\n```";
    assert_eq!(render_markdown(text), render_markdown(text));
}

#[test]
fn growing_prefixes_never_panic() {
    let text = "**Features:**\n- ✅ fast\n\n```bash\nnpm install\n```\n| a |\n|---|\n| 1 |";
    for (i, _) in text.char_indices() {
        let _ = render_markdown(&text[..i]);
    }
    let _ = render_markdown(text);
}

#[rstest]
#[case(
    "# **Hello**\n\nSee [docs](https://x.y) and `code`.\n- one\n- two",
    "Hello\nSee docs and code.\none two"
)]
#[case("**a** *b* ~~c~~", "a b c")]
#[case("> *quoted* text", "quoted text")]
#[case("| A | **B** |\n|---|---|\n| 1 | `2` |", "A B 1 2")]
#[case("```rust\nfn main() {}\n```", "fn main() {}")]
#[case("1. first\n2. ![logo](l.png) second", "first logo second")]
#[case("---\nafter the rule", "after the rule")]
#[case("- [x] done *now*", "done now")]
#[case("plain words only", "plain words only")]
fn visible_text_drops_markup(#[case] text: &str, #[case] expected: &str) {
    assert_eq!(visible_text(&render_markdown(text)), expected);
}

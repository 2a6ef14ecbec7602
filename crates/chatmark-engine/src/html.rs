//! HTML output for parsed blocks.
//!
//! Element choice follows the widget's message bubble: links open in a new
//! tab, images load lazily, task items get disabled checkboxes. Every piece
//! of user text goes through `html_escape`.

use std::fmt::Write;

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::parsing::{blocks::Block, inline::Inline};

pub fn render_html(blocks: &[Block]) -> String {
    let mut out = String::new();
    for block in blocks {
        write_block(&mut out, block);
        out.push('\n');
    }
    out
}

pub fn render_inline_html(nodes: &[Inline]) -> String {
    let mut out = String::new();
    write_inlines(&mut out, nodes);
    out
}

fn write_block(out: &mut String, block: &Block) {
    match block {
        Block::Paragraph { content } => wrap(out, "p", content),
        Block::Heading { level, content } => wrap(out, &format!("h{level}"), content),
        Block::Blockquote { content } => wrap(out, "blockquote", content),
        Block::CodeBlock { language, code } => {
            if language.is_empty() {
                out.push_str("<pre><code>");
            } else {
                let _ = write!(
                    out,
                    "<pre><code class=\"language-{}\">",
                    encode_double_quoted_attribute(language)
                );
            }
            out.push_str(&encode_text(code));
            out.push_str("</code></pre>");
        }
        Block::Table { headers, rows } => {
            out.push_str("<table><thead><tr>");
            for cell in headers {
                wrap(out, "th", cell);
            }
            out.push_str("</tr></thead><tbody>");
            for row in rows {
                out.push_str("<tr>");
                for cell in row {
                    wrap(out, "td", cell);
                }
                out.push_str("</tr>");
            }
            out.push_str("</tbody></table>");
        }
        Block::List { ordered, items } => {
            let tag = if *ordered { "ol" } else { "ul" };
            let _ = write!(out, "<{tag}>");
            for item in items {
                out.push_str("<li>");
                if item.is_task {
                    out.push_str("<input type=\"checkbox\" disabled");
                    if item.checked {
                        out.push_str(" checked");
                    }
                    out.push_str("> ");
                }
                write_inlines(out, &item.content);
                out.push_str("</li>");
            }
            let _ = write!(out, "</{tag}>");
        }
        Block::HorizontalRule => out.push_str("<hr>"),
    }
}

fn wrap(out: &mut String, tag: &str, content: &[Inline]) {
    let _ = write!(out, "<{tag}>");
    write_inlines(out, content);
    let _ = write!(out, "</{tag}>");
}

fn write_inlines(out: &mut String, nodes: &[Inline]) {
    for node in nodes {
        match node {
            Inline::Text { text } => out.push_str(&encode_text(text)),
            Inline::Bold { children } => wrap(out, "strong", children),
            Inline::Italic { children } => wrap(out, "em", children),
            Inline::Strikethrough { children } => wrap(out, "del", children),
            Inline::Code { code } => {
                let _ = write!(out, "<code>{}</code>", encode_text(code));
            }
            Inline::Link { label, url } => {
                let _ = write!(
                    out,
                    "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
                    encode_double_quoted_attribute(safe_url(url, false)),
                    encode_text(label)
                );
            }
            Inline::Image { alt, url } => {
                let _ = write!(
                    out,
                    "<img src=\"{}\" alt=\"{}\" loading=\"lazy\">",
                    encode_double_quoted_attribute(safe_url(url, true)),
                    encode_double_quoted_attribute(alt)
                );
            }
        }
    }
}

/// Script-capable schemes render as `#`. Images may still use `data:image/`.
fn safe_url(url: &str, image: bool) -> &str {
    // browsers ignore whitespace and control characters inside the scheme
    let scheme: String = url
        .chars()
        .filter(|c| !c.is_ascii_whitespace() && !c.is_ascii_control())
        .take(16)
        .collect::<String>()
        .to_ascii_lowercase();

    let blocked = scheme.starts_with("javascript:")
        || scheme.starts_with("vbscript:")
        || (scheme.starts_with("data:") && !(image && scheme.starts_with("data:image/")));
    if blocked {
        log::debug!("Dropping unsafe url scheme in {url:?}");
        "#"
    } else {
        url
    }
}

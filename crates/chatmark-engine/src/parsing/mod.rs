pub mod blocks;
pub mod complexity;
pub mod features;
pub mod inline;

use blocks::{Block, BlockBuilder, MarkdownLineClassifier};
use complexity::Complexity;
use inline::Inline;

/// Segments `text` into blocks with the full block parser.
pub fn parse_document(text: &str) -> Vec<Block> {
    let classifier = MarkdownLineClassifier;
    let mut builder = BlockBuilder::new();

    for line in text.split('\n') {
        let lc = classifier.classify(line);
        builder.push(&lc);
    }

    builder.finish()
}

/// Renders a chat message into blocks.
///
/// Marker-free text skips the segmenter and becomes one paragraph per
/// non-blank line, which is what the segmenter would produce for it anyway.
pub fn render_markdown(text: &str) -> Vec<Block> {
    let complexity = Complexity::of(text);
    log::debug!("rendering {} bytes as {complexity:?}", text.len());

    match complexity {
        Complexity::Plain => text
            .split('\n')
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| Block::Paragraph {
                content: vec![Inline::text(line)],
            })
            .collect(),
        Complexity::Simple | Complexity::Complex => parse_document(text),
    }
}

/// Tokenizes inline-flow text without looking for blocks.
pub fn render_inline(text: &str) -> Vec<Inline> {
    inline::tokenize(text)
}

#[cfg(test)]
mod tests;

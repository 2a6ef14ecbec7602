//! # Inline Parsing
//!
//! Single-pattern inline tokenizing over one line of text.
//!
//! ## Modules
//!
//! - **`types`**: `Inline` enum (Text, Bold, Italic, Code, Link, Image, Strikethrough)
//! - **`parser`**: `tokenize()` entry point driven by one combined regex
//!
//! ## Marker Precedence
//!
//! At every position the alternatives are tried in a fixed order:
//! bold, italic, code, link, image, strikethrough. Both emphasis forms use
//! `*`, so the order decides ambiguous input: `***x***` tokenizes as
//! `*`, Bold(`x`), `*`.
//!
//! Unclosed markers never match and stay in the surrounding text.

pub mod parser;
pub mod types;

pub use parser::tokenize;
pub use types::{Inline, inline_visible_text};

//! # Block Kinds
//!
//! Block-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`CodeFence`**: ```` ``` ```` opener/closer and language tag
//! - **`Table`**: `|` row prefix, separator row form, cell splitting
//! - **`Heading`**: ATX `#` prefix, level 1-6
//! - **`BlockQuote`**: `>` prefix
//! - **`ListMarker`**: `-`/`*` bullets, `N.` numbers, `[ ]`/`[x]` task boxes
//! - **`ThematicBreak`**: runs of `-`, `*` or `_`
//!
//! ## Design Principle
//!
//! All delimiter knowledge lives here, not scattered in classifier code.
//! Every recognizer takes a line that has already been trimmed.

pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod list;
pub mod table;
pub mod thematic_break;

pub use block_quote::BlockQuote;
pub use code_fence::CodeFence;
pub use heading::Heading;
pub use list::ListMarker;
pub use table::Table;
pub use thematic_break::ThematicBreak;

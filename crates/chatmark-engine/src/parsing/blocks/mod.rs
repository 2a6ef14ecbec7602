//! # Block Parsing
//!
//! Two-phase, single forward pass over the lines of a message.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line becomes a `LineClass`
//!    holding local facts only (blank, fence opener, table row, heading, ...)
//!
//! 2. **Block Construction** (`builder`): a `BlockBuilder` keeps at most one
//!    multi-line construct open (fence, table, list) and emits `Block`s as
//!    constructs close
//!
//! ## Modules
//!
//! - **`types`**: Core types (`Block`, `ListItem`)
//! - **`kinds`**: Block-specific syntax (CodeFence, Table, Heading, BlockQuote, ListMarker, ThematicBreak)
//! - **`classify`**: `MarkdownLineClassifier` produces `LineClass` for each line
//! - **`builder`**: `BlockBuilder` state machine for block construction
//!
//! ## Key Invariants
//!
//! - Fenced code blocks are raw zones: no block/inline parsing inside
//! - A table needs a header row followed by a separator row; otherwise the
//!   `|` line is a paragraph
//! - Lists merge consecutive items of the same style only; a blank line or a
//!   switch between bullets and numbers starts a new list
//! - Every `>` line is its own blockquote

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, LineKind, MarkdownLineClassifier};
pub use types::{Block, ListItem, visible_text};

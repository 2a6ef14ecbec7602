pub mod artifacts;
pub mod html;
pub mod models;
pub mod parsing;
pub mod session;
pub mod suggestions;

// Re-export key types for easier usage
pub use artifacts::{Artifact, ChartArtifact, ChartType, CodeArtifact, extract_artifacts};
pub use models::{ChartData, ChartError, ChatMessage, Detail, Role, Stat};
pub use parsing::{
    blocks::{Block, ListItem, visible_text},
    complexity::{Complexity, has_code_blocks},
    features::MarkdownFeatures,
    inline::Inline,
    parse_document, render_inline, render_markdown,
};
pub use session::{ChatSession, SessionError};
pub use suggestions::{Chip, default_pool, select_suggestions};

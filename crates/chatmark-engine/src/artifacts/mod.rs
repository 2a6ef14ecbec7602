//! # Artifacts
//!
//! Independently viewable pieces of a message for the side panel: every
//! fenced code block, then the message's chart if it has one.
//!
//! Extraction scans the raw text with its own fence pattern and does not go
//! through the block segmenter. Artifacts are derived on demand and never
//! cached.

pub mod titles;

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::models::{ChartData, ChatMessage};

/// Opening backticks, optional tag, newline, body, closing backticks.
static CODE_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)```([A-Za-z0-9_]+)?\n(.*?)```").expect("code block pattern is valid")
});

/// Language used when a fence has no tag.
pub const DEFAULT_LANGUAGE: &str = "text";
/// Chart title used when the chart has none.
pub const DEFAULT_CHART_TITLE: &str = "Chart";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeArtifact {
    pub language: String,
    pub code: String,
    pub title: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartType {
    #[default]
    Bar,
    Pie,
    Line,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartArtifact {
    pub chart_type: ChartType,
    pub data: ChartData,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Artifact {
    Code(CodeArtifact),
    Chart(ChartArtifact),
}

impl Artifact {
    pub fn title(&self) -> &str {
        match self {
            Artifact::Code(code) => &code.title,
            Artifact::Chart(chart) => &chart.title,
        }
    }

    /// What the copy button puts on the clipboard: code verbatim, charts as CSV.
    pub fn clipboard_text(&self) -> String {
        match self {
            Artifact::Code(code) => code.code.clone(),
            Artifact::Chart(chart) => chart.data.to_csv(),
        }
    }

    pub fn can_preview(&self) -> bool {
        match self {
            Artifact::Code(code) => titles::is_previewable(&code.language),
            Artifact::Chart(_) => true,
        }
    }
}

impl CodeArtifact {
    pub fn new(language: impl Into<String>, code: impl Into<String>) -> Self {
        let language = language.into();
        let title = titles::title_for(&language);
        Self {
            language,
            code: code.into(),
            title,
        }
    }

    /// Title reduced to `[a-z0-9_]` plus an extension for the language.
    pub fn download_filename(&self) -> String {
        let stem: String = self
            .title
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() {
                    c.to_ascii_lowercase()
                } else {
                    '_'
                }
            })
            .collect();
        let stem = if stem.is_empty() {
            "code".to_string()
        } else {
            stem
        };
        format!("{stem}.{}", titles::extension_for(&self.language))
    }
}

impl ChartArtifact {
    pub fn new(data: ChartData) -> Self {
        let title = data
            .title
            .clone()
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| DEFAULT_CHART_TITLE.to_string());
        Self {
            chart_type: ChartType::default(),
            data,
            title,
        }
    }
}

/// Every fenced code block in `text`, in order of appearance.
///
/// Bodies are trimmed. Untagged fences get the `text` language.
pub fn extract_code_blocks(text: &str) -> Vec<CodeArtifact> {
    CODE_BLOCK
        .captures_iter(text)
        .map(|caps| {
            let language = caps.get(1).map_or(DEFAULT_LANGUAGE, |m| m.as_str());
            let code = caps.get(2).map_or("", |m| m.as_str().trim());
            CodeArtifact::new(language, code)
        })
        .collect()
}

/// Artifacts for the side panel: code blocks from the text, then the chart.
pub fn extract_artifacts(message: &ChatMessage) -> Vec<Artifact> {
    let mut artifacts: Vec<Artifact> = extract_code_blocks(&message.text)
        .into_iter()
        .map(Artifact::Code)
        .collect();

    if let Some(chart) = &message.chart {
        artifacts.push(Artifact::Chart(ChartArtifact::new(chart.clone())));
    }

    log::debug!(
        "message {} yielded {} artifact(s)",
        message.id,
        artifacts.len()
    );
    artifacts
}

use serde::{Deserialize, Serialize};

use super::chart::ChartData;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
}

/// A headline number shown on a stats card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

/// One card of a detail grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Detail {
    pub icon: String,
    pub title: String,
    pub description: String,
}

/// A message in the chat history.
///
/// The parser only reads `text` and `chart`; the other rich-content fields
/// are carried for the display layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    #[serde(default)]
    pub id: u64,
    pub role: Role,
    #[serde(default)]
    pub text: String,
    /// Unix epoch milliseconds.
    #[serde(default)]
    pub timestamp: u64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<Vec<Stat>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chart: Option<ChartData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<Detail>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub list_ordered: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thinking: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub error: bool,
}

impl ChatMessage {
    /// A message with only a role and text. `id` and `timestamp` are
    /// assigned when it is pushed into a session.
    pub fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            id: 0,
            role,
            text: text.into(),
            timestamp: 0,
            images: vec![],
            stats: None,
            chart: None,
            details: None,
            list: None,
            list_ordered: false,
            thinking: None,
            error: false,
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Role::User, text)
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(Role::Assistant, text)
    }

    pub fn with_chart(mut self, chart: ChartData) -> Self {
        self.chart = Some(chart);
        self
    }
}

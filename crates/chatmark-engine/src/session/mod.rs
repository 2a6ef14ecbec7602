use std::collections::VecDeque;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::models::ChatMessage;

/// Default number of messages a session keeps.
pub const DEFAULT_MAX_MESSAGES: usize = 100;

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Corrupt session history: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Stored message id {0} leaves no room for new ids")]
    IdsExhausted(u64),
}

/// Ordered chat history for one browsing session.
///
/// Ids are assigned on push and only ever increase, even after old messages
/// have been trimmed away.
#[derive(Debug, Clone)]
pub struct ChatSession {
    messages: VecDeque<ChatMessage>,
    next_id: u64,
    max_messages: usize,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_MAX_MESSAGES)
    }

    /// A session that keeps at most `max_messages` (at least one).
    pub fn with_capacity(max_messages: usize) -> Self {
        Self {
            messages: VecDeque::new(),
            next_id: 1,
            max_messages: max_messages.max(1),
        }
    }

    /// Stamps `message` with the next id and the current time, then appends it.
    pub fn push(&mut self, message: ChatMessage) -> &ChatMessage {
        self.push_at(message, now_millis())
    }

    /// As [`push`](Self::push) with an explicit timestamp.
    pub fn push_at(&mut self, mut message: ChatMessage, timestamp: u64) -> &ChatMessage {
        message.id = self.next_id;
        message.timestamp = timestamp;
        self.next_id = self.next_id.saturating_add(1);

        self.messages.push_back(message);
        while self.messages.len() > self.max_messages {
            self.messages.pop_front();
        }
        // just pushed, so never empty
        &self.messages[self.messages.len() - 1]
    }

    pub fn messages(&self) -> impl Iterator<Item = &ChatMessage> {
        self.messages.iter()
    }

    pub fn get(&self, id: u64) -> Option<&ChatMessage> {
        self.messages.iter().find(|m| m.id == id)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Drops all messages. Ids keep counting up.
    pub fn clear(&mut self) {
        self.messages.clear();
    }

    pub fn to_json(&self) -> Result<String, SessionError> {
        Ok(serde_json::to_string(&self.messages)?)
    }

    /// Rebuilds a session from [`to_json`](Self::to_json) output.
    pub fn from_json(json: &str, max_messages: usize) -> Result<Self, SessionError> {
        let stored: Vec<ChatMessage> = serde_json::from_str(json)?;
        let mut session = Self::with_capacity(max_messages);
        session.next_id = match stored.iter().map(|m| m.id).max() {
            Some(id) => id.checked_add(1).ok_or(SessionError::IdsExhausted(id))?,
            None => 1,
        };

        let skip = stored.len().saturating_sub(session.max_messages);
        session.messages = stored.into_iter().skip(skip).collect();
        Ok(session)
    }

    /// Like [`from_json`](Self::from_json) but starts empty on corrupt input.
    pub fn restore(json: &str, max_messages: usize) -> Self {
        Self::from_json(json, max_messages).unwrap_or_else(|e| {
            log::warn!("Discarding stored chat session: {e}");
            Self::with_capacity(max_messages)
        })
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_millis() as u64)
}

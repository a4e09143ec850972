//! Chat session state: answer mode and transcript.

use chrono::Local;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use intradesk_core::types::AnswerMode;

/// Speaker of a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    System,
    Human,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::System => "system",
            Self::Human => "human",
            Self::Assistant => "assistant",
        }
    }
}

/// One transcript entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub role: Role,
    pub content: String,
    /// Epoch seconds.
    pub created_at: i64,
}

impl ChatMessage {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            content: content.into(),
            created_at: Local::now().timestamp(),
        }
    }

    pub fn human(content: impl Into<String>) -> Self {
        Self::new(Role::Human, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }
}

/// Per-user conversation context passed to the responder on every call.
///
/// The responder is the only writer of the transcript.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChatSession {
    pub id: Uuid,
    mode: AnswerMode,
    transcript: Vec<ChatMessage>,
    pub started_at: i64,
}

impl ChatSession {
    pub fn new(mode: AnswerMode) -> Self {
        Self {
            id: Uuid::new_v4(),
            mode,
            transcript: Vec::new(),
            started_at: Local::now().timestamp(),
        }
    }

    pub fn mode(&self) -> AnswerMode {
        self.mode
    }

    /// Switch answer style. Only the answer template changes; the
    /// transcript is kept.
    pub fn set_mode(&mut self, mode: AnswerMode) {
        self.mode = mode;
    }

    pub fn history(&self) -> &[ChatMessage] {
        &self.transcript
    }

    /// Number of completed question/answer exchanges.
    pub fn turns(&self) -> usize {
        self.transcript
            .iter()
            .filter(|m| m.role == Role::Human)
            .count()
    }

    pub fn clear(&mut self) {
        self.transcript.clear();
    }

    pub(crate) fn record_exchange(&mut self, question: &str, answer: &str) {
        self.transcript.push(ChatMessage::human(question));
        self.transcript.push(ChatMessage::assistant(answer));
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new(AnswerMode::default())
    }
}

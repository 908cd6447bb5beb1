use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who a chat bubble belongs to. Bot bubbles render left-aligned with the
/// accent background, user bubbles right-aligned on the surface color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    Bot,
    User,
}

impl Sender {
    pub fn avatar(&self) -> &'static str {
        match self {
            Sender::Bot => "🤖",
            Sender::User => "👤",
        }
    }
}

impl std::fmt::Display for Sender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sender::Bot => write!(f, "bot"),
            Sender::User => write!(f, "user"),
        }
    }
}

/// A single chat message. Transient: lives in the [`ChatLog`] until the
/// visible cap evicts it, never persisted anywhere.
///
/// [`ChatLog`]: super::chat_log::ChatLog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: Uuid,
    pub sender: Sender,
    pub text: String,
    pub sent_at: DateTime<Local>,
}

impl Message {
    pub fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender,
            text: text.into(),
            sent_at: Local::now(),
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self::new(Sender::Bot, text)
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Sender::User, text)
    }

    pub fn is_bot(&self) -> bool {
        self.sender == Sender::Bot
    }

    /// Clock label shown under the bubble, e.g. "14:32".
    pub fn timestamp_label(&self) -> String {
        self.sent_at.format("%H:%M").to_string()
    }
}

//! UI-agnostic chat state types
//!
//! These are the values a presentation surface reads to draw the chat panel.
//! Nothing here depends on a UI framework.

use serde::{Deserialize, Serialize};

/// Who said a chat turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Speaker {
    User,
    Assistant,
}

/// One utterance in the conversation. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    speaker: Speaker,
    text: String,
}

impl ChatTurn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::User,
            text: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::Assistant,
            text: text.into(),
        }
    }

    pub fn speaker(&self) -> Speaker {
        self.speaker
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Append-only, oldest-first sequence of chat turns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MessageLog {
    turns: Vec<ChatTurn>,
}

impl MessageLog {
    pub fn seeded(greeting: impl Into<String>) -> Self {
        Self {
            turns: vec![ChatTurn::assistant(greeting)],
        }
    }

    pub(crate) fn push(&mut self, turn: ChatTurn) {
        self.turns.push(turn);
    }

    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

/// Snapshot of everything needed to render the chat panel
#[derive(Debug, Clone, Copy)]
pub struct SessionState<'a> {
    pub log: &'a MessageLog,
    pub pending: bool,
    pub draft: &'a str,
}

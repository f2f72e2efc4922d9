//! Chat thread types
//!
//! A thread is an append-only turn sequence scoped to one itinerary session.
//! There is no reset operation; replacing the session replaces the thread.

use serde::{Deserialize, Serialize};

/// Who produced a chat turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    Assistant,
    User,
}

/// One turn in the follow-up conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    pub speaker: Speaker,
    pub text: String,
}

/// Ordered, append-only chat history for one itinerary
#[derive(Debug, Clone)]
pub struct ChatThread {
    turns: Vec<ChatTurn>,
}

impl ChatThread {
    /// Create a thread seeded with the assistant greeting for a destination
    pub fn for_destination(destination: &str) -> Self {
        let greeting = format!(
            "I'm your travel assistant for {}. Feel free to ask any questions about your trip!",
            destination
        );
        Self {
            turns: vec![ChatTurn {
                speaker: Speaker::Assistant,
                text: greeting,
            }],
        }
    }

    /// Append a user turn (done optimistically, before the exchange resolves)
    pub fn push_user(&mut self, text: impl Into<String>) {
        self.turns.push(ChatTurn {
            speaker: Speaker::User,
            text: text.into(),
        });
    }

    /// Append an assistant turn
    pub fn push_assistant(&mut self, text: impl Into<String>) {
        self.turns.push(ChatTurn {
            speaker: Speaker::Assistant,
            text: text.into(),
        });
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

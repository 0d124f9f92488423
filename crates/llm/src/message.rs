//! Conversation turns and the upstream history format

use serde::{Deserialize, Serialize};

/// The speaker of a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Role {
    /// The user role
    #[serde(rename = "user")]
    User,
    /// The assistant role
    #[serde(rename = "assistant")]
    Assistant,
}

/// One message exchanged in the conversation.
///
/// Turns are immutable once created; fields are only readable.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Turn {
    role: Role,
    content: String,
}

impl Turn {
    /// Create a new user turn
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    /// Create a new assistant turn
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }

    /// The speaker of this turn
    pub fn role(&self) -> Role {
        self.role
    }

    /// The text of this turn
    pub fn content(&self) -> &str {
        &self.content
    }
}

/// The ordered conversation of one session.
///
/// Append-only: insertion order is conversation order, nothing is
/// deduplicated or evicted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Transcript {
    turns: Vec<Turn>,
}

impl Transcript {
    /// Create an empty transcript
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a turn at the end of the conversation
    pub fn append(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    /// All turns in conversation order
    pub fn all(&self) -> &[Turn] {
        &self.turns
    }

    /// The most recent turn
    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }

    /// Number of turns
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// Whether no turn has been recorded yet
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

impl FromIterator<Turn> for Transcript {
    fn from_iter<I: IntoIterator<Item = Turn>>(iter: I) -> Self {
        Self {
            turns: iter.into_iter().collect(),
        }
    }
}

/// The author tag of a history entry as the remote API names it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Author {
    /// Text written by the user
    User,
    /// Text written by the model
    Model,
}

impl From<Role> for Author {
    fn from(role: Role) -> Self {
        match role {
            Role::User => Author::User,
            Role::Assistant => Author::Model,
        }
    }
}

/// A single text part of a history entry
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Part {
    /// The text of the part
    pub text: String,
}

/// A role-tagged history entry
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Content {
    /// Who wrote the entry
    pub role: Author,

    /// The content parts, one per text block
    pub parts: Vec<Part>,
}

impl Content {
    /// Create a single-part entry
    pub fn text(role: Author, text: impl Into<String>) -> Self {
        Self {
            role,
            parts: vec![Part { text: text.into() }],
        }
    }
}

impl From<&Turn> for Content {
    fn from(turn: &Turn) -> Self {
        Self::text(turn.role.into(), turn.content.as_str())
    }
}

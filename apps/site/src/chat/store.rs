use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::faq::GREETING;

/// Oldest-idle conversations are dropped beyond this many.
const MAX_CONVERSATIONS: usize = 10_000;

/// Messages kept per conversation. The greeting always stays; the oldest
/// exchange after it goes first.
pub const MAX_MESSAGES: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Position in the conversation, starting at 1 for the greeting.
    pub id: u64,
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug)]
struct Conversation {
    messages: Vec<ChatMessage>,
    next_id: u64,
    last_active: DateTime<Utc>,
}

impl Conversation {
    fn new() -> Self {
        let now = Utc::now();
        Self {
            messages: vec![ChatMessage {
                id: 1,
                role: Role::Assistant,
                content: GREETING.to_string(),
                timestamp: now,
            }],
            next_id: 2,
            last_active: now,
        }
    }
}

/// In-memory conversation transcripts keyed by conversation id.
/// The lock is never held across an `.await`.
#[derive(Clone)]
pub struct ChatStore {
    inner: Arc<RwLock<HashMap<Uuid, Conversation>>>,
    capacity: usize,
}

impl Default for ChatStore {
    fn default() -> Self {
        Self::with_capacity(MAX_CONVERSATIONS)
    }
}

impl ChatStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: Arc::default(),
            capacity: capacity.max(1),
        }
    }

    /// Opens a conversation seeded with the greeting.
    pub fn start(&self) -> Uuid {
        let id = Uuid::new_v4();
        let mut map = self.inner.write().unwrap_or_else(|e| e.into_inner());
        if map.len() >= self.capacity {
            let idle = map
                .iter()
                .min_by_key(|(_, c)| c.last_active)
                .map(|(id, _)| *id);
            if let Some(idle) = idle {
                map.remove(&idle);
            }
        }
        map.insert(id, Conversation::new());
        id
    }

    pub fn contains(&self, id: Uuid) -> bool {
        self.inner
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .contains_key(&id)
    }

    /// Appends a message; `None` when the conversation does not exist.
    pub fn push(&self, id: Uuid, role: Role, content: &str) -> Option<ChatMessage> {
        let mut map = self.inner.write().unwrap_or_else(|e| e.into_inner());
        let conversation = map.get_mut(&id)?;
        let now = Utc::now();
        let message = ChatMessage {
            id: conversation.next_id,
            role,
            content: content.to_string(),
            timestamp: now,
        };
        if conversation.messages.len() >= MAX_MESSAGES {
            conversation.messages.remove(1);
        }
        conversation.messages.push(message.clone());
        conversation.next_id += 1;
        conversation.last_active = now;
        Some(message)
    }

    pub fn transcript(&self, id: Uuid) -> Option<Vec<ChatMessage>> {
        self.inner
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(&id)
            .map(|c| c.messages.clone())
    }

    pub fn len(&self) -> usize {
        self.inner.read().unwrap_or_else(|e| e.into_inner()).len()
    }
}

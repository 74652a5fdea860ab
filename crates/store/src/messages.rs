// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Message registry operations and conversation queries.

use crate::MemoryStore;
use std::collections::BTreeMap;
use time::OffsetDateTime;
use worklink_domain::{Message, NewMessage, User};

/// A user's conversation with one counterparty: the counterparty's record
/// plus the most recent message exchanged with them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationSummary {
    /// The other participant.
    pub other_user: User,
    /// The most recent message between the two users, in either direction.
    pub last_message: Message,
}

impl MemoryStore {
    /// Returns the message with the given id, if present.
    #[must_use]
    pub fn message(&self, id: i64) -> Option<Message> {
        self.messages.get(&id).cloned()
    }

    /// Creates a message, assigning its id and timestamp. Always unread.
    pub fn create_message(&mut self, new_message: NewMessage) -> Message {
        let id: i64 = Self::next_id(&mut self.message_id_counter);
        let message = Message {
            id,
            from_user_id: new_message.from_user_id,
            to_user_id: new_message.to_user_id,
            content: new_message.content,
            read: false,
            created_at: OffsetDateTime::now_utc(),
        };
        self.messages.insert(id, message.clone());
        message
    }

    /// Marks a message as read.
    ///
    /// The read flag only ever moves false → true; marking an already-read
    /// message is a no-op. Returns the updated snapshot, or `None` if no
    /// such message exists.
    pub fn mark_message_read(&mut self, id: i64) -> Option<Message> {
        let message = self.messages.get_mut(&id)?;
        message.read = true;
        Some(message.clone())
    }

    /// Returns every message exchanged between the two users, oldest first.
    ///
    /// The pair is unordered: messages in both directions are included.
    /// Ties on the creation timestamp break by id ascending.
    #[must_use]
    pub fn conversation(&self, user_a: i64, user_b: i64) -> Vec<Message> {
        let mut messages: Vec<Message> = self
            .messages
            .values()
            .filter(|message| {
                (message.from_user_id == user_a && message.to_user_id == user_b)
                    || (message.from_user_id == user_b && message.to_user_id == user_a)
            })
            .cloned()
            .collect();
        messages.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.id.cmp(&b.id))
        });
        messages
    }

    /// Returns one summary per counterparty the user has exchanged messages
    /// with, ordered by the recency of each conversation's latest message.
    ///
    /// Counterparties whose user record no longer resolves are skipped.
    #[must_use]
    pub fn user_conversations(&self, user_id: i64) -> Vec<ConversationSummary> {
        let mut latest: BTreeMap<i64, Message> = BTreeMap::new();

        for message in self.messages.values() {
            let other_id: i64 = if message.from_user_id == user_id {
                message.to_user_id
            } else if message.to_user_id == user_id {
                message.from_user_id
            } else {
                continue;
            };

            let newer = latest.get(&other_id).is_none_or(|current| {
                message_recency(message) > message_recency(current)
            });
            if newer {
                latest.insert(other_id, message.clone());
            }
        }

        let mut summaries: Vec<ConversationSummary> = latest
            .into_iter()
            .filter_map(|(other_id, last_message)| {
                self.user(other_id).map(|other_user| ConversationSummary {
                    other_user,
                    last_message,
                })
            })
            .collect();
        summaries.sort_by(|a, b| {
            message_recency(&b.last_message).cmp(&message_recency(&a.last_message))
        });
        summaries
    }
}

/// Recency key for a message: creation time, then insertion order.
const fn message_recency(message: &Message) -> (OffsetDateTime, i64) {
    (message.created_at, message.id)
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::OffsetDateTime;

/// A direct message between two users.
///
/// The read flag flips false → true only, and only when the addressee
/// retrieves the conversation containing the message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Canonical identifier assigned by the store.
    pub id: i64,
    /// The sender.
    pub from_user_id: i64,
    /// The recipient.
    pub to_user_id: i64,
    /// Message body.
    pub content: String,
    /// Whether the recipient has seen this message.
    pub read: bool,
    /// Set at creation. Immutable.
    pub created_at: OffsetDateTime,
}

/// Insert payload for a new message. Always created unread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMessage {
    /// The sender.
    pub from_user_id: i64,
    /// The recipient.
    pub to_user_id: i64,
    /// Message body.
    pub content: String,
}

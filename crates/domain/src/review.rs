// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::OffsetDateTime;

/// A rating left by one party of a completed job for the other.
///
/// At most one review may exist per (job, reviewer, reviewee) triple.
/// Creating a review recomputes the reviewee's derived rating and review
/// count in the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    /// Canonical identifier assigned by the store.
    pub id: i64,
    /// The completed job being reviewed.
    pub job_id: i64,
    /// The reviewing party.
    pub from_user_id: i64,
    /// The reviewed party.
    pub to_user_id: i64,
    /// Star rating, 1 through 5.
    pub rating: i32,
    /// Optional free-text comment.
    pub comment: Option<String>,
    /// Set at creation. Immutable.
    pub created_at: OffsetDateTime,
}

/// Insert payload for a new review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReview {
    /// The completed job being reviewed.
    pub job_id: i64,
    /// The reviewing party.
    pub from_user_id: i64,
    /// The reviewed party.
    pub to_user_id: i64,
    /// Star rating, 1 through 5.
    pub rating: i32,
    /// Optional free-text comment.
    pub comment: Option<String>,
}

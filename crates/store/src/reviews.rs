// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Review registry operations and rating aggregation.

use crate::MemoryStore;
use time::OffsetDateTime;
use worklink_domain::{NewReview, Review, ReviewQuery};

impl MemoryStore {
    /// Returns the review with the given id, if present.
    #[must_use]
    pub fn review(&self, id: i64) -> Option<Review> {
        self.reviews.get(&id).cloned()
    }

    /// Returns all reviews matching the query, newest first.
    #[must_use]
    pub fn reviews(&self, query: &ReviewQuery) -> Vec<Review> {
        let mut reviews: Vec<Review> = self
            .reviews
            .values()
            .filter(|review| query.matches(review))
            .cloned()
            .collect();
        reviews.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| a.id.cmp(&b.id))
        });
        reviews
    }

    /// Creates a review and recomputes the reviewee's derived rating.
    ///
    /// Insertion and aggregation happen within this single call so the
    /// stored rating always reflects exactly the committed review set.
    /// This is the only business rule the store owns; it is intrinsic to
    /// what creating a review means, not a request-layer policy.
    pub fn create_review(&mut self, new_review: NewReview) -> Review {
        let id: i64 = Self::next_id(&mut self.review_id_counter);
        let review = Review {
            id,
            job_id: new_review.job_id,
            from_user_id: new_review.from_user_id,
            to_user_id: new_review.to_user_id,
            rating: new_review.rating,
            comment: new_review.comment,
            created_at: OffsetDateTime::now_utc(),
        };
        self.reviews.insert(id, review.clone());
        self.recompute_rating(review.to_user_id);
        review
    }

    /// Returns all reviews addressed to the given user, newest first.
    #[must_use]
    pub fn user_reviews(&self, user_id: i64) -> Vec<Review> {
        self.reviews(&ReviewQuery {
            to_user_id: Some(user_id),
            ..ReviewQuery::default()
        })
    }

    /// Recomputes a user's rating as the rounded mean of all reviews
    /// addressed to them, and their review count as the count of those
    /// reviews.
    fn recompute_rating(&mut self, user_id: i64) {
        let (total, count) = self
            .reviews
            .values()
            .filter(|review| review.to_user_id == user_id)
            .fold((0_i64, 0_i64), |(total, count), review| {
                (total + i64::from(review.rating), count + 1)
            });

        let Some(user) = self.users.get_mut(&user_id) else {
            return;
        };

        if count == 0 {
            user.rating = None;
            user.review_count = 0;
        } else {
            // Round half up without going through floating point.
            let rounded: i64 = (2 * total + count) / (2 * count);
            user.rating = i32::try_from(rounded).ok();
            user.review_count = i32::try_from(count).unwrap_or(i32::MAX);
        }
    }
}

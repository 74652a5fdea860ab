// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for review creation and rating aggregation.

use super::helpers::create_test_user;
use crate::MemoryStore;
use worklink_domain::{NewReview, ReviewQuery, UserRole};

fn create_review(store: &mut MemoryStore, from: i64, to: i64, rating: i32) {
    store.create_review(NewReview {
        job_id: 1,
        from_user_id: from,
        to_user_id: to,
        rating,
        comment: None,
    });
}

#[test]
fn test_review_lookup_by_id() {
    let mut store = MemoryStore::new();
    let employer = store.create_user(create_test_user("boss", UserRole::Employer));
    let worker = store.create_user(create_test_user("alice", UserRole::Worker));

    create_review(&mut store, worker.id, employer.id, 5);

    let found = store.review(1).unwrap();
    assert_eq!(found.rating, 5);
    assert!(store.review(42).is_none());
}

#[test]
fn test_first_review_sets_rating_and_count() {
    let mut store = MemoryStore::new();
    let employer = store.create_user(create_test_user("boss", UserRole::Employer));
    let worker = store.create_user(create_test_user("alice", UserRole::Worker));

    create_review(&mut store, worker.id, employer.id, 5);

    let rated = store.user(employer.id).unwrap();
    assert_eq!(rated.rating, Some(5));
    assert_eq!(rated.review_count, 1);
}

#[test]
fn test_rating_is_rounded_mean() {
    let mut store = MemoryStore::new();
    let employer = store.create_user(create_test_user("boss", UserRole::Employer));
    let alice = store.create_user(create_test_user("alice", UserRole::Worker));
    let carol = store.create_user(create_test_user("carol", UserRole::Worker));

    // A 5 then a 3 averages to 4.0 exactly.
    create_review(&mut store, alice.id, employer.id, 5);
    create_review(&mut store, carol.id, employer.id, 3);

    let rated = store.user(employer.id).unwrap();
    assert_eq!(rated.rating, Some(4));
    assert_eq!(rated.review_count, 2);
}

#[test]
fn test_rating_rounds_half_up() {
    let mut store = MemoryStore::new();
    let employer = store.create_user(create_test_user("boss", UserRole::Employer));
    let alice = store.create_user(create_test_user("alice", UserRole::Worker));
    let carol = store.create_user(create_test_user("carol", UserRole::Worker));

    // 4 and 5 average to 4.5, which rounds up to 5.
    create_review(&mut store, alice.id, employer.id, 4);
    create_review(&mut store, carol.id, employer.id, 5);

    assert_eq!(store.user(employer.id).unwrap().rating, Some(5));
}

#[test]
fn test_reviews_of_other_users_do_not_affect_rating() {
    let mut store = MemoryStore::new();
    let employer = store.create_user(create_test_user("boss", UserRole::Employer));
    let alice = store.create_user(create_test_user("alice", UserRole::Worker));
    let carol = store.create_user(create_test_user("carol", UserRole::Worker));

    create_review(&mut store, employer.id, alice.id, 5);
    create_review(&mut store, employer.id, carol.id, 1);

    assert_eq!(store.user(alice.id).unwrap().rating, Some(5));
    assert_eq!(store.user(carol.id).unwrap().rating, Some(1));
    assert_eq!(store.user(employer.id).unwrap().rating, None);
}

#[test]
fn test_review_query_matches_triple() {
    let mut store = MemoryStore::new();
    let employer = store.create_user(create_test_user("boss", UserRole::Employer));
    let worker = store.create_user(create_test_user("alice", UserRole::Worker));

    create_review(&mut store, worker.id, employer.id, 5);

    let matching = store.reviews(&ReviewQuery {
        job_id: Some(1),
        from_user_id: Some(worker.id),
        to_user_id: Some(employer.id),
    });
    assert_eq!(matching.len(), 1);

    let different_job = store.reviews(&ReviewQuery {
        job_id: Some(2),
        from_user_id: Some(worker.id),
        to_user_id: Some(employer.id),
    });
    assert!(different_job.is_empty());
}

#[test]
fn test_user_reviews_lists_only_addressed_reviews() {
    let mut store = MemoryStore::new();
    let employer = store.create_user(create_test_user("boss", UserRole::Employer));
    let worker = store.create_user(create_test_user("alice", UserRole::Worker));

    create_review(&mut store, worker.id, employer.id, 5);
    create_review(&mut store, employer.id, worker.id, 4);

    let reviews = store.user_reviews(employer.id);
    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0].from_user_id, worker.id);
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for state-machine enforcement at the API boundary.
//!
//! These tests verify that jobs only move forward through their lifecycle,
//! that applications can only be created against open jobs and only decided
//! once, and that reviews are gated on job completion.

use worklink_domain::JobStatus;
use worklink_store::MemoryStore;

use super::helpers::{
    accept_application, apply_to_job, complete_job, post_job, seed_employer, seed_worker,
};
use crate::error::ApiError;
use crate::handlers::{
    create_application, create_review, update_application_status, update_job,
};
use crate::request_response::{
    CreateApplicationRequest, CreateReviewRequest, UpdateApplicationStatusRequest,
    UpdateJobRequest,
};

fn status_update(status: &str) -> UpdateJobRequest {
    UpdateJobRequest {
        status: Some(status.to_string()),
        ..UpdateJobRequest::default()
    }
}

#[test]
fn test_created_job_starts_open_regardless_of_caller_intent() {
    let mut store = MemoryStore::new();
    let employer = seed_employer(&mut store, "boss");

    // The create request has no status field to smuggle one in through.
    let job = post_job(&mut store, &employer);
    assert_eq!(job.status, "open");
}

#[test]
fn test_job_cannot_move_backward() {
    let mut store = MemoryStore::new();
    let employer = seed_employer(&mut store, "boss");
    let worker = seed_worker(&mut store, "alice");
    let job = post_job(&mut store, &employer);
    let application = apply_to_job(&mut store, &worker, job.id);
    accept_application(&mut store, &employer, application.id);

    let result = update_job(&mut store, &employer, job.id, status_update("open"));

    assert!(matches!(result, Err(ApiError::InvalidState { .. })));
    assert_eq!(store.job(job.id).unwrap().status, JobStatus::InProgress);
}

#[test]
fn test_job_rejects_unrecognized_status() {
    let mut store = MemoryStore::new();
    let employer = seed_employer(&mut store, "boss");
    let job = post_job(&mut store, &employer);

    let result = update_job(&mut store, &employer, job.id, status_update("cancelled"));

    assert!(matches!(
        result,
        Err(ApiError::ValidationFailed { ref field, .. }) if field == "status"
    ));
    assert_eq!(store.job(job.id).unwrap().status, JobStatus::Open);
}

#[test]
fn test_completed_job_is_terminal() {
    let mut store = MemoryStore::new();
    let employer = seed_employer(&mut store, "boss");
    let job = post_job(&mut store, &employer);
    complete_job(&mut store, &employer, job.id);

    let result = update_job(&mut store, &employer, job.id, status_update("in_progress"));

    assert!(matches!(result, Err(ApiError::InvalidState { .. })));
}

#[test]
fn test_first_acceptance_advances_job_exactly_once() {
    let mut store = MemoryStore::new();
    let employer = seed_employer(&mut store, "boss");
    let alice = seed_worker(&mut store, "alice");
    let carol = seed_worker(&mut store, "carol");
    let job = post_job(&mut store, &employer);

    let first = apply_to_job(&mut store, &alice, job.id);
    let second = apply_to_job(&mut store, &carol, job.id);

    accept_application(&mut store, &employer, first.id);
    assert_eq!(store.job(job.id).unwrap().status, JobStatus::InProgress);

    // Accepting a second application does not re-trigger the transition.
    accept_application(&mut store, &employer, second.id);
    assert_eq!(store.job(job.id).unwrap().status, JobStatus::InProgress);
}

#[test]
fn test_rejection_does_not_advance_job() {
    let mut store = MemoryStore::new();
    let employer = seed_employer(&mut store, "boss");
    let worker = seed_worker(&mut store, "alice");
    let job = post_job(&mut store, &employer);
    let application = apply_to_job(&mut store, &worker, job.id);

    update_application_status(
        &mut store,
        &employer,
        application.id,
        &UpdateApplicationStatusRequest {
            status: String::from("rejected"),
        },
    )
    .unwrap();

    assert_eq!(store.job(job.id).unwrap().status, JobStatus::Open);
}

#[test]
fn test_decided_application_cannot_be_redecided() {
    let mut store = MemoryStore::new();
    let employer = seed_employer(&mut store, "boss");
    let worker = seed_worker(&mut store, "alice");
    let job = post_job(&mut store, &employer);
    let application = apply_to_job(&mut store, &worker, job.id);
    accept_application(&mut store, &employer, application.id);

    for status in ["rejected", "pending", "accepted"] {
        let result = update_application_status(
            &mut store,
            &employer,
            application.id,
            &UpdateApplicationStatusRequest {
                status: status.to_string(),
            },
        );
        assert!(matches!(result, Err(ApiError::InvalidState { .. })));
    }
}

#[test]
fn test_application_rejects_unrecognized_status() {
    let mut store = MemoryStore::new();
    let employer = seed_employer(&mut store, "boss");
    let worker = seed_worker(&mut store, "alice");
    let job = post_job(&mut store, &employer);
    let application = apply_to_job(&mut store, &worker, job.id);

    let result = update_application_status(
        &mut store,
        &employer,
        application.id,
        &UpdateApplicationStatusRequest {
            status: String::from("maybe"),
        },
    );

    assert!(matches!(
        result,
        Err(ApiError::ValidationFailed { ref field, .. }) if field == "status"
    ));
}

#[test]
fn test_cannot_apply_to_job_in_progress() {
    let mut store = MemoryStore::new();
    let employer = seed_employer(&mut store, "boss");
    let alice = seed_worker(&mut store, "alice");
    let carol = seed_worker(&mut store, "carol");
    let job = post_job(&mut store, &employer);
    let application = apply_to_job(&mut store, &alice, job.id);
    accept_application(&mut store, &employer, application.id);

    let result = create_application(
        &mut store,
        &carol,
        CreateApplicationRequest {
            job_id: job.id,
            cover_letter: None,
        },
    );

    assert!(matches!(
        result,
        Err(ApiError::InvalidState { ref rule, .. }) if rule == "job_open"
    ));
}

#[test]
fn test_cannot_review_job_that_is_not_completed() {
    let mut store = MemoryStore::new();
    let employer = seed_employer(&mut store, "boss");
    let worker = seed_worker(&mut store, "alice");
    let job = post_job(&mut store, &employer);
    let application = apply_to_job(&mut store, &worker, job.id);
    accept_application(&mut store, &employer, application.id);

    let result = create_review(
        &mut store,
        &worker,
        CreateReviewRequest {
            job_id: job.id,
            to_user_id: employer.id,
            rating: 5,
            comment: None,
        },
    );

    assert!(matches!(
        result,
        Err(ApiError::InvalidState { ref rule, .. }) if rule == "job_completed"
    ));
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for the job and application registries.

use super::helpers::{create_test_application, create_test_job, create_test_user};
use crate::MemoryStore;
use worklink_domain::{
    ApplicationStatus, ApplicationUpdate, JobQuery, JobStatus, JobUpdate, NewJob, UserRole,
};

#[test]
fn test_created_job_starts_open() {
    let mut store = MemoryStore::new();
    let employer = store.create_user(create_test_user("boss", UserRole::Employer));

    let job = store.create_job(create_test_job(employer.id));

    assert_eq!(job.status, JobStatus::Open);
    assert_eq!(job.id, 1);
}

#[test]
fn test_job_query_filters_by_type_and_skills() {
    let mut store = MemoryStore::new();
    let employer = store.create_user(create_test_user("boss", UserRole::Employer));

    store.create_job(create_test_job(employer.id));
    store.create_job(NewJob {
        employer_id: employer.id,
        title: String::from("Paint fence"),
        description: String::from("Two coats"),
        location: String::from("Shelbyville"),
        job_type: String::from("contract"),
        service_type: String::from("painter"),
        rate: String::from("$30/hr"),
        skills: vec![String::from("painting")],
    });

    let electricians = store.jobs(&JobQuery {
        job_type: Some(String::from("one_time")),
        ..JobQuery::default()
    });
    assert_eq!(electricians.len(), 1);
    assert_eq!(electricians[0].title, "Rewire kitchen");

    let by_skill = store.jobs(&JobQuery {
        skills: Some(vec![String::from("painting"), String::from("tiling")]),
        ..JobQuery::default()
    });
    assert_eq!(by_skill.len(), 1);
    assert_eq!(by_skill[0].title, "Paint fence");
}

#[test]
fn test_job_listing_breaks_timestamp_ties_by_id() {
    let mut store = MemoryStore::new();
    let employer = store.create_user(create_test_user("boss", UserRole::Employer));

    // Created back to back; timestamps may coincide within a millisecond,
    // so the ordering contract falls back to insertion order.
    let first = store.create_job(create_test_job(employer.id));
    let second = store.create_job(create_test_job(employer.id));

    let jobs = store.jobs(&JobQuery::default());
    assert_eq!(jobs.len(), 2);
    if jobs[0].created_at == jobs[1].created_at {
        assert_eq!(jobs[0].id, first.id);
        assert_eq!(jobs[1].id, second.id);
    }
}

#[test]
fn test_update_job_merges_status() {
    let mut store = MemoryStore::new();
    let employer = store.create_user(create_test_user("boss", UserRole::Employer));
    let job = store.create_job(create_test_job(employer.id));

    let updated = store
        .update_job(
            job.id,
            JobUpdate {
                status: Some(JobStatus::Completed),
                ..JobUpdate::default()
            },
        )
        .unwrap();

    assert_eq!(updated.status, JobStatus::Completed);
    assert_eq!(updated.title, job.title);
}

#[test]
fn test_start_job_fires_exactly_once() {
    let mut store = MemoryStore::new();
    let employer = store.create_user(create_test_user("boss", UserRole::Employer));
    let job = store.create_job(create_test_job(employer.id));

    assert_eq!(store.start_job(job.id), Some(true));
    assert_eq!(store.job(job.id).unwrap().status, JobStatus::InProgress);

    assert_eq!(store.start_job(job.id), Some(false));
    assert_eq!(store.job(job.id).unwrap().status, JobStatus::InProgress);

    assert_eq!(store.start_job(999), None);
}

#[test]
fn test_created_application_starts_pending() {
    let mut store = MemoryStore::new();
    let employer = store.create_user(create_test_user("boss", UserRole::Employer));
    let worker = store.create_user(create_test_user("alice", UserRole::Worker));
    let job = store.create_job(create_test_job(employer.id));

    let application = store.create_application(create_test_application(job.id, worker.id));

    assert_eq!(application.status, ApplicationStatus::Pending);
}

#[test]
fn test_application_listings_by_job_and_worker() {
    let mut store = MemoryStore::new();
    let employer = store.create_user(create_test_user("boss", UserRole::Employer));
    let alice = store.create_user(create_test_user("alice", UserRole::Worker));
    let carol = store.create_user(create_test_user("carol", UserRole::Worker));
    let job = store.create_job(create_test_job(employer.id));
    let other_job = store.create_job(create_test_job(employer.id));

    store.create_application(create_test_application(job.id, alice.id));
    store.create_application(create_test_application(job.id, carol.id));
    store.create_application(create_test_application(other_job.id, alice.id));

    assert_eq!(store.job_applications(job.id).len(), 2);
    assert_eq!(store.worker_applications(alice.id).len(), 2);
    assert_eq!(store.worker_applications(carol.id).len(), 1);
}

#[test]
fn test_update_application_status() {
    let mut store = MemoryStore::new();
    let employer = store.create_user(create_test_user("boss", UserRole::Employer));
    let worker = store.create_user(create_test_user("alice", UserRole::Worker));
    let job = store.create_job(create_test_job(employer.id));
    let application = store.create_application(create_test_application(job.id, worker.id));

    let updated = store
        .update_application(
            application.id,
            ApplicationUpdate {
                status: Some(ApplicationStatus::Accepted),
            },
        )
        .unwrap();

    assert_eq!(updated.status, ApplicationStatus::Accepted);
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for typed query criteria predicates.

use time::OffsetDateTime;

use crate::{
    Application, ApplicationQuery, ApplicationStatus, Job, JobQuery, JobStatus, skills_overlap,
};

fn create_test_job() -> Job {
    Job {
        id: 1,
        employer_id: 10,
        title: String::from("Paint fence"),
        description: String::from("Two coats, weatherproof"),
        location: String::from("Springfield"),
        job_type: String::from("one_time"),
        service_type: String::from("painter"),
        rate: String::from("$30/hr"),
        skills: vec![String::from("painting"), String::from("prep")],
        status: JobStatus::Open,
        created_at: OffsetDateTime::UNIX_EPOCH,
    }
}

fn create_test_application() -> Application {
    Application {
        id: 1,
        job_id: 1,
        worker_id: 20,
        cover_letter: None,
        status: ApplicationStatus::Pending,
        created_at: OffsetDateTime::UNIX_EPOCH,
    }
}

#[test]
fn test_empty_query_matches_everything() {
    let job = create_test_job();
    assert!(JobQuery::default().matches(&job));

    let application = create_test_application();
    assert!(ApplicationQuery::default().matches(&application));
}

#[test]
fn test_job_query_exact_equality_on_scalars() {
    let job = create_test_job();

    let matching = JobQuery {
        job_type: Some(String::from("one_time")),
        location: Some(String::from("Springfield")),
        status: Some(JobStatus::Open),
        ..JobQuery::default()
    };
    assert!(matching.matches(&job));

    // Substrings are not matches; the store contract is exact equality.
    let substring = JobQuery {
        location: Some(String::from("Spring")),
        ..JobQuery::default()
    };
    assert!(!substring.matches(&job));
}

#[test]
fn test_job_query_skills_overlap() {
    let job = create_test_job();

    let one_shared = JobQuery {
        skills: Some(vec![String::from("painting"), String::from("roofing")]),
        ..JobQuery::default()
    };
    assert!(one_shared.matches(&job));

    let none_shared = JobQuery {
        skills: Some(vec![String::from("roofing")]),
        ..JobQuery::default()
    };
    assert!(!none_shared.matches(&job));

    let empty_criterion = JobQuery {
        skills: Some(Vec::new()),
        ..JobQuery::default()
    };
    assert!(!empty_criterion.matches(&job));
}

#[test]
fn test_job_query_all_criteria_must_hold() {
    let job = create_test_job();

    let query = JobQuery {
        job_type: Some(String::from("one_time")),
        location: Some(String::from("Shelbyville")),
        ..JobQuery::default()
    };
    assert!(!query.matches(&job));
}

#[test]
fn test_application_query_matches_pair() {
    let application = create_test_application();

    let query = ApplicationQuery {
        job_id: Some(1),
        worker_id: Some(20),
        status: None,
    };
    assert!(query.matches(&application));

    let wrong_worker = ApplicationQuery {
        job_id: Some(1),
        worker_id: Some(21),
        status: None,
    };
    assert!(!wrong_worker.matches(&application));
}

#[test]
fn test_skills_overlap_is_exact_comparison() {
    let entity = vec![String::from("Wiring")];
    let wanted = vec![String::from("wiring")];
    assert!(!skills_overlap(&entity, &wanted));
}

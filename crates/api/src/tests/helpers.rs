// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use worklink_domain::{NewUser, UserRole};
use worklink_store::MemoryStore;

use crate::auth::CurrentUser;
use crate::handlers::{create_application, create_job, update_application_status, update_job};
use crate::request_response::{
    ApplicationInfo, CreateApplicationRequest, CreateJobRequest, JobInfo,
    UpdateApplicationStatusRequest, UpdateJobRequest,
};

/// Seeds a user directly into the store, bypassing registration.
///
/// Registration (and its bcrypt hashing) has its own tests; everything else
/// only needs an identity to act as.
pub fn seed_user(store: &mut MemoryStore, username: &str, role: UserRole) -> CurrentUser {
    let user = store.create_user(NewUser {
        username: username.to_string(),
        password_hash: String::from("$2b$12$seeded-test-hash"),
        email: format!("{username}@example.com"),
        full_name: String::from("Test User"),
        role,
        location: Some(String::from("Springfield")),
        bio: None,
        phone: None,
        skills: vec![String::from("wiring")],
        avatar: None,
        title: None,
    });
    CurrentUser {
        id: user.id,
        role: user.role,
    }
}

pub fn seed_employer(store: &mut MemoryStore, username: &str) -> CurrentUser {
    seed_user(store, username, UserRole::Employer)
}

pub fn seed_worker(store: &mut MemoryStore, username: &str) -> CurrentUser {
    seed_user(store, username, UserRole::Worker)
}

pub fn create_valid_job_request() -> CreateJobRequest {
    CreateJobRequest {
        title: String::from("Rewire kitchen"),
        description: String::from("Replace aging wiring in a residential kitchen"),
        location: String::from("Springfield"),
        job_type: String::from("one_time"),
        service_type: String::from("electrician"),
        rate: String::from("$40/hr"),
        skills: vec![String::from("wiring")],
    }
}

pub fn post_job(store: &mut MemoryStore, employer: &CurrentUser) -> JobInfo {
    create_job(store, employer, create_valid_job_request()).expect("Failed to post job")
}

pub fn apply_to_job(
    store: &mut MemoryStore,
    worker: &CurrentUser,
    job_id: i64,
) -> ApplicationInfo {
    create_application(
        store,
        worker,
        CreateApplicationRequest {
            job_id,
            cover_letter: Some(String::from("I have ten years of experience.")),
        },
    )
    .expect("Failed to apply")
}

pub fn accept_application(
    store: &mut MemoryStore,
    employer: &CurrentUser,
    application_id: i64,
) -> ApplicationInfo {
    update_application_status(
        store,
        employer,
        application_id,
        &UpdateApplicationStatusRequest {
            status: String::from("accepted"),
        },
    )
    .expect("Failed to accept application")
}

pub fn complete_job(store: &mut MemoryStore, employer: &CurrentUser, job_id: i64) -> JobInfo {
    update_job(
        store,
        employer,
        job_id,
        UpdateJobRequest {
            status: Some(String::from("completed")),
            ..UpdateJobRequest::default()
        },
    )
    .expect("Failed to complete job")
}

/// Runs the full hiring flow: post, apply, accept, complete.
///
/// Returns the job id and the accepted application id.
pub fn run_hiring_flow(
    store: &mut MemoryStore,
    employer: &CurrentUser,
    worker: &CurrentUser,
) -> (i64, i64) {
    let job = post_job(store, employer);
    let application = apply_to_job(store, worker, job.id);
    accept_application(store, employer, application.id);
    complete_job(store, employer, job.id);
    (job.id, application.id)
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use worklink_domain::{NewApplication, NewJob, NewMessage, NewUser, UserRole};

pub fn create_test_user(username: &str, role: UserRole) -> NewUser {
    NewUser {
        username: username.to_string(),
        password_hash: String::from("$2b$12$test-hash"),
        email: format!("{username}@example.com"),
        full_name: String::from("Test User"),
        role,
        location: Some(String::from("Springfield")),
        bio: None,
        phone: None,
        skills: vec![String::from("wiring")],
        avatar: None,
        title: None,
    }
}

pub fn create_test_job(employer_id: i64) -> NewJob {
    NewJob {
        employer_id,
        title: String::from("Rewire kitchen"),
        description: String::from("Replace aging wiring in a residential kitchen"),
        location: String::from("Springfield"),
        job_type: String::from("one_time"),
        service_type: String::from("electrician"),
        rate: String::from("$40/hr"),
        skills: vec![String::from("wiring")],
    }
}

pub fn create_test_application(job_id: i64, worker_id: i64) -> NewApplication {
    NewApplication {
        job_id,
        worker_id,
        cover_letter: Some(String::from("I have ten years of experience.")),
    }
}

pub fn create_test_message(from_user_id: i64, to_user_id: i64, content: &str) -> NewMessage {
    NewMessage {
        from_user_id,
        to_user_id,
        content: content.to_string(),
    }
}

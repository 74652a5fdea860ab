// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary layer for the WorkLink marketplace.
//!
//! This crate is the domain rule layer: every operation authenticates and
//! authorizes the caller, validates the request shape, enforces the job and
//! application state machines, and only then touches the store. Domain
//! errors are translated into the stable [`ApiError`] taxonomy at this
//! boundary so callers can branch on distinct outcomes.
//!
//! Every user representation leaving this crate is a [`UserProfile`], which
//! carries no credential. The raw `User` (and its password hash) never
//! crosses this boundary.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

mod auth;
mod error;
mod handlers;
mod password_policy;
mod request_response;

#[cfg(test)]
mod tests;

pub use auth::{AuthorizationService, CurrentUser, authenticate_stub};
pub use error::{ApiError, AuthError, translate_domain_error};
pub use handlers::{
    conversation, conversations, create_application, create_job, create_message, create_review,
    employer_jobs, get_job, get_user, job_applications, list_jobs, list_workers, register_user,
    top_rated_workers, update_application_status, update_job, update_user, user_reviews,
    worker_applications,
};
pub use password_policy::{PasswordPolicy, PasswordPolicyError};
pub use request_response::{
    ApplicationInfo, ConversationInfo, CreateApplicationRequest, CreateJobRequest,
    CreateMessageRequest, CreateReviewRequest, JobApplicationInfo, JobInfo, ListJobsRequest,
    MessageInfo, RegisterUserRequest, ReviewInfo, UpdateApplicationStatusRequest,
    UpdateJobRequest, UpdateUserRequest, UserProfile, UserReviewInfo, WorkerApplicationInfo,
};

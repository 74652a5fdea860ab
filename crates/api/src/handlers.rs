// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for state-changing and read-only operations.
//!
//! Every handler follows the same shape: authorize the caller, validate the
//! request, check referenced entities and lifecycle legality, and only then
//! touch the store. The first violated precondition returns immediately, so
//! a failed request never leaves a partial mutation behind.

use std::str::FromStr;
use worklink_domain::{
    ApplicationQuery, ApplicationStatus, ApplicationUpdate, JobQuery, JobStatus, JobUpdate,
    NewApplication, NewJob, NewMessage, NewReview, NewUser, ReviewQuery, UserRole, UserUpdate,
    validate_rating, validate_required, validate_username,
};
use worklink_store::MemoryStore;

use crate::auth::{AuthorizationService, CurrentUser};
use crate::error::{ApiError, translate_domain_error};
use crate::password_policy::PasswordPolicy;
use crate::request_response::{
    ApplicationInfo, ConversationInfo, CreateApplicationRequest, CreateJobRequest,
    CreateMessageRequest, CreateReviewRequest, JobApplicationInfo, JobInfo, ListJobsRequest,
    MessageInfo, RegisterUserRequest, ReviewInfo, UpdateApplicationStatusRequest,
    UpdateJobRequest, UpdateUserRequest, UserProfile, UserReviewInfo, WorkerApplicationInfo,
};

fn user_not_found(user_id: i64) -> ApiError {
    ApiError::NotFound {
        resource: String::from("User"),
        message: format!("No user with id {user_id}"),
    }
}

fn job_not_found(job_id: i64) -> ApiError {
    ApiError::NotFound {
        resource: String::from("Job"),
        message: format!("No job with id {job_id}"),
    }
}

fn application_not_found(application_id: i64) -> ApiError {
    ApiError::NotFound {
        resource: String::from("Application"),
        message: format!("No application with id {application_id}"),
    }
}

/// Registers a new user.
///
/// This is the creation seam the external session provider calls; the
/// session itself is out of scope. The plaintext password is validated
/// against the policy, hashed with bcrypt, and discarded; only the hash is
/// stored.
///
/// # Errors
///
/// Returns an error if:
/// - Any field fails shape validation or the password fails policy
/// - The role string is not recognized
/// - The username is already taken
pub fn register_user(
    store: &mut MemoryStore,
    request: RegisterUserRequest,
) -> Result<UserProfile, ApiError> {
    validate_username(&request.username).map_err(translate_domain_error)?;
    validate_required("email", &request.email).map_err(translate_domain_error)?;
    validate_required("full_name", &request.full_name).map_err(translate_domain_error)?;

    let role: UserRole = UserRole::from_str(&request.role).map_err(translate_domain_error)?;

    PasswordPolicy::default().validate(
        &request.password,
        &request.confirm_password,
        &request.username,
    )?;

    if store.user_by_username(&request.username).is_some() {
        return Err(ApiError::DuplicateConflict {
            rule: String::from("unique_username"),
            message: format!("Username '{}' is already taken", request.username),
        });
    }

    let password_hash: String =
        bcrypt::hash(&request.password, bcrypt::DEFAULT_COST).map_err(|e| ApiError::Internal {
            message: format!("Failed to hash password: {e}"),
        })?;

    let user = store.create_user(NewUser {
        username: request.username,
        password_hash,
        email: request.email,
        full_name: request.full_name,
        role,
        location: request.location,
        bio: request.bio,
        phone: request.phone,
        skills: request.skills,
        avatar: request.avatar,
        title: request.title,
    });

    Ok(UserProfile::from(&user))
}

/// Returns a single user's public profile.
///
/// # Errors
///
/// Returns `NotFound` if no such user exists.
pub fn get_user(store: &MemoryStore, user_id: i64) -> Result<UserProfile, ApiError> {
    store
        .user(user_id)
        .map(|user| UserProfile::from(&user))
        .ok_or_else(|| user_not_found(user_id))
}

/// Updates the caller's own profile.
///
/// The credential, id, and role are not updatable; the request shape
/// carries no fields for them.
///
/// # Errors
///
/// Returns an error if:
/// - The caller is not the target user
/// - The target user does not exist
pub fn update_user(
    store: &mut MemoryStore,
    actor: &CurrentUser,
    user_id: i64,
    request: UpdateUserRequest,
) -> Result<UserProfile, ApiError> {
    AuthorizationService::authorize_update_user(actor, user_id)?;

    let updates = UserUpdate {
        email: request.email,
        full_name: request.full_name,
        location: request.location,
        bio: request.bio,
        phone: request.phone,
        skills: request.skills,
        avatar: request.avatar,
        title: request.title,
    };

    store
        .update_user(user_id, updates)
        .map(|user| UserProfile::from(&user))
        .ok_or_else(|| user_not_found(user_id))
}

/// Lists all workers.
#[must_use]
pub fn list_workers(store: &MemoryStore) -> Vec<UserProfile> {
    store.workers().iter().map(UserProfile::from).collect()
}

/// Lists the best-rated workers, best first.
///
/// Workers without a rating sort as rating 0.
#[must_use]
pub fn top_rated_workers(store: &MemoryStore, limit: usize) -> Vec<UserProfile> {
    store
        .top_rated_workers(limit)
        .iter()
        .map(UserProfile::from)
        .collect()
}

/// Lists jobs matching the given filters, newest first.
///
/// # Errors
///
/// Returns `ValidationFailed` if the status filter is not a recognized
/// value.
pub fn list_jobs(store: &MemoryStore, request: ListJobsRequest) -> Result<Vec<JobInfo>, ApiError> {
    let status: Option<JobStatus> = match request.status {
        Some(raw) => Some(JobStatus::from_str(&raw).map_err(translate_domain_error)?),
        None => None,
    };

    let query = JobQuery {
        employer_id: None,
        job_type: request.job_type,
        location: request.location,
        status,
        skills: request.skills,
    };

    Ok(store.jobs(&query).iter().map(JobInfo::from).collect())
}

/// Returns a single job.
///
/// # Errors
///
/// Returns `NotFound` if no such job exists.
pub fn get_job(store: &MemoryStore, job_id: i64) -> Result<JobInfo, ApiError> {
    store
        .job(job_id)
        .map(|job| JobInfo::from(&job))
        .ok_or_else(|| job_not_found(job_id))
}

/// Posts a new job owned by the caller.
///
/// The employer is always the authenticated caller, never whoever the
/// request body names, and the job starts `open` regardless of any status
/// in the wire payload.
///
/// # Errors
///
/// Returns an error if:
/// - The caller is not an employer
/// - Any required field is empty
pub fn create_job(
    store: &mut MemoryStore,
    actor: &CurrentUser,
    request: CreateJobRequest,
) -> Result<JobInfo, ApiError> {
    AuthorizationService::authorize_create_job(actor)?;

    validate_required("title", &request.title).map_err(translate_domain_error)?;
    validate_required("description", &request.description).map_err(translate_domain_error)?;
    validate_required("location", &request.location).map_err(translate_domain_error)?;
    validate_required("job_type", &request.job_type).map_err(translate_domain_error)?;
    validate_required("service_type", &request.service_type).map_err(translate_domain_error)?;
    validate_required("rate", &request.rate).map_err(translate_domain_error)?;

    let job = store.create_job(NewJob {
        employer_id: actor.id,
        title: request.title,
        description: request.description,
        location: request.location,
        job_type: request.job_type,
        service_type: request.service_type,
        rate: request.rate,
        skills: request.skills,
    });

    Ok(JobInfo::from(&job))
}

/// Updates a job owned by the caller.
///
/// A status change must name a recognized value and a legal forward
/// transition; the id, owning employer, and creation timestamp are not
/// updatable.
///
/// # Errors
///
/// Returns an error if:
/// - The job does not exist
/// - The caller is not the posting employer
/// - The status string is not recognized, or the transition is not forward
pub fn update_job(
    store: &mut MemoryStore,
    actor: &CurrentUser,
    job_id: i64,
    request: UpdateJobRequest,
) -> Result<JobInfo, ApiError> {
    let job = store.job(job_id).ok_or_else(|| job_not_found(job_id))?;

    AuthorizationService::authorize_update_job(actor, &job)?;

    let status: Option<JobStatus> = match request.status {
        Some(raw) => {
            let new_status = JobStatus::from_str(&raw).map_err(translate_domain_error)?;
            job.status
                .validate_transition(new_status)
                .map_err(translate_domain_error)?;
            Some(new_status)
        }
        None => None,
    };

    let updates = JobUpdate {
        title: request.title,
        description: request.description,
        location: request.location,
        job_type: request.job_type,
        service_type: request.service_type,
        rate: request.rate,
        skills: request.skills,
        status,
    };

    store
        .update_job(job_id, updates)
        .map(|job| JobInfo::from(&job))
        .ok_or_else(|| job_not_found(job_id))
}

/// Lists the caller's own posted jobs, newest first.
///
/// # Errors
///
/// Returns an error if the caller is not an employer.
pub fn employer_jobs(store: &MemoryStore, actor: &CurrentUser) -> Result<Vec<JobInfo>, ApiError> {
    AuthorizationService::authorize_list_employer_jobs(actor)?;

    Ok(store
        .employer_jobs(actor.id)
        .iter()
        .map(JobInfo::from)
        .collect())
}

/// Applies the caller to a job.
///
/// The worker is always the authenticated caller. The job must exist and
/// still be open, and the caller must not already have applied to it —
/// regardless of what became of the earlier application.
///
/// # Errors
///
/// Returns an error if:
/// - The caller is not a worker
/// - The job does not exist
/// - The job is no longer accepting applications
/// - The caller already applied to this job
pub fn create_application(
    store: &mut MemoryStore,
    actor: &CurrentUser,
    request: CreateApplicationRequest,
) -> Result<ApplicationInfo, ApiError> {
    AuthorizationService::authorize_create_application(actor)?;

    let job = store
        .job(request.job_id)
        .ok_or_else(|| job_not_found(request.job_id))?;

    if job.status != JobStatus::Open {
        return Err(ApiError::InvalidState {
            rule: String::from("job_open"),
            message: String::from("This job is not accepting applications"),
        });
    }

    let existing = store.applications(&ApplicationQuery {
        job_id: Some(request.job_id),
        worker_id: Some(actor.id),
        status: None,
    });
    if !existing.is_empty() {
        return Err(ApiError::DuplicateConflict {
            rule: String::from("single_application"),
            message: String::from("You have already applied for this job"),
        });
    }

    let application = store.create_application(NewApplication {
        job_id: request.job_id,
        worker_id: actor.id,
        cover_letter: request.cover_letter,
    });

    Ok(ApplicationInfo::from(&application))
}

/// Lists the caller's own applications, newest first, each joined with its
/// job.
///
/// # Errors
///
/// Returns an error if the caller is not a worker.
pub fn worker_applications(
    store: &MemoryStore,
    actor: &CurrentUser,
) -> Result<Vec<WorkerApplicationInfo>, ApiError> {
    AuthorizationService::authorize_list_worker_applications(actor)?;

    Ok(store
        .worker_applications(actor.id)
        .iter()
        .map(|application| WorkerApplicationInfo {
            application: ApplicationInfo::from(application),
            job: store.job(application.job_id).map(|job| JobInfo::from(&job)),
        })
        .collect())
}

/// Lists the applications submitted to a job the caller owns, each joined
/// with the applicant's profile.
///
/// # Errors
///
/// Returns an error if:
/// - The job does not exist
/// - The caller is not the posting employer
pub fn job_applications(
    store: &MemoryStore,
    actor: &CurrentUser,
    job_id: i64,
) -> Result<Vec<JobApplicationInfo>, ApiError> {
    let job = store.job(job_id).ok_or_else(|| job_not_found(job_id))?;

    AuthorizationService::authorize_view_job_applications(actor, &job)?;

    Ok(store
        .job_applications(job_id)
        .iter()
        .map(|application| JobApplicationInfo {
            application: ApplicationInfo::from(application),
            worker: store
                .user(application.worker_id)
                .map(|user| UserProfile::from(&user)),
        })
        .collect())
}

/// Accepts or rejects a pending application.
///
/// Only the employer owning the application's job may decide. The first
/// acceptance for an open job advances that job to `in_progress`; the
/// guarded transition fires at most once, so later acceptances leave the
/// job status untouched.
///
/// # Errors
///
/// Returns an error if:
/// - The application or its job does not exist
/// - The caller is not the posting employer
/// - The status string is not recognized
/// - The application has already been decided
pub fn update_application_status(
    store: &mut MemoryStore,
    actor: &CurrentUser,
    application_id: i64,
    request: &UpdateApplicationStatusRequest,
) -> Result<ApplicationInfo, ApiError> {
    let application = store
        .application(application_id)
        .ok_or_else(|| application_not_found(application_id))?;

    let job = store
        .job(application.job_id)
        .ok_or_else(|| job_not_found(application.job_id))?;

    AuthorizationService::authorize_decide_application(actor, &job)?;

    let new_status: ApplicationStatus =
        ApplicationStatus::from_str(&request.status).map_err(translate_domain_error)?;
    application
        .status
        .validate_transition(new_status)
        .map_err(translate_domain_error)?;

    let updated = store
        .update_application(
            application_id,
            ApplicationUpdate {
                status: Some(new_status),
            },
        )
        .ok_or_else(|| application_not_found(application_id))?;

    if new_status == ApplicationStatus::Accepted {
        // Fires only while the job is still open; later acceptances find it
        // already in progress.
        let _ = store.start_job(job.id);
    }

    Ok(ApplicationInfo::from(&updated))
}

/// Reviews the other party of a completed job.
///
/// The reviewer is always the authenticated caller. The job must be
/// completed, the caller must be one of its two parties (the posting
/// employer or the accepted worker), the target must be the other party,
/// and the caller must not have reviewed that party for this job before.
///
/// # Errors
///
/// Returns an error if any of the preconditions above fails, or the rating
/// is out of range.
pub fn create_review(
    store: &mut MemoryStore,
    actor: &CurrentUser,
    request: CreateReviewRequest,
) -> Result<ReviewInfo, ApiError> {
    validate_rating(request.rating).map_err(translate_domain_error)?;

    let job = store
        .job(request.job_id)
        .ok_or_else(|| job_not_found(request.job_id))?;

    if job.status != JobStatus::Completed {
        return Err(ApiError::InvalidState {
            rule: String::from("job_completed"),
            message: String::from("Can only review completed jobs"),
        });
    }

    let accepted_worker_id: Option<i64> = store
        .applications(&ApplicationQuery {
            job_id: Some(job.id),
            worker_id: None,
            status: Some(ApplicationStatus::Accepted),
        })
        .first()
        .map(|application| application.worker_id);

    AuthorizationService::authorize_create_review(actor, &job, accepted_worker_id)?;

    let expected_target: Option<i64> = if actor.id == job.employer_id {
        accepted_worker_id
    } else {
        Some(job.employer_id)
    };
    if expected_target != Some(request.to_user_id) {
        return Err(ApiError::ValidationFailed {
            field: String::from("to_user_id"),
            message: String::from("Review target must be the other party to this job"),
        });
    }

    let existing = store.reviews(&ReviewQuery {
        job_id: Some(request.job_id),
        from_user_id: Some(actor.id),
        to_user_id: Some(request.to_user_id),
    });
    if !existing.is_empty() {
        return Err(ApiError::DuplicateConflict {
            rule: String::from("single_review"),
            message: String::from("You have already reviewed this user for this job"),
        });
    }

    let review = store.create_review(NewReview {
        job_id: request.job_id,
        from_user_id: actor.id,
        to_user_id: request.to_user_id,
        rating: request.rating,
        comment: request.comment,
    });

    Ok(ReviewInfo::from(&review))
}

/// Lists the reviews addressed to a user, newest first, each joined with
/// the reviewer's profile.
///
/// # Errors
///
/// Returns `NotFound` if no such user exists.
pub fn user_reviews(store: &MemoryStore, user_id: i64) -> Result<Vec<UserReviewInfo>, ApiError> {
    if store.user(user_id).is_none() {
        return Err(user_not_found(user_id));
    }

    Ok(store
        .user_reviews(user_id)
        .iter()
        .map(|review| UserReviewInfo {
            review: ReviewInfo::from(review),
            reviewer: store
                .user(review.from_user_id)
                .map(|user| UserProfile::from(&user)),
        })
        .collect())
}

/// Sends a message from the caller to another user.
///
/// # Errors
///
/// Returns an error if:
/// - The content is empty
/// - The recipient does not exist
pub fn create_message(
    store: &mut MemoryStore,
    actor: &CurrentUser,
    request: CreateMessageRequest,
) -> Result<MessageInfo, ApiError> {
    validate_required("content", &request.content).map_err(translate_domain_error)?;

    if store.user(request.to_user_id).is_none() {
        return Err(user_not_found(request.to_user_id));
    }

    let message = store.create_message(NewMessage {
        from_user_id: actor.id,
        to_user_id: request.to_user_id,
        content: request.content,
    });

    Ok(MessageInfo::from(&message))
}

/// Lists the caller's conversations: one entry per counterparty, most
/// recently active first.
#[must_use]
pub fn conversations(store: &MemoryStore, actor: &CurrentUser) -> Vec<ConversationInfo> {
    store
        .user_conversations(actor.id)
        .iter()
        .map(|summary| ConversationInfo {
            other_user: UserProfile::from(&summary.other_user),
            last_message: MessageInfo::from(&summary.last_message),
        })
        .collect()
}

/// Returns the caller's conversation with another user, oldest first.
///
/// Retrieval marks the caller's previously-unread incoming messages as
/// read; the caller's own sent messages are never touched.
///
/// # Errors
///
/// Returns `NotFound` if the other user does not exist.
pub fn conversation(
    store: &mut MemoryStore,
    actor: &CurrentUser,
    other_user_id: i64,
) -> Result<Vec<MessageInfo>, ApiError> {
    if store.user(other_user_id).is_none() {
        return Err(user_not_found(other_user_id));
    }

    let messages = store.conversation(actor.id, other_user_id);
    for message in &messages {
        if message.to_user_id == actor.id && !message.read {
            let _ = store.mark_message_read(message.id);
        }
    }

    Ok(store
        .conversation(actor.id, other_user_id)
        .iter()
        .map(MessageInfo::from)
        .collect())
}

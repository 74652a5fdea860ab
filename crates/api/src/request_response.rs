// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Every user leaving the API is a [`UserProfile`]; the stored credential
//! has no corresponding field, so no serialized response can carry it.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use worklink_domain::{Application, Job, Message, Review, User, UserRole};

/// Formats a creation timestamp for API responses.
fn format_timestamp(timestamp: OffsetDateTime) -> String {
    timestamp
        .format(&Rfc3339)
        .unwrap_or_else(|_| timestamp.to_string())
}

/// The public representation of a user.
///
/// Mirrors every `User` field except the credential. This type is the only
/// user shape any response may embed, whether single, listed, or nested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// The user's id.
    pub id: i64,
    /// Login name.
    pub username: String,
    /// Contact email address.
    pub email: String,
    /// Display name.
    pub full_name: String,
    /// The user's role.
    pub role: UserRole,
    /// Optional home location.
    pub location: Option<String>,
    /// Optional free-text biography.
    pub bio: Option<String>,
    /// Optional phone number.
    pub phone: Option<String>,
    /// Skills offered or sought.
    pub skills: Vec<String>,
    /// Optional avatar URL.
    pub avatar: Option<String>,
    /// Derived average rating, absent until the first review arrives.
    pub rating: Option<i32>,
    /// Derived count of reviews addressed to this user.
    pub review_count: i32,
    /// Optional professional title.
    pub title: Option<String>,
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            full_name: user.full_name.clone(),
            role: user.role,
            location: user.location.clone(),
            bio: user.bio.clone(),
            phone: user.phone.clone(),
            skills: user.skills.clone(),
            avatar: user.avatar.clone(),
            rating: user.rating,
            review_count: user.review_count,
            title: user.title.clone(),
        }
    }
}

/// API request to register a new user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterUserRequest {
    /// Login name, unique across all users.
    pub username: String,
    /// The plaintext password. Hashed before storage, never stored as-is.
    pub password: String,
    /// Password confirmation; must match.
    pub confirm_password: String,
    /// Contact email address.
    pub email: String,
    /// Display name.
    pub full_name: String,
    /// The requested role ("worker" or "employer").
    pub role: String,
    /// Optional home location.
    #[serde(default)]
    pub location: Option<String>,
    /// Optional free-text biography.
    #[serde(default)]
    pub bio: Option<String>,
    /// Optional phone number.
    #[serde(default)]
    pub phone: Option<String>,
    /// Skills offered or sought.
    #[serde(default)]
    pub skills: Vec<String>,
    /// Optional avatar URL.
    #[serde(default)]
    pub avatar: Option<String>,
    /// Optional professional title.
    #[serde(default)]
    pub title: Option<String>,
}

/// API request to update the caller's own profile.
///
/// The credential, id, and role have no fields here: they cannot be changed
/// through a profile update, and anything extra in the wire payload is
/// ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    /// New email address.
    #[serde(default)]
    pub email: Option<String>,
    /// New display name.
    #[serde(default)]
    pub full_name: Option<String>,
    /// New home location.
    #[serde(default)]
    pub location: Option<String>,
    /// New biography.
    #[serde(default)]
    pub bio: Option<String>,
    /// New phone number.
    #[serde(default)]
    pub phone: Option<String>,
    /// Replacement skill list.
    #[serde(default)]
    pub skills: Option<Vec<String>>,
    /// New avatar URL.
    #[serde(default)]
    pub avatar: Option<String>,
    /// New professional title.
    #[serde(default)]
    pub title: Option<String>,
}

/// A job posting in API responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobInfo {
    /// The job's id.
    pub id: i64,
    /// The posting employer.
    pub employer_id: i64,
    /// Short title.
    pub title: String,
    /// Full description of the work.
    pub description: String,
    /// Where the work takes place.
    pub location: String,
    /// Employment kind.
    pub job_type: String,
    /// Trade or service category.
    pub service_type: String,
    /// Offered rate, free text.
    pub rate: String,
    /// Skills the employer is looking for.
    pub skills: Vec<String>,
    /// Current lifecycle state.
    pub status: String,
    /// Creation timestamp (RFC 3339).
    pub created_at: String,
}

impl From<&Job> for JobInfo {
    fn from(job: &Job) -> Self {
        Self {
            id: job.id,
            employer_id: job.employer_id,
            title: job.title.clone(),
            description: job.description.clone(),
            location: job.location.clone(),
            job_type: job.job_type.clone(),
            service_type: job.service_type.clone(),
            rate: job.rate.clone(),
            skills: job.skills.clone(),
            status: job.status.as_str().to_string(),
            created_at: format_timestamp(job.created_at),
        }
    }
}

/// API request to list jobs with optional filters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListJobsRequest {
    /// Match this employment kind exactly.
    #[serde(default)]
    pub job_type: Option<String>,
    /// Match this location exactly.
    #[serde(default)]
    pub location: Option<String>,
    /// Match this lifecycle state ("open", "in_progress", "completed").
    #[serde(default)]
    pub status: Option<String>,
    /// Match jobs sharing at least one of these skills.
    #[serde(default)]
    pub skills: Option<Vec<String>>,
}

/// API request to post a new job.
///
/// Carries no status and no employer: the job always starts `open` and is
/// owned by the authenticated caller, never by whoever the request body
/// names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateJobRequest {
    /// Short title.
    pub title: String,
    /// Full description of the work.
    pub description: String,
    /// Where the work takes place.
    pub location: String,
    /// Employment kind.
    pub job_type: String,
    /// Trade or service category.
    pub service_type: String,
    /// Offered rate, free text.
    pub rate: String,
    /// Skills the employer is looking for.
    #[serde(default)]
    pub skills: Vec<String>,
}

/// API request to update a job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateJobRequest {
    /// New title.
    #[serde(default)]
    pub title: Option<String>,
    /// New description.
    #[serde(default)]
    pub description: Option<String>,
    /// New location.
    #[serde(default)]
    pub location: Option<String>,
    /// New employment kind.
    #[serde(default)]
    pub job_type: Option<String>,
    /// New service category.
    #[serde(default)]
    pub service_type: Option<String>,
    /// New rate.
    #[serde(default)]
    pub rate: Option<String>,
    /// Replacement skill list.
    #[serde(default)]
    pub skills: Option<Vec<String>>,
    /// New lifecycle state; must be a recognized status and a legal forward
    /// transition.
    #[serde(default)]
    pub status: Option<String>,
}

/// An application in API responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationInfo {
    /// The application's id.
    pub id: i64,
    /// The job applied to.
    pub job_id: i64,
    /// The applying worker.
    pub worker_id: i64,
    /// Optional cover letter.
    pub cover_letter: Option<String>,
    /// Current lifecycle state.
    pub status: String,
    /// Creation timestamp (RFC 3339).
    pub created_at: String,
}

impl From<&Application> for ApplicationInfo {
    fn from(application: &Application) -> Self {
        Self {
            id: application.id,
            job_id: application.job_id,
            worker_id: application.worker_id,
            cover_letter: application.cover_letter.clone(),
            status: application.status.as_str().to_string(),
            created_at: format_timestamp(application.created_at),
        }
    }
}

/// An application joined with its job, for a worker's own listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerApplicationInfo {
    /// The application.
    #[serde(flatten)]
    pub application: ApplicationInfo,
    /// The job applied to, if it still resolves.
    pub job: Option<JobInfo>,
}

/// An application joined with the applicant's profile, for the employer's
/// per-job listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobApplicationInfo {
    /// The application.
    #[serde(flatten)]
    pub application: ApplicationInfo,
    /// The applying worker's profile, if it still resolves.
    pub worker: Option<UserProfile>,
}

/// API request to apply to a job.
///
/// Carries no worker: the application always belongs to the authenticated
/// caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateApplicationRequest {
    /// The job applied to.
    pub job_id: i64,
    /// Optional cover letter.
    #[serde(default)]
    pub cover_letter: Option<String>,
}

/// API request to accept or reject an application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateApplicationStatusRequest {
    /// The new status ("accepted" or "rejected").
    pub status: String,
}

/// A review in API responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewInfo {
    /// The review's id.
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
    /// Creation timestamp (RFC 3339).
    pub created_at: String,
}

impl From<&Review> for ReviewInfo {
    fn from(review: &Review) -> Self {
        Self {
            id: review.id,
            job_id: review.job_id,
            from_user_id: review.from_user_id,
            to_user_id: review.to_user_id,
            rating: review.rating,
            comment: review.comment.clone(),
            created_at: format_timestamp(review.created_at),
        }
    }
}

/// A review joined with the reviewer's profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserReviewInfo {
    /// The review.
    #[serde(flatten)]
    pub review: ReviewInfo,
    /// The reviewing party's profile, if it still resolves.
    pub reviewer: Option<UserProfile>,
}

/// API request to review the other party of a completed job.
///
/// The reviewer is always the authenticated caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateReviewRequest {
    /// The completed job being reviewed.
    pub job_id: i64,
    /// The reviewed party.
    pub to_user_id: i64,
    /// Star rating, 1 through 5.
    pub rating: i32,
    /// Optional free-text comment.
    #[serde(default)]
    pub comment: Option<String>,
}

/// A message in API responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageInfo {
    /// The message's id.
    pub id: i64,
    /// The sender.
    pub from_user_id: i64,
    /// The recipient.
    pub to_user_id: i64,
    /// Message body.
    pub content: String,
    /// Whether the recipient has seen this message.
    pub read: bool,
    /// Creation timestamp (RFC 3339).
    pub created_at: String,
}

impl From<&Message> for MessageInfo {
    fn from(message: &Message) -> Self {
        Self {
            id: message.id,
            from_user_id: message.from_user_id,
            to_user_id: message.to_user_id,
            content: message.content.clone(),
            read: message.read,
            created_at: format_timestamp(message.created_at),
        }
    }
}

/// API request to send a message.
///
/// The sender is always the authenticated caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateMessageRequest {
    /// The recipient.
    pub to_user_id: i64,
    /// Message body.
    pub content: String,
}

/// One entry in the caller's conversation list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationInfo {
    /// The other participant.
    pub other_user: UserProfile,
    /// The most recent message exchanged with them.
    pub last_message: MessageInfo,
}

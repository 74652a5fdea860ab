// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Typed query criteria for store lookups.
//!
//! Each entity that supports filtered listing has an explicit criteria
//! struct with a `matches` predicate. Absent criteria match everything;
//! present scalar criteria match by exact equality. The one special case is
//! `skills`: a skills criterion matches an entity that shares at least one
//! skill with the criterion list, not one whose list is equal.

use crate::application::{Application, ApplicationStatus};
use crate::job::{Job, JobStatus};
use crate::review::Review;

/// Returns true when the two skill lists share at least one entry.
///
/// Comparison is exact (case-sensitive); an empty criterion list matches
/// nothing.
#[must_use]
pub fn skills_overlap(entity_skills: &[String], wanted: &[String]) -> bool {
    entity_skills.iter().any(|skill| wanted.contains(skill))
}

/// Criteria for listing jobs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobQuery {
    /// Match jobs posted by this employer.
    pub employer_id: Option<i64>,
    /// Match this employment kind exactly.
    pub job_type: Option<String>,
    /// Match this location exactly.
    pub location: Option<String>,
    /// Match this lifecycle state.
    pub status: Option<JobStatus>,
    /// Match jobs sharing at least one of these skills.
    pub skills: Option<Vec<String>>,
}

impl JobQuery {
    /// Returns true when the job satisfies every provided criterion.
    #[must_use]
    pub fn matches(&self, job: &Job) -> bool {
        if self.employer_id.is_some_and(|id| id != job.employer_id) {
            return false;
        }
        if self
            .job_type
            .as_ref()
            .is_some_and(|job_type| *job_type != job.job_type)
        {
            return false;
        }
        if self
            .location
            .as_ref()
            .is_some_and(|location| *location != job.location)
        {
            return false;
        }
        if self.status.is_some_and(|status| status != job.status) {
            return false;
        }
        if self
            .skills
            .as_ref()
            .is_some_and(|wanted| !skills_overlap(&job.skills, wanted))
        {
            return false;
        }
        true
    }
}

/// Criteria for listing applications.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationQuery {
    /// Match applications for this job.
    pub job_id: Option<i64>,
    /// Match applications by this worker.
    pub worker_id: Option<i64>,
    /// Match this lifecycle state.
    pub status: Option<ApplicationStatus>,
}

impl ApplicationQuery {
    /// Returns true when the application satisfies every provided criterion.
    #[must_use]
    pub fn matches(&self, application: &Application) -> bool {
        if self.job_id.is_some_and(|id| id != application.job_id) {
            return false;
        }
        if self.worker_id.is_some_and(|id| id != application.worker_id) {
            return false;
        }
        if self
            .status
            .is_some_and(|status| status != application.status)
        {
            return false;
        }
        true
    }
}

/// Criteria for listing reviews.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewQuery {
    /// Match reviews of this job.
    pub job_id: Option<i64>,
    /// Match reviews written by this user.
    pub from_user_id: Option<i64>,
    /// Match reviews addressed to this user.
    pub to_user_id: Option<i64>,
}

impl ReviewQuery {
    /// Returns true when the review satisfies every provided criterion.
    #[must_use]
    pub fn matches(&self, review: &Review) -> bool {
        if self.job_id.is_some_and(|id| id != review.job_id) {
            return false;
        }
        if self.from_user_id.is_some_and(|id| id != review.from_user_id) {
            return false;
        }
        if self.to_user_id.is_some_and(|id| id != review.to_user_id) {
            return false;
        }
        true
    }
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Job postings and their lifecycle.
//!
//! A job moves forward only: `open` → `in_progress` → `completed`. The
//! `open` → `in_progress` step fires automatically when the first
//! application is accepted; `completed` is reached only through an explicit
//! employer update. There are no backward transitions.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::OffsetDateTime;

/// Lifecycle states of a job posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    /// Accepting applications.
    Open,
    /// A worker has been hired; no further applications.
    InProgress,
    /// Work finished; reviews may now be exchanged.
    Completed,
}

impl JobStatus {
    /// Returns the string representation of the status.
    ///
    /// This is used for API serialization.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
        }
    }

    /// Returns true if this status is terminal (cannot transition further).
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed)
    }

    /// Position of this status in the forward-only lifecycle.
    const fn rank(self) -> u8 {
        match self {
            Self::Open => 0,
            Self::InProgress => 1,
            Self::Completed => 2,
        }
    }

    /// Validates if a transition from this status to another is permitted.
    ///
    /// Transitions must move strictly forward through the lifecycle.
    /// Re-asserting the current status or moving backward is rejected.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStatusTransition` if the transition is
    /// not allowed.
    pub fn validate_transition(&self, new_status: Self) -> Result<(), DomainError> {
        if self.is_terminal() {
            return Err(DomainError::InvalidStatusTransition {
                from: self.as_str().to_string(),
                to: new_status.as_str().to_string(),
                reason: "cannot transition from terminal state".to_string(),
            });
        }

        if new_status.rank() <= self.rank() {
            return Err(DomainError::InvalidStatusTransition {
                from: self.as_str().to_string(),
                to: new_status.as_str().to_string(),
                reason: "job status only moves forward".to_string(),
            });
        }

        Ok(())
    }
}

impl FromStr for JobStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" => Ok(Self::Open),
            "in_progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            _ => Err(DomainError::InvalidJobStatus {
                status: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A job posting owned by an employer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    /// Canonical identifier assigned by the store.
    pub id: i64,
    /// The employer who posted this job. Immutable.
    pub employer_id: i64,
    /// Short title.
    pub title: String,
    /// Full description of the work.
    pub description: String,
    /// Where the work takes place.
    pub location: String,
    /// Employment kind (e.g. full-time, one-off).
    pub job_type: String,
    /// Trade or service category.
    pub service_type: String,
    /// Offered rate, free text.
    pub rate: String,
    /// Skills the employer is looking for.
    pub skills: Vec<String>,
    /// Current lifecycle state.
    pub status: JobStatus,
    /// Set at creation. Immutable.
    pub created_at: OffsetDateTime,
}

impl Job {
    /// Advances this job from `open` to `in_progress` if it is still open.
    ///
    /// This is the guarded transition fired by the first accepted
    /// application. Returns whether the transition actually fired, so the
    /// caller may invoke it idempotently: accepting further applications for
    /// a job already in progress leaves the status untouched.
    pub fn try_start(&mut self) -> bool {
        if self.status == JobStatus::Open {
            self.status = JobStatus::InProgress;
            true
        } else {
            false
        }
    }
}

/// Insert payload for a new job.
///
/// Carries no status: every job starts at `open` regardless of what the
/// caller sent over the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewJob {
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
}

/// Partial update payload for a job.
///
/// The id, owning employer, and creation timestamp are deliberately absent:
/// they cannot be changed after creation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobUpdate {
    /// New title.
    pub title: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New location.
    pub location: Option<String>,
    /// New employment kind.
    pub job_type: Option<String>,
    /// New service category.
    pub service_type: Option<String>,
    /// New rate.
    pub rate: Option<String>,
    /// Replacement skill list.
    pub skills: Option<Vec<String>>,
    /// New lifecycle state. Transition legality is enforced by the rule
    /// layer before this reaches the store.
    pub status: Option<JobStatus>,
}

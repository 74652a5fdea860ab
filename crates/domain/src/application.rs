// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Worker applications to jobs.
//!
//! An application starts `pending` and is resolved by the job's employer to
//! `accepted` or `rejected`, both terminal. At most one application may
//! exist per (job, worker) pair, and applications may only be created while
//! the job is still open.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::OffsetDateTime;

/// Lifecycle states of an application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    /// Awaiting the employer's decision.
    Pending,
    /// The worker was hired.
    Accepted,
    /// The worker was turned down.
    Rejected,
}

impl ApplicationStatus {
    /// Returns the string representation of the status.
    ///
    /// This is used for API serialization.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
        }
    }

    /// Returns true if this status is terminal (cannot transition further).
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Accepted | Self::Rejected)
    }

    /// Validates if a transition from this status to another is permitted.
    ///
    /// The only legal transitions are `pending` → `accepted` and
    /// `pending` → `rejected`.
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

        if new_status.is_terminal() {
            Ok(())
        } else {
            Err(DomainError::InvalidStatusTransition {
                from: self.as_str().to_string(),
                to: new_status.as_str().to_string(),
                reason: "transition not permitted by status lifecycle rules".to_string(),
            })
        }
    }
}

impl FromStr for ApplicationStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "accepted" => Ok(Self::Accepted),
            "rejected" => Ok(Self::Rejected),
            _ => Err(DomainError::InvalidApplicationStatus {
                status: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A worker's request to be hired for a specific job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Application {
    /// Canonical identifier assigned by the store.
    pub id: i64,
    /// The job applied to.
    pub job_id: i64,
    /// The applying worker.
    pub worker_id: i64,
    /// Optional cover letter.
    pub cover_letter: Option<String>,
    /// Current lifecycle state.
    pub status: ApplicationStatus,
    /// Set at creation. Immutable.
    pub created_at: OffsetDateTime,
}

/// Insert payload for a new application.
///
/// Carries no status: every application starts at `pending`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewApplication {
    /// The job applied to.
    pub job_id: i64,
    /// The applying worker.
    pub worker_id: i64,
    /// Optional cover letter.
    pub cover_letter: Option<String>,
}

/// Partial update payload for an application.
///
/// Status is the only mutable field of an application.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationUpdate {
    /// New lifecycle state. Transition legality is enforced by the rule
    /// layer before this reaches the store.
    pub status: Option<ApplicationStatus>,
}

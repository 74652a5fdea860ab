// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// User role string is not recognized.
    InvalidRole(String),
    /// Job status string is not recognized.
    InvalidJobStatus {
        /// The invalid status string.
        status: String,
    },
    /// Application status string is not recognized.
    InvalidApplicationStatus {
        /// The invalid status string.
        status: String,
    },
    /// A status transition is not permitted by the lifecycle rules.
    InvalidStatusTransition {
        /// The current status.
        from: String,
        /// The requested status.
        to: String,
        /// Why the transition is not permitted.
        reason: String,
    },
    /// Review rating is outside the permitted range.
    InvalidRating {
        /// The invalid rating value.
        rating: i32,
    },
    /// Username is empty or malformed.
    InvalidUsername(String),
    /// A required field is empty.
    MissingField {
        /// The name of the empty field.
        field: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRole(role) => write!(f, "Unknown user role: {role}"),
            Self::InvalidJobStatus { status } => write!(f, "Unknown job status: {status}"),
            Self::InvalidApplicationStatus { status } => {
                write!(f, "Unknown application status: {status}")
            }
            Self::InvalidStatusTransition { from, to, reason } => {
                write!(f, "Cannot transition from '{from}' to '{to}': {reason}")
            }
            Self::InvalidRating { rating } => {
                write!(f, "Invalid rating: {rating}. Must be between 1 and 5")
            }
            Self::InvalidUsername(msg) => write!(f, "Invalid username: {msg}"),
            Self::MissingField { field } => write!(f, "Field '{field}' cannot be empty"),
        }
    }
}

impl std::error::Error for DomainError {}

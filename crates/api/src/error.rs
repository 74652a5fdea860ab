// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use crate::password_policy::PasswordPolicyError;
use worklink_domain::DomainError;

/// Authentication and authorization errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// Authorization failed.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// Why the caller may not perform it.
        reason: String,
    },
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Unauthorized { action, reason } => {
                write!(f, "Unauthorized: '{action}': {reason}")
            }
        }
    }
}

impl std::error::Error for AuthError {}

/// API-level errors.
///
/// These are distinct from domain errors and represent the API contract.
/// Every variant maps to one stable, distinguishable outcome so a client
/// can branch on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The caller is not authenticated.
    NotAuthenticated {
        /// The reason authentication failed.
        reason: String,
    },
    /// The caller is authenticated but lacks permission.
    NotAuthorized {
        /// The action that was attempted.
        action: String,
        /// Why the caller may not perform it.
        reason: String,
    },
    /// A referenced entity does not exist.
    NotFound {
        /// The type of resource that was not found.
        resource: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// The operation is not legal in the entity's current lifecycle state.
    InvalidState {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// The operation would create a duplicate of a unique entity.
    DuplicateConflict {
        /// The uniqueness rule that was violated.
        rule: String,
        /// A human-readable description of the conflict.
        message: String,
    },
    /// The request shape or a field constraint is invalid.
    ValidationFailed {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// An unexpected internal failure.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotAuthenticated { reason } => {
                write!(f, "Not authenticated: {reason}")
            }
            Self::NotAuthorized { action, reason } => {
                write!(f, "Not authorized: '{action}': {reason}")
            }
            Self::NotFound { resource, message } => {
                write!(f, "{resource} not found: {message}")
            }
            Self::InvalidState { rule, message } => {
                write!(f, "Invalid state ({rule}): {message}")
            }
            Self::DuplicateConflict { rule, message } => {
                write!(f, "Conflict ({rule}): {message}")
            }
            Self::ValidationFailed { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::AuthenticationFailed { reason } => Self::NotAuthenticated { reason },
            AuthError::Unauthorized { action, reason } => Self::NotAuthorized { action, reason },
        }
    }
}

impl From<PasswordPolicyError> for ApiError {
    fn from(err: PasswordPolicyError) -> Self {
        Self::ValidationFailed {
            field: String::from("password"),
            message: err.to_string(),
        }
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked
/// directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidRole(role) => ApiError::ValidationFailed {
            field: String::from("role"),
            message: format!("Unknown user role: {role}"),
        },
        DomainError::InvalidJobStatus { status } => ApiError::ValidationFailed {
            field: String::from("status"),
            message: format!("Unknown job status: {status}"),
        },
        DomainError::InvalidApplicationStatus { status } => ApiError::ValidationFailed {
            field: String::from("status"),
            message: format!("Unknown application status: {status}"),
        },
        DomainError::InvalidStatusTransition { from, to, reason } => ApiError::InvalidState {
            rule: String::from("status_transition"),
            message: format!("Cannot transition from '{from}' to '{to}': {reason}"),
        },
        DomainError::InvalidRating { rating } => ApiError::ValidationFailed {
            field: String::from("rating"),
            message: format!("Invalid rating: {rating}. Must be between 1 and 5"),
        },
        DomainError::InvalidUsername(msg) => ApiError::ValidationFailed {
            field: String::from("username"),
            message: msg,
        },
        DomainError::MissingField { field } => ApiError::ValidationFailed {
            message: format!("Field '{field}' cannot be empty"),
            field,
        },
    }
}

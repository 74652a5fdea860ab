// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Authentication and authorization types and services.

use worklink_domain::{Job, UserRole};
use worklink_store::MemoryStore;

use crate::error::AuthError;

/// The authenticated caller of an operation.
///
/// This is the identity the external session provider yields: an id and the
/// role fixed at registration. Everything the rule layer needs for its
/// checks is here; handlers look the full user record up only when the
/// operation itself requires it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentUser {
    /// The caller's user id.
    pub id: i64,
    /// The caller's role.
    pub role: UserRole,
}

/// Stub authentication function.
///
/// This is a minimal placeholder for the external identity provider. It
/// does NOT implement real authentication: it resolves a caller-supplied
/// user id against the store and trusts it. In a real deployment this would
/// validate a session token against the session service.
///
/// # Errors
///
/// Returns an error if no user with the given id exists.
pub fn authenticate_stub(store: &MemoryStore, user_id: i64) -> Result<CurrentUser, AuthError> {
    store.user(user_id).map_or_else(
        || {
            Err(AuthError::AuthenticationFailed {
                reason: format!("No user with id {user_id}"),
            })
        },
        |user| {
            Ok(CurrentUser {
                id: user.id,
                role: user.role,
            })
        },
    )
}

/// Authorization service for enforcing role and ownership rules.
///
/// This service determines whether an authenticated caller has permission
/// to perform a specific action, based on their role and, where relevant,
/// on ownership of the target entity.
pub struct AuthorizationService;

impl AuthorizationService {
    /// Checks if a caller may update a user profile.
    ///
    /// Users may only update their own profile.
    ///
    /// # Errors
    ///
    /// Returns an error if the caller is not the target user.
    pub fn authorize_update_user(
        actor: &CurrentUser,
        target_user_id: i64,
    ) -> Result<(), AuthError> {
        if actor.id == target_user_id {
            Ok(())
        } else {
            Err(AuthError::Unauthorized {
                action: String::from("update_user"),
                reason: String::from("users may only update their own profile"),
            })
        }
    }

    /// Checks if a caller may post a job.
    ///
    /// Only employers may post jobs.
    ///
    /// # Errors
    ///
    /// Returns an error if the caller is not an employer.
    pub fn authorize_create_job(actor: &CurrentUser) -> Result<(), AuthError> {
        match actor.role {
            UserRole::Employer => Ok(()),
            UserRole::Worker => Err(AuthError::Unauthorized {
                action: String::from("create_job"),
                reason: String::from("only employers can post jobs"),
            }),
        }
    }

    /// Checks if a caller may update a job.
    ///
    /// Only the posting employer may update their job.
    ///
    /// # Errors
    ///
    /// Returns an error if the caller does not own the job.
    pub fn authorize_update_job(actor: &CurrentUser, job: &Job) -> Result<(), AuthError> {
        if actor.id == job.employer_id {
            Ok(())
        } else {
            Err(AuthError::Unauthorized {
                action: String::from("update_job"),
                reason: String::from("only the posting employer can update a job"),
            })
        }
    }

    /// Checks if a caller may list their own posted jobs.
    ///
    /// # Errors
    ///
    /// Returns an error if the caller is not an employer.
    pub fn authorize_list_employer_jobs(actor: &CurrentUser) -> Result<(), AuthError> {
        match actor.role {
            UserRole::Employer => Ok(()),
            UserRole::Worker => Err(AuthError::Unauthorized {
                action: String::from("list_employer_jobs"),
                reason: String::from("only employers have posted jobs"),
            }),
        }
    }

    /// Checks if a caller may apply to a job.
    ///
    /// Only workers may submit applications.
    ///
    /// # Errors
    ///
    /// Returns an error if the caller is not a worker.
    pub fn authorize_create_application(actor: &CurrentUser) -> Result<(), AuthError> {
        match actor.role {
            UserRole::Worker => Ok(()),
            UserRole::Employer => Err(AuthError::Unauthorized {
                action: String::from("create_application"),
                reason: String::from("only workers can submit applications"),
            }),
        }
    }

    /// Checks if a caller may list their own applications.
    ///
    /// # Errors
    ///
    /// Returns an error if the caller is not a worker.
    pub fn authorize_list_worker_applications(actor: &CurrentUser) -> Result<(), AuthError> {
        match actor.role {
            UserRole::Worker => Ok(()),
            UserRole::Employer => Err(AuthError::Unauthorized {
                action: String::from("list_worker_applications"),
                reason: String::from("only workers have applications"),
            }),
        }
    }

    /// Checks if a caller may view the applications submitted to a job.
    ///
    /// Only the posting employer may view them.
    ///
    /// # Errors
    ///
    /// Returns an error if the caller does not own the job.
    pub fn authorize_view_job_applications(
        actor: &CurrentUser,
        job: &Job,
    ) -> Result<(), AuthError> {
        if actor.id == job.employer_id {
            Ok(())
        } else {
            Err(AuthError::Unauthorized {
                action: String::from("view_job_applications"),
                reason: String::from("only the posting employer can view applications"),
            })
        }
    }

    /// Checks if a caller may decide on an application to a job.
    ///
    /// Only the employer owning the application's job may accept or reject
    /// it.
    ///
    /// # Errors
    ///
    /// Returns an error if the caller does not own the job.
    pub fn authorize_decide_application(actor: &CurrentUser, job: &Job) -> Result<(), AuthError> {
        if actor.id == job.employer_id {
            Ok(())
        } else {
            Err(AuthError::Unauthorized {
                action: String::from("decide_application"),
                reason: String::from("only the posting employer can decide on applications"),
            })
        }
    }

    /// Checks if a caller may review the parties of a job.
    ///
    /// Reviews are exchanged between the two parties of a job: the posting
    /// employer and the accepted worker. The caller must be one of them.
    ///
    /// # Errors
    ///
    /// Returns an error if the caller is neither party.
    pub fn authorize_create_review(
        actor: &CurrentUser,
        job: &Job,
        accepted_worker_id: Option<i64>,
    ) -> Result<(), AuthError> {
        if actor.id == job.employer_id || accepted_worker_id == Some(actor.id) {
            Ok(())
        } else {
            Err(AuthError::Unauthorized {
                action: String::from("create_review"),
                reason: String::from("only the parties to a job can review it"),
            })
        }
    }
}

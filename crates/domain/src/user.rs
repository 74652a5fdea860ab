// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The two marketplace roles.
///
/// A user's role is fixed at creation and determines which actions they may
/// perform: employers post jobs and decide on applications, workers apply to
/// jobs. Roles never change after registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// A worker: browses jobs, submits applications, gets hired.
    Worker,
    /// An employer: posts jobs, reviews applications, hires workers.
    Employer,
}

impl UserRole {
    /// Returns the string representation of this role.
    ///
    /// This is used for API serialization.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Worker => "worker",
            Self::Employer => "employer",
        }
    }
}

impl FromStr for UserRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "worker" => Ok(Self::Worker),
            "employer" => Ok(Self::Employer),
            _ => Err(DomainError::InvalidRole(s.to_string())),
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A registered marketplace user.
///
/// `rating` and `review_count` are derived values. They are recomputed by the
/// store as a side effect of review creation and are never set by callers.
/// `password_hash` is an opaque credential: it must never appear in any
/// serialized representation returned to callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Canonical identifier assigned by the store.
    pub id: i64,
    /// Login name, unique across all users.
    pub username: String,
    /// Opaque credential (bcrypt hash). Never serialized to callers.
    pub password_hash: String,
    /// Contact email address.
    pub email: String,
    /// Display name.
    pub full_name: String,
    /// The user's role, fixed at creation.
    pub role: UserRole,
    /// Optional home location.
    pub location: Option<String>,
    /// Optional free-text biography.
    pub bio: Option<String>,
    /// Optional phone number.
    pub phone: Option<String>,
    /// Skills offered (workers) or sought (employers).
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

/// Insert payload for a new user.
///
/// Carries no id and no derived fields; the store assigns those.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    /// Login name, unique across all users.
    pub username: String,
    /// Opaque credential (bcrypt hash).
    pub password_hash: String,
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
    /// Optional professional title.
    pub title: Option<String>,
}

/// Partial update payload for a user's own profile.
///
/// The credential, id, role, and derived rating fields are deliberately
/// absent: they cannot be changed through a profile update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserUpdate {
    /// New email address.
    pub email: Option<String>,
    /// New display name.
    pub full_name: Option<String>,
    /// New home location.
    pub location: Option<String>,
    /// New biography.
    pub bio: Option<String>,
    /// New phone number.
    pub phone: Option<String>,
    /// Replacement skill list.
    pub skills: Option<Vec<String>>,
    /// New avatar URL.
    pub avatar: Option<String>,
    /// New professional title.
    pub title: Option<String>,
}

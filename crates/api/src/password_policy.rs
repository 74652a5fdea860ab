// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Password policy validation.
//!
//! This module enforces password requirements at registration, before the
//! credential is hashed and stored.

use thiserror::Error;

/// Password policy errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PasswordPolicyError {
    /// Password is too short.
    #[error("Password must be at least {min_length} characters long")]
    TooShort { min_length: usize },

    /// Password matches the username.
    #[error("Password must not match the username")]
    MatchesUsername,

    /// Password and confirmation do not match.
    #[error("Password and confirmation do not match")]
    ConfirmationMismatch,
}

/// Password policy configuration.
pub struct PasswordPolicy {
    /// Minimum password length.
    pub min_length: usize,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self { min_length: 8 }
    }
}

impl PasswordPolicy {
    /// Validates a password against the policy.
    ///
    /// # Arguments
    ///
    /// * `password` - The password to validate
    /// * `confirmation` - The password confirmation
    /// * `username` - The login name (password must not match)
    ///
    /// # Errors
    ///
    /// Returns a `PasswordPolicyError` if the password does not meet policy
    /// requirements.
    pub fn validate(
        &self,
        password: &str,
        confirmation: &str,
        username: &str,
    ) -> Result<(), PasswordPolicyError> {
        // Check confirmation match
        if password != confirmation {
            return Err(PasswordPolicyError::ConfirmationMismatch);
        }

        // Check minimum length
        if password.len() < self.min_length {
            return Err(PasswordPolicyError::TooShort {
                min_length: self.min_length,
            });
        }

        // Check forbidden values (case-insensitive)
        if password.to_lowercase() == username.to_lowercase() {
            return Err(PasswordPolicyError::MatchesUsername);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_password_accepted() {
        let policy = PasswordPolicy::default();
        assert!(policy.validate("hunter2hunter2", "hunter2hunter2", "alice").is_ok());
    }

    #[test]
    fn test_short_password_rejected() {
        let policy = PasswordPolicy::default();
        let result = policy.validate("short", "short", "alice");
        assert_eq!(
            result,
            Err(PasswordPolicyError::TooShort { min_length: 8 })
        );
    }

    #[test]
    fn test_confirmation_mismatch_rejected() {
        let policy = PasswordPolicy::default();
        let result = policy.validate("hunter2hunter2", "hunter2hunter3", "alice");
        assert_eq!(result, Err(PasswordPolicyError::ConfirmationMismatch));
    }

    #[test]
    fn test_password_matching_username_rejected() {
        let policy = PasswordPolicy::default();
        let result = policy.validate("AliceSmith", "AliceSmith", "alicesmith");
        assert_eq!(result, Err(PasswordPolicyError::MatchesUsername));
    }
}

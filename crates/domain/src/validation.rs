// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;

/// Validates that a review rating is within the permitted range.
///
/// # Errors
///
/// Returns `DomainError::InvalidRating` if the rating is not between 1 and 5
/// inclusive.
pub fn validate_rating(rating: i32) -> Result<(), DomainError> {
    if (1..=5).contains(&rating) {
        Ok(())
    } else {
        Err(DomainError::InvalidRating { rating })
    }
}

/// Validates a login name.
///
/// Usernames must be non-empty and free of whitespace. Uniqueness is not
/// checked here (that requires store context).
///
/// # Errors
///
/// Returns `DomainError::InvalidUsername` if the username is malformed.
pub fn validate_username(username: &str) -> Result<(), DomainError> {
    if username.trim().is_empty() {
        return Err(DomainError::InvalidUsername(String::from(
            "Username cannot be empty",
        )));
    }
    if username.chars().any(char::is_whitespace) {
        return Err(DomainError::InvalidUsername(String::from(
            "Username cannot contain whitespace",
        )));
    }
    Ok(())
}

/// Validates that a required text field is non-empty after trimming.
///
/// # Errors
///
/// Returns `DomainError::MissingField` naming the offending field.
pub fn validate_required(field: &str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::MissingField {
            field: field.to_string(),
        });
    }
    Ok(())
}

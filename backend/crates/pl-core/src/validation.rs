//! Registration input checks.
//!
//! Email validation is intentionally structural: one `@`, a non-empty local
//! part, and a dotted domain made of letters, digits and hyphens. Deliverability
//! is not checked.

use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

const MAX_EMAIL_LENGTH: usize = 254;
const MAX_LOCAL_PART_LENGTH: usize = 64;

#[track_caller]
pub fn validate_email(email: &str) -> CoreErrorResult<()> {
    let invalid = |message: &str| CoreError::InvalidEmail {
        email: email.to_string(),
        message: message.to_string(),
        location: ErrorLocation::from(Location::caller()),
    };

    if email.is_empty() {
        return Err(invalid("email is required"));
    }
    if email.len() > MAX_EMAIL_LENGTH {
        return Err(invalid("email is too long"));
    }
    if email.chars().any(char::is_whitespace) {
        return Err(invalid("email cannot contain whitespace"));
    }

    let (local, domain) = email
        .split_once('@')
        .ok_or_else(|| invalid("email must contain '@'"))?;

    if local.is_empty() || local.len() > MAX_LOCAL_PART_LENGTH {
        return Err(invalid("local part must be 1-64 characters"));
    }
    if domain.contains('@') {
        return Err(invalid("email must contain a single '@'"));
    }
    if local.starts_with('.') || local.ends_with('.') || local.contains("..") {
        return Err(invalid("local part has misplaced dots"));
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return Err(invalid("domain must contain a dot"));
    }
    for label in &labels {
        if label.is_empty() {
            return Err(invalid("domain has an empty label"));
        }
        if label.starts_with('-') || label.ends_with('-') {
            return Err(invalid("domain label cannot start or end with '-'"));
        }
        if !label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return Err(invalid("domain contains invalid characters"));
        }
    }

    Ok(())
}

#[track_caller]
pub fn validate_nickname(nickname: &str) -> CoreErrorResult<()> {
    if nickname.trim().is_empty() {
        return Err(CoreError::MissingNickname {
            location: ErrorLocation::from(Location::caller()),
        });
    }
    Ok(())
}

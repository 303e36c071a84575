//! Input validation utilities

use crate::models::LoginCredentials;

/// Message shown when a login field is left blank
pub const MISSING_FIELDS: &str = "Please fill in all fields";

/// Check a login form before it is submitted
///
/// Only completeness is checked: the credential table decides whether the
/// pair is valid.
pub fn validate_login(credentials: &LoginCredentials) -> Result<(), String> {
    if credentials.email.trim().is_empty() || credentials.password.trim().is_empty() {
        return Err(MISSING_FIELDS.to_string());
    }

    Ok(())
}

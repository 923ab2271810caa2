//! Client-side validation for registration input.
//!
//! Each rule rejects with its own user-facing message before any network
//! call is made; the identity service re-checks everything server-side.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use crate::net::types::Role;

/// Email domain required for student registrations.
pub const STUDENT_EMAIL_DOMAIN: &str = "@apsit.edu.in";

const PASSWORD_SPECIALS: &[char] = &['@', '$', '!', '%', '*', '?', '&'];

/// Names carry no digits.
///
/// # Errors
///
/// Returns the user-facing reason when the rule is violated.
pub fn validate_name(name: &str) -> Result<(), String> {
    if name.chars().any(|c| c.is_ascii_digit()) {
        return Err("Name must not contain numbers.".to_owned());
    }
    Ok(())
}

/// Password complexity: length, case mix, digit, special character.
///
/// # Errors
///
/// Returns the first violated rule's user-facing reason.
pub fn validate_password(password: &str) -> Result<(), String> {
    if password.len() < 8 {
        return Err("Password must be at least 8 characters long.".to_owned());
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Err("Password must contain a lowercase letter.".to_owned());
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err("Password must contain an uppercase letter.".to_owned());
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err("Password must contain a number.".to_owned());
    }
    if !password.chars().any(|c| PASSWORD_SPECIALS.contains(&c)) {
        return Err("Password must contain a special character (@$!%*?&).".to_owned());
    }
    Ok(())
}

/// Full pre-submit check for a registration form.
///
/// Order matches the form: name, password, then the role-specific rule
/// (students need an institute email, alumni need a verification document).
///
/// # Errors
///
/// Returns the first violated rule's user-facing reason.
pub fn validate_registration(
    role: Role,
    name: &str,
    email: &str,
    password: &str,
    document_url: &str,
) -> Result<(), String> {
    validate_name(name)?;
    validate_password(password)?;
    match role {
        Role::Student => {
            if !email.ends_with(STUDENT_EMAIL_DOMAIN) {
                return Err(format!(
                    "Student registration requires an email ending with {STUDENT_EMAIL_DOMAIN}"
                ));
            }
        }
        Role::Alumni => {
            if document_url.trim().is_empty() {
                return Err("Alumni registration requires a Document URL for verification.".to_owned());
            }
        }
        // The form never offers admin registration; admins are provisioned
        // server-side.
        Role::Admin => {}
    }
    Ok(())
}

use super::*;

// =============================================================
// Post-login landing
// =============================================================

#[test]
fn admins_land_on_their_dashboard() {
    assert_eq!(landing_after_login(Role::Admin), "/admin/dashboard");
}

#[test]
fn members_land_on_home() {
    assert_eq!(landing_after_login(Role::Student), "/home");
    assert_eq!(landing_after_login(Role::Alumni), "/home");
}

// =============================================================
// Failure copy keeps reasons distinguishable
// =============================================================

#[test]
fn inactive_account_gets_approval_copy() {
    let message = login_failure_message(&AuthError::AccountNotActive);
    assert!(message.contains("not active"));
    assert!(message.contains("admin approval"));
}

#[test]
fn invalid_credentials_get_retry_copy() {
    let message = login_failure_message(&AuthError::InvalidCredentials);
    assert_eq!(message, "Invalid email or password. Please try again.");
}

#[test]
fn inactive_and_invalid_copy_differ() {
    assert_ne!(
        login_failure_message(&AuthError::AccountNotActive),
        login_failure_message(&AuthError::InvalidCredentials)
    );
}

#[test]
fn transport_failures_are_not_blamed_on_credentials() {
    let message = login_failure_message(&AuthError::Transport("timeout".to_owned()));
    assert!(message.starts_with("Login failed:"));
    assert!(message.contains("timeout"));
}

// =============================================================
// Form role parsing
// =============================================================

#[test]
fn form_offers_student_and_alumni_only() {
    assert_eq!(role_from_form_value("ROLE_STUDENT"), Role::Student);
    assert_eq!(role_from_form_value("ROLE_ALUMNI"), Role::Alumni);
    // Anything unexpected falls back to the default selection.
    assert_eq!(role_from_form_value("ROLE_ADMIN"), Role::Student);
    assert_eq!(role_from_form_value(""), Role::Student);
}

use super::*;

// =============================================================
// Name rule
// =============================================================

#[test]
fn name_without_digits_passes() {
    assert!(validate_name("Asha Patel").is_ok());
}

#[test]
fn name_with_digits_is_rejected() {
    assert_eq!(
        validate_name("Asha2 Patel").unwrap_err(),
        "Name must not contain numbers."
    );
}

// =============================================================
// Password rules, one per violated constraint
// =============================================================

#[test]
fn short_password_is_rejected() {
    assert_eq!(
        validate_password("aB1!").unwrap_err(),
        "Password must be at least 8 characters long."
    );
}

#[test]
fn password_needs_a_lowercase_letter() {
    assert_eq!(
        validate_password("PASSWORD1!").unwrap_err(),
        "Password must contain a lowercase letter."
    );
}

#[test]
fn password_needs_an_uppercase_letter() {
    assert_eq!(
        validate_password("password1!").unwrap_err(),
        "Password must contain an uppercase letter."
    );
}

#[test]
fn password_needs_a_digit() {
    assert_eq!(
        validate_password("Password!").unwrap_err(),
        "Password must contain a number."
    );
}

#[test]
fn password_needs_a_special_character() {
    assert_eq!(
        validate_password("Password1").unwrap_err(),
        "Password must contain a special character (@$!%*?&)."
    );
}

#[test]
fn compliant_password_passes() {
    assert!(validate_password("Password1!").is_ok());
}

// =============================================================
// Role-specific registration rules
// =============================================================

#[test]
fn student_requires_institute_email() {
    let err = validate_registration(
        Role::Student,
        "Asha",
        "asha@gmail.com",
        "Password1!",
        "",
    )
    .unwrap_err();
    assert!(err.contains("@apsit.edu.in"));
}

#[test]
fn student_with_institute_email_passes() {
    assert!(
        validate_registration(
            Role::Student,
            "Asha",
            "asha@apsit.edu.in",
            "Password1!",
            "",
        )
        .is_ok()
    );
}

#[test]
fn alumni_requires_document_url() {
    let err = validate_registration(
        Role::Alumni,
        "Ravi",
        "ravi@gmail.com",
        "Password1!",
        "   ",
    )
    .unwrap_err();
    assert_eq!(
        err,
        "Alumni registration requires a Document URL for verification."
    );
}

#[test]
fn alumni_with_document_url_passes() {
    assert!(
        validate_registration(
            Role::Alumni,
            "Ravi",
            "ravi@gmail.com",
            "Password1!",
            "https://docs.example/marksheet.pdf",
        )
        .is_ok()
    );
}

#[test]
fn name_rule_is_checked_before_password() {
    let err = validate_registration(Role::Student, "R2D2", "x@apsit.edu.in", "short", "")
        .unwrap_err();
    assert_eq!(err, "Name must not contain numbers.");
}

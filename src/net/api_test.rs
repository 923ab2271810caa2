use super::*;

// =============================================================
// URL + header construction
// =============================================================

#[test]
fn api_url_prefixes_the_versioned_base() {
    assert_eq!(api_url("/jobs"), "/api/v1/jobs");
}

#[test]
fn authorization_header_stamps_present_credential() {
    assert_eq!(
        authorization_header(Some("tok-abc")).as_deref(),
        Some("Bearer tok-abc")
    );
}

#[test]
fn authorization_header_passes_through_when_logged_out() {
    assert!(authorization_header(None).is_none());
}

// =============================================================
// Status-error mapping
// =============================================================

#[test]
fn status_error_prefers_server_message_payload() {
    let err = status_error(403, r#"{"message":"Access denied"}"#);
    assert_eq!(
        err,
        ApiError::Status {
            status: 403,
            message: "Access denied".to_owned()
        }
    );
}

#[test]
fn status_error_falls_back_to_raw_body() {
    let err = status_error(502, "Bad Gateway\n");
    assert_eq!(
        err,
        ApiError::Status {
            status: 502,
            message: "Bad Gateway".to_owned()
        }
    );
}

#[test]
fn status_error_is_not_a_transport_error() {
    // Rejections must stay distinguishable from network failures.
    let rejected = status_error(401, r#"{"message":"expired"}"#);
    assert!(matches!(rejected, ApiError::Status { status: 401, .. }));
    assert!(!matches!(rejected, ApiError::Transport(_)));
}

#[test]
fn error_display_names_the_status() {
    let err = status_error(404, r#"{"message":"no such job"}"#);
    assert_eq!(err.to_string(), "server returned 404: no such job");
}

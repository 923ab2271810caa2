use super::*;

// =============================================================
// Role wire names
// =============================================================

#[test]
fn role_uses_service_wire_names() {
    assert_eq!(serde_json::to_string(&Role::Student).unwrap(), "\"ROLE_STUDENT\"");
    assert_eq!(serde_json::to_string(&Role::Alumni).unwrap(), "\"ROLE_ALUMNI\"");
    assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"ROLE_ADMIN\"");
}

#[test]
fn role_decodes_from_service_wire_names() {
    let role: Role = serde_json::from_str("\"ROLE_ALUMNI\"").unwrap();
    assert_eq!(role, Role::Alumni);
}

#[test]
fn role_rejects_unknown_names() {
    assert!(serde_json::from_str::<Role>("\"ROLE_SUPERUSER\"").is_err());
}

#[test]
fn role_labels_are_human_readable() {
    assert_eq!(Role::Student.label(), "Student");
    assert_eq!(Role::Admin.label(), "Admin");
}

// =============================================================
// Identity decoding
// =============================================================

#[test]
fn identity_decodes_with_minimal_fields() {
    let raw = r#"{"id":"42","name":"Asha","email":"asha@apsit.edu.in","role":"ROLE_STUDENT"}"#;
    let identity: Identity = serde_json::from_str(raw).unwrap();
    assert_eq!(identity.id, "42");
    assert_eq!(identity.role, Role::Student);
    assert!(identity.title.is_none());
    assert!(identity.skills.is_empty());
}

#[test]
fn identity_decodes_camel_case_profile_fields() {
    let raw = r#"{
        "id": "7",
        "name": "Ravi",
        "email": "ravi@example.com",
        "role": "ROLE_ALUMNI",
        "graduationYear": 2019,
        "profileImageUrl": "https://img.example/ravi.png",
        "skills": ["rust", "sql"]
    }"#;
    let identity: Identity = serde_json::from_str(raw).unwrap();
    assert_eq!(identity.graduation_year, Some(2019));
    assert_eq!(identity.profile_image_url.as_deref(), Some("https://img.example/ravi.png"));
    assert_eq!(identity.skills, vec!["rust", "sql"]);
}

// =============================================================
// Login / register payloads
// =============================================================

#[test]
fn login_response_decodes_jwt_token_and_user() {
    let raw = r#"{
        "jwtToken": "abc.def.ghi",
        "user": {"id": "1", "name": "Admin", "email": "admin@example.com", "role": "ROLE_ADMIN"}
    }"#;
    let resp: LoginResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(resp.jwt_token, "abc.def.ghi");
    assert_eq!(resp.user.role, Role::Admin);
}

#[test]
fn register_request_serializes_document_url_as_null_for_students() {
    let req = RegisterRequest {
        name: "Asha".to_owned(),
        email: "asha@apsit.edu.in".to_owned(),
        password: "Secret1!".to_owned(),
        document_url: None,
    };
    let value = serde_json::to_value(&req).unwrap();
    assert!(value["documentUrl"].is_null());
}

#[test]
fn register_request_serializes_document_url_for_alumni() {
    let req = RegisterRequest {
        name: "Ravi".to_owned(),
        email: "ravi@example.com".to_owned(),
        password: "Secret1!".to_owned(),
        document_url: Some("https://docs.example/marksheet.pdf".to_owned()),
    };
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(value["documentUrl"], "https://docs.example/marksheet.pdf");
}

// =============================================================
// Feature-screen DTOs
// =============================================================

#[test]
fn job_posting_maps_reserved_type_field() {
    let raw = r#"{
        "id": "j1",
        "title": "Platform Engineer",
        "company": "Initech",
        "description": "Build things.",
        "type": "FULL_TIME"
    }"#;
    let job: JobPosting = serde_json::from_str(raw).unwrap();
    assert_eq!(job.job_type.as_deref(), Some("FULL_TIME"));
    assert!(job.location.is_none());
}

#[test]
fn community_event_defaults_registration_flag() {
    let raw = r#"{"id":"e1","title":"Reunion","description":"Annual meet","date":"2024-12-01"}"#;
    let event: CommunityEvent = serde_json::from_str(raw).unwrap();
    assert!(!event.is_registered_by_current_user);
}

#[test]
fn admin_stats_decodes_counters() {
    let raw = r#"{
        "totalUsers": 120, "totalStudents": 80, "totalAlumni": 38,
        "totalJobs": 14, "totalEvents": 6, "pendingVerifications": 3
    }"#;
    let stats: AdminStats = serde_json::from_str(raw).unwrap();
    assert_eq!(stats.total_users, 120);
    assert_eq!(stats.pending_verifications, 3);
}

use super::*;
use crate::net::types::Role;

fn identity() -> Identity {
    Identity {
        id: "u1".to_owned(),
        name: "Asha".to_owned(),
        email: "asha@apsit.edu.in".to_owned(),
        role: Role::Student,
        title: None,
        company: None,
        branch: Some("IT".to_owned()),
        graduation_year: Some(2026),
        skills: vec!["rust".to_owned()],
        profile_image_url: None,
    }
}

// =============================================================
// Slot encode/decode round-trip
// =============================================================

#[test]
fn encode_then_decode_returns_pair_exactly() {
    let raw = encode_slot("tok-abc", &identity()).unwrap();
    let (credential, decoded) = decode_slot(&raw).unwrap();
    assert_eq!(credential, "tok-abc");
    assert_eq!(decoded, identity());
}

#[test]
fn decode_rejects_garbage() {
    assert!(decode_slot("not json at all").is_none());
}

#[test]
fn decode_rejects_record_missing_credential() {
    let raw = r#"{"identity":{"id":"1","name":"A","email":"a@x","role":"ROLE_ADMIN"}}"#;
    assert!(decode_slot(raw).is_none());
}

#[test]
fn decode_rejects_record_missing_identity() {
    assert!(decode_slot(r#"{"credential":"tok"}"#).is_none());
}

// =============================================================
// Non-browser behavior
// =============================================================

#[test]
fn load_is_empty_without_a_browser() {
    // Native builds have no localStorage; absence reads as logged out.
    assert!(load().is_none());
}

#[test]
fn clear_is_idempotent_without_a_browser() {
    clear();
    clear();
    assert!(load().is_none());
}

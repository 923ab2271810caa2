//! Shared wire DTOs for the identity service and membership API.
//!
//! DESIGN
//! ======
//! These types mirror the server's JSON payloads field-for-field so serde
//! decoding stays lossless. Profile-style fields the server may omit are
//! defaulted rather than required; a thin screen should never fail to render
//! because an optional column was null.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Membership role, as issued by the identity service.
///
/// Closed set; the server is authoritative. Wire names keep the service's
/// `ROLE_` prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "ROLE_STUDENT")]
    Student,
    #[serde(rename = "ROLE_ALUMNI")]
    Alumni,
    #[serde(rename = "ROLE_ADMIN")]
    Admin,
}

impl Role {
    /// Human-readable label for screens.
    pub fn label(self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::Alumni => "Alumni",
            Role::Admin => "Admin",
        }
    }
}

/// The authenticated member's profile record, as returned by the identity
/// service on login and persisted alongside the credential.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    /// Unique member identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Membership role governing route access.
    pub role: Role,
    /// Job title, if filled in.
    #[serde(default)]
    pub title: Option<String>,
    /// Current employer, if filled in.
    #[serde(default)]
    pub company: Option<String>,
    /// Academic branch, if filled in.
    #[serde(default)]
    pub branch: Option<String>,
    /// Graduation year, if filled in.
    #[serde(default)]
    pub graduation_year: Option<i32>,
    /// Self-reported skills.
    #[serde(default)]
    pub skills: Vec<String>,
    /// Avatar URL, if uploaded.
    #[serde(default)]
    pub profile_image_url: Option<String>,
}

/// Successful login payload: the bearer credential plus the member it
/// identifies.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// Opaque bearer token; never parsed client-side.
    pub jwt_token: String,
    /// The authenticated member.
    pub user: Identity,
}

/// Registration payload for `POST /api/auth/register`.
///
/// `document_url` accompanies alumni registrations only; students send null.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub document_url: Option<String>,
}

/// Error body the server attaches to non-2xx responses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiMessage {
    pub message: String,
}

/// A member as listed in the network directory.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryMember {
    pub id: String,
    pub name: String,
    pub role: Role,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub branch: Option<String>,
    #[serde(default)]
    pub profile_image_url: Option<String>,
    /// Connection state relative to the viewer (e.g. `"CONNECTED"`,
    /// `"PENDING"`); absent when no request exists either way.
    #[serde(default)]
    pub connection_status: Option<String>,
}

/// The viewer's own editable profile from `/profile/me`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub role: Role,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub branch: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub about: Option<String>,
    #[serde(default)]
    pub education: Option<String>,
    #[serde(default)]
    pub experience: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub profile_image_url: Option<String>,
    #[serde(default)]
    pub connection_count: i64,
}

/// A job posting on the job board.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    pub id: String,
    pub title: String,
    pub company: String,
    pub description: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default, rename = "type")]
    pub job_type: Option<String>,
    #[serde(default)]
    pub salary: Option<String>,
    #[serde(default)]
    pub requirements: Option<String>,
    #[serde(default)]
    pub application_deadline: Option<String>,
    #[serde(default)]
    pub posted_by_name: Option<String>,
}

/// A community event.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityEvent {
    pub id: String,
    pub title: String,
    pub description: String,
    pub date: String,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default, rename = "type")]
    pub event_type: Option<String>,
    #[serde(default)]
    pub max_attendees: Option<i32>,
    #[serde(default)]
    pub organizer_name: Option<String>,
    #[serde(default)]
    pub is_registered_by_current_user: bool,
}

/// Aggregate counters for the admin dashboard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    pub total_users: i64,
    pub total_students: i64,
    pub total_alumni: i64,
    pub total_jobs: i64,
    pub total_events: i64,
    pub pending_verifications: i64,
}

/// A pending alumni-verification request in the admin review queue.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationRequest {
    pub id: String,
    pub user_id: String,
    pub user_name: String,
    pub user_email: String,
    pub document_url: String,
    #[serde(default)]
    pub submitted_at: Option<String>,
}

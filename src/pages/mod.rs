//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Pages own route-scoped orchestration only. They learn who is logged in
//! through `use_session`, send traffic through `net::api`, and never touch
//! credentials directly.

pub mod admin;
pub mod connections;
pub mod create_event;
pub mod events;
pub mod home;
pub mod jobs;
pub mod login;
pub mod network;
pub mod post_job;
pub mod profile;

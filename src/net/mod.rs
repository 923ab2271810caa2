//! Networking modules for the identity service and the membership API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `identity` talks to the credential-issuing endpoints, `api` carries all
//! credential-protected traffic with bearer stamping, and `types` defines
//! the shared wire schema.

pub mod api;
pub mod identity;
pub mod types;

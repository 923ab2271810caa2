//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `guards` wraps route payloads in authentication/role checks; `sidebar`
//! renders the role-conditional navigation shell. Both are read-only
//! observers of the session context.

pub mod guards;
pub mod sidebar;

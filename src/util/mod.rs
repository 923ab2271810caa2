//! Utility helpers shared across UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (durable storage)
//! and pure input rules from page and component logic.

pub mod credential_store;
pub mod validate;

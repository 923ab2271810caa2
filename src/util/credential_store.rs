//! Durable credential persistence in browser `localStorage`.
//!
//! SYSTEM CONTEXT
//! ==============
//! One well-known slot holds the current credential + identity pair so a
//! session survives page reloads. The session state machine is the only
//! writer; the request authenticator reads the slot at call time. Absence of
//! the slot is the normal logged-out state, never an error.

#[cfg(test)]
#[path = "credential_store_test.rs"]
mod credential_store_test;

#[cfg(any(test, feature = "hydrate"))]
use serde::{Deserialize, Serialize};

use crate::net::types::Identity;

/// localStorage key for the single session slot.
pub const SESSION_SLOT: &str = "alumnet.session";

/// On-disk layout of the slot: the opaque credential plus the identity it
/// belongs to, stored together so neither can go stale without the other.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
struct StoredSession {
    credential: String,
    identity: Identity,
}

#[cfg(any(test, feature = "hydrate"))]
fn encode_slot(credential: &str, identity: &Identity) -> Option<String> {
    let record = StoredSession {
        credential: credential.to_owned(),
        identity: identity.clone(),
    };
    serde_json::to_string(&record).ok()
}

#[cfg(any(test, feature = "hydrate"))]
fn decode_slot(raw: &str) -> Option<(String, Identity)> {
    let record: StoredSession = serde_json::from_str(raw).ok()?;
    Some((record.credential, record.identity))
}

/// Overwrite the slot with a new credential + identity pair.
pub fn save(credential: &str, identity: &Identity) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = local_storage() else {
            log::warn!("localStorage unavailable; session will not survive reload");
            return;
        };
        let Some(raw) = encode_slot(credential, identity) else {
            return;
        };
        let _ = storage.set_item(SESSION_SLOT, &raw);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (credential, identity);
    }
}

/// Read the slot. Returns `None` when empty, unavailable, or undecodable;
/// never fails.
pub fn load() -> Option<(String, Identity)> {
    #[cfg(feature = "hydrate")]
    {
        let raw = local_storage()?.get_item(SESSION_SLOT).ok().flatten()?;
        let decoded = decode_slot(&raw);
        if decoded.is_none() {
            log::warn!("discarding undecodable session slot");
        }
        decoded
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Remove the slot. Idempotent.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(SESSION_SLOT);
        }
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

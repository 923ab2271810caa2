//! Shared client-side state.
//!
//! DESIGN
//! ======
//! One module: the session. Everything else a screen shows is fetched on
//! mount and owned by that screen; only "who is logged in" is process-wide.

pub mod session;

//! Domain services used by startup and HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own persistence concerns so route handlers and startup
//! stay focused on wiring.

pub mod password;
pub mod users;

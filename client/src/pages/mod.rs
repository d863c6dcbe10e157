//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page exposes a `render` entry that the view loader hands to the
//! router, and delegates layout to the shared `components`.

pub mod article;
pub mod dashboard;
pub mod login;

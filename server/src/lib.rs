//! # admin-server
//!
//! Data-access layer and host process for the admin console.
//!
//! - [`services::users::UserStore`] is the repository for the `User`
//!   collection declared in the `schema` crate.
//! - [`db`] creates the pool, applies migrations and provisions the declared
//!   indexes.
//! - [`routes::app`] serves the client bundle with an `index.html` fallback.
//!
//! The `admin-server` binary wires these together from [`config::Config`].

pub mod config;
pub mod db;
pub mod routes;
pub mod services;
pub mod state;

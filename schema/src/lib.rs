//! Persisted record shapes shared by the server and its tooling.
//!
//! This crate owns the `User` collection: the field shape, the index
//! declaration the store provisions from, shape normalization for incoming
//! documents, and a constraint layer kept separate from the shape so the
//! data-access layer decides which integrity rules apply.

pub mod constraints;
pub mod declaration;
pub mod user;

pub use constraints::{Constraint, ConstraintSet, ConstraintViolation, NonBlank, Required, RolesWithin};
pub use declaration::{CollectionSchema, FieldKind, FieldSpec, IndexSpec, SortOrder, USER_SCHEMA};
pub use user::{Field, ShapeError, UserRecord};

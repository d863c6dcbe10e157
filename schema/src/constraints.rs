//! Integrity rules applied on top of the record shape.
//!
//! The shape itself enforces nothing beyond field types. A data-access layer
//! builds a [`ConstraintSet`] for the rules it wants (required fields, a role
//! catalog) and runs it before every write.

#[cfg(test)]
#[path = "constraints_test.rs"]
mod constraints_test;

use std::collections::BTreeSet;

use crate::user::{Field, UserRecord};

/// A single failed rule.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConstraintViolation {
    #[error("`{0}` is required")]
    Missing(Field),
    #[error("`{0}` must not be blank")]
    Blank(Field),
    #[error("role `{0}` is not in the role catalog")]
    UnknownRole(String),
}

/// A rule checked against a normalized record.
pub trait Constraint: Send + Sync {
    /// # Errors
    ///
    /// Returns the violation when `record` breaks the rule.
    fn check(&self, record: &UserRecord) -> Result<(), ConstraintViolation>;
}

/// The field must carry a value (for `roles`: at least one role).
#[derive(Clone, Copy, Debug)]
pub struct Required(pub Field);

impl Constraint for Required {
    fn check(&self, record: &UserRecord) -> Result<(), ConstraintViolation> {
        if record.is_present(self.0) { Ok(()) } else { Err(ConstraintViolation::Missing(self.0)) }
    }
}

/// A present text field must contain something other than whitespace.
/// Absent fields pass; pair with [`Required`] to demand presence.
#[derive(Clone, Copy, Debug)]
pub struct NonBlank(pub Field);

impl Constraint for NonBlank {
    fn check(&self, record: &UserRecord) -> Result<(), ConstraintViolation> {
        match record.text(self.0) {
            Some(text) if text.trim().is_empty() => Err(ConstraintViolation::Blank(self.0)),
            _ => Ok(()),
        }
    }
}

/// Every role must come from a fixed catalog.
#[derive(Clone, Debug)]
pub struct RolesWithin {
    catalog: BTreeSet<String>,
}

impl RolesWithin {
    pub fn new<I, S>(catalog: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { catalog: catalog.into_iter().map(Into::into).collect() }
    }
}

impl Constraint for RolesWithin {
    fn check(&self, record: &UserRecord) -> Result<(), ConstraintViolation> {
        match record.roles.iter().find(|role| !self.catalog.contains(*role)) {
            Some(role) => Err(ConstraintViolation::UnknownRole(role.clone())),
            None => Ok(()),
        }
    }
}

/// Ordered collection of rules. Empty by default.
#[derive(Default)]
pub struct ConstraintSet {
    rules: Vec<Box<dyn Constraint>>,
}

impl ConstraintSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, rule: impl Constraint + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Run every rule and collect all violations in rule order.
    ///
    /// # Errors
    ///
    /// Returns the non-empty list of violations.
    pub fn check(&self, record: &UserRecord) -> Result<(), Vec<ConstraintViolation>> {
        let violations: Vec<ConstraintViolation> =
            self.rules.iter().filter_map(|rule| rule.check(record).err()).collect();
        if violations.is_empty() { Ok(()) } else { Err(violations) }
    }
}

impl std::fmt::Debug for ConstraintSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConstraintSet").field("rules", &self.rules.len()).finish()
    }
}

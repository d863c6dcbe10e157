//! Static collection declarations: field kinds and secondary indexes.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server provisions physical indexes from these declarations at startup,
//! so the declaration is the single source for which lookups are indexed.

#[cfg(test)]
#[path = "declaration_test.rs"]
mod declaration_test;

use serde::Serialize;

use crate::user::{COLLECTION, Field};

/// Declared type of a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Number,
    Text,
    /// Ordered sequence of text, empty by default.
    TextArray,
}

/// One field of a collection shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    pub field: Field,
    pub kind: FieldKind,
}

/// Key direction within an index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    /// Numeric direction as written in document-store index specs (`1` / `-1`).
    #[must_use]
    pub fn direction(self) -> i8 {
        match self {
            Self::Ascending => 1,
            Self::Descending => -1,
        }
    }
}

/// A secondary index over one or more fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct IndexSpec {
    /// Stable index name, derived from the keys (`id_1`).
    pub name: &'static str,
    pub keys: &'static [(Field, SortOrder)],
    pub unique: bool,
}

impl IndexSpec {
    #[must_use]
    pub fn is_unique(&self) -> bool {
        self.unique
    }

    /// Whether `field` is the leading key, i.e. lookups on it can use this index.
    #[must_use]
    pub fn leads_with(&self, field: Field) -> bool {
        self.keys.first().is_some_and(|(f, _)| *f == field)
    }
}

/// Shape and indexes of a persisted collection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CollectionSchema {
    pub collection: &'static str,
    pub fields: &'static [FieldSpec],
    pub indexes: &'static [IndexSpec],
}

impl CollectionSchema {
    /// Declared spec for `field`, if the collection has it.
    #[must_use]
    pub fn field(&self, field: Field) -> Option<&FieldSpec> {
        self.fields.iter().find(|spec| spec.field == field)
    }

    /// First index whose leading key is `field`.
    #[must_use]
    pub fn index_on(&self, field: Field) -> Option<&IndexSpec> {
        self.indexes.iter().find(|index| index.leads_with(field))
    }
}

/// Declaration of the `User` collection.
pub const USER_SCHEMA: CollectionSchema = CollectionSchema {
    collection: COLLECTION,
    fields: &[
        FieldSpec { field: Field::Id, kind: FieldKind::Number },
        FieldSpec { field: Field::Account, kind: FieldKind::Text },
        FieldSpec { field: Field::Password, kind: FieldKind::Text },
        FieldSpec { field: Field::Roles, kind: FieldKind::TextArray },
    ],
    indexes: &[IndexSpec { name: "id_1", keys: &[(Field::Id, SortOrder::Ascending)], unique: false }],
};

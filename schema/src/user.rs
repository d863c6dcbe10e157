//! The `User` record shape and its normalization from raw documents.
//!
//! DESIGN
//! ======
//! The shape declares field types only. Every field is optional and nothing is
//! unique; integrity rules live in [`crate::constraints`] and are applied by
//! whichever data-access layer writes records.
//!
//! Normalization follows the casting rules of a document store: scalars are
//! coerced to the declared type where the coercion is lossless, a lone role is
//! wrapped into a sequence, and unknown keys are dropped.

#[cfg(test)]
#[path = "user_test.rs"]
mod user_test;

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Collection identifier for persisted users.
pub const COLLECTION: &str = "User";

/// Fields of the `User` shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Id,
    Account,
    Password,
    Roles,
}

impl Field {
    /// Every field in declaration order.
    pub const ALL: [Self; 4] = [Self::Id, Self::Account, Self::Password, Self::Roles];

    /// Document key for this field.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Account => "account",
            Self::Password => "password",
            Self::Roles => "roles",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned by [`UserRecord::from_document`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ShapeError {
    /// The input was not a JSON object.
    #[error("expected a document object, found {found}")]
    NotADocument { found: &'static str },
    /// A field value could not be coerced to its declared type.
    #[error("cannot cast `{path}` to {expected}: found {found}")]
    Cast { path: String, expected: &'static str, found: &'static str },
}

/// A persisted user, as shaped by the `User` schema.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Numeric user id. Indexed, not unique.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Login account name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
    /// Password as handed to the store. The data-access layer decides the encoding.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Role names in assignment order.
    #[serde(default)]
    pub roles: Vec<String>,
}

impl UserRecord {
    #[must_use]
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn with_account(mut self, account: impl Into<String>) -> Self {
        self.account = Some(account.into());
        self
    }

    #[must_use]
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    #[must_use]
    pub fn with_roles<I, S>(mut self, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.roles = roles.into_iter().map(Into::into).collect();
        self
    }

    /// Normalize a raw document into the `User` shape.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::NotADocument`] for non-object input and
    /// [`ShapeError::Cast`] when a field value cannot be coerced.
    pub fn from_document(doc: &Value) -> Result<Self, ShapeError> {
        let Value::Object(map) = doc else {
            return Err(ShapeError::NotADocument { found: kind_of(doc) });
        };
        Ok(Self {
            id: cast_number(map, Field::Id)?,
            account: cast_text_field(map, Field::Account)?,
            password: cast_text_field(map, Field::Password)?,
            roles: cast_roles(map)?,
        })
    }

    /// Whether a field carries a value. An empty role list counts as absent.
    #[must_use]
    pub fn is_present(&self, field: Field) -> bool {
        match field {
            Field::Id => self.id.is_some(),
            Field::Account => self.account.is_some(),
            Field::Password => self.password.is_some(),
            Field::Roles => !self.roles.is_empty(),
        }
    }

    /// Text value of `account` or `password`; `None` for other fields.
    #[must_use]
    pub fn text(&self, field: Field) -> Option<&str> {
        match field {
            Field::Account => self.account.as_deref(),
            Field::Password => self.password.as_deref(),
            Field::Id | Field::Roles => None,
        }
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn cast_error(path: impl Into<String>, expected: &'static str, value: &Value) -> ShapeError {
    ShapeError::Cast { path: path.into(), expected, found: kind_of(value) }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn integral(f: f64) -> Option<i64> {
    if f.is_finite() && f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

fn cast_number(map: &Map<String, Value>, field: Field) -> Result<Option<i64>, ShapeError> {
    let Some(value) = map.get(field.as_str()) else {
        return Ok(None);
    };
    let cast = match value {
        Value::Null => return Ok(None),
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(integral)),
        Value::Bool(b) => Some(i64::from(*b)),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            trimmed
                .parse::<i64>()
                .ok()
                .or_else(|| trimmed.parse::<f64>().ok().and_then(integral))
        }
        Value::Array(_) | Value::Object(_) => None,
    };
    cast.map(Some).ok_or_else(|| cast_error(field.as_str(), "number", value))
}

fn cast_text(path: &str, value: &Value) -> Result<String, ShapeError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => Err(cast_error(path, "text", value)),
    }
}

fn cast_text_field(map: &Map<String, Value>, field: Field) -> Result<Option<String>, ShapeError> {
    match map.get(field.as_str()) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => cast_text(field.as_str(), value).map(Some),
    }
}

fn cast_roles(map: &Map<String, Value>) -> Result<Vec<String>, ShapeError> {
    match map.get(Field::Roles.as_str()) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => items
            .iter()
            .enumerate()
            .map(|(i, item)| cast_text(&format!("roles.{i}"), item))
            .collect(),
        Some(scalar) => cast_text("roles.0", scalar).map(|role| vec![role]),
    }
}

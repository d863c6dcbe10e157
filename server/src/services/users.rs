//! User repository over the `users` table.
//!
//! DESIGN
//! ======
//! Every write goes through the same pipeline: normalize the incoming
//! document into a [`UserRecord`], run the store's [`ConstraintSet`], then
//! encode the password. The shape from the `schema` crate stays permissive;
//! the rules here are this store's choice.
//!
//! `id` is indexed but not unique, so lookups by id return every match in
//! insertion order. Rows are addressed by their own `oid` for updates.
//!
//! ERROR HANDLING
//! ==============
//! Violations are collected in full and returned as one
//! [`UserStoreError::Constraint`] so callers can report all of them.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use std::sync::Arc;

use schema::{ConstraintSet, ConstraintViolation, Field, NonBlank, Required, ShapeError, UserRecord};
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use super::password;
use crate::config::AdminSeed;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum UserStoreError {
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
    #[error("invalid user document: {0}")]
    Shape(#[from] ShapeError),
    #[error("user violates {} constraint(s): {}", .0.len(), join_violations(.0))]
    Constraint(Vec<ConstraintViolation>),
    #[error("password hashing failed: {0}")]
    Hash(String),
    #[error("stored password hash uses {found} iterations; at least {required} required")]
    WeakHash { found: u32, required: u32 },
}

fn join_violations(violations: &[ConstraintViolation]) -> String {
    violations.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
}

/// A persisted user together with its row key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredUser {
    pub oid: Uuid,
    pub record: UserRecord,
}

/// Result of [`UserStore::seed_admin`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    Created(Uuid),
    Existing(Uuid),
}

type UserRow = (Uuid, Option<i64>, Option<String>, Option<String>, Vec<String>);

fn from_row((oid, id, account, password, roles): UserRow) -> StoredUser {
    StoredUser { oid, record: UserRecord { id, account, password, roles } }
}

const SELECT_USER: &str = "SELECT oid, id, account, password, roles FROM users";

/// Rules applied to every write: an account that is present and not blank,
/// and a password.
#[must_use]
pub fn default_rules() -> ConstraintSet {
    ConstraintSet::new()
        .with(Required(Field::Account))
        .with(NonBlank(Field::Account))
        .with(Required(Field::Password))
}

// =============================================================================
// STORE
// =============================================================================

#[derive(Clone)]
pub struct UserStore {
    pool: PgPool,
    rules: Arc<ConstraintSet>,
    iterations: u32,
}

impl UserStore {
    #[must_use]
    pub fn new(pool: PgPool, iterations: u32) -> Self {
        Self::with_rules(pool, default_rules(), iterations)
    }

    #[must_use]
    pub fn with_rules(pool: PgPool, rules: ConstraintSet, iterations: u32) -> Self {
        Self { pool, rules: Arc::new(rules), iterations: iterations.max(1) }
    }

    #[must_use]
    pub fn rules(&self) -> &ConstraintSet {
        &self.rules
    }

    /// Run the store's rules against a normalized record.
    ///
    /// # Errors
    ///
    /// Returns every violation as [`UserStoreError::Constraint`].
    pub fn validate(&self, record: &UserRecord) -> Result<(), UserStoreError> {
        self.rules.check(record).map_err(UserStoreError::Constraint)
    }

    /// Validate and encode a record for storage. A password already in stored
    /// form is kept if its work factor meets the store's; plaintext is hashed.
    async fn prepare(&self, mut record: UserRecord) -> Result<UserRecord, UserStoreError> {
        self.validate(&record)?;
        if let Some(given) = record.password.take() {
            let stored = match password::iterations_of(&given) {
                Some(found) if found < self.iterations => {
                    return Err(UserStoreError::WeakHash { found, required: self.iterations });
                }
                Some(_) => given,
                None => self.hash_plain(given).await?,
            };
            record.password = Some(stored);
        }
        Ok(record)
    }

    /// Hash `plain` with the store's work factor. The input is always treated
    /// as plaintext.
    async fn hash_plain(&self, plain: String) -> Result<String, UserStoreError> {
        let iterations = self.iterations;
        tokio::task::spawn_blocking(move || password::hash_password(&plain, iterations))
            .await
            .map_err(|e| UserStoreError::Hash(e.to_string()))
    }

    // =========================================================================
    // WRITES
    // =========================================================================

    /// Normalize a raw document and insert it.
    ///
    /// # Errors
    ///
    /// Returns shape, constraint, hashing or database errors.
    pub async fn insert(&self, doc: &serde_json::Value) -> Result<StoredUser, UserStoreError> {
        let record = UserRecord::from_document(doc)?;
        self.insert_record(record).await
    }

    /// Insert an already-shaped record.
    ///
    /// # Errors
    ///
    /// Returns constraint, hashing or database errors.
    pub async fn insert_record(&self, record: UserRecord) -> Result<StoredUser, UserStoreError> {
        let record = self.prepare(record).await?;
        let oid = Uuid::new_v4();
        sqlx::query("INSERT INTO users (oid, id, account, password, roles) VALUES ($1, $2, $3, $4, $5)")
            .bind(oid)
            .bind(record.id)
            .bind(record.account.as_deref())
            .bind(record.password.as_deref())
            .bind(&record.roles)
            .execute(&self.pool)
            .await?;
        Ok(StoredUser { oid, record })
    }

    /// Replace a user's roles, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns a database error if the update fails.
    pub async fn set_roles(&self, oid: Uuid, roles: &[String]) -> Result<bool, UserStoreError> {
        let result = sqlx::query("UPDATE users SET roles = $2, updated_at = now() WHERE oid = $1")
            .bind(oid)
            .bind(roles.to_vec())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Hash and store a new password. `plain` is hashed even if it looks like
    /// a stored hash.
    ///
    /// # Errors
    ///
    /// Returns hashing or database errors.
    pub async fn set_password(&self, oid: Uuid, plain: &str) -> Result<bool, UserStoreError> {
        let encoded = self.hash_plain(plain.to_owned()).await?;
        let result = sqlx::query("UPDATE users SET password = $2, updated_at = now() WHERE oid = $1")
            .bind(oid)
            .bind(encoded)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// # Errors
    ///
    /// Returns a database error if the delete fails.
    pub async fn delete(&self, oid: Uuid) -> Result<bool, UserStoreError> {
        let result = sqlx::query("DELETE FROM users WHERE oid = $1").bind(oid).execute(&self.pool).await?;
        Ok(result.rows_affected() > 0)
    }

    // =========================================================================
    // READS
    // =========================================================================

    /// Every user carrying `id`, oldest first.
    ///
    /// # Errors
    ///
    /// Returns a database error if the query fails.
    pub async fn find_by_id(&self, id: i64) -> Result<Vec<StoredUser>, UserStoreError> {
        let rows = sqlx::query_as::<_, UserRow>(&format!("{SELECT_USER} WHERE id = $1 ORDER BY created_at, oid"))
            .bind(id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(from_row).collect())
    }

    /// The oldest user carrying `id`.
    ///
    /// # Errors
    ///
    /// Returns a database error if the query fails.
    pub async fn find_one_by_id(&self, id: i64) -> Result<Option<StoredUser>, UserStoreError> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "{SELECT_USER} WHERE id = $1 ORDER BY created_at, oid LIMIT 1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(from_row))
    }

    /// # Errors
    ///
    /// Returns a database error if the query fails.
    pub async fn find_by_account(&self, account: &str) -> Result<Option<StoredUser>, UserStoreError> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "{SELECT_USER} WHERE account = $1 ORDER BY created_at, oid LIMIT 1"
        ))
        .bind(account)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(from_row))
    }

    /// # Errors
    ///
    /// Returns a database error if the query fails.
    pub async fn get(&self, oid: Uuid) -> Result<Option<StoredUser>, UserStoreError> {
        let row = sqlx::query_as::<_, UserRow>(&format!("{SELECT_USER} WHERE oid = $1"))
            .bind(oid)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(from_row))
    }

    /// Users in insertion order, at most `limit`.
    ///
    /// # Errors
    ///
    /// Returns a database error if the query fails.
    pub async fn list(&self, limit: i64) -> Result<Vec<StoredUser>, UserStoreError> {
        let rows = sqlx::query_as::<_, UserRow>(&format!("{SELECT_USER} ORDER BY created_at, oid LIMIT $1"))
            .bind(limit.max(0))
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(from_row).collect())
    }

    /// Check an account's password. Unknown accounts and users without a
    /// password never verify.
    ///
    /// # Errors
    ///
    /// Returns a database error if the lookup fails.
    pub async fn verify_credentials(&self, account: &str, candidate: &str) -> Result<bool, UserStoreError> {
        let Some(user) = self.find_by_account(account).await? else {
            return Ok(false);
        };
        Ok(user.record.password.as_deref().is_some_and(|stored| password::verify_password(stored, candidate)))
    }

    // =========================================================================
    // SEEDING
    // =========================================================================

    /// Create the configured admin unless its account already exists.
    ///
    /// # Errors
    ///
    /// Returns constraint, hashing or database errors.
    pub async fn seed_admin(&self, seed: &AdminSeed) -> Result<SeedOutcome, UserStoreError> {
        if let Some(existing) = self.find_by_account(&seed.account).await? {
            return Ok(SeedOutcome::Existing(existing.oid));
        }
        let record = admin_record(seed);
        let stored = self.insert_record(record).await?;
        info!(oid = %stored.oid, account = %seed.account, "admin user seeded");
        Ok(SeedOutcome::Created(stored.oid))
    }
}

pub(crate) fn admin_record(seed: &AdminSeed) -> UserRecord {
    UserRecord::default()
        .with_id(seed.id)
        .with_account(seed.account.clone())
        .with_password(seed.password.clone())
        .with_roles(["admin"])
}

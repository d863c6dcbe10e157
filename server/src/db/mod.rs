//! Database initialization, migrations, and index provisioning.
//!
//! SYSTEM CONTEXT
//! ==============
//! Startup uses this module to create the shared SQLx pool, apply table
//! migrations, and then create the secondary indexes the collection
//! declarations in the `schema` crate ask for.


use schema::{CollectionSchema, IndexSpec, SortOrder};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

/// Table backing the `User` collection.
pub const USERS_TABLE: &str = "users";

/// Initialize the `PostgreSQL` connection pool and run migrations.
///
/// # Errors
///
/// Returns an error if the connection or migrations fail.
pub async fn init_pool(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new().max_connections(max_connections).connect(database_url).await?;

    sqlx::migrate!("src/db/migrations").run(&pool).await?;

    Ok(pool)
}

/// Physical index name for a declared index on `table`.
pub(crate) fn index_name(table: &str, index: &IndexSpec) -> String {
    format!("{table}_{}", index.name)
}

/// `CREATE INDEX` statement for a declared index. Idempotent.
pub(crate) fn create_index_sql(table: &str, index: &IndexSpec) -> String {
    let columns = index
        .keys
        .iter()
        .map(|(field, order)| {
            let dir = match order {
                SortOrder::Ascending => "ASC",
                SortOrder::Descending => "DESC",
            };
            format!("{field} {dir}")
        })
        .collect::<Vec<_>>()
        .join(", ");
    let unique = if index.is_unique() { "UNIQUE " } else { "" };
    format!("CREATE {unique}INDEX IF NOT EXISTS {} ON {table} ({columns})", index_name(table, index))
}

/// Create every index `schema` declares on `table`.
///
/// # Errors
///
/// Returns the first failing statement's error.
pub async fn ensure_indexes(pool: &PgPool, schema: &CollectionSchema, table: &str) -> Result<(), sqlx::Error> {
    for index in schema.indexes {
        let sql = create_index_sql(table, index);
        sqlx::query(&sql).execute(pool).await?;
        tracing::debug!(collection = schema.collection, index = index.name, "index ensured");
    }
    tracing::info!(collection = schema.collection, count = schema.indexes.len(), "indexes provisioned");
    Ok(())
}

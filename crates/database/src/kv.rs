//! Key-value queries.

use sqlx::SqlitePool;

use crate::models::Entry;
use crate::Result;

/// Create or overwrite an entry.
pub async fn set_value(pool: &SqlitePool, key: &str, value: &str) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO kv_store (key, value)
        VALUES (?, ?)
        ON CONFLICT(key) DO UPDATE SET
            value = excluded.value,
            updated_at = datetime('now')
        "#,
    )
    .bind(key)
    .bind(value)
    .execute(pool)
    .await?;

    Ok(())
}

/// Get an entry by key.
pub async fn get_entry(pool: &SqlitePool, key: &str) -> Result<Option<Entry>> {
    let entry = sqlx::query_as::<_, Entry>(
        r#"
        SELECT key, value, updated_at
        FROM kv_store
        WHERE key = ?
        "#,
    )
    .bind(key)
    .fetch_optional(pool)
    .await?;

    Ok(entry)
}

/// Delete an entry. Returns whether a row was removed.
pub async fn delete_value(pool: &SqlitePool, key: &str) -> Result<bool> {
    let result = sqlx::query(
        r#"
        DELETE FROM kv_store
        WHERE key = ?
        "#,
    )
    .bind(key)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

//! SQLite persistence layer for the cosmetic composition analyzer.
//!
//! This crate provides [`SqliteStore`], a [`KeyValueStore`] over a single
//! `kv_store` table, using SQLx with SQLite. Profile, history, API cache
//! entries and collected ingredients are all stored as JSON blobs under
//! their own keys.
//!
//! # Example
//!
//! ```no_run
//! use composition_core::KeyValueStore;
//! use database::SqliteStore;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Connect and run migrations
//!     let store = SqliteStore::open("sqlite:scanner.db?mode=rwc").await?;
//!
//!     store.set("cosmetic_scanner_profile", "{}").await?;
//!     let profile = store.get("cosmetic_scanner_profile").await?;
//!     assert_eq!(profile.as_deref(), Some("{}"));
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod kv;
pub mod models;
mod store;

pub use error::{DatabaseError, Result};
pub use models::Entry;
pub use store::SqliteStore;

// Re-export commonly used types from dependencies
pub use composition_core::KeyValueStore;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// Database connection wrapper.
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Default pool size for database connections.
    const DEFAULT_POOL_SIZE: u32 = 5;

    /// Connect to a SQLite database.
    ///
    /// The URL should be in the format `sqlite:path/to/db.sqlite?mode=rwc`.
    /// Use `?mode=rwc` to create the database file if it doesn't exist.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # async fn example() -> database::Result<()> {
    /// // File database
    /// let db = database::Database::connect("sqlite:data/scanner.db?mode=rwc").await?;
    ///
    /// // In-memory database, one connection so every query sees the same data
    /// let db = database::Database::connect_with_pool_size("sqlite::memory:", 1).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn connect(url: &str) -> Result<Self> {
        Self::connect_with_pool_size(url, Self::DEFAULT_POOL_SIZE).await
    }

    /// Connect to a SQLite database with a custom pool size.
    pub async fn connect_with_pool_size(url: &str, pool_size: u32) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(pool_size)
            .acquire_timeout(std::time::Duration::from_secs(30))
            .connect_with(options)
            .await?;

        tracing::info!("Connected to database: {} (pool size: {})", url, pool_size);

        Ok(Self { pool })
    }

    /// Run database migrations.
    ///
    /// This should be called once after connecting to ensure the schema is up to date.
    pub async fn migrate(&self) -> Result<()> {
        tracing::info!("Running database migrations...");

        sqlx::migrate!("./migrations").run(&self.pool).await?;

        tracing::info!("Migrations complete");
        Ok(())
    }

    /// Get a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close the database connection pool.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

//! SQLite pool construction and schema bootstrap for the books table.

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use thiserror::Error;

/// Storage failure taxonomy. HTTP handlers collapse these per endpoint
/// (not-found and outages both surface as 404, create failures as 400), but
/// logs keep the variants apart.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("row not found")]
    NotFound,
    #[error("constraint violation: {0}")]
    Constraint(String),
    #[error("store unavailable: {0}")]
    Unavailable(#[from] sqlx::Error),
}

/// Books table DDL. AUTOINCREMENT keeps deleted ids from being reused.
const BOOKS_DDL: &str = r#"
CREATE TABLE IF NOT EXISTS books (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    author TEXT NOT NULL,
    publisher TEXT,
    price INTEGER NOT NULL,
    publish_date TEXT,
    isbn TEXT,
    cover_url TEXT,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)
"#;

/// Open (creating if missing) the single-file store at `path` and return a
/// pool over it. Callers follow with [`ensure_schema`].
pub async fn connect(path: impl AsRef<Path>) -> Result<SqlitePool, StoreError> {
    let opts = SqliteConnectOptions::new()
        .filename(path.as_ref())
        .create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(opts)
        .await?;
    Ok(pool)
}

/// Create the books table if this is a fresh store file. Idempotent, so an
/// existing file passes through untouched.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), StoreError> {
    sqlx::query(BOOKS_DDL).execute(pool).await?;
    Ok(())
}

/// Classify a sqlx error: constraint violations (NOT NULL, CHECK, UNIQUE)
/// are the caller's fault, everything else is the store being unavailable.
pub(crate) fn classify(e: sqlx::Error) -> StoreError {
    use sqlx::error::ErrorKind;
    match &e {
        sqlx::Error::Database(db)
            if matches!(
                db.kind(),
                ErrorKind::UniqueViolation
                    | ErrorKind::ForeignKeyViolation
                    | ErrorKind::NotNullViolation
                    | ErrorKind::CheckViolation
            ) =>
        {
            StoreError::Constraint(db.message().to_string())
        }
        _ => StoreError::Unavailable(e),
    }
}

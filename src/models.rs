//! Request and response shapes for the books entity.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Persisted book row, also the response body. `created_at` is the store's
/// `CURRENT_TIMESTAMP` text, passed through unparsed.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub publisher: Option<String>,
    pub price: i64,
    pub publish_date: Option<String>,
    pub isbn: Option<String>,
    pub cover_url: Option<String>,
    pub created_at: String,
}

/// POST/PUT body. Every field is optional except `price`; a missing title or
/// author inserts NULL and is rejected by the store's NOT NULL constraint.
/// Empty strings are accepted as-is (no trimming, no format checks).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookPayload {
    pub title: Option<String>,
    pub author: Option<String>,
    pub publisher: Option<String>,
    pub price: i64,
    pub publish_date: Option<String>,
    pub isbn: Option<String>,
    pub cover_url: Option<String>,
}

//! CRUD execution against the books table.

use crate::models::{Book, BookPayload};
use crate::store::{classify, StoreError};
use sqlx::SqlitePool;

pub struct BookService;

impl BookService {
    /// List books in insertion order, skipping `skip` rows and returning at
    /// most `limit`. A `limit` of 0 means unbounded (SQLite's `LIMIT -1`),
    /// matching the query-parameter default. Failures are logged and degrade
    /// to an empty list.
    pub async fn list(pool: &SqlitePool, skip: i64, limit: i64) -> Vec<Book> {
        let limit = if limit == 0 { -1 } else { limit };
        let res = sqlx::query_as::<_, Book>(
            "SELECT * FROM books ORDER BY id LIMIT ? OFFSET ?",
        )
        .bind(limit)
        .bind(skip)
        .fetch_all(pool)
        .await;
        match res {
            Ok(books) => books,
            Err(e) => {
                tracing::error!(error = %e, "list books failed");
                Vec::new()
            }
        }
    }

    /// Fetch one book by id.
    pub async fn get(pool: &SqlitePool, id: i64) -> Result<Book, StoreError> {
        let row = sqlx::query_as::<_, Book>("SELECT * FROM books WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(classify)?;
        row.ok_or(StoreError::NotFound)
    }

    /// Insert one book; the store assigns `id` and `created_at`. Returns the
    /// new id.
    pub async fn create(pool: &SqlitePool, payload: &BookPayload) -> Result<i64, StoreError> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO books (title, author, publisher, price, publish_date, isbn, cover_url)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(&payload.title)
        .bind(&payload.author)
        .bind(&payload.publisher)
        .bind(payload.price)
        .bind(&payload.publish_date)
        .bind(&payload.isbn)
        .bind(&payload.cover_url)
        .fetch_one(pool)
        .await
        .map_err(classify)?;
        Ok(id)
    }

    /// Replace all mutable fields of the row matching `id` (no partial
    /// merge). NotFound unless exactly one row changed.
    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        payload: &BookPayload,
    ) -> Result<(), StoreError> {
        let result = sqlx::query(
            r#"
            UPDATE books
            SET title = ?, author = ?, publisher = ?, price = ?,
                publish_date = ?, isbn = ?, cover_url = ?
            WHERE id = ?
            "#,
        )
        .bind(&payload.title)
        .bind(&payload.author)
        .bind(&payload.publisher)
        .bind(payload.price)
        .bind(&payload.publish_date)
        .bind(&payload.isbn)
        .bind(&payload.cover_url)
        .bind(id)
        .execute(pool)
        .await
        .map_err(classify)?;
        if result.rows_affected() == 1 {
            Ok(())
        } else {
            Err(StoreError::NotFound)
        }
    }

    /// Hard-delete the row matching `id`. NotFound unless exactly one row
    /// was removed, so a repeated delete of the same id fails.
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM books WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await
            .map_err(classify)?;
        if result.rows_affected() == 1 {
            Ok(())
        } else {
            Err(StoreError::NotFound)
        }
    }
}

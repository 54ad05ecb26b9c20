//! Books HTTP handlers: status-code translation around BookService.
//!
//! Store outages deliberately present like a missing resource (404) or a
//! generic create failure (400); only the logs tell the variants apart.

use crate::error::AppError;
use crate::models::{Book, BookPayload};
use crate::service::{validate_payload, BookService};
use crate::state::AppState;
use crate::store::StoreError;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub skip: i64,
    /// 0 (the default) means unbounded.
    #[serde(default)]
    pub limit: i64,
}

fn not_found(id: i64, op: &'static str, e: StoreError) -> AppError {
    if !matches!(e, StoreError::NotFound) {
        tracing::warn!(id, op, error = %e, "store failure collapsed to 404");
    }
    AppError::NotFound(format!("book {}", id))
}

pub async fn list(
    State(state): State<AppState>,
    Query(page): Query<Pagination>,
) -> Json<Vec<Book>> {
    let skip = page.skip.max(0);
    let limit = page.limit.max(0);
    Json(BookService::list(&state.pool, skip, limit).await)
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Book>, AppError> {
    let book = BookService::get(&state.pool, id)
        .await
        .map_err(|e| not_found(id, "get", e))?;
    Ok(Json(book))
}

pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<BookPayload>,
) -> Result<(StatusCode, Json<Book>), AppError> {
    validate_payload(&payload)?;
    let id = BookService::create(&state.pool, &payload).await.map_err(|e| {
        tracing::warn!(error = %e, "create book failed");
        AppError::BadRequest("create book failed, check required fields".into())
    })?;
    // Re-fetch so the response carries the store-assigned id and created_at.
    let book = BookService::get(&state.pool, id)
        .await
        .map_err(|e| not_found(id, "create refetch", e))?;
    Ok((StatusCode::CREATED, Json(book)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<BookPayload>,
) -> Result<Json<Book>, AppError> {
    validate_payload(&payload)?;
    BookService::update(&state.pool, id, &payload)
        .await
        .map_err(|e| not_found(id, "update", e))?;
    let book = BookService::get(&state.pool, id)
        .await
        .map_err(|e| not_found(id, "update refetch", e))?;
    Ok(Json(book))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    BookService::delete(&state.pool, id)
        .await
        .map_err(|e| not_found(id, "delete", e))?;
    Ok(StatusCode::NO_CONTENT)
}

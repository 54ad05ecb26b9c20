//! Books CRUD routes.

use crate::handlers::books;
use crate::state::AppState;
use axum::{
    routing::{delete, get, post, put},
    Router,
};

/// `/books` collection and `/books/{id}` item routes.
pub fn book_routes(state: AppState) -> Router {
    Router::new()
        .route("/books", get(books::list))
        .route("/books", post(books::create))
        .route("/books/:id", get(books::get))
        .route("/books/:id", put(books::update))
        .route("/books/:id", delete(books::delete))
        .with_state(state)
}

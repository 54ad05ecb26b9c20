//! Bokelai: books CRUD REST backend over an embedded SQLite store.

pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use error::AppError;
pub use models::{Book, BookPayload};
pub use routes::{book_routes, common_routes};
pub use service::BookService;
pub use state::AppState;
pub use store::{connect, ensure_schema, StoreError};

//! Server binary: env config, tracing, pool + schema bootstrap, serve.

use axum::Router;
use bokelai::{book_routes, common_routes, connect, ensure_schema, AppState};
use tokio::net::TcpListener;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

const BODY_LIMIT_BYTES: usize = 64 * 1024;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("bokelai=info")),
        )
        .init();

    let db_path =
        std::env::var("BOOKS_DATABASE_PATH").unwrap_or_else(|_| "bokelai.db".into());
    let bind_addr = std::env::var("BOOKS_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());

    let pool = connect(&db_path).await?;
    ensure_schema(&pool).await?;
    let state = AppState { pool };

    let app = Router::new()
        .merge(common_routes(state.clone()))
        .merge(book_routes(state))
        .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES))
        .layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(&bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}

//! Liveness endpoint

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::AppResult;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    /// Crate version of the running server
    pub version: String,
    /// Number of books currently held
    pub books: usize,
}

/// Report liveness along with the size of the catalog
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health_check(State(state): State<crate::AppState>) -> AppResult<Json<HealthResponse>> {
    let books = state.services.books.list().await?.len();

    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        books,
    }))
}

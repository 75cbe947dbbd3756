//! API handlers for Bookshelf REST endpoints

pub mod books;
pub mod health;
pub mod openapi;

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Query, Request},
    handler::Handler,
    http::request::Parts,
    routing::{delete, get, post, put, MethodRouter},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::{
    error::AppError,
    models::book::Book,
    AppState,
};

/// Extractor for the `id` query parameter of update/delete requests.
///
/// The first `id` wins when the parameter is repeated. An absent or
/// empty `id` is rejected with 400.
pub struct RequiredId(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for RequiredId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        match pairs.into_iter().find(|(key, _)| key == "id") {
            Some((_, id)) if !id.is_empty() => Ok(RequiredId(id)),
            _ => Err(AppError::BadRequest("ID not provided".to_string())),
        }
    }
}

/// Book body extractor; ignores `Content-Type` and reports malformed
/// input as 400 with the decoder message
pub struct BookBody(pub Book);

#[async_trait]
impl<S> FromRequest<S> for BookBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        Book::from_json(&bytes)
            .map(BookBody)
            .map_err(|e| AppError::BadRequest(e.to_string()))
    }
}

async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

async fn page_not_found() -> AppError {
    AppError::NotFound("404 page not found".to_string())
}

/// GET route that answers every other method, HEAD included, with 405
fn get_only<H, T>(handler: H) -> MethodRouter<AppState>
where
    H: Handler<T, AppState>,
    T: 'static,
{
    get(handler)
        .head(method_not_allowed)
        .fallback(method_not_allowed)
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    let routes = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Books
        .route("/books", get_only(books::list_books))
        .route("/books/add", post(books::add_book).fallback(method_not_allowed))
        .route("/books/update", put(books::update_book).fallback(method_not_allowed))
        .route("/books/delete", delete(books::delete_book).fallback(method_not_allowed))
        // Everything else under /books/ is a lookup of the full suffix
        .route("/books/", get_only(books::get_book))
        .route("/books/:id", get_only(books::get_book))
        .route("/books/:id/*rest", get_only(books::get_book))
        .with_state(state);

    Router::new()
        .merge(routes)
        .merge(openapi::create_openapi_router())
        .fallback(page_not_found)
        .layer(TraceLayer::new_for_http())
}

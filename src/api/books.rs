//! Book endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::book::{Book, BookIdQuery},
};

use super::{BookBody, RequiredId};

/// List all books
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "All books", body = Vec<Book>),
        (status = 405, description = "Method not allowed")
    )
)]
pub async fn list_books(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.books.list().await?;
    Ok(Json(books))
}

/// Get a book by ID
///
/// The id is the whole path suffix after `/books/`, slashes included;
/// `/books/` with no suffix looks up the empty id.
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = String, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 404, description = "Book not found"),
        (status = 405, description = "Method not allowed")
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    segments: Option<Path<Vec<(String, String)>>>,
) -> AppResult<Json<Book>> {
    let id = segments
        .map(|Path(segments)| {
            segments
                .into_iter()
                .map(|(_, value)| value)
                .collect::<Vec<_>>()
                .join("/")
        })
        .unwrap_or_default();
    let book = state.services.books.get_by_id(&id).await?;
    Ok(Json(book))
}

/// Add a book
#[utoipa::path(
    post,
    path = "/books/add",
    tag = "books",
    request_body = Book,
    responses(
        (status = 201, description = "Book added"),
        (status = 400, description = "Malformed JSON body"),
        (status = 405, description = "Method not allowed")
    )
)]
pub async fn add_book(
    State(state): State<crate::AppState>,
    BookBody(book): BookBody,
) -> AppResult<StatusCode> {
    state.services.books.create(book).await?;
    Ok(StatusCode::CREATED)
}

/// Replace a book
#[utoipa::path(
    put,
    path = "/books/update",
    tag = "books",
    params(BookIdQuery),
    request_body = Book,
    responses(
        (status = 200, description = "Book replaced"),
        (status = 400, description = "ID not provided or malformed JSON body"),
        (status = 404, description = "Book not found"),
        (status = 405, description = "Method not allowed")
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    RequiredId(id): RequiredId,
    BookBody(book): BookBody,
) -> AppResult<StatusCode> {
    state.services.books.update(&id, book).await?;
    Ok(StatusCode::OK)
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/delete",
    tag = "books",
    params(BookIdQuery),
    responses(
        (status = 204, description = "Book deleted"),
        (status = 400, description = "ID not provided"),
        (status = 404, description = "Book not found"),
        (status = 405, description = "Method not allowed")
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    RequiredId(id): RequiredId,
) -> AppResult<StatusCode> {
    state.services.books.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

//! Book handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{BookListResponse, BookResponse, CreateBook, UpdateBook};
use crate::errors::AppResult;
use crate::types::{Created, NoContent};

/// Create book routes
pub fn book_routes() -> Router<AppState> {
    Router::new()
        .route("/books", get(list_books).post(create_book))
        .route("/books/", get(list_books).post(create_book))
        .route(
            "/books/:id",
            get(get_book).put(update_book).delete(delete_book),
        )
}

/// Add a book to an existing seller
#[utoipa::path(
    post,
    path = "/api/v1/books/",
    tag = "Books",
    request_body = CreateBook,
    responses(
        (status = 201, description = "Book created", body = BookResponse),
        (status = 422, description = "Malformed body or unknown seller")
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateBook>,
) -> AppResult<Created<BookResponse>> {
    let book = state.book_service.create_book(payload.into()).await?;
    Ok(Created(BookResponse::from(book)))
}

/// List all books
#[utoipa::path(
    get,
    path = "/api/v1/books/",
    tag = "Books",
    responses(
        (status = 200, description = "All books", body = BookListResponse)
    )
)]
pub async fn list_books(State(state): State<AppState>) -> AppResult<Json<BookListResponse>> {
    let books = state.book_service.list_books().await?;
    Ok(Json(BookListResponse::from(books)))
}

/// Get book by ID
#[utoipa::path(
    get,
    path = "/api/v1/books/{id}",
    tag = "Books",
    params(("id" = i32, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book found", body = BookResponse),
        (status = 404, description = "Book not found")
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<BookResponse>> {
    let book = state.book_service.get_book(id).await?;
    Ok(Json(BookResponse::from(book)))
}

/// Overwrite every field of a book
#[utoipa::path(
    put,
    path = "/api/v1/books/{id}",
    tag = "Books",
    params(("id" = i32, Path, description = "Book ID")),
    request_body = UpdateBook,
    responses(
        (status = 200, description = "Book updated", body = BookResponse),
        (status = 404, description = "Book not found"),
        (status = 422, description = "Malformed body or unknown seller")
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateBook>,
) -> AppResult<Json<BookResponse>> {
    let book = state.book_service.update_book(id, payload.into()).await?;
    Ok(Json(BookResponse::from(book)))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/api/v1/books/{id}",
    tag = "Books",
    params(("id" = i32, Path, description = "Book ID")),
    responses(
        (status = 204, description = "Book deleted or already absent")
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<NoContent> {
    state.book_service.delete_book(id).await?;
    Ok(NoContent)
}

//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{book_handler, seller_handler};
use crate::domain::{
    BookListResponse, BookResponse, CreateBook, CreateSeller, SellerBookResponse,
    SellerDetailResponse, SellerListResponse, SellerResponse, UpdateBook, UpdateSeller,
};

/// OpenAPI documentation for the Bookstore API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bookstore API",
        version = "0.1.0",
        description = "Sellers and the books they own, backed by Axum and SeaORM",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        // Seller endpoints
        seller_handler::create_seller,
        seller_handler::list_sellers,
        seller_handler::get_seller,
        seller_handler::update_seller,
        seller_handler::delete_seller,
        // Book endpoints
        book_handler::create_book,
        book_handler::list_books,
        book_handler::get_book,
        book_handler::update_book,
        book_handler::delete_book,
    ),
    components(
        schemas(
            CreateSeller,
            UpdateSeller,
            SellerResponse,
            SellerDetailResponse,
            SellerListResponse,
            SellerBookResponse,
            CreateBook,
            UpdateBook,
            BookResponse,
            BookListResponse,
        )
    ),
    tags(
        (name = "Sellers", description = "Seller management; deleting a seller removes its books"),
        (name = "Books", description = "Book management")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        assert!(paths.iter().any(|p| p.as_str() == "/api/v1/seller/"));
        assert!(paths.iter().any(|p| p.as_str() == "/api/v1/seller/{id}"));
        assert!(paths.iter().any(|p| p.as_str() == "/api/v1/books/"));
        assert!(paths.iter().any(|p| p.as_str() == "/api/v1/books/{id}"));
    }
}

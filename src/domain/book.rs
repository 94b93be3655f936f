//! Book domain entity and related types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Book domain entity, always owned by exactly one seller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub year: i32,
    pub count_pages: i32,
    pub seller_id: i32,
}

/// Every writable book field; create and update both take the full set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookDetails {
    pub title: String,
    pub author: String,
    pub year: i32,
    pub count_pages: i32,
    pub seller_id: i32,
}

/// Book creation data transfer object
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateBook {
    #[validate(length(min = 1, max = 255, message = "title must be 1 to 255 characters"))]
    #[schema(example = "Wrong Code")]
    pub title: String,
    #[validate(length(min = 1, max = 255, message = "author must be 1 to 255 characters"))]
    #[schema(example = "Robert Martin")]
    pub author: String,
    /// Page count
    #[serde(rename = "pages", alias = "count_pages")]
    #[validate(range(min = 0, message = "Page count cannot be negative"))]
    #[schema(example = 104)]
    pub count_pages: i32,
    #[schema(example = 2007)]
    pub year: i32,
    /// Owning seller, must already exist
    #[schema(example = 1)]
    pub seller_id: i32,
}

impl From<CreateBook> for BookDetails {
    fn from(input: CreateBook) -> Self {
        Self {
            title: input.title,
            author: input.author,
            year: input.year,
            count_pages: input.count_pages,
            seller_id: input.seller_id,
        }
    }
}

/// Book update data transfer object (full overwrite).
///
/// A client may echo the book `id` back in the body; the path id wins.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateBook {
    #[serde(default)]
    #[schema(example = 1)]
    pub id: Option<i32>,
    #[validate(length(min = 1, max = 255, message = "title must be 1 to 255 characters"))]
    #[schema(example = "Mziri")]
    pub title: String,
    #[validate(length(min = 1, max = 255, message = "author must be 1 to 255 characters"))]
    #[schema(example = "Lermontov")]
    pub author: String,
    #[serde(alias = "pages")]
    #[validate(range(min = 0, message = "Page count cannot be negative"))]
    #[schema(example = 100)]
    pub count_pages: i32,
    #[schema(example = 2007)]
    pub year: i32,
    #[schema(example = 1)]
    pub seller_id: i32,
}

impl From<UpdateBook> for BookDetails {
    fn from(input: UpdateBook) -> Self {
        Self {
            title: input.title,
            author: input.author,
            year: input.year,
            count_pages: input.count_pages,
            seller_id: input.seller_id,
        }
    }
}

/// Book response with its owner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BookResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Wrong Code")]
    pub title: String,
    #[schema(example = "Robert Martin")]
    pub author: String,
    #[schema(example = 2007)]
    pub year: i32,
    #[schema(example = 104)]
    pub count_pages: i32,
    #[schema(example = 1)]
    pub seller_id: i32,
}

impl From<Book> for BookResponse {
    fn from(book: Book) -> Self {
        Self {
            id: book.id,
            title: book.title,
            author: book.author,
            year: book.year,
            count_pages: book.count_pages,
            seller_id: book.seller_id,
        }
    }
}

/// Book nested under its seller; the owner is implied by the parent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SellerBookResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Eugeny Onegin")]
    pub title: String,
    #[schema(example = "Pushkin")]
    pub author: String,
    #[schema(example = 2001)]
    pub year: i32,
    #[schema(example = 104)]
    pub count_pages: i32,
}

impl From<Book> for SellerBookResponse {
    fn from(book: Book) -> Self {
        Self {
            id: book.id,
            title: book.title,
            author: book.author,
            year: book.year,
            count_pages: book.count_pages,
        }
    }
}

/// Every book
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BookListResponse {
    pub books: Vec<BookResponse>,
}

impl From<Vec<Book>> for BookListResponse {
    fn from(books: Vec<Book>) -> Self {
        Self {
            books: books.into_iter().map(BookResponse::from).collect(),
        }
    }
}

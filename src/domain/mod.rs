//! Domain layer - Core business entities and logic
//!
//! Sellers own books. The types here are independent of the database and
//! HTTP layers; both map to and from them.

pub mod book;
pub mod password;
pub mod seller;

pub use book::{
    Book, BookDetails, BookListResponse, BookResponse, CreateBook, SellerBookResponse, UpdateBook,
};
pub use password::Password;
pub use seller::{
    is_valid_email, CreateSeller, Seller, SellerDetailResponse, SellerListResponse,
    SellerProfile, SellerResponse, SellerWithBooks, UpdateSeller,
};

//! HTTP request handlers.

pub mod book_handler;
pub mod seller_handler;

pub use book_handler::book_routes;
pub use seller_handler::seller_routes;

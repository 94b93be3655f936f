//! Seller domain entity and related types.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::book::{Book, SellerBookResponse};
use crate::config::EMAIL_PATTERN;

/// Compiled form of [`EMAIL_PATTERN`].
pub static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(EMAIL_PATTERN).expect("EMAIL_PATTERN is a valid regex"));

/// Check an address against the loose `local@domain.tld` rule.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Seller domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seller {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
}

/// Editable seller fields; an update always replaces all of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SellerProfile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// A seller together with every book it owns.
#[derive(Debug, Clone)]
pub struct SellerWithBooks {
    pub seller: Seller,
    pub books: Vec<Book>,
}

/// Seller creation data transfer object
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateSeller {
    #[validate(length(max = 50, message = "first_name must be at most 50 characters"))]
    #[schema(example = "Vasya")]
    pub first_name: String,
    #[validate(length(max = 50, message = "last_name must be at most 50 characters"))]
    #[schema(example = "Pupkin")]
    pub last_name: String,
    #[validate(
        regex(path = *EMAIL_REGEX, message = "incorrect email!"),
        length(max = 50, message = "email must be at most 50 characters")
    )]
    #[schema(example = "vp@ya.ru")]
    pub email: String,
    /// Plain text password; stored only as a salted hash
    #[schema(example = "123")]
    pub password: String,
}

impl CreateSeller {
    pub fn profile(&self) -> SellerProfile {
        SellerProfile {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
        }
    }
}

/// Seller update data transfer object.
///
/// A client may echo the seller `id` back in the body; the path id wins.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateSeller {
    #[serde(default)]
    #[schema(example = 1)]
    pub id: Option<i32>,
    #[validate(length(max = 50, message = "first_name must be at most 50 characters"))]
    #[schema(example = "Vasya")]
    pub first_name: String,
    #[validate(length(max = 50, message = "last_name must be at most 50 characters"))]
    #[schema(example = "Pupkin")]
    pub last_name: String,
    #[validate(
        regex(path = *EMAIL_REGEX, message = "incorrect email!"),
        length(max = 50, message = "email must be at most 50 characters")
    )]
    #[schema(example = "vp@ya.ru")]
    pub email: String,
}

impl From<UpdateSeller> for SellerProfile {
    fn from(update: UpdateSeller) -> Self {
        Self {
            first_name: update.first_name,
            last_name: update.last_name,
            email: update.email,
        }
    }
}

/// Seller response (safe to return to client, never carries the password)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SellerResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Vasya")]
    pub first_name: String,
    #[schema(example = "Pupkin")]
    pub last_name: String,
    #[schema(example = "vp@ya.ru")]
    pub email: String,
}

impl From<Seller> for SellerResponse {
    fn from(seller: Seller) -> Self {
        Self {
            id: seller.id,
            first_name: seller.first_name,
            last_name: seller.last_name,
            email: seller.email,
        }
    }
}

/// Single seller with its books nested
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SellerDetailResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Vasya")]
    pub first_name: String,
    #[schema(example = "Pupkin")]
    pub last_name: String,
    #[schema(example = "vp@ya.ru")]
    pub email: String,
    pub books: Vec<SellerBookResponse>,
}

impl From<SellerWithBooks> for SellerDetailResponse {
    fn from(value: SellerWithBooks) -> Self {
        let SellerWithBooks { seller, books } = value;
        Self {
            id: seller.id,
            first_name: seller.first_name,
            last_name: seller.last_name,
            email: seller.email,
            books: books.into_iter().map(SellerBookResponse::from).collect(),
        }
    }
}

/// Every seller, without books
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SellerListResponse {
    pub sellers: Vec<SellerResponse>,
}

impl From<Vec<Seller>> for SellerListResponse {
    fn from(sellers: Vec<Seller>) -> Self {
        Self {
            sellers: sellers.into_iter().map(SellerResponse::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seller() -> Seller {
        Seller {
            id: 1,
            first_name: "Vasya".to_string(),
            last_name: "Pupkin".to_string(),
            email: "vp@ya.ru".to_string(),
            password_hash: "$argon2id$secret".to_string(),
        }
    }

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("vp@ya.ru"));
        assert!(is_valid_email("first.last@mail.example.com"));
        assert!(!is_valid_email("vp.ya.ru"));
        assert!(!is_valid_email("vp@yaru"));
        assert!(!is_valid_email("@ya.ru"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_create_seller_validation() {
        let mut input = CreateSeller {
            first_name: "Vasya".to_string(),
            last_name: "Pupkin".to_string(),
            email: "vp@ya.ru".to_string(),
            password: "123".to_string(),
        };
        assert!(input.validate().is_ok());

        input.email = "not-an-email".to_string();
        let errors = input.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn test_update_seller_validation() {
        let input = UpdateSeller {
            id: None,
            first_name: "Kill".to_string(),
            last_name: "Me".to_string(),
            email: "broken@".to_string(),
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_seller_name_length_limit() {
        let input = CreateSeller {
            first_name: "V".repeat(51),
            last_name: "Pupkin".to_string(),
            email: "vp@ya.ru".to_string(),
            password: "123".to_string(),
        };
        let errors = input.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("first_name"));
    }

    #[test]
    fn test_seller_serialization_hides_password() {
        let json = serde_json::to_value(seller()).unwrap();
        assert!(json.get("password_hash").is_none());
        assert!(json.get("password").is_none());
        assert_eq!(json["email"], "vp@ya.ru");
    }

    #[test]
    fn test_detail_response_nests_books_without_owner() {
        let detail = SellerDetailResponse::from(SellerWithBooks {
            seller: seller(),
            books: vec![Book {
                id: 3,
                title: "Eugeny Onegin".to_string(),
                author: "Pushkin".to_string(),
                year: 2001,
                count_pages: 104,
                seller_id: 1,
            }],
        });

        let json = serde_json::to_value(detail).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "first_name": "Vasya",
                "last_name": "Pupkin",
                "email": "vp@ya.ru",
                "books": [{
                    "id": 3,
                    "title": "Eugeny Onegin",
                    "author": "Pushkin",
                    "year": 2001,
                    "count_pages": 104
                }]
            })
        );
    }
}

//! GraphQL wire format for the `books` query

use super::FetchResult;
use crate::error::FetchError;
use crate::types::Book;
use serde::{Deserialize, Serialize};

/// The one query the app ever sends
pub const BOOKS_QUERY: &str =
    "query GetBooks { books { title author coverPhotoURL readingLevel } }";

/// Request body posted to the GraphQL endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQlRequest {
    pub query: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation_name: Option<String>,
}

impl GraphQlRequest {
    pub fn books() -> Self {
        Self {
            query: BOOKS_QUERY.to_string(),
            operation_name: Some("GetBooks".to_string()),
        }
    }
}

/// Response envelope
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphQlResponse {
    #[serde(default)]
    pub data: Option<BooksData>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<GraphQlError>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BooksData {
    pub books: Vec<Book>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

impl GraphQlResponse {
    pub fn books(books: Vec<Book>) -> Self {
        Self {
            data: Some(BooksData { books }),
            errors: Vec::new(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            data: None,
            errors: vec![GraphQlError {
                message: message.into(),
            }],
        }
    }

    /// Extract the books, treating any reported error as a failed fetch
    pub fn into_books(self) -> FetchResult<Vec<Book>> {
        if !self.errors.is_empty() {
            let messages: Vec<_> = self.errors.into_iter().map(|e| e.message).collect();
            return Err(FetchError::Server(messages.join("; ")));
        }
        self.data
            .map(|data| data.books)
            .ok_or_else(|| FetchError::Malformed("response carries no data".to_string()))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Payload {
    Bare(Vec<Book>),
    Envelope(GraphQlResponse),
}

/// Decode either a bare array of books or a GraphQL response envelope
pub fn decode_books(bytes: &[u8]) -> FetchResult<Vec<Book>> {
    match serde_json::from_slice::<Payload>(bytes)? {
        Payload::Bare(books) => Ok(books),
        Payload::Envelope(response) => response.into_books(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_envelope() {
        let body = br#"{"data":{"books":[{"title":"Frog and Toad","author":"Lobel","coverPhotoURL":"frog.jpg","readingLevel":"1"}]}}"#;
        let books = decode_books(body).unwrap();
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].cover_photo_url, "frog.jpg");
    }

    #[test]
    fn test_decode_bare_array() {
        let body = br#"[{"title":"Goodnight Moon","author":"Brown","coverPhotoURL":"moon.jpg","readingLevel":"1"}]"#;
        let books = decode_books(body).unwrap();
        assert_eq!(books[0].title, "Goodnight Moon");
    }

    #[test]
    fn test_empty_catalog_is_not_an_error() {
        let books = decode_books(br#"{"data":{"books":[]}}"#).unwrap();
        assert!(books.is_empty());
    }

    #[test]
    fn test_server_errors_fail() {
        let body = br#"{"data":null,"errors":[{"message":"db down"}]}"#;
        assert!(matches!(decode_books(body), Err(FetchError::Server(msg)) if msg == "db down"));
    }

    #[test]
    fn test_missing_data_is_malformed() {
        assert!(matches!(decode_books(b"{}"), Err(FetchError::Malformed(_))));
        assert!(matches!(decode_books(b"not json"), Err(FetchError::Malformed(_))));
    }

    #[test]
    fn test_request_body() {
        let json = serde_json::to_value(GraphQlRequest::books()).unwrap();
        assert_eq!(json["operationName"], "GetBooks");
        assert!(json["query"].as_str().unwrap().contains("coverPhotoURL"));
    }
}

//! Book model and request shapes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Book record as the upstream stores it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Book {
    pub id: i64,
    #[serde(rename = "Book_Title")]
    pub title: String,
    #[serde(rename = "Author_id", default)]
    pub author_id: Option<i64>,
    #[serde(rename = "Publisher_id", default)]
    pub publisher_id: Option<i64>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Query shape for the book list
#[derive(Debug, Clone, Default, Serialize)]
pub struct BookQuery {
    #[serde(rename = "Book_Title", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
}

/// Create book request
#[derive(Debug, Clone, Serialize)]
pub struct CreateBook {
    #[serde(rename = "Book_Title")]
    pub title: String,
    #[serde(rename = "Author_id", skip_serializing_if = "Option::is_none")]
    pub author_id: Option<i64>,
    #[serde(rename = "Publisher_id", skip_serializing_if = "Option::is_none")]
    pub publisher_id: Option<i64>,
}

/// Update book request
#[derive(Debug, Clone, Serialize)]
pub struct UpdateBook {
    #[serde(rename = "Book_Title")]
    pub title: String,
    #[serde(rename = "Author_id", skip_serializing_if = "Option::is_none")]
    pub author_id: Option<i64>,
    #[serde(rename = "Publisher_id", skip_serializing_if = "Option::is_none")]
    pub publisher_id: Option<i64>,
}

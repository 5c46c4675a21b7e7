//! Author model and request shapes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Author record as the upstream stores it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Author {
    pub id: i64,
    #[serde(rename = "Author_Name")]
    pub name: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Query shape for the author list
#[derive(Debug, Clone, Default, Serialize)]
pub struct AuthorQuery {
    /// Substring filter; empty matches everything
    #[serde(rename = "Author_Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
}

/// Create author request
#[derive(Debug, Clone, Serialize)]
pub struct CreateAuthor {
    #[serde(rename = "Author_Name")]
    pub name: String,
}

/// Update author request
#[derive(Debug, Clone, Serialize)]
pub struct UpdateAuthor {
    #[serde(rename = "Author_Name")]
    pub name: String,
}

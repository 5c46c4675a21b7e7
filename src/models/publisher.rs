//! Publisher model and request shapes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Publisher record as the upstream stores it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Publisher {
    pub id: i64,
    #[serde(rename = "Publisher_Name")]
    pub name: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Query shape for the publisher list
#[derive(Debug, Clone, Default, Serialize)]
pub struct PublisherQuery {
    #[serde(rename = "Publisher_Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
}

/// Create publisher request
#[derive(Debug, Clone, Serialize)]
pub struct CreatePublisher {
    #[serde(rename = "Publisher_Name")]
    pub name: String,
}

/// Update publisher request
#[derive(Debug, Clone, Serialize)]
pub struct UpdatePublisher {
    #[serde(rename = "Publisher_Name")]
    pub name: String,
}

//! Paginated list payload shared by all list endpoints

use serde::{Deserialize, Serialize};

/// Page of records plus the unfiltered total, as nested inside the
/// envelope's `data` field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub total: i64,
}

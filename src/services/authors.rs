//! Author resource client

use serde_json::Value;

use crate::{
    client::ApiClient,
    error::ApiResult,
    models::{
        author::{Author, AuthorQuery, CreateAuthor, UpdateAuthor},
        page::PaginatedResponse,
    },
};

/// Bindings for the `/authors` endpoints.
#[derive(Clone)]
pub struct AuthorsClient {
    client: ApiClient,
}

impl AuthorsClient {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// List authors with name filter and pagination.
    pub async fn list(&self, query: &AuthorQuery) -> ApiResult<PaginatedResponse<Author>> {
        self.client.get("/authors", query).await
    }

    /// Create an author; resolves to the stored record.
    pub async fn create(&self, name: &str) -> ApiResult<Author> {
        self.client
            .post("/authors", &CreateAuthor { name: name.to_string() })
            .await
    }

    /// Rename an existing author.
    pub async fn update(&self, id: i64, name: &str) -> ApiResult<Author> {
        self.client
            .put(
                &format!("/authors/{id}"),
                &UpdateAuthor { name: name.to_string() },
            )
            .await
    }

    /// Delete an author by id. The caller keeps its own list current; no
    /// re-fetch happens here.
    pub async fn delete(&self, id: i64) -> ApiResult<()> {
        self.client
            .delete::<Value>(&format!("/authors/{id}"))
            .await?;
        Ok(())
    }
}

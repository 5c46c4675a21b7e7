//! Publisher resource client

use serde_json::Value;

use crate::{
    client::ApiClient,
    error::ApiResult,
    models::{
        page::PaginatedResponse,
        publisher::{CreatePublisher, Publisher, PublisherQuery, UpdatePublisher},
    },
};

/// Bindings for the `/publishers` endpoints.
#[derive(Clone)]
pub struct PublishersClient {
    client: ApiClient,
}

impl PublishersClient {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// List publishers with name filter and pagination.
    pub async fn list(&self, query: &PublisherQuery) -> ApiResult<PaginatedResponse<Publisher>> {
        self.client.get("/publishers", query).await
    }

    /// Create a publisher; resolves to the stored record.
    pub async fn create(&self, name: &str) -> ApiResult<Publisher> {
        self.client
            .post("/publishers", &CreatePublisher { name: name.to_string() })
            .await
    }

    /// Rename an existing publisher.
    pub async fn update(&self, id: i64, name: &str) -> ApiResult<Publisher> {
        self.client
            .put(
                &format!("/publishers/{id}"),
                &UpdatePublisher { name: name.to_string() },
            )
            .await
    }

    /// Delete a publisher by id.
    pub async fn delete(&self, id: i64) -> ApiResult<()> {
        self.client
            .delete::<Value>(&format!("/publishers/{id}"))
            .await?;
        Ok(())
    }
}

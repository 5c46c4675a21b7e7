//! Book resource client

use serde_json::Value;

use crate::{
    client::ApiClient,
    error::ApiResult,
    models::{
        book::{Book, BookQuery, CreateBook, UpdateBook},
        page::PaginatedResponse,
    },
};

/// Bindings for the `/books` endpoints.
#[derive(Clone)]
pub struct BooksClient {
    client: ApiClient,
}

impl BooksClient {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// List books with title filter and pagination.
    pub async fn list(&self, query: &BookQuery) -> ApiResult<PaginatedResponse<Book>> {
        self.client.get("/books", query).await
    }

    /// Create a book; resolves to the stored record.
    pub async fn create(&self, book: &CreateBook) -> ApiResult<Book> {
        self.client.post("/books", book).await
    }

    /// Update an existing book.
    pub async fn update(&self, id: i64, book: &UpdateBook) -> ApiResult<Book> {
        self.client.put(&format!("/books/{id}"), book).await
    }

    /// Delete a book by id.
    pub async fn delete(&self, id: i64) -> ApiResult<()> {
        self.client.delete::<Value>(&format!("/books/{id}")).await?;
        Ok(())
    }
}

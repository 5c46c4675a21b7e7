//! Resource clients for the admin API
//!
//! Each client binds a fixed set of (verb, path, parameter-shape) triples to
//! the request pipeline; nothing here does more than parameter marshaling.

pub mod auth;
pub mod authors;
pub mod books;
pub mod publishers;

use crate::client::ApiClient;

/// Container for all resource clients
#[derive(Clone)]
pub struct Services {
    pub auth: auth::AuthClient,
    pub authors: authors::AuthorsClient,
    pub publishers: publishers::PublishersClient,
    pub books: books::BooksClient,
}

impl Services {
    /// Create all resource clients sharing one pipeline
    pub fn new(client: ApiClient) -> Self {
        Self {
            auth: auth::AuthClient::new(client.clone()),
            authors: authors::AuthorsClient::new(client.clone()),
            publishers: publishers::PublishersClient::new(client.clone()),
            books: books::BooksClient::new(client),
        }
    }
}

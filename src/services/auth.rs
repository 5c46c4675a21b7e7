//! Authentication resource client

use crate::{
    client::ApiClient,
    error::ApiResult,
    models::user::{LoginRequest, RegisterRequest, Session, User},
};

/// Bindings for the `/auth` endpoints.
#[derive(Clone)]
pub struct AuthClient {
    client: ApiClient,
}

impl AuthClient {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Exchange credentials for a session. Persisting the returned token is
    /// the caller's job; the pipeline only ever reads the store.
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<Session> {
        self.client
            .post(
                "/auth/login",
                &LoginRequest {
                    email: email.to_string(),
                    password: password.to_string(),
                },
            )
            .await
    }

    /// Create a new account; resolves to the stored user record.
    pub async fn register(&self, username: &str, email: &str, password: &str) -> ApiResult<User> {
        self.client
            .post(
                "/auth/register",
                &RegisterRequest {
                    username: username.to_string(),
                    email: email.to_string(),
                    password: password.to_string(),
                },
            )
            .await
    }
}

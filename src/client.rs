//! Request pipeline for the Biblion admin API
//!
//! Every call flows through one dispatch path: attach the bearer credential
//! when the store holds one, rewrite the logical path behind the same-origin
//! proxy prefix, then decode the `{code, message, data}` envelope into either
//! the declared result type or one of the two error kinds. No retry, no
//! deduplication of identical in-flight requests.

use std::sync::Arc;

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::{
    config::ApiConfig,
    credentials::CredentialProvider,
    envelope::Envelope,
    error::{ApiError, ApiResult, TransportError},
    notify::Notifier,
};

static APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// HTTP pipeline shared by every resource client.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    config: ApiConfig,
    credentials: Arc<dyn CredentialProvider>,
    notifier: Arc<dyn Notifier>,
}

impl ApiClient {
    pub fn new(
        config: ApiConfig,
        credentials: Arc<dyn CredentialProvider>,
        notifier: Arc<dyn Notifier>,
    ) -> ApiResult<Self> {
        let http = Client::builder()
            .user_agent(APP_USER_AGENT)
            .timeout(config.timeout())
            .build()
            .map_err(TransportError::Http)?;

        Ok(Self {
            http,
            config,
            credentials,
            notifier,
        })
    }

    /// Dispatched URL: base origin, fixed proxy segment, then the logical
    /// path. The upstream host is resolved behind the proxy, never here.
    fn endpoint_url(&self, path: &str) -> String {
        let url = format!(
            "{}{}{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.proxy_prefix,
            path
        );

        tracing::debug!("endpoint URL: {}", url);

        url
    }

    pub async fn get<T, Q>(&self, path: &str, query: &Q) -> ApiResult<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let request = self.http.get(self.endpoint_url(path)).query(query);
        self.dispatch(request).await
    }

    pub async fn post<T, B>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = self.http.post(self.endpoint_url(path)).json(body);
        self.dispatch(request).await
    }

    pub async fn put<T, B>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = self.http.put(self.endpoint_url(path)).json(body);
        self.dispatch(request).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let request = self.http.delete(self.endpoint_url(path));
        self.dispatch(request).await
    }

    /// Single decode-and-unwrap step every response goes through.
    ///
    /// The HTTP status is never consulted on its own: a body that decodes as
    /// the envelope is judged by its `code`, anything else is a transport
    /// failure.
    async fn dispatch<T: DeserializeOwned>(&self, request: RequestBuilder) -> ApiResult<T> {
        let request = match self.credentials.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        let response = request.send().await.map_err(|err| {
            tracing::error!("request failed: {}", err);
            TransportError::Http(err)
        })?;

        let url = response.url().clone();
        let body = response.bytes().await.map_err(|err| {
            tracing::error!(url = %url, "failed to read response body: {}", err);
            TransportError::Http(err)
        })?;

        let envelope: Envelope = serde_json::from_slice(&body).map_err(|err| {
            tracing::error!(url = %url, "unparseable response envelope: {}", err);
            TransportError::Envelope(err)
        })?;

        if envelope.is_success() {
            envelope.into_data()
        } else {
            let message = envelope.failure_message().to_string();
            self.notifier.failure(&message);
            Err(ApiError::Application { message })
        }
    }
}

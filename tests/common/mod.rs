//! Shared helpers for the integration suites
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use biblion_client::client::ApiClient;
use biblion_client::config::ApiConfig;
use biblion_client::credentials::CredentialProvider;
use biblion_client::notify::Notifier;

/// Notifier capturing every message for assertions.
#[derive(Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn failure(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

pub fn api_config(base_url: &str) -> ApiConfig {
    ApiConfig {
        base_url: base_url.to_string(),
        ..ApiConfig::default()
    }
}

pub fn make_client(
    base_url: &str,
    credentials: Arc<dyn CredentialProvider>,
    notifier: Arc<dyn Notifier>,
) -> ApiClient {
    ApiClient::new(api_config(base_url), credentials, notifier).expect("client construction")
}

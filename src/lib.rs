//! Biblion Admin Client
//!
//! Rust client for the Biblion library-management admin API: a request
//! pipeline handling bearer credentials, same-origin proxy rewriting and the
//! `{code, message, data}` response envelope, plus per-resource clients for
//! authors, publishers, books and authentication.

pub mod client;
pub mod config;
pub mod credentials;
pub mod envelope;
pub mod error;
pub mod models;
pub mod notify;
pub mod services;

pub use client::ApiClient;
pub use config::AppConfig;
pub use error::{ApiError, ApiResult, TransportError};

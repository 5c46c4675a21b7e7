//! Bearer-credential storage
//!
//! One token string under a fixed path, by default below the user's
//! configuration directory. The pipeline only ever reads the store, on every
//! outgoing request; writing is the login flow's job.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Read side of the token store, injected into the request pipeline.
pub trait CredentialProvider: Send + Sync {
    /// Current bearer token, if one is persisted. Absence is not an error.
    fn token(&self) -> Option<String>;
}

/// File-backed token store: one token under a fixed path.
#[derive(Debug, Clone)]
pub struct TokenFile {
    path: PathBuf,
}

impl TokenFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default location under the user's configuration directory.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("biblion")
            .join("token")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persist a new token. Used by the login flow, never by the pipeline.
    pub fn store(&self, token: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, token)
    }

    /// Drop the persisted token. Missing file is not an error.
    pub fn clear(&self) -> io::Result<()> {
        match fs::remove_file(&self.path) {
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            other => other,
        }
    }
}

impl CredentialProvider for TokenFile {
    fn token(&self) -> Option<String> {
        let contents = fs::read_to_string(&self.path).ok()?;
        let token = contents.trim();
        if token.is_empty() {
            None
        } else {
            Some(token.to_string())
        }
    }
}

/// Provider that never supplies a token.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCredentials;

impl CredentialProvider for NoCredentials {
    fn token(&self) -> Option<String> {
        None
    }
}

/// Fixed token, for tests and scripted runs.
#[derive(Debug, Clone)]
pub struct StaticToken(pub String);

impl CredentialProvider for StaticToken {
    fn token(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_no_token() {
        let dir = tempfile::tempdir().unwrap();
        let store = TokenFile::new(dir.path().join("token"));
        assert!(store.token().is_none());
    }

    #[test]
    fn stores_and_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let store = TokenFile::new(dir.path().join("nested").join("token"));
        store.store("tok-123").unwrap();
        assert_eq!(store.token().as_deref(), Some("tok-123"));
    }

    #[test]
    fn trims_whitespace() {
        let dir = tempfile::tempdir().unwrap();
        let store = TokenFile::new(dir.path().join("token"));
        store.store("  tok-123\n").unwrap();
        assert_eq!(store.token().as_deref(), Some("tok-123"));
    }

    #[test]
    fn empty_file_yields_no_token() {
        let dir = tempfile::tempdir().unwrap();
        let store = TokenFile::new(dir.path().join("token"));
        store.store("").unwrap();
        assert!(store.token().is_none());
    }

    #[test]
    fn clear_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = TokenFile::new(dir.path().join("token"));
        store.store("tok").unwrap();
        store.clear().unwrap();
        store.clear().unwrap();
        assert!(store.token().is_none());
    }
}

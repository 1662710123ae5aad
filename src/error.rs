use std::fmt;

use thiserror::Error;

use crate::config::ConfigError;
use crate::provider::StorageErrorClass;

/// Error types that can occur while resolving a provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The provider identity is not one of the supported providers
    #[error("Unsupported provider: {0}")]
    UnsupportedProvider(String),
    /// Loading the configuration store failed
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// A storage operation failure, tagged with the provider-specific class
/// (`S3ResponseError`, `GSCopyError`, ...) that signals it.
///
/// The resolver never raises these; it hands out the right
/// [`StorageErrorClass`] so a transport can.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageError {
    class: StorageErrorClass,
    status: Option<u16>,
    reason: String,
    body: Option<String>,
}

impl StorageError {
    pub(crate) fn new(class: StorageErrorClass, reason: impl Into<String>) -> Self {
        Self {
            class,
            status: None,
            reason: reason.into(),
            body: None,
        }
    }

    /// Attaches the HTTP status of the failed response.
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    /// Attaches the raw body of the failed response.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn class(&self) -> StorageErrorClass {
        self.class
    }

    pub fn status(&self) -> Option<u16> {
        self.status
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }

    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(status) => write!(f, "{}: {} {}", self.class, status, self.reason),
            None => write!(f, "{}: {}", self.class, self.reason),
        }
    }
}

impl std::error::Error for StorageError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::{ProviderKind, StorageErrorKind};

    #[test]
    fn test_unsupported_provider_display() {
        let err = ProviderError::UnsupportedProvider("azure".to_string());
        assert_eq!(err.to_string(), "Unsupported provider: azure");
    }

    #[test]
    fn test_storage_error_display_with_status() {
        let class = StorageErrorClass::new(ProviderKind::Aws, StorageErrorKind::Response);
        let err = class
            .error("Forbidden")
            .with_status(403)
            .with_body("<Error><Code>AccessDenied</Code></Error>");
        assert_eq!(err.to_string(), "S3ResponseError: 403 Forbidden");
        assert_eq!(err.status(), Some(403));
        assert_eq!(err.body(), Some("<Error><Code>AccessDenied</Code></Error>"));
    }

    #[test]
    fn test_storage_error_display_without_status() {
        let class = StorageErrorClass::new(ProviderKind::Google, StorageErrorKind::Data);
        let err = class.error("checksum mismatch");
        assert_eq!(err.to_string(), "GSDataError: checksum mismatch");
        assert_eq!(err.class().kind(), StorageErrorKind::Data);
    }
}

use std::fmt;

use serde::{Serialize, Serializer};

use super::kind::ProviderKind;
use crate::error::StorageError;

/// Logical category of a failed storage operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageErrorKind {
    Copy,
    Create,
    Data,
    Permissions,
    Response,
}

impl StorageErrorKind {
    pub const ALL: [StorageErrorKind; 5] = [
        StorageErrorKind::Copy,
        StorageErrorKind::Create,
        StorageErrorKind::Data,
        StorageErrorKind::Permissions,
        StorageErrorKind::Response,
    ];
}

/// Provider-specific signaling type for a storage error kind, e.g.
/// `S3CopyError` or `GSResponseError`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StorageErrorClass {
    provider: ProviderKind,
    kind: StorageErrorKind,
}

impl StorageErrorClass {
    pub const fn new(provider: ProviderKind, kind: StorageErrorKind) -> Self {
        Self { provider, kind }
    }

    pub fn provider(self) -> ProviderKind {
        self.provider
    }

    pub fn kind(self) -> StorageErrorKind {
        self.kind
    }

    pub fn name(self) -> &'static str {
        let (s3, gs) = match self.kind {
            StorageErrorKind::Copy => ("S3CopyError", "GSCopyError"),
            StorageErrorKind::Create => ("S3CreateError", "GSCreateError"),
            StorageErrorKind::Data => ("S3DataError", "GSDataError"),
            StorageErrorKind::Permissions => ("S3PermissionsError", "GSPermissionsError"),
            StorageErrorKind::Response => ("S3ResponseError", "GSResponseError"),
        };
        match self.provider {
            ProviderKind::Aws => s3,
            ProviderKind::Google => gs,
        }
    }

    /// Creates an error of this class.
    pub fn error(self, reason: impl Into<String>) -> StorageError {
        StorageError::new(self, reason)
    }
}

impl fmt::Display for StorageErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for StorageErrorClass {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

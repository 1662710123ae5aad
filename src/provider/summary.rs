use std::collections::BTreeMap;

use serde::Serialize;

use super::acl::AclSchema;
use super::credentials::CredentialSources;
use super::errors::{StorageErrorClass, StorageErrorKind};
use super::headers::HeaderRole;
use super::kind::ProviderKind;
use super::resolver::Provider;

/// Serializable view of a resolved [`Provider`]. Carries which credentials
/// were found and where, never their values.
#[derive(Debug, Clone, Serialize)]
pub struct ProviderSummary {
    pub provider: ProviderKind,
    pub provider_name: &'static str,
    pub supports_chunked_transfer: bool,
    pub default_host: Option<String>,
    pub has_access_key: bool,
    pub has_secret_key: bool,
    pub has_security_token: bool,
    pub credential_sources: CredentialSources,
    pub acl_schema: AclSchema,
    pub canned_acls: Vec<&'static str>,
    pub headers: BTreeMap<HeaderRole, Option<&'static str>>,
    pub errors: BTreeMap<StorageErrorKind, StorageErrorClass>,
}

impl ProviderSummary {
    pub(crate) fn from_provider(provider: &Provider) -> Self {
        Self {
            provider: provider.kind(),
            provider_name: provider.provider_name(),
            supports_chunked_transfer: provider.supports_chunked_transfer(),
            default_host: provider.default_host().map(str::to_string),
            has_access_key: provider.access_key().is_some(),
            has_secret_key: provider.secret_key().is_some(),
            has_security_token: provider.security_token().is_some(),
            credential_sources: provider.credential_sources(),
            acl_schema: provider.acl_schema(),
            canned_acls: provider.canned_acls().to_vec(),
            headers: provider.headers().entries().collect(),
            errors: StorageErrorKind::ALL
                .into_iter()
                .map(|kind| (kind, provider.error_class(kind)))
                .collect(),
        }
    }
}

use std::path::Path;

use secrecy::{SecretString, SecretVec};

use crate::config::{ConfigStore, CREDENTIALS_SECTION};
use crate::env::{Env, OsEnv};
use crate::error::ProviderError;

use super::acl::{canned_acls, AclSchema};
use super::credentials::{self, CredentialSources, Credentials};
use super::errors::{StorageErrorClass, StorageErrorKind};
use super::headers::{HeaderRole, HeaderTable};
use super::kind::ProviderKind;
use super::summary::ProviderSummary;

/// Everything a transport needs to know about one storage provider,
/// resolved once at construction.
#[derive(Debug)]
pub struct Provider {
    kind: ProviderKind,
    host: Option<String>,
    credentials: Credentials,
    sources: CredentialSources,
    headers: &'static HeaderTable,
}

/// Builder for [`Provider`].
pub struct ProviderBuilder {
    name: String,
    access_key: Option<String>,
    secret_key: Option<String>,
    security_token: Option<String>,
    config: ConfigStore,
    env: Box<dyn Env>,
}

impl ProviderBuilder {
    /// Starts a builder for the provider called `name` (`"aws"` or
    /// `"google"`). The name is validated by [`build`](Self::build).
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            access_key: None,
            secret_key: None,
            security_token: None,
            config: ConfigStore::default(),
            env: Box::new(OsEnv),
        }
    }

    pub fn for_kind(kind: ProviderKind) -> Self {
        Self::new(kind.as_str())
    }

    /// Sets the access key, bypassing environment and config lookup.
    pub fn access_key(mut self, key: impl Into<String>) -> Self {
        self.access_key = Some(key.into());
        self
    }

    /// Sets the secret key, bypassing environment and config lookup.
    pub fn secret_key(mut self, key: impl Into<String>) -> Self {
        self.secret_key = Some(key.into());
        self
    }

    pub fn security_token(mut self, token: impl Into<String>) -> Self {
        self.security_token = Some(token.into());
        self
    }

    /// Sets the configuration store consulted for credentials and host
    /// overrides. Defaults to an empty store.
    pub fn config(mut self, config: ConfigStore) -> Self {
        self.config = config;
        self
    }

    /// Loads the configuration store from `path`, replacing any store set
    /// earlier.
    pub fn config_file(self, path: impl AsRef<Path>) -> Result<Self, ProviderError> {
        let config = ConfigStore::load(path)?;
        Ok(self.config(config))
    }

    /// Sets the environment consulted for credentials. Defaults to the
    /// process environment.
    pub fn env(mut self, env: impl Env + 'static) -> Self {
        self.env = Box::new(env);
        self
    }

    pub fn build(self) -> Result<Provider, ProviderError> {
        let kind: ProviderKind = self.name.parse()?;
        Ok(self.resolve(kind))
    }

    fn resolve(self, kind: ProviderKind) -> Provider {
        let (credentials, sources) = credentials::resolve(
            kind,
            self.access_key,
            self.secret_key,
            self.security_token,
            self.env.as_ref(),
            &self.config,
        );
        log::debug!(
            "Resolved provider credentials. provider={} access_key={:?} secret_key={:?}",
            kind,
            sources.access_key,
            sources.secret_key,
        );

        let host_option = kind.host_option();
        let host = self
            .config
            .get(CREDENTIALS_SECTION, &host_option)
            .map(str::to_string);
        if let Some(host) = &host {
            log::debug!("Using configured host. provider={kind} option={host_option} host={host}");
        }

        Provider {
            kind,
            host,
            credentials,
            sources,
            headers: HeaderTable::for_provider(kind),
        }
    }
}

impl Provider {
    pub fn builder(name: impl Into<String>) -> ProviderBuilder {
        ProviderBuilder::new(name)
    }

    pub fn kind(&self) -> ProviderKind {
        self.kind
    }

    /// Canonical identity (`aws`, `google`).
    pub fn name(&self) -> &'static str {
        self.kind.as_str()
    }

    /// Short name used in host construction (`s3`, `gs`).
    pub fn provider_name(&self) -> &'static str {
        self.kind.provider_name()
    }

    pub fn supports_chunked_transfer(&self) -> bool {
        self.kind.supports_chunked_transfer()
    }

    /// Host from the config store's `<name>_host` option, if any.
    pub fn default_host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    pub fn access_key(&self) -> Option<&str> {
        self.credentials.access_key.as_deref()
    }

    pub fn secret_key(&self) -> Option<&SecretVec<u8>> {
        self.credentials.secret_key.as_ref()
    }

    pub fn security_token(&self) -> Option<&SecretString> {
        self.credentials.security_token.as_ref()
    }

    /// Replaces the session token, e.g. after the owner of the connection
    /// rotates temporary credentials.
    pub fn set_security_token(&mut self, token: impl Into<String>) {
        self.credentials.security_token = Some(SecretString::new(token.into()));
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn credential_sources(&self) -> CredentialSources {
        self.sources
    }

    pub fn acl_schema(&self) -> AclSchema {
        AclSchema::for_provider(self.kind)
    }

    pub fn canned_acls(&self) -> &'static [&'static str] {
        canned_acls(self.kind)
    }

    pub fn is_canned_acl(&self, acl: &str) -> bool {
        self.canned_acls().contains(&acl)
    }

    pub fn headers(&self) -> &'static HeaderTable {
        self.headers
    }

    pub fn header(&self, role: HeaderRole) -> Option<&'static str> {
        self.headers.get(role)
    }

    pub fn header_prefix(&self) -> &'static str {
        self.headers.header_prefix
    }

    pub fn metadata_prefix(&self) -> &'static str {
        self.headers.metadata_prefix
    }

    pub fn acl_header(&self) -> Option<&'static str> {
        self.headers.acl
    }

    /// Authentication scheme label placed in the `Authorization` header.
    pub fn auth_header(&self) -> &'static str {
        self.headers.auth
    }

    pub fn copy_source_header(&self) -> Option<&'static str> {
        self.headers.copy_source
    }

    pub fn copy_source_version_id_header(&self) -> Option<&'static str> {
        self.headers.copy_source_version_id
    }

    pub fn copy_source_range_header(&self) -> Option<&'static str> {
        self.headers.copy_source_range
    }

    pub fn date_header(&self) -> Option<&'static str> {
        self.headers.date
    }

    pub fn delete_marker_header(&self) -> Option<&'static str> {
        self.headers.delete_marker
    }

    pub fn metadata_directive_header(&self) -> Option<&'static str> {
        self.headers.metadata_directive
    }

    pub fn resumable_upload_header(&self) -> Option<&'static str> {
        self.headers.resumable_upload
    }

    pub fn security_token_header(&self) -> Option<&'static str> {
        self.headers.security_token
    }

    pub fn server_side_encryption_header(&self) -> Option<&'static str> {
        self.headers.server_side_encryption
    }

    pub fn storage_class_header(&self) -> Option<&'static str> {
        self.headers.storage_class
    }

    pub fn version_id_header(&self) -> Option<&'static str> {
        self.headers.version_id
    }

    pub fn mfa_header(&self) -> Option<&'static str> {
        self.headers.mfa
    }

    pub fn error_class(&self, kind: StorageErrorKind) -> StorageErrorClass {
        StorageErrorClass::new(self.kind, kind)
    }

    pub fn storage_copy_error(&self) -> StorageErrorClass {
        self.error_class(StorageErrorKind::Copy)
    }

    pub fn storage_create_error(&self) -> StorageErrorClass {
        self.error_class(StorageErrorKind::Create)
    }

    pub fn storage_data_error(&self) -> StorageErrorClass {
        self.error_class(StorageErrorKind::Data)
    }

    pub fn storage_permissions_error(&self) -> StorageErrorClass {
        self.error_class(StorageErrorKind::Permissions)
    }

    pub fn storage_response_error(&self) -> StorageErrorClass {
        self.error_class(StorageErrorKind::Response)
    }

    /// Secret-free snapshot of the resolved configuration.
    pub fn summary(&self) -> ProviderSummary {
        ProviderSummary::from_provider(self)
    }
}

/// The AWS provider, resolved from the process environment and the default
/// config search path.
///
/// A config file that cannot be read is logged and treated as empty.
pub fn get_default() -> Provider {
    let env = OsEnv;
    let config = ConfigStore::load_default(&env).unwrap_or_else(|err| {
        log::warn!("Ignoring unreadable config. error={err}");
        ConfigStore::default()
    });
    ProviderBuilder::for_kind(ProviderKind::Aws)
        .config(config)
        .env(env)
        .resolve(ProviderKind::Aws)
}

use std::fmt;

use secrecy::{ExposeSecret, SecretString, SecretVec};
use serde::Serialize;

use crate::config::{ConfigStore, CREDENTIALS_SECTION};
use crate::env::Env;

use super::kind::ProviderKind;

/// Where a credential value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CredentialSource {
    Explicit,
    Environment,
    ConfigStore,
    Unset,
}

/// Sources of the access key and secret key, for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CredentialSources {
    pub access_key: CredentialSource,
    pub secret_key: CredentialSource,
}

/// Resolved credentials. The secret key is kept as raw bytes so it can be
/// handed directly to HMAC-based signers.
#[derive(Default)]
pub struct Credentials {
    pub access_key: Option<String>,
    pub secret_key: Option<SecretVec<u8>>,
    pub security_token: Option<SecretString>,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key", &self.access_key)
            .field("secret_key", &self.secret_key.as_ref().map(|_| "[REDACTED]"))
            .field("security_token", &self.security_token)
            .finish()
    }
}

impl Credentials {
    pub fn secret_key_bytes(&self) -> Option<&[u8]> {
        self.secret_key
            .as_ref()
            .map(|secret| secret.expose_secret().as_slice())
    }

    pub fn is_complete(&self) -> bool {
        self.access_key.is_some() && self.secret_key.is_some()
    }
}

/// Resolves one credential value: explicit argument, then the upper-cased
/// environment variable, then the `Credentials` config section.
pub(crate) fn resolve_value(
    explicit: Option<String>,
    name: &str,
    env: &dyn Env,
    config: &ConfigStore,
) -> (Option<String>, CredentialSource) {
    if let Some(value) = explicit {
        return (Some(value), CredentialSource::Explicit);
    }
    if let Some(value) = env.var(&name.to_uppercase()) {
        return (Some(value), CredentialSource::Environment);
    }
    if let Some(value) = config.get(CREDENTIALS_SECTION, name) {
        return (Some(value.to_string()), CredentialSource::ConfigStore);
    }
    (None, CredentialSource::Unset)
}

pub(crate) fn resolve(
    kind: ProviderKind,
    access_key: Option<String>,
    secret_key: Option<String>,
    security_token: Option<String>,
    env: &dyn Env,
    config: &ConfigStore,
) -> (Credentials, CredentialSources) {
    let (access_key_name, secret_key_name) = kind.credential_names();
    let (access_key, access_source) = resolve_value(access_key, access_key_name, env, config);
    let (secret_key, secret_source) = resolve_value(secret_key, secret_key_name, env, config);

    let credentials = Credentials {
        access_key,
        secret_key: secret_key.map(|key| SecretVec::new(key.into_bytes())),
        security_token: security_token.map(SecretString::new),
    };
    let sources = CredentialSources {
        access_key: access_source,
        secret_key: secret_source,
    };
    (credentials, sources)
}

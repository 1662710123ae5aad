use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ProviderError;

/// Supported storage providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    Aws,
    Google,
}

impl ProviderKind {
    pub const ALL: [ProviderKind; 2] = [ProviderKind::Aws, ProviderKind::Google];

    /// Canonical identity, as accepted by [`FromStr`](std::str::FromStr).
    pub fn as_str(self) -> &'static str {
        match self {
            ProviderKind::Aws => "aws",
            ProviderKind::Google => "google",
        }
    }

    /// Short name used in host construction and config keys.
    pub fn provider_name(self) -> &'static str {
        match self {
            ProviderKind::Aws => "s3",
            ProviderKind::Google => "gs",
        }
    }

    /// Names of the access key and secret key, as used in the config store.
    /// The environment variables are the upper-cased forms.
    pub fn credential_names(self) -> (&'static str, &'static str) {
        match self {
            ProviderKind::Aws => ("aws_access_key_id", "aws_secret_access_key"),
            ProviderKind::Google => ("gs_access_key_id", "gs_secret_access_key"),
        }
    }

    /// Config key that overrides the default host, e.g. `s3_host`.
    pub fn host_option(self) -> String {
        format!("{}_host", self.provider_name())
    }

    pub fn supports_chunked_transfer(self) -> bool {
        match self {
            ProviderKind::Aws => false,
            ProviderKind::Google => true,
        }
    }

    /// Public endpoint a transport can fall back to when no host override
    /// is configured.
    pub fn standard_host(self) -> &'static str {
        match self {
            ProviderKind::Aws => "s3.amazonaws.com",
            ProviderKind::Google => "storage.googleapis.com",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ProviderKind {
    type Err = ProviderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "aws" => Ok(ProviderKind::Aws),
            "google" => Ok(ProviderKind::Google),
            _ => Err(ProviderError::UnsupportedProvider(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case("aws", ProviderKind::Aws)]
    #[case("AWS", ProviderKind::Aws)]
    #[case(" google ", ProviderKind::Google)]
    fn parses_supported_names(#[case] input: &str, #[case] expected: ProviderKind) {
        assert_eq!(input.parse::<ProviderKind>().unwrap(), expected);
    }

    #[test]
    fn rejects_unknown_provider() {
        let err = "azure".parse::<ProviderKind>().unwrap_err();
        assert!(matches!(err, ProviderError::UnsupportedProvider(ref name) if name == "azure"));
    }

    #[rstest]
    #[case(ProviderKind::Aws, "s3", "s3_host", false)]
    #[case(ProviderKind::Google, "gs", "gs_host", true)]
    fn per_provider_constants(
        #[case] kind: ProviderKind,
        #[case] name: &str,
        #[case] host_option: &str,
        #[case] chunked: bool,
    ) {
        assert_eq!(kind.provider_name(), name);
        assert_eq!(kind.host_option(), host_option);
        assert_eq!(kind.supports_chunked_transfer(), chunked);
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for kind in ProviderKind::ALL {
            assert_eq!(kind.to_string().parse::<ProviderKind>().unwrap(), kind);
        }
    }

    #[test]
    fn serializes_as_lowercase_identity() {
        assert_eq!(serde_json::to_string(&ProviderKind::Google).unwrap(), "\"google\"");
    }

    proptest! {
        #[test]
        fn arbitrary_names_are_rejected(name in "[a-z]{1,12}") {
            prop_assume!(name != "aws" && name != "google");
            prop_assert!(name.parse::<ProviderKind>().is_err());
        }
    }
}

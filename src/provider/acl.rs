use std::fmt;

use serde::Serialize;

use super::kind::ProviderKind;

const S3_CANNED_ACLS: &[&str] = &[
    "private",
    "public-read",
    "public-read-write",
    "authenticated-read",
    "bucket-owner-read",
    "bucket-owner-full-control",
    "log-delivery-write",
];

const GS_CANNED_ACLS: &[&str] = &[
    "private",
    "public-read",
    "project-private",
    "public-read-write",
    "authenticated-read",
    "bucket-owner-read",
    "bucket-owner-full-control",
];

/// Predefined ACL names understood by the provider's ACL header.
pub(crate) fn canned_acls(kind: ProviderKind) -> &'static [&'static str] {
    match kind {
        ProviderKind::Aws => S3_CANNED_ACLS,
        ProviderKind::Google => GS_CANNED_ACLS,
    }
}

/// Document schema used for fine-grained access control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AclSchema {
    /// S3 `AccessControlPolicy` (owner plus grant list).
    Policy,
    /// Cloud Storage `AccessControlList` (entries with scopes).
    AccessControlList,
}

impl AclSchema {
    pub fn for_provider(kind: ProviderKind) -> Self {
        match kind {
            ProviderKind::Aws => AclSchema::Policy,
            ProviderKind::Google => AclSchema::AccessControlList,
        }
    }

    /// Root element of the XML document.
    pub fn root_element(self) -> &'static str {
        match self {
            AclSchema::Policy => "AccessControlPolicy",
            AclSchema::AccessControlList => "AccessControlList",
        }
    }
}

impl fmt::Display for AclSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.root_element())
    }
}

use std::fmt;

use serde::{Serialize, Serializer};

use super::kind::ProviderKind;

macro_rules! amz {
    ($suffix:literal) => {
        concat!("x-amz-", $suffix)
    };
}

macro_rules! goog {
    ($suffix:literal) => {
        concat!("x-goog-", $suffix)
    };
}

/// Logical purpose of a provider-specific header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HeaderRole {
    HeaderPrefix,
    MetadataPrefix,
    Acl,
    /// Authentication scheme label (`AWS`, `GOOG1`), not a header name.
    Auth,
    CopySource,
    CopySourceVersionId,
    CopySourceRange,
    Date,
    DeleteMarker,
    MetadataDirective,
    ResumableUpload,
    SecurityToken,
    ServerSideEncryption,
    StorageClass,
    VersionId,
    Mfa,
}

impl HeaderRole {
    pub const ALL: [HeaderRole; 16] = [
        HeaderRole::HeaderPrefix,
        HeaderRole::MetadataPrefix,
        HeaderRole::Acl,
        HeaderRole::Auth,
        HeaderRole::CopySource,
        HeaderRole::CopySourceVersionId,
        HeaderRole::CopySourceRange,
        HeaderRole::Date,
        HeaderRole::DeleteMarker,
        HeaderRole::MetadataDirective,
        HeaderRole::ResumableUpload,
        HeaderRole::SecurityToken,
        HeaderRole::ServerSideEncryption,
        HeaderRole::StorageClass,
        HeaderRole::VersionId,
        HeaderRole::Mfa,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            HeaderRole::HeaderPrefix => "header-prefix",
            HeaderRole::MetadataPrefix => "metadata-prefix",
            HeaderRole::Acl => "acl-header",
            HeaderRole::Auth => "auth-header",
            HeaderRole::CopySource => "copy-source-header",
            HeaderRole::CopySourceVersionId => "copy-source-version-id-header",
            HeaderRole::CopySourceRange => "copy-source-range-header",
            HeaderRole::Date => "date-header",
            HeaderRole::DeleteMarker => "delete-marker-header",
            HeaderRole::MetadataDirective => "metadata-directive-header",
            HeaderRole::ResumableUpload => "resumable-upload-header",
            HeaderRole::SecurityToken => "security-token-header",
            HeaderRole::ServerSideEncryption => "server-side-encryption-header",
            HeaderRole::StorageClass => "storage-class",
            HeaderRole::VersionId => "version-id-header",
            HeaderRole::Mfa => "mfa-header",
        }
    }

    /// Whether the role's value is a wire header name, as opposed to a
    /// prefix or the auth scheme label.
    pub fn is_header_name(self) -> bool {
        !matches!(
            self,
            HeaderRole::HeaderPrefix | HeaderRole::MetadataPrefix | HeaderRole::Auth
        )
    }
}

impl Serialize for HeaderRole {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl fmt::Display for HeaderRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Concrete header names for one provider. `None` marks a role the
/// provider has no header for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderTable {
    pub header_prefix: &'static str,
    pub metadata_prefix: &'static str,
    pub acl: Option<&'static str>,
    pub auth: &'static str,
    pub copy_source: Option<&'static str>,
    pub copy_source_version_id: Option<&'static str>,
    pub copy_source_range: Option<&'static str>,
    pub date: Option<&'static str>,
    pub delete_marker: Option<&'static str>,
    pub metadata_directive: Option<&'static str>,
    pub resumable_upload: Option<&'static str>,
    pub security_token: Option<&'static str>,
    pub server_side_encryption: Option<&'static str>,
    pub storage_class: Option<&'static str>,
    pub version_id: Option<&'static str>,
    pub mfa: Option<&'static str>,
}

impl HeaderTable {
    pub const AWS: HeaderTable = HeaderTable {
        header_prefix: amz!(""),
        metadata_prefix: amz!("meta-"),
        acl: Some(amz!("acl")),
        auth: "AWS",
        copy_source: Some(amz!("copy-source")),
        copy_source_version_id: Some(amz!("copy-source-version-id")),
        copy_source_range: Some(amz!("copy-source-range")),
        date: Some(amz!("date")),
        delete_marker: Some(amz!("delete-marker")),
        metadata_directive: Some(amz!("metadata-directive")),
        resumable_upload: None,
        security_token: Some(amz!("security-token")),
        server_side_encryption: Some(amz!("server-side-encryption")),
        storage_class: Some(amz!("storage-class")),
        version_id: Some(amz!("version-id")),
        mfa: Some(amz!("mfa")),
    };

    pub const GOOGLE: HeaderTable = HeaderTable {
        header_prefix: goog!(""),
        metadata_prefix: goog!("meta-"),
        acl: Some(goog!("acl")),
        auth: "GOOG1",
        copy_source: Some(goog!("copy-source")),
        copy_source_version_id: Some(goog!("copy-source-version-id")),
        copy_source_range: None,
        date: Some(goog!("date")),
        delete_marker: Some(goog!("delete-marker")),
        metadata_directive: Some(goog!("metadata-directive")),
        resumable_upload: Some(goog!("resumable")),
        security_token: Some(goog!("security-token")),
        server_side_encryption: None,
        storage_class: None,
        // Object generation header, unrelated to x-goog-api-version.
        version_id: Some(goog!("version-id")),
        mfa: None,
    };

    pub const fn for_provider(kind: ProviderKind) -> &'static HeaderTable {
        match kind {
            ProviderKind::Aws => &Self::AWS,
            ProviderKind::Google => &Self::GOOGLE,
        }
    }

    pub fn get(&self, role: HeaderRole) -> Option<&'static str> {
        match role {
            HeaderRole::HeaderPrefix => Some(self.header_prefix),
            HeaderRole::MetadataPrefix => Some(self.metadata_prefix),
            HeaderRole::Acl => self.acl,
            HeaderRole::Auth => Some(self.auth),
            HeaderRole::CopySource => self.copy_source,
            HeaderRole::CopySourceVersionId => self.copy_source_version_id,
            HeaderRole::CopySourceRange => self.copy_source_range,
            HeaderRole::Date => self.date,
            HeaderRole::DeleteMarker => self.delete_marker,
            HeaderRole::MetadataDirective => self.metadata_directive,
            HeaderRole::ResumableUpload => self.resumable_upload,
            HeaderRole::SecurityToken => self.security_token,
            HeaderRole::ServerSideEncryption => self.server_side_encryption,
            HeaderRole::StorageClass => self.storage_class,
            HeaderRole::VersionId => self.version_id,
            HeaderRole::Mfa => self.mfa,
        }
    }

    /// All roles with their values, in [`HeaderRole::ALL`] order.
    pub fn entries(&self) -> impl Iterator<Item = (HeaderRole, Option<&'static str>)> + '_ {
        HeaderRole::ALL.into_iter().map(move |role| (role, self.get(role)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ProviderKind::Aws, "x-amz-")]
    #[case(ProviderKind::Google, "x-goog-")]
    fn applicable_headers_share_the_provider_prefix(
        #[case] kind: ProviderKind,
        #[case] prefix: &str,
    ) {
        let table = HeaderTable::for_provider(kind);
        assert_eq!(table.header_prefix, prefix);
        for (role, value) in table.entries() {
            if let (true, Some(name)) = (role.is_header_name(), value) {
                assert!(name.starts_with(prefix), "{role} -> {name}");
            }
        }
    }

    #[test]
    fn applicable_headers_are_valid_http_names() {
        for kind in ProviderKind::ALL {
            for (role, value) in HeaderTable::for_provider(kind).entries() {
                if let (true, Some(name)) = (role.is_header_name(), value) {
                    let parsed = http::HeaderName::from_bytes(name.as_bytes())
                        .unwrap_or_else(|_| panic!("{kind}: {role} -> {name}"));
                    assert_eq!(parsed.as_str(), name);
                }
            }
        }
    }

    #[test]
    fn not_applicable_roles_are_explicit() {
        assert_eq!(HeaderTable::AWS.get(HeaderRole::ResumableUpload), None);
        for role in [
            HeaderRole::CopySourceRange,
            HeaderRole::ServerSideEncryption,
            HeaderRole::StorageClass,
            HeaderRole::Mfa,
        ] {
            assert_eq!(HeaderTable::GOOGLE.get(role), None, "{role}");
        }
        assert_eq!(
            HeaderTable::GOOGLE.get(HeaderRole::ResumableUpload),
            Some("x-goog-resumable")
        );
    }

    #[test]
    fn auth_labels_differ_per_provider() {
        assert_eq!(HeaderTable::AWS.get(HeaderRole::Auth), Some("AWS"));
        assert_eq!(HeaderTable::GOOGLE.get(HeaderRole::Auth), Some("GOOG1"));
    }

    #[test]
    fn role_keys_are_unique() {
        let mut keys: Vec<_> = HeaderRole::ALL.iter().map(|r| r.as_str()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), HeaderRole::ALL.len());
    }
}

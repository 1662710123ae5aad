#[path = "provider/kind.rs"]
mod kind;

#[path = "provider/headers.rs"]
mod headers;

#[path = "provider/acl.rs"]
mod acl;

#[path = "provider/errors.rs"]
mod errors;

#[path = "provider/credentials.rs"]
mod credentials;

#[path = "provider/resolver.rs"]
mod resolver;

#[path = "provider/summary.rs"]
mod summary;

pub use acl::AclSchema;
pub use credentials::{CredentialSource, CredentialSources, Credentials};
pub use errors::{StorageErrorClass, StorageErrorKind};
pub use headers::{HeaderRole, HeaderTable};
pub use kind::ProviderKind;
pub use resolver::{get_default, Provider, ProviderBuilder};
pub use summary::ProviderSummary;

//! Cloud storage provider conventions behind one resolver.
//!
//! `cloudconn` maps a logical storage provider (`aws` or `google`) onto the
//! concrete values a transport needs to talk to it: header names, the
//! authentication scheme label, canned ACL vocabulary, ACL document schema,
//! provider-specific error classes and credentials resolved from explicit
//! arguments, the environment or a configuration store.
//!
//! ```no_run
//! use cloudconn::{config::ConfigStore, provider::Provider};
//!
//! let config = ConfigStore::load("/etc/cloudconn.toml")?;
//! let provider = Provider::builder("google").config(config).build()?;
//!
//! assert_eq!(provider.provider_name(), "gs");
//! assert_eq!(provider.auth_header(), "GOOG1");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod ec2;
pub mod env;
pub mod error;
pub mod provider;

pub use env::{Env, OsEnv, StaticEnv};
pub use error::{ProviderError, StorageError};
pub use provider::{get_default, Provider, ProviderBuilder, ProviderKind};

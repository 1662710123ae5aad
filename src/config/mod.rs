//! Sectioned key-value configuration consulted for credentials and host
//! overrides.

mod error;
mod load;
mod paths;
mod store;

pub use error::ConfigError;
pub use paths::{ConfigPaths, CONFIG_ENV_VAR};
pub use store::{ConfigStore, CREDENTIALS_SECTION};

use std::fs;
use std::path::Path;

use crate::env::Env;

use super::error::ConfigError;
use super::paths::ConfigPaths;
use super::store::{ConfigStore, CREDENTIALS_SECTION};

impl ConfigStore {
    /// Loads a single file. `.json` files are parsed as JSON, anything else
    /// as TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let store = if is_json(path) {
            Self::from_json_str(&contents)?
        } else {
            Self::from_toml_str(&contents)?
        };
        if store.has_section(CREDENTIALS_SECTION) {
            warn_if_permissive(path);
        }
        log::debug!("Loaded config file. path={}", path.display());
        Ok(store)
    }

    /// Loads the default search path.
    ///
    /// With `CLOUDCONN_CONFIG` set, exactly that file is read and must
    /// exist. Otherwise `/etc/cloudconn.toml` and then
    /// `~/.cloudconn/config.toml` are merged, skipping missing files.
    pub fn load_default(env: &dyn Env) -> Result<Self, ConfigError> {
        let paths = ConfigPaths::resolve(env);
        if paths.explicit {
            let mut store = Self::new();
            for file in &paths.files {
                store.merge(Self::load(file)?);
            }
            return Ok(store);
        }
        let mut store = Self::new();
        for file in &paths.files {
            match Self::load(file) {
                Ok(loaded) => store.merge(loaded),
                Err(ConfigError::Io(err)) if err.kind() == std::io::ErrorKind::NotFound => {}
                Err(err) => return Err(err),
            }
        }
        Ok(store)
    }
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}

/// True when group or other users have any access to the file.
#[cfg(unix)]
fn is_permissive(mode: u32) -> bool {
    mode & 0o077 != 0
}

fn warn_if_permissive(path: &Path) {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        if let Ok(metadata) = fs::metadata(path) {
            let mode = metadata.permissions().mode() & 0o777;
            if is_permissive(mode) {
                log::warn!(
                    "Config file holding credentials is readable by other users. path={} mode={:o}",
                    path.display(),
                    mode
                );
            }
        }
    }
    #[cfg(not(unix))]
    let _ = path;
}

use std::path::PathBuf;

use crate::env::Env;

/// Environment variable naming a single config file to use instead of the
/// default search path.
pub const CONFIG_ENV_VAR: &str = "CLOUDCONN_CONFIG";

const SYSTEM_CONFIG_FILE: &str = "/etc/cloudconn.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPaths {
    /// Files to read, lowest precedence first.
    pub files: Vec<PathBuf>,
    /// True when the list came from `CLOUDCONN_CONFIG`.
    pub explicit: bool,
}

impl ConfigPaths {
    pub fn resolve(env: &dyn Env) -> Self {
        if let Some(path) = env.var(CONFIG_ENV_VAR).filter(|p| !p.is_empty()) {
            return Self {
                files: vec![PathBuf::from(path)],
                explicit: true,
            };
        }
        let mut files = vec![PathBuf::from(SYSTEM_CONFIG_FILE)];
        if let Some(user) = default_user_config_file() {
            files.push(user);
        }
        Self {
            files,
            explicit: false,
        }
    }
}

fn default_user_config_file() -> Option<PathBuf> {
    let home = dirs::home_dir()?;
    Some(home.join(".cloudconn").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::StaticEnv;

    #[test]
    fn env_override_replaces_search_path() {
        let env = StaticEnv::new().with_var(CONFIG_ENV_VAR, "/tmp/custom.toml");
        let paths = ConfigPaths::resolve(&env);
        assert!(paths.explicit);
        assert_eq!(paths.files, vec![PathBuf::from("/tmp/custom.toml")]);
    }

    #[test]
    fn default_search_path_starts_with_system_file() {
        let paths = ConfigPaths::resolve(&StaticEnv::new());
        assert!(!paths.explicit);
        assert_eq!(paths.files[0], PathBuf::from(SYSTEM_CONFIG_FILE));
    }
}

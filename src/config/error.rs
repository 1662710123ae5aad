use std::io;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config IO error: {0}")]
    Io(#[from] io::Error),
    #[error("config parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("config parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid value for [{section}] {key}: expected a string, number or boolean")]
    InvalidValue { section: String, key: String },
    #[error("top-level key {0} is not a section")]
    NotASection(String),
}

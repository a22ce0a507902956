use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("could not decode store snapshot: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not decode statistics settings: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("invalid log directive '{0}'")]
    LogDirective(String),
    #[error("narrow breakpoint must be positive")]
    Breakpoint,
}

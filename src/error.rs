use std::path::PathBuf;

/// Problems with the game's TOML settings file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot open settings {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("settings are not valid TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("bad setting: {0}")]
    Invalid(String),
}

/// Anything that stops the game from starting or keeps the window from opening.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("window failed: {0}")]
    Gui(#[from] eframe::Error),
}

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or validating theme customizations
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("failed to parse theme overrides: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unknown component `{0}`")]
    UnknownComponent(String),

    #[error("component `{component}` has no part `{part}`")]
    UnknownPart { component: String, part: String },

    #[error("component `{component}` has no style for registered part `{part}`")]
    MissingPart { component: String, part: String },

    #[error("unknown pseudo state `{0}`")]
    UnknownPseudo(String),

    #[error("invalid value for `{property}`: {reason}")]
    InvalidValue { property: String, reason: String },
}

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlateError {
    #[error("catalog not found at {}", .0.display())]
    CatalogNotFound(PathBuf),

    #[error("failed to parse catalog at {}: {source}", path.display())]
    CatalogParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("item '{0}' not found")]
    ItemNotFound(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),
}

pub type Result<T> = std::result::Result<T, SlateError>;

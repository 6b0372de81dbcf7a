use std::path::PathBuf;

/// Returns the slate root directory.
///
/// Honours `SLATE_ROOT` so tests and scripted builds can point at an
/// isolated configuration directory.
pub fn slate_root() -> PathBuf {
    if let Ok(root) = std::env::var("SLATE_ROOT") {
        PathBuf::from(root)
    } else {
        PathBuf::from(".slate")
    }
}

/// Returns the path to the configuration file.
pub fn config_path() -> PathBuf {
    slate_root().join("config.yaml")
}

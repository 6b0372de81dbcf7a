//! Top-level application configuration.
//!
//! Configuration is stored in `.slate/config.yaml` and includes:
//! - The path of the catalog dataset
//! - The base URL images are served from
//! - Item exclusions (exact matches plus the single prefix rule)
//! - Gallery filename exclusions
//! - Site presentation settings

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SlateError};
use crate::filter::ExclusionRules;
use crate::paths::config_path;
use crate::utils::write_file;

pub const VALID_CONFIG_KEYS: &[&str] = &[
    "catalog",
    "images.base_url",
    "exclusions.items",
    "exclusions.item_prefix",
    "gallery.exclude",
    "site.title",
];

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the catalog JSON (default: catalog.json)
    #[serde(default = "default_catalog_path")]
    pub catalog: PathBuf,

    #[serde(default)]
    pub images: ImagesConfig,

    /// Items hidden from every product view
    #[serde(default, skip_serializing_if = "ExclusionRules::is_empty")]
    pub exclusions: ExclusionRules,

    #[serde(default, skip_serializing_if = "GalleryConfig::is_default")]
    pub gallery: GalleryConfig,

    #[serde(default)]
    pub site: SiteConfig,
}

fn default_catalog_path() -> PathBuf {
    PathBuf::from("catalog.json")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: default_catalog_path(),
            images: ImagesConfig::default(),
            exclusions: ExclusionRules::default(),
            gallery: GalleryConfig::default(),
            site: SiteConfig::default(),
        }
    }
}

/// Where product images are served from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImagesConfig {
    #[serde(default = "default_image_base")]
    pub base_url: String,
}

fn default_image_base() -> String {
    "images/".to_string()
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            base_url: default_image_base(),
        }
    }
}

/// Gallery configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GalleryConfig {
    /// Image filenames never shown in the gallery (logos, bad crops)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude: Vec<String>,
}

impl GalleryConfig {
    pub fn is_default(&self) -> bool {
        self.exclude.is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_site_title")]
    pub title: String,
}

fn default_site_title() -> String {
    "Slate Distribution Catalog".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: default_site_title(),
        }
    }
}

/// Split a comma-separated config value into trimmed, non-empty entries
fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Reject unknown keys, suggesting dot notation for underscore spellings
pub fn validate_config_key(key: &str) -> Result<&str> {
    if VALID_CONFIG_KEYS.contains(&key) {
        return Ok(key);
    }

    if let Some(pos) = key.find('_') {
        let dot_version = format!("{}.{}", &key[..pos], &key[pos + 1..]);
        if VALID_CONFIG_KEYS.contains(&dot_version.as_str()) {
            return Err(SlateError::Config(format!(
                "invalid config key '{key}'. Use dot notation: '{dot_version}'"
            )));
        }
    }

    Err(SlateError::Config(format!(
        "unknown config key '{key}'. Valid keys: {}",
        VALID_CONFIG_KEYS.join(", ")
    )))
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> PathBuf {
        config_path()
    }

    /// Load configuration from file, or return default if not found
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("no config at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            SlateError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read config at {}: {}", path.display(), e),
            ))
        })?;
        let config: Config = serde_yaml_ng::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let content = serde_yaml_ng::to_string(self)?;
        write_file(&Self::config_path(), &content)
    }

    /// Read a single value by dotted key
    pub fn get(&self, key: &str) -> Result<String> {
        let value = match validate_config_key(key)? {
            "catalog" => self.catalog.display().to_string(),
            "images.base_url" => self.images.base_url.clone(),
            "exclusions.items" => self.exclusions.items.join(","),
            "exclusions.item_prefix" => self
                .exclusions
                .item_prefix
                .clone()
                .ok_or_else(|| SlateError::Config(format!("{key} not set")))?,
            "gallery.exclude" => self.gallery.exclude.join(","),
            "site.title" => self.site.title.clone(),
            other => return Err(SlateError::Config(format!("unknown config key '{other}'"))),
        };
        Ok(value)
    }

    /// Update a single value by dotted key
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match validate_config_key(key)? {
            "catalog" => {
                if value.trim().is_empty() {
                    return Err(SlateError::Config("catalog path cannot be empty".to_string()));
                }
                self.catalog = PathBuf::from(value);
            }
            "images.base_url" => self.images.base_url = value.to_string(),
            "exclusions.items" => self.exclusions.items = split_list(value),
            "exclusions.item_prefix" => {
                let prefix = value.trim();
                self.exclusions.item_prefix = if prefix.is_empty() {
                    None
                } else {
                    Some(prefix.to_string())
                };
            }
            "gallery.exclude" => self.gallery.exclude = split_list(value),
            "site.title" => self.site.title = value.to_string(),
            other => return Err(SlateError::Config(format!("unknown config key '{other}'"))),
        }
        Ok(())
    }

    /// Dataset path, with a command-line override taking precedence
    pub fn catalog_path(&self, override_path: Option<&Path>) -> PathBuf {
        override_path
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.catalog.clone())
    }
}

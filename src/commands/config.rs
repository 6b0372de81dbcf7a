//! Configuration commands for managing slate settings.
//!
//! - `config show`: Display current configuration
//! - `config get`: Print a single value
//! - `config set`: Set a configuration value

use owo_colors::OwoColorize;
use serde_json::json;

use super::CommandOutput;
use crate::cli::OutputOptions;
use crate::config::{Config, validate_config_key};
use crate::error::Result;

fn list_or_none(values: &[String]) -> String {
    if values.is_empty() {
        "none".dimmed().to_string()
    } else {
        values.join(", ")
    }
}

/// Show current configuration
pub fn cmd_config_show(output: OutputOptions) -> Result<()> {
    let config = Config::load()?;

    let json_output = json!({
        "catalog": config.catalog.display().to_string(),
        "images": { "base_url": config.images.base_url },
        "exclusions": {
            "items": config.exclusions.items,
            "item_prefix": config.exclusions.item_prefix,
        },
        "gallery": { "exclude": config.gallery.exclude },
        "site": { "title": config.site.title },
        "config_file": Config::config_path().to_string_lossy(),
    });

    let mut text_output = String::new();
    text_output.push_str(&format!("{}\n\n", "Configuration:".cyan().bold()));

    text_output.push_str(&format!("{}: {}\n", "catalog".cyan(), config.catalog.display()));
    text_output.push_str(&format!("{}:\n", "images".cyan()));
    text_output.push_str(&format!("  base_url: {}\n", config.images.base_url));

    text_output.push_str(&format!("{}:\n", "exclusions".cyan()));
    text_output.push_str(&format!(
        "  items: {}\n",
        list_or_none(&config.exclusions.items)
    ));
    let prefix = match &config.exclusions.item_prefix {
        Some(prefix) => prefix.clone(),
        None => "not configured".dimmed().to_string(),
    };
    text_output.push_str(&format!("  item_prefix: {prefix}\n"));

    text_output.push_str(&format!("{}:\n", "gallery".cyan()));
    text_output.push_str(&format!(
        "  exclude: {}\n",
        list_or_none(&config.gallery.exclude)
    ));

    text_output.push_str(&format!("{}:\n", "site".cyan()));
    text_output.push_str(&format!("  title: {}\n", config.site.title));

    text_output.push('\n');
    text_output.push_str(&format!(
        "{}",
        format!("Config file: {}", Config::config_path().display()).dimmed()
    ));

    CommandOutput::new(json_output)
        .with_text(text_output)
        .print(output)
}

/// Get a configuration value
pub fn cmd_config_get(key: &str, output: OutputOptions) -> Result<()> {
    let config = Config::load()?;
    let value = config.get(key)?;

    CommandOutput::new(json!({ "key": key, "value": value }))
        .with_text(value)
        .print(output)
}

/// Set a configuration value
pub fn cmd_config_set(key: &str, value: &str, output: OutputOptions) -> Result<()> {
    validate_config_key(key)?;

    let mut config = Config::load()?;
    config.set(key, value)?;
    config.save()?;

    let json_output = json!({
        "action": "config_set",
        "key": key,
        "value": value,
        "success": true,
    });
    let text = format!("Set {} to {}", key.cyan(), value);

    CommandOutput::new(json_output).with_text(text).print(output)
}

//! Command implementations behind the `slate` CLI.

mod build;
mod config;
mod gallery;
mod missing;
mod pages;
mod render;
mod search;
mod show;

pub use build::cmd_build;
pub use config::{cmd_config_get, cmd_config_set, cmd_config_show};
pub use gallery::cmd_gallery;
pub use missing::cmd_missing;
pub use pages::cmd_pages;
pub use render::{RenderOptions, cmd_render};
pub use search::{SearchOptions, cmd_search};
pub use show::cmd_show;

use std::path::Path;

use serde_json::Value;

use crate::catalog::Catalog;
use crate::cli::OutputOptions;
use crate::config::Config;
use crate::error::Result;
use crate::render::SiteOptions;

/// Print a JSON value to stdout with pretty formatting
pub fn print_json(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Output of a command in both machine and human form.
///
/// Commands build both and let `OutputOptions` pick; text falls back to the
/// JSON rendering when a command has nothing friendlier to say.
pub struct CommandOutput {
    json: Value,
    text: Option<String>,
}

impl CommandOutput {
    pub fn new(json: Value) -> Self {
        CommandOutput { json, text: None }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn print(self, output: OutputOptions) -> Result<()> {
        if output.json {
            return print_json(&self.json);
        }
        match self.text {
            Some(text) => println!("{text}"),
            None => print_json(&self.json)?,
        }
        Ok(())
    }
}

/// Configuration plus the catalog it points at, loaded once per command.
pub struct Workspace {
    pub config: Config,
    pub catalog: Catalog,
}

impl Workspace {
    pub fn load(catalog_override: Option<&Path>) -> Result<Self> {
        let config = Config::load()?;
        let path = config.catalog_path(catalog_override);
        let catalog = Catalog::load(&path)?;
        Ok(Workspace { config, catalog })
    }

    pub fn image_base(&self) -> &str {
        &self.config.images.base_url
    }

    pub fn site_options(&self, generated_at: Option<String>) -> SiteOptions {
        SiteOptions {
            title: self.config.site.title.clone(),
            generated_at,
        }
    }
}

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::io;
use std::path::PathBuf;

use crate::view::{Route, VALID_VIEW_MODES, ViewMode};

#[derive(Parser)]
#[command(name = "slate")]
#[command(about = "Browse and publish the Slate Distribution product catalog")]
#[command(version)]
pub struct Cli {
    /// Catalog JSON to use instead of the configured one
    #[arg(long, global = true, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// How a command should print its result
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputOptions {
    pub json: bool,
}

impl OutputOptions {
    pub fn new(json: bool) -> Self {
        OutputOptions { json }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search products by description, item number, or UPC
    #[command(visible_alias = "s")]
    Search {
        /// Search text (matches everything when omitted)
        #[arg(default_value = "")]
        term: String,

        /// Only show products from this catalog page
        #[arg(short, long)]
        page: Option<String>,

        /// View mode: grid or list (default: grid)
        #[arg(short, long, default_value = "grid", value_parser = parse_view_mode)]
        view: ViewMode,

        /// Maximum number of products to print
        #[arg(short, long)]
        limit: Option<usize>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Display every product with an item number, and its photo
    Show {
        /// Item number (exact match)
        #[arg(value_parser = parse_item)]
        item: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List catalog pages (categories) with product counts
    Pages {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the de-duplicated photo gallery
    Gallery {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Report products that have no photo
    Missing {
        /// Write the report to this file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Render one HTML page for a search, page, and view mode
    Render {
        /// Search text (matches everything when omitted)
        #[arg(default_value = "")]
        term: String,

        /// Only show products from this catalog page
        #[arg(short, long)]
        page: Option<String>,

        /// View mode: grid or list (default: grid)
        #[arg(short, long, default_value = "grid", value_parser = parse_view_mode)]
        view: ViewMode,

        /// Render the photo-only gallery instead of the product catalog
        #[arg(long, conflicts_with_all = ["term", "page", "view"])]
        simple: bool,

        /// Write to this file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Build the static catalog site
    Build {
        /// Directory to write the site into
        #[arg(short, long, value_name = "DIR", default_value = "site")]
        out: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for [possible values: bash, zsh, fish, powershell, elvish]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Set a configuration value
    Set {
        /// Configuration key (catalog, images.base_url, exclusions.items, exclusions.item_prefix, gallery.exclude, site.title)
        key: String,
        /// Value to set (lists are comma-separated)
        value: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Get a configuration value
    Get {
        /// Configuration key
        key: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// Execute the command, dispatching to the appropriate handler.
    pub fn run(self) -> crate::error::Result<()> {
        use crate::commands::{
            RenderOptions, SearchOptions, cmd_build, cmd_config_get, cmd_config_set,
            cmd_config_show, cmd_gallery, cmd_missing, cmd_pages, cmd_render, cmd_search,
            cmd_show,
        };

        let catalog = self.catalog.as_deref();

        match self.command {
            Commands::Search {
                term,
                page,
                view,
                limit,
                json,
            } => cmd_search(
                catalog,
                SearchOptions {
                    term,
                    page,
                    view_mode: view,
                    limit,
                },
                OutputOptions::new(json),
            ),

            Commands::Show { item, json } => cmd_show(catalog, &item, OutputOptions::new(json)),
            Commands::Pages { json } => cmd_pages(catalog, OutputOptions::new(json)),
            Commands::Gallery { json } => cmd_gallery(catalog, OutputOptions::new(json)),
            Commands::Missing { output, json } => {
                cmd_missing(catalog, output.as_deref(), OutputOptions::new(json))
            }

            Commands::Render {
                term,
                page,
                view,
                simple,
                output,
            } => {
                let route = if simple { Route::Simple } else { Route::Full };
                cmd_render(
                    catalog,
                    RenderOptions {
                        term,
                        page,
                        view_mode: view,
                        route,
                    },
                    output.as_deref(),
                )
            }

            Commands::Build { out, json } => cmd_build(catalog, &out, OutputOptions::new(json)),

            Commands::Config { action } => match action {
                ConfigAction::Show { json } => cmd_config_show(OutputOptions::new(json)),
                ConfigAction::Set { key, value, json } => {
                    cmd_config_set(&key, &value, OutputOptions::new(json))
                }
                ConfigAction::Get { key, json } => cmd_config_get(&key, OutputOptions::new(json)),
            },

            Commands::Completions { shell } => {
                generate_completions(shell);
                Ok(())
            }
        }
    }
}

/// Generic validation helper for parsing values with a standard error message format.
fn parse_with_validation<T, F>(
    s: &str,
    parser: F,
    field_name: &str,
    valid_values: &[&str],
) -> Result<T, String>
where
    F: FnOnce(&str) -> Result<T, String>,
{
    parser(s).map_err(|_| {
        format!(
            "Invalid {}. Must be one of: {}",
            field_name,
            valid_values.join(", ")
        )
    })
}

fn parse_view_mode(s: &str) -> Result<ViewMode, String> {
    parse_with_validation(
        s,
        |v| v.parse().map_err(|_| String::new()),
        "view mode",
        VALID_VIEW_MODES,
    )
}

fn parse_item(s: &str) -> Result<String, String> {
    if s.is_empty() {
        return Err("item cannot be empty".to_string());
    }

    if s.chars().all(char::is_whitespace) {
        return Err("item cannot be only whitespace".to_string());
    }

    Ok(s.to_string())
}

pub fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "slate", &mut io::stdout());
}

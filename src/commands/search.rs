//! Search and filter the catalog from the terminal.

use std::path::Path;

use serde_json::json;

use super::{CommandOutput, Workspace};
use crate::cli::OutputOptions;
use crate::display::{format_grid, format_product_table};
use crate::error::Result;
use crate::resolve::ImageIndex;
use crate::view::{BrowseState, ViewMode};

/// Cards per row in the terminal grid view
const GRID_COLUMNS: usize = 3;

pub struct SearchOptions {
    pub term: String,
    pub page: Option<String>,
    pub view_mode: ViewMode,
    pub limit: Option<usize>,
}

pub fn cmd_search(
    catalog_path: Option<&Path>,
    options: SearchOptions,
    output: OutputOptions,
) -> Result<()> {
    let workspace = Workspace::load(catalog_path)?;
    let index = ImageIndex::build(&workspace.catalog.images);

    let state = BrowseState::new(options.term)
        .with_page(options.page)
        .with_view_mode(options.view_mode);
    let mut view = state.view(
        &workspace.catalog,
        &workspace.config.exclusions,
        &index,
        workspace.image_base(),
    );

    let summary = view.summary();
    let total = view.count();
    if let Some(limit) = options.limit {
        view.products.truncate(limit);
    }

    let json_output = json!({
        "search": view.search,
        "page": view.selected_page,
        "total": total,
        "products": view.products,
    });

    let mut text = String::new();
    if total == 0 {
        text.push_str("No products found.\nTry adjusting your search or category filter.");
    } else {
        match view.view_mode {
            ViewMode::Grid => text.push_str(format_grid(&view.products, GRID_COLUMNS).trim_end()),
            ViewMode::List => text.push_str(&format_product_table(&view.products)),
        }
        text.push('\n');
        if view.count() < total {
            text.push_str(&format!("\n{summary} (first {} shown)", view.count()));
        } else {
            text.push_str(&format!("\n{summary}"));
        }
    }

    CommandOutput::new(json_output).with_text(text).print(output)
}

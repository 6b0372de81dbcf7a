use std::path::Path;

use owo_colors::OwoColorize;
use serde_json::json;

use super::{CommandOutput, Workspace};
use crate::cli::OutputOptions;
use crate::error::{Result, SlateError};
use crate::resolve::{ImageIndex, image_url};

/// Show every product with exactly this item number, with its photo.
///
/// Excluded items are still shown here; exclusions only hide products from
/// browsing views.
pub fn cmd_show(catalog_path: Option<&Path>, item: &str, output: OutputOptions) -> Result<()> {
    let workspace = Workspace::load(catalog_path)?;
    let index = ImageIndex::build(&workspace.catalog.images);

    let matches: Vec<_> = workspace.catalog.products_by_item(item).collect();
    if matches.is_empty() {
        return Err(SlateError::ItemNotFound(item.to_string()));
    }

    let image = index.resolve(item);
    let url = image.map(|f| image_url(workspace.image_base(), f));
    let excluded = workspace.config.exclusions.excludes(item);

    let json_output = json!({
        "item": item,
        "image": image,
        "image_url": url,
        "excluded": excluded,
        "products": matches,
    });

    let mut text = String::new();
    for (n, product) in matches.iter().enumerate() {
        if n > 0 {
            text.push('\n');
        }
        text.push_str(&format!("{}\n", format!("#{}", product.item).cyan().bold()));
        text.push_str(&format!("  description: {}\n", product.description));
        text.push_str(&format!("  page: {}\n", product.page));
        text.push_str(&format!("  case count: {}\n", product.case_count));
        text.push_str(&format!("  srp: {}\n", product.retail.green()));
        text.push_str(&format!("  upc: {}\n", product.upc));
    }
    text.push('\n');
    match &url {
        Some(url) => text.push_str(&format!("photo: {url}")),
        None => text.push_str(&format!("photo: {}", "none".dimmed())),
    }
    if excluded {
        text.push_str(&format!("\n{}", "hidden from browsing by exclusion rules".yellow()));
    }

    CommandOutput::new(json_output).with_text(text).print(output)
}

use std::path::Path;

use serde_json::json;

use super::{CommandOutput, Workspace};
use crate::cli::OutputOptions;
use crate::error::Result;
use crate::gallery::build_gallery;

/// Print the de-duplicated gallery, one image URL per line
pub fn cmd_gallery(catalog_path: Option<&Path>, output: OutputOptions) -> Result<()> {
    let workspace = Workspace::load(catalog_path)?;
    let entries = build_gallery(
        &workspace.catalog,
        &workspace.config.gallery.exclude,
        workspace.image_base(),
    );

    let text = entries
        .iter()
        .map(|e| e.url.as_str())
        .collect::<Vec<_>>()
        .join("\n");

    CommandOutput::new(json!(entries)).with_text(text).print(output)
}

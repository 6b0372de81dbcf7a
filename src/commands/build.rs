//! Static site build.
//!
//! Writes every page/view combination the site links to, plus the photo
//! gallery, into one output directory.

use std::collections::HashMap;
use std::path::Path;

use owo_colors::OwoColorize;
use serde_json::json;

use super::{CommandOutput, Workspace};
use crate::cli::OutputOptions;
use crate::error::Result;
use crate::gallery::build_gallery;
use crate::render::{Renderer, SIMPLE_FILE, page_filename};
use crate::resolve::ImageIndex;
use crate::utils::{iso_date, write_file};
use crate::view::{BrowseState, ViewMode};

pub fn cmd_build(catalog_path: Option<&Path>, out_dir: &Path, output: OutputOptions) -> Result<()> {
    let workspace = Workspace::load(catalog_path)?;
    let renderer = Renderer::new()?;
    let site = workspace.site_options(Some(iso_date()));
    let index = ImageIndex::build(&workspace.catalog.images);

    let mut selections: Vec<Option<String>> = vec![None];
    selections.extend(workspace.catalog.pages().into_iter().map(Some));

    let mut written: Vec<String> = Vec::new();
    let mut owners: HashMap<String, Option<String>> = HashMap::new();

    for page in &selections {
        for view_mode in [ViewMode::Grid, ViewMode::List] {
            let view = BrowseState::new("")
                .with_page(page.clone())
                .with_view_mode(view_mode)
                .view(
                    &workspace.catalog,
                    &workspace.config.exclusions,
                    &index,
                    workspace.image_base(),
                );
            let html = renderer.render_catalog(&view, &site)?;
            let filename = page_filename(page.as_deref(), view_mode);
            if let Some(previous) = owners.insert(filename.clone(), page.clone()) {
                tracing::warn!(
                    "page {:?} overwrites {filename} already written for page {:?}",
                    page.as_deref().unwrap_or_default(),
                    previous.as_deref().unwrap_or_default()
                );
            }
            write_file(&out_dir.join(&filename), &html)?;
            tracing::debug!("wrote {filename} ({} products)", view.count());
            written.push(filename);
        }
    }

    let entries = build_gallery(
        &workspace.catalog,
        &workspace.config.gallery.exclude,
        workspace.image_base(),
    );
    let html = renderer.render_gallery(&entries, &site)?;
    write_file(&out_dir.join(SIMPLE_FILE), &html)?;
    written.push(SIMPLE_FILE.to_string());

    let json_output = json!({
        "output": out_dir.display().to_string(),
        "files": written,
        "products": workspace.catalog.products.len(),
        "gallery_images": entries.len(),
    });
    let text = format!(
        "{} {} files to {} ({} products, {} gallery images)",
        "Built".green(),
        written.len(),
        out_dir.display(),
        workspace.catalog.products.len(),
        entries.len()
    );

    CommandOutput::new(json_output).with_text(text).print(output)
}

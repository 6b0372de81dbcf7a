use std::path::Path;

use super::Workspace;
use crate::error::Result;
use crate::gallery::build_gallery;
use crate::render::Renderer;
use crate::resolve::ImageIndex;
use crate::utils::write_file;
use crate::view::{BrowseState, Route, ViewMode};

pub struct RenderOptions {
    pub term: String,
    pub page: Option<String>,
    pub view_mode: ViewMode,
    pub route: Route,
}

/// Render a single HTML document for one browse state.
///
/// Writes to `output_path` when given, stdout otherwise.
pub fn cmd_render(
    catalog_path: Option<&Path>,
    options: RenderOptions,
    output_path: Option<&Path>,
) -> Result<()> {
    let workspace = Workspace::load(catalog_path)?;
    let renderer = Renderer::new()?;
    let site = workspace.site_options(None);

    let html = match options.route {
        Route::Simple => {
            let entries = build_gallery(
                &workspace.catalog,
                &workspace.config.gallery.exclude,
                workspace.image_base(),
            );
            renderer.render_gallery(&entries, &site)?
        }
        Route::Full => {
            let index = ImageIndex::build(&workspace.catalog.images);
            let view = BrowseState::new(options.term)
                .with_page(options.page)
                .with_view_mode(options.view_mode)
                .view(
                    &workspace.catalog,
                    &workspace.config.exclusions,
                    &index,
                    workspace.image_base(),
                );
            renderer.render_catalog(&view, &site)?
        }
    };

    match output_path {
        Some(path) => {
            write_file(path, &html)?;
            eprintln!("Wrote {}", path.display());
        }
        None => print!("{html}"),
    }

    Ok(())
}

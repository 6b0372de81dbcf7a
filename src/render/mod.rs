//! HTML rendering for the static site.
//!
//! Two routes are rendered from `minijinja` templates: the full catalog
//! (grid or list, with the page sidebar) and the photo-only gallery. Output
//! is always HTML-escaped; product text comes straight from the dataset.

use minijinja::{AutoEscape, Environment, context};
use serde::Serialize;

use crate::error::Result;
use crate::gallery::GalleryEntry;
use crate::view::{CatalogView, ViewMode};

const CATALOG_TEMPLATE: &str = include_str!("templates/catalog.html.jinja");
const GALLERY_TEMPLATE: &str = include_str!("templates/gallery.html.jinja");
const CSS_STYLES: &str = include_str!("templates/style.css");

pub const SIMPLE_FILE: &str = "simple.html";

/// Site-wide values shared by every rendered page.
#[derive(Debug, Clone, Serialize)]
pub struct SiteOptions {
    pub title: String,
    /// Shown in the footer when set. Left empty for reproducible output.
    pub generated_at: Option<String>,
}

#[derive(Serialize)]
struct Card<'a> {
    item: &'a str,
    page: &'a str,
    description: &'a str,
    case_count: &'a str,
    retail: &'a str,
    image_url: Option<&'a str>,
}

#[derive(Serialize)]
struct PageLink {
    label: String,
    href: String,
    active: bool,
}

/// File name a page/view combination is written to in the built site.
///
/// `index.html` and `list.html` hold every product; each page gets
/// `page-<id>.html` and `page-<id>-list.html`.
pub fn page_filename(page: Option<&str>, view_mode: ViewMode) -> String {
    let stem = match page {
        None => match view_mode {
            ViewMode::Grid => return "index.html".to_string(),
            ViewMode::List => return "list.html".to_string(),
        },
        Some(page) => format!("page-{}", slug(page)),
    };
    match view_mode {
        ViewMode::Grid => format!("{stem}.html"),
        ViewMode::List => format!("{stem}-list.html"),
    }
}

/// Keep page identifiers safe to use in a file name.
fn slug(page: &str) -> String {
    page.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' })
        .collect()
}

pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::Html);
        env.add_template("catalog.html", CATALOG_TEMPLATE)?;
        env.add_template("gallery.html", GALLERY_TEMPLATE)?;
        Ok(Renderer { env })
    }

    /// Render the full route for one browse state.
    pub fn render_catalog(&self, view: &CatalogView<'_>, site: &SiteOptions) -> Result<String> {
        let template = self.env.get_template("catalog.html")?;
        let selected = view.selected_page.as_deref();

        let cards: Vec<Card<'_>> = view
            .products
            .iter()
            .map(|resolved| Card {
                item: &resolved.product.item,
                page: &resolved.product.page,
                description: &resolved.product.description,
                case_count: &resolved.product.case_count,
                retail: &resolved.product.retail,
                image_url: resolved.image_url.as_deref(),
            })
            .collect();

        let mut page_links = vec![PageLink {
            label: "All Products".to_string(),
            href: page_filename(None, view.view_mode),
            active: selected.is_none(),
        }];
        page_links.extend(view.pages.iter().map(|page| PageLink {
            label: format!("Page {page}"),
            href: page_filename(Some(page), view.view_mode),
            active: selected == Some(page.as_str()),
        }));

        let html = template.render(context! {
            site,
            css_styles => CSS_STYLES,
            version => env!("CARGO_PKG_VERSION"),
            search => &view.search,
            selected_page => selected,
            view_mode => view.view_mode.as_str(),
            grid_href => page_filename(selected, ViewMode::Grid),
            list_href => page_filename(selected, ViewMode::List),
            simple_href => SIMPLE_FILE,
            page_links,
            cards,
        })?;

        Ok(html)
    }

    /// Render the photo-only route.
    pub fn render_gallery(&self, entries: &[GalleryEntry], site: &SiteOptions) -> Result<String> {
        let template = self.env.get_template("gallery.html")?;
        let html = template.render(context! {
            site,
            css_styles => CSS_STYLES,
            version => env!("CARGO_PKG_VERSION"),
            entries,
        })?;
        Ok(html)
    }
}

//! Browse state and the derived view model.
//!
//! The browser keeps three pieces of state: the search text, the selected
//! page and the view mode. Everything shown is recomputed from those plus
//! the immutable catalog.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::catalog::{Catalog, ProductRecord};
use crate::error::SlateError;
use crate::filter::{ExclusionRules, FilterPolicy, filter_products};
use crate::resolve::{ImageIndex, image_url};

pub const VALID_VIEW_MODES: &[&str] = &["grid", "list"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Grid => "grid",
            ViewMode::List => "list",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = SlateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "grid" => Ok(ViewMode::Grid),
            "list" => Ok(ViewMode::List),
            _ => Err(SlateError::InvalidInput(format!("unknown view mode '{s}'"))),
        }
    }
}

/// The two pages of the site.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Route {
    /// Searchable product grid/list with the page sidebar.
    #[default]
    Full,
    /// Image-only gallery.
    Simple,
}

#[derive(Debug, Clone, Default)]
pub struct BrowseState {
    pub search: String,
    pub selected_page: Option<String>,
    pub view_mode: ViewMode,
}

/// A visible product together with its resolved image.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedProduct<'a> {
    #[serde(flatten)]
    pub product: &'a ProductRecord,
    /// Image filename, when one is associated.
    pub image: Option<&'a str>,
    /// URL of the image under the configured base.
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogView<'a> {
    pub search: String,
    pub selected_page: Option<String>,
    pub view_mode: ViewMode,
    pub pages: Vec<String>,
    pub products: Vec<ResolvedProduct<'a>>,
}

impl CatalogView<'_> {
    pub fn count(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// "Showing N products", with the page appended when one is selected.
    pub fn summary(&self) -> String {
        match &self.selected_page {
            Some(page) => format!("Showing {} products in Page {page}", self.count()),
            None => format!("Showing {} products", self.count()),
        }
    }
}

impl BrowseState {
    pub fn new(search: impl Into<String>) -> Self {
        BrowseState {
            search: search.into(),
            ..Default::default()
        }
    }

    pub fn with_page(mut self, page: Option<String>) -> Self {
        self.selected_page = page;
        self
    }

    pub fn with_view_mode(mut self, view_mode: ViewMode) -> Self {
        self.view_mode = view_mode;
        self
    }

    pub fn policy(&self, exclusions: &ExclusionRules) -> FilterPolicy {
        FilterPolicy::new(exclusions.clone()).with_category(self.selected_page.clone())
    }

    /// Derive what the browser should show for this state.
    pub fn view<'a>(
        &self,
        catalog: &'a Catalog,
        exclusions: &ExclusionRules,
        index: &ImageIndex<'a>,
        image_base: &str,
    ) -> CatalogView<'a> {
        let policy = self.policy(exclusions);
        let products = filter_products(&catalog.products, &self.search, &policy)
            .into_iter()
            .map(|product| {
                let image = index.resolve(&product.item);
                ResolvedProduct {
                    product,
                    image,
                    image_url: image.map(|f| image_url(image_base, f)),
                }
            })
            .collect();

        CatalogView {
            search: self.search.clone(),
            selected_page: self.selected_page.clone(),
            view_mode: self.view_mode,
            pages: catalog.pages(),
            products,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::new(
            vec![
                ProductRecord::new("2", "20", "Tray"),
                ProductRecord::new("1", "10", "Lighter"),
                ProductRecord::new("1", "11", "Lighter Fluid"),
            ],
            vec!["Page1_10_Lighter.png".to_string()],
        )
    }

    #[test]
    fn test_view_mode_parse_and_display() {
        assert_eq!("grid".parse::<ViewMode>().unwrap(), ViewMode::Grid);
        assert_eq!("LIST".parse::<ViewMode>().unwrap(), ViewMode::List);
        assert!("table".parse::<ViewMode>().is_err());
        assert_eq!(ViewMode::List.to_string(), "list");
        assert_eq!(ViewMode::default(), ViewMode::Grid);
    }

    #[test]
    fn test_view_resolves_images_and_placeholders() {
        let catalog = catalog();
        let index = ImageIndex::build(&catalog.images);
        let view = BrowseState::new("lighter").view(
            &catalog,
            &ExclusionRules::default(),
            &index,
            "images/",
        );

        assert_eq!(view.count(), 2);
        assert_eq!(view.products[0].product.item, "10");
        assert_eq!(
            view.products[0].image_url.as_deref(),
            Some("images/Page1_10_Lighter.png")
        );
        assert_eq!(view.products[1].image, None);
        assert_eq!(view.pages, vec!["1", "2"]);
        assert_eq!(view.summary(), "Showing 2 products");
    }

    #[test]
    fn test_view_with_selected_page() {
        let catalog = catalog();
        let index = ImageIndex::build(&catalog.images);
        let view = BrowseState::new("")
            .with_page(Some("2".to_string()))
            .with_view_mode(ViewMode::List)
            .view(&catalog, &ExclusionRules::default(), &index, "images/");

        assert_eq!(view.count(), 1);
        assert_eq!(view.view_mode, ViewMode::List);
        assert_eq!(view.summary(), "Showing 1 products in Page 2");
    }

    #[test]
    fn test_view_serializes_flat_product_fields() {
        let catalog = catalog();
        let index = ImageIndex::build(&catalog.images);
        let view = BrowseState::new("10").view(
            &catalog,
            &ExclusionRules::default(),
            &index,
            "images/",
        );
        let value = serde_json::to_value(&view).unwrap();
        assert_eq!(value["products"][0]["Item"], "10");
        assert_eq!(value["products"][0]["image"], "Page1_10_Lighter.png");
        assert_eq!(value["view_mode"], "grid");
    }
}

//! The static catalog dataset.
//!
//! A catalog is an ordered list of product records plus an ordered list of
//! image filenames. It is loaded once from the JSON artifact produced by the
//! extraction tooling and never mutated afterwards.

mod types;

pub use types::ProductRecord;

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SlateError};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub products: Vec<ProductRecord>,

    /// Image filenames following the `Page<page>_<item>_<slug>.<ext>` convention.
    #[serde(default)]
    pub images: Vec<String>,
}

impl Catalog {
    pub fn new(products: Vec<ProductRecord>, images: Vec<String>) -> Self {
        Catalog { products, images }
    }

    /// Load a catalog from a JSON file on disk.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(SlateError::CatalogNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        let catalog: Catalog =
            serde_json::from_str(&content).map_err(|source| SlateError::CatalogParse {
                path: path.to_path_buf(),
                source,
            })?;

        tracing::debug!(
            "loaded catalog from {}: {} products, {} images",
            path.display(),
            catalog.products.len(),
            catalog.images.len()
        );

        let blank_items = catalog.products.iter().filter(|p| p.item.is_empty()).count();
        if blank_items > 0 {
            tracing::warn!("{blank_items} product(s) in {} have no item number", path.display());
        }

        Ok(catalog)
    }

    /// Parse a catalog from JSON text.
    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Distinct pages in numeric order.
    ///
    /// Pages are numeric strings in practice; anything that does not parse
    /// sorts after the numeric pages, in lexical order.
    pub fn pages(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut pages: Vec<String> = self
            .products
            .iter()
            .filter(|p| seen.insert(p.page.as_str()))
            .map(|p| p.page.clone())
            .collect();
        pages.sort_by(|a, b| compare_pages(a, b));
        pages
    }

    /// Number of products on each page, keyed in page order.
    pub fn page_counts(&self) -> Vec<(String, usize)> {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for product in &self.products {
            *counts.entry(product.page.as_str()).or_default() += 1;
        }
        self.pages()
            .into_iter()
            .map(|page| {
                let count = counts.get(page.as_str()).copied().unwrap_or(0);
                (page, count)
            })
            .collect()
    }

    /// Every product whose item identifier equals `item` exactly.
    pub fn products_by_item<'a>(&'a self, item: &'a str) -> impl Iterator<Item = &'a ProductRecord> {
        self.products.iter().filter(move |p| p.item == item)
    }
}

/// Leading digit run of a page id as a number, if it starts with one.
fn page_number(page: &str) -> Option<u64> {
    let page = page.trim();
    let end = page
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map_or(page.len(), |(i, _)| i);
    page[..end].parse().ok()
}

/// Order page identifiers by their leading number (`6g` sorts as 6), ties
/// and ids without one broken lexically; the latter sort last.
pub fn compare_pages(a: &str, b: &str) -> Ordering {
    match (page_number(a), page_number(b)) {
        (Some(x), Some(y)) => x.cmp(&y).then_with(|| a.cmp(b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

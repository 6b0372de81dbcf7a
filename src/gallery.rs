//! The image-only gallery (the "simple" route).
//!
//! Unlike the product views this walks the image list, not the product list.
//! An image is shown once, in dataset order, provided it is not on the manual
//! exclusion list and at least one product claims it.

use std::collections::HashSet;

use serde::Serialize;

use crate::catalog::Catalog;
use crate::resolve::{image_matches, image_url};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GalleryEntry {
    pub filename: String,
    pub url: String,
    /// Description of the first product that claims the image, for alt text.
    pub alt: String,
}

pub fn build_gallery(
    catalog: &Catalog,
    excluded_images: &[String],
    image_base: &str,
) -> Vec<GalleryEntry> {
    let excluded: HashSet<&str> = excluded_images.iter().map(String::as_str).collect();
    let mut emitted: HashSet<&str> = HashSet::new();
    let mut entries = Vec::new();

    for filename in &catalog.images {
        if excluded.contains(filename.as_str()) || emitted.contains(filename.as_str()) {
            continue;
        }

        let Some(owner) = catalog
            .products
            .iter()
            .find(|p| image_matches(filename, &p.item))
        else {
            continue;
        };

        emitted.insert(filename.as_str());
        entries.push(GalleryEntry {
            filename: filename.clone(),
            url: image_url(image_base, filename),
            alt: owner.description.clone(),
        });
    }

    tracing::debug!(
        "gallery: {} of {} images shown ({} excluded by config)",
        entries.len(),
        catalog.images.len(),
        excluded.len()
    );

    entries
}

//! Report of products that have no photo yet.
//!
//! Used by whoever maintains the image folder to see what still needs to be
//! shot or cropped out of the print catalog.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::catalog::Catalog;
use crate::resolve::ImageIndex;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingImage {
    pub item: String,
    pub description: String,
}

impl MissingImage {
    /// The `item | description` line written to the report file.
    pub fn line(&self) -> String {
        format!("{} | {}", self.item, self.description)
    }
}

/// Products without an image, de-duplicated and sorted by report line.
///
/// Products with a blank item number are skipped; they cannot own a file.
pub fn missing_images(catalog: &Catalog) -> Vec<MissingImage> {
    let index = ImageIndex::build(&catalog.images);

    let by_line: BTreeMap<String, MissingImage> = catalog
        .products
        .iter()
        .filter(|p| !p.item.is_empty())
        .filter(|p| index.resolve(&p.item).is_none())
        .map(|p| {
            let missing = MissingImage {
                item: p.item.clone(),
                description: p.description.clone(),
            };
            (missing.line(), missing)
        })
        .collect();

    by_line.into_values().collect()
}

/// Render the report as newline-terminated lines.
pub fn format_report(missing: &[MissingImage]) -> String {
    missing
        .iter()
        .map(|m| format!("{}\n", m.line()))
        .collect()
}

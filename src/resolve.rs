//! Image association by filename convention.
//!
//! Image files are named `Page<page>_<item>_<slug>.<ext>`. A product owns an
//! image when the filename contains `_<item>_`; the underscores on both sides
//! keep `800` from claiming a file that belongs to `8006`. When several files
//! match, the first one in dataset order wins.

use std::collections::HashMap;

/// Build the delimited needle used to associate an item with a filename.
fn delimited(item: &str) -> String {
    format!("_{item}_")
}

/// Does `filename` belong to `item` under the naming convention?
pub fn image_matches(filename: &str, item: &str) -> bool {
    filename.contains(&delimited(item))
}

/// Return the first filename containing `_<item>_`, scanning in order.
pub fn resolve_image<'a>(item: &str, images: &'a [String]) -> Option<&'a str> {
    let needle = delimited(item);
    images
        .iter()
        .find(|img| img.contains(&needle))
        .map(String::as_str)
}

/// Join the configured image base and a filename into a URL.
pub fn image_url(base: &str, filename: &str) -> String {
    if base.is_empty() || base.ends_with('/') {
        format!("{base}{filename}")
    } else {
        format!("{base}/{filename}")
    }
}

/// Precomputed item -> image lookup.
///
/// Built once per catalog load. Every run of text sitting between two
/// underscores in a filename is a key, including runs that span several
/// underscores, so an identifier like `A_B` resolves the same way the linear
/// scan would. Each key keeps the earliest filename that produced it, which
/// makes [`ImageIndex::resolve`] agree with [`resolve_image`] on every input.
#[derive(Debug, Clone)]
pub struct ImageIndex<'a> {
    images: &'a [String],
    by_item: HashMap<&'a str, usize>,
}

impl<'a> ImageIndex<'a> {
    pub fn build(images: &'a [String]) -> Self {
        let mut by_item: HashMap<&'a str, usize> = HashMap::new();

        for (position, filename) in images.iter().enumerate() {
            let underscores: Vec<usize> = filename
                .char_indices()
                .filter(|&(_, c)| c == '_')
                .map(|(i, _)| i)
                .collect();

            for (n, &start) in underscores.iter().enumerate() {
                for &end in &underscores[n + 1..] {
                    by_item.entry(&filename[start + 1..end]).or_insert(position);
                }
            }
        }

        tracing::debug!(
            "indexed {} images under {} keys",
            images.len(),
            by_item.len()
        );

        ImageIndex { images, by_item }
    }

    /// First image for `item`, or `None` when the product has no photo.
    pub fn resolve(&self, item: &str) -> Option<&'a str> {
        self.by_item
            .get(item)
            .map(|&position| self.images[position].as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn images(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_resolve_first_match_wins() {
        let imgs = images(&[
            "Page1_100_Lighter.png",
            "Page2_200_Tray.png",
            "Page9_200_Tray_Alt.jpg",
        ]);
        assert_eq!(resolve_image("200", &imgs), Some("Page2_200_Tray.png"));
    }

    #[test]
    fn test_resolve_requires_both_delimiters() {
        let imgs = images(&["Page4_8006_Glass_Pipe.png"]);
        assert_eq!(resolve_image("800", &imgs), None);
        assert_eq!(resolve_image("006", &imgs), None);
        assert_eq!(resolve_image("8006", &imgs), Some("Page4_8006_Glass_Pipe.png"));
    }

    #[test]
    fn test_resolve_no_images() {
        assert_eq!(resolve_image("1", &[]), None);
    }

    #[test]
    fn test_slug_segments_also_match() {
        // The convention is a plain substring test, so a slug token can
        // claim an item too. The index must reproduce that.
        let imgs = images(&["Page3_77_Box_12_Pack.png"]);
        assert_eq!(resolve_image("12", &imgs), Some("Page3_77_Box_12_Pack.png"));
        let index = ImageIndex::build(&imgs);
        assert_eq!(index.resolve("12"), Some("Page3_77_Box_12_Pack.png"));
    }

    #[test]
    fn test_index_handles_items_with_underscores() {
        let imgs = images(&["Page1_A_B_Widget.png"]);
        let index = ImageIndex::build(&imgs);
        assert_eq!(index.resolve("A_B"), Some("Page1_A_B_Widget.png"));
        assert_eq!(index.resolve("A"), Some("Page1_A_B_Widget.png"));
        assert_eq!(index.resolve("Page1"), None);
        assert_eq!(index.resolve("Widget.png"), None);
    }

    #[test]
    fn test_index_keeps_earliest_file() {
        let imgs = images(&["Page2_5_Second.png", "Page1_5_First.png"]);
        let index = ImageIndex::build(&imgs);
        assert_eq!(index.resolve("5"), Some("Page2_5_Second.png"));
    }

    #[test]
    fn test_image_url_joins_base() {
        assert_eq!(image_url("images/", "a.png"), "images/a.png");
        assert_eq!(image_url("/static/img", "a.png"), "/static/img/a.png");
        assert_eq!(image_url("", "a.png"), "a.png");
    }

    fn arb_filename() -> impl Strategy<Value = String> {
        (
            1u8..40,
            "[0-9A-Z]{1,5}",
            prop::collection::vec("[A-Za-z0-9]{0,4}", 0..4),
        )
            .prop_map(|(page, item, slug)| format!("Page{page}_{item}_{}.png", slug.join("_")))
    }

    proptest! {
        #[test]
        fn prop_resolved_filename_contains_delimited_item(
            item in "[0-9A-Z_]{0,5}",
            imgs in prop::collection::vec(arb_filename(), 0..12),
        ) {
            match resolve_image(&item, &imgs) {
                Some(found) => {
                    let needle = format!("_{item}_");
                    prop_assert!(found.contains(&needle))
                }
                None => prop_assert!(imgs.iter().all(|img| !image_matches(img, &item))),
            }
        }

        #[test]
        fn prop_index_agrees_with_scan(
            item in "[0-9A-Z_]{0,5}",
            imgs in prop::collection::vec(arb_filename(), 0..12),
        ) {
            let index = ImageIndex::build(&imgs);
            prop_assert_eq!(index.resolve(&item), resolve_image(&item, &imgs));
        }
    }
}

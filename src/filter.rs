//! Search and filtering over the product list.
//!
//! A product is visible when it survives, in order: the exclusion rules, the
//! optional category (page) filter, and the free-text search. Filtering never
//! reorders; the result is always a subsequence of the input.

use serde::{Deserialize, Serialize};

use crate::catalog::ProductRecord;

/// Items hidden from every view.
///
/// `items` are matched exactly. `item_prefix` is a single extra rule that
/// hides a whole identifier family (e.g. `8006`, `8006A`, `8006-B`); it does
/// not apply to the entries in `items`. An empty prefix matches nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExclusionRules {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_prefix: Option<String>,
}

impl ExclusionRules {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty() && self.item_prefix.is_none()
    }

    pub fn excludes(&self, item: &str) -> bool {
        if self.items.iter().any(|excluded| excluded == item) {
            return true;
        }
        self.item_prefix
            .as_deref()
            .is_some_and(|prefix| !prefix.is_empty() && item.starts_with(prefix))
    }
}

/// Everything except the search text that decides visibility.
#[derive(Debug, Clone, Default)]
pub struct FilterPolicy {
    pub exclusions: ExclusionRules,
    /// Exact page to show, or every page when `None`.
    pub category: Option<String>,
}

impl FilterPolicy {
    pub fn new(exclusions: ExclusionRules) -> Self {
        FilterPolicy {
            exclusions,
            category: None,
        }
    }

    pub fn with_category(mut self, category: Option<String>) -> Self {
        self.category = category;
        self
    }

    /// Exclusion and category rules, without the search term.
    pub fn admits(&self, product: &ProductRecord) -> bool {
        if self.exclusions.excludes(&product.item) {
            return false;
        }
        match &self.category {
            Some(page) => product.page == *page,
            None => true,
        }
    }
}

/// Case-insensitive substring match.
///
/// Unicode case folding via `unicase`.
fn contains_case_insensitive(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    let haystack_folded = unicase::UniCase::new(haystack).to_folded_case();
    let needle_folded = unicase::UniCase::new(needle).to_folded_case();
    haystack_folded.contains(&needle_folded)
}

/// The search rule: description (any case), item number, or UPC.
pub fn matches_search(product: &ProductRecord, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }

    contains_case_insensitive(&product.description, term)
        || product.item.contains(term)
        || product.upc.contains(term)
}

/// Ordered subsequence of `products` visible under `policy` and `term`.
pub fn filter_products<'a>(
    products: &'a [ProductRecord],
    term: &str,
    policy: &FilterPolicy,
) -> Vec<&'a ProductRecord> {
    let visible: Vec<&ProductRecord> = products
        .iter()
        .filter(|p| policy.admits(p) && matches_search(p, term))
        .collect();

    tracing::debug!(
        "filter term={term:?} category={:?}: {} of {} visible",
        policy.category,
        visible.len(),
        products.len()
    );

    visible
}

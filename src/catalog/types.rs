use serde::{Deserialize, Serialize};

/// A single row of the printed catalog.
///
/// Every field is kept as text exactly as the extraction step produced it.
/// Missing fields deserialize to the empty string so a sparse row still
/// renders (with blank cells) instead of failing the whole load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Category identifier, the page of the print catalog.
    #[serde(rename = "Page", default)]
    pub page: String,

    /// Short item identifier. Not unique across variant families.
    #[serde(rename = "Item", default)]
    pub item: String,

    #[serde(rename = "Description", default)]
    pub description: String,

    /// Units per case, formatted as text.
    #[serde(rename = "CaseCount", default)]
    pub case_count: String,

    /// Suggested retail price, formatted as text.
    #[serde(rename = "Retail", default)]
    pub retail: String,

    #[serde(rename = "UPC", default)]
    pub upc: String,
}

impl ProductRecord {
    /// Convenience constructor used by tests and fixtures.
    pub fn new(page: &str, item: &str, description: &str) -> Self {
        ProductRecord {
            page: page.to_string(),
            item: item.to_string(),
            description: description.to_string(),
            ..Default::default()
        }
    }

    pub fn with_upc(mut self, upc: &str) -> Self {
        self.upc = upc.to_string();
        self
    }

    pub fn with_pricing(mut self, case_count: &str, retail: &str) -> Self {
        self.case_count = case_count.to_string();
        self.retail = retail.to_string();
        self
    }
}

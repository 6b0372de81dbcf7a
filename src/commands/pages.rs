use std::path::Path;

use serde_json::json;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::{CommandOutput, Workspace};
use crate::cli::OutputOptions;
use crate::error::Result;

#[derive(Tabled)]
struct PageRow {
    #[tabled(rename = "Page")]
    page: String,
    #[tabled(rename = "Products")]
    products: usize,
}

/// List the catalog's pages (categories) with product counts
pub fn cmd_pages(catalog_path: Option<&Path>, output: OutputOptions) -> Result<()> {
    let workspace = Workspace::load(catalog_path)?;
    let counts = workspace.catalog.page_counts();

    let json_output = json!(
        counts
            .iter()
            .map(|(page, count)| json!({ "page": page, "products": count }))
            .collect::<Vec<_>>()
    );

    let rows: Vec<PageRow> = counts
        .into_iter()
        .map(|(page, products)| PageRow { page, products })
        .collect();
    let page_total = rows.len();
    let mut table = Table::new(rows);
    table.with(Style::rounded());

    let text = format!("{table}\n\n{page_total} page(s)");
    CommandOutput::new(json_output).with_text(text).print(output)
}

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::utils::truncate_string;
use crate::view::ResolvedProduct;

const DESCRIPTION_WIDTH: usize = 48;

/// A row in the product list table
#[derive(Tabled)]
struct ProductRow {
    #[tabled(rename = "Item")]
    item: String,
    #[tabled(rename = "Page")]
    page: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Case")]
    case_count: String,
    #[tabled(rename = "SRP")]
    retail: String,
    #[tabled(rename = "UPC")]
    upc: String,
    #[tabled(rename = "Photo")]
    photo: String,
}

/// Render the list view as a rounded table.
pub fn format_product_table(products: &[ResolvedProduct<'_>]) -> String {
    let rows: Vec<ProductRow> = products
        .iter()
        .map(|r| ProductRow {
            item: r.product.item.clone(),
            page: r.product.page.clone(),
            description: truncate_string(&r.product.description, DESCRIPTION_WIDTH),
            case_count: r.product.case_count.clone(),
            retail: r.product.retail.clone(),
            upc: r.product.upc.clone(),
            photo: if r.image.is_some() { "yes" } else { "-" }.to_string(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}

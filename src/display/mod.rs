//! Terminal presentation of catalog views.
//!
//! - `formatters`: colored grid-card output
//! - `tables`: `tabled` list view

pub mod formatters;
pub mod tables;

pub use formatters::format_grid;
pub use tables::format_product_table;

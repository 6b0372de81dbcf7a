pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod display;
pub mod error;
pub mod filter;
pub mod gallery;
pub mod missing;
pub mod paths;
pub mod render;
pub mod resolve;
pub mod utils;
pub mod view;

pub use catalog::{Catalog, ProductRecord};
pub use config::Config;
pub use error::{Result, SlateError};
pub use filter::{ExclusionRules, FilterPolicy, filter_products, matches_search};
pub use gallery::{GalleryEntry, build_gallery};
pub use missing::{MissingImage, missing_images};
pub use resolve::{ImageIndex, image_url, resolve_image};
pub use view::{BrowseState, CatalogView, ResolvedProduct, Route, ViewMode};

use std::path::Path;

use owo_colors::OwoColorize;
use serde_json::json;

use super::{CommandOutput, Workspace};
use crate::cli::OutputOptions;
use crate::error::Result;
use crate::missing::{format_report, missing_images};
use crate::utils::write_file;

/// Report products without a photo, optionally writing the list to a file
pub fn cmd_missing(
    catalog_path: Option<&Path>,
    report_path: Option<&Path>,
    output: OutputOptions,
) -> Result<()> {
    let workspace = Workspace::load(catalog_path)?;
    let missing = missing_images(&workspace.catalog);

    if let Some(path) = report_path {
        write_file(path, &format_report(&missing))?;
        let json_output = json!({
            "missing": missing.len(),
            "report": path.display().to_string(),
        });
        let text = format!(
            "Found {} items missing photos. List saved to {}",
            missing.len(),
            path.display()
        );
        return CommandOutput::new(json_output).with_text(text).print(output);
    }

    let mut text = format_report(&missing);
    text.push_str(&format!(
        "{}",
        format!("{} item(s) missing photos", missing.len()).dimmed()
    ));
    CommandOutput::new(json!(missing)).with_text(text).print(output)
}

pub mod text;

use std::fs;
use std::path::Path;

use jiff::Timestamp;

use crate::error::{Result, SlateError};

pub use text::{fit_width, truncate_string};

/// Ensure the parent directory of a path exists, creating it if necessary.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| {
            SlateError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to create directory at {}: {}", parent.display(), e),
            ))
        })?;
    }
    Ok(())
}

/// Write `content` to `path`, creating parent directories first.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    ensure_parent_dir(path)?;
    fs::write(path, content).map_err(|e| {
        SlateError::Io(std::io::Error::new(
            e.kind(),
            format!("Failed to write {}: {}", path.display(), e),
        ))
    })
}

/// Current time as an ISO 8601 timestamp, second precision.
pub fn iso_date() -> String {
    let now = Timestamp::now();
    now.strftime("%Y-%m-%dT%H:%M:%SZ").to_string()
}

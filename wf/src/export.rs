//! Itinerary export
//!
//! The markdown is written verbatim, UTF-8, to a fixed filename, and copied
//! to the system clipboard untransformed.

use std::fs;
use std::path::{Path, PathBuf};

use eyre::{Context, Result};
use tracing::info;

use crate::domain::Itinerary;

/// Fixed export filename
pub const EXPORT_FILENAME: &str = "travel-plan.md";

/// Write the itinerary to `<dir>/travel-plan.md`, returning the path
pub fn write_plan(itinerary: &Itinerary, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(EXPORT_FILENAME);
    fs::write(&path, itinerary.as_markdown())
        .context(format!("Failed to write {}", path.display()))?;
    info!(path = %path.display(), "write_plan: exported itinerary");
    Ok(path)
}

/// Copy the itinerary text to the system clipboard
pub fn copy_to_clipboard(itinerary: &Itinerary) -> Result<()> {
    let mut clipboard = arboard::Clipboard::new().context("Failed to open system clipboard")?;
    clipboard
        .set_text(itinerary.as_markdown().to_string())
        .context("Failed to copy itinerary to clipboard")?;
    Ok(())
}

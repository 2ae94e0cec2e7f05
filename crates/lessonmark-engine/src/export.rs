//! Copy and export of the raw generated text. Both are verbatim: nothing
//! parsed or rendered is ever written out.

use std::fs;
use std::path::{Path, PathBuf};

use crate::content::RawContent;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Nothing to export: content is empty")]
    EmptyContent,
}

/// Derives a file name from a title: every character outside `[A-Za-z0-9]`
/// becomes `_`, the result is lowercased and `.txt` appended.
///
/// ```
/// use lessonmark_engine::export::export_filename;
///
/// assert_eq!(export_filename("Photosynthesis Quiz"), "photosynthesis_quiz.txt");
/// ```
pub fn export_filename(title: &str) -> String {
    if title.is_empty() {
        return "export.txt".to_string();
    }
    let slug: String = title
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();
    format!("{slug}.txt")
}

/// Writes the verbatim text to `<dir>/<export_filename(title)>`, creating
/// `dir` if needed, and returns the path written.
pub fn write_export(dir: &Path, title: &str, raw: &RawContent) -> Result<PathBuf, ExportError> {
    if raw.as_str().is_empty() {
        return Err(ExportError::EmptyContent);
    }

    fs::create_dir_all(dir)?;
    let path = dir.join(export_filename(title));
    fs::write(&path, raw.as_str())?;

    log::debug!("exported {} bytes to {}", raw.as_str().len(), path.display());
    Ok(path)
}

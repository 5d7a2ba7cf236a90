//! Writing rendered output to a file

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::info;

use super::config::OutputFormat;

/// Write `content` to `path` as UTF-8, ending with a single newline.
///
/// A path without an extension gets the format's default one, so
/// `tree` saved as JSON lands in `tree.json`. Returns the path written.
pub fn save_artifact(path: &Path, content: &str, format: OutputFormat) -> io::Result<PathBuf> {
    let target = if path.extension().is_none() {
        path.with_extension(format.default_extension())
    } else {
        path.to_path_buf()
    };

    let mut data = String::with_capacity(content.len() + 1);
    data.push_str(content.trim_end_matches('\n'));
    data.push('\n');
    fs::write(&target, data)?;

    info!("saved: {}", target.display());
    Ok(target)
}

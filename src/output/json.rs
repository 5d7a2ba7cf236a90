//! JSON output formatting

use std::io;

use crate::error::RenderError;
use crate::tree::FolderTree;

/// Serialize the tree as pretty-printed JSON: two-space indent, keys in
/// tree order, non-ASCII names written literally.
pub fn to_json(tree: &FolderTree) -> Result<String, RenderError> {
    Ok(serde_json::to_string_pretty(tree)?)
}

/// Print tree as pretty-printed JSON to stdout.
pub fn print_json(tree: &FolderTree) -> io::Result<()> {
    let json = to_json(tree).map_err(io::Error::other)?;
    println!("{}", json);
    Ok(())
}

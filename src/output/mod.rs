//! Tree formatting and display
//!
//! - `config` - output configuration types
//! - `text` - indented outline formatter
//! - `json` - JSON output
//! - `save` - writing a rendered artifact to disk

mod config;
mod json;
mod save;
mod text;

pub use config::{IndentStyle, OutputConfig, OutputFormat};
pub use json::{print_json, to_json};
pub use save::save_artifact;
pub use text::TextFormatter;

use crate::error::RenderError;
use crate::tree::FolderTree;

/// Render `tree` in the configured format. Cheap enough to call on every
/// option change; the tree is never rebuilt.
pub fn render(tree: &FolderTree, config: &OutputConfig) -> Result<String, RenderError> {
    match config.format {
        OutputFormat::Text => Ok(TextFormatter::new(config.indent.clone()).format(tree)),
        OutputFormat::Json => to_json(tree),
    }
}

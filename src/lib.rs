//! Foldertree - render a directory as an indented outline or nested JSON

pub mod error;
pub mod input;
pub mod output;
pub mod session;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{RenderError, ScanError, ScanResult};
pub use input::parse_dropped_path;
pub use output::{
    IndentStyle, OutputConfig, OutputFormat, TextFormatter, print_json, render, save_artifact,
    to_json,
};
pub use session::Session;
pub use tree::{FolderTree, Scan, ScanWarning, TreeNode, TreeWalker, WarningKind, build_tree};

//! Directory tree building
//!
//! - `node` - the `TreeNode` / `FolderTree` model and its JSON shape
//! - `walker` - `TreeWalker`, which builds a tree from a root path
//! - `scan` - the build result and its recovered warnings

mod node;
mod scan;
mod utils;
mod walker;

pub use node::{Children, DIR_MARKER, FolderTree, TreeNode, dir_key};
pub use scan::{Scan, ScanWarning, WarningKind};
pub use utils::root_name;
pub use walker::{TreeWalker, build_tree};

//! TreeWalker - builds the full folder tree in memory

use std::collections::HashSet;
use std::fs::DirEntry;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::error::{ScanError, ScanResult};

use super::node::{Children, FolderTree, TreeNode, dir_key};
use super::scan::{Scan, ScanWarning};
use super::utils::{entry_name, read_sorted_entries, root_name};

/// Depth-first directory walker.
///
/// Symlinks are followed, so a link to a directory is listed as a
/// directory. There is no cycle detection: a looping link recurses until
/// the OS refuses to resolve the path (ELOOP), at which point the
/// innermost link no longer resolves to a directory and is listed as a
/// file.
#[derive(Debug, Default, Clone, Copy)]
pub struct TreeWalker;

impl TreeWalker {
    pub fn new() -> Self {
        Self
    }

    /// Walk `root` and build a fresh tree.
    ///
    /// Fails only when `root` itself cannot be listed. Unreadable
    /// descendants become empty directories and are reported in
    /// [`Scan::warnings`].
    pub fn walk(&self, root: &Path) -> ScanResult<Scan> {
        info!("processing: {}", root.display());

        let entries = open_root(root)?;
        let mut warnings = Vec::new();
        let children = self.walk_entries(entries, &mut warnings);
        let tree = FolderTree::new(&root_name(root), children);

        let (dirs, files) = tree.count();
        info!(
            dirs,
            files,
            warnings = warnings.len(),
            "done: {}",
            root.display()
        );

        Ok(Scan {
            root_path: root.to_path_buf(),
            tree,
            warnings,
        })
    }

    fn walk_dir(&self, path: &Path, warnings: &mut Vec<ScanWarning>) -> Children {
        match read_sorted_entries(path) {
            Ok(entries) => self.walk_entries(entries, warnings),
            Err(err) => {
                let warning = ScanWarning::from_io(path, &err);
                warn!("{}", warning);
                warnings.push(warning);
                Children::new()
            }
        }
    }

    fn walk_entries(&self, entries: Vec<DirEntry>, warnings: &mut Vec<ScanWarning>) -> Children {
        let mut children = Children::with_capacity(entries.len());
        let mut seen = HashSet::with_capacity(entries.len());

        for entry in entries {
            let name = entry_name(&entry);
            let entry_path = entry.path();
            let is_dir = entry_path.is_dir();

            let mut key = entry_key(&name, is_dir);
            if seen.contains(&key) {
                key = renamed_key(&name, is_dir, &seen);
                let warning = ScanWarning::name_collision(&entry_path, &key);
                warn!("{}", warning);
                warnings.push(warning);
            }
            seen.insert(key.clone());

            if is_dir {
                debug!("descending into {}", entry_path.display());
                let subtree = self.walk_dir(&entry_path, warnings);
                children.push((key, TreeNode::Directory(subtree)));
            } else {
                children.push((key, TreeNode::File));
            }
        }

        children
    }
}

fn entry_key(name: &str, is_dir: bool) -> String {
    if is_dir { dir_key(name) } else { name.to_string() }
}

/// First free key of the form `name~2`, `name~3`, ... for an entry whose
/// plain key a sibling already took. Only escaped non-UTF-8 names can clash.
fn renamed_key(name: &str, is_dir: bool, seen: &HashSet<String>) -> String {
    let mut n = 2;
    loop {
        let candidate = entry_key(&format!("{}~{}", name, n), is_dir);
        if !seen.contains(&candidate) {
            return candidate;
        }
        n += 1;
    }
}

/// Build a tree rooted at `root` with the default walker.
pub fn build_tree(root: impl AsRef<Path>) -> ScanResult<Scan> {
    TreeWalker::new().walk(root.as_ref())
}

fn open_root(root: &Path) -> ScanResult<Vec<DirEntry>> {
    let metadata = std::fs::metadata(root).map_err(|source| match source.kind() {
        std::io::ErrorKind::NotFound => ScanError::NotFound {
            path: root.to_path_buf(),
        },
        _ => ScanError::Unreadable {
            path: root.to_path_buf(),
            source,
        },
    })?;

    if !metadata.is_dir() {
        return Err(ScanError::NotADirectory {
            path: root.to_path_buf(),
        });
    }

    read_sorted_entries(root).map_err(|source| ScanError::Unreadable {
        path: root.to_path_buf(),
        source,
    })
}

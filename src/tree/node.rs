//! Folder tree data model and its JSON shape
//!
//! A tree serializes as nested JSON objects keyed by entry name. Directory
//! keys carry a trailing [`DIR_MARKER`] and map to objects (possibly `{}`),
//! file keys map to `null`:
//!
//! ```json
//! {
//!   "project/": {
//!     "README.md": null,
//!     "src/": {
//!       "main.rs": null
//!     }
//!   }
//! }
//! ```
//!
//! Key order is the stored order, which the walker fills in sorted by name.

use std::collections::HashSet;
use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Appended to directory names so a file and a directory with the same
/// name get distinct keys.
pub const DIR_MARKER: char = '/';

/// Entries of one directory as `(key, node)` pairs in display order.
pub type Children = Vec<(String, TreeNode)>;

/// A node of the folder tree. Files have no children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeNode {
    Directory(Children),
    File,
}

impl TreeNode {
    pub fn is_dir(&self) -> bool {
        matches!(self, TreeNode::Directory(_))
    }

    /// Child entries; empty for files.
    pub fn children(&self) -> &[(String, TreeNode)] {
        match self {
            TreeNode::Directory(children) => children,
            TreeNode::File => &[],
        }
    }

    /// Look up a direct child by its rendered key.
    pub fn get(&self, key: &str) -> Option<&TreeNode> {
        self.children()
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, node)| node)
    }

    /// Count directories and files below this node (the node itself excluded).
    pub fn count(&self) -> (usize, usize) {
        self.children()
            .iter()
            .fold((0, 0), |(dirs, files), (_, node)| match node {
                TreeNode::Directory(_) => {
                    let (d, f) = node.count();
                    (dirs + 1 + d, files + f)
                }
                TreeNode::File => (dirs, files + 1),
            })
    }
}

/// Render a directory name as a key.
pub fn dir_key(name: &str) -> String {
    let mut key = String::with_capacity(name.len() + 1);
    key.push_str(name);
    key.push(DIR_MARKER);
    key
}

/// A complete tree: a single root directory entry and its listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderTree {
    key: String,
    root: TreeNode,
}

impl FolderTree {
    /// Build a tree whose root directory is named `root_name`.
    pub fn new(root_name: &str, children: Children) -> Self {
        Self {
            key: dir_key(root_name),
            root: TreeNode::Directory(children),
        }
    }

    /// The root entry's key, including the trailing marker.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The root directory node. Always a [`TreeNode::Directory`].
    pub fn root(&self) -> &TreeNode {
        &self.root
    }

    pub fn children(&self) -> &[(String, TreeNode)] {
        self.root.children()
    }

    /// Follow a path of keys from the root, e.g. `["src/", "main.rs"]`.
    pub fn find(&self, keys: &[&str]) -> Option<&TreeNode> {
        keys.iter().try_fold(&self.root, |node, key| node.get(key))
    }

    /// Count directories and files below the root.
    pub fn count(&self) -> (usize, usize) {
        self.root.count()
    }
}

// =============================================================================
// Serialization
// =============================================================================

impl Serialize for TreeNode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            TreeNode::Directory(children) => {
                let mut map = serializer.serialize_map(Some(children.len()))?;
                for (key, node) in children {
                    map.serialize_entry(key, node)?;
                }
                map.end()
            }
            TreeNode::File => serializer.serialize_unit(),
        }
    }
}

impl Serialize for FolderTree {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.key, &self.root)?;
        map.end()
    }
}

// =============================================================================
// Deserialization
// =============================================================================

impl<'de> Deserialize<'de> for TreeNode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(TreeNodeVisitor)
    }
}

struct TreeNodeVisitor;

impl<'de> Visitor<'de> for TreeNodeVisitor {
    type Value = TreeNode;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an object for a directory or null for a file")
    }

    fn visit_unit<E>(self) -> Result<TreeNode, E>
    where
        E: de::Error,
    {
        Ok(TreeNode::File)
    }

    fn visit_none<E>(self) -> Result<TreeNode, E>
    where
        E: de::Error,
    {
        Ok(TreeNode::File)
    }

    fn visit_map<M>(self, mut map: M) -> Result<TreeNode, M::Error>
    where
        M: MapAccess<'de>,
    {
        let mut children = Children::new();
        let mut seen = HashSet::new();

        while let Some(key) = map.next_key::<String>()? {
            let node: TreeNode = map.next_value()?;

            if node.is_dir() != key.ends_with(DIR_MARKER) {
                return Err(de::Error::custom(format!(
                    "entry '{}' does not match its kind: only directory keys end with '{}'",
                    key, DIR_MARKER
                )));
            }
            if !seen.insert(key.clone()) {
                return Err(de::Error::custom(format!("duplicate entry '{}'", key)));
            }
            children.push((key, node));
        }

        Ok(TreeNode::Directory(children))
    }
}

impl<'de> Deserialize<'de> for FolderTree {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(FolderTreeVisitor)
    }
}

struct FolderTreeVisitor;

impl<'de> Visitor<'de> for FolderTreeVisitor {
    type Value = FolderTree;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an object with a single root directory entry")
    }

    fn visit_map<M>(self, mut map: M) -> Result<FolderTree, M::Error>
    where
        M: MapAccess<'de>,
    {
        let Some(key) = map.next_key::<String>()? else {
            return Err(de::Error::invalid_length(0, &self));
        };
        let root: TreeNode = map.next_value()?;

        if !root.is_dir() || !key.ends_with(DIR_MARKER) {
            return Err(de::Error::custom(format!(
                "root entry '{}' must be a directory",
                key
            )));
        }
        if map.next_key::<de::IgnoredAny>()?.is_some() {
            return Err(de::Error::custom("tree has more than one root entry"));
        }

        Ok(FolderTree { key, root })
    }
}

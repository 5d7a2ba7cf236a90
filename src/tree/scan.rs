//! Result of a tree build: the tree plus any recovered read failures

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use super::node::FolderTree;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningKind {
    PermissionDenied,
    Io,
    NameCollision,
}

/// Something the walk recovered from: a descendant directory that could
/// not be listed (recorded as empty), or an entry whose rendered name
/// clashed with a sibling's and was renamed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanWarning {
    pub path: PathBuf,
    pub kind: WarningKind,
    pub message: String,
}

impl ScanWarning {
    pub fn from_io(path: &Path, err: &io::Error) -> Self {
        let kind = match err.kind() {
            io::ErrorKind::PermissionDenied => WarningKind::PermissionDenied,
            _ => WarningKind::Io,
        };
        Self {
            path: path.to_path_buf(),
            kind,
            message: err.to_string(),
        }
    }

    /// `path` was stored under `key` because its plain name was taken.
    pub fn name_collision(path: &Path, key: &str) -> Self {
        Self {
            path: path.to_path_buf(),
            kind: WarningKind::NameCollision,
            message: key.to_string(),
        }
    }
}

impl fmt::Display for ScanWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            WarningKind::PermissionDenied => {
                write!(f, "permission denied: {}", self.path.display())
            }
            WarningKind::Io => {
                write!(f, "cannot read {}: {}", self.path.display(), self.message)
            }
            WarningKind::NameCollision => {
                write!(
                    f,
                    "duplicate name, listed {} as '{}'",
                    self.path.display(),
                    self.message
                )
            }
        }
    }
}

/// A freshly built tree with the warnings collected while building it,
/// in the order they occurred.
#[derive(Debug, Clone)]
pub struct Scan {
    pub root_path: PathBuf,
    pub tree: FolderTree,
    pub warnings: Vec<ScanWarning>,
}

impl Scan {
    pub fn is_complete(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Most recent warning, if any.
    pub fn last_warning(&self) -> Option<&ScanWarning> {
        self.warnings.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_display() {
        let denied = ScanWarning::from_io(
            Path::new("/data/locked"),
            &io::Error::from(io::ErrorKind::PermissionDenied),
        );
        assert_eq!(denied.kind, WarningKind::PermissionDenied);
        assert_eq!(denied.to_string(), "permission denied: /data/locked");

        let other = ScanWarning::from_io(
            Path::new("/data/loop"),
            &io::Error::other("too many levels of symbolic links"),
        );
        assert_eq!(other.kind, WarningKind::Io);
        assert_eq!(
            other.to_string(),
            "cannot read /data/loop: too many levels of symbolic links"
        );

        let renamed = ScanWarning::name_collision(Path::new("/data/\\xff"), "\\xff~2");
        assert_eq!(renamed.kind, WarningKind::NameCollision);
        assert_eq!(
            renamed.to_string(),
            "duplicate name, listed /data/\\xff as '\\xff~2'"
        );
    }
}

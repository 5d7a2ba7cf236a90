//! Error types for building and rendering folder trees

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// A failure to open the root directory. Descendant read failures never
/// surface here; they are recovered and reported as [`ScanWarning`]s.
///
/// [`ScanWarning`]: crate::tree::ScanWarning
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("no such file or directory: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("not a folder: {}", path.display())]
    NotADirectory { path: PathBuf },

    #[error("cannot read {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ScanError {
    /// The root path the build was attempted on.
    pub fn path(&self) -> &Path {
        match self {
            ScanError::NotFound { path }
            | ScanError::NotADirectory { path }
            | ScanError::Unreadable { path, .. } => path,
        }
    }

    pub fn is_not_a_directory(&self) -> bool {
        matches!(self, ScanError::NotADirectory { .. })
    }
}

/// Rendering is a structural transform and only fails on a malformed tree.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to serialize tree: {0}")]
    Json(#[from] serde_json::Error),
}

pub type ScanResult<T> = Result<T, ScanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_path() {
        let err = ScanError::NotFound {
            path: PathBuf::from("/nope"),
        };
        assert_eq!(err.to_string(), "no such file or directory: /nope");

        let err = ScanError::NotADirectory {
            path: PathBuf::from("notes.txt"),
        };
        assert!(err.is_not_a_directory());
        assert_eq!(err.to_string(), "not a folder: notes.txt");
    }

    #[test]
    fn test_unreadable_keeps_source() {
        use std::error::Error as _;

        let err = ScanError::Unreadable {
            path: PathBuf::from("locked"),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        };
        assert_eq!(err.path(), Path::new("locked"));
        assert!(err.source().is_some());
        assert!(!err.is_not_a_directory());
    }
}

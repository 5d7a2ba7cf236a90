//! Shared helpers for naming and listing directory entries

use std::ffi::OsStr;
use std::fs::{self, DirEntry};
use std::io;
use std::path::Path;

/// Name of the root entry: the last path component, or the whole path
/// string when there is none (a filesystem root, `.` or `..`).
pub fn root_name(path: &Path) -> String {
    display_name(path.file_name().unwrap_or(path.as_os_str()))
}

pub fn entry_name(entry: &DirEntry) -> String {
    display_name(&entry.file_name())
}

/// Render a file name as a string. Bytes that are not valid UTF-8 are
/// written as `\xNN` escapes, so distinct names stay distinct.
pub fn display_name(name: &OsStr) -> String {
    if let Some(name) = name.to_str() {
        return name.to_string();
    }

    let mut out = String::new();
    for chunk in name.as_encoded_bytes().utf8_chunks() {
        out.push_str(chunk.valid());
        out.extend(chunk.invalid().escape_ascii().map(char::from));
    }
    out
}

/// List a directory sorted by raw file name. Case-sensitive, with
/// directories and files in one namespace.
pub fn read_sorted_entries(path: &Path) -> io::Result<Vec<DirEntry>> {
    let mut entries = fs::read_dir(path)?.collect::<io::Result<Vec<_>>>()?;
    entries.sort_by_key(|a| a.file_name());
    Ok(entries)
}

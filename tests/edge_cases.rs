//! Edge case and error handling tests for foldertree


use foldertree::{ScanError, TreeNode, build_tree};
use harness::{TestDir, run_foldertree};

// ============================================================================
// Root Failures
// ============================================================================

#[test]
fn test_nonexistent_root() {
    let dir = TestDir::new();
    let (stdout, stderr, success) = run_foldertree(dir.path(), &["does-not-exist"]);
    assert!(!success, "missing root should fail");
    assert!(stdout.is_empty());
    assert!(
        stderr.contains("cannot access 'does-not-exist'"),
        "stderr: {}",
        stderr
    );
}

#[test]
fn test_file_root_reports_not_a_folder() {
    let dir = TestDir::new();
    dir.add_file("plain.txt", "content");

    let (_stdout, stderr, success) = run_foldertree(dir.path(), &["plain.txt"]);
    assert!(!success);
    assert!(stderr.contains("is not a folder"), "stderr: {}", stderr);
}

#[test]
fn test_missing_root_error_kind() {
    let dir = TestDir::new();
    let err = build_tree(dir.path().join("gone")).unwrap_err();
    assert!(matches!(err, ScanError::NotFound { .. }));
}

// ============================================================================
// Ordering and Naming
// ============================================================================

#[test]
fn test_case_sensitive_flat_order() {
    let dir = TestDir::new();
    dir.add_file("b", "");
    dir.add_file("a.txt", "");
    dir.add_dir("A");
    dir.add_dir("B");

    let (stdout, _stderr, success) = run_foldertree(dir.path(), &["."]);
    assert!(success);
    assert_eq!(stdout, "./\n  A/\n  B/\n  a.txt\n  b\n");
}

#[test]
fn test_name_prefix_sorts_before_extension() {
    let dir = TestDir::new();
    dir.add_dir("sub");
    dir.add_file("sub/x", "");
    dir.add_file("sub/x.d/y", "");

    let scan = build_tree(dir.path().join("sub")).unwrap();
    let keys: Vec<&str> = scan.tree.children().iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(keys, vec!["x", "x.d/"]);
}

#[test]
fn test_filename_with_unicode() {
    let dir = TestDir::new();
    dir.add_file("日本語.rs", "");
    dir.add_file("émoji_🎉.rs", "");
    dir.add_file("中文目录/文件.rs", "");

    let (stdout, _stderr, success) = run_foldertree(dir.path(), &[".", "-f", "json"]);
    assert!(success, "foldertree should handle unicode filenames");
    assert!(stdout.contains("\"日本語.rs\": null"));
    assert!(stdout.contains("\"émoji_🎉.rs\": null"));
    assert!(stdout.contains("\"中文目录/\": {"));
}

#[test]
fn test_filename_with_spaces() {
    let dir = TestDir::new();
    dir.add_file("file with spaces.txt", "");
    dir.add_file("dir with spaces/nested.txt", "");

    let (stdout, _stderr, success) = run_foldertree(dir.path(), &["."]);
    assert!(success);
    assert_eq!(
        stdout,
        "./\n  dir with spaces/\n    nested.txt\n  file with spaces.txt\n"
    );
}

#[test]
fn test_hidden_files_listed() {
    let dir = TestDir::new();
    dir.add_file(".gitignore", "");
    dir.add_file(".git/HEAD", "");

    let (stdout, _stderr, success) = run_foldertree(dir.path(), &["."]);
    assert!(success);
    assert_eq!(stdout, "./\n  .git/\n    HEAD\n  .gitignore\n");
}

// ============================================================================
// Symlinks
// ============================================================================

#[test]
#[cfg(unix)]
fn test_broken_symlink_is_a_file() {
    use std::os::unix::fs::symlink;

    let dir = TestDir::new();
    dir.add_file("real.txt", "");
    symlink("nonexistent.txt", dir.path().join("broken_link")).unwrap();

    let scan = build_tree(dir.path()).unwrap();
    assert_eq!(scan.tree.find(&["broken_link"]), Some(&TreeNode::File));
    assert!(scan.is_complete());
}

#[test]
#[cfg(unix)]
fn test_self_referential_symlink() {
    use std::os::unix::fs::symlink;

    let dir = TestDir::new();
    dir.add_file("file.txt", "");
    symlink("selfref", dir.path().join("selfref")).unwrap();

    let (stdout, _stderr, success) = run_foldertree(dir.path(), &["."]);
    assert!(success, "self-referential symlink should not fail the build");
    assert_eq!(stdout, "./\n  file.txt\n  selfref\n");
}

// ============================================================================
// Permission Error Handling
// ============================================================================

#[test]
#[cfg(unix)]
fn test_unreadable_directory() {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    let dir = TestDir::new();
    dir.add_file("readable/file.txt", "");
    let unreadable = dir.add_dir("unreadable");
    fs::write(unreadable.join("hidden.txt"), "").unwrap();

    fs::set_permissions(&unreadable, fs::Permissions::from_mode(0o000)).unwrap();
    let denied = fs::read_dir(&unreadable).is_err();
    let (stdout, stderr, success) = run_foldertree(dir.path(), &["."]);
    let (json, _, _) = run_foldertree(dir.path(), &[".", "-f", "json"]);
    fs::set_permissions(&unreadable, fs::Permissions::from_mode(0o755)).unwrap();

    assert!(success, "unreadable directories should not fail the build");
    assert!(stdout.contains("readable/\n    file.txt\n"));
    if denied {
        assert!(stdout.ends_with("  unreadable/\n"), "stdout: {}", stdout);
        assert!(!stdout.contains("hidden.txt"));
        assert!(json.contains("\"unreadable/\": {}"));
        assert!(
            stderr.contains("warning: permission denied") && stderr.contains("unreadable"),
            "stderr: {}",
            stderr
        );
    }
}

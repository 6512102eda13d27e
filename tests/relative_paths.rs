//! Relative-path coverage for the durable primitives.
//!
//! Kept in its own test binary: the cases below change the process working
//! directory, which must not race the absolute-path suites.

use std::path::Path;

use holdfast::{durable_remove, durable_replace, SystemErrorCode};

#[test]
fn bare_filename_replace_and_remove_roundtrip() {
    let td = tempfile::tempdir().unwrap();
    std::env::set_current_dir(td.path()).unwrap();

    // Replace on a bare relative filename: the parent fsync falls back to the
    // current directory instead of tripping over the empty parent path.
    durable_replace(Path::new("f.txt"), b"foo").unwrap();
    assert_eq!(std::fs::read("f.txt").unwrap(), b"foo");

    durable_replace(Path::new("f.txt"), b"bar").unwrap();
    assert_eq!(std::fs::read("f.txt").unwrap(), b"bar");

    durable_remove(Path::new("f.txt")).unwrap();
    assert!(!Path::new("f.txt").exists());

    let err = durable_remove(Path::new("f.txt")).unwrap_err();
    assert_eq!(err.code(), Some(SystemErrorCode::Enoent));
    assert_eq!(err.syscall(), "unlink");

    // Relative path with an explicit parent component still works.
    std::fs::create_dir("sub").unwrap();
    durable_replace(Path::new("sub/g.txt"), b"nested").unwrap();
    assert_eq!(std::fs::read("sub/g.txt").unwrap(), b"nested");
    durable_remove(Path::new("sub/g.txt")).unwrap();
    assert!(!Path::new("sub/g.txt").exists());
}

use std::os::unix::fs::MetadataExt;

use holdfast::{durable_replace, durable_replace_in, DirHandle, SystemErrorCode};

#[test]
fn replace_on_fresh_path_yields_exact_contents() {
    let td = tempfile::tempdir().unwrap();
    let path = td.path().join("f.txt");
    durable_replace(&path, b"foo").unwrap();
    assert_eq!(std::fs::read(&path).unwrap(), b"foo");
}

#[test]
fn successive_replaces_always_observe_whole_contents() {
    let td = tempfile::tempdir().unwrap();
    let path = td.path().join("data.bin");
    let c1 = vec![b'a'; 8192];
    let c2 = vec![b'b'; 16];
    durable_replace(&path, &c1).unwrap();
    assert_eq!(std::fs::read(&path).unwrap(), c1);
    durable_replace(&path, &c2).unwrap();
    // Shorter second payload: any in-place overwrite would leave a suffix of
    // c1 behind; a whole-file rename leaves exactly c2.
    assert_eq!(std::fs::read(&path).unwrap(), c2);
}

#[test]
fn replacement_arrives_by_rename_not_in_place_write() {
    let td = tempfile::tempdir().unwrap();
    let path = td.path().join("swap.txt");
    durable_replace(&path, b"old").unwrap();
    let ino_before = std::fs::metadata(&path).unwrap().ino();
    durable_replace(&path, b"new").unwrap();
    let ino_after = std::fs::metadata(&path).unwrap().ino();
    assert_ne!(ino_before, ino_after, "destination should be a renamed staging file");
    assert_eq!(std::fs::read(&path).unwrap(), b"new");
}

#[test]
fn caller_supplied_handle_is_used_and_survives_the_call() {
    let td = tempfile::tempdir().unwrap();
    let path = td.path().join("g.txt");
    let dir = DirHandle::open(td.path()).unwrap();
    durable_replace_in(&dir, &path, b"bytes").unwrap();
    assert_eq!(std::fs::read(&path).unwrap(), b"bytes");
    // Still usable afterwards: the primitive must not have closed it.
    dir.sync_all().unwrap();
    durable_replace_in(&dir, &path, b"more").unwrap();
    assert_eq!(std::fs::read(&path).unwrap(), b"more");
}

#[test]
fn missing_destination_directory_fails_at_the_rename_step() {
    let td = tempfile::tempdir().unwrap();
    let path = td.path().join("nowhere").join("f.txt");
    let err = durable_replace(&path, b"x").unwrap_err();
    assert_eq!(err.code(), Some(SystemErrorCode::Enoent));
    assert_eq!(err.syscall(), "rename");
    assert!(!path.exists());
}

#[test]
fn empty_contents_are_valid() {
    let td = tempfile::tempdir().unwrap();
    let path = td.path().join("empty");
    durable_replace(&path, b"first").unwrap();
    durable_replace(&path, b"").unwrap();
    assert_eq!(std::fs::read(&path).unwrap(), b"");
}

//! Durable single-file removal.
//!
//! Unlink the target, then fsync the parent directory so the removal itself
//! reaches stable storage instead of sitting in the directory's dirty
//! metadata. If the unlink fails, no directory is opened or fsynced.
use std::path::Path;

use rustix::fs::unlink;

use crate::fs::sys::{errno_to_io, invoke, sync_parent_dir, DirHandle};
use crate::types::errors::Result;

/// Remove the file at `path`, durably.
///
/// Opens `path`'s parent directory internally for the entry fsync and closes
/// it before returning.
///
/// # Errors
///
/// `ENOENT` when `path` is already absent, `EISDIR`/`EPERM` when it is a
/// directory, `EACCES` on permission failure, among others. The unlink
/// failure is returned as-is with no fsync attempted.
pub fn durable_remove(path: &Path) -> Result<()> {
    remove_inner(path, None)
}

/// Like [`durable_remove`], but fsyncs the caller-supplied parent directory
/// handle instead of opening one. The handle is never closed here.
///
/// # Errors
///
/// See [`durable_remove`].
pub fn durable_remove_in(dir: &DirHandle, path: &Path) -> Result<()> {
    remove_inner(path, Some(dir))
}

fn remove_inner(path: &Path, parent: Option<&DirHandle>) -> Result<()> {
    invoke("unlink", path, || unlink(path).map_err(errno_to_io))?;
    sync_parent_dir(path, parent)
}

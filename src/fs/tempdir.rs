//! Unique temp-directory allocation and the scoped lifecycle built on it.
//!
//! `make_temp_dir*` hands ownership of a fresh directory to the caller.
//! `in_temp_dir*` keeps ownership local: the directory is removed recursively
//! after the handler settles, on the success, error, and panic paths alike.
//! Cleanup failure is downgraded to a `log::warn!` diagnostic so it can never
//! mask or override the handler's outcome.
use std::fs;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::constants::TEMP_DIR_PREFIX;
use crate::fs::sys::invoke;
use crate::types::errors::{Error, Result};

fn fresh_name() -> String {
    format!("{TEMP_DIR_PREFIX}{}", Uuid::new_v4())
}

/// Create a uniquely named directory under the OS temp root and return its
/// path. Ownership transfers entirely to the caller; nothing is registered for
/// later cleanup.
///
/// # Errors
///
/// Returns the classified creation failure.
pub fn make_temp_dir() -> Result<PathBuf> {
    make_temp_dir_in(&std::env::temp_dir())
}

/// Create a uniquely named directory under `parent`, creating missing
/// intermediate segments.
///
/// # Errors
///
/// `ENOTDIR` when a segment of `parent` is a regular file, `EACCES` on
/// permission failure, among others.
pub fn make_temp_dir_in(parent: &Path) -> Result<PathBuf> {
    let dir = parent.join(fresh_name());
    invoke("mkdir", &dir, || fs::create_dir_all(&dir))?;
    Ok(dir)
}

/// Removes the temp directory when dropped, so cleanup runs on every exit
/// path out of the handler, including unwinds.
struct CleanupGuard {
    dir: PathBuf,
}

impl Drop for CleanupGuard {
    fn drop(&mut self) {
        if let Err(e) = fs::remove_dir_all(&self.dir) {
            log::warn!("temp dir cleanup failed for {:?}: {e}", self.dir);
        }
    }
}

/// Run `handler` with a scoped temp directory under the OS temp root.
///
/// # Errors
///
/// An allocation failure is returned immediately via `E::from`; otherwise the
/// handler's own result is returned unchanged.
pub fn in_temp_dir<T, E, F>(handler: F) -> std::result::Result<T, E>
where
    F: FnOnce(&Path) -> std::result::Result<T, E>,
    E: From<Error>,
{
    in_temp_dir_at(&std::env::temp_dir(), handler)
}

/// Run `handler` with a scoped temp directory under `parent`.
///
/// The directory is removed recursively after the handler settles; removal
/// failure is logged and never alters the returned result. Callers staging a
/// rename onto another filesystem object should pick `parent` on the same
/// filesystem as the rename destination.
///
/// # Errors
///
/// An allocation failure is returned immediately via `E::from`; otherwise the
/// handler's own result is returned unchanged.
pub fn in_temp_dir_at<T, E, F>(parent: &Path, handler: F) -> std::result::Result<T, E>
where
    F: FnOnce(&Path) -> std::result::Result<T, E>,
    E: From<Error>,
{
    let dir = make_temp_dir_in(parent).map_err(E::from)?;
    let _guard = CleanupGuard { dir: dir.clone() };
    handler(&dir)
}

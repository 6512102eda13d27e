//! Durable, atomic whole-file replacement.
//!
//! The sequence is: stage the full payload in a scoped temp directory with a
//! single `O_SYNC` write, rename the staging file onto the destination, fsync
//! the destination's parent directory. A crash at any point leaves the
//! destination with either its entire previous contents or its entire new
//! contents, never a mixture and never an entry whose data is unflushed.
//!
//! Atomicity of the rename requires the staging directory and the destination
//! to live on the same filesystem. That placement is a caller obligation; a
//! cross-device rename surfaces as an unclassified error (`EXDEV` is outside
//! the recognized code set).
use std::io;
use std::path::Path;

use rustix::fs::{open, rename, Mode, OFlags};

use crate::constants::{STAGING_FILE_MODE, STAGING_FILE_NAME};
use crate::fs::sys::{errno_to_io, invoke, sync_parent_dir, DirHandle};
use crate::fs::tempdir::in_temp_dir;
use crate::types::errors::{Error, Result};

/// Replace the bytes at `path` with `contents`, durably.
///
/// Opens `path`'s parent directory internally for the entry fsync and closes
/// it before returning. Fail-fast: the first failing step is returned and
/// later steps are skipped; the staging temp directory is cleaned up either
/// way.
///
/// # Errors
///
/// The classified failure of whichever step failed first (staging write,
/// rename, parent open, or parent fsync).
pub fn durable_replace(path: &Path, contents: &[u8]) -> Result<()> {
    replace_inner(path, contents, None)
}

/// Like [`durable_replace`], but fsyncs the caller-supplied parent directory
/// handle instead of opening one. The handle's lifecycle stays with the
/// caller; it is never closed here.
///
/// # Errors
///
/// See [`durable_replace`].
pub fn durable_replace_in(dir: &DirHandle, path: &Path, contents: &[u8]) -> Result<()> {
    replace_inner(path, contents, Some(dir))
}

fn replace_inner(path: &Path, contents: &[u8], parent: Option<&DirHandle>) -> Result<()> {
    in_temp_dir(|tmp| {
        let staging = tmp.join(STAGING_FILE_NAME);
        write_synced(&staging, contents)?;
        invoke("rename", path, || {
            rename(staging.as_path(), path).map_err(errno_to_io)
        })?;
        sync_parent_dir(path, parent)
    })
}

/// Write `contents` to `staging` through an `O_SYNC|O_CREAT|O_WRONLY` fd with
/// one write call, so the call does not return until the data is on stable
/// storage. No partial-write retry: a short write is an error.
fn write_synced(staging: &Path, contents: &[u8]) -> Result<()> {
    let fd = invoke("open", staging, || {
        open(
            staging,
            OFlags::WRONLY | OFlags::CREATE | OFlags::SYNC,
            Mode::from_bits_truncate(STAGING_FILE_MODE),
        )
        .map_err(errno_to_io)
    })?;
    let written = invoke("write", staging, || {
        rustix::io::write(&fd, contents).map_err(errno_to_io)
    })?;
    if written != contents.len() {
        return Err(Error::Unknown {
            syscall: "write",
            path: staging.to_path_buf(),
            source: io::Error::new(
                io::ErrorKind::WriteZero,
                format!("short write: {written} of {} bytes", contents.len()),
            ),
        });
    }
    Ok(())
}

//! Syscall adapter and directory handles.
//!
//! `invoke` is the sole boundary where a fallible native call's error becomes a
//! typed [`Error`]. Everything above it uses ordinary `Result` control flow;
//! nothing in this crate inspects raw errnos anywhere else.
use std::io;
use std::os::fd::OwnedFd;
use std::path::{Path, PathBuf};

use rustix::fs::{fsync, open, Mode, OFlags};

use crate::types::errors::{Error, Result, SystemErrorCode};

pub(crate) fn errno_to_io(e: rustix::io::Errno) -> io::Error {
    io::Error::from_raw_os_error(e.raw_os_error())
}

/// Execute one fallible native call and classify its failure.
///
/// On success the call's value passes through untouched. On failure the
/// `io::Error` is matched against the closed [`SystemErrorCode`] set;
/// unrecognized errors degrade to [`Error::Unknown`] with the raw error kept
/// as the source for diagnostics.
///
/// # Errors
///
/// Returns the classified form of whatever error `call` produced.
pub fn invoke<T>(
    syscall: &'static str,
    path: &Path,
    call: impl FnOnce() -> io::Result<T>,
) -> Result<T> {
    call().map_err(|source| classify(syscall, path, source))
}

fn classify(syscall: &'static str, path: &Path, source: io::Error) -> Error {
    match source
        .raw_os_error()
        .and_then(SystemErrorCode::from_raw_os_error)
    {
        Some(code) => Error::System {
            code,
            syscall,
            path: path.to_path_buf(),
            source,
        },
        None => Error::Unknown {
            syscall,
            path: path.to_path_buf(),
            source,
        },
    }
}

/// Exclusively-owned open directory file descriptor, used to fsync a
/// directory's entries to stable storage.
///
/// The fd is opened `O_RDONLY|O_DIRECTORY|O_CLOEXEC` and closed by RAII drop
/// on every exit path. The path may traverse symlinks (so temp roots that are
/// symlinks, like `/tmp` on some platforms, keep working); the `O_DIRECTORY`
/// flag still guarantees the final target is a directory.
/// Primitives that accept a caller-supplied
/// `&DirHandle` fsync through it but structurally cannot close it; handles
/// they open themselves are dropped before they return.
#[derive(Debug)]
pub struct DirHandle {
    fd: OwnedFd,
    path: PathBuf,
}

impl DirHandle {
    /// Open `dir` for directory fsync.
    ///
    /// # Errors
    ///
    /// `ENOENT` if the directory is missing, `ENOTDIR` if the path is not a
    /// directory, `EACCES` on permission failure, among others.
    pub fn open(dir: &Path) -> Result<Self> {
        let fd = invoke("open", dir, || {
            open(
                dir,
                OFlags::RDONLY | OFlags::DIRECTORY | OFlags::CLOEXEC,
                Mode::empty(),
            )
            .map_err(errno_to_io)
        })?;
        Ok(Self {
            fd,
            path: dir.to_path_buf(),
        })
    }

    /// Flush this directory's entries to stable storage.
    ///
    /// # Errors
    ///
    /// Returns the classified fsync failure.
    pub fn sync_all(&self) -> Result<()> {
        invoke("fsync", &self.path, || {
            fsync(&self.fd).map_err(errno_to_io)
        })
    }

    /// Directory path this handle was opened on.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Durably persist a directory-entry change for `path`.
///
/// With a caller-supplied handle, fsync it directly; its lifecycle stays with
/// the caller. Otherwise open `path`'s parent locally, fsync it, and let drop
/// close the fd whether or not the fsync succeeded.
pub(crate) fn sync_parent_dir(path: &Path, supplied: Option<&DirHandle>) -> Result<()> {
    match supplied {
        Some(dir) => dir.sync_all(),
        None => {
            // `parent()` yields `Some("")` for a bare relative filename; an
            // empty path is not openable, so treat it like the root case and
            // fsync the current directory.
            let parent = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            let dir = DirHandle::open(parent)?;
            dir.sync_all()
        }
    }
}

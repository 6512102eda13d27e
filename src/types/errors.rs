//! Error types used across Holdfast.
//!
//! Native OS failures are classified exactly once, at the syscall-adapter
//! boundary (`fs::sys::invoke`): a recognized errno becomes `Error::System`
//! with one of the closed [`SystemErrorCode`] values, anything else degrades to
//! `Error::Unknown` carrying the raw error for diagnostics. The mapping is
//! total and deterministic so callers can branch on `error_type()`/`code()`
//! to decide retry-vs-fatal upstream.
use std::io;
use std::path::{Path, PathBuf};

use rustix::io::Errno;
use thiserror::Error;

/// High-level error categories.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorType {
    /// Unclassified native failure.
    Unknown,
    /// Recognized POSIX errno from the closed [`SystemErrorCode`] set.
    System,
}

/// Closed set of recognized POSIX error codes.
///
/// Errnos outside this set never panic and never vanish; they surface as
/// [`Error::Unknown`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum SystemErrorCode {
    Eacces,
    Eexist,
    Eisdir,
    Emfile,
    Enoent,
    Enotdir,
    Enotempty,
    Eperm,
}

impl SystemErrorCode {
    /// Map a raw OS errno to a recognized code, or `None` for anything outside
    /// the closed set.
    #[must_use]
    pub fn from_raw_os_error(raw: i32) -> Option<Self> {
        // Compare against rustix's Errno constants so the mapping tracks the
        // target platform's numbering rather than hardcoded values.
        let code = if raw == Errno::ACCESS.raw_os_error() {
            Self::Eacces
        } else if raw == Errno::EXIST.raw_os_error() {
            Self::Eexist
        } else if raw == Errno::ISDIR.raw_os_error() {
            Self::Eisdir
        } else if raw == Errno::MFILE.raw_os_error() {
            Self::Emfile
        } else if raw == Errno::NOENT.raw_os_error() {
            Self::Enoent
        } else if raw == Errno::NOTDIR.raw_os_error() {
            Self::Enotdir
        } else if raw == Errno::NOTEMPTY.raw_os_error() {
            Self::Enotempty
        } else if raw == Errno::PERM.raw_os_error() {
            Self::Eperm
        } else {
            return None;
        };
        Some(code)
    }

    /// Canonical upper-case name, e.g. `"ENOENT"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Eacces => "EACCES",
            Self::Eexist => "EEXIST",
            Self::Eisdir => "EISDIR",
            Self::Emfile => "EMFILE",
            Self::Enoent => "ENOENT",
            Self::Enotdir => "ENOTDIR",
            Self::Enotempty => "ENOTEMPTY",
            Self::Eperm => "EPERM",
        }
    }
}

impl std::fmt::Display for SystemErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured error carrying the failing syscall name and path alongside the
/// classification, so diagnostics stay useful without string matching.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{syscall} on {path:?}: {code}")]
    System {
        code: SystemErrorCode,
        syscall: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{syscall} on {path:?}: unclassified os error")]
    Unknown {
        syscall: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// Category discriminant for caller branching.
    #[must_use]
    pub const fn error_type(&self) -> ErrorType {
        match self {
            Self::System { .. } => ErrorType::System,
            Self::Unknown { .. } => ErrorType::Unknown,
        }
    }

    /// Recognized code, when this is a `System` error.
    #[must_use]
    pub const fn code(&self) -> Option<SystemErrorCode> {
        match self {
            Self::System { code, .. } => Some(*code),
            Self::Unknown { .. } => None,
        }
    }

    /// Name of the native call that failed (`"open"`, `"rename"`, …).
    #[must_use]
    pub const fn syscall(&self) -> &'static str {
        match self {
            Self::System { syscall, .. } | Self::Unknown { syscall, .. } => *syscall,
        }
    }

    /// Path the failing call operated on.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::System { path, .. } | Self::Unknown { path, .. } => path,
        }
    }
}

/// Convenient alias for results returning a `types::Error`.
pub type Result<T> = std::result::Result<T, Error>;

#![forbid(unsafe_code)]
//! Holdfast: durable, crash-consistent file replacement and removal.
//!
//! Durability model highlights:
//! - `durable_replace` stages the full payload inside a scoped temp directory (single
//!   `O_SYNC|O_CREAT|O_WRONLY` write), renames it onto the destination, then fsyncs the
//!   parent directory so the entry change survives a crash.
//! - `durable_remove` unlinks the target and fsyncs the parent directory so the removal
//!   itself is persisted, not just buffered.
//! - Every native call is funneled through one syscall-adapter boundary
//!   (`fs::sys::invoke`) that classifies errnos into a closed typed taxonomy; nothing
//!   above that boundary panics on an OS error.
//! - This crate forbids `unsafe` and uses `rustix` for syscalls.
//!
//! Callers branch on [`Error::error_type`] / [`Error::code`], not on message strings.
//! Atomicity of the rename step requires the staging temp directory and the destination
//! to share a filesystem; choosing a suitable temp parent is a caller obligation.

pub mod constants;
pub mod fs;
pub mod types;

pub use fs::{
    durable_remove, durable_remove_in, durable_replace, durable_replace_in, in_temp_dir,
    in_temp_dir_at, make_temp_dir, make_temp_dir_in, DirHandle,
};
pub use types::errors::{Error, ErrorType, Result, SystemErrorCode};

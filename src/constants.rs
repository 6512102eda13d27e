//! Shared crate-wide constants for Holdfast.
//!
//! Centralizes magic values used across modules. Adjusting these here will
//! propagate through the crate.

/// Fixed filename for the staged payload inside a scoped temp directory.
/// The staging file only ever lives under a freshly allocated temp directory,
/// so a fixed name cannot collide across concurrent calls.
pub const STAGING_FILE_NAME: &str = "staging";

/// Prefix for unique temp-directory names placed under the temp root.
/// The full name is `{TEMP_DIR_PREFIX}{uuid-v4}`; e.g. `holdfast-5f8c…`.
pub const TEMP_DIR_PREFIX: &str = "holdfast-";

/// Permission bits for the staging file created by `durable_replace`.
/// The file is renamed onto the destination, so these become the destination's
/// mode when the destination did not previously exist.
pub const STAGING_FILE_MODE: u32 = 0o600;

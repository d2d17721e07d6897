//! CLI Exit Code Registry
//!
//! Single source of truth for all CLI exit codes. Exit codes are part of
//! the shell contract — scripts rely on them.
//!
//! | Code | Description                                        |
//! |------|----------------------------------------------------|
//! | 0    | Success                                            |
//! | 1    | General error (unspecified)                        |
//! | 2    | CLI usage error (bad args, missing file)           |
//! | 3    | Reconciliation found missing equipment             |
//! | 4    | Invalid recon config                               |
//! | 5    | Catalog scan failed (unreadable unit directory)    |

/// Success - command completed without errors.
pub const EXIT_SUCCESS: u8 = 0;

/// General error - unspecified failure.
pub const EXIT_ERROR: u8 = 1;

/// Usage error - bad arguments, missing required options.
pub const EXIT_USAGE: u8 = 2;

/// Reconciliation completed but base fixed equipment was missing from
/// one or more variants. Like `diff(1)`, nonzero means "work to do."
pub const EXIT_MISSES: u8 = 3;

/// Recon config failed to parse or validate.
pub const EXIT_CONFIG: u8 = 4;

/// Unit catalog could not be built at all.
pub const EXIT_CATALOG: u8 = 5;

//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells, and clap usage errors)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// General failure (storage I/O, unreadable config).
    pub const FAILURE: i32 = 1;

    /// No value stored under the requested key.
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input: empty key or unknown storage method.
    pub const INVALID_INPUT: i32 = 4;

    /// Storage method not available on this host.
    pub const HOST_MISMATCH: i32 = 5;
}

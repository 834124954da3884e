//! Standard exit codes for CLI commands.
//!
//! Every command resolves to one of these so scripts and CI wrappers can
//! distinguish failure classes without parsing output.

/// Command completed successfully.
pub const EXIT_SUCCESS: i32 = 0;

/// Generic failure.
pub const EXIT_ERROR: i32 = 1;

/// Configuration is missing or unusable.
pub const EXIT_CONFIG_ERROR: i32 = 2;

/// The backend rejected the session credential (401/403).
pub const EXIT_AUTH_ERROR: i32 = 3;

/// The backend rejected the request payload (422).
pub const EXIT_VALIDATION_ERROR: i32 = 4;

/// The backend could not be reached.
pub const EXIT_NETWORK_ERROR: i32 = 5;

/// The backend reported a server-side failure (5xx).
pub const EXIT_SERVER_ERROR: i32 = 6;

//! Standard exit codes (BSD sysexits.h compatible)

/// Successful termination, also used for usage messages and unknown commands
pub const OK: i32 = 0;

/// Data format error (response body is not JSON)
pub const DATAERR: i32 = 65;

/// Cannot open input (token file)
pub const NOINPUT: i32 = 66;

/// Service unavailable (transport failure or non-2xx response)
pub const UNAVAILABLE: i32 = 69;

/// Internal software error
pub const SOFTWARE: i32 = 70;

/// Unsupported operating system
pub const OSERR: i32 = 71;

/// Input/output error
pub const IOERR: i32 = 74;

/// Configuration error
pub const CONFIG: i32 = 78;

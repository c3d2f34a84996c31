//! Process exit codes, taken from BSD sysexits.h

/// Bad command line or missing target location
pub const USAGE: i32 = 64;

/// Baseline missing, unreadable or not valid UTF-8
pub const NOINPUT: i32 = 66;

/// Unexpected failure while snapshotting
pub const SOFTWARE: i32 = 70;

/// Folder or file could not be created
pub const CANTCREAT: i32 = 73;

/// Other I/O failure
pub const IOERR: i32 = 74;

/// Config file unreadable or invalid
pub const CONFIG: i32 = 78;

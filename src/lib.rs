//! rskel: recreate directory skeletons from tree listings or existing directories.
//!
//! Layers:
//! - `domain`: structure model and tree listing parser (no I/O)
//! - `application`: baseline loading, directory snapshots, materialization
//! - `infrastructure`: filesystem boundary and service wiring
//! - `cli`: argument parsing, dispatch and terminal output

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;

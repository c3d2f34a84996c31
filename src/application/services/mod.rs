//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services depend on the `FileSystem` I/O boundary trait
//! but are themselves concrete structs, not traits.

mod baseline;
mod materialize;
mod snapshot;

pub use baseline::{Baseline, BaselineKind, BaselineService};
pub use materialize::{MaterializeOptions, MaterializeReport, MaterializeService};
pub use snapshot::{Snapshot, SnapshotService};

//! Domain layer: entities and parsing logic
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod entities;
pub mod error;
pub mod parser;

pub use entities::*;
pub use error::{DomainError, DomainResult};
pub use parser::TreeParser;

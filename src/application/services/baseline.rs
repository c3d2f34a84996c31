//! Baseline loading service
//!
//! Resolves a baseline path to a structure: tree listings are parsed,
//! directories are snapshotted.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, instrument, warn};

use crate::application::services::SnapshotService;
use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::{BaselineWarning, DomainError, Structure, TreeParser};
use crate::infrastructure::traits::FileSystem;

/// Where a baseline came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaselineKind {
    /// UTF-8 text file with a tree listing
    TreeFile,
    /// Existing directory
    Directory,
}

/// Loaded baseline ready for materialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Baseline {
    pub path: PathBuf,
    pub kind: BaselineKind,
    pub structure: Structure,
    pub warnings: Vec<BaselineWarning>,
}

/// Service for loading baselines.
pub struct BaselineService {
    fs: Arc<dyn FileSystem>,
    snapshot: SnapshotService,
    parser: TreeParser,
}

impl BaselineService {
    /// Create a new baseline service.
    pub fn new(fs: Arc<dyn FileSystem>, snapshot: SnapshotService) -> Self {
        Self {
            fs,
            snapshot,
            parser: TreeParser::new(),
        }
    }

    /// Load the baseline at `path`.
    ///
    /// # Errors
    /// - `BaselineRead` if the file cannot be read or is not valid UTF-8
    /// - `InvalidBaseline` if `path` is neither a file nor a directory
    #[instrument(level = "debug", skip(self))]
    pub fn load(&self, path: &Path) -> ApplicationResult<Baseline> {
        if self.fs.is_file(path) {
            let (structure, warnings) = self.parse_file(path)?;
            return Ok(Baseline {
                path: path.to_path_buf(),
                kind: BaselineKind::TreeFile,
                structure,
                warnings,
            });
        }

        if self.fs.is_dir(path) {
            let snapshot = self.snapshot.snapshot(path)?;
            return Ok(Baseline {
                path: path.to_path_buf(),
                kind: BaselineKind::Directory,
                structure: snapshot.structure,
                warnings: snapshot.warning.into_iter().collect(),
            });
        }

        Err(ApplicationError::InvalidBaseline(path.to_path_buf()))
    }

    /// Parse a tree listing file. Empty content degrades to an empty structure.
    pub fn parse_file(&self, path: &Path) -> ApplicationResult<(Structure, Vec<BaselineWarning>)> {
        let text = self
            .fs
            .read_to_string(path)
            .map_err(|source| ApplicationError::BaselineRead {
                path: path.to_path_buf(),
                source,
            })?;
        debug!("parse_file: {} bytes from {}", text.len(), path.display());

        match self.parser.parse(&text) {
            Ok(structure) => Ok((structure, Vec::new())),
            Err(DomainError::EmptyInput) => {
                warn!("empty baseline: {}", path.display());
                Ok((
                    Structure::empty(),
                    vec![BaselineWarning::EmptyInput(path.to_path_buf())],
                ))
            }
        }
    }
}

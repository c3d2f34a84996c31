//! Structure materialization service
//!
//! Creates the directories and empty files a structure describes.

use std::path::{Component, Path};
use std::sync::Arc;

use tracing::{debug, instrument, trace, warn};

use crate::application::{ApplicationResult, IoResultExt};
use crate::domain::{Entries, Node, Structure};
use crate::infrastructure::traits::FileSystem;

/// Options controlling materialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaterializeOptions {
    /// Create empty files for leaves; `false` creates the folder skeleton only.
    pub create_files: bool,
}

impl Default for MaterializeOptions {
    fn default() -> Self {
        Self { create_files: true }
    }
}

/// What a materialization run did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaterializeReport {
    pub dirs_created: usize,
    pub dirs_existing: usize,
    pub files_created: usize,
    pub files_existing: usize,
    /// Leaves not created because file creation was disabled
    pub files_skipped: usize,
    /// Entries skipped because their name would leave the target
    pub entries_rejected: usize,
}

/// Service for creating structures on disk.
pub struct MaterializeService {
    fs: Arc<dyn FileSystem>,
}

impl MaterializeService {
    /// Create a new materialize service.
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }

    /// Create `structure` below `target`.
    ///
    /// Existing directories are reused and existing files are never touched,
    /// so re-running against a partially created target completes it.
    /// Stops at the first filesystem error; whatever was created stays.
    /// Entries named with a root, `.` or `..` component are skipped with a
    /// warning, together with everything below them.
    #[instrument(level = "debug", skip(self, structure))]
    pub fn materialize(
        &self,
        structure: &Structure,
        target: &Path,
        options: MaterializeOptions,
    ) -> ApplicationResult<MaterializeReport> {
        let mut report = MaterializeReport::default();
        self.create_entries(structure.entries(), target, options, &mut report)?;
        debug!("materialize: {:?}", report);
        Ok(report)
    }

    fn create_entries(
        &self,
        entries: &Entries,
        target: &Path,
        options: MaterializeOptions,
        report: &mut MaterializeReport,
    ) -> ApplicationResult<()> {
        for (name, node) in entries {
            if !stays_below(name) {
                warn!("skipping entry outside target: {name}");
                report.entries_rejected += 1;
                continue;
            }
            let path = target.join(name);
            match node {
                Node::Container(children) => {
                    if self.fs.is_dir(&path) {
                        report.dirs_existing += 1;
                    } else {
                        self.fs.create_dir_all(&path).materialization_at(&path)?;
                        trace!("created dir {}", path.display());
                        report.dirs_created += 1;
                    }
                    self.create_entries(children, &path, options, report)?;
                }
                Node::Leaf if !options.create_files => report.files_skipped += 1,
                Node::Leaf => {
                    self.fs.create_dir_all(target).materialization_at(target)?;
                    if self.fs.exists(&path) {
                        report.files_existing += 1;
                        continue;
                    }
                    if self.fs.create_empty_file(&path).materialization_at(&path)? {
                        trace!("created file {}", path.display());
                        report.files_created += 1;
                    } else {
                        report.files_existing += 1;
                    }
                }
            }
        }
        Ok(())
    }
}

/// True when joining `name` onto a directory cannot escape it.
fn stays_below(name: &str) -> bool {
    !name.is_empty()
        && Path::new(name)
            .components()
            .all(|c| matches!(c, Component::Normal(_)))
}

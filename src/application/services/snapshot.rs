//! Directory snapshot service
//!
//! Turns an existing directory into the same structure the tree parser produces.

use std::io;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::domain::{BaselineWarning, Entries, Node, Structure};
use crate::infrastructure::traits::FileSystem;

/// Structure read from disk, plus an optional non-fatal warning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub structure: Structure,
    pub warning: Option<BaselineWarning>,
}

/// Service for snapshotting directories.
pub struct SnapshotService {
    fs: Arc<dyn FileSystem>,
}

impl SnapshotService {
    /// Create a new snapshot service.
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }

    /// Snapshot `folder` recursively.
    ///
    /// The single top-level entry is the base name of `folder` made absolute
    /// without following links, so a symlinked source keeps the link's name.
    /// Sub-directories
    /// become containers, everything else a leaf. A missing folder is not an
    /// error: the result is empty and carries `BaselineWarning::MissingSource`.
    #[instrument(level = "debug", skip(self))]
    pub fn snapshot(&self, folder: &Path) -> ApplicationResult<Snapshot> {
        if !self.fs.exists(folder) {
            debug!("snapshot source missing: {}", folder.display());
            return Ok(Snapshot {
                structure: Structure::empty(),
                warning: Some(BaselineWarning::MissingSource(folder.to_path_buf())),
            });
        }

        let absolute = lexical_absolute(folder).with_path_context("resolve", folder)?;
        let root_name = absolute
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| ApplicationError::InvalidBaseline(folder.to_path_buf()))?;

        let canonical = self
            .fs
            .canonicalize(folder)
            .with_path_context("canonicalize", folder)?;
        let mut root = Entries::new();
        let entries = self
            .fs
            .walk_sorted(&canonical)
            .with_path_context("walk directory", folder)?;
        debug!("snapshot: {} entries below {}", entries.len(), root_name);

        for entry in entries {
            insert_path(&mut root, &entry.relative, entry.is_dir);
        }

        Ok(Snapshot {
            structure: Structure::with_root(root_name, root),
            warning: None,
        })
    }
}

/// Absolute form of `path` with `.` and `..` dropped textually; links are not resolved.
fn lexical_absolute(path: &Path) -> io::Result<PathBuf> {
    let mut out = PathBuf::new();
    for component in std::path::absolute(path)?.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other),
        }
    }
    Ok(out)
}

/// Insert a relative path into `root`, creating intermediate containers.
fn insert_path(root: &mut Entries, relative: &Path, is_dir: bool) {
    let names: Vec<String> = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();
    let Some((last, parents)) = names.split_last() else {
        return;
    };

    let mut current = root;
    for name in parents {
        let node = current.entry(name.clone()).or_insert_with(Node::container);
        if node.is_leaf() {
            *node = Node::container();
        }
        current = match node {
            Node::Container(children) => children,
            Node::Leaf => return,
        };
    }

    if is_dir {
        current.entry(last.clone()).or_insert_with(Node::container);
    } else {
        current.insert(last.clone(), Node::Leaf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_nested_paths_when_inserting_then_creates_parents() {
        let mut root = Entries::new();
        insert_path(&mut root, Path::new("a/b/c.txt"), false);
        insert_path(&mut root, Path::new("a/d"), true);

        let s = Structure::from_entries(root);
        assert_eq!(s.lookup("a/b/c.txt"), Some(&Node::Leaf));
        assert_eq!(s.lookup("a/d"), Some(&Node::container()));
    }

    #[test]
    fn given_dot_segments_when_resolving_then_dropped_textually() {
        let resolved = lexical_absolute(Path::new("/srv/a/./b/../c")).unwrap();
        assert_eq!(resolved, PathBuf::from("/srv/a/c"));

        let root = lexical_absolute(Path::new("/srv/..")).unwrap();
        assert_eq!(root.file_name(), None);
    }

    #[test]
    fn given_directory_seen_twice_when_inserting_then_keeps_children() {
        let mut root = Entries::new();
        insert_path(&mut root, Path::new("a"), true);
        insert_path(&mut root, Path::new("a/x"), false);
        insert_path(&mut root, &PathBuf::from("a"), true);

        let s = Structure::from_entries(root);
        assert_eq!(s.lookup("a/x"), Some(&Node::Leaf));
    }
}

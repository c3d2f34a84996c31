//! Domain entities: core data structures

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use termtree::Tree;

/// Children of a container, keyed by entry name.
pub type Entries = BTreeMap<String, Node>;

/// A single entry of a directory skeleton.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A file: carries no children.
    Leaf,
    /// A folder holding named children.
    Container(Entries),
}

impl Node {
    /// Empty folder.
    pub fn container() -> Self {
        Node::Container(Entries::new())
    }

    pub fn is_container(&self) -> bool {
        matches!(self, Node::Container(_))
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf)
    }

    /// Children of a container, `None` for a leaf.
    pub fn children(&self) -> Option<&Entries> {
        match self {
            Node::Container(children) => Some(children),
            Node::Leaf => None,
        }
    }

    /// Look up a direct child by name.
    pub fn child(&self, name: &str) -> Option<&Node> {
        self.children().and_then(|c| c.get(name))
    }
}

/// Parsed or snapshotted baseline: the top-level mapping of a skeleton.
///
/// A non-empty structure normally holds exactly one container (the root
/// folder). It is empty when the input had no content or the snapshot
/// source did not exist.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Structure {
    entries: Entries,
}

impl Structure {
    /// Structure with no entries.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Structure holding a single root container.
    pub fn with_root(name: impl Into<String>, children: Entries) -> Self {
        let mut entries = Entries::new();
        entries.insert(name.into(), Node::Container(children));
        Self { entries }
    }

    pub fn from_entries(entries: Entries) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &Entries {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Name of the first top-level entry.
    pub fn root_name(&self) -> Option<&str> {
        self.entries.keys().next().map(String::as_str)
    }

    /// Top-level entry by name.
    pub fn get(&self, name: &str) -> Option<&Node> {
        self.entries.get(name)
    }

    /// Resolve a node by its `/`-separated relative path.
    pub fn lookup(&self, path: &str) -> Option<&Node> {
        let mut parts = path.split('/').filter(|p| !p.is_empty());
        let mut current = self.entries.get(parts.next()?)?;
        for part in parts {
            current = current.child(part)?;
        }
        Some(current)
    }

    /// Number of (containers, leaves) in the whole structure.
    pub fn count(&self) -> (usize, usize) {
        fn walk(entries: &Entries, acc: &mut (usize, usize)) {
            for node in entries.values() {
                match node {
                    Node::Container(children) => {
                        acc.0 += 1;
                        walk(children, acc);
                    }
                    Node::Leaf => acc.1 += 1,
                }
            }
        }
        let mut acc = (0, 0);
        walk(&self.entries, &mut acc);
        acc
    }

    /// Flattened relative paths in depth-first, lexicographic order.
    /// Containers carry a trailing `/`.
    pub fn paths(&self) -> Vec<String> {
        fn walk(prefix: &str, entries: &Entries, out: &mut Vec<String>) {
            for (name, node) in entries {
                let path = format!("{prefix}{name}");
                match node {
                    Node::Container(children) => {
                        out.push(format!("{path}/"));
                        walk(&format!("{path}/"), children, out);
                    }
                    Node::Leaf => out.push(path),
                }
            }
        }
        let mut out = Vec::new();
        walk("", &self.entries, &mut out);
        out
    }

    /// Render each top-level entry as a tree listing in the format the parser reads.
    pub fn to_trees(&self) -> Vec<Tree<String>> {
        fn build(name: &str, node: &Node) -> Tree<String> {
            match node {
                Node::Container(children) => Tree::new(format!("{name}/")).with_leaves(
                    children.iter().map(|(child, node)| build(child, node)),
                ),
                Node::Leaf => Tree::new(name.to_string()),
            }
        }
        self.entries
            .iter()
            .map(|(name, node)| build(name, node))
            .collect()
    }
}

impl fmt::Display for Structure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for tree in self.to_trees() {
            write!(f, "{tree}")?;
        }
        Ok(())
    }
}

/// Non-fatal conditions found while loading a baseline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BaselineWarning {
    /// Tree text had no non-blank lines.
    EmptyInput(PathBuf),
    /// Snapshot source directory does not exist.
    MissingSource(PathBuf),
}

impl fmt::Display for BaselineWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BaselineWarning::EmptyInput(path) => {
                write!(f, "baseline '{}' is empty, nothing to create", path.display())
            }
            BaselineWarning::MissingSource(path) => write!(
                f,
                "folder '{}' does not exist, treating it as empty",
                path.display()
            ),
        }
    }
}

/// Expand environment variables in a path string.
///
/// Supports `$VAR`, `${VAR}` and `~`.
pub fn expand_env_vars(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}

//! Parser for `tree`-style listings.
//!
//! Reads text such as
//!
//! ```text
//! project/
//! ├── src/
//! │   └── main.py
//! └── README.md
//! ```
//!
//! into a [`Structure`]. Hierarchy is recovered from indentation: every four
//! leading characters drawn from space and `│` count as one level.

use regex::Regex;
use tracing::{debug, instrument, trace};

use crate::domain::entities::{Entries, Node, Structure};
use crate::domain::error::{DomainError, DomainResult};

/// Characters per indentation level.
pub const INDENT_WIDTH: usize = 4;

/// Glyphs used for drawing tree branches.
const GLYPHS: [char; 4] = ['│', '├', '└', '─'];

/// One entry line after indentation and connector are stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    pub depth: usize,
    pub name: String,
    pub is_container: bool,
}

/// Converts tree listings into structures.
pub struct TreeParser {
    indent_regex: Regex,
    connector_regex: Regex,
}

impl Default for TreeParser {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeParser {
    pub fn new() -> Self {
        Self {
            indent_regex: Regex::new(r"^[ │]+").expect("valid indent pattern"),
            connector_regex: Regex::new(r"^[ │]*(├── |└── )").expect("valid connector pattern"),
        }
    }

    /// Parse a complete listing.
    ///
    /// The first non-blank line names the root folder; every following line
    /// is attached to the nearest preceding folder with a smaller depth.
    /// Duplicate names among siblings overwrite each other, the last one wins.
    ///
    /// # Errors
    /// `DomainError::EmptyInput` if the text has no non-blank line.
    #[instrument(level = "debug", skip_all)]
    pub fn parse(&self, text: &str) -> DomainResult<Structure> {
        let mut lines = text
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.trim().is_empty());

        let root_name = lines
            .next()
            .ok_or(DomainError::EmptyInput)?
            .trim()
            .trim_matches('/')
            .to_string();
        debug!("root: {:?}", root_name);

        let mut root = Entries::new();
        // (depth of children, path of the folder below root)
        let mut stack: Vec<(usize, Vec<String>)> = vec![(0, Vec::new())];

        for line in lines {
            let Some(entry) = self.parse_line(line) else {
                debug!("skipping line without entry name: {:?}", line);
                continue;
            };
            trace!("entry: {:?}", entry);

            while stack
                .last()
                .is_some_and(|(depth, _)| *depth >= entry.depth + 1)
            {
                stack.pop();
            }
            let parent_path = stack.last().map(|(_, p)| p.clone()).unwrap_or_default();
            let parent = container_at(&mut root, &parent_path);

            if entry.is_container {
                parent.insert(entry.name.clone(), Node::container());
                let mut path = parent_path;
                path.push(entry.name);
                stack.push((entry.depth + 1, path));
            } else {
                parent.insert(entry.name, Node::Leaf);
            }
        }

        Ok(Structure::with_root(root_name, root))
    }

    /// Split one listing line into depth, name and kind.
    ///
    /// Returns `None` when nothing but drawing glyphs remains, e.g. a lone `│`
    /// spacer line.
    pub fn parse_line(&self, line: &str) -> Option<ParsedLine> {
        let indent = self
            .indent_regex
            .find(line)
            .map(|m| m.as_str().chars().count())
            .unwrap_or(0);
        let depth = indent / INDENT_WIDTH;

        let rest = match self.connector_regex.find(line) {
            Some(m) => &line[m.end()..],
            None => line,
        };
        let raw = rest.trim();
        let is_container = raw.ends_with('/');
        let name = raw.trim_end_matches('/');

        if name.is_empty() || name.chars().all(|c| GLYPHS.contains(&c) || c.is_whitespace()) {
            return None;
        }

        Some(ParsedLine {
            depth,
            name: name.to_string(),
            is_container,
        })
    }
}

/// Parse a listing with a default parser.
pub fn parse_tree(text: &str) -> DomainResult<Structure> {
    TreeParser::new().parse(text)
}

/// Walk `path` down from `root`, returning the children map of the last folder.
///
/// A leaf found on the way is replaced by an empty folder (last write wins).
fn container_at<'a>(root: &'a mut Entries, path: &[String]) -> &'a mut Entries {
    let mut entries = root;
    for name in path {
        let node = entries.entry(name.clone()).or_insert_with(Node::container);
        entries = promote(node);
    }
    entries
}

fn promote(node: &mut Node) -> &mut Entries {
    match node {
        Node::Container(children) => children,
        Node::Leaf => {
            *node = Node::container();
            promote(node)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf() -> Node {
        Node::Leaf
    }

    fn dir(children: &[(&str, Node)]) -> Node {
        Node::Container(
            children
                .iter()
                .map(|(n, c)| (n.to_string(), c.clone()))
                .collect(),
        )
    }

    #[test]
    fn given_sample_listing_when_parsing_then_builds_nested_structure() {
        let text = "project/\n├── src/\n│   └── main.py\n└── README.md\n";
        let s = parse_tree(text).unwrap();

        let expected = Structure::from_entries(
            [(
                "project".to_string(),
                dir(&[("src", dir(&[("main.py", leaf())])), ("README.md", leaf())]),
            )]
            .into_iter()
            .collect(),
        );
        assert_eq!(s, expected);
    }

    #[test]
    fn given_blank_text_when_parsing_then_empty_input() {
        assert_eq!(parse_tree("  \n\n\t\n"), Err(DomainError::EmptyInput));
        assert_eq!(parse_tree(""), Err(DomainError::EmptyInput));
    }

    #[test]
    fn given_root_with_slashes_when_parsing_then_strips_them() {
        let s = parse_tree("  /project/  \n").unwrap();
        assert_eq!(s.root_name(), Some("project"));
        assert_eq!(s.get("project"), Some(&Node::container()));
    }

    #[test]
    fn given_lines_when_parse_line_then_computes_depth() {
        let p = TreeParser::new();
        let line = p.parse_line("│   │   ├── deep.rs").unwrap();
        assert_eq!(line.depth, 2);
        assert_eq!(line.name, "deep.rs");
        assert!(!line.is_container);

        let line = p.parse_line("└── docs//").unwrap();
        assert_eq!(line.depth, 0);
        assert_eq!(line.name, "docs");
        assert!(line.is_container);
    }

    #[test]
    fn given_misaligned_indent_when_parse_line_then_rounds_down() {
        let p = TreeParser::new();
        // 6 leading characters: 6 / 4 == 1
        let line = p.parse_line("│     ├── odd.txt").unwrap();
        assert_eq!(line.depth, 1);
    }

    #[test]
    fn given_line_without_connector_when_parse_line_then_uses_trimmed_text() {
        let p = TreeParser::new();
        let line = p.parse_line("    notes.md").unwrap();
        assert_eq!(line.depth, 1);
        assert_eq!(line.name, "notes.md");
    }

    #[test]
    fn given_glyph_only_line_when_parse_line_then_none() {
        let p = TreeParser::new();
        assert_eq!(p.parse_line("│"), None);
        assert_eq!(p.parse_line("│   ├── "), None);
        assert_eq!(p.parse_line("├── /"), None);
    }

    #[test]
    fn given_leaf_when_promoting_then_becomes_empty_container() {
        let mut node = Node::Leaf;
        promote(&mut node).insert("child".into(), Node::Leaf);
        assert_eq!(node, dir(&[("child", leaf())]));
    }

    #[test]
    fn given_leaf_then_folder_with_same_name_when_parsing_then_folder_wins() {
        let text = "root/\n├── data\n└── data/\n    └── a.csv\n";
        let s = parse_tree(text).unwrap();
        assert_eq!(
            s.get("root"),
            Some(&dir(&[("data", dir(&[("a.csv", leaf())]))]))
        );
    }

    #[test]
    fn given_folder_then_leaf_with_same_name_when_parsing_then_leaf_wins() {
        let text = "root/\n├── data/\n│   └── a.csv\n└── data\n";
        let s = parse_tree(text).unwrap();
        assert_eq!(s.get("root"), Some(&dir(&[("data", leaf())])));
    }
}

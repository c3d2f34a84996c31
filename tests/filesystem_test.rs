//! Tests for the RealFileSystem implementation

use rskel::infrastructure::traits::{FileSystem, RealFileSystem, WalkEntry};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

// ============================================================
// create_empty_file tests
// ============================================================

#[test]
fn given_missing_file_when_create_empty_file_then_creates_it() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("new.txt");

    let created = RealFileSystem.create_empty_file(&path).unwrap();

    assert!(created);
    assert_eq!(fs::metadata(&path).unwrap().len(), 0);
}

#[test]
fn given_existing_file_when_create_empty_file_then_leaves_content() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("old.txt");
    fs::write(&path, "content").unwrap();

    let created = RealFileSystem.create_empty_file(&path).unwrap();

    assert!(!created);
    assert_eq!(fs::read_to_string(&path).unwrap(), "content");
}

#[test]
fn given_missing_parent_when_create_empty_file_then_errors() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("no/such/dir/file.txt");

    assert!(RealFileSystem.create_empty_file(&path).is_err());
}

// ============================================================
// walk_sorted tests
// ============================================================

#[test]
fn given_tree_when_walk_sorted_then_parents_first_and_sorted() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("b/inner")).unwrap();
    fs::create_dir_all(temp.path().join("a")).unwrap();
    fs::write(temp.path().join("b/inner/z.txt"), "").unwrap();
    fs::write(temp.path().join("c.txt"), "").unwrap();

    let entries = RealFileSystem.walk_sorted(temp.path()).unwrap();

    let expected = vec![
        WalkEntry { relative: PathBuf::from("a"), is_dir: true },
        WalkEntry { relative: PathBuf::from("b"), is_dir: true },
        WalkEntry { relative: PathBuf::from("b/inner"), is_dir: true },
        WalkEntry { relative: PathBuf::from("b/inner/z.txt"), is_dir: false },
        WalkEntry { relative: PathBuf::from("c.txt"), is_dir: false },
    ];
    assert_eq!(entries, expected);
}

#[test]
fn given_missing_root_when_walk_sorted_then_errors() {
    let temp = TempDir::new().unwrap();
    assert!(RealFileSystem.walk_sorted(&temp.path().join("gone")).is_err());
}

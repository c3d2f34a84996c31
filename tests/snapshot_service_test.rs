//! Tests for SnapshotService

use std::fs;
use std::sync::Arc;

use tempfile::TempDir;

use rskel::application::services::SnapshotService;
use rskel::domain::{BaselineWarning, Node, Structure};
use rskel::infrastructure::traits::RealFileSystem;

fn service() -> SnapshotService {
    SnapshotService::new(Arc::new(RealFileSystem))
}

#[test]
fn given_directory_when_snapshotting_then_root_key_is_base_name() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let source = temp.path().join("my-project");
    fs::create_dir_all(source.join("src/bin")).unwrap();
    fs::write(source.join("src/lib.rs"), "pub fn x() {}").unwrap();
    fs::write(source.join("Cargo.toml"), "").unwrap();

    // Act
    let snapshot = service().snapshot(&source).unwrap();

    // Assert
    let s = snapshot.structure;
    assert_eq!(s.root_name(), Some("my-project"));
    assert_eq!(s.entries().len(), 1);
    assert_eq!(s.lookup("my-project/src/lib.rs"), Some(&Node::Leaf));
    assert_eq!(s.lookup("my-project/src/bin"), Some(&Node::container()));
    assert_eq!(s.lookup("my-project/Cargo.toml"), Some(&Node::Leaf));
    assert!(snapshot.warning.is_none());
}

#[test]
fn given_missing_directory_when_snapshotting_then_empty_with_warning() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("does-not-exist");

    let snapshot = service().snapshot(&missing).unwrap();

    assert_eq!(snapshot.structure, Structure::empty());
    assert_eq!(
        snapshot.warning,
        Some(BaselineWarning::MissingSource(missing.clone()))
    );
}

#[test]
fn given_unchanged_directory_when_snapshotting_twice_then_identical() {
    let temp = TempDir::new().unwrap();
    let source = temp.path().join("stable");
    for name in ["zeta", "alpha", "mid"] {
        fs::create_dir_all(source.join(name)).unwrap();
        fs::write(source.join(name).join("f.txt"), "").unwrap();
    }

    let first = service().snapshot(&source).unwrap();
    let second = service().snapshot(&source).unwrap();

    assert_eq!(first, second);
    assert_eq!(
        first.structure.paths(),
        vec![
            "stable/",
            "stable/alpha/",
            "stable/alpha/f.txt",
            "stable/mid/",
            "stable/mid/f.txt",
            "stable/zeta/",
            "stable/zeta/f.txt",
        ]
    );
}

#[test]
fn given_relative_path_with_dots_when_snapshotting_then_uses_resolved_name() {
    let temp = TempDir::new().unwrap();
    let source = temp.path().join("named");
    fs::create_dir_all(source.join("inner")).unwrap();

    let snapshot = service().snapshot(&source.join("inner/..")).unwrap();

    assert_eq!(snapshot.structure.root_name(), Some("named"));
    assert_eq!(
        snapshot.structure.lookup("named/inner"),
        Some(&Node::container())
    );
}

#[test]
fn given_empty_directory_when_snapshotting_then_single_empty_container() {
    let temp = TempDir::new().unwrap();
    let source = temp.path().join("empty");
    fs::create_dir(&source).unwrap();

    let snapshot = service().snapshot(&source).unwrap();

    assert_eq!(
        snapshot.structure,
        Structure::with_root("empty", Default::default())
    );
}

#[cfg(unix)]
#[test]
fn given_symlinked_directory_when_snapshotting_then_root_key_is_link_name() {
    let temp = TempDir::new().unwrap();
    let real = temp.path().join("real-dir");
    fs::create_dir_all(real.join("sub")).unwrap();
    fs::write(real.join("sub/a.txt"), "").unwrap();
    let link = temp.path().join("my-link");
    std::os::unix::fs::symlink(&real, &link).unwrap();

    let snapshot = service().snapshot(&link).unwrap();

    assert_eq!(snapshot.structure.root_name(), Some("my-link"));
    assert_eq!(
        snapshot.structure.lookup("my-link/sub/a.txt"),
        Some(&Node::Leaf)
    );
}

use std::path::{Path, PathBuf};

use qgh::util::paths::minimal_paths;

fn paths(items: &[&str]) -> Vec<PathBuf> {
    items.iter().map(PathBuf::from).collect()
}

#[test]
fn test_shared_leading_component_is_stripped() {
    let result = minimal_paths(&paths(&["a/b/x", "a/b/y", "a/c/z"]), Path::new("/elsewhere"));
    assert_eq!(result, vec!["b/x", "b/y", "c/z"]);
}

#[test]
fn test_relative_to_base() {
    let result = minimal_paths(
        &paths(&["/work/src/alpha", "/work/src/beta", "/work/lib/gamma"]),
        Path::new("/work"),
    );
    assert_eq!(result, vec!["src/alpha", "src/beta", "lib/gamma"]);
}

#[test]
fn test_strips_exactly_the_common_prefix() {
    let result = minimal_paths(
        &paths(&["/ws/team/one/app", "/ws/team/two/app"]),
        Path::new("/ws"),
    );
    assert_eq!(result, vec!["one/app", "two/app"]);
}

#[test]
fn test_single_path_falls_back_to_last_component() {
    let result = minimal_paths(&paths(&["/ws/team/project"]), Path::new("/ws"));
    assert_eq!(result, vec!["project"]);
}

#[test]
fn test_path_that_is_the_common_prefix_keeps_its_name() {
    let result = minimal_paths(&paths(&["/ws/a", "/ws/a/nested"]), Path::new("/ws"));
    assert_eq!(result, vec!["a", "nested"]);
}

#[test]
fn test_no_entry_is_ever_empty() {
    let result = minimal_paths(&paths(&["/ws/x", "/ws/x", "/ws"]), Path::new("/ws"));
    assert_eq!(result.len(), 3);
    assert!(result.iter().all(|p| !p.is_empty()));
}

#[test]
fn test_empty_input() {
    let result = minimal_paths::<PathBuf>(&[], Path::new("/ws"));
    assert!(result.is_empty());
}

#[test]
fn test_nothing_in_common() {
    let result = minimal_paths(&paths(&["one/a", "two/b"]), Path::new("/"));
    assert_eq!(result, vec!["one/a", "two/b"]);
}

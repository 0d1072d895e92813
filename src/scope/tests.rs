//! Tests for scope parsing and upward resolution.

use super::*;
use crate::test_support::TestTree;
use clap::ValueEnum;
use std::fs;

const MARKER: &str = "wp-load.php";

#[test]
fn test_scope_parses_cli_names() {
    assert_eq!(Scope::from_str("global", false), Ok(Scope::Global));
    assert_eq!(Scope::from_str("project", false), Ok(Scope::Project));
    assert_eq!(Scope::from_str("local", false), Ok(Scope::Local));
    assert!(Scope::from_str("system", false).is_err());
}

#[test]
fn test_scope_display_matches_cli_names() {
    for scope in [Scope::Global, Scope::Project, Scope::Local] {
        assert_eq!(Scope::from_str(&scope.to_string(), false), Ok(scope));
    }
    assert_eq!(Scope::default(), Scope::Global);
}

#[test]
fn test_find_file_in_start_dir() {
    let tree = TestTree::new();
    let expected = tree.write("site/wp-cli.yml", "");

    let found = find_file_upward(&tree.root().join("site"), &["wp-cli.yml"], MARKER);

    assert_eq!(found, Some(expected));
}

#[test]
fn test_find_file_in_ancestor() {
    let tree = TestTree::new();
    let expected = tree.write("site/wp-cli.yml", "");
    let start = tree.mkdir("site/wp-content/themes");

    let found = find_file_upward(&start, &["wp-cli.yml"], MARKER);

    assert_eq!(found, Some(expected));
}

#[test]
fn test_find_file_prefers_nearest() {
    let tree = TestTree::new();
    tree.write("site/wp-cli.yml", "");
    let nearest = tree.write("site/sub/wp-cli.yml", "");

    let found = find_file_upward(&tree.root().join("site/sub"), &["wp-cli.yml"], MARKER);

    assert_eq!(found, Some(nearest));
}

#[test]
fn test_find_file_not_found() {
    let tree = TestTree::new();
    let start = tree.mkdir("site/deep");

    assert_eq!(
        find_file_upward(&start, &["definitely-not-here.yml"], MARKER),
        None
    );
}

#[test]
fn test_search_stays_inside_test_tree() {
    let tree = TestTree::new();
    let outside = tree.root().parent().unwrap().join("wp-cli.yml");
    fs::write(&outside, "").unwrap();
    let start = tree.mkdir("site");

    assert_eq!(find_file_upward(&start, &["wp-cli.yml"], MARKER), None);
}

#[test]
fn test_find_file_ignores_directories_with_target_name() {
    let tree = TestTree::new();
    tree.mkdir("site/wp-cli.yml");

    let found = find_file_upward(&tree.root().join("site"), &["wp-cli.yml"], MARKER);

    assert_ne!(found, Some(tree.root().join("site/wp-cli.yml")));
}

#[test]
fn test_single_marker_does_not_stop_search() {
    // One installation root between cwd and the target is still "inside".
    let tree = TestTree::new();
    let expected = tree.write("a/wp-cli.yml", "");
    tree.write("a/wp-load.php", "");
    let start = tree.mkdir("a/b/c");

    let found = find_file_upward(&start, &["wp-cli.yml"], MARKER);

    assert_eq!(found, Some(expected));
}

#[test]
fn test_second_marker_stops_search() {
    // /a/wp-load.php, /a/b/wp-load.php, cwd /a/b/c, target only at /a.
    let tree = TestTree::new();
    tree.write("a/wp-load.php", "");
    tree.write("a/b/wp-load.php", "");
    tree.write("a/wp-cli.yml", "");
    let start = tree.mkdir("a/b/c");

    assert_eq!(find_file_upward(&start, &["wp-cli.yml"], MARKER), None);
}

#[test]
fn test_target_inside_inner_installation_is_found() {
    let tree = TestTree::new();
    tree.write("a/wp-load.php", "");
    tree.write("a/b/wp-load.php", "");
    tree.write("a/wp-cli.yml", "");
    let inner = tree.write("a/b/wp-cli.yml", "");
    let start = tree.mkdir("a/b/c");

    assert_eq!(find_file_upward(&start, &["wp-cli.yml"], MARKER), Some(inner));
}

#[test]
fn test_multiple_target_names_checked_per_directory() {
    let tree = TestTree::new();
    let expected = tree.write("site/wp-cli.yaml", "");

    let found = find_file_upward(
        &tree.root().join("site"),
        &["wp-cli.yml", "wp-cli.yaml"],
        MARKER,
    );

    assert_eq!(found, Some(expected));
}

#[test]
fn test_resolve_global_is_fixed_path() {
    let tree = TestTree::new();
    tree.write("site/wp-cli.yml", "");
    let ctx = tree.context_at("site");

    let path = resolve_config_path(Scope::Global, &ctx).unwrap();

    assert_eq!(path, tree.home().join(".wp-cli/config.yml"));
    assert!(!path.exists());
}

#[test]
fn test_resolve_project_and_local_are_distinct() {
    let tree = TestTree::new();
    let project = tree.write("site/wp-cli.yml", "");
    let local = tree.write("site/wp-cli.local.yml", "");
    let ctx = tree.context_at("site/wp-admin");

    assert_eq!(resolve_config_path(Scope::Project, &ctx), Some(project));
    assert_eq!(resolve_config_path(Scope::Local, &ctx), Some(local));
}

#[test]
fn test_resolve_local_missing() {
    let tree = TestTree::new();
    tree.write("site/wp-cli.yml", "");
    let ctx = tree.context_at("site");

    assert_eq!(resolve_config_path(Scope::Local, &ctx), None);
}

#[test]
fn test_resolve_project_respects_boundary() {
    let tree = TestTree::new();
    tree.write("outer/wp-load.php", "");
    tree.write("outer/wp-cli.yml", "");
    tree.write("outer/nested/wp-load.php", "");
    let ctx = tree.context_at("outer/nested/wp-admin");

    assert_eq!(resolve_config_path(Scope::Project, &ctx), None);
}

use std::path::Path;

use super::*;

fn patterns(list: &[&str]) -> Vec<String> {
    list.iter().map(ToString::to_string).collect()
}

#[test]
fn filter_matches_exact_basename() {
    let filter = PatternFilter::new(&patterns(&["package.json"])).unwrap();

    assert!(filter.should_include(Path::new("/repo/x/package.json")));
    assert!(!filter.should_include(Path::new("/repo/x/pkg.json")));
}

#[test]
fn filter_matches_wildcards() {
    let filter = PatternFilter::new(&patterns(&["*.yml", "data.?son"])).unwrap();

    assert!(filter.should_include(Path::new("/repo/config.yml")));
    assert!(filter.should_include(Path::new("/repo/a/b/data.json")));
    assert!(!filter.should_include(Path::new("/repo/config.yaml")));
}

#[test]
fn filter_tests_basename_only() {
    let filter = PatternFilter::new(&patterns(&["src"])).unwrap();

    // Directory components never take part in matching.
    assert!(!filter.should_include(Path::new("/repo/src/index.js")));
}

#[test]
fn filter_matches_by_index() {
    let filter = PatternFilter::new(&patterns(&["*.js", "index.js"])).unwrap();
    let path = Path::new("/repo/src/index.js");

    assert!(filter.matches(0, path));
    assert!(filter.matches(1, path));
    assert!(!filter.matches(1, Path::new("/repo/src/main.js")));
    assert!(!filter.matches(2, path));
}

#[test]
fn filter_preserves_pattern_order() {
    let filter = PatternFilter::new(&patterns(&["b", "a", "c"])).unwrap();
    assert_eq!(filter.patterns(), ["b", "a", "c"]);
}

#[test]
fn filter_rejects_empty_pattern_list() {
    let err = PatternFilter::new(&[]).err().unwrap();
    assert_eq!(err.to_string(), "at least one glob pattern is required");
}

#[test]
fn filter_rejects_invalid_pattern() {
    let err = PatternFilter::new(&patterns(&["ok.json", "[unclosed"]))
        .err()
        .unwrap();

    assert_eq!(err.error_type(), "Config");
    assert!(err.to_string().contains("\"[unclosed\""));
}

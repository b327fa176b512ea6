use rstest::rstest;

use super::*;

fn matcher() -> Matcher {
    Matcher::new()
}

#[rstest]
#[case("foo/bar", "foo/bar", Some(vec!["foo/bar"]))]
#[case("foo/bar", "foo/barx", None)]
#[case("*", "abc", Some(vec!["abc", "abc"]))]
#[case("*", "a/c", None)]
#[case("**", "a/b/c", Some(vec!["a/b/c", "a/b/c"]))]
#[case("foo/*/bar", "foo/baz/bar", Some(vec!["foo/baz/bar", "baz"]))]
#[case("foo/*/bar", "foo/a/b/bar", None)]
#[case("**/*/**", "foo/bar/baz/bug", Some(vec!["foo/bar/baz/bug", "foo/bar", "baz", "bug"]))]
#[case(r"a\*b", "a*b", Some(vec!["a*b"]))]
#[case(r"a\*b", "axb", None)]
fn test_captures(#[case] pattern: &str, #[case] candidate: &str, #[case] expected: Option<Vec<&str>>) {
    let m = matcher();
    let result = m.captures(pattern, candidate).map(Vec::from);
    assert_eq!(result, expected);
    assert_eq!(m.matches(pattern, candidate), expected.is_some());
}

#[test]
fn test_reuses_compiled_patterns() {
    let m = matcher();
    for candidate in ["a/x.rs", "b/y.rs", "c/z.txt", "d/e/f.rs"] {
        m.captures("*/*.rs", candidate);
    }
    assert_eq!(m.cache().len(), 1);
    assert_eq!(m.cache().compilations(), 1);
}

#[test]
fn test_clones_share_cache() {
    let a = matcher();
    let b = a.clone();
    a.matches("x/*", "x/y");
    assert!(b.cache().contains("x/*"));
    assert_eq!(b.cache().compilations(), 1);
    assert!(Arc::ptr_eq(&a.pattern("x/*"), &b.pattern("x/*")));
}

#[test]
fn test_independent_caches() {
    let a = matcher();
    let b = matcher();
    a.matches("x/*", "x/y");
    assert!(b.cache().is_empty());
}

#[test]
fn test_injected_cache() {
    let cache = Arc::new(PatternCache::new());
    cache.get("p/**");
    let m = Matcher::with_cache(cache.clone());
    assert!(m.matches("p/**", "p/q/r"));
    assert_eq!(cache.compilations(), 1);
}

#[test]
fn test_from_settings() {
    let settings = crate::config::at(["src/testing/assets/configs/preload.yaml"]).load().unwrap();
    let m = Matcher::from_settings(&settings).unwrap();
    assert_eq!(m.cache().len(), 2);
    assert!(m.cache().contains("foo/*/bar"));
    assert!(m.cache().contains("**/*.rs"));

    assert!(m.matches("**/*.rs", "src/lib.rs"));
    assert_eq!(m.cache().compilations(), 2);
}

#[test]
fn test_expand() {
    let m = matcher();
    assert_eq!(
        m.expand("docs/**/*.md", "docs/guide/intro.md", "/{1}/{2}.html").as_deref(),
        Some("/guide/intro.html")
    );
    assert_eq!(m.expand("docs/**/*.md", "docs/intro.txt", "{1}"), None);
}

#[test]
fn test_global() {
    assert!(global().matches("g/*", "g/h"));
    assert!(global().cache().contains("g/*"));
    assert!(crate::matches("g/*", "g/h"));
    assert_eq!(crate::captures("g/*", "g/h").map(Vec::from), Some(vec!["g/h", "h"]));
}

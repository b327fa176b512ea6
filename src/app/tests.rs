use clap::Parser;

use super::*;

use crate::config;

fn opt(args: &[&str]) -> Opt {
    Opt::try_parse_from(std::iter::once("pathmatch").chain(args.iter().copied())).unwrap()
}

fn exec(args: &[&str]) -> (Result<bool>, String) {
    let mut out = Vec::new();
    let result = run(&opt(args), &Settings::default(), &mut out);
    (result, String::from_utf8(out).unwrap())
}

#[test]
fn test_all_matched() {
    let (result, out) = exec(&["foo/*/bar", "foo/a/bar", "foo/b/bar"]);
    assert_eq!(out, "foo/a/bar\ta\nfoo/b/bar\tb\n");
    assert_eq!(exit_code(&result), EXIT_MATCHED);
}

#[test]
fn test_partially_matched() {
    let (result, out) = exec(&["**/*/**", "foo/bar/baz/bug", "foo", "a/b/c"]);
    assert_eq!(out, "foo/bar/baz/bug\tfoo/bar\tbaz\tbug\na/b/c\ta\tb\tc\n");
    assert_eq!(exit_code(&result), EXIT_UNMATCHED);
}

#[test]
fn test_nothing_matched() {
    let (result, out) = exec(&[r"a\*b", "axb"]);
    assert_eq!(out, "");
    assert_eq!(exit_code(&result), EXIT_UNMATCHED);
}

#[test]
fn test_template() {
    let (result, out) = exec(&["-t", "{2} <- {1}", "src/**/*.rs", "src/a/b/lib.rs", "src/main.rs"]);
    assert_eq!(out, "lib <- a/b\n");
    assert_eq!(exit_code(&result), EXIT_UNMATCHED);
}

#[test]
fn test_separator() {
    let (result, out) = exec(&["-s", ",", "*.*", "a.b"]);
    assert_eq!(out, "a.b,a,b\n");
    assert_eq!(exit_code(&result), EXIT_MATCHED);
}

#[test]
fn test_config_error() {
    let result = config::at(["src/testing/assets/configs/missing.yaml"]).load();
    assert!(result.is_err());
    assert_eq!(exit_code(&result.map(|_| true)), EXIT_FAILURE);
}

#[test]
fn test_preloaded_settings() {
    let settings = config::at(["src/testing/assets/configs/preload.yaml"]).load().unwrap();
    let mut out = Vec::new();
    let result = run(&opt(&["**/*.rs", "x/y.rs"]), &settings, &mut out);
    assert_eq!(out, b"x/y.rs\tx\ty\n");
    assert_eq!(exit_code(&result), EXIT_MATCHED);
}

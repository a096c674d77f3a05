//! Hygiene — enforces coding standards at test time
//!
//! Scans the crate's production sources for patterns that would crash the
//! page script, swallow host errors, or break the single-class contract on
//! `<html>`. Every budget is zero and stays zero.
#![allow(clippy::absurd_extreme_comparisons)]

use std::fs;
use std::path::Path;

struct SourceFile {
    path: String,
    content: String,
}

/// Production `.rs` files under `src/`, excluding `*_test.rs`.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if !path_str.ends_with(".rs") || path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: path_str, content });
        }
    }
}

/// Assert that at most `max` source lines contain `pattern`.
fn assert_budget(pattern: &str, max: usize, why: &str) {
    let files = source_files();
    assert!(!files.is_empty(), "no sources found; run from the crate root");

    let hits: Vec<(String, usize)> = files
        .iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect();
    let count: usize = hits.iter().map(|(_, c)| c).sum();
    let listing = hits
        .iter()
        .map(|(path, c)| format!("  {path}: {c}"))
        .collect::<Vec<_>>()
        .join("\n");
    assert!(count <= max, "`{pattern}` budget exceeded ({why}): found {count}, max {max}.\n{listing}");
}

// Panics — a panic aborts the whole page script.

#[test]
fn unwrap_budget() {
    assert_budget(".unwrap()", 0, "panics");
}

#[test]
fn expect_budget() {
    assert_budget(".expect(", 0, "panics");
}

#[test]
fn panic_budget() {
    assert_budget("panic!(", 0, "panics");
}

#[test]
fn unreachable_budget() {
    assert_budget("unreachable!(", 0, "panics");
}

#[test]
fn todo_budget() {
    assert_budget("todo!(", 0, "stub");
}

#[test]
fn unimplemented_budget() {
    assert_budget("unimplemented!(", 0, "stub");
}

// Silent loss — host failures must be logged where they are absorbed.

#[test]
fn silent_discard_budget() {
    assert_budget("let _ =", 0, "discarded result");
}

#[test]
fn dot_ok_budget() {
    assert_budget(".ok()", 0, "discarded error");
}

// Output goes through the `log` facade.

#[test]
fn println_budget() {
    assert_budget("println!(", 0, "use log macros");
}

#[test]
fn eprintln_budget() {
    assert_budget("eprintln!(", 0, "use log macros");
}

// The root class attribute is replaced wholesale, never edited token by token.

#[test]
fn class_list_budget() {
    assert_budget("class_list()", 0, "root must carry exactly one palette class");
}

#[test]
fn allow_dead_code_budget() {
    assert_budget("#[allow(dead_code)]", 0, "style");
}

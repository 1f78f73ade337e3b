//! Hygiene: source-level rules checked at test time.
//!
//! Scans `src/` (test files excluded) for patterns the crate does not allow.
//! Each pattern has a budget, normally zero. The budget never grows; remove an
//! existing hit before adding a new one.
#![allow(clippy::absurd_extreme_comparisons)]

use std::fs;
use std::path::Path;

// Panics. A panic in the wasm build takes down every feature on the page.
const MAX_UNWRAP: usize = 0;
const MAX_EXPECT: usize = 0;
const MAX_PANIC: usize = 0;
const MAX_UNREACHABLE: usize = 0;
const MAX_TODO: usize = 0;
const MAX_UNIMPLEMENTED: usize = 0;

// Silent loss.
const MAX_SILENT_DISCARD: usize = 0;
const MAX_DOT_OK: usize = 0;

// Output goes through `log` with a feature target.
const MAX_PRINTLN: usize = 0;
const MAX_EPRINTLN: usize = 0;
const MAX_RAW_CONSOLE: usize = 0;

const MAX_ALLOW_DEAD_CODE: usize = 0;

struct SourceFile {
    path: String,
    content: String,
}

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
        } else if path.extension().is_some_and(|e| e == "rs") {
            let path_str = path.to_string_lossy().to_string();
            if path_str.ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path: path_str, content });
            }
        }
    }
}

fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

fn check_budget(pattern: &str, max: usize) {
    let files = source_files();
    assert!(!files.is_empty(), "no sources found under src/");
    let found = hits(&files, pattern);
    let count: usize = found.iter().map(|(_, c)| c).sum();
    let listing = found
        .iter()
        .map(|(path, count)| format!("  {path}: {count}"))
        .collect::<Vec<_>>()
        .join("\n");
    assert!(count <= max, "`{pattern}` budget exceeded: found {count}, max {max}.\n{listing}");
}

#[test]
fn unwrap_budget() {
    check_budget(".unwrap()", MAX_UNWRAP);
}

#[test]
fn expect_budget() {
    check_budget(".expect(", MAX_EXPECT);
}

#[test]
fn panic_budget() {
    check_budget("panic!(", MAX_PANIC);
}

#[test]
fn unreachable_budget() {
    check_budget("unreachable!(", MAX_UNREACHABLE);
}

#[test]
fn todo_budget() {
    check_budget("todo!(", MAX_TODO);
}

#[test]
fn unimplemented_budget() {
    check_budget("unimplemented!(", MAX_UNIMPLEMENTED);
}

#[test]
fn silent_discard_budget() {
    check_budget("let _ =", MAX_SILENT_DISCARD);
}

#[test]
fn dot_ok_budget() {
    check_budget(".ok()", MAX_DOT_OK);
}

#[test]
fn println_budget() {
    check_budget("println!(", MAX_PRINTLN);
}

#[test]
fn eprintln_budget() {
    check_budget("eprintln!(", MAX_EPRINTLN);
}

#[test]
fn raw_console_budget() {
    check_budget("web_sys::console", MAX_RAW_CONSOLE);
}

#[test]
fn allow_dead_code_budget() {
    check_budget("#[allow(dead_code)]", MAX_ALLOW_DEAD_CODE);
}

#[test]
fn browser_bindings_stay_behind_hydrate() {
    let Ok(lib) = fs::read_to_string("src/lib.rs") else {
        panic!("src/lib.rs missing");
    };
    let mut previous = "";
    for line in lib.lines() {
        if line.trim() == "pub mod dom;" {
            assert_eq!(previous.trim(), r#"#[cfg(feature = "hydrate")]"#, "`dom` must be feature-gated");
            return;
        }
        previous = line;
    }
    panic!("`pub mod dom;` not declared in src/lib.rs");
}

// `Element::request_fullscreen` in web-sys drops the returned promise, so a
// refusal would become an unhandled rejection. Use the promise-returning
// binding in `dom::video` instead.
#[test]
fn fullscreen_promise_budget() {
    check_budget(".request_fullscreen()", 0);
}

// `Document::ready_state` is a plain string in web-sys; there is no enum or
// cargo feature for it.
#[test]
fn ready_state_is_a_string() {
    check_budget("DocumentReadyState", 0);
    let Ok(manifest) = fs::read_to_string("Cargo.toml") else {
        panic!("Cargo.toml missing");
    };
    assert!(!manifest.contains("\"DocumentReadyState\""), "web-sys has no DocumentReadyState feature");
}

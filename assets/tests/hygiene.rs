//! Hygiene: source-level standards for the build pipelines.
//!
//! Production sources under `src/` (test files excluded) may not contain any
//! of the patterns below. Failures surface as `BuildError`, never as a panic
//! or a dropped result.

use std::fs;
use std::path::Path;

/// (pattern, reason)
const FORBIDDEN: &[(&str, &str)] = &[
    (".unwrap()", "panics"),
    (".expect(", "panics"),
    ("panic!(", "panics"),
    ("unreachable!(", "panics"),
    ("todo!(", "unfinished"),
    ("unimplemented!(", "unfinished"),
    ("let _ =", "discards a result"),
    (".ok()", "discards an error"),
    ("#[allow(dead_code)]", "hides dead code"),
];

fn production_sources(dir: &Path, out: &mut Vec<(String, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            production_sources(&path, out);
            continue;
        }
        let name = path.to_string_lossy().into_owned();
        if !name.ends_with(".rs") || name.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push((name, content));
        }
    }
}

#[test]
fn sources_are_found() {
    let mut files = Vec::new();
    production_sources(Path::new("src"), &mut files);
    assert!(files.iter().any(|(name, _)| name.ends_with("pipeline.rs")));
}

#[test]
fn no_forbidden_patterns_in_production_sources() {
    let mut files = Vec::new();
    production_sources(Path::new("src"), &mut files);

    let mut hits = Vec::new();
    for (name, content) in &files {
        for (lineno, line) in content.lines().enumerate() {
            for (pattern, reason) in FORBIDDEN {
                if line.contains(pattern) {
                    hits.push(format!("  {name}:{}: `{pattern}` {reason}", lineno + 1));
                }
            }
        }
    }

    assert!(hits.is_empty(), "forbidden patterns found:\n{}", hits.join("\n"));
}

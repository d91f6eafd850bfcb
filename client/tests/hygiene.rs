//! Hygiene: source-level standards for the browser client.
//!
//! Production sources under `src/` (test files excluded), including the
//! `csr`-only entry point and widget bridge, may not contain any of the
//! patterns below.

use std::fs;
use std::path::Path;

/// (pattern, reason)
const FORBIDDEN: &[(&str, &str)] = &[
    (".unwrap()", "panics"),
    (".expect(", "panics"),
    ("panic!(", "panics"),
    ("todo!(", "unfinished"),
    ("unimplemented!(", "unfinished"),
    ("let _ =", "discards a value"),
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
fn browser_entry_is_scanned() {
    let mut files = Vec::new();
    production_sources(Path::new("src"), &mut files);
    assert!(files.iter().any(|(name, _)| name.ends_with("lib.rs")));
    assert!(files.iter().any(|(name, _)| name.ends_with("sign_in_widget.rs")));
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

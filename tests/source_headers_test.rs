// ABOUTME: Checks that every Rust source file in the workspace opens with the shared file header
// ABOUTME: Two ABOUTME lines, then the SPDX identifier and the single copyright line
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Portfolio Site Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::{
    fs,
    path::{Path, PathBuf},
};

const SPDX_LINE: &str = "// SPDX-License-Identifier: MIT OR Apache-2.0";
const COPYRIGHT_LINE: &str = "// Copyright (c) 2025 Portfolio Site Contributors";

fn rust_sources(dir: &Path, found: &mut Vec<PathBuf>) {
    for entry in fs::read_dir(dir).unwrap() {
        let path = entry.unwrap().path();
        if path.is_dir() {
            rust_sources(&path, found);
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            found.push(path);
        }
    }
}

fn workspace_sources() -> Vec<PathBuf> {
    let root = Path::new(env!("CARGO_MANIFEST_DIR"));
    let mut found = Vec::new();
    for dir in ["src", "crates", "tests"] {
        rust_sources(&root.join(dir), &mut found);
    }
    found
}

#[test]
fn test_every_source_file_has_the_shared_header() {
    let sources = workspace_sources();
    assert!(sources.len() > 20, "found only {} files", sources.len());

    for path in sources {
        let text = fs::read_to_string(&path).unwrap();
        let head: Vec<&str> = text.lines().take(5).collect();
        assert_eq!(head.len(), 5, "{} is too short", path.display());
        assert!(head[0].starts_with("// ABOUTME: "), "{}", path.display());
        assert!(head[1].starts_with("// ABOUTME: "), "{}", path.display());
        assert_eq!(head[2], "//", "{}", path.display());
        assert_eq!(head[3], SPDX_LINE, "{}", path.display());
        assert_eq!(head[4], COPYRIGHT_LINE, "{}", path.display());
    }
}

#[test]
fn test_no_other_copyright_owner_appears() {
    for path in workspace_sources() {
        let text = fs::read_to_string(&path).unwrap();
        let owners = text
            .lines()
            .filter(|line| line.starts_with("// Copyright"))
            .count();
        assert_eq!(owners, 1, "{}", path.display());
        assert!(
            !text.lines().any(|line| line.starts_with("// Licensed under")),
            "{}",
            path.display()
        );
    }
}

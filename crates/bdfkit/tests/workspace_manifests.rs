// this_file: crates/bdfkit/tests/workspace_manifests.rs

//! Every member crate shares the workspace's package metadata

use std::fs;
use std::path::PathBuf;

const MEMBERS: [&str; 6] = [
    "bdfkit",
    "bdfkit-cli",
    "bdfkit-compose",
    "bdfkit-core",
    "bdfkit-format",
    "bdfkit-unicode",
];

const INHERITED: [&str; 6] = [
    "version.workspace = true",
    "authors.workspace = true",
    "edition.workspace = true",
    "rust-version.workspace = true",
    "license.workspace = true",
    "repository.workspace = true",
];

#[test]
fn members_inherit_package_metadata() {
    let crates = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("..");
    for member in MEMBERS {
        let manifest = fs::read_to_string(crates.join(member).join("Cargo.toml"))
            .unwrap_or_else(|err| panic!("reading {member}/Cargo.toml: {err}"));
        for field in INHERITED {
            assert!(
                manifest.lines().any(|line| line.trim() == field),
                "{member} is missing `{field}`"
            );
        }
    }
}

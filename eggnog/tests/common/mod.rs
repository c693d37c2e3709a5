//! Shared test helpers for integration tests.

use std::path::{Path, PathBuf};

use eggnog::LevelCatalog;

pub const LEVELS_FILE: &str = "eggnogv4.levels.txt";
pub const MAMMALS_FILE: &str = "eggnog.mammals";

pub const HUMAN: i64 = 9606;
pub const FLY: i64 = 7227;
pub const PLATYPUS: i64 = 9258;
pub const GIBBON: i64 = 61853;
pub const MAMMALS: i64 = 40674;
pub const PRIMATES: i64 = 9443;
pub const BILATERIA: i64 = 33213;

/// Resolve `tests/fixtures/{name}` relative to the workspace root.
pub fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../tests/fixtures")
        .join(name)
}

pub fn load_fixture(name: &str) -> LevelCatalog {
    LevelCatalog::load(&fixture_path(name))
        .unwrap_or_else(|e| panic!("fixture {} should load: {}", name, e))
}

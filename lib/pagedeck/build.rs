//! Forwards `PAGEDECK_*` entries of a local `.env` file to the compiler so
//! `config.rs` can bake them in with `option_env!`. Values already present in
//! the build environment win over the file.

use std::path::{Path, PathBuf};

const KEYS: &[&str] = &[
    "PAGEDECK_API_URL",
    "PAGEDECK_PAGE_PATH",
    "PAGEDECK_PAGE_USER_PATH",
];

/// Nearest `.env` at or above `start`, the same lookup `dotenvy::dotenv` does.
fn find_env_file(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(".env"))
        .find(|candidate| candidate.is_file())
}

fn main() {
    for key in KEYS {
        println!("cargo:rerun-if-env-changed={key}");
    }

    let Some(manifest_dir) = std::env::var_os("CARGO_MANIFEST_DIR") else {
        return;
    };
    let Some(path) = find_env_file(Path::new(&manifest_dir)) else {
        return;
    };
    // Any rerun directive disables cargo's default tracking, so the file is
    // watched explicitly.
    println!("cargo:rerun-if-changed={}", path.display());

    let Ok(entries) = dotenvy::from_path_iter(&path) else {
        return;
    };

    for (key, value) in entries.flatten() {
        if KEYS.contains(&key.as_str()) && std::env::var(&key).is_err() {
            println!("cargo:rustc-env={key}={value}");
        }
    }
}

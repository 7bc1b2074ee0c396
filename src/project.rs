//! Locate the directory for generated artifacts under a module root
use std::fs;
use std::path::{Path, PathBuf};

/// Resolve the directory in which to store generated files.
///
/// A module root carrying a `cue.mod` directory stores generated files
/// under `cue.mod/gen`. Roots from the legacy layout keep using their
/// existing `pkg` entry, whether it is a directory or a plain file.
/// Anything else defaults to `cue.mod/gen`.
pub fn gen_path<P: AsRef<Path>>(root: P) -> PathBuf {
    let root = root.as_ref();
    let mod_dir = root.join("cue.mod");
    if let Ok(info) = fs::metadata(&mod_dir) {
        if info.is_dir() {
            return mod_dir.join("gen");
        }
    }

    // legacy pkg mode, directory or plain file
    let pkg_dir = root.join("pkg");
    if fs::metadata(&pkg_dir).is_ok() {
        return pkg_dir;
    }

    mod_dir.join("gen")
}

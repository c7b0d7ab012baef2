//! Locating the bundled defaults tree

use anyhow::Result;
use std::path::{Path, PathBuf};

/// Environment override for the bundled template location
pub const DEFAULTS_DIR_ENV: &str = "SASSKIT_DEFAULTS_DIR";

/// Directory name of the bundled template tree
pub const DEFAULTS_DIR_NAME: &str = "defaults";

/// Resolve the template tree the catalog loads from
///
/// Order: explicit override (flag), then the environment variable, then the
/// bundled tree shipped with the binary. Explicit locations must exist, and
/// failing to find any tree is fatal - the defaults ship with the tool, so a
/// missing tree means the installation is damaged rather than anything the
/// user did.
pub fn resolve(override_dir: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = override_dir {
        return existing(dir.to_path_buf());
    }

    if let Ok(dir) = std::env::var(DEFAULTS_DIR_ENV) {
        return existing(PathBuf::from(dir));
    }

    locate_bundled().ok_or_else(|| {
        anyhow::anyhow!(
            "Bundled templates not found; reinstall sasskit or set {} to a template directory",
            DEFAULTS_DIR_ENV
        )
    })
}

fn existing(dir: PathBuf) -> Result<PathBuf> {
    if dir.is_dir() {
        Ok(dir)
    } else {
        anyhow::bail!("Template directory not found: {}", dir.display())
    }
}

/// Look next to the installed binary first, then fall back to the repository
/// layout used during development (`target/<profile>/` sits two levels below
/// the workspace root).
fn locate_bundled() -> Option<PathBuf> {
    if let Ok(exe) = std::env::current_exe() {
        if let Some(exe_dir) = exe.parent() {
            let installed = exe_dir.join(DEFAULTS_DIR_NAME);
            if installed.is_dir() {
                return Some(installed);
            }

            if let Some(workspace_root) = exe_dir.parent().and_then(Path::parent) {
                let dev = workspace_root.join(DEFAULTS_DIR_NAME);
                if dev.is_dir() {
                    return Some(dev);
                }
            }
        }
    }

    // cargo run / cargo test: CARGO_MANIFEST_DIR points at the member crate
    if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
        let manifest_dir = PathBuf::from(manifest_dir);
        if let Some(workspace_root) = manifest_dir.parent().and_then(Path::parent) {
            let dev = workspace_root.join(DEFAULTS_DIR_NAME);
            if dev.is_dir() {
                return Some(dev);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_uses_explicit_override() {
        let dir = TempDir::new().unwrap();
        let resolved = resolve(Some(dir.path())).unwrap();
        assert_eq!(resolved, dir.path());
    }

    #[test]
    fn test_resolve_rejects_missing_override() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        assert!(resolve(Some(&missing)).is_err());
    }
}

//! Detecting which features an existing installation already contains

use super::feature::{feature_name, Category};
use super::loader::Catalog;
use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::Path;

/// The add flow only makes sense from inside an installation root: the final
/// path segment must be literally `styles`. Fails before any side effect.
pub fn ensure_styles_dir(path: &Path) -> Result<()> {
    let is_styles = path
        .file_name()
        .map(|name| name == crate::STYLES_DIR)
        .unwrap_or(false);

    if !is_styles {
        anyhow::bail!("Please navigate to the styles directory to add features");
    }

    Ok(())
}

/// New catalog with `checked` set on every feature whose partial already
/// exists under the matching category directory of `install_dir`
pub fn scan_installed(catalog: &Catalog, install_dir: &Path) -> Result<Catalog> {
    let mut marked = catalog.clone();

    for category in Category::ALL {
        let names = installed_names(&install_dir.join(category.dir_name()))?;
        if names.is_empty() {
            continue;
        }
        for feature in marked.category_mut(category) {
            if names.contains(&feature.name) {
                feature.checked = true;
            }
        }
    }

    Ok(marked)
}

/// Feature names found in one installed category directory
///
/// A directory that does not exist means nothing of that category is
/// installed yet; any other read fault propagates. Files outside the
/// `_<name>.scss` convention cannot match a catalog entry and are skipped,
/// so user-added stylesheets never disturb the scan.
fn installed_names(dir: &Path) -> Result<Vec<String>> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e).with_context(|| format!("Failed to scan {}", dir.display())),
    };

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        if let Some(file_name) = entry.file_name().to_str() {
            if let Ok(name) = feature_name(file_name) {
                names.push(name);
            }
        }
    }

    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Feature;
    use tempfile::TempDir;

    fn sample_catalog() -> Catalog {
        Catalog {
            abstracts: vec![
                Feature::new("Mixins", Category::Abstracts),
                Feature::new("Functions", Category::Abstracts),
            ],
            components: vec![Feature::new("Buttons", Category::Components)],
            layouts: vec![Feature::new("Grid", Category::Layouts)],
        }
    }

    #[test]
    fn test_scan_marks_installed_features_in_every_category() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("abstracts")).unwrap();
        fs::write(dir.path().join("abstracts/_mixins.scss"), "").unwrap();
        fs::create_dir_all(dir.path().join("layouts")).unwrap();
        fs::write(dir.path().join("layouts/_grid.scss"), "").unwrap();

        let catalog = sample_catalog();
        let marked = scan_installed(&catalog, dir.path()).unwrap();

        assert_eq!(marked.checked_names(), ["Mixins", "Grid"]);
        // The source catalog stays unmarked
        assert!(catalog.checked_names().is_empty());
    }

    #[test]
    fn test_scan_tolerates_missing_category_dirs() {
        let dir = TempDir::new().unwrap();

        let marked = scan_installed(&sample_catalog(), dir.path()).unwrap();

        assert!(marked.checked_names().is_empty());
    }

    #[test]
    fn test_scan_ignores_files_outside_the_convention() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("components")).unwrap();
        fs::write(dir.path().join("components/custom.css"), "").unwrap();
        fs::write(dir.path().join("components/_buttons.scss"), "").unwrap();

        let marked = scan_installed(&sample_catalog(), dir.path()).unwrap();

        assert_eq!(marked.checked_names(), ["Buttons"]);
    }

    #[test]
    fn test_scan_skips_partials_not_in_the_catalog() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("abstracts")).unwrap();
        fs::write(dir.path().join("abstracts/_shadows.scss"), "").unwrap();

        let marked = scan_installed(&sample_catalog(), dir.path()).unwrap();

        assert!(marked.checked_names().is_empty());
    }

    #[test]
    fn test_ensure_styles_dir_accepts_styles_root() {
        assert!(ensure_styles_dir(Path::new("/project/styles")).is_ok());
    }

    #[test]
    fn test_ensure_styles_dir_rejects_other_dirs() {
        assert!(ensure_styles_dir(Path::new("/project/styles/components")).is_err());
        assert!(ensure_styles_dir(Path::new("/project")).is_err());
        assert!(ensure_styles_dir(Path::new("/")).is_err());
    }
}

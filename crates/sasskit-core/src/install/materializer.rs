//! Copying template files into a target installation

use crate::catalog::{partial_file_name, Catalog, Category};
use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;

/// Subdirectory every installation receives unconditionally
pub const BASE_DIR: &str = "base";

/// Fixed templates copied into `base/` on every run, selected or not
pub const BASE_FILES: [&str; 3] = ["base", "typography", "variables"];

/// Copy the base templates plus every selected feature into `install_dir`
///
/// Directory creation is idempotent and existing files are overwritten (last
/// write wins). Each file is a single copy operation; a mid-run fault aborts
/// the remaining plan and leaves the directory partially populated - there is
/// no rollback. Returns the relative path of every copied file.
pub async fn materialize(
    defaults_dir: &Path,
    install_dir: &Path,
    selection: &Catalog,
) -> Result<Vec<String>> {
    // Creates the installation root and base directory in one step
    let base_dir = install_dir.join(BASE_DIR);
    fs::create_dir_all(&base_dir)
        .await
        .with_context(|| format!("Failed to create directory: {}", base_dir.display()))?;

    let mut copied = Vec::new();

    for file in BASE_FILES {
        let file_name = partial_file_name(file);
        copied.push(copy_partial(defaults_dir, install_dir, BASE_DIR, &file_name).await?);
    }

    for category in Category::ALL {
        let features = selection.category(category);
        // An unselected category never gets a directory
        if features.is_empty() {
            continue;
        }

        let category_dir = install_dir.join(category.dir_name());
        fs::create_dir_all(&category_dir)
            .await
            .with_context(|| format!("Failed to create directory: {}", category_dir.display()))?;

        for feature in features {
            let file_name = feature.file_name();
            copied
                .push(copy_partial(defaults_dir, install_dir, category.dir_name(), &file_name).await?);
        }
    }

    Ok(copied)
}

/// Copy one partial out of the template tree, returning its relative path
async fn copy_partial(
    defaults_dir: &Path,
    install_dir: &Path,
    subdir: &str,
    file_name: &str,
) -> Result<String> {
    let source = defaults_dir.join(subdir).join(file_name);
    let target = install_dir.join(subdir).join(file_name);

    fs::copy(&source, &target)
        .await
        .with_context(|| format!("Failed to copy template: {}", source.display()))?;

    Ok(format!("{}/{}", subdir, file_name))
}

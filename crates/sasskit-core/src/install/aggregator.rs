//! Generating the aggregator stylesheet

use crate::catalog::{Catalog, Category};
use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;

/// File the generated import list is written to, at the installation root
pub const AGGREGATOR_FILE: &str = "main.scss";

/// Render one import line per feature, in fixed category order (abstracts,
/// components, layouts) and catalog order within each category
///
/// Later categories may rely on definitions from earlier ones, so the order
/// is never alphabetized. Base files are deliberately absent: the aggregator
/// encodes only the opted-in features.
pub fn render_aggregator(selection: &Catalog) -> String {
    let mut content = String::new();

    for category in Category::ALL {
        for feature in selection.category(category) {
            content.push_str(&format!(
                "@import \"{}/{}\";\n",
                category.dir_name(),
                feature.name.to_lowercase()
            ));
        }
    }

    content
}

/// Write the aggregator to `install_dir`, replacing any previous one
pub async fn generate_aggregator(install_dir: &Path, selection: &Catalog) -> Result<()> {
    let path = install_dir.join(AGGREGATOR_FILE);
    fs::write(&path, render_aggregator(selection))
        .await
        .with_context(|| format!("Failed to write file: {}", path.display()))?;

    Ok(())
}

//! Catalog discovery from the bundled template tree

use super::feature::{feature_name, Category, Feature};
use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Every available feature, one ordered sequence per category
///
/// Populated once per invocation from the bundled defaults tree and treated
/// as an immutable value afterwards: the scanner and the selection filter
/// both return new derived catalogs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    pub abstracts: Vec<Feature>,
    pub components: Vec<Feature>,
    pub layouts: Vec<Feature>,
}

impl Catalog {
    /// Enumerate the bundled template tree
    ///
    /// Each sequence keeps filesystem enumeration order untouched (never
    /// sorted) because it determines aggregator ordering. A missing category
    /// directory or an unconventional file name is fatal: the bundled tree
    /// ships with the tool, so either means the installation itself is
    /// damaged rather than anything the user did.
    pub fn load(defaults_dir: &Path) -> Result<Self> {
        Ok(Self {
            abstracts: load_category(defaults_dir, Category::Abstracts)?,
            components: load_category(defaults_dir, Category::Components)?,
            layouts: load_category(defaults_dir, Category::Layouts)?,
        })
    }

    pub fn category(&self, category: Category) -> &[Feature] {
        match category {
            Category::Abstracts => &self.abstracts,
            Category::Components => &self.components,
            Category::Layouts => &self.layouts,
        }
    }

    pub(crate) fn category_mut(&mut self, category: Category) -> &mut Vec<Feature> {
        match category {
            Category::Abstracts => &mut self.abstracts,
            Category::Components => &mut self.components,
            Category::Layouts => &mut self.layouts,
        }
    }

    /// All features in aggregator order: abstracts, components, layouts
    pub fn iter(&self) -> impl Iterator<Item = &Feature> {
        self.abstracts
            .iter()
            .chain(&self.components)
            .chain(&self.layouts)
    }

    pub fn is_empty(&self) -> bool {
        self.abstracts.is_empty() && self.components.is_empty() && self.layouts.is_empty()
    }

    /// Names of every feature currently marked as installed
    pub fn checked_names(&self) -> Vec<String> {
        self.iter()
            .filter(|f| f.checked)
            .map(|f| f.name.clone())
            .collect()
    }

    /// New catalog keeping only the named features, independently per category
    ///
    /// Matching is by name alone - the selection carries no category tag, so
    /// a same-named feature in two categories is kept in both.
    pub fn filtered(&self, selected: &HashSet<String>) -> Catalog {
        let keep = |features: &[Feature]| -> Vec<Feature> {
            features
                .iter()
                .filter(|f| selected.contains(&f.name))
                .cloned()
                .collect()
        };

        Catalog {
            abstracts: keep(&self.abstracts),
            components: keep(&self.components),
            layouts: keep(&self.layouts),
        }
    }
}

fn load_category(defaults_dir: &Path, category: Category) -> Result<Vec<Feature>> {
    let dir = defaults_dir.join(category.dir_name());
    let entries = fs::read_dir(&dir)
        .with_context(|| format!("Failed to read bundled templates at {}", dir.display()))?;

    let mut features = Vec::new();
    for entry in entries {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }

        let file_name = entry.file_name();
        let file_name = file_name
            .to_str()
            .with_context(|| format!("Non-UTF-8 template name in {}", dir.display()))?;
        let name = feature_name(file_name)
            .with_context(|| format!("Unexpected template in {}", dir.display()))?;

        features.push(Feature::new(name, category));
    }

    Ok(features)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_defaults(categories: &[(&str, &[&str])]) -> TempDir {
        let dir = TempDir::new().unwrap();
        for (category, files) in categories {
            let category_dir = dir.path().join(category);
            fs::create_dir_all(&category_dir).unwrap();
            for file in files.iter() {
                fs::write(category_dir.join(file), "// template\n").unwrap();
            }
        }
        dir
    }

    #[test]
    fn test_load_derives_names_per_category() {
        let dir = write_defaults(&[
            ("abstracts", &["_mixins.scss", "_functions.scss"]),
            ("components", &["_buttons.scss"]),
            ("layouts", &["_grid.scss"]),
        ]);

        let catalog = Catalog::load(dir.path()).unwrap();

        let abstracts: HashSet<&str> = catalog.abstracts.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(abstracts, HashSet::from(["Mixins", "Functions"]));
        assert_eq!(catalog.components[0].name, "Buttons");
        assert_eq!(catalog.layouts[0].name, "Grid");
        assert!(catalog.iter().all(|f| !f.checked));
    }

    #[test]
    fn test_load_fails_on_missing_category_dir() {
        let dir = write_defaults(&[("abstracts", &["_mixins.scss"])]);
        assert!(Catalog::load(dir.path()).is_err());
    }

    #[test]
    fn test_load_fails_on_unconventional_template_name() {
        let dir = write_defaults(&[
            ("abstracts", &["notes.txt"]),
            ("components", &[]),
            ("layouts", &[]),
        ]);
        assert!(Catalog::load(dir.path()).is_err());
    }

    #[test]
    fn test_filtered_keeps_order_and_drops_unselected() {
        let catalog = Catalog {
            abstracts: vec![
                Feature::new("Mixins", Category::Abstracts),
                Feature::new("Functions", Category::Abstracts),
            ],
            components: vec![Feature::new("Buttons", Category::Components)],
            layouts: vec![],
        };

        let selected = HashSet::from(["Functions".to_string(), "Buttons".to_string()]);
        let selection = catalog.filtered(&selected);

        assert_eq!(selection.abstracts.len(), 1);
        assert_eq!(selection.abstracts[0].name, "Functions");
        assert_eq!(selection.components[0].name, "Buttons");
        assert!(selection.layouts.is_empty());
        // The source catalog is untouched
        assert_eq!(catalog.abstracts.len(), 2);
    }

    #[test]
    fn test_filtered_matches_same_name_across_categories() {
        let catalog = Catalog {
            abstracts: vec![Feature::new("Grid", Category::Abstracts)],
            components: vec![],
            layouts: vec![Feature::new("Grid", Category::Layouts)],
        };

        let selection = catalog.filtered(&HashSet::from(["Grid".to_string()]));

        assert_eq!(selection.abstracts.len(), 1);
        assert_eq!(selection.layouts.len(), 1);
    }
}

//! Catalog data model and the template naming convention

use std::fmt;
use thiserror::Error;

/// Leading delimiter of a template partial's file name
pub const PARTIAL_PREFIX: char = '_';

/// File extension shared by every template partial
pub const PARTIAL_SUFFIX: &str = ".scss";

/// The three feature groupings, in the order the aggregator emits them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Abstracts,
    Components,
    Layouts,
}

impl Category {
    /// Emission order: components may rely on abstracts, layouts on both
    pub const ALL: [Category; 3] = [Category::Abstracts, Category::Components, Category::Layouts];

    /// Directory name, identical on the template side and the installed side
    pub fn dir_name(self) -> &'static str {
        match self {
            Category::Abstracts => "abstracts",
            Category::Components => "components",
            Category::Layouts => "layouts",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Category::Abstracts => "Abstracts",
            Category::Components => "Components",
            Category::Layouts => "Layouts",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A single selectable template unit
///
/// Identity is `(category, name)`; names are assumed unique within a category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feature {
    /// Human-readable name with a capitalized first letter (e.g. "Buttons")
    pub name: String,
    pub category: Category,
    /// Whether the feature is already present in the target installation
    pub checked: bool,
}

impl Feature {
    pub fn new(name: impl Into<String>, category: Category) -> Self {
        Self {
            name: name.into(),
            category,
            checked: false,
        }
    }

    /// File name of this feature's partial on both sides of a copy
    pub fn file_name(&self) -> String {
        partial_file_name(&self.name)
    }
}

/// A template file name that does not follow the `_<name>.scss` convention
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unexpected template file name '{file_name}' (expected `_<name>.scss`)")]
pub struct PartialNameError {
    pub file_name: String,
}

/// Derive a feature name from a partial's file name: strip the leading
/// delimiter and the extension, then upper-case the first character
pub fn feature_name(file_name: &str) -> Result<String, PartialNameError> {
    let err = || PartialNameError {
        file_name: file_name.to_string(),
    };

    let stem = file_name
        .strip_prefix(PARTIAL_PREFIX)
        .and_then(|rest| rest.strip_suffix(PARTIAL_SUFFIX))
        .ok_or_else(err)?;

    let mut chars = stem.chars();
    let first = chars.next().ok_or_else(err)?;
    Ok(first.to_uppercase().chain(chars).collect())
}

/// Inverse of [`feature_name`]: lower-case the name and re-wrap it with the
/// delimiter and extension
pub fn partial_file_name(name: &str) -> String {
    format!("{}{}{}", PARTIAL_PREFIX, name.to_lowercase(), PARTIAL_SUFFIX)
}

//! Feature catalog: discovery, naming rules, and installation scanning
//!
//! This module provides:
//! - The catalog data model (Category, Feature, Catalog)
//! - The `_<name>.scss` naming convention and its derivation rules
//! - Catalog loading from the bundled template tree
//! - Scanning an existing installation for already-present features

pub mod feature;
pub mod loader;
pub mod scan;

pub use feature::{
    feature_name, partial_file_name, Category, Feature, PartialNameError, PARTIAL_PREFIX,
    PARTIAL_SUFFIX,
};
pub use loader::Catalog;
pub use scan::{ensure_styles_dir, scan_installed};

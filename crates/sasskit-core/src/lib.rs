//! Sasskit Core - Shared library for scaffolding modular SCSS style trees
//!
//! This library provides the core functionality for installing stylesheet
//! feature modules (abstracts, components, layouts) from a bundled template
//! catalog into a project's `styles/` directory and generating the `main.scss`
//! aggregator that imports them in a deterministic order.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Pure functions and sequential I/O for catalog
//!   loading, installation scanning, template materialization and aggregator
//!   generation
//! - **Layer 2: CLI/TUI Interface** - Optional cliclack-based prompt flows
//!   (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based prompt flows module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use sasskit_core::{defaults, Catalog};
//!
//! let defaults_dir = defaults::resolve(None)?;
//! let catalog = Catalog::load(&defaults_dir)?;
//!
//! // Use the low-level APIs
//! let selection = catalog.filtered(&selected_names);
//! sasskit_core::materialize(&defaults_dir, &install_dir, &selection).await?;
//! sasskit_core::generate_aggregator(&install_dir, &selection).await?;
//! ```

pub mod catalog;
pub mod defaults;
pub mod install;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use catalog::{
    ensure_styles_dir, feature_name, partial_file_name, scan_installed, Catalog, Category, Feature,
    PartialNameError,
};
pub use install::{generate_aggregator, materialize, render_aggregator, AGGREGATOR_FILE};

#[cfg(feature = "tui")]
pub use tui::{run_add, run_init};

/// Name of the directory every installation lives in; the add flow requires
/// the working directory's final path segment to match it
pub const STYLES_DIR: &str = "styles";

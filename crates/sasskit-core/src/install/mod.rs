//! Materializing an installation and generating its aggregator
//!
//! This module provides:
//! - Template copying into the target `styles/` tree (base + selection)
//! - Aggregator rendering and writing (`main.scss`)

pub mod aggregator;
pub mod materializer;

pub use aggregator::{generate_aggregator, render_aggregator, AGGREGATOR_FILE};
pub use materializer::{materialize, BASE_DIR, BASE_FILES};

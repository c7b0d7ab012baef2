//! Charm-style CLI prompts using cliclack

use crate::catalog::{ensure_styles_dir, scan_installed, Catalog};
use crate::install::{aggregator, materializer};
use anyhow::{Context, Result};
use colored::Colorize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Deepest directory level offered by the install-path picker
const PICKER_DEPTH: usize = 5;

/// Dependency trees are never sensible install targets
const PICKER_EXCLUDE: &str = "node_modules";

/// CLI arguments for the init flow
#[derive(Debug, Clone, Default)]
pub struct InitArgs {
    /// Directory to install the styles folder into
    pub path: Option<PathBuf>,

    /// Features to install
    pub features: Option<Vec<String>>,
}

/// CLI arguments for the add flow
#[derive(Debug, Clone, Default)]
pub struct AddArgs {
    /// Features to install
    pub features: Option<Vec<String>>,
}

/// Run the first-time installation flow with interactive prompts
pub async fn run_init(catalog: &Catalog, defaults_dir: &Path, args: InitArgs) -> Result<()> {
    cliclack::intro("sasskit")?;

    // Step 1: Pick where the styles tree goes
    let parent = select_install_path(&args.path)?;
    let install_dir = parent.join(crate::STYLES_DIR);

    // Step 2: Pick features
    let selected = select_features(catalog, &args.features)?;
    let selection = catalog.filtered(&selected);

    // Step 3: Copy templates and write the aggregator
    install(defaults_dir, &install_dir, &selection).await?;

    cliclack::outro(format!(
        "{} To use, {} {}",
        "Success!".green().bold(),
        "@import".yellow(),
        "styles/main.scss".blue()
    ))?;

    Ok(())
}

/// Run the add flow against the installation in the working directory
pub async fn run_add(catalog: &Catalog, defaults_dir: &Path, args: AddArgs) -> Result<()> {
    // Adding only works from inside an installation root; checked before
    // anything touches the terminal or the filesystem
    let install_dir = std::env::current_dir().context("Failed to read current directory")?;
    ensure_styles_dir(&install_dir)?;

    cliclack::intro("sasskit")?;

    // Step 1: Mark features that are already installed
    let catalog = scan_installed(catalog, &install_dir)?;
    let installed: HashSet<String> = catalog.checked_names().into_iter().collect();

    // Step 2: Pick features; whatever is installed stays installed
    let mut selected = select_features(&catalog, &args.features)?;
    selected.extend(installed.iter().cloned());
    let selection = catalog.filtered(&selected);

    // Step 3: Copy templates and rewrite the aggregator
    install(defaults_dir, &install_dir, &selection).await?;

    cliclack::outro(format!(
        "{} Added {} new feature(s)",
        "Success!".green().bold(),
        selected.len() - installed.len()
    ))?;

    Ok(())
}

fn select_install_path(preset: &Option<PathBuf>) -> Result<PathBuf> {
    // Use --path flag if provided
    if let Some(dir) = preset {
        if !dir.is_dir() {
            anyhow::bail!("Install path is not a directory: {}", dir.display());
        }
        cliclack::log::info(format!("Using directory: {}", dir.display()))?;
        return Ok(dir.clone());
    }

    let candidates = install_path_candidates(Path::new("."))?;

    let mut select = cliclack::select("Select path to install styles folder");
    for candidate in &candidates {
        select = select.item(candidate.clone(), candidate, "");
    }

    let picked: String = select.interact()?;
    Ok(PathBuf::from(picked))
}

/// Candidate directories for the picker: the working directory first, then
/// every subdirectory down to a bounded depth, skipping dependency trees
fn install_path_candidates(root: &Path) -> Result<Vec<String>> {
    let mut candidates = vec!["./".to_string()];

    let walker = WalkDir::new(root)
        .min_depth(1)
        .max_depth(PICKER_DEPTH)
        .into_iter()
        .filter_entry(|entry| entry.file_type().is_dir() && entry.file_name() != PICKER_EXCLUDE);

    for entry in walker {
        let entry = entry?;
        candidates.push(entry.path().display().to_string());
    }

    Ok(candidates)
}

fn select_features(catalog: &Catalog, preset: &Option<Vec<String>>) -> Result<HashSet<String>> {
    if catalog.is_empty() {
        anyhow::bail!("No features found in the bundled templates.");
    }

    // Use --features flag if provided
    if let Some(names) = preset {
        return resolve_preset_features(catalog, names);
    }

    let mut multi = cliclack::multiselect("Select features to install");
    for feature in catalog.iter() {
        multi = multi.item(feature.name.clone(), &feature.name, feature.category);
    }

    // Already-installed features come pre-checked in the add flow
    let checked = catalog.checked_names();
    if !checked.is_empty() {
        multi = multi.initial_values(checked);
    }

    let selected: Vec<String> = multi.required(false).interact()?;

    if selected.is_empty() {
        cliclack::log::info("No features selected; installing base files only")?;
    } else {
        cliclack::log::success(format!("Features: {}", selected.join(", ")))?;
    }

    Ok(selected.into_iter().collect())
}

/// Match preset feature names against the catalog, case-insensitively
fn resolve_preset_features(catalog: &Catalog, names: &[String]) -> Result<HashSet<String>> {
    let mut selected = HashSet::new();

    for name in names {
        if let Some(feature) = catalog.iter().find(|f| f.name.eq_ignore_ascii_case(name)) {
            selected.insert(feature.name.clone());
        } else {
            cliclack::log::warning(format!("Unknown feature: {}", name))?;
        }
    }

    Ok(selected)
}

async fn install(defaults_dir: &Path, install_dir: &Path, selection: &Catalog) -> Result<()> {
    let spinner = cliclack::spinner();
    spinner.start("Installing stylesheets...");

    // Copy template files
    let copied = materializer::materialize(defaults_dir, install_dir, selection).await?;

    // The aggregator is the one generated (not copied) file
    aggregator::generate_aggregator(install_dir, selection).await?;

    spinner.stop(format!(
        "Created {} files in {}",
        copied.len() + 1,
        install_dir.display()
    ));

    Ok(())
}

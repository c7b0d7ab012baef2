//! Sasskit CLI - Interactive scaffolding for modular SCSS style trees

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use sasskit_core::tui::{AddArgs, InitArgs};
use sasskit_core::{defaults, Catalog};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sasskit")]
#[command(about = "Scaffold a modular SCSS styles directory from bundled templates")]
#[command(version)]
pub struct Args {
    /// `add` extends an existing styles directory; anything else starts a new one
    pub command: Option<String>,

    /// Local directory to use for templates instead of the bundled tree (for development use)
    #[arg(long = "defaults-dir")]
    pub defaults_dir: Option<PathBuf>,

    /// Directory to install the styles folder into (skips the path prompt)
    #[arg(short, long)]
    pub path: Option<PathBuf>,

    /// Features to install (comma-separated, skips the feature prompt)
    #[arg(short, long, value_delimiter = ',')]
    pub features: Option<Vec<String>>,
}

#[tokio::main]
async fn main() {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    let result = run(args).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    if let Err(e) = result {
        eprintln!("{} {:#}", "Error!".red(), e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<()> {
    // The catalog loads before either flow branches, so a damaged template
    // tree fails the same way everywhere
    let defaults_dir = defaults::resolve(args.defaults_dir.as_deref())?;
    let catalog = Catalog::load(&defaults_dir)?;

    match args.command.as_deref() {
        Some("add") => {
            let add_args = AddArgs {
                features: args.features,
            };
            sasskit_core::run_add(&catalog, &defaults_dir, add_args).await
        }
        // Anything else, including nothing, starts a fresh installation
        _ => {
            let init_args = InitArgs {
                path: args.path,
                features: args.features,
            };
            sasskit_core::run_init(&catalog, &defaults_dir, init_args).await
        }
    }
}

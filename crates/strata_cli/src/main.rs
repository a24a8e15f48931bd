//! Strata CLI
//!
//! Render combobox definitions to HTML and check them for missing options.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use strata_core::{Event, Scope};
use strata_layout::ElementBuilder;
use tracing::{debug, info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod config;

use config::PreviewFile;

#[derive(Parser)]
#[command(name = "strata")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Strata component CLI", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a combobox definition to HTML
    Render {
        /// Definition file (TOML, or JSON with a .json extension)
        file: PathBuf,

        /// Output path (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Report required options missing from a definition
    Check {
        /// Definition file
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    match cli.command {
        Commands::Render { file, output } => cmd_render(&file, output.as_deref()),
        Commands::Check { file } => cmd_check(&file),
    }
}

fn cmd_render(file: &Path, output: Option<&Path>) -> Result<()> {
    let preview = PreviewFile::load(file)?;
    let html = render_preview(&preview);

    match output {
        Some(path) => {
            fs::write(path, &html)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote {} bytes to {}", html.len(), path.display());
        }
        None => println!("{}", html),
    }

    Ok(())
}

/// Mount the preview in a fresh scope, deliver its focus event and render
fn render_preview(preview: &PreviewFile) -> String {
    let key = preview.key();

    let scope = Scope::new();
    let view = preview.props.mount(&scope, key, preview.variant);

    if preview.focus_ignored() {
        warn!(
            key,
            "focused = true has no effect without props.has_interactions; rendering closed"
        );
    }

    if preview.focused {
        let changed = view.handle_event(&mut Event::focus().target(key));
        debug!(key, changed, state = ?view.focus_state(), "delivered focus");
        // The next build picks up the new state
        scope.take_dirty();
    }

    debug!(key, signals = scope.stats().signal_count, "rendering preview");
    view.render_html()
}

fn cmd_check(file: &Path) -> Result<()> {
    let preview = PreviewFile::load(file)?;
    let violations = preview.props.validate(preview.variant);

    if violations.is_empty() {
        info!("{}: ok ({:?})", file.display(), preview.variant);
        return Ok(());
    }

    for violation in &violations {
        println!("{}: {}", file.display(), violation);
    }

    std::process::exit(1);
}

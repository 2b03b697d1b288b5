use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use colored::Colorize;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;
use webforge_core::{Diagnostic, Outcome, Severity};

mod config;
mod example;
mod preview;
mod watch;

#[derive(Parser)]
#[command(name = "webforge", version, about = "Compile YAML page descriptions into HTML")]
struct Cli {
    /// Suppress non-essential output
    #[arg(long, global = true)]
    quiet: bool,

    /// Enable logging (-v for info, -vv for debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile a YAML document to an HTML page
    Render {
        /// Path to the .yaml file
        file: PathBuf,

        /// Write the page here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,

        /// Export even when the document is empty or invalid
        #[arg(long)]
        force: bool,
    },

    /// Re-render a live preview whenever the document changes
    Watch {
        /// Path to the .yaml file
        file: PathBuf,

        /// Preview file (default: previewFile from webforge.json)
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Check YAML documents and report diagnostics
    Validate {
        /// Files or directories to check
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },

    /// Print the example landing page document
    Example {
        /// Write the example here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let cwd = std::env::current_dir().context("Cannot determine current directory")?;
    let config = config::load_config(&cwd)?;

    match cli.command {
        Commands::Render { file, out, force } => {
            handle_render(&file, out.as_deref(), force, &config, cli.quiet)?;
        }
        Commands::Watch { file, out } => {
            watch::watch_and_preview(&file, out.as_deref(), &config, cli.quiet)?;
        }
        Commands::Validate { paths } => {
            handle_validate(&paths, cli.quiet)?;
        }
        Commands::Example { out } => {
            example::emit_example(out.as_deref(), cli.quiet)?;
        }
    }

    Ok(())
}

/// Level forced by `-v` flags; `None` leaves `RUST_LOG` in charge.
fn log_level(verbose: u8) -> Option<log::LevelFilter> {
    match verbose {
        0 => None,
        1 => Some(log::LevelFilter::Info),
        _ => Some(log::LevelFilter::Debug),
    }
}

fn init_logging(verbose: u8) {
    let mut builder = env_logger::Builder::from_default_env();
    if let Some(level) = log_level(verbose) {
        builder.filter_level(level);
    }
    builder.init();
}

fn handle_render(
    file: &Path,
    out: Option<&Path>,
    force: bool,
    config: &config::WebforgeConfig,
    quiet: bool,
) -> Result<()> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read '{}'", file.display()))?;

    if content.trim().is_empty() && !force {
        anyhow::bail!("'{}' is empty; nothing to export", file.display());
    }

    let resolver = config.resolver();
    let compiled = preview::render_preview(&content, &resolver);

    let label = file.display().to_string();
    for diag in &compiled.diagnostics {
        eprintln!("{}", format_diagnostic(&label, diag));
    }

    if !compiled.is_exportable() && !force {
        match compiled.outcome {
            Outcome::Welcome => anyhow::bail!("'{}' has no content to export", label),
            _ => anyhow::bail!("'{}' could not be compiled; fix the errors above", label),
        }
    }

    match out {
        Some(path) => {
            std::fs::write(path, &compiled.html)
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
            if !quiet {
                println!("{} {}", "Exported".green().bold(), path.display());
            }
        }
        None => println!("{}", compiled.html),
    }
    Ok(())
}

fn handle_validate(paths: &[PathBuf], quiet: bool) -> Result<()> {
    let mut has_errors = false;

    for file in collect_documents(paths)? {
        let content = std::fs::read_to_string(&file)
            .with_context(|| format!("Failed to read '{}'", file.display()))?;
        let label = file.display().to_string();

        let diagnostics = match webforge_core::parse_document(&content) {
            Ok(lowered) => {
                let mut all = lowered.diagnostics;
                if let Some(doc) = &lowered.document {
                    all.extend(doc.validate());
                }
                all
            }
            Err(err) => vec![err.to_diagnostic()],
        };

        if diagnostics.is_empty() {
            if !quiet {
                println!("{}: {}", label, "OK".green());
            }
            continue;
        }
        for diag in &diagnostics {
            has_errors |= diag.severity == Severity::Error;
            println!("{}", format_diagnostic(&label, diag));
        }
    }

    if has_errors {
        std::process::exit(1);
    }

    Ok(())
}

/// Expand directories into the YAML files beneath them, sorted.
fn collect_documents(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        if !path.is_dir() {
            files.push(path.clone());
            continue;
        }
        let mut found = Vec::new();
        for entry in WalkDir::new(path) {
            let entry =
                entry.with_context(|| format!("Failed to walk '{}'", path.display()))?;
            if entry.file_type().is_file() && is_yaml(entry.path()) {
                found.push(entry.into_path());
            }
        }
        found.sort();
        files.extend(found);
    }
    Ok(files)
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml" | "yml")
    )
}

fn format_diagnostic(file: &str, diag: &Diagnostic) -> String {
    let severity_str = match diag.severity {
        Severity::Error => format!("{}", "error".red().bold()),
        Severity::Warning => format!("{}", "warning".yellow().bold()),
        Severity::Info => format!("{}", "info".cyan().bold()),
    };

    let location = match &diag.path {
        Some(path) => format!("{file} ({path})"),
        None => file.to_string(),
    };

    let code_str = match &diag.code {
        Some(c) => format!("[{c}] "),
        None => String::new(),
    };

    format!("{location}: {severity_str}: {code_str}{}", diag.message)
}

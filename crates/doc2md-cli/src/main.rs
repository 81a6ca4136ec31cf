//! doc2md CLI: document conversion through the converter directory.

mod config;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use doc2md_backend::directory;
use doc2md_core::{ConverterKind, Credentials};
use std::path::{Path, PathBuf};
use std::str::FromStr;

#[derive(Parser)]
#[command(
    name = "doc2md",
    version,
    about = "Convert documents to markdown with the best available backend"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a file to markdown
    Convert {
        /// Input file
        file: PathBuf,

        /// Force a specific converter instead of automatic selection
        #[arg(short, long)]
        converter: Option<String>,

        /// API key forwarded to hosted converters
        #[arg(long)]
        api_key: Option<String>,

        /// Base URL override for hosted converters
        #[arg(long)]
        base_url: Option<String>,

        /// Write output to this path instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List converters and their availability
    List {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Probe summary; exits non-zero when no converter is usable
    Check,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            file,
            converter,
            api_key,
            base_url,
            output,
        } => convert(&file, converter.as_deref(), api_key, base_url, output),
        Commands::List { json } => list(json),
        Commands::Check => check(),
    }
}

/// Flags override config-file values; the config file covers the rest.
fn credentials_from(api_key: Option<String>, base_url: Option<String>) -> Credentials {
    let file_config = config::CliConfig::load();
    let mut credentials = Credentials::new();
    if let Some(api_key) = api_key.or(file_config.api_key) {
        credentials = credentials.with_api_key(api_key);
    }
    if let Some(base_url) = base_url.or(file_config.base_url) {
        credentials = credentials.with_base_url(base_url);
    }
    credentials
}

fn convert(
    file: &Path,
    converter: Option<&str>,
    api_key: Option<String>,
    base_url: Option<String>,
    output: Option<PathBuf>,
) -> Result<()> {
    let credentials = credentials_from(api_key, base_url);
    let directory = directory();

    let instance = match converter {
        Some(name) => {
            let kind = ConverterKind::from_str(name).map_err(|e| anyhow::anyhow!(e))?;
            directory.get(kind, &credentials)?
        }
        None => directory.best_for_file(file, &credentials)?,
    };

    let conversion = instance
        .convert_file(file)
        .with_context(|| format!("converting {}", file.display()))?;
    log::info!(
        "{} converted {} in {:.2?}",
        conversion.converter,
        file.display(),
        conversion.elapsed
    );

    match output {
        Some(path) => std::fs::write(&path, conversion.markdown)
            .with_context(|| format!("writing {}", path.display()))?,
        None => print!("{}", conversion.markdown),
    }
    Ok(())
}

fn list(json: bool) -> Result<()> {
    let directory = directory();

    if json {
        let payload = serde_json::json!({
            "available": directory.all_converter_info(),
            "unavailable": directory.unavailable(),
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    println!("{}", "Available converters:".bold());
    for info in directory.all_converter_info() {
        println!("  {} {:<14} {}", "✓".green(), info.id.green(), info.description);
    }

    let unavailable = directory.unavailable();
    if !unavailable.is_empty() {
        println!();
        println!("{}", "Unavailable converters:".bold());
        for (kind, reason) in &unavailable {
            println!("  {} {:<14} {}", "✗".red(), kind.to_string().red(), reason);
        }
    }
    Ok(())
}

fn check() -> Result<()> {
    let directory = directory();

    for info in directory.all_converter_info() {
        println!("{:>8}  {}", "ok".green(), info.id);
    }
    for (kind, reason) in directory.unavailable() {
        println!("{:>8}  {kind} ({reason})", "missing".red());
    }

    let available = directory.available_kinds();
    if available.is_empty() {
        anyhow::bail!("no converters available");
    }
    println!(
        "\n{} of {} converters available",
        available.len(),
        ConverterKind::DECLARED.len()
    );
    Ok(())
}

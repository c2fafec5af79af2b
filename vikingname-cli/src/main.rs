//! Vikingname CLI - Command-line interface
//!
//! Commands:
//! - generate: Allocate unique viking names
//! - init: Create word-list files with defaults
//! - self-test: Replay the duplicate-name scenario
//! - title: Draw a random title

mod generate;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use vikingname_core::{FileWordLists, NameAllocator, NamingConfig};

#[derive(Parser)]
#[command(name = "vikingname")]
#[command(about = "Unique name generator for procedurally created vikings")]
struct Cli {
    /// JSON config file
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Directory holding MaleNames.txt, FemaleNames.txt and Titles.txt
    #[arg(long, global = true, value_name = "DIR")]
    dir: Option<PathBuf>,

    /// Random seed for reproducible names
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Maximum candidates checked per name
    #[arg(long, global = true)]
    max_attempts: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Allocate unique viking names
    Generate(generate::GenerateArgs),
    /// Create missing word-list files with default contents
    Init,
    /// Record John Doe twice and Jane Doe once, then clear the record
    SelfTest,
    /// Print a random title
    Title,
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays clean for --json
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = build_config(&cli)?;

    match cli.command {
        Commands::Generate(args) => generate::run(args, config),
        Commands::Init => run_init(&config),
        Commands::SelfTest => run_self_test(config),
        Commands::Title => run_title(config),
    }
}

/// Merge the config file (if any) with command-line overrides
fn build_config(cli: &Cli) -> Result<NamingConfig> {
    let mut config = match &cli.config {
        Some(path) => NamingConfig::load(path)?,
        None => NamingConfig::default(),
    };
    if let Some(dir) = &cli.dir {
        config.word_list_dir = dir.clone();
    }
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    if let Some(max_attempts) = cli.max_attempts {
        config.max_attempts = max_attempts;
    }
    Ok(config)
}

fn run_init(config: &NamingConfig) -> Result<()> {
    let lists = FileWordLists::new(&config.word_list_dir);
    let created = lists
        .verify()
        .with_context(|| format!("Failed to prepare {}", config.word_list_dir.display()))?;

    if created.is_empty() {
        println!("Word lists already present in {}", lists.dir().display());
    }
    for path in created {
        println!("Created {}", path.display());
    }
    Ok(())
}

fn run_self_test(config: NamingConfig) -> Result<()> {
    let mut allocator = NameAllocator::from_config(config)?;
    let report = allocator.self_test();

    println!("=== Duplicate Name Self-Test ===");
    for (i, outcome) in report.outcomes.iter().enumerate() {
        match &outcome.recorded {
            Ok(name) => println!("{}. {} -> {}", i + 1, outcome.requested, name),
            Err(e) => println!("{}. {} -> failed: {}", i + 1, outcome.requested, e),
        }
    }
    println!("Session names kept: {}", allocator.record().len());
    Ok(())
}

fn run_title(config: NamingConfig) -> Result<()> {
    let mut allocator = NameAllocator::from_config(config)?;
    let title = allocator.choose_title()?;
    allocator.assign_title(&title);
    println!("{}", title);
    Ok(())
}

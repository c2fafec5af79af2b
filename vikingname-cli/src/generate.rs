//! Generate command - allocate a batch of unique names
//!
//! ## Architecture
//!
//! - run() - orchestration
//! - allocate_names() - the allocation loop
//! - print_json_results(), print_text_results() - reporting

use anyhow::{bail, Result};
use clap::Args;
use serde::Serialize;

use vikingname_core::{
    CollisionPolicy, FullName, NameAllocator, NamingConfig, NamingError, SurnameStyle,
};

#[derive(Args)]
pub struct GenerateArgs {
    /// Number of names to allocate
    #[arg(long, short = 'n', default_value = "10")]
    pub count: usize,

    /// Draw from the female name pool
    #[arg(long)]
    pub female: bool,

    /// Name children (surname goes through the surname strategy)
    #[arg(long)]
    pub child: bool,

    /// Use patronymic child surnames (-son / -dottir)
    #[arg(long)]
    pub patronymic: bool,

    /// Redraw whenever a first name was already used
    #[arg(long)]
    pub reject_collisions: bool,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Names produced before the run stopped
#[derive(Debug, Serialize)]
pub struct GenerateResults {
    pub requested: usize,
    pub names: Vec<FullName>,
    pub exhausted: bool,
}

/// Run generate command
pub fn run(args: GenerateArgs, config: NamingConfig) -> Result<()> {
    let config = apply_args(&args, config);

    tracing::info!(
        "Generating {} names (male={}, child={}, max_attempts={})",
        args.count,
        !args.female,
        args.child,
        config.attempt_budget()
    );

    let mut allocator = NameAllocator::from_config(config)?;
    let results = allocate_names(&mut allocator, &args)?;

    if args.json {
        print_json_results(&results)?;
    } else {
        print_text_results(&results);
    }

    if results.exhausted {
        bail!(
            "Name space exhausted after {} of {} names",
            results.names.len(),
            results.requested
        );
    }
    Ok(())
}

/// Fold the command's naming flags into the config
pub fn apply_args(args: &GenerateArgs, mut config: NamingConfig) -> NamingConfig {
    if args.patronymic {
        config.surname_style = SurnameStyle::Patronymic;
    }
    if args.reject_collisions {
        config.collision_policy = CollisionPolicy::RejectAndRetry;
    }
    config
}

/// Allocate until `count` names are issued or the name space runs out
pub fn allocate_names(allocator: &mut NameAllocator, args: &GenerateArgs) -> Result<GenerateResults> {
    let mut names = Vec::with_capacity(args.count);
    let mut exhausted = false;

    for _ in 0..args.count {
        match allocator.full_name(!args.female, args.child) {
            Ok(name) => names.push(name),
            Err(e @ NamingError::NameSpaceExhausted { .. }) => {
                tracing::warn!("{}", e);
                exhausted = true;
                break;
            }
            Err(e) => return Err(e.into()),
        }
    }

    Ok(GenerateResults {
        requested: args.count,
        names,
        exhausted,
    })
}

fn print_json_results(results: &GenerateResults) -> Result<()> {
    let json = serde_json::to_string_pretty(results)?;
    println!("{}", json);
    Ok(())
}

fn print_text_results(results: &GenerateResults) {
    for name in &results.names {
        println!("{}", name);
    }
    if results.exhausted {
        println!(
            "-- stopped after {} of {} names: no unique names left --",
            results.names.len(),
            results.requested
        );
    }
}

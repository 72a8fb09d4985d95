// Iterator and Mediator walkthrough
// Replays the reference scenarios of both patterns, optionally driven by a TOML file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use behavioral_patterns::config::DemoConfig;
use behavioral_patterns::iterator::{SequenceIterator, Strategy};
use behavioral_patterns::mediator::{Component1, Component2, ConcreteMediator, Journal};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "patterns-demo", about = "Walk through the Iterator and Mediator patterns")]
struct Cli {
    /// TOML file overriding items, strategy, reactions and script.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Traverse the configured words with one or every strategy.
    Iterate {
        /// Overrides the strategy from the config file.
        #[arg(long, value_enum)]
        strategy: Option<Strategy>,
    },
    /// Run the configured script of component operations.
    Mediate,
    /// Both walkthroughs (default).
    All,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => DemoConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => DemoConfig::default(),
    };

    match cli.command.unwrap_or(Commands::All) {
        Commands::Iterate { strategy } => {
            config.strategy = strategy.or(config.strategy);
            run_iterate(&config)?;
        }
        Commands::Mediate => run_mediate(&config)?,
        Commands::All => {
            run_iterate(&config)?;
            println!();
            run_mediate(&config)?;
        }
    }

    Ok(())
}

fn header(title: &str) {
    println!("{}", format!("=== {title} ===").bold().cyan());
}

fn run_iterate(config: &DemoConfig) -> Result<()> {
    header("Iterator Pattern");
    let collection = config.collection();

    for strategy in config.strategies() {
        println!("{}", format!("{strategy} traversal:").bold());
        let mut it = strategy.iterate(&collection);
        while it.valid() {
            let key = it.key();
            let item = it.next().context("iterator advanced past its bounds")?;
            println!("  [{key}] {item}");
        }

        // Reading past the end is an error, never a stale item.
        if let Err(err) = it.current() {
            println!("  {} {}", "exhausted:".dimmed(), err.to_string().dimmed());
        }
    }

    Ok(())
}

fn run_mediate(config: &DemoConfig) -> Result<()> {
    header("Mediator Pattern");
    let journal = Journal::new();
    let c1 = Component1::new(journal.clone());
    let c2 = Component2::new(journal.clone());

    let mediator = ConcreteMediator::builder(config.reactions.clone())
        .register(c1)
        .register(c2)
        .max_depth(config.max_reaction_depth)
        .build()
        .context("failed to wire components to the mediator")?;

    for &operation in &config.script {
        println!("{}", format!("Client triggers {operation}:").bold());
        let outcome = mediator.trigger(operation);
        for entry in journal.take() {
            println!("  {entry}");
        }
        if let Err(err) = outcome {
            println!("  {} {err}", "failed:".red().bold());
        }
    }

    Ok(())
}

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use gof_patterns::config::DEFAULT_CONFIG_PATH;
use gof_patterns::output;
use gof_patterns::{Catalog, Category, Config};

#[derive(Parser, Debug)]
#[command(name = "gof-patterns", version, about = "Run Gang-of-Four design pattern demos")]
struct Cli {
    /// Config file (TOML)
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// More logging on stderr (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the available patterns
    List {
        /// Only show one category (creational, structural, behavioral)
        #[arg(long)]
        category: Option<Category>,

        /// Print the catalog as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show a pattern's intent and participants
    Describe { name: String },
    /// Run one or more pattern demos
    Run {
        /// Pattern names, e.g. `observer` or "chain of responsibility"
        #[arg(required_unless_present = "all")]
        names: Vec<String>,

        /// Run every pattern selected by the config
        #[arg(long, conflicts_with = "names")]
        all: bool,
    },
}

fn init_tracing(verbose: u8, config_level: &str, ansi: bool) {
    let level = match verbose {
        0 => config_level,
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // Transcripts go to stdout, logs to stderr.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(ansi)
        .with_target(false)
        .try_init();
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;
    let color = config.color && !cli.no_color;
    init_tracing(cli.verbose, &config.log_level, color);
    if !color {
        colored::control::set_override(false);
    }

    // The subscriber only starts once the config is loaded.
    if cli.config.exists() {
        tracing::debug!(path = %cli.config.display(), ?config, "config loaded");
    } else {
        tracing::debug!(path = %cli.config.display(), "no config file, using defaults");
    }

    let catalog = Catalog::standard();
    config.validate(&catalog).context("validating config")?;
    tracing::debug!(patterns = catalog.len(), "catalog ready");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::List { category, json } => {
            if json {
                let summaries: Vec<_> = catalog
                    .summaries()
                    .into_iter()
                    .filter(|s| category.map_or(true, |c| s.category == c))
                    .collect();
                serde_json::to_writer_pretty(&mut out, &summaries)?;
                writeln!(out)?;
            } else {
                let listing = match category {
                    Some(c) => output::render_listing(catalog.by_category(c)),
                    None => output::render_listing(catalog.iter()),
                };
                writeln!(out, "{listing}")?;
            }
        }
        Command::Describe { name } => {
            let pattern = catalog.find(&name)?;
            write!(out, "{}", output::render_description(pattern))?;
        }
        Command::Run { names, all } => {
            if all {
                let ran = catalog.run_all(&mut out, |p| config.selects(p.name()))?;
                tracing::info!(ran, "finished");
            } else {
                // Resolve everything first so a typo fails before any output.
                let patterns = names
                    .iter()
                    .map(|n| catalog.find(n))
                    .collect::<Result<Vec<_>, _>>()?;
                for (i, pattern) in patterns.into_iter().enumerate() {
                    if i > 0 {
                        writeln!(out)?;
                    }
                    pattern
                        .run(&mut out)
                        .with_context(|| format!("running {}", pattern.name()))?;
                }
            }
        }
    }

    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

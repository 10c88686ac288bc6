//! wordguard CLI entry point.

use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use wordguard::{Filter, FilterConfig};

/// Find and redact dictionary words in text.
#[derive(Parser, Debug)]
#[command(name = "wordguard", version, about)]
struct Cli {
    /// Configuration file (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Dictionary file, one pattern per line
    #[arg(short, long, env = "WORDGUARD_DICT", global = true)]
    dict: Option<PathBuf>,

    /// Substitution token for `replace`
    #[arg(short, long, env = "WORDGUARD_REPLACEMENT", global = true)]
    replacement: Option<String>,

    /// Mask character for `mask`
    #[arg(short, long, global = true)]
    mask: Option<char>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every dictionary entry found, one `id<TAB>pattern` per line
    Scan(TextArgs),
    /// Print the number of matches
    Count(TextArgs),
    /// Overwrite matches with the mask character
    Mask(TextArgs),
    /// Replace matches with the substitution token
    Replace(TextArgs),
}

#[derive(Args, Debug)]
struct TextArgs {
    /// Input text; read from stdin when omitted
    text: Option<String>,
}

impl TextArgs {
    fn read(&self) -> anyhow::Result<String> {
        match &self.text {
            Some(text) => Ok(text.clone()),
            None => {
                let mut buf = String::new();
                io::stdin()
                    .read_to_string(&mut buf)
                    .context("failed to read stdin")?;
                Ok(buf)
            }
        }
    }
}

impl Cli {
    /// Loads `--config` (or defaults) and applies the command-line overrides.
    fn resolve_config(&self) -> anyhow::Result<FilterConfig> {
        let mut config = match &self.config {
            Some(path) => FilterConfig::load(path)?,
            None => FilterConfig::default(),
        };
        self.apply_overrides(&mut config);
        Ok(config)
    }

    /// Flags win over values read from the config file.
    fn apply_overrides(&self, config: &mut FilterConfig) {
        if let Some(dict) = &self.dict {
            config.dictionary = Some(dict.clone());
        }
        if let Some(replacement) = &self.replacement {
            config.replacement = replacement.clone();
        }
        if let Some(mask) = self.mask {
            config.mask = mask;
        }
    }
}

fn init_logging() {
    let filter =
        EnvFilter::try_from_env("WORDGUARD_LOG").unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    if let Err(e) = run() {
        eprintln!("wordguard: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = Filter::from_config(&cli.resolve_config()?)?;
    tracing::trace!(command = ?cli.command, "running");

    match &cli.command {
        Command::Scan(args) => {
            let text = args.read()?;
            for id in filter.find_matches(&text) {
                println!("{id}\t{}", filter.pattern(id).unwrap_or_default());
            }
        }
        Command::Count(args) => {
            println!("{}", filter.match_count(&args.read()?));
        }
        Command::Mask(args) => {
            let text = args.read()?;
            print_text(&filter.mask(&text));
        }
        Command::Replace(args) => {
            let text = args.read()?;
            print_text(&filter.filter_text(&text));
        }
    }
    Ok(())
}

/// Prints `text`, adding a trailing newline only if it lacks one.
fn print_text(text: &str) {
    if text.ends_with('\n') {
        print!("{text}");
    } else {
        println!("{text}");
    }
}

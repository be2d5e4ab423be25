use anyhow::{Context, Result};
use clap::Parser;
use dialoguer::Input;
use log::LevelFilter;
use solflat_flattener::{flattened_path, resolve, write_flattened, FlattenError};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "solflat")]
#[command(about = "Flatten a Solidity file and its imports into one file", long_about = None)]
#[command(version)]
struct Cli {
    /// Entry source file to flatten (prompted for when omitted)
    path: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors
    #[arg(long)]
    quiet: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    match run(cli).await {
        Ok(out) => println!("done - flattened output written to {}", out.display()),
        Err(err) => {
            report(&err);
            std::process::exit(1);
        }
    }
}

fn init_logging(cli: &Cli) {
    let level = if cli.quiet {
        LevelFilter::Warn
    } else if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}

async fn run(cli: Cli) -> Result<PathBuf> {
    let entry = match cli.path {
        Some(path) => path,
        None => prompt_for_path()?,
    };

    let flattened = resolve(&entry).await?;
    let out = flattened_path(&entry);
    write_flattened(&out, &flattened).await?;
    Ok(out)
}

fn prompt_for_path() -> Result<PathBuf> {
    let answer: String = Input::new()
        .with_prompt("Enter path to flatten")
        .interact_text()
        .context("failed to read entry path from prompt")?;
    Ok(PathBuf::from(answer))
}

/// A missing file gets a friendly one-liner; anything else is dumped raw.
fn report(err: &anyhow::Error) {
    match err.downcast_ref::<FlattenError>() {
        Some(flatten_err @ FlattenError::FileNotFound { .. }) => eprintln!("{flatten_err}"),
        _ => eprintln!("{err:?}"),
    }
}

use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::Level;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use lagrange_reconstruct::input::{load_shares, render};
use lagrange_reconstruct::ShareSet;

#[derive(Parser, Debug)]
#[command(author, version, about = "Recover the constant term of a polynomial from threshold shares", long_about = None)]
struct Args {
    /// JSON share document, or `-` to read stdin
    input: PathBuf,

    #[arg(long = "log-level", default_value = "warn", help = "Used when RUST_LOG is unset")]
    log_level: Level,

    #[arg(long, help = "Print the result on a single line")]
    compact: bool,
}

// Logs go to stderr; stdout carries only the result record.
fn setup_tracing(fallback: Level) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::default().add_directive(LevelFilter::from_level(fallback).into())
    });
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn read_shares(input: &Path) -> Result<ShareSet> {
    if input.as_os_str() == "-" {
        return load_shares(io::stdin().lock()).context("failed to read shares from stdin");
    }
    let file = File::open(input).with_context(|| format!("could not open {}", input.display()))?;
    load_shares(BufReader::new(file)).with_context(|| format!("failed to load {}", input.display()))
}

fn main() -> Result<()> {
    let args = Args::parse();
    setup_tracing(args.log_level);

    let shares = read_shares(&args.input)?;
    let constant = shares.reconstruct().context("reconstruction failed")?;
    println!("{}", render(&constant, args.compact)?);
    Ok(())
}

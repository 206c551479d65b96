//! cursorflow: reads cursor positions from stdin, writes render instructions
//! to stdout.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use cursorflow::{EffectConfig, EffectEngine, FrameLoop};
use std::io;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::prelude::*;

/// Command-line arguments for cursorflow
#[derive(Parser, Debug)]
#[command(name = "cursorflow")]
#[command(version, about = "Cursor-following effect engine over a JSON line protocol", long_about = None)]
struct Args {
    /// Effect configuration file (.json or .toml)
    #[arg(env = "CURSORFLOW_CONFIG")]
    config: PathBuf,

    /// Seed the random source for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Verbose logging (can be specified multiple times)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Pretty)]
    log_format: LogFormat,

    /// Validate the configuration and exit without reading input
    #[arg(long)]
    check: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    Pretty,
    Compact,
    Json,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args);

    let config = EffectConfig::load(&args.config)
        .with_context(|| format!("failed to load effect config from {}", args.config.display()))?;

    let mut builder = EffectEngine::builder(config);
    if let Some(seed) = args.seed {
        builder = builder.with_seed(seed);
    }
    let engine = builder.build().context("invalid effect configuration")?;

    if args.check {
        let config = engine.config();
        eprintln!(
            "{}: ok ({}, enabled={}, max_length={}, opacity={})",
            args.config.display(),
            config.kind(),
            config.enabled,
            config.max_length,
            config.opacity
        );
        return Ok(());
    }

    info!(version = env!("CARGO_PKG_VERSION"), config = %args.config.display(), "cursorflow starting");

    // stdout carries the protocol; logs go to stderr.
    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    FrameLoop::new(stdin, stdout, engine)
        .run()
        .context("frame loop failed")?;

    Ok(())
}

fn init_logging(args: &Args) {
    let log_level = match args.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(format!("cursorflow={log_level},warn")));

    let registry = tracing_subscriber::registry().with(env_filter);
    match args.log_format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(io::stderr))
            .init(),
        LogFormat::Compact => registry
            .with(tracing_subscriber::fmt::layer().compact().with_writer(io::stderr))
            .init(),
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().pretty().with_writer(io::stderr))
            .init(),
    }
}

//! appmix: set the playback volume of a running program by executable name.

use anyhow::Context;
use clap::Parser;

mod cli;
mod output;
mod platform;

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse_from(cli::normalize_args(std::env::args_os()));
    init_tracing(args.verbose);

    let (command, process) = args.command.into_parts();
    tracing::debug!("{} {process:?}", command.as_str());

    let outcome = platform::run(command, &process)
        .with_context(|| format!("{} {process} failed", command.as_str()))?;
    let rendered = output::render(&process, &outcome, args.json)?;
    println!("{rendered}");
    Ok(())
}

/// Logs go to stderr; stdout carries only the result.
fn init_tracing(verbose: u8) {
    let filter = std::env::var("APPMIX_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| default_filter(verbose).to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();
}

fn default_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

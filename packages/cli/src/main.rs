mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{content, flow, init, layout, ContentArgs, FlowArgs, InitArgs, LayoutArgs};
use config::Config;
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Tesseract CLI - replay and inspect page-builder sessions
#[derive(Parser, Debug)]
#[command(name = "tesseract")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log at debug level (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a default tesseract.config.json
    Init(InitArgs),

    /// Replay canvas drag-and-drop actions and print the resulting layout
    Layout(LayoutArgs),

    /// Replay page-flow edits and print the intents they emit
    Flow(FlowArgs),

    /// Inspect a rich-text content document
    Content(ContentArgs),
}

fn init_tracing(verbose: bool, config: &Config) {
    let fallback = if verbose { "debug" } else { config.log_level.as_str() };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// init has to work even when the existing config is unreadable
fn config_for(command: &Command, cwd: &Path) -> anyhow::Result<Config> {
    match command {
        Command::Init(_) => Ok(Config::default()),
        _ => Config::load(cwd),
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;

    let config = config_for(&cli.command, &cwd)?;
    init_tracing(cli.verbose, &config);

    match cli.command {
        Command::Init(args) => init(args, &cwd),
        Command::Layout(args) => layout(args, &cwd),
        Command::Flow(args) => flow(args, &cwd),
        Command::Content(args) => content(args, &cwd),
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_recovers_from_bad_config() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(Config::path_in(dir.path()), r#"{ "resolution": "sideways" }"#).unwrap();

        let cli = Cli::parse_from(["tesseract", "init", "--force"]);
        assert_eq!(config_for(&cli.command, dir.path()).unwrap(), Config::default());
        init(
            match cli.command {
                Command::Init(args) => args,
                other => panic!("Expected init, got {:?}", other),
            },
            dir.path(),
        )
        .unwrap();
        assert!(Config::load(dir.path()).is_ok());

        let cli = Cli::parse_from(["tesseract", "layout", "script.json"]);
        assert!(config_for(&cli.command, dir.path()).is_ok());
    }

    #[test]
    fn test_other_commands_reject_bad_config() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(Config::path_in(dir.path()), "{ not json").unwrap();

        let cli = Cli::parse_from(["tesseract", "layout", "script.json"]);
        assert!(config_for(&cli.command, dir.path()).is_err());
    }
}

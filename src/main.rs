use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use connect_four::config::AppConfig;
use connect_four::game::GameState;
use connect_four::session::Session;

const DEFAULT_CONFIG_PATH: &str = "connect-four.toml";

/// Play Connect Four against another person at the same terminal.
#[derive(Parser)]
#[command(name = "connect-four", about = "Two-player Connect Four")]
struct Cli {
    /// Path to TOML configuration file [default: connect-four.toml if present]
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override board width
    #[arg(long)]
    width: Option<usize>,

    /// Override board height
    #[arg(long)]
    height: Option<usize>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_default_config: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.print_default_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    // Overrides go in before the single validation step, so a file value
    // replaced on the command line never has to be valid on its own.
    let mut app_config = match &cli.config {
        Some(path) => AppConfig::read_or_default(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => {
            let path = Path::new(DEFAULT_CONFIG_PATH);
            if path.exists() {
                AppConfig::read(path)
                    .with_context(|| format!("loading config from {}", path.display()))?
            } else {
                AppConfig::default()
            }
        }
    };
    app_config.apply_overrides(cli.width, cli.height);
    app_config.validate().context("invalid board size")?;

    let state = GameState::with_size(app_config.board.width, app_config.board.height)
        .context("creating board")?;

    let stdin = io::stdin();
    let mut session = Session::new(state, stdin.lock(), io::stdout());
    session.run().context("playing game")?;
    Ok(())
}

/// Log to stderr so prompts and the board on stdout stay clean.
/// `RUST_LOG` wins over `-v` when set.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

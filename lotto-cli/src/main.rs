mod commands;
mod config;

use clap::{Parser, Subcommand};
use commands::Output;
use lotto_core::{LottoError, SeededLotto};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "lotto")]
#[command(about = "Lotto simulator: buy tickets and check them against a draw")]
#[command(version)]
struct Cli {
    /// JSON config file with ticket and prize settings
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Seed for reproducible tickets and draws
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Print reports as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Render prize statistics as a table
    #[arg(long, global = true)]
    table: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Without a subcommand, buys 3000 won of tickets and checks [1, 2, 3, 4, 5, 6]
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Buy tickets and list them
    Buy {
        /// Amount of money in won
        money: u64,
    },
    /// Check your numbers against a fresh draw
    Lucky {
        /// Your numbers
        #[arg(required = true, num_args = 1..)]
        numbers: Vec<u32>,
    },
    /// Buy tickets, draw once and show winning statistics
    Play {
        /// Amount of money in won
        money: u64,
    },
    /// Print the effective configuration
    Config,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging; reports go to stdout, logs to stderr
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(format!(
            "lotto={},lotto_core={}",
            log_level, log_level
        )))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let out = Output {
        json: cli.json,
        table: cli.table,
    };

    let result = run(cli, out);

    if let Err(e) = result {
        match e.downcast_ref::<LottoError>() {
            Some(LottoError::Config(msg)) => {
                eprintln!("Error: Invalid configuration: {}", msg);
                eprintln!("Use 'lotto config' to see the effective configuration");
            }
            Some(LottoError::InvalidTicketLength { expected, got }) => {
                eprintln!("Error: Expected {} numbers, got {}", expected, got);
            }
            Some(LottoError::TooManyTickets { requested, max }) => {
                eprintln!("Error: {} tickets requested", requested);
                eprintln!("A single purchase is limited to {} tickets", max);
            }
            _ => {
                eprintln!("Error: {}", e);
            }
        }
        std::process::exit(1);
    }

    Ok(())
}

fn run(cli: Cli, out: Output) -> anyhow::Result<()> {
    let game_config = config::load_config(cli.config.as_deref())?;

    if let Some(Commands::Config) = cli.command {
        return commands::show_config(&game_config);
    }

    let mut lotto = match cli.seed {
        Some(seed) => SeededLotto::from_seed(game_config, seed)?,
        None => SeededLotto::from_entropy(game_config)?,
    };

    match cli.command {
        None => commands::run_default(&mut lotto, out),
        Some(Commands::Buy { money }) => commands::buy(&mut lotto, out, money),
        Some(Commands::Lucky { numbers }) => commands::lucky(&mut lotto, out, numbers),
        Some(Commands::Play { money }) => commands::play(&mut lotto, out, money),
        Some(Commands::Config) => Ok(()),
    }
}

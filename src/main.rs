//! Pico Paradox - CLI
//!
//! Birthday paradox simulator and hex code-guessing game, in text or TUI mode.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use pico_paradox::{
    commands::{BirthdayOptions, run_birthday, run_pico},
    config::{DEFAULT_DIGITS, DEFAULT_MAX_GUESSES, DEFAULT_TRIALS, GameConfig, make_rng},
};
use std::io;
use tracing::{Level, debug};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(
    name = "pico_paradox",
    about = "Birthday paradox simulator and Pico/Right/Bagels hex code-guessing game",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Seed the random source for a reproducible run
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Verbose (debug) logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI game (default)
    Play(GameArgs),

    /// Text-mode game
    Pico(GameArgs),

    /// Birthday paradox simulation
    Birthday {
        /// Number of birthdays per group, 1-100 (prompted for if omitted)
        #[arg(short, long)]
        people: Option<usize>,

        /// Number of simulated groups
        #[arg(short, long, default_value_t = DEFAULT_TRIALS)]
        trials: usize,

        /// Start the simulation without waiting for Enter
        #[arg(long)]
        no_pause: bool,
    },
}

#[derive(Args, Clone, Copy)]
struct GameArgs {
    /// Number of hex digits in the secret (1-10)
    #[arg(default_value_t = DEFAULT_DIGITS)]
    digits: usize,

    /// Maximum number of guesses per round (1-100)
    #[arg(default_value_t = DEFAULT_MAX_GUESSES)]
    max_guesses: usize,
}

impl GameArgs {
    fn config(self) -> Result<GameConfig> {
        Ok(GameConfig::new(self.digits, self.max_guesses)?)
    }
}

impl Default for GameArgs {
    fn default() -> Self {
        Self {
            digits: DEFAULT_DIGITS,
            max_guesses: DEFAULT_MAX_GUESSES,
        }
    }
}

fn setup_logging(verbose: bool) -> Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose)?;

    let mut rng = make_rng(cli.seed);
    debug!(seed = ?cli.seed, "random source ready");

    // Default to Play mode if no command given
    let command = cli
        .command
        .unwrap_or_else(|| Commands::Play(GameArgs::default()));

    match command {
        Commands::Play(args) => run_play_command(args, rng),
        Commands::Pico(args) => {
            let config = args.config()?;
            run_pico(&config, &mut io::stdin().lock(), &mut rng)?;
            Ok(())
        }
        Commands::Birthday {
            people,
            trials,
            no_pause,
        } => {
            let options = BirthdayOptions {
                people,
                trials,
                pause: !no_pause,
            };
            run_birthday(&options, &mut io::stdin().lock(), &mut rng)?;
            Ok(())
        }
    }
}

fn run_play_command(args: GameArgs, rng: rand::rngs::StdRng) -> Result<()> {
    use pico_paradox::interactive::{App, run_tui};

    let app = App::new(args.config()?, rng)?;
    run_tui(app)
}

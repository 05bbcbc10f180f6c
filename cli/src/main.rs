use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use unscramble_core::{Difficulty, GameConfig, GameSession, SeededRandom, StatsAggregator, SystemClock};

use crate::store::JsonFileStore;

mod play;
mod store;
mod summary;

#[derive(Parser, Debug)]
#[command(version, about = "Put scrambled words back in order", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,

    /// Where statistics are kept, defaults to the OS data directory
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// TOML file overriding game settings
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play rounds in the terminal
    Play {
        /// easy (3-5 letters), medium (6-8) or hard (9+)
        #[arg(short, long, default_value_t = Difficulty::Medium)]
        difficulty: Difficulty,

        /// Word for the first round, asked for when missing
        #[arg(short, long)]
        word: Option<String>,

        /// Force a seed instead of random
        #[arg(short, long)]
        seed: Option<u64>,
    },
    /// Show statistics and recent rounds
    Stats,
    /// Erase all statistics
    ResetStats,
}

fn load_config(path: Option<&Path>) -> anyhow::Result<GameConfig> {
    let Some(path) = path else {
        return Ok(GameConfig::default());
    };
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Could not read config file {}", path.display()))?;
    toml::from_str(&contents).with_context(|| format!("Invalid config file {}", path.display()))
}

fn open_store(data_dir: Option<&Path>) -> anyhow::Result<JsonFileStore> {
    let store = match data_dir {
        Some(dir) => JsonFileStore::new(dir),
        None => JsonFileStore::in_data_dir()?,
    };
    log::debug!("Statistics file: {}", store.path().display());
    Ok(store)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let config = load_config(args.config.as_deref())?;
    let store = open_store(args.data_dir.as_deref())?;

    match args.command {
        Command::Play {
            difficulty,
            word,
            seed,
        } => {
            let seed = seed.unwrap_or_else(rand::random);
            log::debug!("seed: {}", seed);

            let mut session =
                GameSession::new(config, store, SystemClock::new(), SeededRandom::new(seed));
            play::run(&mut session, difficulty, word, io::stdin().lock(), io::stdout().lock())?;
            if session.stats().is_dirty() {
                log::warn!("Latest statistics could not be saved");
            }
        }
        Command::Stats => {
            let aggregator = StatsAggregator::load(store, config.history_limit);
            summary::write_summary(aggregator.statistics(), io::stdout().lock())?;
        }
        Command::ResetStats => {
            let mut aggregator = StatsAggregator::load(store, config.history_limit);
            aggregator.reset_all();
            anyhow::ensure!(!aggregator.is_dirty(), "Could not erase statistics");
            println!("Statistics erased");
        }
    }

    Ok(())
}

//! mnemon CLI — memory-training games on the command line.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use crossterm::style::Stylize;

mod commands;
mod config;

#[derive(Parser)]
#[command(
    name = "mnemon",
    version,
    about = "Memory-training games: major system, PAO, cards, recall"
)]
struct Cli {
    /// Config file path (default: ./mnemon.toml, then ~/.config/mnemon/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a guessing game of what is missing
    Missing {
        /// Use books of the Bible for quizzing
        #[arg(long)]
        bible: bool,

        /// Speak the choices out loud
        #[arg(long)]
        say: bool,

        /// Include an explanation of the game
        #[arg(long)]
        explain: bool,

        /// Options to quiz over
        choices: Vec<String>,
    },

    /// Show a random card
    Card,

    /// Test your Person-Action-Object (PAO) system
    Pao {
        /// Quiz how well you know your system
        #[arg(long)]
        quiz: bool,

        /// Include an explanation of the system
        #[arg(long)]
        explain: bool,

        /// Alternate location of your PAO system
        #[arg(long, value_name = "FILE", default_value = "~/.artofmemory.conf")]
        config_file: String,
    },

    /// Print possible words matching the given number(s)
    Words {
        /// Quiz how well you know your words
        #[arg(long)]
        quiz: bool,

        /// Include an explanation of the system
        #[arg(long)]
        explain: bool,

        /// Filter words to nouns only
        #[arg(long)]
        nouns: bool,

        /// Numbers to look up
        numbers: Vec<String>,
    },

    /// Show a large summary of words, defaulting to 00 -> 99
    WordsSummary {
        /// Make the output org-mode friendly
        #[arg(long)]
        org_mode: bool,

        /// Filter words to nouns only
        #[arg(long)]
        nouns: bool,

        /// Minimum number
        #[arg(long, value_name = "INT", default_value_t = 0)]
        min: u32,

        /// Maximum number
        #[arg(long, value_name = "INT", default_value_t = 100)]
        max: u32,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("mnemon=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let app_config = match config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", format!("Error: {e:#}").red());
            process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Missing {
            bible,
            say,
            explain,
            choices,
        } => commands::missing::execute(&app_config, choices, bible, say, explain),
        Commands::Card => commands::card::execute(),
        Commands::Pao {
            quiz,
            explain,
            config_file,
        } => commands::pao::execute(&config_file, explain, quiz),
        Commands::Words {
            quiz,
            explain,
            nouns,
            numbers,
        } => commands::words::execute(numbers, nouns, explain, quiz),
        Commands::WordsSummary {
            org_mode,
            nouns,
            min,
            max,
        } => commands::words_summary::execute(&app_config, min, max, nouns, org_mode),
    };

    if let Err(e) = result {
        eprintln!("{}", format!("Error: {e:#}").red());
        process::exit(1);
    }
}

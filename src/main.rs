//! Wordle Solver - CLI
//!
//! Finds the best opening word, solves for a known secret, or assists an
//! interactive game, choosing every guess by expected information gain.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::LevelFilter;
use std::io;
use std::path::PathBuf;
use wordle_infogain::{
    commands::{SolveConfig, find_start_word, run_interactive, solve_for},
    output::{print_init_result, print_solve_result},
    solver::{Session, SolverConfig},
    wordlists::loader::load_dictionary,
};

#[derive(Parser)]
#[command(
    name = "wordle_infogain",
    about = "Wordle solver that maximises expected information gain",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Word list of possible answers, one per line
    #[arg(short, long, global = true)]
    answers: Option<PathBuf>,

    /// Extra legal guesses, one per line (answers are always guessable)
    #[arg(short, long, global = true)]
    guesses: Option<PathBuf>,

    /// Opening guess; computed from the dictionary when omitted
    #[arg(short, long, global = true)]
    start: Option<String>,

    /// Worker threads for guess scoring (default: all CPUs)
    #[arg(short = 'j', long, global = true)]
    threads: Option<usize>,

    /// Log every best-guess update
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the optimal starting word
    Init,

    /// Solve for a known secret word
    SolveFor {
        /// The secret word to find
        secret: String,
    },

    /// Suggest guesses and read feedback from stdin
    Interactive,
}

fn init_logging(cli: &Cli) {
    let level = if cli.verbose {
        LevelFilter::Debug
    } else if cli.quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level.as_str()))
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    let answers = cli
        .answers
        .as_deref()
        .context("an answer list is required: pass --answers <PATH>")?;
    let dictionary = load_dictionary(cli.guesses.as_deref(), answers)?;
    let config = SolverConfig {
        threads: cli.threads,
    };
    let mut session = Session::new(dictionary, &config)?;

    match cli.command {
        Commands::Init => {
            let result = find_start_word(&session, !cli.quiet)?;
            print_init_result(&result);
        }
        Commands::SolveFor { secret } => {
            let config = SolveConfig::new(secret).with_start(cli.start);
            let result = solve_for(&config, &mut session).context("solve-for failed")?;
            print_solve_result(&result, cli.verbose);
        }
        Commands::Interactive => {
            let stdin = io::stdin();
            let mut input = stdin.lock();
            let mut output = io::stdout();
            let result = run_interactive(
                &mut session,
                cli.start.as_deref(),
                &mut input,
                &mut output,
            )?;
            print_solve_result(&result, cli.verbose);
        }
    }

    Ok(())
}

//! # Word Search Main Entry Point
//!
//! Generates puzzles and runs the verification harness from the command line.

use clap::Parser;
use log::{error, info};
use std::path::PathBuf;
use std::process::ExitCode;
use wordsearch::{
    config, generation::utils, GenerationConfig, TrialRunner, Vocabulary, WordSearchGenerator,
    WordSearchResult,
};

/// Command line arguments for the word search generator.
#[derive(Parser, Debug)]
#[command(name = "wordsearch")]
#[command(about = "Generate word search grids and verify every word can be found")]
#[command(version)]
struct Args {
    /// Random seed for the first trial
    #[arg(short, long)]
    seed: Option<u64>,

    /// Grid rows
    #[arg(short, long)]
    rows: Option<usize>,

    /// Grid columns
    #[arg(short, long)]
    cols: Option<usize>,

    /// Number of generations to verify
    #[arg(short, long, default_value_t = config::DEFAULT_TRIALS)]
    trials: usize,

    /// Comma-separated vocabulary (defaults to the built-in list)
    #[arg(short, long, value_delimiter = ',')]
    words: Option<Vec<String>>,

    /// Comma-separated words that must be placed diagonally
    #[arg(short, long, value_delimiter = ',')]
    diagonal: Option<Vec<String>>,

    /// JSON file with generation settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the grid generated for the first trial
    #[arg(long)]
    print: bool,

    /// Emit the report as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Coverage rate below which the run fails
    #[arg(long, default_value_t = config::REGRESSION_THRESHOLD)]
    threshold: f64,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> WordSearchResult<ExitCode> {
    let args = Args::parse();

    initialize_logging(&args.log_level);

    info!("Starting wordsearch v{}", wordsearch::VERSION);

    let generation_config = load_config(&args)?;
    let vocabulary = load_vocabulary(&args)?;

    if args.print {
        let generator = WordSearchGenerator::new(vocabulary.clone());
        let mut rng = utils::create_rng(&generation_config);
        let puzzle = generator.build(&generation_config, &mut rng)?;
        println!("{}\n", puzzle.grid);
        for word in &puzzle.unplaced {
            println!("Unplaced: {} ({:?})", word.word, word.reason);
        }
    }

    let runner = TrialRunner::new(vocabulary, generation_config, args.trials);
    let report = runner.run()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report);
    }

    if report.is_regression(args.threshold) {
        error!(
            "Regression: coverage {:.1}%, diagonal success {:.1}%",
            report.coverage_rate() * 100.0,
            report.diagonal_rate() * 100.0
        );
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}

/// Initializes the logging system based on the specified log level.
fn initialize_logging(log_level: &str) {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .format_target(false)
        .init();
}

/// Reads the optional config file and applies command line overrides.
fn load_config(args: &Args) -> WordSearchResult<GenerationConfig> {
    let mut generation_config = match &args.config {
        Some(path) => {
            info!("Loading generation config from {}", path.display());
            GenerationConfig::from_json_file(path)?
        }
        None => GenerationConfig::default(),
    };

    if let Some(seed) = args.seed {
        generation_config.seed = seed;
    }
    if let Some(rows) = args.rows {
        generation_config.rows = rows;
    }
    if let Some(cols) = args.cols {
        generation_config.cols = cols;
    }

    generation_config.validate()?;
    Ok(generation_config)
}

/// Builds the vocabulary; the built-in diagonal words only apply to the built-in list.
fn load_vocabulary(args: &Args) -> WordSearchResult<Vocabulary> {
    let diagonal = args.diagonal.clone().unwrap_or_default();
    match &args.words {
        Some(words) => Vocabulary::new(words.as_slice(), diagonal.as_slice()),
        None if args.diagonal.is_some() => {
            Vocabulary::new(config::DEFAULT_WORDS, diagonal.as_slice())
        }
        None => Ok(Vocabulary::default()),
    }
}

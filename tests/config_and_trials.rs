//! Integration tests for config loading and the trial harness.

use std::io::Write;
use tempfile::NamedTempFile;
use wordsearch::{
    config, GenerationConfig, TrialRunner, Vocabulary, WordSearchError, WordSearchResult,
};

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file
}

#[test]
fn test_load_config_from_json() -> WordSearchResult<()> {
    let file = write_config(r#"{"seed": 99, "rows": 15, "cols": 14, "max_random_attempts": 50}"#);
    let loaded = GenerationConfig::from_json_file(file.path())?;

    assert_eq!(loaded.seed, 99);
    assert_eq!((loaded.rows, loaded.cols), (15, 14));
    assert_eq!(loaded.max_random_attempts, 50);
    assert_eq!(loaded.reverse_chance, 0.5);
    Ok(())
}

#[test]
fn test_load_config_errors() {
    let malformed = write_config("{ rows: ");
    assert!(matches!(
        GenerationConfig::from_json_file(malformed.path()),
        Err(WordSearchError::Serde(_))
    ));

    let zero_rows = write_config(r#"{"rows": 0}"#);
    assert!(matches!(
        GenerationConfig::from_json_file(zero_rows.path()),
        Err(WordSearchError::InvalidConfig(_))
    ));

    let dir = tempfile::tempdir().expect("create temp dir");
    assert!(matches!(
        GenerationConfig::from_json_file(dir.path().join("missing.json")),
        Err(WordSearchError::Io(_))
    ));
}

#[test]
fn test_default_vocabulary_trials_pass() -> WordSearchResult<()> {
    let runner = TrialRunner::new(Vocabulary::default(), GenerationConfig::new(0), 20);
    let report = runner.run()?;

    assert_eq!(report.total_trials, 20);
    assert_eq!(report.all_diagonals_placed, 20);
    assert!(report.missing_diagonal_trials.is_empty());
    assert!(report.diagonal_counts.iter().all(|entry| entry.count == 20));
    assert!(!report.is_regression(config::REGRESSION_THRESHOLD));
    Ok(())
}

#[test]
fn test_trial_puzzle_matches_report_seed() -> WordSearchResult<()> {
    let runner = TrialRunner::new(Vocabulary::default(), GenerationConfig::new(40), 3);
    let direct = runner.puzzle(2)?;
    let again = runner.puzzle(2)?;
    assert_eq!(direct, again);
    assert_eq!(runner.trial_config(2).seed, 42);
    Ok(())
}

#[test]
fn test_report_serializes_to_json() -> WordSearchResult<()> {
    let runner = TrialRunner::new(
        Vocabulary::new(&["SWEET", "MINE"], &["SWEET"])?,
        GenerationConfig::new(3),
        4,
    );
    let report = runner.run()?;
    let json = serde_json::to_value(&report)?;

    assert_eq!(json["total_trials"], 4);
    assert_eq!(json["diagonal_counts"][0]["word"], "SWEET");
    assert_eq!(json["word_counts"].as_array().map(Vec::len), Some(2));
    Ok(())
}

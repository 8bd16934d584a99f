//! Integration tests for the placer, checked through the locator.

use rand::{rngs::StdRng, SeedableRng};
use wordsearch::{
    contains, contains_on_diagonal, generate, read_run, Direction, GenerationConfig, Generator,
    PlacementFailure, PlacementPhase, Position, Puzzle, Vocabulary, WordSearchError,
    WordSearchGenerator, WordSearchResult,
};

fn default_puzzle(seed: u64) -> WordSearchResult<Puzzle> {
    let config = GenerationConfig::new(seed);
    let generator = WordSearchGenerator::new(Vocabulary::default());
    let mut rng = wordsearch::generation::utils::create_rng(&config);
    generator.generate(&config, &mut rng)
}

/// Every word of the default vocabulary is found in nearly every trial.
#[test]
fn test_coverage_over_many_trials() -> WordSearchResult<()> {
    let vocabulary = Vocabulary::default();
    let trials = 100;
    let mut all_found = 0;

    for seed in 0..trials {
        let puzzle = default_puzzle(seed)?;
        if vocabulary.words().iter().all(|w| contains(&puzzle.grid, w)) {
            all_found += 1;
        }
    }

    assert!(
        all_found as f64 / trials as f64 >= 0.9,
        "only {}/{} trials contained every word",
        all_found,
        trials
    );
    Ok(())
}

/// Diagonal-required words are on a diagonal in every single trial.
#[test]
fn test_diagonal_guarantee() -> WordSearchResult<()> {
    let vocabulary = Vocabulary::default();

    for seed in 0..100 {
        let puzzle = default_puzzle(seed)?;
        for word in vocabulary.diagonal_words() {
            assert!(
                contains_on_diagonal(&puzzle.grid, word),
                "seed {}: {} is not on a diagonal\n{}",
                seed,
                word,
                puzzle.grid
            );
        }
        assert!(puzzle.diagonal_violations().is_empty());
    }
    Ok(())
}

#[test]
fn test_single_diagonal_word_scenario() -> WordSearchResult<()> {
    let vocabulary = Vocabulary::new(&["CUTE"], &["CUTE"])?;
    let mut successes = 0;

    for seed in 0..100 {
        let mut rng = StdRng::seed_from_u64(seed);
        let puzzle = generate(&vocabulary, 12, 12, &mut rng)?;
        assert!(contains(&puzzle.grid, "CUTE"));
        if contains_on_diagonal(&puzzle.grid, "CUTE") {
            successes += 1;
        }
    }

    assert_eq!(successes, 100);
    Ok(())
}

#[test]
fn test_every_cell_is_an_uppercase_letter() -> WordSearchResult<()> {
    for seed in 0..20 {
        let puzzle = default_puzzle(seed)?;
        assert_eq!(puzzle.grid.rows(), 12);
        assert_eq!(puzzle.grid.cols(), 12);
        assert_eq!(puzzle.grid.iter().count(), 144);
        assert!(puzzle.grid.iter().all(|(_, letter)| letter.is_ascii_uppercase()));
    }
    Ok(())
}

/// Overlapping words agree letter-for-letter on every shared cell.
#[test]
fn test_no_silent_corruption() -> WordSearchResult<()> {
    for seed in 0..50 {
        let puzzle = default_puzzle(seed)?;

        for placement in &puzzle.placements {
            let written = read_run(
                &puzzle.grid,
                placement.anchor,
                placement.direction,
                placement.letters.len(),
            );
            assert_eq!(written.as_deref(), Some(placement.letters.as_str()));
        }

        for (pos, owners) in puzzle.owners.shared_cells() {
            let letter = puzzle.grid.get(pos);
            for &owner in owners {
                let placement = puzzle
                    .placements
                    .iter()
                    .find(|p| p.word_index == owner)
                    .expect("owner has a placement");
                let offset = placement
                    .cells()
                    .position(|cell| cell == pos)
                    .expect("owner covers cell");
                assert_eq!(placement.letters.chars().nth(offset), letter);
            }
        }
    }
    Ok(())
}

#[test]
fn test_seeded_generation_is_reproducible() -> WordSearchResult<()> {
    let first = default_puzzle(2024)?;
    let second = default_puzzle(2024)?;
    assert_eq!(first, second);

    let others: Vec<_> = (1..4).map(default_puzzle).collect::<Result<_, _>>()?;
    assert!(others.iter().any(|p| p.grid != first.grid));
    Ok(())
}

#[test]
fn test_placement_order_and_ownership() -> WordSearchResult<()> {
    let puzzle = default_puzzle(7)?;
    let order: Vec<&str> = puzzle.placements.iter().map(|p| p.word.as_str()).collect();
    assert_eq!(&order[..4], &["VALENTINE", "PRETTY", "SWEET", "CUTE"]);

    let letters: usize = puzzle.placements.iter().map(|p| p.letters.len()).sum();
    assert!(puzzle.owners.owned_count() <= letters);
    for placement in &puzzle.placements {
        for cell in placement.cells() {
            assert!(puzzle.owners.owners_at(cell).contains(&placement.word_index));
        }
        if placement.reversed {
            let reversed: String = placement.word.chars().rev().collect();
            assert_eq!(placement.letters, reversed);
        } else {
            assert_eq!(placement.letters, placement.word);
        }
    }
    Ok(())
}

#[test]
fn test_word_too_long_is_reported_not_fatal() -> WordSearchResult<()> {
    let vocabulary = Vocabulary::new(&["ABCDE", "CAT"], &[] as &[&str])?;
    let mut rng = StdRng::seed_from_u64(1);
    let puzzle = generate(&vocabulary, 3, 3, &mut rng)?;

    assert_eq!(puzzle.unplaced.len(), 1);
    assert_eq!(puzzle.unplaced[0].word, "ABCDE");
    assert_eq!(puzzle.unplaced[0].reason, PlacementFailure::GeometryInfeasible);
    assert!(contains(&puzzle.grid, "CAT"));
    assert!(!puzzle.is_complete());
    Ok(())
}

#[test]
fn test_exhausted_grid_is_reported() -> WordSearchResult<()> {
    let vocabulary = Vocabulary::new(&["ABC", "XYZ"], &[] as &[&str])?;
    let mut rng = StdRng::seed_from_u64(3);
    let puzzle = generate(&vocabulary, 1, 3, &mut rng)?;

    assert_eq!(puzzle.placements.len(), 1);
    assert_eq!(puzzle.placements[0].anchor, Position::origin());
    assert_eq!(puzzle.unplaced[0].word, "XYZ");
    assert_eq!(puzzle.unplaced[0].reason, PlacementFailure::Exhausted);
    Ok(())
}

#[test]
fn test_diagonal_word_without_diagonal_room_falls_back_to_horizontal() -> WordSearchResult<()> {
    let vocabulary = Vocabulary::new(&["ABC"], &["ABC"])?;
    let generator = WordSearchGenerator::new(vocabulary);
    let config = GenerationConfig::new(5).with_size(1, 5);
    let mut rng = StdRng::seed_from_u64(5);

    let puzzle = generator.generate(&config, &mut rng)?;
    let placement = puzzle.placement_for("abc").expect("ABC placed");
    assert_eq!(placement.direction, Direction::East);
    assert_eq!(placement.anchor, Position::origin());
    assert_eq!(placement.phase, PlacementPhase::HorizontalFallback);
    assert_eq!(puzzle.diagonal_violations().len(), 1);
    assert!(contains(&puzzle.grid, "ABC"));
    assert!(!contains_on_diagonal(&puzzle.grid, "ABC"));
    Ok(())
}

#[test]
fn test_short_wide_grid_places_every_word() -> WordSearchResult<()> {
    let vocabulary = Vocabulary::new(&["HELLO", "CAT"], &[] as &[&str])?;

    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let puzzle = generate(&vocabulary, 3, 10, &mut rng)?;
        assert!(puzzle.is_complete(), "seed {}: {:?}", seed, puzzle.unplaced);
        assert!(contains(&puzzle.grid, "HELLO"));
        assert!(contains(&puzzle.grid, "CAT"));
        let hello = puzzle.placement_for("HELLO").expect("HELLO placed");
        assert_eq!(hello.direction, Direction::East);
    }
    Ok(())
}

#[test]
fn test_puzzle_json_rejects_corrupted_cells() -> WordSearchResult<()> {
    let puzzle = default_puzzle(9)?;
    let mut json = serde_json::to_value(&puzzle)?;
    let restored: Puzzle = serde_json::from_value(json.clone())?;
    assert_eq!(restored, puzzle);

    json["grid"][0][0] = serde_json::Value::from("a");
    assert!(serde_json::from_value::<Puzzle>(json).is_err());
    Ok(())
}

#[test]
fn test_invalid_dimensions_are_rejected() {
    let mut rng = StdRng::seed_from_u64(0);
    assert!(matches!(
        generate(&Vocabulary::default(), 0, 0, &mut rng),
        Err(WordSearchError::InvalidConfig(_))
    ));
}

#[test]
fn test_independent_generations_in_parallel() {
    let handles: Vec<_> = (0..4u64)
        .map(|seed| std::thread::spawn(move || default_puzzle(seed).map(|p| p.grid)))
        .collect();

    for (seed, handle) in handles.into_iter().enumerate() {
        let grid = handle.join().expect("thread panicked").expect("generation failed");
        assert_eq!(Some(grid), default_puzzle(seed as u64).ok().map(|p| p.grid));
    }
}

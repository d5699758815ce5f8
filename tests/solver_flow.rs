//! End-to-end behaviour of the evaluate → score → prune → select cycle

use wordle_infogain::SolverError;
use wordle_infogain::commands::{SolveConfig, solve_for};
use wordle_infogain::core::{Feedback, Mark, Word};
use wordle_infogain::solver::{Session, SolverConfig, prune, score, select_best};
use wordle_infogain::wordlists::Dictionary;

fn words(texts: &[&str]) -> Vec<Word> {
    texts.iter().map(|t| Word::new(*t).unwrap()).collect()
}

const SAMPLE: &[&str] = &[
    "crane", "slate", "irate", "crate", "grate", "trace", "react", "eerie", "speed", "erase",
    "robot", "floor", "abbey", "kayak", "mamma", "tests",
];

#[test]
fn first_round_keeps_the_secret() {
    let pool = words(&["abc", "bcd", "cde"]);
    let secret = Word::new("bcd").unwrap();

    let (guess, entropy) = select_best(&pool, &pool).unwrap();
    assert!(entropy > 0.0);

    let feedback = Feedback::evaluate(guess, &secret).unwrap();
    let answers = prune(&pool, guess, &feedback).unwrap();

    assert!(answers.contains(&secret));
    for word in &answers {
        assert_eq!(&Feedback::evaluate(guess, word).unwrap(), &feedback);
    }
}

#[test]
fn pruning_matches_feedback_equality() {
    // A word survives exactly when it would have produced the same feedback
    let pool = words(SAMPLE);
    for guess in &pool {
        for secret in &pool {
            let feedback = Feedback::evaluate(guess, secret).unwrap();
            let kept = prune(&pool, guess, &feedback).unwrap();
            let expected: Vec<Word> = pool
                .iter()
                .filter(|w| Feedback::evaluate(guess, w).unwrap() == feedback)
                .cloned()
                .collect();

            assert_eq!(kept, expected, "guess {guess}, secret {secret}");
            assert!(kept.contains(secret));
        }
    }
}

#[test]
fn pruned_words_honour_every_constraint() {
    let pool = words(SAMPLE);
    let guess = Word::new("crate").unwrap();
    let feedback = Feedback::decode("?.?.x").unwrap();

    for word in prune(&pool, &guess, &feedback).unwrap() {
        for (i, (&letter, &mark)) in guess.chars().iter().zip(feedback.marks()).enumerate() {
            match mark {
                Mark::Correct => assert_eq!(word.char_at(i), letter),
                Mark::NotPresent => assert!(!word.has_letter(letter)),
                Mark::WrongPosition => {
                    assert!(word.has_letter(letter));
                    assert_ne!(word.char_at(i), letter);
                }
            }
        }
    }
}

#[test]
fn self_feedback_is_all_correct() {
    for word in words(SAMPLE) {
        assert!(Feedback::evaluate(&word, &word).unwrap().is_all_correct());
    }
}

#[test]
fn scores_stay_within_bounds() {
    let pool = words(SAMPLE);
    let ceiling = (pool.len() as f64).log2();
    for guess in &pool {
        let entropy = score(guess, &pool).unwrap();
        assert!(entropy >= 0.0);
        assert!(entropy <= ceiling + 1e-9);
    }
}

#[test]
fn selector_reports_empty_pool() {
    assert_eq!(
        select_best(&[], &words(&["abc"])),
        Err(SolverError::EmptyGuessList)
    );
}

#[test]
fn solve_for_every_sample_secret() {
    for secret in SAMPLE {
        let dictionary = Dictionary::answers_only(words(SAMPLE)).unwrap();
        let mut session = Session::new(dictionary, &SolverConfig::with_threads(2)).unwrap();

        let result = solve_for(&SolveConfig::new((*secret).to_string()), &mut session).unwrap();

        assert_eq!(result.outcome.word(), *secret);
        let mut previous = SAMPLE.len();
        for step in &result.steps {
            assert_eq!(step.narrowing.answers_before, previous);
            assert!(step.narrowing.answers_after < step.narrowing.answers_before);
            previous = step.narrowing.answers_after;
        }
    }
}

//! Property tests for feedback scoring

use proptest::prelude::*;
use rayon::prelude::*;
use wordle_game::core::{Hint, Scorer, score};

/// Letter counts for upper-cased ASCII letters
fn letter_counts(word: &str) -> [usize; 26] {
    let mut counts = [0; 26];
    for b in word.bytes() {
        counts[usize::from(b.to_ascii_uppercase() - b'A')] += 1;
    }
    counts
}

proptest! {
    #[test]
    fn word_against_itself_is_all_exact(word in "[A-Za-z]{5}") {
        let feedback = score(&word, &word).unwrap();
        prop_assert!(feedback.is_solved());
        prop_assert_eq!(feedback.count(Hint::Exact), 5);
    }

    #[test]
    fn disjoint_letters_are_all_absent(answer in "[A-Ma-m]{5}", guess in "[N-Zn-z]{5}") {
        let feedback = score(&answer, &guess).unwrap();
        prop_assert_eq!(feedback.hints(), &[Hint::Absent; 5]);
    }

    #[test]
    fn case_is_insignificant(answer in "[A-Za-z]{5}", guess in "[A-Za-z]{5}") {
        prop_assert_eq!(
            score(&answer, &guess).unwrap(),
            score(&answer.to_uppercase(), &guess.to_lowercase()).unwrap()
        );
    }

    #[test]
    fn exact_exactly_where_letters_agree(answer in "[A-Ca-c]{5}", guess in "[A-Ca-c]{5}") {
        let feedback = score(&answer, &guess).unwrap();
        let pairs = answer.bytes().zip(guess.bytes());
        for ((a, g), &hint) in pairs.zip(feedback.hints()) {
            prop_assert_eq!(a.eq_ignore_ascii_case(&g), hint == Hint::Exact);
        }
    }

    // Small alphabets force plenty of repeated letters
    #[test]
    fn credited_letters_never_exceed_answer_occurrences(
        answer in "[A-C]{5}",
        guess in "[A-D]{5}",
    ) {
        let feedback = score(&answer, &guess).unwrap();
        let in_answer = letter_counts(&answer);
        let in_guess = letter_counts(&guess);

        let mut credited = [0usize; 26];
        for (g, &hint) in guess.bytes().zip(feedback.hints()) {
            if hint != Hint::Absent {
                credited[usize::from(g - b'A')] += 1;
            }
        }

        for letter in 0..26 {
            prop_assert!(credited[letter] <= in_answer[letter]);
            prop_assert_eq!(credited[letter], in_answer[letter].min(in_guess[letter]));
        }
    }

    #[test]
    fn present_precedes_absent_for_each_letter(answer in "[A-C]{5}", guess in "[A-C]{5}") {
        let feedback = score(&answer, &guess).unwrap();
        let mut seen_absent = [false; 26];
        for (g, &hint) in guess.bytes().zip(feedback.hints()) {
            let slot = &mut seen_absent[usize::from(g - b'A')];
            match hint {
                Hint::Absent => *slot = true,
                Hint::Present => prop_assert!(!*slot, "present after absent in {guess}"),
                Hint::Exact => {}
            }
        }
    }

    #[test]
    fn any_fixed_length_yields_one_hint_per_letter(
        (answer, guess) in (1usize..12).prop_flat_map(|len| {
            let pattern = format!("[A-Ea-e]{{{len}}}");
            (proptest::string::string_regex(&pattern).unwrap(),
             proptest::string::string_regex(&pattern).unwrap())
        })
    ) {
        let scorer = Scorer::new(answer.len());
        let feedback = scorer.score(&answer, &guess).unwrap();
        prop_assert_eq!(feedback.len(), answer.len());
    }
}

#[test]
fn concurrent_scoring_matches_sequential() {
    let pairs = [
        ("BANAL", "ALALA"),
        ("PAPER", "PEPPY"),
        ("RADAR", "ARRRA"),
        ("BOOKS", "SOOBO"),
        ("WATER", "OTTER"),
        ("ABCDE", "EABCD"),
    ];
    let sequential: Vec<_> = pairs
        .iter()
        .map(|(answer, guess)| score(answer, guess).unwrap())
        .collect();

    for _ in 0..50 {
        let parallel: Vec<_> = pairs
            .par_iter()
            .map(|(answer, guess)| score(answer, guess).unwrap())
            .collect();
        assert_eq!(parallel, sequential);
    }
}

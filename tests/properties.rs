//! Property tests for the sampler, collision scan and clue engine.

use pico_paradox::core::{
    ALPHABET, ALPHABET_SIZE, Birthday, DAYS_IN_YEAR, Guess, SecretCode, compute_clues,
    find_collision, find_collision_counted, generate_sample, generate_secret,
};
use pico_paradox::simulation::estimate_collision_probability;
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashSet;

fn arb_birthdays(max_len: usize) -> impl Strategy<Value = Vec<Birthday>> {
    // A narrow range of days makes repeats common
    prop::collection::vec(0u16..40, 0..max_len).prop_map(|days| {
        days.into_iter()
            .map(|d| Birthday::from_ordinal(d).unwrap())
            .collect()
    })
}

fn arb_secret() -> impl Strategy<Value = SecretCode> {
    (any::<u64>(), 1..=ALPHABET_SIZE).prop_map(|(seed, len)| {
        generate_secret(len, &mut StdRng::seed_from_u64(seed)).unwrap()
    })
}

fn hex_string(len: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(ALPHABET.to_vec()), len)
        .prop_map(|bytes| bytes.into_iter().map(char::from).collect())
}

/// Reference: value at the first index whose value appears again later
fn first_pairwise_duplicate(sample: &[Birthday]) -> Option<Birthday> {
    (0..sample.len()).find_map(|a| {
        sample[a + 1..]
            .iter()
            .any(|b| *b == sample[a])
            .then_some(sample[a])
    })
}

// ── Sampler ──────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn sample_length_and_range(n in 1usize..=100, seed in any::<u64>()) {
        let sample = generate_sample(n, &mut StdRng::seed_from_u64(seed)).unwrap();
        prop_assert_eq!(sample.len(), n);
        prop_assert!(sample.iter().all(|b| b.ordinal() < DAYS_IN_YEAR));
    }
}

// ── Collision scan ───────────────────────────────────────────────────────

proptest! {
    #[test]
    fn collision_iff_fewer_distinct(sample in arb_birthdays(60)) {
        let distinct: HashSet<Birthday> = sample.iter().copied().collect();
        prop_assert_eq!(find_collision(&sample).is_some(), distinct.len() < sample.len());
    }

    #[test]
    fn collision_matches_pairwise_order(sample in arb_birthdays(60)) {
        prop_assert_eq!(find_collision(&sample), first_pairwise_duplicate(&sample));
    }

    #[test]
    fn counted_variant_agrees(sample in arb_birthdays(60)) {
        prop_assert_eq!(find_collision(&sample), find_collision_counted(&sample));
    }

    #[test]
    fn collision_is_deterministic(sample in arb_birthdays(60)) {
        prop_assert_eq!(find_collision(&sample), find_collision(&sample.clone()));
    }
}

// ── Estimator ────────────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn estimate_in_unit_interval(n in 1usize..=100, seed in any::<u64>()) {
        let p = estimate_collision_probability(n, 200, &mut StdRng::seed_from_u64(seed)).unwrap();
        prop_assert!((0.0..=1.0).contains(&p));
    }

    #[test]
    fn one_person_never_collides(trials in 1usize..2_000, seed in any::<u64>()) {
        let p = estimate_collision_probability(1, trials, &mut StdRng::seed_from_u64(seed)).unwrap();
        prop_assert!(p == 0.0);
    }

    #[test]
    fn pigeonhole_always_collides(n in 366usize..400, seed in any::<u64>()) {
        let p = estimate_collision_probability(n, 20, &mut StdRng::seed_from_u64(seed)).unwrap();
        prop_assert!(p == 1.0);
    }
}

// ── Secret generation ────────────────────────────────────────────────────

proptest! {
    #[test]
    fn secret_symbols_distinct(len in 1..=ALPHABET_SIZE, seed in any::<u64>()) {
        let secret = generate_secret(len, &mut StdRng::seed_from_u64(seed)).unwrap();
        prop_assert_eq!(secret.len(), len);
        let distinct: HashSet<u8> = secret.symbols().iter().copied().collect();
        prop_assert_eq!(distinct.len(), len);
        prop_assert!(secret.symbols().iter().all(|s| ALPHABET.contains(s)));
    }
}

// ── Clues ────────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn clue_counts_match_positions(
        (secret, guess_text) in arb_secret().prop_flat_map(|s| {
            let len = s.len();
            (Just(s), hex_string(len))
        })
    ) {
        let guess = Guess::new(&guess_text).unwrap();
        let clues = compute_clues(&guess, &secret).unwrap();

        let right = guess.symbols().iter().zip(secret.symbols()).filter(|(g, s)| g == s).count();
        let pico = guess
            .symbols()
            .iter()
            .zip(secret.symbols())
            .filter(|(g, s)| g != s && secret.contains(**g))
            .count();

        prop_assert_eq!(clues.count_right(), right);
        prop_assert_eq!(clues.count_pico(), pico);
        prop_assert!(clues.clues().len() <= secret.len());
        prop_assert_eq!(clues.is_bagels(), right + pico == 0);
    }

    #[test]
    fn own_secret_is_all_right(secret in arb_secret()) {
        let guess = Guess::new(&secret.text()).unwrap();
        let clues = compute_clues(&guess, &secret).unwrap();
        prop_assert_eq!(clues.to_string(), "Right".repeat(secret.len()));
    }

    #[test]
    fn rendering_ignores_positions(secret in arb_secret(), seed in any::<u64>()) {
        // Any rearrangement of the secret earns only Pico and Right tokens,
        // and the rendering is always Picos followed by Rights
        let mut shuffled = secret.symbols().to_vec();
        rand::seq::SliceRandom::shuffle(shuffled.as_mut_slice(), &mut StdRng::seed_from_u64(seed));
        let text: String = shuffled.iter().map(|&b| char::from(b)).collect();

        let clues = compute_clues(&Guess::new(&text).unwrap(), &secret).unwrap();
        let expected = format!(
            "{}{}",
            "Pico".repeat(clues.count_pico()),
            "Right".repeat(clues.count_right())
        );
        prop_assert_eq!(clues.count_pico() + clues.count_right(), secret.len());
        prop_assert_eq!(clues.to_string(), expected);
    }

    #[test]
    fn length_mismatch_rejected(secret in arb_secret(), extra in 1usize..4) {
        let guess = Guess::new(&"0".repeat(secret.len() + extra)).unwrap();
        prop_assert!(compute_clues(&guess, &secret).is_err());
    }
}

//! Property tests for generation, scoring and the session lifecycle.
//!
//! 1. Generated passwords have the requested length and only use enabled classes.
//! 2. An empty selection never yields a password.
//! 3. Strength is bounded and deterministic.
//! 4. The entropy level only rises within a cycle and reset zeroes it.
//! 5. A locked password survives any further samples and config changes.
//! 6. History never exceeds its capacity.
//! 7. A single-modality level is exactly `min(100, points / K)`.

use entropass::history::HISTORY_CAPACITY;
use entropass::pass::{self, charset};
use entropass::{
    AccrualRates, CharacterClassSelection, GateState, GenerateError, GenerationConfig, Outcome,
    PointerSample, Region, Session,
};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

// ── Helpers ─────────────────────────────────────────────────────────────

fn selection_strategy() -> impl Strategy<Value = CharacterClassSelection> {
    (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
        |(uppercase, lowercase, digits, symbols)| CharacterClassSelection {
            uppercase,
            lowercase,
            digits,
            symbols,
        },
    )
}

fn nonempty_selection_strategy() -> impl Strategy<Value = CharacterClassSelection> {
    selection_strategy().prop_filter("at least one class", |s| !s.is_empty())
}

/// (x, y, gap since previous sample in ms, is touch)
fn motion_strategy() -> impl Strategy<Value = Vec<(f64, f64, u64, bool)>> {
    prop::collection::vec(
        (0.0f64..500.0, 0.0f64..500.0, 0u64..200, any::<bool>()),
        0..300,
    )
}

fn samples(motion: &[(f64, f64, u64, bool)]) -> Vec<PointerSample> {
    let mut now = 0u64;
    motion
        .iter()
        .map(|&(x, y, gap, touch)| {
            now += gap;
            if touch {
                PointerSample::touch(x, y, now)
            } else {
                PointerSample::pointer(x, y, now)
            }
        })
        .collect()
}

fn session(seed: u64) -> Session<StdRng> {
    Session::new(
        GenerationConfig::default(),
        AccrualRates::default(),
        StdRng::seed_from_u64(seed),
    )
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Length and membership
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn generated_password_matches_config(
        seed in any::<u64>(),
        length in pass::MIN_LENGTH..=pass::MAX_LENGTH,
        selection in nonempty_selection_strategy(),
    ) {
        let config = GenerationConfig::new(length, selection);
        let mut rng = StdRng::seed_from_u64(seed);
        let password = pass::generate(&config, &mut rng).unwrap();
        let allowed = charset::build(&selection);

        prop_assert_eq!(password.len(), length);
        prop_assert!(
            password.bytes().all(|b| allowed.contains(&b)),
            "{:?} has characters outside {:?}",
            password.as_str(),
            String::from_utf8_lossy(&allowed)
        );
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Empty selection
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn empty_selection_is_an_error(seed in any::<u64>(), length in 0usize..64) {
        let config = GenerationConfig::new(length, CharacterClassSelection::none());
        let mut rng = StdRng::seed_from_u64(seed);
        prop_assert!(matches!(
            pass::generate(&config, &mut rng),
            Err(GenerateError::EmptySelection)
        ));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Strength bounds
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn strength_bounded_and_deterministic(password in any::<String>()) {
        let first = pass::score(&password);
        prop_assert!(first <= 100);
        prop_assert_eq!(first, pass::score(&password));
        prop_assert_eq!(first, pass::analyze(&password).score());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Monotonic level, reset to zero
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn level_rises_until_reset(seed in any::<u64>(), motion in motion_strategy()) {
        let mut s = session(seed);
        s.set_display_region(Some(Region::new(100.0, 100.0, 200.0, 140.0)));

        let mut previous = s.entropy_level();
        for sample in samples(&motion) {
            s.submit(sample);
            let level = s.entropy_level();
            prop_assert!(level >= previous, "level fell from {} to {}", previous, level);
            prop_assert!(level <= 100.0);
            previous = level;
        }

        prop_assert_eq!(s.reset(), Outcome::Reset);
        prop_assert_eq!(s.entropy_level(), 0.0);
        prop_assert_eq!(s.point_count(), 0);
        prop_assert_eq!(s.password(), None);
        prop_assert_eq!(s.gate_state(), GateState::Collecting);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Lock finality
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn locked_password_is_final(
        seed in any::<u64>(),
        motion in motion_strategy(),
        selection in selection_strategy(),
        length in 0usize..64,
    ) {
        let mut s = session(seed);
        let mut outcome = Outcome::Stored;
        for i in 0..100u64 {
            outcome = s.submit(PointerSample::pointer(i as f64, 0.0, i * 60));
        }
        prop_assert_eq!(outcome, Outcome::Locked);
        let locked = s.password().map(str::to_owned);
        let strength = s.strength();
        prop_assert!(locked.is_some());

        for mut sample in samples(&motion) {
            sample.timestamp_ms += 100 * 60;
            s.submit(sample);
        }
        s.configure(GenerationConfig::new(length, selection));

        prop_assert!(s.is_locked());
        prop_assert_eq!(s.password().map(str::to_owned), locked);
        prop_assert_eq!(s.strength(), strength);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. History capacity
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn history_is_bounded(seed in any::<u64>(), motion in motion_strategy()) {
        let mut s = session(seed);
        let mut generated = 0usize;
        for sample in samples(&motion) {
            if let Outcome::Generated { .. } = s.submit(sample) {
                generated += 1;
            }
            prop_assert!(s.history().len() <= HISTORY_CAPACITY);
        }
        prop_assert_eq!(s.history().len(), generated.min(HISTORY_CAPACITY));
        if let Some(latest) = s.history().latest() {
            prop_assert_eq!(Some(latest.password()), s.password());
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 7. Single-modality level is points / K
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn single_modality_level_is_points_over_divisor(
        seed in any::<u64>(),
        touch in any::<bool>(),
        gaps in prop::collection::vec(0u64..250, 0..200),
    ) {
        let mut s = session(seed);
        let rates = *s.rates();
        let divisor = if touch {
            rates.touch.points_per_percent
        } else {
            rates.pointer.points_per_percent
        };

        let mut now = 0u64;
        for gap in gaps {
            now += gap;
            let sample = if touch {
                PointerSample::touch(10.0, 10.0, now)
            } else {
                PointerSample::pointer(10.0, 10.0, now)
            };
            s.submit(sample);

            let expected = (s.point_count() as f64 / divisor).min(100.0);
            prop_assert_eq!(s.entropy_level(), expected);
            prop_assert_eq!(s.is_locked(), expected == 100.0);
        }
    }
}

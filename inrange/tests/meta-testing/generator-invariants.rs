//! Generator invariant properties
//!
//! Generated values always land inside the configured domain, and seed bias
//! hands out the seed exactly once per configuration.

use crate::arbitrary_bounds;
use inrange::*;
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_int_generation_respects_bounds((min, max) in arbitrary_bounds(), seed in any::<u64>()) {
        let mut generator = IntGen::with_range(InRange::between(min, max)).unwrap();
        let mut rng = SplitMix::from_u64(seed);
        for _ in 0..50 {
            let value = generator.generate(&mut rng);
            prop_assert!(min <= value && value <= max);
        }
    }

    #[test]
    fn test_short_generation_respects_bounds(a in any::<i16>(), b in any::<i16>(), seed in any::<u64>()) {
        let (min, max) = if a <= b { (a, b) } else { (b, a) };
        let mut generator = ShortGen::with_range(InRange::between(min, max)).unwrap();
        let mut rng = SplitMix::from_u64(seed);
        for _ in 0..50 {
            let value = generator.generate(&mut rng);
            prop_assert!(min <= value && value <= max);
        }
    }

    #[test]
    fn test_char_generation_respects_bounds(a in any::<char>(), b in any::<char>(), seed in any::<u64>()) {
        let (min, max) = if a <= b { (a, b) } else { (b, a) };
        let mut generator = CharGen::with_range(InRange::between(min, max)).unwrap();
        let mut rng = SplitMix::from_u64(seed);
        for _ in 0..50 {
            let value = generator.generate(&mut rng);
            prop_assert!(min <= value && value <= max);
        }
    }

    #[test]
    fn test_seeded_generation_starts_with_seed(seed in any::<i32>(), stream in any::<u64>()) {
        let mut generator = IntGen::with_range(InRange::new().with_seed(seed)).unwrap();
        let mut rng = SplitMix::from_u64(stream);

        prop_assert_eq!(generator.generate(&mut rng), seed);
        let domain = *generator.domain();
        prop_assert!(domain.contains(seed));
        for _ in 0..20 {
            prop_assert!(domain.contains(generator.generate(&mut rng)));
        }
        prop_assert!(generator.seed_bias().unwrap().is_consumed());
    }
}

/// The seed is returned once; afterwards values come from the sampler.
pub fn test_seed_bias_fires_once() {
    let mut generator = IntGen::with_range(InRange::new().with_seed(42)).unwrap();
    let mut rng = rand::thread_rng();

    assert_eq!(generator.generate(&mut rng), 42);
    let draws: Vec<i32> = (0..500).map(|_| generator.generate(&mut rng)).collect();
    assert!(draws.iter().all(|v| (-8..=92).contains(v)));
    // Later draws come from the sampler, which spreads over the window.
    assert!(draws.iter().any(|&v| v != 42));
}

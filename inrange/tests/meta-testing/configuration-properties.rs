//! Range configuration properties
//!
//! Resolution either yields an ordered domain or a configuration error, and
//! the seed window follows the decade rule.

use crate::arbitrary_bounds;
use inrange::*;
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_resolved_domains_are_ordered(min in any::<i32>(), max in any::<i32>()) {
        match Domain::resolve(&InRange::between(min, max)) {
            Ok(domain) => {
                prop_assert!(min <= max);
                prop_assert!(domain.min() <= domain.max());
            }
            Err(GenError::Configuration { .. }) => prop_assert!(min > max),
            Err(other) => prop_assert!(false, "unexpected error {}", other),
        }
    }

    #[test]
    fn test_textual_bounds_match_typed_bounds((min, max) in arbitrary_bounds()) {
        let typed = Domain::resolve(&InRange::between(min, max)).unwrap();
        let textual = Domain::resolve(
            &InRange::<i32>::new()
                .with_min_text(min.to_string())
                .with_max_text(max.to_string()),
        )
        .unwrap();
        prop_assert_eq!(typed, textual);
    }

    #[test]
    fn test_seed_window_contains_seed(seed in any::<i64>()) {
        let domain = Domain::resolve(&InRange::new().with_seed(seed)).unwrap();
        prop_assert!(domain.contains(seed));
        prop_assert!(domain.min() < seed || domain.min() == i64::MIN);
        prop_assert!(domain.max() > seed || domain.max() == i64::MAX);
    }

    #[test]
    fn test_seed_window_is_symmetric_when_unsaturated(seed in -100_000i32..100_000) {
        let domain = Domain::resolve(&InRange::new().with_seed(seed)).unwrap();
        prop_assert_eq!(seed - domain.min(), domain.max() - seed);
    }
}

/// Scenario: `useSeed` with seed 42 gives a half-width of 50.
pub fn test_seed_window_scenario() {
    let domain = Domain::resolve(&InRange::new().with_seed(42)).unwrap();
    assert_eq!((domain.min(), domain.max()), (-8, 92));

    let error = Domain::resolve(&InRange::<i16>::new().with_min_text("12x")).unwrap_err();
    assert!(error.to_string().contains("`min`"));

    let error = Domain::resolve(&InRange::between(5u8, 1)).unwrap_err();
    assert!(matches!(error, GenError::Configuration { .. }));
}

//! Property-Based Tests for Cache Module
//!
//! Uses proptest with a manual clock so expiry is checked without sleeping.

use proptest::prelude::*;
use std::collections::HashSet;
use std::sync::Arc;

use crate::cache::TtlCache;
use crate::clock::{Clock, ManualClock};

// == Test Configuration ==
const TEST_DEFAULT_TTL: u64 = 60_000;

// == Strategies ==
fn valid_key_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_]{1,64}".prop_map(|s| s)
}

fn valid_value_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{1,256}".prop_map(|s| s)
}

#[derive(Debug, Clone)]
enum CacheOp {
    Set { key: String, value: String, ttl: u64 },
    Get { key: String },
    Advance { ms: i64 },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        (valid_key_strategy(), valid_value_strategy(), 0u64..500)
            .prop_map(|(key, value, ttl)| CacheOp::Set { key, value, ttl }),
        valid_key_strategy().prop_map(|key| CacheOp::Get { key }),
        (0i64..300).prop_map(|ms| CacheOp::Advance { ms }),
    ]
}

fn manual_cache() -> (Arc<ManualClock>, TtlCache<String>) {
    let clock = Arc::new(ManualClock::default());
    let cache = TtlCache::with_clock(clock.clone(), TEST_DEFAULT_TTL);
    (clock, cache)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Storing a pair and reading it back before expiry returns the same value.
    #[test]
    fn prop_roundtrip_storage(key in valid_key_strategy(), value in valid_value_strategy()) {
        let (_clock, mut cache) = manual_cache();

        cache.set(key.clone(), value.clone(), None);
        prop_assert_eq!(cache.get(&key), Some(value));
    }

    // Once the TTL has elapsed a read returns nothing and drops the entry.
    #[test]
    fn prop_ttl_expiration_behavior(
        key in valid_key_strategy(),
        value in valid_value_strategy(),
        ttl in 0u64..10_000,
        overshoot in 1i64..10_000
    ) {
        let (clock, mut cache) = manual_cache();

        cache.set(key.clone(), value.clone(), Some(ttl));
        clock.advance_ms(ttl as i64);
        prop_assert_eq!(cache.get(&key), Some(value));

        clock.advance_ms(overshoot);
        prop_assert_eq!(cache.get(&key), None);
        prop_assert!(!cache.contains_key(&key));
    }

    // A successful read never returns an entry whose deadline has passed.
    #[test]
    fn prop_reads_are_never_stale(ops in prop::collection::vec(cache_op_strategy(), 1..80)) {
        let (clock, mut cache) = manual_cache();
        let mut deadlines = std::collections::HashMap::new();

        for op in ops {
            match op {
                CacheOp::Set { key, value, ttl } => {
                    deadlines.insert(key.clone(), clock.now_ms() + ttl as i64);
                    cache.set(key, value, Some(ttl));
                }
                CacheOp::Get { key } => {
                    if cache.get(&key).is_some() {
                        let deadline = deadlines[&key];
                        prop_assert!(clock.now_ms() <= deadline);
                    }
                }
                CacheOp::Advance { ms } => clock.advance_ms(ms),
            }
        }
    }

    // Hits and misses account for every read.
    #[test]
    fn prop_statistics_accuracy(ops in prop::collection::vec(cache_op_strategy(), 1..50)) {
        let (clock, mut cache) = manual_cache();
        let mut expected_hits: u64 = 0;
        let mut expected_misses: u64 = 0;

        for op in ops {
            match op {
                CacheOp::Set { key, value, ttl } => cache.set(key, value, Some(ttl)),
                CacheOp::Get { key } => match cache.get(&key) {
                    Some(_) => expected_hits += 1,
                    None => expected_misses += 1,
                },
                CacheOp::Advance { ms } => clock.advance_ms(ms),
            }
        }

        let stats = cache.stats();
        prop_assert_eq!(stats.hits, expected_hits, "Hits mismatch");
        prop_assert_eq!(stats.misses, expected_misses, "Misses mismatch");
        prop_assert_eq!(stats.total_entries, cache.len(), "Total entries mismatch");
    }

    // clear() leaves no key readable.
    #[test]
    fn prop_clear_empties_cache(keys in prop::collection::vec(valid_key_strategy(), 1..50)) {
        let (_clock, mut cache) = manual_cache();

        for key in &keys {
            cache.set(key.clone(), "v".to_string(), None);
        }
        let unique: HashSet<_> = keys.iter().collect();
        prop_assert_eq!(cache.len(), unique.len());

        cache.clear();
        for key in &keys {
            prop_assert_eq!(cache.get(key), None);
        }
    }
}

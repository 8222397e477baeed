//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check the cache against a straightforward reference
//! model and against its capacity, recency and TTL guarantees.

use proptest::prelude::*;
use std::time::Duration;

use crate::cache::{CacheConfig, CachePolicy, CacheStats, MockClock, PutOutcome, TtlLruCache};

// == Test Configuration ==
const TEST_TTL_MS: u64 = 1_000;
const LONG_TTL: Duration = Duration::from_secs(3600);

type TestCache = TtlLruCache<u8, u32, MockClock>;

fn mock_cache(capacity: usize, ttl: Duration) -> (TestCache, MockClock) {
    mock_cache_with_policy(capacity, ttl, CachePolicy::default())
}

fn mock_cache_with_policy(
    capacity: usize,
    ttl: Duration,
    policy: CachePolicy,
) -> (TestCache, MockClock) {
    let clock = MockClock::new();
    let config = CacheConfig::new(capacity, ttl).with_policy(policy);
    let cache = TtlLruCache::with_clock(config, clock.clone()).unwrap();
    (cache, clock)
}

// == Reference Model ==
/// Obviously-correct linear cache: a Vec ordered least to most recently
/// used, swept by a full scan.
#[derive(Debug)]
struct ModelCache {
    /// (key, value, refreshed_at_ms)
    entries: Vec<(u8, u32, u64)>,
    capacity: usize,
    ttl_ms: u64,
    now_ms: u64,
    policy: CachePolicy,
    stats: CacheStats,
}

impl ModelCache {
    fn new(capacity: usize, ttl_ms: u64, policy: CachePolicy) -> Self {
        Self {
            entries: Vec::new(),
            capacity,
            ttl_ms,
            now_ms: 0,
            policy,
            stats: CacheStats::default(),
        }
    }

    fn sweep(&mut self) {
        let (now, ttl) = (self.now_ms, self.ttl_ms);
        let before = self.entries.len();
        self.entries.retain(|&(_, _, refreshed)| now - refreshed < ttl);
        self.stats.evictions += (before - self.entries.len()) as u64;
    }

    fn position(&self, key: u8) -> Option<usize> {
        self.entries.iter().position(|&(k, _, _)| k == key)
    }

    fn put(&mut self, key: u8, value: u32) -> PutOutcome {
        self.sweep();
        self.stats.total_accesses += 1;
        if let Some(pos) = self.position(key) {
            self.entries.remove(pos);
            self.entries.push((key, value, self.now_ms));
            if self.policy.count_update_as_hit {
                self.stats.hits += 1;
            }
            return PutOutcome::Updated;
        }
        self.stats.misses += 1;
        if self.entries.len() >= self.capacity {
            self.entries.remove(0);
            self.stats.evictions += 1;
        }
        self.entries.push((key, value, self.now_ms));
        PutOutcome::Inserted
    }

    fn get(&mut self, key: u8) -> Option<u32> {
        self.sweep();
        self.stats.total_accesses += 1;
        match self.position(key) {
            Some(pos) => {
                let (_, value, refreshed) = self.entries.remove(pos);
                let refreshed = if self.policy.refresh_on_get {
                    self.now_ms
                } else {
                    refreshed
                };
                self.entries.push((key, value, refreshed));
                self.stats.hits += 1;
                Some(value)
            }
            None => {
                self.stats.misses += 1;
                None
            }
        }
    }

    fn clear(&mut self) {
        self.entries.clear();
        if self.policy.clear_resets_stats {
            self.stats = CacheStats::default();
        }
    }

    fn live_len(&self) -> usize {
        self.entries
            .iter()
            .filter(|&&(_, _, refreshed)| self.now_ms - refreshed < self.ttl_ms)
            .count()
    }

    fn snapshot(&mut self) -> Vec<(u8, u32)> {
        self.sweep();
        self.entries.iter().map(|&(k, v, _)| (k, v)).collect()
    }
}

// == Strategies ==
/// Generates a sequence of cache operations for testing
#[derive(Debug, Clone)]
enum CacheOp {
    Put { key: u8, value: u32 },
    Get { key: u8 },
    Advance { millis: u64 },
    Clear,
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    // small key space so updates, hits and evictions all happen often
    prop_oneof![
        4 => (0u8..8, any::<u32>()).prop_map(|(key, value)| CacheOp::Put { key, value }),
        4 => (0u8..8).prop_map(|key| CacheOp::Get { key }),
        2 => (0u64..=TEST_TTL_MS).prop_map(|millis| CacheOp::Advance { millis }),
        1 => Just(CacheOp::Clear),
    ]
}

fn policy_strategy() -> impl Strategy<Value = CachePolicy> {
    any::<(bool, bool, bool)>().prop_map(
        |(count_update_as_hit, clear_resets_stats, refresh_on_get)| CachePolicy {
            count_update_as_hit,
            clear_resets_stats,
            refresh_on_get,
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_matches_reference_model(
        capacity in 1usize..6,
        policy in policy_strategy(),
        ops in prop::collection::vec(cache_op_strategy(), 1..200)
    ) {
        let ttl = Duration::from_millis(TEST_TTL_MS);
        let (mut cache, clock) = mock_cache_with_policy(capacity, ttl, policy);
        let mut model = ModelCache::new(capacity, TEST_TTL_MS, policy);

        for op in ops {
            match op {
                CacheOp::Put { key, value } => {
                    prop_assert_eq!(cache.put(key, value), model.put(key, value));
                }
                CacheOp::Get { key } => {
                    prop_assert_eq!(cache.get(&key).copied(), model.get(key));
                }
                CacheOp::Advance { millis } => {
                    clock.advance_millis(millis);
                    model.now_ms += millis;
                }
                CacheOp::Clear => {
                    cache.clear();
                    model.clear();
                }
            }
            prop_assert_eq!(cache.statistics(), model.stats);
            prop_assert_eq!(cache.live_len(), model.live_len());
        }

        prop_assert_eq!(cache.snapshot(), model.snapshot());
        prop_assert_eq!(cache.statistics(), model.stats);
    }

    #[test]
    fn prop_capacity_enforcement(
        capacity in 1usize..20,
        entries in prop::collection::vec((any::<u16>(), any::<u32>()), 1..200)
    ) {
        let mut cache = TtlLruCache::new(capacity, LONG_TTL).unwrap();

        for (key, value) in entries {
            cache.put(key, value);
            prop_assert!(
                cache.len() <= capacity,
                "Cache size {} exceeds capacity {}",
                cache.len(),
                capacity
            );
        }
    }

    #[test]
    fn prop_lru_eviction_order(capacity in 1usize..10, extra in 0usize..10) {
        let mut cache = TtlLruCache::new(capacity, LONG_TTL).unwrap();
        let total = capacity + extra;

        for key in 0..total {
            cache.put(key, key);
        }

        let kept: Vec<usize> = cache.snapshot().into_iter().map(|(k, _)| k).collect();
        let expected: Vec<usize> = (extra..total).collect();
        prop_assert_eq!(kept, expected);
        prop_assert_eq!(cache.statistics().evictions, extra as u64);
    }

    #[test]
    fn prop_lru_access_tracking(capacity in 2usize..10) {
        let mut cache = TtlLruCache::new(capacity, LONG_TTL).unwrap();
        for key in 0..capacity {
            cache.put(key, key);
        }

        // key 0 would be evicted next; reading it protects it
        prop_assert_eq!(cache.get(&0), Some(&0));
        cache.put(capacity, capacity);

        prop_assert_eq!(cache.get(&0), Some(&0));
        prop_assert_eq!(cache.get(&1), None);
        prop_assert_eq!(cache.get(&capacity), Some(&capacity));
    }

    #[test]
    fn prop_miss_rate_consistent(ops in prop::collection::vec(cache_op_strategy(), 0..100)) {
        let (mut cache, clock) = mock_cache(4, Duration::from_millis(TEST_TTL_MS));

        for op in ops {
            match op {
                CacheOp::Put { key, value } => {
                    cache.put(key, value);
                }
                CacheOp::Get { key } => {
                    cache.get(&key);
                }
                CacheOp::Advance { millis } => clock.advance_millis(millis),
                CacheOp::Clear => cache.clear(),
            }

            let stats = cache.statistics();
            let expected = if stats.total_accesses == 0 {
                0.0
            } else {
                stats.misses as f64 / stats.total_accesses as f64
            };
            prop_assert_eq!(cache.miss_rate(), expected);
            prop_assert!((0.0..=1.0).contains(&cache.miss_rate()));
        }
    }

    #[test]
    fn prop_clear_resets(ops in prop::collection::vec(cache_op_strategy(), 0..100)) {
        let (mut cache, clock) = mock_cache(3, Duration::from_millis(TEST_TTL_MS));

        for op in ops {
            match op {
                CacheOp::Put { key, value } => {
                    cache.put(key, value);
                }
                CacheOp::Get { key } => {
                    cache.get(&key);
                }
                CacheOp::Advance { millis } => clock.advance_millis(millis),
                CacheOp::Clear => {}
            }
        }

        cache.clear();
        prop_assert_eq!(cache.statistics(), CacheStats::default());
        prop_assert!(cache.snapshot().is_empty());
    }

    #[test]
    fn prop_ttl_presence(ttl_ms in 1u64..5_000, elapsed_ms in 0u64..10_000, value in any::<u32>()) {
        let (mut cache, clock) = mock_cache(4, Duration::from_millis(ttl_ms));

        cache.put(1, value);
        clock.advance_millis(elapsed_ms);

        let live = elapsed_ms < ttl_ms;
        prop_assert_eq!(cache.snapshot().len(), usize::from(live));
        prop_assert_eq!(cache.get(&1).copied(), live.then_some(value));
    }
}

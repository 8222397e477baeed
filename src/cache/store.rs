//! Cache Store Module
//!
//! Main cache engine combining a key → slot table with an arena recency
//! list, TTL expiry and hit/miss statistics.

use std::collections::HashMap;
use std::hash::Hash;
use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::{debug, trace};

use crate::cache::{
    CacheConfig, CacheEntry, CachePolicy, CacheStats, Clock, RecencyList, SystemClock,
};
use crate::error::Result;

/// Upper bound on the slots reserved at construction; larger caches grow on
/// demand.
const MAX_INITIAL_RESERVATION: usize = 1024;

// == Put Outcome ==
/// Result of a successful `put`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PutOutcome {
    /// The key was absent and has been inserted
    Inserted,
    /// The key was live and its value has been replaced
    Updated,
}

// == TTL LRU Cache ==
/// Fixed-capacity LRU cache whose entries expire `ttl` after their last
/// refresh.
///
/// Every `get` and `put` first sweeps expired entries, then performs the
/// operation. Expired and capacity-evicted entries both count as evictions.
#[derive(Debug)]
pub struct TtlLruCache<K, V, C = SystemClock> {
    /// Key → slot in `order`
    index: HashMap<K, usize>,
    /// Entries from least to most recently used
    order: RecencyList<CacheEntry<K, V>>,
    /// Performance statistics
    stats: CacheStats,
    capacity: usize,
    ttl: Duration,
    policy: CachePolicy,
    clock: C,
}

impl<K, V> TtlLruCache<K, V, SystemClock>
where
    K: Hash + Eq + Clone,
{
    // == Constructor ==
    /// Creates a cache holding at most `capacity` entries for `ttl` each.
    ///
    /// Fails with `InvalidConfiguration` if either is zero.
    pub fn new(capacity: usize, ttl: Duration) -> Result<Self> {
        Self::with_config(CacheConfig::new(capacity, ttl))
    }

    /// Creates a cache from a full configuration.
    pub fn with_config(config: CacheConfig) -> Result<Self> {
        Self::with_clock(config, SystemClock)
    }
}

impl<K, V, C> TtlLruCache<K, V, C>
where
    K: Hash + Eq + Clone,
    C: Clock,
{
    /// Creates a cache reading time from `clock`.
    pub fn with_clock(config: CacheConfig, clock: C) -> Result<Self> {
        config.validate()?;
        let reserved = config.capacity.min(MAX_INITIAL_RESERVATION);
        Ok(Self {
            index: HashMap::with_capacity(reserved),
            order: RecencyList::with_capacity(reserved),
            stats: CacheStats::new(),
            capacity: config.capacity,
            ttl: config.ttl,
            policy: config.policy,
            clock,
        })
    }

    // == Put ==
    /// Stores `value` under `key`.
    ///
    /// An existing key has its value replaced and its TTL restarted. A new
    /// key evicts the least recently used entry when the cache is full.
    pub fn put(&mut self, key: K, value: V) -> PutOutcome {
        let now = self.clock.now();
        self.sweep_expired(now);
        self.stats.record_access();

        if let Some(&slot) = self.index.get(&key) {
            if self.policy.count_update_as_hit {
                self.stats.record_hit();
            }
            self.order.move_to_back(slot);
            if let Some(entry) = self.order.get_mut(slot) {
                entry.value = value;
                entry.refresh(now);
            }
            return PutOutcome::Updated;
        }

        self.stats.record_miss();
        if self.index.len() >= self.capacity {
            self.evict_lru();
        }

        let slot = self.order.push_back(CacheEntry::new(key.clone(), value, now));
        self.index.insert(key, slot);
        PutOutcome::Inserted
    }

    // == Get ==
    /// Returns the live value for `key`, marking it most recently used.
    ///
    /// Absent and just-expired keys both return `None` and count as misses.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        let now = self.clock.now();
        self.sweep_expired(now);
        self.stats.record_access();

        let slot = match self.index.get(key) {
            Some(&slot) => slot,
            None => {
                self.stats.record_miss();
                return None;
            }
        };

        self.stats.record_hit();
        self.order.move_to_back(slot);
        let entry = self.order.get_mut(slot)?;
        if self.policy.refresh_on_get {
            entry.refresh(now);
        }
        Some(&entry.value)
    }

    // == Clear ==
    /// Removes every entry and, under the default policy, zeroes statistics.
    pub fn clear(&mut self) {
        self.index.clear();
        self.order.clear();
        if self.policy.clear_resets_stats {
            self.stats.reset();
        }
    }

    // == Statistics ==
    /// Returns a snapshot of the counters.
    pub fn statistics(&self) -> CacheStats {
        self.stats
    }

    // == Miss Rate ==
    /// misses / total_accesses, or 0.0 before the first access.
    pub fn miss_rate(&self) -> f64 {
        self.stats.miss_rate()
    }

    // == Snapshot ==
    /// Returns every live entry, least recently used first.
    ///
    /// Sweeps expired entries first. Does not count as an access.
    pub fn snapshot(&mut self) -> Vec<(K, V)>
    where
        V: Clone,
    {
        let now = self.clock.now();
        self.sweep_expired(now);
        self.order
            .iter()
            .map(|entry| (entry.key.clone(), entry.value.clone()))
            .collect()
    }

    // == Purge Expired ==
    /// Removes all expired entries now, returning how many were removed.
    ///
    /// Each removal counts as an eviction.
    pub fn purge_expired(&mut self) -> usize {
        let now = self.clock.now();
        self.sweep_expired(now)
    }

    // == Accessors ==
    /// Number of entries currently stored, including any not yet swept.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Number of entries that are still live, without sweeping the rest.
    pub fn live_len(&self) -> usize {
        let now = self.clock.now();
        self.order
            .iter()
            .filter(|entry| !entry.is_expired(now, self.ttl))
            .count()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn policy(&self) -> CachePolicy {
        self.policy
    }

    // == Internal Helpers ==
    /// Drops every entry expired at `now`.
    ///
    /// When gets refresh the TTL, recency order is also refresh order, so the
    /// walk stops at the first live entry. Otherwise the whole list is scanned.
    fn sweep_expired(&mut self, now: Instant) -> usize {
        let ordered_by_refresh = self.policy.refresh_on_get;
        let mut removed = 0;
        let mut cursor = self.order.front_slot();

        while let Some(slot) = cursor {
            cursor = self.order.next_slot(slot);

            let expired = self
                .order
                .get(slot)
                .map_or(false, |entry| entry.is_expired(now, self.ttl));

            if expired {
                if let Some(entry) = self.order.remove(slot) {
                    self.index.remove(&entry.key);
                    self.stats.record_eviction();
                    removed += 1;
                }
            } else if ordered_by_refresh {
                break;
            }
        }

        if removed > 0 {
            debug!(removed, remaining = self.index.len(), "swept expired entries");
        }
        removed
    }

    /// Evicts the least recently used entry.
    fn evict_lru(&mut self) {
        if let Some(entry) = self.order.pop_front() {
            self.index.remove(&entry.key);
            self.stats.record_eviction();
            trace!(capacity = self.capacity, "evicted least recently used entry");
        }
    }
}

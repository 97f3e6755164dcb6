//! Cache Store Module
//!
//! Main cache engine: a bounded HashMap with instance-wide TTL expiry and
//! least-recently-accessed trimming.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use serde::Serialize;

use crate::cache::{fingerprint, CacheEntry, CacheStats, StatsSnapshot};

// == Cache Store ==
/// Bounded, time-expiring key-value store with hit/miss/eviction accounting.
///
/// Every entry shares the instance TTL; there are no per-entry overrides.
/// Reads never return an entry older than the TTL, even when no cleanup pass
/// has physically removed it yet. The capacity bound is best-effort: the
/// store holds at most `max_size` entries after a cleanup pass completes,
/// and may transiently exceed it by one between an insert and the next pass.
///
/// No operation fails. Absence is `None`/`false`, never an error.
#[derive(Debug)]
pub struct CacheStore<T> {
    /// Instance name, used in logs and stats
    name: String,
    /// Key-value storage
    entries: HashMap<String, CacheEntry<T>>,
    /// Performance counters
    stats: CacheStats,
    /// Maximum number of entries allowed after a cleanup pass
    max_size: usize,
    /// Time-to-live applied to every entry
    ttl: Duration,
}

impl<T> CacheStore<T> {
    // == Constructor ==
    /// Creates a new store.
    ///
    /// # Arguments
    /// * `name` - Instance name for logs and stats
    /// * `max_size` - Capacity bound enforced by cleanup passes
    /// * `ttl` - Time-to-live applied to every entry
    pub fn new(name: impl Into<String>, max_size: usize, ttl: Duration) -> Self {
        Self {
            name: name.into(),
            entries: HashMap::new(),
            stats: CacheStats::new(),
            max_size,
            ttl,
        }
    }

    // == Get ==
    /// Returns the value for `key` if present and unexpired, refreshing the
    /// entry's access metadata and recording a hit.
    ///
    /// An entry found expired is removed on the spot and counted as a miss.
    pub fn get(&mut self, key: &str) -> Option<T>
    where
        T: Clone,
    {
        self.get_with_etag(key).map(|(data, _)| data)
    }

    // == Get With ETag ==
    /// Same semantics and side effects as [`get`](Self::get), additionally
    /// returning the entry's etag for conditional-response handling at the
    /// API boundary.
    pub fn get_with_etag(&mut self, key: &str) -> Option<(T, String)>
    where
        T: Clone,
    {
        let now = Instant::now();
        let ttl = self.ttl;

        if let Some(entry) = self.entries.get_mut(key) {
            if !entry.is_expired(now, ttl) {
                entry.touch(now);
                self.stats.record_hit();
                return Some((entry.data().clone(), entry.etag().to_string()));
            }
            self.entries.remove(key);
        }

        self.stats.record_miss();
        None
    }

    // == Set ==
    /// Inserts or overwrites an entry.
    ///
    /// When no etag is supplied one is computed from the value's JSON
    /// serialization. If the store is at or above capacity before the
    /// insert, a full cleanup pass runs first; the insert itself always
    /// succeeds.
    pub fn set(&mut self, key: impl Into<String>, value: T, etag: Option<String>)
    where
        T: Serialize,
    {
        if self.entries.len() >= self.max_size {
            self.cleanup();
        }

        let etag = etag.unwrap_or_else(|| fingerprint(&value));
        self.entries.insert(key.into(), CacheEntry::new(value, etag));
    }

    // == Has ==
    /// Existence check with the same expiry semantics as `get`, including
    /// the lazy removal of an expired entry, but without touching access
    /// metadata or the hit/miss counters.
    pub fn has(&mut self, key: &str) -> bool {
        let now = Instant::now();

        if let Some(entry) = self.entries.get(key) {
            if !entry.is_expired(now, self.ttl) {
                return true;
            }
            self.entries.remove(key);
        }

        false
    }

    // == Delete ==
    /// Removes an entry, reporting whether it was present.
    pub fn delete(&mut self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    // == Clear ==
    /// Removes all entries and resets every counter to zero.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.stats.reset();
    }

    // == Cleanup ==
    /// Runs one cleanup pass and returns the number of entries removed.
    ///
    /// 1. Take the current time once for the whole pass.
    /// 2. Remove every entry whose age exceeds the TTL.
    /// 3. If the store is still over capacity, remove the surplus in
    ///    ascending `last_accessed` order.
    /// 4. Add the total removal count to the eviction counter.
    pub fn cleanup(&mut self) -> usize {
        let now = Instant::now();
        let ttl = self.ttl;

        let expired: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired(now, ttl))
            .map(|(key, _)| key.clone())
            .collect();

        let mut removed = expired.len();
        for key in expired {
            self.entries.remove(&key);
        }

        if self.entries.len() > self.max_size {
            let surplus = self.entries.len() - self.max_size;
            let mut by_access: Vec<(String, Instant)> = self
                .entries
                .iter()
                .map(|(key, entry)| (key.clone(), entry.last_accessed()))
                .collect();
            by_access.sort_by_key(|(_, last_accessed)| *last_accessed);

            for (key, _) in by_access.into_iter().take(surplus) {
                self.entries.remove(&key);
                removed += 1;
            }
        }

        self.stats.record_evictions(removed as u64);
        removed
    }

    // == Stats ==
    /// Point-in-time snapshot of counters and configuration.
    pub fn stats(&self) -> StatsSnapshot {
        StatsSnapshot {
            name: self.name.clone(),
            hits: self.stats.hits,
            misses: self.stats.misses,
            evictions: self.stats.evictions,
            total_requests: self.stats.total_requests(),
            hit_rate: self.stats.hit_rate_percent(),
            size: self.entries.len(),
            max_size: self.max_size,
            ttl_seconds: self.ttl.as_secs(),
        }
    }

    /// Raw counters, for consumers that want the numeric hit ratio.
    pub fn counters(&self) -> &CacheStats {
        &self.stats
    }

    // == Accessors ==
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

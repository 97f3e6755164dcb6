//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with access metadata.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// A single cache entry: the stored value plus the metadata the store needs
/// for expiry decisions and least-recently-accessed trimming.
///
/// Expiry is not stored on the entry; the owning store applies its configured
/// TTL against `inserted_at`. Checks take `now` explicitly so that one
/// timestamp can serve an entire cleanup pass.
#[derive(Debug, Clone)]
pub struct CacheEntry<T> {
    /// The stored value
    data: T,
    /// Insertion time
    inserted_at: Instant,
    /// Time of the most recent read
    last_accessed: Instant,
    /// Number of successful reads
    access_count: u64,
    /// Content fingerprint computed at insertion
    etag: String,
}

impl<T> CacheEntry<T> {
    // == Constructor ==
    /// Creates a new entry. `inserted_at` and `last_accessed` start equal,
    /// which keeps `last_accessed >= inserted_at` from the first instant.
    pub fn new(data: T, etag: String) -> Self {
        let now = Instant::now();
        Self {
            data,
            inserted_at: now,
            last_accessed: now,
            access_count: 0,
            etag,
        }
    }

    // == Is Expired ==
    /// Checks whether the entry has outlived `ttl` as of `now`.
    ///
    /// Boundary condition: an entry is expired only once its age strictly
    /// exceeds the TTL. At `age == ttl` the entry is still served.
    pub fn is_expired(&self, now: Instant, ttl: Duration) -> bool {
        now.duration_since(self.inserted_at) > ttl
    }

    // == Touch ==
    /// Records a successful read: refreshes `last_accessed` and bumps the
    /// access counter.
    pub fn touch(&mut self, now: Instant) {
        self.last_accessed = now;
        self.access_count += 1;
    }

    // == Age ==
    /// Time elapsed since insertion, as of `now`.
    pub fn age(&self, now: Instant) -> Duration {
        now.duration_since(self.inserted_at)
    }

    // == Accessors ==
    pub fn data(&self) -> &T {
        &self.data
    }

    pub fn etag(&self) -> &str {
        &self.etag
    }

    pub fn inserted_at(&self) -> Instant {
        self.inserted_at
    }

    pub fn last_accessed(&self) -> Instant {
        self.last_accessed
    }

    pub fn access_count(&self) -> u64 {
        self.access_count
    }
}

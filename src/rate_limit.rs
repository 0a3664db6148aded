use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

use sha2::{Digest, Sha256};

/// In-memory sliding-window limiter keyed by (bucket, ip_hash).
pub struct RateLimiter {
    entries: Mutex<HashMap<String, Vec<Instant>>>,
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new()
    }
}

impl RateLimiter {
    pub fn new() -> Self {
        RateLimiter {
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Record an attempt and return true if it is under the limit.
    /// `key` should look like "contact:<ip_hash>".
    pub fn check_and_record(&self, key: &str, max_attempts: u64, window: Duration) -> bool {
        let mut map = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        let now = Instant::now();

        let attempts = map.entry(key.to_string()).or_default();
        attempts.retain(|t| now.duration_since(*t) < window);

        if (attempts.len() as u64) < max_attempts {
            attempts.push(now);
            true
        } else {
            false
        }
    }

    /// Attempts left in the current window, without recording one.
    pub fn remaining(&self, key: &str, max_attempts: u64, window: Duration) -> u64 {
        let map = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        let now = Instant::now();
        let used = map
            .get(key)
            .map(|attempts| attempts.iter().filter(|t| now.duration_since(**t) < window).count())
            .unwrap_or(0);
        max_attempts.saturating_sub(used as u64)
    }

    /// Drop keys with no attempts newer than `max_age`.
    pub fn cleanup(&self, max_age: Duration) {
        let mut map = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        let now = Instant::now();
        map.retain(|_, attempts| {
            attempts.retain(|t| now.duration_since(*t) < max_age);
            !attempts.is_empty()
        });
    }
}

/// Hash an IP address so raw addresses never sit in memory or logs.
pub fn hash_ip(ip: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(ip.as_bytes());
    hex::encode(hasher.finalize())
}

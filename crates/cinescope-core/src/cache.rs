use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::debug;

/// How long a response stays fresh unless the caller says otherwise
pub const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);

/// Millisecond wall clock, injectable so expiry can be driven in tests
pub trait Clock: Send + Sync {
    fn now_millis(&self) -> i64;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

#[derive(Debug, Clone)]
struct CacheEntry<V> {
    payload: V,
    expires_at_ms: i64,
}

/// In-memory response cache with per-entry expiry
///
/// Expired entries are only removed when they are read; there is no
/// background sweep and no capacity bound.
pub struct ResponseCache<V> {
    entries: Mutex<HashMap<String, CacheEntry<V>>>,
    default_ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl<V: Clone> ResponseCache<V> {
    pub fn new() -> Self {
        Self::with_clock(DEFAULT_TTL, Arc::new(SystemClock))
    }

    pub fn with_ttl(default_ttl: Duration) -> Self {
        Self::with_clock(default_ttl, Arc::new(SystemClock))
    }

    pub fn with_clock(default_ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            default_ttl,
            clock,
        }
    }

    /// Payload for `key` if present and not yet expired
    pub fn get(&self, key: &str) -> Option<V> {
        let now = self.clock.now_millis();
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());

        let expired = match entries.get(key) {
            None => {
                debug!("Cache miss: {}", key);
                return None;
            }
            Some(entry) => now > entry.expires_at_ms,
        };

        if expired {
            debug!("Cache expired: {}", key);
            entries.remove(key);
            return None;
        }

        debug!("Cache hit: {}", key);
        entries.get(key).map(|entry| entry.payload.clone())
    }

    pub fn set(&self, key: &str, payload: V) {
        self.set_with_ttl(key, payload, self.default_ttl);
    }

    pub fn set_with_ttl(&self, key: &str, payload: V, ttl: Duration) {
        let expires_at_ms = self.clock.now_millis().saturating_add(ttl.as_millis() as i64);
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.insert(
            key.to_string(),
            CacheEntry {
                payload,
                expires_at_ms,
            },
        );
    }

    pub fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn delete(&self, key: &str) {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.remove(key);
    }

    pub fn clear(&self) {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.clear();
    }

    /// Stored entry count, including expired entries not yet read
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<V: Clone> Default for ResponseCache<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a cache key as `prefix:k1=v1&k2=v2`, parameters sorted by name
///
/// Call-site parameter order never changes the key.
pub fn generate_key<I, K, T>(prefix: &str, params: I) -> String
where
    I: IntoIterator<Item = (K, T)>,
    K: Into<String>,
    T: ToString,
{
    let sorted: BTreeMap<String, String> = params
        .into_iter()
        .map(|(k, v)| (k.into(), v.to_string()))
        .collect();

    let joined = sorted
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&");

    format!("{}:{}", prefix, joined)
}

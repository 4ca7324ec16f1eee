//! Assessment Cache
//!
//! Short-lived in-process cache of assessments keyed by mint. Only used when
//! a non-zero TTL is configured; otherwise freshness is left entirely to the
//! `Cache-Control` header.
//!
//! The cache holds at most `max_entries` mints. Inserts only sweep when the
//! cache is full: expired entries go first, then the oldest fresh one.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use parking_lot::RwLock;

use crate::domain::risk_scoring::RiskAssessment;

#[derive(Debug, Clone)]
struct CachedAssessment {
    assessment: RiskAssessment,
    stored_at: Instant,
}

/// Default bound on the number of cached mints.
pub const DEFAULT_MAX_ENTRIES: usize = 10_000;

/// Bounded TTL cache of successful assessments.
#[derive(Debug)]
pub struct AssessmentCache {
    ttl: Duration,
    max_entries: usize,
    entries: RwLock<HashMap<String, CachedAssessment>>,
}

impl AssessmentCache {
    /// Create a cache whose entries expire after `ttl`, holding up to
    /// [`DEFAULT_MAX_ENTRIES`] mints.
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self::with_capacity(ttl, DEFAULT_MAX_ENTRIES)
    }

    /// Create a cache holding at most `max_entries` mints (minimum one).
    #[must_use]
    pub fn with_capacity(ttl: Duration, max_entries: usize) -> Self {
        Self {
            ttl,
            max_entries: max_entries.max(1),
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Configured time-to-live.
    #[must_use]
    pub const fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Maximum number of stored mints.
    #[must_use]
    pub const fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// Fresh assessment for `mint`, if any.
    #[must_use]
    pub fn get(&self, mint: &str) -> Option<RiskAssessment> {
        self.get_at(mint, Instant::now())
    }

    /// Store an assessment under its mint, making room first if full.
    pub fn insert(&self, assessment: RiskAssessment) {
        self.insert_at(assessment, Instant::now());
    }

    /// Number of stored entries, expired or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Whether the cache holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    fn get_at(&self, mint: &str, now: Instant) -> Option<RiskAssessment> {
        let entries = self.entries.read();
        entries
            .get(mint)
            .filter(|entry| now.saturating_duration_since(entry.stored_at) < self.ttl)
            .map(|entry| entry.assessment.clone())
    }

    fn insert_at(&self, assessment: RiskAssessment, now: Instant) {
        let mint = assessment.mint().to_string();
        let mut entries = self.entries.write();
        if entries.len() >= self.max_entries && !entries.contains_key(&mint) {
            entries.retain(|_, entry| now.saturating_duration_since(entry.stored_at) < self.ttl);
            if entries.len() >= self.max_entries {
                let oldest = entries
                    .iter()
                    .min_by_key(|(_, entry)| entry.stored_at)
                    .map(|(key, _)| key.clone());
                if let Some(key) = oldest {
                    entries.remove(&key);
                }
            }
        }
        entries.insert(
            mint,
            CachedAssessment {
                assessment,
                stored_at: now,
            },
        );
    }
}

// ABOUTME: Snapshot cache for generated page props with per-entry revalidation windows
// ABOUTME: Serves fresh snapshots, regenerates stale or missing ones, and falls back to stale on failure
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Catalog Contributors

use std::future::Future;
use std::num::NonZeroUsize;
use std::time::Duration;

use lru::LruCache;
use tokio::sync::RwLock;
use tokio::time::Instant;
use tracing::{debug, warn};

use super::{PageResult, StaticProps};
use crate::errors::AppResult;

/// A generated snapshot
#[derive(Debug, Clone)]
struct CachedPage<P> {
    props: P,
    revalidate: Duration,
    generated_at: Instant,
}

impl<P: Clone> CachedPage<P> {
    fn new(props: StaticProps<P>) -> Self {
        Self {
            props: props.props,
            revalidate: props.revalidate,
            generated_at: Instant::now(),
        }
    }

    fn is_stale(&self) -> bool {
        self.generated_at.elapsed() >= self.revalidate
    }

    fn to_result(&self) -> PageResult<P> {
        PageResult::Found(StaticProps {
            props: self.props.clone(),
            revalidate: self.revalidate,
        })
    }
}

/// Generated page props keyed by route path
///
/// Bounded by an LRU capacity: once full, storing a new key evicts the least
/// recently served one. Two requests racing on the same missing key may both
/// generate; the last write wins.
#[derive(Debug)]
pub struct PageCache<P> {
    entries: RwLock<LruCache<String, CachedPage<P>>>,
}

impl<P> PageCache<P> {
    /// Capacity used when the configured value is zero
    pub const DEFAULT_CAPACITY: NonZeroUsize = match NonZeroUsize::new(1000) {
        Some(n) => n,
        None => unreachable!(),
    };
}

impl<P> Default for PageCache<P> {
    fn default() -> Self {
        Self {
            entries: RwLock::new(LruCache::new(Self::DEFAULT_CAPACITY)),
        }
    }
}

impl<P: Clone + Send + Sync> PageCache<P> {
    /// Create an empty cache with the default capacity
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty cache holding at most `max_entries` snapshots
    #[must_use]
    pub fn with_capacity(max_entries: usize) -> Self {
        let capacity = NonZeroUsize::new(max_entries).unwrap_or(Self::DEFAULT_CAPACITY);
        Self {
            entries: RwLock::new(LruCache::new(capacity)),
        }
    }

    /// Serve `key` from the cache, generating it when missing or stale
    ///
    /// - fresh entry: returned without calling `generate`
    /// - missing entry: generated while the caller waits, then stored
    /// - stale entry: regenerated; if that fails the stale snapshot is served
    ///
    /// [`PageResult::NotFound`] is returned as-is and removes any stored entry.
    pub async fn get_or_generate<F, Fut>(&self, key: &str, generate: F) -> AppResult<PageResult<P>>
    where
        F: FnOnce() -> Fut + Send,
        Fut: Future<Output = AppResult<PageResult<P>>> + Send,
    {
        let stale = {
            let mut entries = self.entries.write().await;
            match entries.get(key) {
                Some(entry) if !entry.is_stale() => {
                    debug!(key, "Page cache hit");
                    return Ok(entry.to_result());
                }
                Some(entry) => Some(entry.to_result()),
                None => None,
            }
        };

        if stale.is_some() {
            debug!(key, "Page stale, regenerating");
        } else {
            debug!(key, "Page not generated yet, generating");
        }

        match generate().await {
            Ok(PageResult::Found(props)) => {
                let fresh = CachedPage::new(props);
                let result = fresh.to_result();
                self.entries.write().await.put(key.to_owned(), fresh);
                Ok(result)
            }
            Ok(PageResult::NotFound) => {
                self.entries.write().await.pop(key);
                Ok(PageResult::NotFound)
            }
            Err(e) => match stale {
                Some(previous) => {
                    warn!(key, error = %e, "Page regeneration failed, serving stale snapshot");
                    Ok(previous)
                }
                None => Err(e),
            },
        }
    }

    /// Store a generated snapshot directly (used when pre-generating)
    pub async fn insert(&self, key: &str, props: StaticProps<P>) {
        self.entries
            .write()
            .await
            .put(key.to_owned(), CachedPage::new(props));
    }

    /// Maximum number of stored snapshots
    pub async fn capacity(&self) -> usize {
        self.entries.read().await.cap().get()
    }

    /// Number of stored snapshots
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Whether nothing has been generated yet
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    /// Drop every snapshot so the next request regenerates
    pub async fn invalidate_all(&self) {
        self.entries.write().await.clear();
    }
}

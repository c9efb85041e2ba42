//! Shared-replay response cache.
//!
//! A [`SharedCache`] wraps one parameterless fetch. The first caller starts
//! the fetch, every caller that arrives while it is pending joins the same
//! in-flight future, and once it succeeds the value is replayed to later
//! callers until [`SharedCache::invalidate`] is called.
//!
//! Failures are delivered to every joined caller but are never remembered:
//! the next `get()` after a failure starts a new fetch.
//!
//! # Example
//!
//! ```ignore
//! let source = Arc::new(HttpAreaSource::new(config)?);
//! let areas = SharedCache::new("areas", {
//!     let source = source.clone();
//!     move || {
//!         let source = source.clone();
//!         async move { source.list_areas().await }
//!     }
//! });
//!
//! let first = areas.get().await?; // network
//! let again = areas.get().await?; // replayed
//! areas.invalidate();
//! let fresh = areas.get().await?; // network
//! ```

use std::fmt;
use std::future::Future;
use std::sync::{Mutex, MutexGuard, PoisonError};

use futures_util::future::{BoxFuture, FutureExt, Shared};

use crate::error::Result;

type FetchFn<T> = Box<dyn Fn() -> BoxFuture<'static, Result<T>> + Send + Sync>;
type InFlight<T> = Shared<BoxFuture<'static, Result<T>>>;

/// Observable state of a [`SharedCache`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheState {
    /// Nothing remembered; the next `get()` fetches.
    Empty,
    /// A fetch is in flight; callers join it.
    Pending,
    /// A successful result is remembered and replayed.
    Ready,
}

enum Slot<T> {
    Empty,
    Pending(InFlight<T>),
    Ready(T),
}

struct Inner<T> {
    slot: Slot<T>,
    /// Bumped whenever a fetch starts or the cache is invalidated. A fetch
    /// only settles the slot if the generation it started under is current.
    generation: u64,
}

enum Lookup<T> {
    Hit(T),
    Wait { generation: u64, in_flight: InFlight<T> },
}

/// Caches the result of a single fetch, sharing in-flight requests.
pub struct SharedCache<T> {
    name: &'static str,
    fetch: FetchFn<T>,
    inner: Mutex<Inner<T>>,
}

impl<T> SharedCache<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Creates an empty cache around `fetch`.
    ///
    /// `name` only appears in log output.
    pub fn new<F, Fut>(name: &'static str, fetch: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T>> + Send + 'static,
    {
        Self {
            name,
            fetch: Box::new(move || fetch().boxed()),
            inner: Mutex::new(Inner {
                slot: Slot::Empty,
                generation: 0,
            }),
        }
    }

    /// Returns the cached value, fetching it if nothing is remembered.
    pub async fn get(&self) -> Result<T> {
        let (generation, in_flight) = match self.start_or_join() {
            Lookup::Hit(value) => return Ok(value),
            Lookup::Wait {
                generation,
                in_flight,
            } => (generation, in_flight),
        };

        let result = in_flight.await;
        self.settle(generation, &result);
        result
    }

    /// Forgets the remembered result so the next `get()` fetches again.
    ///
    /// Callers already waiting on an in-flight fetch still receive its
    /// result, but that result is not stored.
    pub fn invalidate(&self) {
        let mut inner = self.lock();
        inner.generation += 1;
        inner.slot = Slot::Empty;
        tracing::debug!(cache = self.name, "Cache invalidated");
    }

    /// Returns the current state of the cache.
    pub fn state(&self) -> CacheState {
        match self.lock().slot {
            Slot::Empty => CacheState::Empty,
            Slot::Pending(_) => CacheState::Pending,
            Slot::Ready(_) => CacheState::Ready,
        }
    }

    fn start_or_join(&self) -> Lookup<T> {
        let mut inner = self.lock();

        if let Slot::Ready(value) = &inner.slot {
            tracing::trace!(cache = self.name, "Cache hit");
            return Lookup::Hit(value.clone());
        }

        if let Slot::Pending(in_flight) = &inner.slot {
            tracing::trace!(cache = self.name, "Joining in-flight fetch");
            return Lookup::Wait {
                generation: inner.generation,
                in_flight: in_flight.clone(),
            };
        }

        tracing::trace!(cache = self.name, "Cache miss, starting fetch");
        let in_flight = (self.fetch)().shared();
        inner.generation += 1;
        inner.slot = Slot::Pending(in_flight.clone());
        Lookup::Wait {
            generation: inner.generation,
            in_flight,
        }
    }

    fn settle(&self, generation: u64, result: &Result<T>) {
        let mut inner = self.lock();

        if inner.generation != generation {
            tracing::debug!(cache = self.name, "Discarding result of stale fetch");
            return;
        }
        // Another waiter on the same fetch already settled it.
        if !matches!(inner.slot, Slot::Pending(_)) {
            return;
        }

        inner.slot = match result {
            Ok(value) => Slot::Ready(value.clone()),
            Err(err) => {
                tracing::debug!(cache = self.name, error = %err, "Fetch failed, not caching");
                Slot::Empty
            }
        };
    }

    fn lock(&self) -> MutexGuard<'_, Inner<T>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T> fmt::Debug for SharedCache<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedCache")
            .field("name", &self.name)
            .field("state", &self.state())
            .finish()
    }
}

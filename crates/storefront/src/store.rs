//! The store: one state tree, one dispatch entry point.
//!
//! # Architecture
//!
//! - [`Store`] is a cheaply cloneable handle; clones share the same tree
//! - [`Store::dispatch`] runs the root reducer under a lock, commits the new
//!   tree and notifies every [`Subscriber`] before the lock is released, so
//!   subscribers observe transitions in dispatch order
//! - Subscribers are fixed at construction

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::debug;

use crate::action::Action;
use crate::api::ApiClient;
use crate::config::ClientConfig;
use crate::error::{Result, add_breadcrumb};
use crate::persistence::{PersistenceSubscriber, hydrate};
use crate::state::{AppState, reduce};
use crate::storage::{FileStore, KeyValueStore};

/// Observer of committed transitions.
///
/// Called with the store lock held: implementations must not dispatch or
/// read the store, and should return quickly.
pub trait Subscriber: Send + Sync {
    /// `state` is the tree after `action` was applied.
    fn notify(&self, action: &Action, state: &AppState);
}

/// Shared client state plus the API client action creators use.
#[derive(Clone)]
pub struct Store {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    state: Mutex<AppState>,
    api: ApiClient,
    subscribers: Vec<Box<dyn Subscriber>>,
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("api", &self.inner.api)
            .field("subscribers", &self.inner.subscribers.len())
            .finish_non_exhaustive()
    }
}

impl Store {
    /// Store with the default tree and no mirror.
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self::builder(api).build()
    }

    /// Store hydrated from `mirror` that writes its mirrored keys back to it.
    #[must_use]
    pub fn with_mirror(api: ApiClient, mirror: Arc<dyn KeyValueStore>) -> Self {
        Self::builder(api).mirror(mirror).build()
    }

    /// Store over the file mirror in `config.state_dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if the state directory cannot be created or the
    /// mirror file is unreadable.
    pub fn open(config: &ClientConfig) -> Result<Self> {
        let mirror = FileStore::open(&config.state_dir)?;
        Ok(Self::with_mirror(ApiClient::new(config), Arc::new(mirror)))
    }

    #[must_use]
    pub fn builder(api: ApiClient) -> StoreBuilder {
        StoreBuilder {
            api,
            state: None,
            mirror: None,
            subscribers: Vec::new(),
        }
    }

    /// Apply `action` to the tree and notify subscribers.
    pub fn dispatch(&self, action: Action) {
        let kind = action.kind();
        let mut state = self.inner.state.lock();

        let next = reduce(std::mem::take(&mut *state), &action);
        *state = next;

        debug!(action = kind, "Dispatched action");
        let level = if action.is_failure() {
            sentry::Level::Warning
        } else {
            sentry::Level::Info
        };
        add_breadcrumb("action", kind, level, None);

        for subscriber in &self.inner.subscribers {
            subscriber.notify(&action, &state);
        }
    }

    /// Snapshot of the whole tree.
    #[must_use]
    pub fn state(&self) -> AppState {
        self.inner.state.lock().clone()
    }

    /// Read part of the tree without cloning the rest.
    pub fn select<T>(&self, selector: impl FnOnce(&AppState) -> T) -> T {
        selector(&self.inner.state.lock())
    }

    /// Bearer token of the signed-in user.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.select(|state| state.token().map(str::to_string))
    }

    #[must_use]
    pub fn api(&self) -> &ApiClient {
        &self.inner.api
    }
}

/// Builder for a [`Store`] with a custom initial tree or extra subscribers.
pub struct StoreBuilder {
    api: ApiClient,
    state: Option<AppState>,
    mirror: Option<Arc<dyn KeyValueStore>>,
    subscribers: Vec<Box<dyn Subscriber>>,
}

impl StoreBuilder {
    /// Start from `state` instead of the default tree. Mirror hydration is
    /// applied on top.
    #[must_use]
    pub fn state(mut self, state: AppState) -> Self {
        self.state = Some(state);
        self
    }

    /// Hydrate from `mirror` and persist mirrored keys to it.
    #[must_use]
    pub fn mirror(mut self, mirror: Arc<dyn KeyValueStore>) -> Self {
        self.mirror = Some(mirror);
        self
    }

    #[must_use]
    pub fn subscriber(mut self, subscriber: impl Subscriber + 'static) -> Self {
        self.subscribers.push(Box::new(subscriber));
        self
    }

    #[must_use]
    pub fn build(self) -> Store {
        let mut state = self.state.unwrap_or_default();
        let mut subscribers = self.subscribers;

        if let Some(mirror) = self.mirror {
            hydrate(mirror.as_ref(), &mut state);
            subscribers.insert(0, Box::new(PersistenceSubscriber::new(mirror)));
        }

        Store {
            inner: Arc::new(StoreInner {
                state: Mutex::new(state),
                api: self.api,
                subscribers,
            }),
        }
    }
}

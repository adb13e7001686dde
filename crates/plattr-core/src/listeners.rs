//! Scoped event subscriptions.
//!
//! Host events (hardware back, focus changes, viewport resizes) are delivered
//! through a [`ListenerRegistry`]. Registering returns a [`Subscription`]
//! guard; the handler stays live until the guard is dropped, so a component
//! that subscribes on mount releases its listener on unmount.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock, Weak};

type Handler<E> = Arc<dyn Fn(&E) + Send + Sync>;

struct Inner<E> {
    next_id: AtomicU64,
    handlers: RwLock<HashMap<u64, Handler<E>>>,
}

/// Shared registry of handlers for events of type `E`.
pub struct ListenerRegistry<E> {
    inner: Arc<Inner<E>>,
}

impl<E> Clone for ListenerRegistry<E> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<E> Default for ListenerRegistry<E> {
    fn default() -> Self {
        Self {
            inner: Arc::new(Inner {
                next_id: AtomicU64::new(0),
                handlers: RwLock::new(HashMap::new()),
            }),
        }
    }
}

impl<E: 'static> ListenerRegistry<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler`; it receives events until the returned guard is dropped.
    #[must_use = "dropping the subscription immediately unregisters the handler"]
    pub fn register<F>(&self, handler: F) -> Subscription
    where
        F: Fn(&E) + Send + Sync + 'static,
    {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        self.inner
            .handlers
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(id, Arc::new(handler));
        tracing::trace!(id, "listener registered");

        let weak: Weak<Inner<E>> = Arc::downgrade(&self.inner);
        Subscription {
            release: Some(Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner
                        .handlers
                        .write()
                        .unwrap_or_else(|e| e.into_inner())
                        .remove(&id);
                    tracing::trace!(id, "listener released");
                }
            })),
        }
    }

    /// Deliver `event` to every live handler. Returns how many were called.
    pub fn dispatch(&self, event: &E) -> usize {
        // Snapshot so handlers may register/unregister without deadlocking.
        let handlers: Vec<Handler<E>> = self
            .inner
            .handlers
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .values()
            .cloned()
            .collect();
        for handler in &handlers {
            handler(event);
        }
        handlers.len()
    }

    pub fn len(&self) -> usize {
        self.inner
            .handlers
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Guard for a registered handler. Dropping it unregisters the handler.
pub struct Subscription {
    release: Option<Box<dyn FnOnce() + Send>>,
}

impl Subscription {
    /// Unregister now. Calling it again, or dropping afterwards, is a no-op.
    pub fn unsubscribe(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }

    pub fn is_active(&self) -> bool {
        self.release.is_some()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}

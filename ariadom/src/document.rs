//! Document-level event listeners.
//!
//! A widget that needs to observe events outside its own subtree (clicks
//! elsewhere on screen, for instance) registers a listener here. Registration
//! hands back a [`ListenerGuard`]; the listener lives exactly as long as the
//! guard, so tying the guard to a widget's mounted lifetime releases the
//! listener on unmount no matter how teardown happens.

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, Weak};

use crate::event::{Event, EventKind};

type Handler = Arc<dyn Fn(&Event) + Send + Sync>;

struct Listener {
    id: u64,
    kind: EventKind,
    handler: Handler,
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<Listener>,
}

/// Registry of document-level listeners. Clones share the same registry.
#[derive(Clone, Default)]
pub struct Document {
    registry: Arc<RwLock<Registry>>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Listen for every dispatched event of `kind`.
    pub fn add_listener<F>(&self, kind: EventKind, handler: F) -> ListenerGuard
    where
        F: Fn(&Event) + Send + Sync + 'static,
    {
        let mut registry = self
            .registry
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.push(Listener {
            id,
            kind,
            handler: Arc::new(handler),
        });
        log::debug!("[document] added {:?} listener {}", kind, id);

        ListenerGuard {
            id,
            registry: Arc::downgrade(&self.registry),
        }
    }

    /// Deliver `event` to every listener registered for its kind.
    /// Returns the number of listeners invoked.
    ///
    /// Handlers run after the registry lock is released, so a handler may
    /// add or drop listeners itself.
    pub fn dispatch(&self, event: &Event) -> usize {
        let kind = event.kind();
        let handlers: Vec<Handler> = self
            .registry
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .listeners
            .iter()
            .filter(|l| l.kind == kind)
            .map(|l| Arc::clone(&l.handler))
            .collect();

        for handler in &handlers {
            handler(event);
        }
        handlers.len()
    }

    /// Number of live listeners.
    pub fn listener_count(&self) -> usize {
        self.registry
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .listeners
            .len()
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

/// Keeps a document listener registered. Dropping it removes the listener.
#[must_use = "the listener is removed as soon as the guard is dropped"]
#[derive(Debug)]
pub struct ListenerGuard {
    id: u64,
    registry: Weak<RwLock<Registry>>,
}

impl ListenerGuard {
    pub fn id(&self) -> u64 {
        self.id
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        // The document may already be gone; nothing to release then
        let Some(registry) = self.registry.upgrade() else {
            return;
        };
        let removed = {
            let mut registry = registry.write().unwrap_or_else(PoisonError::into_inner);
            registry
                .listeners
                .iter()
                .position(|l| l.id == self.id)
                .map(|index| registry.listeners.remove(index))
        };
        // Handler captures are dropped outside the lock
        if removed.is_some() {
            log::debug!("[document] removed listener {}", self.id);
        }
        drop(removed);
    }
}

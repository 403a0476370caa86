//! Shared theme preference store
//!
//! One `ThemeStore` lives for the whole session and is cloned into every
//! component that styles itself. Clones share state. All access happens on
//! the UI thread, so the store is built on `Rc` rather than locks.
//!
//! A toggle flips the scheme and then calls every subscriber before
//! returning. Within one notification cycle every reader of
//! [`ThemeStore::current`] sees the same value: if a subscriber toggles the
//! store while being notified, that toggle is queued and applied after the
//! cycle finishes, still inside the outermost `toggle` call.

use crate::palette::Palette;
use crate::scheme::ColorScheme;
use slotmap::{new_key_type, SlotMap};
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

new_key_type! {
    /// Identifier of a registered subscriber
    pub struct ListenerId;
}

type Listener = Rc<RefCell<dyn FnMut(ColorScheme)>>;

struct StoreInner {
    scheme: Cell<ColorScheme>,
    listeners: RefCell<SlotMap<ListenerId, Listener>>,
    notifying: Cell<bool>,
    deferred_toggles: Cell<u32>,
}

/// Session-wide light/dark preference with synchronous notification
#[derive(Clone)]
pub struct ThemeStore {
    inner: Rc<StoreInner>,
}

impl ThemeStore {
    pub fn new(initial: ColorScheme) -> Self {
        Self {
            inner: Rc::new(StoreInner {
                scheme: Cell::new(initial),
                listeners: RefCell::new(SlotMap::with_key()),
                notifying: Cell::new(false),
                deferred_toggles: Cell::new(0),
            }),
        }
    }

    /// The current scheme
    pub fn current(&self) -> ColorScheme {
        self.inner.scheme.get()
    }

    /// Palette for the current scheme
    pub fn palette(&self) -> Palette {
        Palette::for_scheme(self.current())
    }

    /// Flip between light and dark and notify every subscriber
    pub fn toggle(&self) {
        if self.inner.notifying.get() {
            let queued = self.inner.deferred_toggles.get() + 1;
            self.inner.deferred_toggles.set(queued);
            tracing::debug!(queued, "toggle during notification deferred");
            return;
        }

        self.flip_and_notify();
        while self.inner.deferred_toggles.get() > 0 {
            self.inner
                .deferred_toggles
                .set(self.inner.deferred_toggles.get() - 1);
            self.flip_and_notify();
        }
    }

    /// Register a listener called with the new scheme after each toggle
    ///
    /// The listener stays registered until the returned [`Subscription`] is
    /// unsubscribed or dropped.
    pub fn subscribe(&self, listener: impl FnMut(ColorScheme) + 'static) -> Subscription {
        let listener: Listener = Rc::new(RefCell::new(listener));
        let id = self.inner.listeners.borrow_mut().insert(listener);
        tracing::trace!(?id, "theme subscriber added");
        Subscription {
            store: Rc::downgrade(&self.inner),
            id,
            active: true,
        }
    }

    /// Number of registered subscribers
    pub fn subscriber_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }

    fn flip_and_notify(&self) {
        let next = self.current().toggle();
        self.inner.scheme.set(next);
        tracing::debug!(scheme = %next, "theme toggled");

        let snapshot: Vec<(ListenerId, Listener)> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .map(|(id, listener)| (id, listener.clone()))
            .collect();

        let _guard = NotifyGuard::enter(&self.inner.notifying);
        for (id, listener) in snapshot {
            // Skip listeners removed earlier in this cycle
            if !self.inner.listeners.borrow().contains_key(id) {
                continue;
            }
            match listener.try_borrow_mut() {
                Ok(mut callback) => (&mut *callback)(next),
                Err(_) => tracing::warn!(?id, "theme subscriber re-entered, skipped"),
            }
        }
    }
}

impl Default for ThemeStore {
    fn default() -> Self {
        Self::new(ColorScheme::default())
    }
}

/// Resets the notifying flag even if a listener panics
struct NotifyGuard<'a> {
    flag: &'a Cell<bool>,
}

impl<'a> NotifyGuard<'a> {
    fn enter(flag: &'a Cell<bool>) -> Self {
        flag.set(true);
        Self { flag }
    }
}

impl Drop for NotifyGuard<'_> {
    fn drop(&mut self) {
        self.flag.set(false);
    }
}

/// Handle returned by [`ThemeStore::subscribe`]
///
/// Unsubscribing is idempotent and safe after the store itself is gone.
#[must_use = "dropping a Subscription unsubscribes the listener"]
pub struct Subscription {
    store: Weak<StoreInner>,
    id: ListenerId,
    active: bool,
}

impl Subscription {
    pub fn id(&self) -> ListenerId {
        self.id
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Stop receiving notifications
    pub fn unsubscribe(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        if let Some(inner) = self.store.upgrade() {
            inner.listeners.borrow_mut().remove(self.id);
            tracing::trace!(id = ?self.id, "theme subscriber removed");
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

//! The mounted consumer of notifications.

use std::cell::RefCell;
use std::rc::Rc;

use pulse_shared::NotificationConfig;
use pulse_shared::types::NotificationId;
use tracing::warn;

use super::bridge::NotificationBridge;
use super::store::ToastStore;
use super::types::{Toast, ToastRequest};

/// UI region that owns a [`ToastStore`] and receives notifications while
/// mounted on a [`NotificationBridge`].
///
/// The registered handler only holds a weak reference to the store, so a
/// binding left behind by a dropped region delivers nowhere.
#[derive(Debug, Clone)]
pub struct ToastRegion {
    store: Rc<RefCell<ToastStore>>,
}

impl ToastRegion {
    /// Creates a region with an empty store.
    #[must_use]
    pub fn new(store: ToastStore) -> Self {
        Self {
            store: Rc::new(RefCell::new(store)),
        }
    }

    /// Creates a region from configuration.
    #[must_use]
    pub fn with_config(config: &NotificationConfig) -> Self {
        Self::new(ToastStore::with_config(config))
    }

    /// Binds this region's store to `bridge`.
    pub fn mount(&self, bridge: &NotificationBridge) {
        let store = Rc::downgrade(&self.store);
        bridge.register_handler(move |request| {
            let Some(store) = store.upgrade() else {
                return;
            };
            match store.try_borrow_mut() {
                Ok(mut store) => {
                    store.add(request);
                }
                Err(_) => warn!(title = ?request.title, "Toast store busy, notification dropped"),
            }
        });
    }

    /// Unbinds `bridge` and destroys the store's toasts. Call on teardown.
    ///
    /// Returns the toasts that were still active, in display order.
    pub fn unmount(&self, bridge: &NotificationBridge) -> Vec<Toast> {
        bridge.unregister_handler();
        self.drain()
    }

    /// Adds a toast directly and returns its identifier.
    pub fn add(&self, request: ToastRequest) -> NotificationId {
        self.store.borrow_mut().add(request)
    }

    /// Patches a toast. Returns false if it no longer exists.
    pub fn update(&self, id: NotificationId, patch: ToastRequest) -> bool {
        self.store.borrow_mut().update(id, patch)
    }

    /// Removes a toast. No-op if absent.
    pub fn dismiss(&self, id: NotificationId) -> Option<Toast> {
        self.store.borrow_mut().dismiss(id)
    }

    /// Removes every toast.
    pub fn dismiss_all(&self) {
        self.store.borrow_mut().dismiss_all();
    }

    /// Snapshot of the active toasts in display order.
    #[must_use]
    pub fn toasts(&self) -> Vec<Toast> {
        self.store.borrow().toasts().to_vec()
    }

    /// Removes and returns every active toast.
    pub fn drain(&self) -> Vec<Toast> {
        let mut store = self.store.borrow_mut();
        let toasts = store.toasts().to_vec();
        store.dismiss_all();
        toasts
    }
}

impl Default for ToastRegion {
    fn default() -> Self {
        Self::new(ToastStore::default())
    }
}
